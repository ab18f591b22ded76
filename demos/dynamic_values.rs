//! Build documents dynamically with the `table!` and `value!` macros.
//!
//! Run with: `cargo run --example dynamic_values`

use pretty_toml::{table, to_string, value};

fn main() -> pretty_toml::Result<()> {
    let doc = table! {
        "title" => "dynamic",
        "numbers" => value!([1, 2, 3]),
        "database" => table! {
            "server" => "192.168.1.1",
            "enabled" => true,
        },
        "points" => value!([
            { "x" => 1, "y" => 2 },
            { "x" => 7, "y" => 8 },
        ]),
    };

    // points renders as [[points]] sections, database as a [database] table
    print!("{}", to_string(&doc)?);
    Ok(())
}
