//! Your first pretty_toml experience: format a derived struct.
//!
//! Run with: `cargo run --example simple`

use pretty_toml::to_string_indented;
use serde::Serialize;

#[derive(Serialize)]
struct Owner {
    name: String,
    active: bool,
}

#[derive(Serialize)]
struct Config {
    title: String,
    port: u16,
    owner: Owner,
}

fn main() -> pretty_toml::Result<()> {
    let config = Config {
        title: "example".to_string(),
        port: 8080,
        owner: Owner {
            name: "Alice".to_string(),
            active: true,
        },
    };

    // Keys come out sorted, values aligned, nested tables indented.
    print!("{}", to_string_indented(&config)?);
    Ok(())
}
