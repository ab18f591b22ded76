//! Indent units beyond the default: tabs, four spaces, whatever fits.
//!
//! Run with: `cargo run --example custom_options`

use pretty_toml::{table, to_string_with_options, FormatOptions};

fn main() -> pretty_toml::Result<()> {
    let doc = table! {
        "server" => table! {
            "ip" => "1.1.1.1",
            "ports" => table! { "http" => 80, "https" => 443 },
        },
    };

    for (label, options) in [
        ("flat", FormatOptions::new()),
        ("two spaces", FormatOptions::indented()),
        ("tabs", FormatOptions::new().with_indent_unit("\t")),
        ("four spaces", FormatOptions::new().with_indent_unit("    ")),
    ] {
        println!("--- {label} ---");
        print!("{}", to_string_with_options(&doc, &options)?);
        println!();
    }
    Ok(())
}
