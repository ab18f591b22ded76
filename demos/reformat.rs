//! Canonicalize existing TOML text: sorted keys, aligned `=` columns.
//!
//! Run with: `cargo run --example reformat`

use pretty_toml::format_str;

fn main() -> pretty_toml::Result<()> {
    let messy = r#"
zebra=3
apple =   1

[ owner ]
name='Alice'
dob = 1979-05-27T07:32:00-08:00
"#;

    let clean = format_str(messy)?;
    print!("{clean}");

    // Reformatting the output changes nothing
    assert_eq!(format_str(&clean)?, clean);
    Ok(())
}
