//! # pretty_toml
//!
//! A canonical TOML formatter: keys sorted alphabetically, values type-aware
//! formatted, `=` columns aligned, sections separated by blank lines, and
//! indentation optionally applied per nesting depth.
//!
//! ## Key Features
//!
//! - **Deterministic output**: the same document always renders to the same
//!   bytes, regardless of input key order
//! - **Aligned columns**: all `=` signs in one block of simple keys line up
//! - **Optional indentation**: nested tables indent by a fixed unit per level
//! - **Serde Compatible**: format any `T: Serialize` via
//!   `#[derive(Serialize)]`
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pretty-toml = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Formatting a struct
//!
//! ```rust
//! use serde::Serialize;
//! use pretty_toml::to_string;
//!
//! #[derive(Serialize)]
//! struct Config {
//!     name: String,
//!     port: u16,
//! }
//!
//! let config = Config { name: "demo".to_string(), port: 8080 };
//! let toml = to_string(&config).unwrap();
//! assert_eq!(toml, "name = \"demo\"\nport = 8080\n");
//! ```
//!
//! ### Reformatting TOML text
//!
//! ```rust
//! use pretty_toml::format_str;
//!
//! let messy = "number=100\nkey='value'\n";
//! let clean = format_str(messy).unwrap();
//! assert_eq!(clean, "key    = \"value\"\nnumber = 100\n");
//! ```
//!
//! ### Building documents dynamically
//!
//! ```rust
//! use pretty_toml::{table, to_string_indented};
//!
//! let doc = table! {
//!     "title" => "example",
//!     "owner" => table! { "name" => "Alice" },
//! };
//!
//! let toml = to_string_indented(&doc).unwrap();
//! assert_eq!(toml, "title = \"example\"\n\n[owner]\n  name = \"Alice\"\n");
//! ```
//!
//! ## Output shape
//!
//! Within one table level the formatter always writes simple `key = value`
//! pairs first, then arrays of tables (`[[path]]` sections), then nested
//! tables (`[path]` sections), each group alphabetical by key. Section
//! headers carry the full dotted path from the document root, so the output
//! reparses to the same document and re-formatting it is a fixed point.
//!
//! An array that mixes table and non-table elements has no TOML rendering
//! and fails the whole render with an error naming the offending key path.
//!
//! ## Examples
//!
//! See the `demos/` directory for focused, runnable examples:
//!
//! - **`simple.rs`** - format a derived struct
//! - **`reformat.rs`** - canonicalize existing TOML text
//! - **`dynamic_values.rs`** - build documents with `table!` / `value!`
//! - **`custom_options.rs`** - indent units beyond the default
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod fmt;
pub mod macros;
pub mod options;
pub mod ser;
pub mod table;
pub mod value;

pub use error::{Error, Result};
pub use fmt::{classify, Formatter, Sections};
pub use options::FormatOptions;
pub use ser::ValueSerializer;
pub use table::Table;
pub use value::Value;

use serde::Serialize;
use std::io;

/// Formats any `T: Serialize` as canonical TOML with no indentation.
///
/// The value must serialize to a table at the document root.
///
/// # Examples
///
/// ```rust
/// use pretty_toml::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let toml = to_string(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(toml, "x = 1\ny = 2\n");
/// ```
///
/// # Errors
///
/// Returns an error if the root is not a table, or if the document violates
/// the array-homogeneity invariant.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &FormatOptions::new())
}

/// Formats any `T: Serialize` as canonical TOML, indenting nested content by
/// two spaces per level.
///
/// # Errors
///
/// Returns an error if the root is not a table, or if the document violates
/// the array-homogeneity invariant.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_indented<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &FormatOptions::indented())
}

/// Formats any `T: Serialize` as canonical TOML with custom options.
///
/// # Examples
///
/// ```rust
/// use pretty_toml::{table, to_string_with_options, FormatOptions};
///
/// let doc = table! { "t" => table! { "k" => 1 } };
/// let options = FormatOptions::new().with_indent_unit("\t");
/// let toml = to_string_with_options(&doc, &options).unwrap();
/// assert_eq!(toml, "[t]\n\tk = 1\n");
/// ```
///
/// # Errors
///
/// Returns an error if the root is not a table, or if the document violates
/// the array-homogeneity invariant.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &FormatOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let document = match to_value(value)? {
        Value::Table(document) => document,
        other => return Err(Error::RootNotTable { kind: other.kind() }),
    };
    let mut formatter = Formatter::new(options);
    formatter.format_document(&document)?;
    Ok(formatter.into_inner())
}

/// Converts any `T: Serialize` to a [`Value`].
///
/// Useful for inspecting or assembling documents before formatting them.
///
/// # Examples
///
/// ```rust
/// use pretty_toml::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_table());
/// ```
///
/// # Errors
///
/// Returns an error for values TOML cannot represent, such as unsigned
/// integers above `i64::MAX` or maps with non-string keys.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Formats any `T: Serialize` as canonical TOML into a writer.
///
/// # Examples
///
/// ```rust
/// use pretty_toml::{table, to_writer};
///
/// let doc = table! { "k" => 1 };
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"k = 1\n");
/// ```
///
/// # Errors
///
/// Returns an error if formatting fails or the writer rejects the bytes; in
/// the latter case nothing useful has been written and the sink error is
/// reported as-is, wrapped as [`Error::Io`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &FormatOptions::new())
}

/// Formats any `T: Serialize` as canonical TOML into a writer, with custom
/// options.
///
/// # Errors
///
/// Returns an error if formatting fails or the writer rejects the bytes.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(
    mut writer: W,
    value: &T,
    options: &FormatOptions,
) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let output = to_string_with_options(value, options)?;
    writer
        .write_all(output.as_bytes())
        .map_err(|e| Error::io(e.to_string()))?;
    Ok(())
}

/// Parses TOML text and renders it back in canonical form, unindented.
///
/// Reformatting the result again yields byte-identical output.
///
/// # Examples
///
/// ```rust
/// use pretty_toml::format_str;
///
/// assert_eq!(format_str("b=2\na=1\n").unwrap(), "a = 1\nb = 2\n");
/// assert_eq!(format_str("").unwrap(), "");
/// ```
///
/// # Errors
///
/// Returns [`Error::Parse`] when the input is not valid TOML; the message
/// carries the parser's position information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_str(input: &str) -> Result<String> {
    format_str_with_options(input, &FormatOptions::new())
}

/// Parses TOML text and renders it back in canonical form with custom
/// options.
///
/// # Errors
///
/// Returns [`Error::Parse`] when the input is not valid TOML.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn format_str_with_options(input: &str, options: &FormatOptions) -> Result<String> {
    let parsed: toml::Table = toml::from_str(input).map_err(|e| Error::parse(e.to_string()))?;
    let document: Table = parsed
        .into_iter()
        .map(|(key, value)| (key, Value::from(value)))
        .collect();
    let mut formatter = Formatter::new(options);
    formatter.format_document(&document)?;
    Ok(formatter.into_inner())
}
