//! Dynamic value representation for TOML documents.
//!
//! This module provides the [`Value`] enum which represents any value the
//! formatter can render. It's the in-memory document model: a parsed TOML
//! file becomes a tree of `Value`s rooted at a [`Table`](crate::Table).
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use pretty_toml::Value;
//!
//! // From primitives
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! // Using the table! macro
//! use pretty_toml::table;
//! let doc = table! {
//!     "name" => "Alice",
//!     "age" => 30,
//! };
//! assert_eq!(doc.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```
//!
//! ### Canonical literal form
//!
//! `Display` renders a value exactly as it appears on the right-hand side of
//! a formatted `key = value` line:
//!
//! ```rust
//! use pretty_toml::Value;
//!
//! assert_eq!(Value::from("hello").to_string(), "\"hello\"");
//! assert_eq!(Value::from(123).to_string(), "123");
//! assert_eq!(Value::Array(vec![]).to_string(), "[]");
//! ```

use crate::Table;
use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use std::fmt::{self, Write as _};

/// A dynamically-typed representation of any TOML value.
///
/// This enum is the document model the formatter consumes. It can represent
/// every value the upstream parser produces plus `Null`, which stands in for
/// values that have no TOML representation (see [`Value::Null`]).
///
/// # Examples
///
/// ```rust
/// use pretty_toml::Value;
///
/// let num = Value::Integer(42);
/// let text = Value::String("hello".to_string());
///
/// assert!(num.is_integer());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// An absent value.
    ///
    /// TOML has no null literal; this variant renders as the two-character
    /// placeholder `''`. That is a deliberate lossy fallback, not valid
    /// TOML — reparsing it yields an empty string.
    #[default]
    Null,
    Bool(bool),
    /// TOML integers are 64-bit signed.
    Integer(i64),
    Float(f64),
    String(String),
    /// An offset-aware timestamp. The offset is preserved as parsed, so a
    /// `-07:00` datetime is not normalized to UTC.
    Datetime(DateTime<FixedOffset>),
    /// An ordered sequence. Either entirely non-table elements (a "simple
    /// array", rendered inline) or entirely tables (an array of tables,
    /// rendered as repeated `[[path]]` sections). Mixing the two is an
    /// invariant violation the formatter rejects.
    Array(Vec<Value>),
    Table(Table),
}

impl Value {
    /// Returns the name of this value's kind, for diagnostics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pretty_toml::Value;
    ///
    /// assert_eq!(Value::Integer(1).kind(), "integer");
    /// assert_eq!(Value::Array(vec![]).kind(), "array");
    /// ```
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Datetime(_) => "datetime",
            Value::Array(_) => "array",
            Value::Table(_) => "table",
        }
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Returns `true` if the value is a float.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a datetime.
    #[inline]
    #[must_use]
    pub const fn is_datetime(&self) -> bool {
        matches!(self, Value::Datetime(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is a table.
    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Value::Table(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pretty_toml::Value;
    ///
    /// assert_eq!(Value::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Value::from("42").as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is a float, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a datetime, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            Value::Datetime(dt) => Some(dt),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is a table, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000C}' => f.write_str("\\f")?,
            c if c < '\u{0020}' || c == '\u{007F}' => write!(f, "\\u{:04X}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// Renders the canonical literal form of a value.
///
/// - Strings are double-quoted with TOML basic-string escaping.
/// - Floats use the shortest decimal form that round-trips, keeping a `.0`
///   on integral values; non-finite floats render as `inf`, `-inf`, `nan`.
/// - Datetimes are RFC 3339 with trailing zero sub-second digits elided.
/// - `Null` renders as the `''` placeholder (not valid TOML; see
///   [`Value::Null`]).
/// - Arrays render their elements recursively, comma-separated in brackets.
///   An array of tables never reaches this renderer — the formatter
///   intercepts it — so a table here indicates a caller bug and renders as a
///   diagnostic placeholder.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("''"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => {
                if x.is_nan() {
                    f.write_str("nan")
                } else if x.is_infinite() {
                    f.write_str(if *x > 0.0 { "inf" } else { "-inf" })
                } else {
                    write!(f, "{:?}", x)
                }
            }
            Value::String(s) => write_quoted(f, s),
            Value::Datetime(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::Array(arr) => {
                write!(
                    f,
                    "[{}]",
                    arr.iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
            Value::Table(_) => write!(f, "<<unsupported {} value>>", self.kind()),
        }
    }
}

// Marker name that lets the in-crate ValueSerializer recognize a datetime
// and keep it a datetime instead of degrading it to a string. Foreign
// serializers treat the newtype transparently and see a plain RFC 3339
// string.
pub(crate) const DATETIME_NEWTYPE: &str = "$pretty_toml::private::Datetime";

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Float(f) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Datetime(dt) => serializer.serialize_newtype_struct(
                DATETIME_NEWTYPE,
                &dt.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            ),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Table(table) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(table.len()))?;
                for (k, v) in table.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

/// Conversion from the upstream parser's value type.
///
/// Full offset datetimes convert losslessly. Local datetimes, dates, and
/// times — which have no offset to preserve — fall back to their string
/// form and will render quoted.
impl From<toml::Value> for Value {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::String(s) => Value::String(s),
            toml::Value::Integer(i) => Value::Integer(i),
            toml::Value::Float(f) => Value::Float(f),
            toml::Value::Boolean(b) => Value::Bool(b),
            toml::Value::Datetime(dt) => {
                let text = dt.to_string();
                match DateTime::parse_from_rfc3339(&text) {
                    Ok(parsed) => Value::Datetime(parsed),
                    Err(_) => Value::String(text),
                }
            }
            toml::Value::Array(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            toml::Value::Table(entries) => Value::Table(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

// TryFrom implementations for extracting primitives from a Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(i) => Ok(i),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(i) => Ok(i as f64),
            Value::Float(f) => Ok(f),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {}",
                value.kind()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {}",
                value.kind()
            ))),
        }
    }
}

// From implementations for creating a Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::Datetime(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Datetime(value.fixed_offset())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Table> for Value {
    fn from(value: Table) -> Self {
        Value::Table(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_scalar_literals() {
        assert_eq!(Value::from("hello").to_string(), "\"hello\"");
        assert_eq!(Value::Integer(123).to_string(), "123");
        assert_eq!(Value::Float(123.45).to_string(), "123.45");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Null.to_string(), "''");
    }

    #[test]
    fn test_float_literals_are_valid_toml() {
        // Integral floats keep a fractional part so they reparse as floats
        assert_eq!(Value::Float(1.0).to_string(), "1.0");
        assert_eq!(Value::Float(-0.5).to_string(), "-0.5");
        assert_eq!(Value::Float(f64::NAN).to_string(), "nan");
        assert_eq!(Value::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Value::Float(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn test_string_escaping() {
        assert_eq!(Value::from("a\"b\\c").to_string(), "\"a\\\"b\\\\c\"");
        assert_eq!(
            Value::from("line1\nline2\t.").to_string(),
            "\"line1\\nline2\\t.\""
        );
        assert_eq!(Value::from("\u{0001}").to_string(), "\"\\u0001\"");
    }

    #[test]
    fn test_datetime_literal() {
        let dt = Utc.with_ymd_and_hms(2023, 1, 10, 15, 4, 5).unwrap();
        assert_eq!(Value::from(dt).to_string(), "2023-01-10T15:04:05Z");
    }

    #[test]
    fn test_datetime_preserves_offset() {
        let dt = DateTime::parse_from_rfc3339("1979-05-27T00:32:00-07:00").unwrap();
        assert_eq!(Value::Datetime(dt).to_string(), "1979-05-27T00:32:00-07:00");
    }

    #[test]
    fn test_array_literals() {
        assert_eq!(Value::Array(vec![]).to_string(), "[]");
        let arr = Value::Array(vec![Value::Integer(1), Value::from("a"), Value::Bool(true)]);
        assert_eq!(arr.to_string(), "[1, \"a\", true]");
    }

    #[test]
    fn test_nested_array_literal() {
        let arr = Value::Array(vec![
            Value::Array(vec![Value::Integer(1), Value::Integer(2)]),
            Value::Array(vec![]),
        ]);
        assert_eq!(arr.to_string(), "[[1, 2], []]");
    }

    #[test]
    fn test_from_toml_value() {
        let parsed: toml::Value = toml::from_str(
            "i = 3\nf = 1.5\ns = \"x\"\nb = true\nd = 2023-01-10T15:04:05Z\narr = [1, 2]\n[t]\nk = 1\n",
        )
        .unwrap();
        let value = Value::from(parsed);
        let table = value.as_table().expect("root should be a table");
        assert_eq!(table.get("i"), Some(&Value::Integer(3)));
        assert_eq!(table.get("f"), Some(&Value::Float(1.5)));
        assert_eq!(table.get("s"), Some(&Value::from("x")));
        assert_eq!(table.get("b"), Some(&Value::Bool(true)));
        assert!(table.get("d").is_some_and(Value::is_datetime));
        assert!(table.get("arr").is_some_and(Value::is_array));
        assert!(table.get("t").is_some_and(Value::is_table));
    }

    #[test]
    fn test_from_toml_local_date_falls_back_to_string() {
        let parsed: toml::Value = toml::from_str("d = 1979-05-27\n").unwrap();
        let value = Value::from(parsed);
        let table = value.as_table().unwrap();
        assert_eq!(table.get("d"), Some(&Value::from("1979-05-27")));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::Bool(true).kind(), "boolean");
        assert_eq!(Value::Integer(1).kind(), "integer");
        assert_eq!(Value::Float(1.0).kind(), "float");
        assert_eq!(Value::from("x").kind(), "string");
        assert_eq!(Value::Array(vec![]).kind(), "array");
        assert_eq!(Value::Table(Table::new()).kind(), "table");
    }

    #[test]
    fn test_tryfrom_extractors() {
        assert_eq!(i64::try_from(Value::Integer(42)).unwrap(), 42);
        assert!(i64::try_from(Value::from("x")).is_err());
        assert_eq!(f64::try_from(Value::Float(3.5)).unwrap(), 3.5);
        assert_eq!(f64::try_from(Value::Integer(2)).unwrap(), 2.0);
        assert!(bool::try_from(Value::Integer(1)).is_err());
        assert_eq!(String::try_from(Value::from("hi")).unwrap(), "hi");
    }

    #[test]
    fn test_from_primitives() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(42i32), Value::Integer(42));
        assert_eq!(Value::from(42u16), Value::Integer(42));
        assert_eq!(Value::from(3.5f64), Value::Float(3.5));
        assert_eq!(Value::from("test"), Value::String("test".to_string()));
    }

    #[test]
    fn test_accessors() {
        let value = Value::Integer(42);
        assert!(value.is_integer());
        assert!(!value.is_null());
        assert_eq!(value.as_i64(), Some(42));
        assert_eq!(value.as_str(), None);

        let mut table = Table::new();
        table.insert("k".to_string(), Value::Null);
        let value = Value::Table(table);
        assert!(value.is_table());
        assert_eq!(value.as_table().map(Table::len), Some(1));
    }
}
