//! The serde-to-document bridge.
//!
//! This module provides [`ValueSerializer`], a [`serde::Serializer`] whose
//! output is a [`Value`] tree. It is what lets the crate-root functions
//! accept any `T: Serialize` — a config struct, a `HashMap`, dynamic
//! `serde_json`-style data — and format it as TOML.
//!
//! ## Usage
//!
//! Most users should use [`to_value`](crate::to_value) or the `to_string`
//! family in the crate root:
//!
//! ```rust
//! use pretty_toml::to_value;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 1, y: 2 }).unwrap();
//! assert!(value.is_table());
//! ```
//!
//! ## Mapping notes
//!
//! - `Option::None` and unit become [`Value::Null`], which renders as the
//!   `''` placeholder.
//! - Unsigned integers above `i64::MAX` are an error: TOML integers are
//!   64-bit signed and silently converting would lose the value.
//! - Map keys must serialize as strings; booleans and integers are
//!   stringified, anything else is an error.

use crate::{Error, Result, Table, Value};
use serde::{ser, Serialize};

/// A serializer that builds a [`Value`] instead of text.
///
/// # Examples
///
/// ```rust
/// use pretty_toml::{ser::ValueSerializer, Value};
/// use serde::Serialize;
///
/// let value = 42i32.serialize(ValueSerializer).unwrap();
/// assert_eq!(value, Value::Integer(42));
/// ```
pub struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeTable;
    type SerializeStruct = SerializeTable;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Integer(v))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        self.serialize_i64(v as i64)
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        i64::try_from(v).map(Value::Integer).map_err(|_| {
            Error::custom(format!("integer {} does not fit in a TOML integer", v))
        })
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        self.serialize_f64(v as f64)
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Array(
            v.iter().map(|byte| Value::Integer(*byte as i64)).collect(),
        ))
    }

    fn serialize_none(self) -> Result<Value> {
        self.serialize_unit()
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let serialized = value.serialize(ValueSerializer)?;
        // A Value::Datetime marks itself with a private newtype name so it
        // survives the round trip through this serializer.
        if name == crate::value::DATETIME_NEWTYPE {
            if let Value::String(text) = &serialized {
                if let Ok(parsed) = chrono::DateTime::parse_from_rfc3339(text) {
                    return Ok(Value::Datetime(parsed));
                }
            }
        }
        Ok(serialized)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut table = Table::with_capacity(1);
        table.insert(variant.to_string(), value.serialize(ValueSerializer)?);
        Ok(Value::Table(table))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SerializeVec {
            elements: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            elements: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(SerializeTable {
            table: Table::with_capacity(len.unwrap_or(0)),
            pending_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            table: Table::with_capacity(len),
        })
    }
}

pub struct SerializeVec {
    elements: Vec<Value>,
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.elements.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.elements))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    elements: Vec<Value>,
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.elements.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut table = Table::with_capacity(1);
        table.insert(self.variant.to_string(), Value::Array(self.elements));
        Ok(Value::Table(table))
    }
}

pub struct SerializeTable {
    table: Table,
    pending_key: Option<String>,
}

impl ser::SerializeMap for SerializeTable {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.pending_key = Some(map_key(key.serialize(ValueSerializer)?)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called before serialize_key"))?;
        self.table.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Table(self.table))
    }
}

impl ser::SerializeStruct for SerializeTable {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.table
            .insert(key.to_string(), value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Table(self.table))
    }
}

pub struct SerializeStructVariant {
    variant: &'static str,
    table: Table,
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.table
            .insert(key.to_string(), value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        let mut outer = Table::with_capacity(1);
        outer.insert(self.variant.to_string(), Value::Table(self.table));
        Ok(Value::Table(outer))
    }
}

// TOML keys are strings; stringify the unambiguous scalar kinds and reject
// the rest.
fn map_key(key: Value) -> Result<String> {
    match key {
        Value::String(s) => Ok(s),
        Value::Integer(i) => Ok(i.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(Error::custom(format!(
            "map key must be a string, found {}",
            other.kind()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_struct_becomes_table() {
        let value = Point { x: 1, y: 2 }.serialize(ValueSerializer).unwrap();
        let table = value.as_table().expect("expected table");
        assert_eq!(table.get("x"), Some(&Value::Integer(1)));
        assert_eq!(table.get("y"), Some(&Value::Integer(2)));
    }

    #[test]
    fn test_scalars() {
        assert_eq!(true.serialize(ValueSerializer).unwrap(), Value::Bool(true));
        assert_eq!(
            "hi".serialize(ValueSerializer).unwrap(),
            Value::String("hi".to_string())
        );
        assert_eq!(3.5f64.serialize(ValueSerializer).unwrap(), Value::Float(3.5));
        assert_eq!(
            Option::<i32>::None.serialize(ValueSerializer).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn test_value_round_trips_through_serializer() {
        let dt = chrono::DateTime::parse_from_rfc3339("2023-01-10T15:04:05Z").unwrap();
        let original = Value::Table(crate::table! {
            "when" => Value::Datetime(dt),
            "n" => 1,
            "nothing" => Value::Null,
        });
        let round_tripped = original.serialize(ValueSerializer).unwrap();
        assert_eq!(round_tripped, original);
    }

    #[test]
    fn test_u64_overflow_is_an_error() {
        assert_eq!(
            u64::MAX.serialize(ValueSerializer).unwrap_err().to_string(),
            format!("integer {} does not fit in a TOML integer", u64::MAX)
        );
        assert_eq!(
            (i64::MAX as u64).serialize(ValueSerializer).unwrap(),
            Value::Integer(i64::MAX)
        );
    }

    #[test]
    fn test_sequences_and_maps() {
        let value = vec![1, 2, 3].serialize(ValueSerializer).unwrap();
        assert_eq!(
            value,
            Value::Array(vec![
                Value::Integer(1),
                Value::Integer(2),
                Value::Integer(3),
            ])
        );

        let mut map = BTreeMap::new();
        map.insert("a", 1);
        map.insert("b", 2);
        let value = map.serialize(ValueSerializer).unwrap();
        let table = value.as_table().expect("expected table");
        assert_eq!(table.get("a"), Some(&Value::Integer(1)));
        assert_eq!(table.get("b"), Some(&Value::Integer(2)));
    }

    #[test]
    fn test_integer_map_keys_are_stringified() {
        let mut map = BTreeMap::new();
        map.insert(1, "one");
        let value = map.serialize(ValueSerializer).unwrap();
        let table = value.as_table().expect("expected table");
        assert_eq!(table.get("1"), Some(&Value::String("one".to_string())));
    }

    #[test]
    fn test_enum_variants() {
        #[derive(Serialize)]
        enum Shape {
            Unit,
            Newtype(i32),
            Tuple(i32, i32),
            Struct { r: i32 },
        }

        assert_eq!(
            Shape::Unit.serialize(ValueSerializer).unwrap(),
            Value::String("Unit".to_string())
        );

        let newtype = Shape::Newtype(7).serialize(ValueSerializer).unwrap();
        assert_eq!(
            newtype.as_table().and_then(|t| t.get("Newtype")),
            Some(&Value::Integer(7))
        );

        let tuple = Shape::Tuple(1, 2).serialize(ValueSerializer).unwrap();
        assert_eq!(
            tuple.as_table().and_then(|t| t.get("Tuple")),
            Some(&Value::Array(vec![Value::Integer(1), Value::Integer(2)]))
        );

        let strukt = Shape::Struct { r: 9 }.serialize(ValueSerializer).unwrap();
        let inner = strukt
            .as_table()
            .and_then(|t| t.get("Struct"))
            .and_then(Value::as_table)
            .expect("expected nested table");
        assert_eq!(inner.get("r"), Some(&Value::Integer(9)));
    }
}
