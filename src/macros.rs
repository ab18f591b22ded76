//! Macros for building documents literally.
//!
//! [`table!`](crate::table) builds a [`Table`](crate::Table) from
//! `key => value` pairs; [`value!`](crate::value) builds a single
//! [`Value`](crate::Value) with a JSON-like literal syntax. They are mostly
//! useful in tests and examples.

/// Builds a [`Table`](crate::Table) from `key => value` pairs.
///
/// Values are converted with `Value::from`, so primitives, strings, nested
/// `Table`s, and already-built `Value`s all work on the right-hand side.
///
/// # Examples
///
/// ```rust
/// use pretty_toml::{table, to_string};
///
/// let doc = table! {
///     "name" => "Alice",
///     "port" => 8080,
///     "server" => table! { "active" => true },
/// };
///
/// let out = to_string(&doc).unwrap();
/// assert!(out.starts_with("name = \"Alice\"\nport = 8080\n"));
/// ```
#[macro_export]
macro_rules! table {
    () => {
        $crate::Table::new()
    };

    ( $($key:expr => $value:expr),+ $(,)? ) => {{
        let mut table = $crate::Table::new();
        $(
            table.insert(($key).to_string(), $crate::Value::from($value));
        )+
        table
    }};
}

/// Builds a [`Value`](crate::Value) with a JSON-like literal syntax.
///
/// # Examples
///
/// ```rust
/// use pretty_toml::{value, Value};
///
/// assert_eq!(value!(null), Value::Null);
/// assert_eq!(value!([1, 2, 3]).as_array().map(Vec::len), Some(3));
///
/// let doc = value!({
///     "name" => "Alice",
///     "tags" => ["toml", "formatter"],
/// });
/// assert!(doc.is_table());
/// ```
#[macro_export]
macro_rules! value {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty array
    ([]) => {
        $crate::Value::Array(vec![])
    };

    // Handle non-empty array
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    // Handle empty table
    ({}) => {
        $crate::Value::Table($crate::Table::new())
    };

    // Handle non-empty table
    ({ $($key:literal => $val:tt),* $(,)? }) => {{
        let mut table = $crate::Table::new();
        $(
            table.insert($key.to_string(), $crate::value!($val));
        )*
        $crate::Value::Table(table)
    }};

    // Fallback for any other expression
    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Table, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(false), Value::Bool(false));
        assert_eq!(value!(42), Value::Integer(42));
        assert_eq!(value!(3.5), Value::Float(3.5));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_arrays() {
        assert_eq!(value!([]), Value::Array(vec![]));

        let arr = value!([1, 2, 3]);
        assert_eq!(
            arr,
            Value::Array(vec![
                Value::Integer(1),
                Value::Integer(2),
                Value::Integer(3),
            ])
        );

        let nested = value!([[1], []]);
        assert_eq!(
            nested,
            Value::Array(vec![
                Value::Array(vec![Value::Integer(1)]),
                Value::Array(vec![]),
            ])
        );
    }

    #[test]
    fn test_value_macro_tables() {
        assert_eq!(value!({}), Value::Table(Table::new()));

        let doc = value!({
            "name" => "Alice",
            "age" => 30,
        });
        let table = doc.as_table().expect("expected table");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("name"), Some(&Value::String("Alice".to_string())));
        assert_eq!(table.get("age"), Some(&Value::Integer(30)));
    }

    #[test]
    fn test_table_macro() {
        assert_eq!(table!(), Table::new());

        let doc = table! {
            "inner" => table! { "k" => 1 },
            "flag" => false,
        };
        assert_eq!(doc.len(), 2);
        assert!(doc.get("inner").is_some_and(Value::is_table));
        assert_eq!(doc.get("flag"), Some(&Value::Bool(false)));
    }
}
