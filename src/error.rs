//! Error types for TOML formatting.
//!
//! This module provides the error taxonomy of the formatter:
//!
//! - **Invariant violations**: an array mixing tables and non-tables at some
//!   key path — unrecoverable for that render, reported with the full dotted
//!   path of the offending key.
//! - **Type-shape violations**: a value a section writer expected to be a
//!   table turns out not to be. A defensive guard; not reachable through the
//!   public entry points.
//! - **Section context**: errors from nested levels are wrapped with the
//!   failing section's full path on the way up.
//! - **Parse and I/O failures**: from the upstream TOML parser and the
//!   output sink.
//!
//! ## Examples
//!
//! ```rust
//! use pretty_toml::{table, to_string, Value};
//!
//! let doc = table! {
//!     "bad_arr" => Value::Array(vec![
//!         Value::Table(pretty_toml::Table::new()),
//!         Value::from("not a table"),
//!     ]),
//! };
//!
//! let err = to_string(&doc).unwrap_err();
//! assert!(err.to_string().contains("arrays cannot mix tables and non-tables"));
//! assert!(err.to_string().contains("bad_arr"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while formatting a document.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// An array mixes table and non-table elements.
    #[error("key '{path}': arrays cannot mix tables and non-tables")]
    MixedArray {
        /// Full dotted path of the offending key.
        path: String,
    },

    /// A value expected to be a table has some other kind.
    ///
    /// The classifier guarantees this cannot happen through the public entry
    /// points; it guards section writers against being fed unclassified data.
    #[error("internal error: item at '{path}' is not a table (got {kind})")]
    NotATable {
        path: String,
        /// The kind actually observed, from [`Value::kind`](crate::Value::kind).
        kind: &'static str,
    },

    /// The document root handed to the formatter is not a table.
    #[error("document root must be a table, found {kind}")]
    RootNotTable { kind: &'static str },

    /// Context wrapper: a nested table failed to format.
    #[error("formatting table '{path}': {source}")]
    TableSection {
        path: String,
        #[source]
        source: Box<Error>,
    },

    /// Context wrapper: an array-of-tables element failed to format.
    #[error("formatting array table '{path}' index {index}: {source}")]
    ArrayTableSection {
        path: String,
        index: usize,
        #[source]
        source: Box<Error>,
    },

    /// The upstream TOML parser rejected the input.
    #[error("parsing TOML: {0}")]
    Parse(String),

    /// The output sink could not accept bytes.
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message, used by the serde bridge.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a mixed-array invariant violation for the given dotted path.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pretty_toml::Error;
    ///
    /// let err = Error::mixed_array("server.hosts");
    /// assert!(err.to_string().contains("key 'server.hosts'"));
    /// ```
    pub fn mixed_array(path: impl Into<String>) -> Self {
        Error::MixedArray { path: path.into() }
    }

    /// Creates a type-shape violation for the given path and observed kind.
    pub fn not_a_table(path: impl Into<String>, kind: &'static str) -> Self {
        Error::NotATable {
            path: path.into(),
            kind,
        }
    }

    /// Wraps a nested error with the full path of the failing table section.
    pub fn in_table(path: impl Into<String>, source: Error) -> Self {
        Error::TableSection {
            path: path.into(),
            source: Box::new(source),
        }
    }

    /// Wraps a nested error with the path and element index of the failing
    /// array-of-tables section.
    pub fn in_array_table(path: impl Into<String>, index: usize, source: Error) -> Self {
        Error::ArrayTableSection {
            path: path.into(),
            index,
            source: Box::new(source),
        }
    }

    /// Creates a parse error carrying the upstream parser's message.
    pub fn parse(msg: impl Into<String>) -> Self {
        Error::Parse(msg.into())
    }

    /// Creates an I/O error for output-sink failures.
    pub fn io(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pretty_toml::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
