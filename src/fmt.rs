//! The formatting engine.
//!
//! This module contains the recursive tree-to-text renderer:
//!
//! - [`classify`]: partitions one table level into simple pairs, sub-tables,
//!   and arrays of tables, rejecting mixed arrays.
//! - [`Formatter`]: owns the output buffer and drives one render invocation,
//!   writing the three section kinds in fixed order (simple pairs, then
//!   arrays of tables, then tables) and recursing into nested levels.
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use pretty_toml::{table, to_string};
//!
//! let doc = table! {
//!     "number" => 100,
//!     "key" => "value",
//! };
//! assert_eq!(to_string(&doc).unwrap(), "key    = \"value\"\nnumber = 100\n");
//! ```
//!
//! ## Direct Formatter Usage
//!
//! ```rust
//! use pretty_toml::{table, FormatOptions, Formatter};
//!
//! let doc = table! { "a" => 1 };
//! let mut formatter = Formatter::new(&FormatOptions::indented());
//! formatter.format_document(&doc).unwrap();
//! assert_eq!(formatter.into_inner(), "a = 1\n");
//! ```

use crate::{Error, FormatOptions, Result, Table, Value};

/// One table level, partitioned by the key classifier.
///
/// Keys within each category are sorted alphabetically; array-of-tables
/// element order is preserved as-is.
#[derive(Debug, Default)]
pub struct Sections<'a> {
    /// Keys whose values render inline as `key = value`.
    pub simple: Vec<(&'a str, &'a Value)>,
    /// Keys holding arrays whose elements are all tables.
    pub array_tables: Vec<(&'a str, &'a [Value])>,
    /// Keys holding nested tables.
    pub tables: Vec<(&'a str, &'a Table)>,
    /// Longest simple key at this level, for `=` alignment.
    pub max_key_len: usize,
}

fn dotted(path: &[&str], key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        let mut full = path.join(".");
        full.push('.');
        full.push_str(key);
        full
    }
}

/// Partitions the keys of one table level into the three section kinds.
///
/// Keys are visited in alphabetical order, which makes the maximum-key-length
/// scan deterministic. A non-empty array classifies as an array of tables
/// when every element is a table, and as a simple value when no element is;
/// any mix of the two fails with [`Error::MixedArray`] naming the full
/// dotted path. An empty array cannot be inspected further and always
/// classifies as simple (it renders as `[]`).
///
/// # Errors
///
/// Returns [`Error::MixedArray`] for an array mixing tables and non-tables.
pub fn classify<'a>(table: &'a Table, path: &[&str]) -> Result<Sections<'a>> {
    let mut entries: Vec<(&str, &Value)> = table.iter().map(|(k, v)| (k.as_str(), v)).collect();
    entries.sort_unstable_by_key(|(key, _)| *key);

    let mut sections = Sections::default();
    for (key, value) in entries {
        match value {
            Value::Array(items) if !items.is_empty() => {
                let table_count = items.iter().filter(|item| item.is_table()).count();
                if table_count == items.len() {
                    sections.array_tables.push((key, items.as_slice()));
                } else if table_count == 0 {
                    sections.max_key_len = sections.max_key_len.max(key.len());
                    sections.simple.push((key, value));
                } else {
                    return Err(Error::mixed_array(dotted(path, key)));
                }
            }
            Value::Table(nested) => sections.tables.push((key, nested)),
            _ => {
                sections.max_key_len = sections.max_key_len.max(key.len());
                sections.simple.push((key, value));
            }
        }
    }
    Ok(sections)
}

/// The tree renderer.
///
/// Owns the output buffer for one render invocation, together with the
/// indent unit and the section-boundary state used to place blank lines.
/// Create one per document; the buffer is recovered with
/// [`Formatter::into_inner`].
pub struct Formatter {
    out: String,
    indent_unit: String,
    // True while the output ends at a section boundary: nothing written yet,
    // or a separator blank line was just inserted.
    separated: bool,
}

impl Formatter {
    pub fn new(options: &FormatOptions) -> Self {
        Formatter {
            out: String::with_capacity(256),
            indent_unit: options.indent_unit().to_string(),
            separated: true,
        }
    }

    pub fn into_inner(self) -> String {
        self.out
    }

    /// Renders a whole document into the buffer.
    ///
    /// Keys are emitted bare, exactly as they appear in the document; a key
    /// that is not a valid TOML bare key yields output the parser may reject
    /// on reparse. An empty document produces no output at all.
    ///
    /// # Errors
    ///
    /// Fails fast on the first invariant violation, wrapped with the dotted
    /// path of every enclosing section. On error the buffer contents are
    /// meaningless and should be discarded.
    pub fn format_document(&mut self, document: &Table) -> Result<()> {
        let mut path = Vec::new();
        self.format_table(document, &mut path, "")
    }

    fn format_table<'a>(
        &mut self,
        table: &'a Table,
        path: &mut Vec<&'a str>,
        indent: &str,
    ) -> Result<()> {
        let sections = classify(table, path)?;
        self.write_simple_pairs(&sections.simple, sections.max_key_len, indent);
        self.write_array_tables(&sections.array_tables, path, indent)?;
        self.write_tables(&sections.tables, path, indent)?;
        Ok(())
    }

    /// Inserts the blank-line separator before a section header, unless the
    /// output is empty or already sits at a boundary.
    fn begin_section(&mut self) {
        if !self.separated {
            self.out.push('\n');
            self.separated = true;
        }
    }

    fn write_simple_pairs(&mut self, pairs: &[(&str, &Value)], max_key_len: usize, indent: &str) {
        for &(key, value) in pairs {
            self.out.push_str(indent);
            self.out.push_str(key);
            for _ in key.len()..max_key_len {
                self.out.push(' ');
            }
            self.out.push_str(" = ");
            self.out.push_str(&value.to_string());
            self.out.push('\n');
            self.separated = false;
        }
    }

    fn write_array_tables<'a>(
        &mut self,
        groups: &[(&'a str, &'a [Value])],
        path: &mut Vec<&'a str>,
        indent: &str,
    ) -> Result<()> {
        for &(key, items) in groups {
            path.push(key);
            let header_path = path.join(".");
            let result = self.write_array_table_elements(&header_path, items, path, indent);
            path.pop();
            result?;
        }
        Ok(())
    }

    fn write_array_table_elements<'a>(
        &mut self,
        header_path: &str,
        items: &'a [Value],
        path: &mut Vec<&'a str>,
        indent: &str,
    ) -> Result<()> {
        for (index, item) in items.iter().enumerate() {
            let element = match item {
                Value::Table(element) => element,
                other => return Err(Error::not_a_table(header_path, other.kind())),
            };
            self.begin_section();
            self.out.push_str(indent);
            self.out.push_str("[[");
            self.out.push_str(header_path);
            self.out.push_str("]]\n");
            self.separated = false;

            let child_indent = format!("{indent}{}", self.indent_unit);
            self.format_table(element, path, &child_indent)
                .map_err(|source| Error::in_array_table(header_path, index, source))?;
        }
        Ok(())
    }

    fn write_tables<'a>(
        &mut self,
        tables: &[(&'a str, &'a Table)],
        path: &mut Vec<&'a str>,
        indent: &str,
    ) -> Result<()> {
        for &(key, nested) in tables {
            path.push(key);
            let header_path = path.join(".");

            self.begin_section();
            self.out.push_str(indent);
            self.out.push('[');
            self.out.push_str(&header_path);
            self.out.push_str("]\n");
            self.separated = false;

            let child_indent = format!("{indent}{}", self.indent_unit);
            let result = self
                .format_table(nested, path, &child_indent)
                .map_err(|source| Error::in_table(&header_path, source));
            path.pop();
            result?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table;

    fn render(doc: &Table, options: &FormatOptions) -> Result<String> {
        let mut formatter = Formatter::new(options);
        formatter.format_document(doc)?;
        Ok(formatter.into_inner())
    }

    #[test]
    fn test_simple_pairs_align_on_equals() {
        let doc = table! {
            "key" => "value",
            "number" => 100,
        };
        let out = render(&doc, &FormatOptions::new()).unwrap();
        assert_eq!(out, "key    = \"value\"\nnumber = 100\n");
    }

    #[test]
    fn test_table_section_with_indent() {
        let doc = table! {
            "a" => 1,
            "table" => table! {
                "b" => true,
                "c" => "inside",
            },
        };
        let out = render(&doc, &FormatOptions::indented()).unwrap();
        assert_eq!(out, "a = 1\n\n[table]\n  b = true\n  c = \"inside\"\n");
    }

    #[test]
    fn test_array_of_tables_with_indent() {
        let doc = table! {
            "arr" => Value::Array(vec![
                Value::Table(table! { "x" => 1 }),
                Value::Table(table! { "y" => 2, "z" => 3 }),
            ]),
        };
        let out = render(&doc, &FormatOptions::indented()).unwrap();
        assert_eq!(out, "[[arr]]\n  x = 1\n\n[[arr]]\n  y = 2\n  z = 3\n");
    }

    #[test]
    fn test_nested_tables_use_full_dotted_headers() {
        let doc = table! {
            "server" => table! {
                "ip" => "1.1.1.1",
                "ports" => table! { "http" => 80 },
            },
        };
        let out = render(&doc, &FormatOptions::new().with_indent_unit("\t")).unwrap();
        assert_eq!(
            out,
            "[server]\n\tip = \"1.1.1.1\"\n\n\t[server.ports]\n\t\thttp = 80\n"
        );
    }

    #[test]
    fn test_empty_document_renders_nothing() {
        let out = render(&Table::new(), &FormatOptions::indented()).unwrap();
        assert_eq!(out, "");
    }

    #[test]
    fn test_nested_empty_table_keeps_its_header() {
        let doc = table! {
            "empty" => Table::new(),
            "full" => table! { "k" => 1 },
        };
        let out = render(&doc, &FormatOptions::new()).unwrap();
        assert_eq!(out, "[empty]\n\n[full]\nk = 1\n");
    }

    #[test]
    fn test_key_order_is_alphabetical_within_each_kind() {
        let doc = table! {
            "zeta" => 1,
            "beta" => table! { "k" => 1 },
            "alpha" => table! { "k" => 2 },
            "mid" => Value::Array(vec![Value::Table(table! { "k" => 3 })]),
        };
        let out = render(&doc, &FormatOptions::new()).unwrap();
        // simple keys, then array-tables, then tables; alphabetical inside each
        assert_eq!(
            out,
            "zeta = 1\n\n[[mid]]\nk = 3\n\n[alpha]\nk = 2\n\n[beta]\nk = 1\n"
        );
    }

    #[test]
    fn test_alignment_is_per_level() {
        let doc = table! {
            "long_outer_key" => 1,
            "t" => table! { "a" => 1, "bb" => 2 },
        };
        let out = render(&doc, &FormatOptions::new()).unwrap();
        assert_eq!(out, "long_outer_key = 1\n\n[t]\na  = 1\nbb = 2\n");
    }

    #[test]
    fn test_classify_partitions_and_sorts() {
        let doc = table! {
            "b_table" => table! { "x" => 1 },
            "a_pair" => 1,
            "c_arr" => Value::Array(vec![Value::Table(Table::new())]),
            "longest_pair" => 2,
        };
        let sections = classify(&doc, &[]).unwrap();
        let simple: Vec<&str> = sections.simple.iter().map(|(k, _)| *k).collect();
        assert_eq!(simple, vec!["a_pair", "longest_pair"]);
        assert_eq!(sections.max_key_len, "longest_pair".len());
        assert_eq!(sections.array_tables.len(), 1);
        assert_eq!(sections.tables.len(), 1);
        assert_eq!(doc.sorted_keys(), vec!["a_pair", "b_table", "c_arr", "longest_pair"]);
    }

    #[test]
    fn test_classify_empty_array_is_simple() {
        let doc = table! { "arr" => Value::Array(vec![]) };
        let sections = classify(&doc, &[]).unwrap();
        assert_eq!(sections.simple.len(), 1);
        assert!(sections.array_tables.is_empty());

        let out = render(&doc, &FormatOptions::new()).unwrap();
        assert_eq!(out, "arr = []\n");
    }

    #[test]
    fn test_mixed_array_fails_with_dotted_path() {
        let doc = table! {
            "bad_arr" => Value::Array(vec![
                Value::Table(table! { "a" => 1 }),
                Value::from("not a map"),
                Value::Table(table! { "b" => 2 }),
            ]),
        };
        let err = render(&doc, &FormatOptions::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "key 'bad_arr': arrays cannot mix tables and non-tables"
        );
    }

    #[test]
    fn test_mixed_array_detection_is_order_independent() {
        // non-table first, table second: still an invariant violation
        let doc = table! {
            "bad_arr" => Value::Array(vec![
                Value::Integer(1),
                Value::Table(table! { "a" => 1 }),
            ]),
        };
        let err = render(&doc, &FormatOptions::new()).unwrap_err();
        assert!(matches!(err, Error::MixedArray { ref path } if path == "bad_arr"));
    }

    #[test]
    fn test_nested_error_is_wrapped_with_section_path() {
        let doc = table! {
            "server" => table! {
                "bad" => Value::Array(vec![
                    Value::Table(Table::new()),
                    Value::Integer(1),
                ]),
            },
        };
        let err = render(&doc, &FormatOptions::new()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("formatting table 'server':"), "{msg}");
        assert!(msg.contains("key 'server.bad'"), "{msg}");
    }

    #[test]
    fn test_error_inside_array_table_names_index() {
        let doc = table! {
            "arr" => Value::Array(vec![
                Value::Table(table! { "ok" => 1 }),
                Value::Table(table! {
                    "bad" => Value::Array(vec![Value::Table(Table::new()), Value::Null]),
                }),
            ]),
        };
        let err = render(&doc, &FormatOptions::new()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("formatting array table 'arr' index 1"), "{msg}");
        assert!(msg.contains("key 'arr.bad'"), "{msg}");
    }

    #[test]
    fn test_deeply_nested_paths_accumulate() {
        let doc = table! {
            "a" => table! {
                "b" => table! {
                    "c" => table! { "leaf" => true },
                },
            },
        };
        let out = render(&doc, &FormatOptions::indented()).unwrap();
        assert_eq!(
            out,
            "[a]\n\n  [a.b]\n\n    [a.b.c]\n      leaf = true\n"
        );
    }

    #[test]
    fn test_array_table_elements_preserve_order() {
        let doc = table! {
            "arr" => Value::Array(vec![
                Value::Table(table! { "n" => 3 }),
                Value::Table(table! { "n" => 1 }),
                Value::Table(table! { "n" => 2 }),
            ]),
        };
        let out = render(&doc, &FormatOptions::new()).unwrap();
        assert_eq!(out, "[[arr]]\nn = 3\n\n[[arr]]\nn = 1\n\n[[arr]]\nn = 2\n");
    }
}
