//! Configuration options for the formatter.
//!
//! The only knob is the indent unit: the whitespace string applied once per
//! nesting level. It's empty by default (no indentation), two spaces via
//! [`FormatOptions::indented`], or any fixed string via
//! [`FormatOptions::with_indent_unit`]. The unit is chosen once per render
//! and constant for the whole document.
//!
//! ## Examples
//!
//! ```rust
//! use pretty_toml::{table, to_string_with_options, FormatOptions};
//!
//! let doc = table! { "a" => 1 };
//!
//! // Flat output
//! let options = FormatOptions::new();
//! assert_eq!(to_string_with_options(&doc, &options).unwrap(), "a = 1\n");
//!
//! // Tab-indented nested tables
//! let options = FormatOptions::new().with_indent_unit("\t");
//! ```

/// Two spaces, the unit the `--indent` CLI flag selects.
const DEFAULT_INDENT_UNIT: &str = "  ";

/// Configuration options for formatting.
///
/// # Examples
///
/// ```rust
/// use pretty_toml::FormatOptions;
///
/// // No indentation (default)
/// let options = FormatOptions::new();
/// assert_eq!(options.indent_unit(), "");
///
/// // Two-space indentation per nesting level
/// let options = FormatOptions::indented();
/// assert_eq!(options.indent_unit(), "  ");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatOptions {
    indent_unit: String,
}

impl FormatOptions {
    /// Creates default options: no indentation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that indent nested content by two spaces per level.
    #[must_use]
    pub fn indented() -> Self {
        FormatOptions {
            indent_unit: DEFAULT_INDENT_UNIT.to_string(),
        }
    }

    /// Sets the indent unit to an arbitrary whitespace string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pretty_toml::FormatOptions;
    ///
    /// let options = FormatOptions::new().with_indent_unit("\t");
    /// assert_eq!(options.indent_unit(), "\t");
    /// ```
    #[must_use]
    pub fn with_indent_unit(mut self, unit: impl Into<String>) -> Self {
        self.indent_unit = unit.into();
        self
    }

    /// The whitespace string applied once per nesting level.
    #[must_use]
    pub fn indent_unit(&self) -> &str {
        &self.indent_unit
    }
}
