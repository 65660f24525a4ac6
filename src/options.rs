//! Configuration options for SGF output.
//!
//! [`SgfOptions`] controls how the serializer lays out text:
//!
//! - **compact** (default): everything on one line, the canonical form
//! - **pretty**: one node per line, nested variations indented
//! - **color**: ANSI highlighting for terminals, for display only
//!
//! Compact and pretty output both parse back to the same tree, since whitespace
//! outside property values is insignificant.
//!
//! ## Examples
//!
//! ```rust
//! use sgf_tree::{from_str, to_string_with_options, SgfOptions};
//!
//! let collection = from_str("(;FF[4](;B[aa])(;B[bb]))").unwrap();
//!
//! let text = to_string_with_options(&collection, SgfOptions::pretty()).unwrap();
//! assert_eq!(text, "(;FF[4]\n  (;B[aa])\n  (;B[bb]))");
//! assert_eq!(from_str(&text).unwrap(), collection);
//! ```

/// Configuration options for SGF serialization.
///
/// # Examples
///
/// ```rust
/// use sgf_tree::SgfOptions;
///
/// // Canonical single-line output
/// let options = SgfOptions::new();
///
/// // One node per line with 4-space variation indent
/// let options = SgfOptions::pretty().with_indent(4);
///
/// // Highlighted output for a terminal
/// let options = SgfOptions::colored();
/// assert!(options.color && options.pretty);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SgfOptions {
    pub indent: usize,
    pub pretty: bool,
    pub color: bool,
}

impl Default for SgfOptions {
    fn default() -> Self {
        SgfOptions {
            indent: 2,
            pretty: false,
            color: false,
        }
    }
}

impl SgfOptions {
    /// Creates default options (compact, no color, 2-space indent).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sgf_tree::SgfOptions;
    ///
    /// let options = SgfOptions::new();
    /// assert_eq!(options.indent, 2);
    /// assert!(!options.pretty);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for line-per-node output.
    #[must_use]
    pub fn pretty() -> Self {
        SgfOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Creates options for highlighted, line-per-node terminal output.
    #[must_use]
    pub fn colored() -> Self {
        SgfOptions {
            pretty: true,
            color: true,
            ..Default::default()
        }
    }

    /// Sets the number of spaces per variation level.
    ///
    /// Only affects pretty output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enables or disables line-per-node output.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Enables or disables ANSI highlighting.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
