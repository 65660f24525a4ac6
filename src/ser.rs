//! SGF serialization.
//!
//! This module provides the [`Serializer`] that renders nodes, game trees and
//! collections back into SGF text, and the [`WriteSgf`] trait implemented by
//! everything that can be written.
//!
//! ## Overview
//!
//! - A node is `;` followed by each property in insertion order, every value
//!   in its own `[...]` block.
//! - A game tree is `(`, its nodes, its parenthesized variations, then `)`.
//! - A collection is its trees one after the other.
//! - Inside values, `\` and `]` are escaped with a leading `\`, the exact
//!   inverse of what the lexer removes.
//!
//! Parsing the output yields a tree equal to the input.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use sgf_tree::{sgf_node, to_string, GameTree};
//!
//! let tree = GameTree::from_sequence(vec![
//!     sgf_node! { "FF" => 4, "KM" => 6.5 },
//!     sgf_node! { "C" => "see [a]\\b" },
//! ]);
//! assert_eq!(to_string(&tree).unwrap(), "(;FF[4]KM[6.5];C[see [a\\]\\\\b])");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use sgf_tree::{Serializer, SgfOptions, Node, WriteSgf};
//!
//! let mut node = Node::new();
//! node.set("B", "dd");
//!
//! let mut serializer = Serializer::new(SgfOptions::new());
//! node.write_sgf(&mut serializer).unwrap();
//! assert_eq!(serializer.into_inner(), ";B[dd]");
//! ```

use crate::{Collection, Error, GameTree, Node, Result, SgfOptions, Value};
use std::borrow::Cow;

const RESET: &str = "\x1b[0m";
const DELIMITER_STYLE: &str = "\x1b[2m";
const IDENTIFIER_STYLE: &str = "\x1b[1;34m";
const VALUE_STYLE: &str = "\x1b[32m";

/// Values that can be rendered as SGF text.
pub trait WriteSgf {
    /// Appends the SGF rendering of `self` to `serializer`.
    ///
    /// # Errors
    ///
    /// Returns an error for content the grammar cannot express, such as an
    /// invalid identifier or a game tree without nodes.
    fn write_sgf(&self, serializer: &mut Serializer) -> Result<()>;
}

/// The SGF serializer.
///
/// Created via [`Serializer::new`]; the rendered text is taken out with
/// [`Serializer::into_inner`].
pub struct Serializer {
    output: String,
    options: SgfOptions,
}

impl Serializer {
    pub fn new(options: SgfOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn styled(&mut self, style: &str, text: &str) {
        if self.options.color {
            self.output.push_str(style);
            self.output.push_str(text);
            self.output.push_str(RESET);
        } else {
            self.output.push_str(text);
        }
    }

    fn write_line_break(&mut self, depth: usize) {
        if self.options.pretty {
            self.output.push('\n');
            let width = depth * self.options.indent;
            self.output.extend(std::iter::repeat(' ').take(width));
        }
    }

    /// Writes one `[value]` block.
    pub fn write_value(&mut self, value: &Value) {
        let text = value.text();
        let escaped = escape(&text);
        self.styled(DELIMITER_STYLE, "[");
        self.styled(VALUE_STYLE, &escaped);
        self.styled(DELIMITER_STYLE, "]");
    }

    /// Writes `;` and the node's properties.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] for identifiers the lexer could not
    /// read back, and an error for properties left without values.
    pub fn write_node(&mut self, node: &Node) -> Result<()> {
        self.styled(DELIMITER_STYLE, ";");
        for (id, values) in node {
            if !is_valid_identifier(id) {
                return Err(Error::invalid_identifier(id));
            }
            if values.is_empty() {
                return Err(Error::custom(format!("property {} has no values", id)));
            }
            self.styled(IDENTIFIER_STYLE, id);
            for value in values {
                self.write_value(value);
            }
        }
        Ok(())
    }

    /// Writes a parenthesized game tree with all its variations.
    ///
    /// Variations are walked with an explicit stack, so arbitrarily deep
    /// nesting does not exhaust the call stack.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyGameTree`] if this tree or any variation has no
    /// node in its sequence.
    pub fn write_tree(&mut self, tree: &GameTree) -> Result<()> {
        enum Step<'t> {
            Open(&'t GameTree, usize),
            Close,
        }

        let mut steps = vec![Step::Open(tree, 0)];
        while let Some(step) = steps.pop() {
            let (tree, depth) = match step {
                Step::Open(tree, depth) => (tree, depth),
                Step::Close => {
                    self.styled(DELIMITER_STYLE, ")");
                    continue;
                }
            };
            if tree.sequence.is_empty() {
                return Err(Error::EmptyGameTree);
            }

            if depth > 0 {
                self.write_line_break(depth);
            }
            self.styled(DELIMITER_STYLE, "(");
            for (i, node) in tree.sequence.iter().enumerate() {
                if i > 0 {
                    self.write_line_break(depth);
                }
                self.write_node(node)?;
            }

            steps.push(Step::Close);
            steps.extend(
                tree.variations
                    .iter()
                    .rev()
                    .map(|variation| Step::Open(variation, depth + 1)),
            );
        }
        Ok(())
    }

    /// Writes every tree of a collection in order.
    pub fn write_trees(&mut self, trees: &[GameTree]) -> Result<()> {
        for (i, tree) in trees.iter().enumerate() {
            if i > 0 {
                self.write_line_break(0);
            }
            self.write_tree(tree)?;
        }
        Ok(())
    }
}

/// Escapes `\` and `]` with a leading `\`.
///
/// Borrows the input when nothing needs escaping.
///
/// # Examples
///
/// ```rust
/// use sgf_tree::ser::escape;
///
/// assert_eq!(escape("aa"), "aa");
/// assert_eq!(escape("a]b\\"), "a\\]b\\\\");
/// ```
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(|ch: char| ch == '\\' || ch == ']') {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        if ch == '\\' || ch == ']' {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    Cow::Owned(escaped)
}

/// Returns `true` for identifiers the lexer reads as one token:
/// an uppercase letter followed by uppercase letters or digits.
#[must_use]
pub fn is_valid_identifier(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            chars.all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit())
        }
        _ => false,
    }
}

impl WriteSgf for Value {
    fn write_sgf(&self, serializer: &mut Serializer) -> Result<()> {
        serializer.write_value(self);
        Ok(())
    }
}

impl WriteSgf for Node {
    fn write_sgf(&self, serializer: &mut Serializer) -> Result<()> {
        serializer.write_node(self)
    }
}

impl WriteSgf for GameTree {
    fn write_sgf(&self, serializer: &mut Serializer) -> Result<()> {
        serializer.write_tree(self)
    }
}

impl WriteSgf for Collection {
    fn write_sgf(&self, serializer: &mut Serializer) -> Result<()> {
        serializer.write_trees(self.trees())
    }
}

impl WriteSgf for [GameTree] {
    fn write_sgf(&self, serializer: &mut Serializer) -> Result<()> {
        serializer.write_trees(self)
    }
}

impl WriteSgf for Vec<GameTree> {
    fn write_sgf(&self, serializer: &mut Serializer) -> Result<()> {
        serializer.write_trees(self)
    }
}

impl<T: WriteSgf + ?Sized> WriteSgf for &T {
    fn write_sgf(&self, serializer: &mut Serializer) -> Result<()> {
        (**self).write_sgf(serializer)
    }
}
