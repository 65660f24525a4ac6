//! # sgf_tree
//!
//! A reader and writer for the Smart Game Format (SGF).
//!
//! ## What is SGF?
//!
//! SGF is a text-only, tree-based format for recording games of two-player
//! board games such as Go. Besides the moves it stores annotations, board
//! markup and alternative lines of play (variations), which makes it the
//! common exchange format of game servers, editors and analysis tools.
//!
//! ## Key Features
//!
//! - **Faithful Round Trips**: Property order, value order and variation order
//!   are preserved; escaping is the exact inverse of unescaping
//! - **Editable Model**: [`Collection`], [`GameTree`] and [`Node`] are plain
//!   owned values that can be built or modified without a parser
//! - **Precise Errors**: Lexical and grammar violations carry line and column
//! - **FF[1]-FF[4]**: Identifier syntax of every format version is accepted
//! - **No Unsafe Code**: Written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use sgf_tree::{from_str, to_string};
//!
//! let collection = from_str("(;FF[4]KM[6.5];B[aa])").unwrap();
//! let tree = &collection[0];
//!
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree[0].first("KM").and_then(|v| v.as_f64()), Some(6.5));
//! assert_eq!(tree[1].first("B").unwrap().to_text(), "aa");
//!
//! assert_eq!(to_string(&collection).unwrap(), "(;FF[4]KM[6.5];B[aa])");
//! ```
//!
//! ### Building Trees
//!
//! ```rust
//! use sgf_tree::{from_str, sgf_node, to_string, GameTree};
//!
//! let mut tree = GameTree::from_sequence(vec![sgf_node! { "GM" => 1, "SZ" => 9 }]);
//! tree.push_variation(GameTree::from(sgf_node! { "B" => "ee", "C" => "tengen" }));
//! tree.push_variation(GameTree::from(sgf_node! { "B" => "cc" }));
//!
//! let text = to_string(&tree).unwrap();
//! assert_eq!(text, "(;GM[1]SZ[9](;B[ee]C[tengen])(;B[cc]))");
//! assert_eq!(from_str(&text).unwrap()[0], tree);
//! ```
//!
//! ### Values
//!
//! Parsed values are always text; numbers are interpreted on request. See
//! [`value`] for the details.
//!
//! ## Format Reference
//!
//! See the [`grammar`] module for the accepted syntax and error cases, and
//! the official description at <https://www.red-bean.com/sgf/>.
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable programs:
//!
//! - **`simple.rs`** - Parse, inspect and write back a record
//! - **`macro.rs`** - Building nodes with the sgf_node! macro
//! - **`variations.rs`** - Walking the main path and alternatives
//! - **`colored_output.rs`** - Pretty and highlighted terminal output
//! - **`json_export.rs`** - Exporting a record through serde
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod grammar;
pub mod lexer;
pub mod macros;
pub mod node;
pub mod options;
pub mod parser;
pub mod ser;
pub mod tree;
pub mod value;

pub use error::{Error, Result};
pub use lexer::{next_token, Token, TokenStream};
pub use node::{IntoValues, Node};
pub use options::SgfOptions;
pub use parser::{parse, Parser};
pub use ser::{Serializer, WriteSgf};
pub use tree::{Collection, GameTree, MainLine};
pub use value::{Number, Value};

use std::fs;
use std::io;
use std::path::Path;

/// Parse a string of SGF text into a [`Collection`].
///
/// # Examples
///
/// ```rust
/// use sgf_tree::from_str;
///
/// let collection = from_str("(;)").unwrap();
/// assert_eq!(collection.len(), 1);
/// assert!(collection[0][0].is_empty());
/// ```
///
/// # Errors
///
/// Returns [`Error::Lexical`] for illegal characters and [`Error::Parse`] for
/// text that does not follow the collection grammar. Error messages include
/// line and column information.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Collection> {
    parse(TokenStream::new(s))
}

/// Parse UTF-8 encoded SGF bytes into a [`Collection`].
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or not valid SGF.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Collection> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Read an I/O stream to its end and parse it as SGF.
///
/// # Examples
///
/// ```rust
/// use sgf_tree::from_reader;
/// use std::io::Cursor;
///
/// let collection = from_reader(Cursor::new(b"(;GM[1])")).unwrap();
/// assert_eq!(collection.len(), 1);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the content is not valid SGF.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Collection>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Serialize a node, tree or collection to canonical SGF text.
///
/// # Examples
///
/// ```rust
/// use sgf_tree::{sgf_node, to_string, GameTree};
///
/// let tree = GameTree::from(sgf_node! { "KM" => 6.5 });
/// assert_eq!(to_string(&tree).unwrap(), "(;KM[6.5])");
/// ```
///
/// # Errors
///
/// Returns an error for content the grammar cannot express: invalid property
/// identifiers and game trees without nodes.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + WriteSgf,
{
    to_string_with_options(value, SgfOptions::default())
}

/// Serialize to SGF text with one node per line and indented variations.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + WriteSgf,
{
    to_string_with_options(value, SgfOptions::pretty())
}

/// Serialize to SGF text with custom options.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: SgfOptions) -> Result<String>
where
    T: ?Sized + WriteSgf,
{
    let mut serializer = Serializer::new(options);
    value.write_sgf(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Serialize canonical SGF text into a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + WriteSgf,
{
    to_writer_with_options(writer, value, SgfOptions::default())
}

/// Serialize SGF text into a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: SgfOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + WriteSgf,
{
    let sgf_string = to_string_with_options(value, options)?;
    writer
        .write_all(sgf_string.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Print a node, tree or collection for reading in a terminal.
///
/// The output is laid out one node per line. With `color` enabled, ANSI
/// escape sequences highlight identifiers, values and delimiters; such output
/// is meant for display and is not valid SGF.
///
/// # Examples
///
/// ```rust
/// use sgf_tree::{from_str, print};
///
/// let collection = from_str("(;GM[1];B[aa])").unwrap();
/// let mut out = Vec::new();
/// print(&mut out, &collection, false).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "(;GM[1]\n;B[aa])\n");
/// ```
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn print<W, T>(mut writer: W, value: &T, color: bool) -> Result<()>
where
    W: io::Write,
    T: ?Sized + WriteSgf,
{
    let options = SgfOptions::pretty().with_color(color);
    to_writer_with_options(&mut writer, value, options)?;
    writer
        .write_all(b"\n")
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Read the SGF file at `path` into a [`Collection`].
///
/// The content is decoded as UTF-8 regardless of any `CA` property.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, otherwise the errors of
/// [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn load<P: AsRef<Path>>(path: P) -> Result<Collection> {
    let path = path.as_ref();
    log::debug!("loading SGF from {}", path.display());
    let content = fs::read_to_string(path)
        .map_err(|e| Error::io(&format!("{}: {}", path.display(), e)))?;
    from_str(&content)
}

/// Write `value` as canonical SGF text to the file at `path`.
///
/// The file is always written as UTF-8, whatever the `CA` property says.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized or the file cannot be
/// written.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn save<P, T>(path: P, value: &T) -> Result<()>
where
    P: AsRef<Path>,
    T: ?Sized + WriteSgf,
{
    let path = path.as_ref();
    let sgf_string = to_string(value)?;
    log::debug!("saving {} bytes of SGF to {}", sgf_string.len(), path.display());
    fs::write(path, sgf_string).map_err(|e| Error::io(&format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serialize_roundtrip() {
        let text = "(;FF[4]CA[UTF-8]SZ[19];B[pd]C[a \\] b];W[dp](;B[pp])(;B[dd]))";
        let collection = from_str(text).unwrap();
        assert_eq!(to_string(&collection).unwrap(), text);
    }

    #[test]
    fn test_pretty_roundtrip() {
        let collection = from_str("(;GM[1](;B[aa];W[bb](;B[cc])(;B[dd]))(;B[ee]))").unwrap();
        let pretty = to_string_pretty(&collection).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(from_str(&pretty).unwrap(), collection);
    }

    #[test]
    fn test_from_slice_rejects_invalid_utf8() {
        assert!(matches!(from_slice(&[b'(', 0xff]), Err(Error::Custom(_))));
        assert_eq!(from_slice(b"(;)").unwrap().len(), 1);
    }

    #[test]
    fn test_to_writer() {
        let collection = from_str("(;B[aa])").unwrap();
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &collection).unwrap();
        assert_eq!(buffer, b"(;B[aa])");
    }

    #[test]
    fn test_print_colored() {
        let collection = from_str("(;B[aa])").unwrap();
        let mut buffer = Vec::new();
        print(&mut buffer, &collection, true).unwrap();
        let printed = String::from_utf8(buffer).unwrap();
        assert!(printed.contains("\x1b["));
        assert!(printed.ends_with('\n'));
    }
}
