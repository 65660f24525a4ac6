//! SGF Text Format
//!
//! This module documents the Smart Game Format text syntax as read and written
//! by this library. It contains no code.
//!
//! # Overview
//!
//! SGF stores records of two-player board games. A file is plain text holding
//! a tree of game positions: the main line of play plus any number of
//! alternative variations, each step annotated with properties such as moves,
//! comments and setup stones.
//!
//! # Grammar
//!
//! ```text
//! Collection := GameTree+
//! GameTree   := '(' Node+ GameTree* ')'
//! Node       := ';' Property*
//! Property   := Identifier Value+
//! Value      := '[' text ']'
//! Identifier := [A-Z] [A-Z0-9]*
//! ```
//!
//! Whitespace between tokens is insignificant. Inside `[...]` it is part of
//! the value.
//!
//! ## Example
//!
//! ```text
//! (;FF[4]GM[1]SZ[19]KM[6.5]
//!   ;B[pd];W[dp]
//!   (;B[pp];W[dd])
//!   (;B[dd];W[pp]))
//! ```
//!
//! The root node carries four properties. The main line continues with two
//! moves, then branches: the first variation `(;B[pp];W[dd])` is the
//! continuation of the main line, the second is an alternative.
//!
//! # Identifiers
//!
//! | Form | Example | Notes |
//! |------|---------|-------|
//! | Uppercase letters | `B`, `KM`, `AB` | FF[4] |
//! | Uppercase with digits | `AB1`, `L2` | older FF versions, digits never first |
//! | Lowercase letters | `b`, `AddBlack` | **rejected** with a lexical error |
//!
//! An identifier may occur at most once per node. Use multiple values
//! instead: `AB[aa][bb]`.
//!
//! # Values
//!
//! Between `[` and `]` every character is literal, with two exceptions:
//!
//! | Input | Meaning |
//! |-------|---------|
//! | `\]` | a literal `]` |
//! | `\\` | a literal `\` |
//! | `\` + any other character | that character |
//! | `\` + line break | nothing (soft line break, removed) |
//!
//! The writer escapes exactly `\` and `]`, so every value survives a round
//! trip. Values are stored as text; no property-specific decoding of moves,
//! points or numbers is performed.
//!
//! # Variations and the main path
//!
//! In `(;A;B(;C;D)(;E))` the main path is `A B C D`. Indexing a
//! [`GameTree`](crate::GameTree) follows that path: index 2 is `C`. The node
//! `E` starts an alternative and is only reachable through
//! `variations[1]`.
//!
//! # Errors
//!
//! | Input | Error |
//! |-------|-------|
//! | `(;b[aa])` | lexical: lowercase identifier |
//! | `(;C[open` | lexical: unterminated value |
//! | `(;B[aa]` | parse: unterminated game tree |
//! | `()` | parse: game tree without nodes |
//! | `(;B)` | parse: property without values |
//! | `(;KM[6.5]KM[7])` | parse: duplicate property identifier |
//! | empty input | parse: no valid game tree found |
//!
//! # Encoding
//!
//! Text is read and written as UTF-8. The `CA` (charset) property is stored
//! like any other property and does not change how files are decoded.
