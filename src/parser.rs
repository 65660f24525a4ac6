//! Recursive-descent construction of a [`Collection`] from tokens.
//!
//! The accepted grammar is:
//!
//! ```text
//! Collection := GameTree+
//! GameTree   := '(' Node+ GameTree* ')'
//! Node       := ';' Property*
//! Property   := Identifier Value+
//! Value      := '[' text ']'
//! ```
//!
//! Each rule is implemented as a `try_*` method returning a [`TryParse`]:
//!
//! - `Ok(Some(value))` when the rule matched,
//! - `Ok(None)` when the next token cannot start the rule, so the caller may
//!   try another alternative,
//! - `Err(_)` for a hard grammar violation, which always propagates.
//!
//! Lexical errors raised by the [`TokenStream`] pass through unchanged. Any
//! error aborts the whole parse; no partial collection is returned.
//!
//! ```rust
//! use sgf_tree::{parser, TokenStream};
//!
//! let collection = parser::parse(TokenStream::new("(;FF[4](;B[aa])(;B[bb]))")).unwrap();
//! assert_eq!(collection[0].variations.len(), 2);
//! ```

use crate::lexer::{Token, TokenStream};
use crate::{Collection, Error, GameTree, Node, Result, Value};

/// Result of a speculative parse attempt.
pub type TryParse<T> = Result<Option<T>>;

/// Parses every game tree of `stream` into a [`Collection`].
///
/// # Errors
///
/// Returns [`Error::Lexical`] for illegal characters and [`Error::Parse`] when
/// the tokens do not form a valid collection.
pub fn parse(stream: TokenStream<'_>) -> Result<Collection> {
    Parser::new(stream).parse_collection()
}

// A game tree whose nodes are read but whose ')' is still pending.
#[derive(Debug)]
struct OpenTree {
    context: String,
    sequence: Vec<Node>,
    variations: Vec<GameTree>,
}

/// Token-level parser with a single token of lookahead.
#[derive(Debug)]
pub struct Parser<'a> {
    tokens: TokenStream<'a>,
    peeked: Option<Token>,
    // position of the peeked token
    peeked_at: (usize, usize),
}

impl<'a> Parser<'a> {
    pub fn new(tokens: TokenStream<'a>) -> Self {
        Parser {
            tokens,
            peeked: None,
            peeked_at: (1, 1),
        }
    }

    /// Returns the next significant token without consuming it.
    fn peek(&mut self) -> Result<Option<&Token>> {
        if self.peeked.is_none() {
            loop {
                let token = self.tokens.next_token()?;
                self.peeked_at = self.tokens.token_position();
                match token {
                    Some(Token::Empty) => continue,
                    token => {
                        self.peeked = token;
                        break;
                    }
                }
            }
        }
        Ok(self.peeked.as_ref())
    }

    fn bump(&mut self) -> Result<Option<Token>> {
        self.peek()?;
        Ok(self.peeked.take())
    }

    fn error(&self, msg: &str, context: &str) -> Error {
        let (line, col) = self.peeked_at;
        Error::parse(line, col, msg, context)
    }

    /// Parses `Collection := GameTree+` followed by the end of input.
    pub fn parse_collection(&mut self) -> Result<Collection> {
        let mut trees = Vec::new();
        while let Some(tree) = self.try_game_tree()? {
            trees.push(tree);
        }

        match self.peek()?.cloned() {
            None if trees.is_empty() => Err(self.error(
                "no valid game tree found",
                "collection must contain at least one game tree",
            )),
            None => {
                log::debug!("parsed collection with {} game tree(s)", trees.len());
                Ok(Collection::from(trees))
            }
            Some(token) => {
                let msg = format!("unexpected {} where a game tree must start", token);
                Err(self.error(&msg, "collection"))
            }
        }
    }

    /// Parses `GameTree := '(' Node+ GameTree* ')'`.
    ///
    /// Nested variations are tracked on an explicit stack of open trees, so
    /// the nesting depth is bounded only by memory.
    pub fn try_game_tree(&mut self) -> TryParse<GameTree> {
        if self.peek()? != Some(&Token::LParen) {
            return Ok(None);
        }

        let mut current = self.open_game_tree()?;
        let mut parents: Vec<OpenTree> = Vec::new();
        loop {
            if self.peek()? == Some(&Token::LParen) {
                let variation = self.open_game_tree()?;
                parents.push(std::mem::replace(&mut current, variation));
                continue;
            }

            let tree = self.close_game_tree(current)?;
            match parents.pop() {
                Some(mut parent) => {
                    parent.variations.push(tree);
                    current = parent;
                }
                None => return Ok(Some(tree)),
            }
        }
    }

    /// Consumes `'(' Node+`; the next token must be `(`.
    fn open_game_tree(&mut self) -> Result<OpenTree> {
        let (line, col) = self.peeked_at;
        let context = format!("game tree opened at line {}, column {}", line, col);
        self.bump()?;

        let mut sequence = Vec::new();
        while let Some(node) = self.try_node()? {
            sequence.push(node);
        }
        if sequence.is_empty() {
            log::trace!("rejecting {} without nodes", context);
            return Err(self.error("game tree must start with at least one node", &context));
        }

        Ok(OpenTree {
            context,
            sequence,
            variations: Vec::new(),
        })
    }

    /// Consumes the `')'` that ends `open`.
    fn close_game_tree(&mut self, open: OpenTree) -> Result<GameTree> {
        let OpenTree {
            context,
            sequence,
            variations,
        } = open;

        match self.bump()? {
            Some(Token::RParen) => {
                log::trace!(
                    "parsed {} with {} node(s) and {} variation(s)",
                    context,
                    sequence.len(),
                    variations.len()
                );
                Ok(GameTree {
                    sequence,
                    variations,
                })
            }
            None => Err(self.error(
                "unterminated game tree: reached end of input before ')'",
                &context,
            )),
            Some(token) => {
                let msg = format!("expected ')' to close game tree, found {}", token);
                Err(self.error(&msg, &context))
            }
        }
    }

    /// Parses `Node := ';' Property*`, refusing duplicate identifiers.
    pub fn try_node(&mut self) -> TryParse<Node> {
        if self.peek()? != Some(&Token::Semicolon) {
            return Ok(None);
        }
        self.bump()?;

        let mut node = Node::new();
        loop {
            self.peek()?;
            let at = self.peeked_at;
            let Some((id, values)) = self.try_property()? else {
                break;
            };
            if let Err((id, _)) = node.insert_new(id, values) {
                let (line, col) = at;
                return Err(Error::parse(
                    line,
                    col,
                    "duplicate property identifier in node",
                    &format!("property {}", id),
                ));
            }
        }
        Ok(Some(node))
    }

    /// Parses `Property := Identifier Value+`.
    pub fn try_property(&mut self) -> TryParse<(String, Vec<Value>)> {
        let id = match self.peek()? {
            Some(Token::Identifier(id)) => id.clone(),
            _ => return Ok(None),
        };
        self.bump()?;

        let context = format!("property {}", id);
        let mut values = Vec::new();
        while let Some(value) = self.try_value(&context)? {
            values.push(value);
        }
        if values.is_empty() {
            return Err(self.error("property must have at least one value", &context));
        }
        Ok(Some((id, values)))
    }

    /// Parses `'[' text ']'` into a [`Value::Text`].
    fn try_value(&mut self, context: &str) -> TryParse<Value> {
        if self.peek()? != Some(&Token::LBracket) {
            return Ok(None);
        }
        self.bump()?;

        let text = match self.bump()? {
            Some(Token::Value(text)) => text,
            other => return Err(self.unexpected(other, "property value", context)),
        };
        match self.bump()? {
            Some(Token::RBracket) => Ok(Some(Value::Text(text))),
            other => Err(self.unexpected(other, "']'", context)),
        }
    }

    fn unexpected(&self, found: Option<Token>, expected: &str, context: &str) -> Error {
        let msg = match found {
            Some(token) => format!("expected {}, found {}", expected, token),
            None => format!("expected {}, reached end of input", expected),
        };
        self.error(&msg, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(input: &str) -> Result<Collection> {
        parse(TokenStream::new(input))
    }

    #[test]
    fn test_empty_node() {
        let collection = parse_str("(;)").unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection[0].sequence.len(), 1);
        assert!(collection[0].sequence[0].is_empty());
        assert!(collection[0].variations.is_empty());
    }

    #[test]
    fn test_nested_variations() {
        let collection = parse_str("(;GM[1](;B[aa];W[bb](;B[cc])(;B[dd]))(;B[ee]))").unwrap();
        let tree = &collection[0];
        assert_eq!(tree.variations.len(), 2);
        assert_eq!(tree.variations[0].sequence.len(), 2);
        assert_eq!(tree.variations[0].variations.len(), 2);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn test_values_are_text() {
        let collection = parse_str("(;SZ[19]KM[6.5])").unwrap();
        let node = &collection[0][0];
        assert_eq!(node.first("SZ"), Some(&Value::Text("19".into())));
        assert!(node.first("KM").unwrap().is_text());
    }

    #[test]
    fn test_tree_without_nodes() {
        let err = parse_str("()").unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("at least one node"));

        let err = parse_str("(;B[aa]())").unwrap_err();
        assert!(err.to_string().contains("at least one node"));
    }

    #[test]
    fn test_property_without_value() {
        let err = parse_str("(;B;W[aa])").unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("property B"));
    }

    #[test]
    fn test_duplicate_reports_identifier() {
        let err = parse_str("(;KM[6.5]KM[7])").unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("duplicate property identifier"));
        assert_eq!(err.position(), Some((1, 10)));
    }

    #[test]
    fn test_same_identifier_in_different_nodes() {
        assert!(parse_str("(;B[aa];B[bb])").is_ok());
    }

    #[test]
    fn test_unterminated_tree() {
        let err = parse_str("(;B[aa]").unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("unterminated game tree"));
        assert!(err.to_string().contains("line 1, column 1"));
    }

    #[test]
    fn test_no_game_tree() {
        assert!(parse_str("").unwrap_err().to_string().contains("no valid game tree"));
        assert!(parse_str("  \n").unwrap_err().is_parse());
    }

    #[test]
    fn test_leftover_tokens() {
        let err = parse_str("(;B[aa]);").unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("';'"));

        assert!(parse_str("(;B[aa]))").unwrap_err().is_parse());
        assert!(parse_str("(;B[aa]]").unwrap_err().is_parse());
    }

    #[test]
    fn test_lexical_error_propagates() {
        assert!(parse_str("(;B[aa]c)").unwrap_err().is_lexical());
        assert!(parse_str("(;C[open").unwrap_err().is_lexical());
    }

    #[test]
    fn test_trailing_whitespace_accepted() {
        let collection = parse_str("\n(;FF[4])\n\n(;FF[3])\n").unwrap();
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_deeply_nested_variations() {
        let depth = 10_000;
        let input = "(;B[aa]".repeat(depth) + &")".repeat(depth);
        let collection = parse_str(&input).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(collection[0].len(), depth);

        let mut tree = &collection[0];
        while let Some(variation) = tree.variations.first() {
            assert_eq!(tree.variations.len(), 1);
            tree = variation;
        }
        assert_eq!(tree.sequence.len(), 1);
    }

    #[test]
    fn test_unterminated_variation_names_innermost_tree() {
        let err = parse_str("(;GM[1](;B[aa]").unwrap_err();
        assert!(err.to_string().contains("unterminated game tree"));
        assert!(err.to_string().contains("line 1, column 8"));

        let deep = "(;B[aa]".repeat(5_000);
        assert!(parse_str(&deep).unwrap_err().is_parse());
    }
}
