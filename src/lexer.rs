//! SGF tokenization.
//!
//! The lexer turns characters into [`Token`]s. Typical use:
//!
//! 1. Wrap the input in a [`TokenStream`].
//! 2. Call [`TokenStream::next_token`] (or iterate the stream).
//! 3. Repeat until `Ok(None)` signals the end of input.
//!
//! Whitespace outside property values is insignificant. Inside `[` and `]`
//! every character is literal except for the backslash: it escapes the next
//! character, and a backslash directly before a line break removes that break
//! entirely (a soft line break).
//!
//! Identifiers start with an uppercase letter and may continue with uppercase
//! letters or digits, which covers the identifier syntax of FF[1] to FF[4].
//!
//! ```rust
//! use sgf_tree::{Token, TokenStream};
//!
//! let tokens: Vec<Token> = TokenStream::new("(;B[a\\]])")
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::LParen,
//!         Token::Semicolon,
//!         Token::Identifier("B".into()),
//!         Token::LBracket,
//!         Token::Value("a]".into()),
//!         Token::RBracket,
//!         Token::RParen,
//!     ]
//! );
//! ```

use crate::{Error, Result};
use std::fmt;

/// A lexical unit of SGF text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Marks whitespace trailing the last real token.
    Empty,
    Semicolon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    /// Property identifier such as `B`, `KM` or the FF[3] style `AB1`.
    Identifier(String),
    /// Unescaped content between `[` and `]`, possibly empty.
    Value(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Empty => f.write_str("trailing whitespace"),
            Token::Semicolon => f.write_str("';'"),
            Token::LParen => f.write_str("'('"),
            Token::RParen => f.write_str("')'"),
            Token::LBracket => f.write_str("'['"),
            Token::RBracket => f.write_str("']'"),
            Token::Identifier(id) => write!(f, "identifier {}", id),
            Token::Value(value) => write!(f, "value {:?}", value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    // after '[' was emitted
    InValue,
    // after the value content was emitted, ']' is next
    ValueEnd,
    Done,
}

/// Stateful cursor producing [`Token`]s from SGF text.
///
/// The stream owns no shared state; independent streams can be used from
/// different threads at the same time.
#[derive(Debug, Clone)]
pub struct TokenStream<'a> {
    input: &'a str,
    position: usize,
    line: usize,
    column: usize,
    token_start: (usize, usize),
    state: State,
}

impl<'a> TokenStream<'a> {
    pub fn new(input: &'a str) -> Self {
        TokenStream {
            input,
            position: 0,
            line: 1,
            column: 1,
            token_start: (1, 1),
            state: State::Outside,
        }
    }

    /// Returns the 1-based `(line, column)` of the next unread character.
    #[must_use]
    pub fn cursor(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Returns the 1-based `(line, column)` where the most recently returned
    /// token started, or the end of input once the stream is exhausted.
    #[must_use]
    pub fn token_position(&self) -> (usize, usize) {
        self.token_start
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Skips whitespace and reports whether anything was skipped.
    fn skip_whitespace(&mut self) -> bool {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
        self.position > start
    }

    /// Reads the next token.
    ///
    /// Returns `Ok(None)` once the input is exhausted. This is the normal end
    /// of the stream and not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Lexical`] for characters that cannot start a token
    /// (for example a lowercase letter) and for a value missing its closing
    /// `]`.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.token_start = self.cursor();
        match self.state {
            State::Done => Ok(None),
            State::InValue => self.read_value().map(Some),
            State::ValueEnd => {
                self.next_char();
                self.state = State::Outside;
                Ok(Some(Token::RBracket))
            }
            State::Outside => self.read_outside(),
        }
    }

    fn read_outside(&mut self) -> Result<Option<Token>> {
        let skipped = self.skip_whitespace();
        let (line, col) = self.cursor();
        self.token_start = (line, col);

        let ch = match self.peek_char() {
            Some(ch) => ch,
            None => {
                self.state = State::Done;
                return Ok(if skipped { Some(Token::Empty) } else { None });
            }
        };

        let token = match ch {
            ';' => Token::Semicolon,
            '(' => Token::LParen,
            ')' => Token::RParen,
            ']' => Token::RBracket,
            '[' => {
                self.state = State::InValue;
                Token::LBracket
            }
            'A'..='Z' => return Ok(Some(self.read_identifier())),
            'a'..='z' => {
                return Err(Error::lexical(
                    line,
                    col,
                    &format!(
                        "lowercase letter '{}' outside of a property value; identifiers must be uppercase",
                        ch
                    ),
                ))
            }
            other => {
                return Err(Error::lexical(
                    line,
                    col,
                    &format!("unexpected character {:?} outside of a property value", other),
                ))
            }
        };

        self.next_char();
        Ok(Some(token))
    }

    fn read_identifier(&mut self) -> Token {
        let start = self.position;
        while let Some(ch) = self.peek_char() {
            if ch.is_ascii_uppercase() || (ch.is_ascii_digit() && self.position > start) {
                self.next_char();
            } else {
                break;
            }
        }
        Token::Identifier(self.input[start..self.position].to_string())
    }

    fn read_value(&mut self) -> Result<Token> {
        let (line, col) = self.cursor();
        let mut value = String::new();

        loop {
            match self.peek_char() {
                None => {
                    return Err(Error::lexical(
                        line,
                        col,
                        "unterminated property value: missing ']' before end of input",
                    ))
                }
                Some(']') => {
                    self.state = State::ValueEnd;
                    return Ok(Token::Value(value));
                }
                Some('\\') => {
                    self.next_char();
                    match self.next_char() {
                        Some('\n') => {
                            if self.peek_char() == Some('\r') {
                                self.next_char();
                            }
                        }
                        Some('\r') => {
                            if self.peek_char() == Some('\n') {
                                self.next_char();
                            }
                        }
                        Some(escaped) => value.push(escaped),
                        None => {
                            return Err(Error::lexical(
                                line,
                                col,
                                "unterminated property value: input ends after '\\'",
                            ))
                        }
                    }
                }
                Some(ch) => {
                    self.next_char();
                    value.push(ch);
                }
            }
        }
    }
}

impl Iterator for TokenStream<'_> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) => token.map(Ok),
            Err(err) => {
                self.state = State::Done;
                Some(Err(err))
            }
        }
    }
}

/// Reads the next token from `stream`.
///
/// Free-function form of [`TokenStream::next_token`].
pub fn next_token(stream: &mut TokenStream<'_>) -> Result<Option<Token>> {
    stream.next_token()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Result<Vec<Token>> {
        TokenStream::new(input).collect()
    }

    fn ident(id: &str) -> Token {
        Token::Identifier(id.to_string())
    }

    fn value(text: &str) -> Token {
        Token::Value(text.to_string())
    }

    #[test]
    fn test_delimiters_and_whitespace() {
        assert_eq!(
            lex(" ( ;\n\t) ").unwrap(),
            vec![Token::LParen, Token::Semicolon, Token::RParen, Token::Empty]
        );
    }

    #[test]
    fn test_no_empty_token_without_trailing_whitespace() {
        assert_eq!(lex("()").unwrap(), vec![Token::LParen, Token::RParen]);
        assert_eq!(lex("").unwrap(), vec![]);
        assert_eq!(lex("  ").unwrap(), vec![Token::Empty]);
    }

    #[test]
    fn test_identifier_runs() {
        assert_eq!(
            lex("KM[6.5]AB1[aa]").unwrap(),
            vec![
                ident("KM"),
                Token::LBracket,
                value("6.5"),
                Token::RBracket,
                ident("AB1"),
                Token::LBracket,
                value("aa"),
                Token::RBracket,
            ]
        );
    }

    #[test]
    fn test_empty_value_still_yields_value_token() {
        assert_eq!(
            lex("B[]").unwrap(),
            vec![ident("B"), Token::LBracket, value(""), Token::RBracket]
        );
    }

    #[test]
    fn test_value_is_literal() {
        let tokens = lex("C[ (;b) \n x ]").unwrap();
        assert_eq!(tokens[2], value(" (;b) \n x "));
    }

    #[test]
    fn test_escapes() {
        assert_eq!(lex("C[a\\]b]").unwrap()[2], value("a]b"));
        assert_eq!(lex("C[a\\\\]").unwrap()[2], value("a\\"));
        assert_eq!(lex("C[\\x]").unwrap()[2], value("x"));
    }

    #[test]
    fn test_soft_line_break_removed() {
        assert_eq!(lex("C[ab\\\ncd]").unwrap()[2], value("abcd"));
        assert_eq!(lex("C[ab\\\r\ncd]").unwrap()[2], value("abcd"));
    }

    #[test]
    fn test_lowercase_is_lexical_error() {
        let err = lex("(;b[aa])").unwrap_err();
        assert!(err.is_lexical());
        assert_eq!(err.position(), Some((1, 3)));
    }

    #[test]
    fn test_unexpected_character() {
        let err = lex("(;B[aa]\n  #)").unwrap_err();
        assert!(err.is_lexical());
        assert_eq!(err.position(), Some((2, 3)));
    }

    #[test]
    fn test_unterminated_value() {
        assert!(lex("(;C[abc").unwrap_err().is_lexical());
        assert!(lex("(;C[abc\\").unwrap_err().is_lexical());
    }

    #[test]
    fn test_end_of_input_is_repeatable() {
        let mut stream = TokenStream::new(";");
        assert_eq!(next_token(&mut stream).unwrap(), Some(Token::Semicolon));
        assert_eq!(next_token(&mut stream).unwrap(), None);
        assert_eq!(next_token(&mut stream).unwrap(), None);
    }

    #[test]
    fn test_token_position_skips_whitespace() {
        let mut stream = TokenStream::new("(\n  ;");
        stream.next_token().unwrap();
        assert_eq!(stream.token_position(), (1, 1));
        stream.next_token().unwrap();
        assert_eq!(stream.token_position(), (2, 3));
    }

    #[test]
    fn test_cursor_through_mutable_reference() {
        let mut stream = TokenStream::new("(;\nB");
        let borrowed: &mut TokenStream<'_> = &mut stream;
        assert_eq!(borrowed.cursor(), (1, 1));
        borrowed.next_token().unwrap();
        borrowed.next_token().unwrap();
        assert_eq!(borrowed.cursor(), (1, 3));
        assert_eq!(borrowed.next_token().unwrap(), Some(Token::Identifier("B".into())));
        assert_eq!(borrowed.cursor(), (2, 2));
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut stream = TokenStream::new("(x");
        assert_eq!(stream.next(), Some(Ok(Token::LParen)));
        assert!(matches!(stream.next(), Some(Err(_))));
        assert_eq!(stream.next(), None);
    }
}
