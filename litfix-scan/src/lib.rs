//! String-literal lexer for litfix.
//!
//! Converts raw source text into a stream of `StringLiteralToken` values in
//! ascending offset order. The scanner is a pull-based iterator: callers can
//! stop early, and re-scanning the same text yields identical output.
//!
//! The surface it understands is the C-family literal grammar:
//! - `//` and `/* */` comments (quotes inside never open a literal)
//! - `"..."` with backslash escapes
//! - `@"..."` verbatim literals where `""` stands for one quote
//! - `'.'` char literals, skipped so an embedded quote cannot
//!   desynchronize the scan
//!
//! Only an unterminated literal is an error; the scanner resynchronizes and
//! keeps producing the remaining well-formed tokens.

pub mod literal;

use litfix_types::{LiteralKind, Span, StringLiteralToken};
use thiserror::Error;

/// A lexically malformed literal.
///
/// `offset` points at the opening quote of the literal that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at byte {offset}")]
pub struct ParseError {
    pub offset: usize,
    pub message: String,
}

/// Pull-based scanner over one immutable source text.
pub struct Scanner<'a> {
    source: &'a str,
    cursor: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, cursor: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.cursor..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        Some(c)
    }

    /// Pull the next string literal, skipping everything in between.
    pub fn next_literal(&mut self) -> Option<Result<StringLiteralToken, ParseError>> {
        loop {
            let rest = self.rest();
            let c = rest.chars().next()?;
            if rest.starts_with("//") {
                self.skip_line_comment();
            } else if rest.starts_with("/*") {
                self.skip_block_comment();
            } else if c == '\'' {
                self.skip_char_literal();
            } else if rest.starts_with("@\"") {
                return Some(self.lex_verbatim());
            } else if c == '"' {
                return Some(self.lex_regular());
            } else {
                self.cursor += c.len_utf8();
            }
        }
    }

    fn skip_line_comment(&mut self) {
        match self.rest().find('\n') {
            Some(i) => self.cursor += i + 1,
            None => self.cursor = self.source.len(),
        }
    }

    fn skip_block_comment(&mut self) {
        // Cursor sits on "/*". An unterminated block comment swallows the
        // tail; that is the host compiler's problem, not a literal error.
        let body = &self.source[self.cursor + 2..];
        match body.find("*/") {
            Some(i) => self.cursor += 2 + i + 2,
            None => self.cursor = self.source.len(),
        }
    }

    /// Skip a `'x'` or `'\x'` char literal. A stray apostrophe that never
    /// closes before the end of the line is left as plain trivia.
    fn skip_char_literal(&mut self) {
        let open = self.cursor;
        self.cursor += 1;
        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.cursor = open + 1;
                    return;
                }
                Some('\'') => {
                    self.cursor += 1;
                    return;
                }
                Some('\\') => {
                    self.cursor += 1;
                    self.bump();
                }
                Some(c) => self.cursor += c.len_utf8(),
            }
        }
    }

    fn lex_regular(&mut self) -> Result<StringLiteralToken, ParseError> {
        let start = self.cursor;
        self.cursor += 1;
        loop {
            match self.peek() {
                None | Some('\n') => {
                    // Resync at the newline; later lines still scan.
                    return Err(ParseError {
                        offset: start,
                        message: "unterminated string literal".to_string(),
                    });
                }
                Some('"') => {
                    self.cursor += 1;
                    let raw = &self.source[start..self.cursor];
                    let inner = &raw[1..raw.len() - 1];
                    return Ok(StringLiteralToken {
                        span: Span::new(start, raw.len()),
                        kind: LiteralKind::Regular,
                        raw: raw.to_string(),
                        value: literal::decode_regular(inner),
                    });
                }
                Some('\\') => {
                    self.cursor += 1;
                    // Consume the escaped char unless it would hide the
                    // newline that ends an unterminated literal.
                    if !matches!(self.peek(), None | Some('\n')) {
                        self.bump();
                    }
                }
                Some(c) => self.cursor += c.len_utf8(),
            }
        }
    }

    fn lex_verbatim(&mut self) -> Result<StringLiteralToken, ParseError> {
        let start = self.cursor;
        self.cursor += 2;
        loop {
            let rest = self.rest();
            if rest.is_empty() {
                return Err(ParseError {
                    offset: start,
                    message: "unterminated verbatim string literal".to_string(),
                });
            }
            if rest.starts_with("\"\"") {
                self.cursor += 2;
            } else if rest.starts_with('"') {
                self.cursor += 1;
                let raw = &self.source[start..self.cursor];
                let inner = &raw[2..raw.len() - 1];
                return Ok(StringLiteralToken {
                    span: Span::new(start, raw.len()),
                    kind: LiteralKind::Verbatim,
                    raw: raw.to_string(),
                    value: literal::decode_verbatim(inner),
                });
            } else if let Some(c) = self.peek() {
                self.cursor += c.len_utf8();
            }
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Result<StringLiteralToken, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_literal()
    }
}

/// Everything one pass over a file produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Well-formed literals in ascending span order.
    pub tokens: Vec<StringLiteralToken>,
    /// Malformed literals encountered along the way.
    pub errors: Vec<ParseError>,
}

impl ScanOutcome {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Collecting front-end over [`Scanner`].
pub fn scan(source: &str) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    for item in Scanner::new(source) {
        match item {
            Ok(token) => outcome.tokens.push(token),
            Err(err) => outcome.errors.push(err),
        }
    }
    outcome
}
