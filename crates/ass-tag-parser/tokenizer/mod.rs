//! Brace scanner for dialogue text
//!
//! Splits a dialogue line into alternating literal text spans and
//! brace-delimited override blocks. The scanner is zero-copy: every token
//! borrows from the source line and records its byte offset.
//!
//! # Rules
//!
//! - Text before the first `{` and between a `}` and the next `{` is
//!   emitted verbatim; empty text spans are skipped
//! - An override block's span excludes its braces; `{}` yields an empty span
//! - A `{` inside an open block fails with `UnexpectedCurlyBrace`
//! - A `{` without a matching `}` fails with `UnterminatedCurlyBrace`
//! - A stray `}` outside a block is ordinary text
//!
//! # Example
//!
//! ```rust
//! use ass_tag_parser::tokenizer::{BraceScanner, TokenType};
//!
//! let tokens: Vec<_> = BraceScanner::new(r"Hi {\b1}there")
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[1].token_type, TokenType::OverrideBlock);
//! assert_eq!(tokens[1].span, r"\b1");
//! assert_eq!(tokens[1].pos, 4);
//! # Ok::<(), ass_tag_parser::ParseError>(())
//! ```

use core::iter::FusedIterator;

use crate::parser::ParseError;

/// Kind of span produced by the scanner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Literal text outside braces
    Text,
    /// Content between a `{` and its `}`
    OverrideBlock,
}

/// Span of dialogue text produced by [`BraceScanner`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token type discriminant
    pub token_type: TokenType,
    /// Zero-copy span referencing the source line (braces excluded)
    pub span: &'a str,
    /// Byte offset of `span` in the source line
    pub pos: usize,
}

impl<'a> Token<'a> {
    /// Create a new token
    #[must_use]
    pub const fn new(token_type: TokenType, span: &'a str, pos: usize) -> Self {
        Self {
            token_type,
            span,
            pos,
        }
    }

    /// Byte offset just past the end of the span
    #[must_use]
    pub const fn end(&self) -> usize {
        self.pos + self.span.len()
    }
}

/// Lazy scanner over the text and override blocks of one dialogue line
///
/// Yields `Ok` tokens until the line is exhausted. After the first error
/// the scanner is finished and only returns `None`.
#[derive(Debug, Clone)]
pub struct BraceScanner<'a> {
    /// Source line being scanned
    source: &'a str,
    /// Current byte position
    position: usize,
    /// Set once an error has been reported
    failed: bool,
}

impl<'a> BraceScanner<'a> {
    /// Create a scanner over `source`
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            failed: false,
        }
    }

    /// Check if the scanner has nothing more to yield
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.failed || self.position >= self.source.len()
    }

    fn scan_override_block(&mut self) -> Result<Token<'a>, ParseError> {
        let open = self.position;
        let content_start = open + 1;
        let rest = &self.source[content_start..];

        match rest.find(['{', '}']) {
            Some(offset) if rest.as_bytes()[offset] == b'}' => {
                self.position = content_start + offset + 1;
                Ok(Token::new(
                    TokenType::OverrideBlock,
                    &rest[..offset],
                    content_start,
                ))
            }
            Some(offset) => Err(ParseError::UnexpectedCurlyBrace {
                pos: content_start + offset,
            }),
            None => Err(ParseError::UnterminatedCurlyBrace { pos: open }),
        }
    }

    fn scan_text(&mut self) -> Token<'a> {
        let start = self.position;
        let rest = &self.source[start..];
        let len = rest.find('{').unwrap_or(rest.len());
        self.position = start + len;
        Token::new(TokenType::Text, &rest[..len], start)
    }
}

impl<'a> Iterator for BraceScanner<'a> {
    type Item = Result<Token<'a>, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_at_end() {
            return None;
        }

        if self.source.as_bytes()[self.position] == b'{' {
            let result = self.scan_override_block();
            if result.is_err() {
                self.failed = true;
            }
            Some(result)
        } else {
            Some(Ok(self.scan_text()))
        }
    }
}

impl FusedIterator for BraceScanner<'_> {}
