//! Dialogue line parser
//!
//! Turns one line of dialogue text into a sequence of [`Item`]s. The brace
//! scanner splits the line into text spans and override blocks, the block
//! grammar splits each block into tag tokens, and the per-tag grammars in
//! [`crate::tags`] read the arguments.
//!
//! # Drawing Mode
//!
//! A `\p` tag with a non-zero scale switches the line into drawing mode:
//! the text spans that follow are parsed as the drawing path of that tag
//! until a `\p0` ends it. The closing `\p0` is part of the drawing and is
//! not emitted as an item of its own.
//!
//! # Example
//!
//! ```rust
//! use ass_tag_parser::{parse, BoldWeight, Item, Tag};
//!
//! let items = parse(r"I am {\b1}not{\b0} amused.")?;
//! assert_eq!(
//!     items,
//!     [
//!         Item::text("I am "),
//!         Item::Tag(Tag::Bold { weight: Some(BoldWeight::On) }),
//!         Item::text("not"),
//!         Item::Tag(Tag::Bold { weight: Some(BoldWeight::Off) }),
//!         Item::text(" amused."),
//!     ]
//! );
//! # Ok::<(), ass_tag_parser::ParseError>(())
//! ```
//!
//! # Performance
//!
//! - Single pass over the line; tokens borrow from the input
//! - Allocation only for the produced items
//! - Recursion limited to animation nesting, bounded by
//!   [`ParserConfig::max_nesting_depth`]

use alloc::{string::ToString, vec::Vec};

use crate::{
    ast::{Item, Tag},
    catalog::TagName,
    drawing::parse_path,
    tokenizer::{BraceScanner, TokenType},
};

pub mod errors;
pub(crate) mod grammar;

pub use errors::ParseError;

/// Default limit for nested `\t` animations
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 32;

/// Parser limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest allowed `\t` nesting
    pub max_nesting_depth: usize,
    /// Longest accepted input in bytes (`None` = unlimited)
    pub max_input_len: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            max_input_len: None,
        }
    }
}

impl ParserConfig {
    /// Set the deepest allowed animation nesting.
    #[must_use]
    pub const fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Set the longest accepted input in bytes.
    #[must_use]
    pub const fn with_max_input_len(mut self, len: usize) -> Self {
        self.max_input_len = Some(len);
        self
    }
}

/// Parse one dialogue line with the default limits
///
/// # Errors
///
/// Returns the first [`ParseError`] found in the line: brace structure
/// problems, unknown tags or arguments a tag cannot accept.
pub fn parse(text: &str) -> Result<Vec<Item>, ParseError> {
    parse_with_config(text, &ParserConfig::default())
}

/// Parse one dialogue line with explicit limits
///
/// # Errors
///
/// Same as [`parse`], plus [`ParseError::InputTooLarge`] and
/// [`ParseError::MaxNestingDepth`] when a configured limit is exceeded.
pub fn parse_with_config(text: &str, config: &ParserConfig) -> Result<Vec<Item>, ParseError> {
    if let Some(limit) = config.max_input_len {
        if text.len() > limit {
            return Err(ParseError::InputTooLarge {
                size: text.len(),
                limit,
            });
        }
    }

    let mut items = Vec::new();
    // Index of the Draw item collecting path text, while in drawing mode
    let mut drawing: Option<usize> = None;

    for token in BraceScanner::new(text) {
        let token = token?;
        match token.token_type {
            TokenType::Text => match drawing {
                Some(index) => {
                    let commands = parse_path(token.span, token.pos, TagName::Draw)?;
                    if let Some(Item::Tag(Tag::Draw { path, .. })) = items.get_mut(index) {
                        path.extend(commands);
                    }
                }
                None => items.push(Item::Text(token.span.to_string())),
            },
            TokenType::OverrideBlock => {
                for item in grammar::parse_block(token.span, token.pos, config, 0)? {
                    match item {
                        Item::Tag(Tag::Draw { scale: 0, .. }) if drawing.is_some() => {
                            drawing = None;
                        }
                        Item::Tag(tag) if tag.is_drawing() => {
                            drawing = Some(items.len());
                            items.push(Item::Tag(tag));
                        }
                        item => items.push(item),
                    }
                }
            }
        }
    }

    Ok(items)
}
