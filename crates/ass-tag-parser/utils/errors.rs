//! Crate-wide error types
//!
//! [`BaseError`] is the common supertype for everything the crate can
//! report: parse failures ([`ParseError`]) and structural problems found by
//! the checked composer ([`ComposeError`]).
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling (no `anyhow` bloat)
//! - Errors are values; no variant is used for ordinary control flow
//! - Parse errors carry the byte offset of the offending input
//!
//! # Examples
//!
//! ```rust
//! use ass_tag_parser::{parse, BaseError, ErrorCategory};
//!
//! let error: BaseError = parse(r"{\b1").unwrap_err().into();
//! assert_eq!(error.category(), ErrorCategory::Structure);
//! assert!(error.is_recoverable());
//! ```

use core::fmt;

use thiserror::Error;

use crate::parser::ParseError;

/// Result type for operations that can fail with any crate error
pub type Result<T> = core::result::Result<T, BaseError>;

/// Structural problem in an item sequence handed to the checked composer
///
/// The unchecked [`compose`](crate::compose) never fails; these errors only
/// come from [`try_compose`](crate::try_compose), which refuses sequences
/// that would not parse back to the same text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    /// A payload contains a character that would change the brace structure
    #[error("{context} contains forbidden character {ch:?}")]
    ForbiddenCharacter { context: &'static str, ch: char },

    /// A name or comment opens a parenthesis it never closes, or the reverse
    #[error("{context} has unbalanced parentheses")]
    UnbalancedParentheses { context: &'static str },

    /// A vector clip without any drawing command
    #[error("vector clip has an empty path")]
    EmptyClipPath,

    /// A `\p` drawing was placed inside an animation
    #[error("drawing tags cannot be animated")]
    DrawingInAnimation,

    /// A `\p0` tag carries a non-empty path
    #[error("drawing path given with scale 0")]
    DrawingWithoutScale,

    /// Alignment outside 1-9
    #[error("alignment {value} is outside 1-9 (legacy: {legacy})")]
    AlignmentOutOfRange { value: u8, legacy: bool },

    /// Wrap style outside 0-3
    #[error("wrap style {style} is outside 0-3")]
    WrapStyleOutOfRange { style: u8 },

    /// Negative value in a field that only accepts non-negative numbers
    #[error("negative value in tag '\\{tag}'")]
    NegativeValue { tag: &'static str },

    /// NaN or infinite value in a numeric field
    #[error("non-finite number in tag '\\{tag}'")]
    NonFiniteNumber { tag: &'static str },

    /// Drawing command with fewer points than it needs
    #[error("drawing command '{command}' needs at least {expected} points, found {found}")]
    TooFewPoints {
        command: char,
        expected: usize,
        found: usize,
    },

    /// A comment would be read back as part of the tag written before it
    #[error("comment after tag '\\{tag}' would merge into its arguments")]
    CommentMergesIntoTag { tag: &'static str },

    /// Karaoke duration with a tenths digit inside an animation
    #[error("animated karaoke duration {duration} ms is not a whole number of centiseconds")]
    KaraokeTenthsInAnimation { duration: u32 },

    /// Animation nesting deeper than the configured limit
    #[error("maximum nesting depth {limit} exceeded")]
    MaxNestingDepth { limit: usize },
}

/// Main error type for the crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BaseError {
    /// Dialogue text could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Item sequence could not be composed
    #[error(transparent)]
    Compose(#[from] ComposeError),
}

/// Coarse classification of errors for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Brace structure of the line
    Structure,
    /// Tag names and arguments
    Syntax,
    /// Configured resource limits
    Resource,
    /// Invalid item model handed to the composer
    Model,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Structure => "structure",
            Self::Syntax => "syntax",
            Self::Resource => "resource",
            Self::Model => "model",
        };
        f.write_str(name)
    }
}

impl BaseError {
    /// Category of this error
    #[must_use]
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Parse(error) => match error {
                ParseError::UnexpectedCurlyBrace { .. }
                | ParseError::UnterminatedCurlyBrace { .. } => ErrorCategory::Structure,
                ParseError::UnknownTag { .. } | ParseError::BadAssTagArgument { .. } => {
                    ErrorCategory::Syntax
                }
                ParseError::MaxNestingDepth { .. } | ParseError::InputTooLarge { .. } => {
                    ErrorCategory::Resource
                }
            },
            Self::Compose(ComposeError::MaxNestingDepth { .. }) => ErrorCategory::Resource,
            Self::Compose(_) => ErrorCategory::Model,
        }
    }

    /// Check if the caller can carry on with the next line
    ///
    /// Parse errors only concern the line they came from. Compose errors
    /// point at a programming error in whoever built the item sequence.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Byte offset of a parse error, if this is one
    #[must_use]
    pub const fn pos(&self) -> Option<usize> {
        match self {
            Self::Parse(error) => Some(error.pos()),
            Self::Compose(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{
        format,
        string::{String, ToString},
    };

    #[test]
    fn parse_errors_convert_transparently() {
        let parse = ParseError::UnterminatedCurlyBrace { pos: 4 };
        let base = BaseError::from(parse.clone());
        assert_eq!(base.to_string(), parse.to_string());
        assert_eq!(base.pos(), Some(4));
        assert_eq!(base.category(), ErrorCategory::Structure);
    }

    #[test]
    fn compose_errors_are_not_recoverable() {
        let base = BaseError::from(ComposeError::DrawingInAnimation);
        assert!(!base.is_recoverable());
        assert_eq!(base.category(), ErrorCategory::Model);
        assert_eq!(base.pos(), None);
    }

    #[test]
    fn categories_display() {
        let names: String = [
            ErrorCategory::Structure,
            ErrorCategory::Syntax,
            ErrorCategory::Resource,
            ErrorCategory::Model,
        ]
        .iter()
        .map(|category| format!("{category};"))
        .collect();
        assert_eq!(names, "structure;syntax;resource;model;");
    }

    #[test]
    fn resource_limits_are_classified() {
        let base = BaseError::from(ParseError::InputTooLarge { size: 10, limit: 5 });
        assert_eq!(base.category(), ErrorCategory::Resource);
        let base = BaseError::from(ComposeError::MaxNestingDepth { limit: 2 });
        assert_eq!(base.category(), ErrorCategory::Resource);
    }
}
