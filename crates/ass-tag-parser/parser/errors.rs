//! Parse error type for override tag markup
//!
//! Parsing is strict: the first malformed brace, unknown tag or bad argument
//! aborts the line with one of these errors. Every variant records the byte
//! offset into the original dialogue text where the problem starts, so a
//! caller can point at it or decide to fall back to treating the line as
//! plain text.

use alloc::string::String;

use thiserror::Error;

/// Error raised while parsing a dialogue line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `{` was found inside an already open brace group
    #[error("unexpected curly brace at byte {pos}")]
    UnexpectedCurlyBrace { pos: usize },

    /// A `{` was never closed
    #[error("unterminated curly brace opened at byte {pos}")]
    UnterminatedCurlyBrace { pos: usize },

    /// Backslash followed by a name that is not in the tag catalog
    #[error("unknown tag '\\{name}' at byte {pos}")]
    UnknownTag { name: String, pos: usize },

    /// Known tag whose arguments do not fit its grammar
    #[error("bad argument '{args}' for tag '\\{tag}' at byte {pos}: {reason}")]
    BadAssTagArgument {
        tag: String,
        args: String,
        reason: &'static str,
        pos: usize,
    },

    /// Animation nesting deeper than the configured limit
    #[error("maximum nesting depth {limit} exceeded at byte {pos}")]
    MaxNestingDepth { limit: usize, pos: usize },

    /// Input longer than the configured limit
    #[error("input size {size} bytes exceeds limit {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },
}

impl ParseError {
    /// Byte offset into the dialogue text where the error starts
    #[must_use]
    pub const fn pos(&self) -> usize {
        match self {
            Self::UnexpectedCurlyBrace { pos }
            | Self::UnterminatedCurlyBrace { pos }
            | Self::UnknownTag { pos, .. }
            | Self::BadAssTagArgument { pos, .. }
            | Self::MaxNestingDepth { pos, .. } => *pos,
            Self::InputTooLarge { .. } => 0,
        }
    }

    /// Build a bad-argument error for `tag`
    pub(crate) fn bad_argument(
        tag: impl Into<String>,
        args: impl Into<String>,
        reason: &'static str,
        pos: usize,
    ) -> Self {
        Self::BadAssTagArgument {
            tag: tag.into(),
            args: args.into(),
            reason,
            pos,
        }
    }

    /// Whether the error comes from brace structure rather than tag content
    #[must_use]
    pub const fn is_brace_error(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedCurlyBrace { .. } | Self::UnterminatedCurlyBrace { .. }
        )
    }
}
