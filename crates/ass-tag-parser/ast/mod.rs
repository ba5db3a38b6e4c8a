//! Structured model of a dialogue line
//!
//! A line is an ordered sequence of [`Item`]s. Text and tags may be mixed in
//! any order; brace grouping is decided by the composer, never by the item
//! sequence itself.
//!
//! # Example
//!
//! ```rust
//! use ass_tag_parser::{compose, BoldWeight, Item, Tag};
//!
//! let items = vec![
//!     Item::text("I am "),
//!     Tag::Bold { weight: Some(BoldWeight::On) }.into(),
//!     Item::text("not"),
//!     Tag::Bold { weight: Some(BoldWeight::Off) }.into(),
//!     Item::text(" amused."),
//! ];
//! assert_eq!(compose(&items), r"I am {\b1}not{\b0} amused.");
//! ```

use alloc::string::String;

pub mod draw;
pub mod tag;

pub use draw::{DrawCommand, DrawPath, Point};
pub use tag::{AlphaIndex, BoldWeight, ColorIndex, KaraokeKind, Rgb, Tag};

/// Unit of the structured representation of a dialogue line
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Literal spoken text outside of any brace group
    Text(String),
    /// Non-tag content found inside a brace group, kept verbatim
    Comment(String),
    /// Advisory `{` marker; contributes nothing to the composed text
    ListOpening,
    /// Advisory `}` marker; contributes nothing to the composed text
    ListEnding,
    /// Override tag
    Tag(Tag),
}

impl Item {
    /// Create a text item
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create a comment item
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment(text.into())
    }

    /// Check if this item is literal text
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Check if this item is an override tag
    #[must_use]
    pub const fn is_tag(&self) -> bool {
        matches!(self, Self::Tag(_))
    }

    /// Borrow the tag, if this item is one
    #[must_use]
    pub const fn as_tag(&self) -> Option<&Tag> {
        match self {
            Self::Tag(tag) => Some(tag),
            _ => None,
        }
    }
}

impl From<Tag> for Item {
    fn from(tag: Tag) -> Self {
        Self::Tag(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_predicates() {
        let bold = Item::from(Tag::Bold {
            weight: Some(BoldWeight::On),
        });
        assert!(bold.is_tag() && !bold.is_text());
        assert_eq!(
            bold.as_tag(),
            Some(&Tag::Bold {
                weight: Some(BoldWeight::On)
            })
        );

        let text = Item::text("abc");
        assert!(text.is_text() && !text.is_tag());
        assert_eq!(text.as_tag(), None);
        assert_eq!(Item::comment("x").as_tag(), None);
        assert_eq!(Item::ListOpening.as_tag(), None);
    }
}
