//! Basic formatting tags
//!
//! # Supported Tags
//!
//! - `b`: Bold (`0`, `1` or an explicit font weight such as `700`)
//! - `i`: Italic (0/1)
//! - `u`: Underline (0/1)
//! - `s`: Strikeout (0/1)
//!
//! Each tag may also appear bare, which resets it to the style default.

use alloc::string::String;

use super::{write_optional, TagArgs, TagParse};
use crate::{
    ast::{BoldWeight, Tag},
    catalog::TagName,
};

pub(crate) fn parse_bold(args: &TagArgs<'_>) -> TagParse {
    let (value, len) = args.optional_uint()?;
    let weight = value.map(BoldWeight::from_value);
    Ok((Tag::Bold { weight }, len))
}

/// `\i`, `\u` and `\s`
pub(crate) fn parse_toggle(args: &TagArgs<'_>) -> TagParse {
    let (value, len) = args.optional_uint()?;
    let enabled = match value {
        None => None,
        Some(0) => Some(false),
        Some(1) => Some(true),
        Some(_) => return Err(args.fail("expected 0 or 1")),
    };
    let tag = match args.name {
        TagName::Italic => Tag::Italic { enabled },
        TagName::Underline => Tag::Underline { enabled },
        _ => Tag::Strikeout { enabled },
    };
    Ok((tag, len))
}

pub(crate) fn write_bold(out: &mut String, weight: Option<BoldWeight>) {
    write_optional(out, weight.map(BoldWeight::value));
}

pub(crate) fn write_toggle(out: &mut String, enabled: Option<bool>) {
    write_optional(out, enabled.map(u8::from));
}
