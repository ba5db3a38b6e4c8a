//! Color and alpha tags
//!
//! Colors are written blue-first as `&HBBGGRR&` and alpha values as
//! `&HAA&`, both with uppercase zero-padded hex digits.
//!
//! # Supported Tags
//!
//! - `c`: Short spelling of `1c`
//! - `1c`, `2c`, `3c`, `4c`: Primary, secondary, outline and shadow color
//! - `alpha`: Alpha of every channel
//! - `1a`, `2a`, `3a`, `4a`: Alpha of one channel
//!
//! # Example
//!
//! ```rust
//! use ass_tag_parser::{compose, parse, ColorIndex, Item, Rgb, Tag};
//!
//! let items = parse(r"{\3c&H0000FF&}")?;
//! assert_eq!(
//!     items,
//!     [Item::Tag(Tag::Color {
//!         color: Some(Rgb::new(0xFF, 0, 0)),
//!         index: ColorIndex::Outline,
//!         short: false,
//!     })]
//! );
//! assert_eq!(compose(&items), r"{\3c&H0000FF&}");
//! # Ok::<(), ass_tag_parser::ParseError>(())
//! ```

use alloc::string::String;
use core::fmt::Write;

use super::{TagArgs, TagParse};
use crate::{
    ast::{AlphaIndex, ColorIndex, Rgb, Tag},
    catalog::TagName,
    parser::ParseError,
    utils::parse_hex_value,
};

/// Parse the optional `&H..&` value that follows a color or alpha tag name
fn hex_argument(args: &TagArgs<'_>, digits: usize) -> Result<(Option<u32>, usize), ParseError> {
    if !args.text.starts_with('&') {
        return Ok((None, 0));
    }
    let (value, len) =
        parse_hex_value(args.text, digits).ok_or_else(|| args.fail("malformed hex value"))?;
    Ok((Some(value), len))
}

pub(crate) fn parse_color(args: &TagArgs<'_>) -> TagParse {
    let (value, len) = hex_argument(args, 6)?;
    let color = value.map(|bgr| {
        let [_, blue, green, red] = bgr.to_be_bytes();
        Rgb::new(red, green, blue)
    });
    let index = match args.name {
        TagName::Color2 => ColorIndex::Secondary,
        TagName::Color3 => ColorIndex::Outline,
        TagName::Color4 => ColorIndex::Shadow,
        _ => ColorIndex::Primary,
    };
    let short = args.name == TagName::ColorShort;
    Ok((Tag::Color { color, index, short }, len))
}

pub(crate) fn parse_alpha(args: &TagArgs<'_>) -> TagParse {
    let (value, len) = hex_argument(args, 2)?;
    let index = match args.name {
        TagName::Alpha1 => AlphaIndex::Primary,
        TagName::Alpha2 => AlphaIndex::Secondary,
        TagName::Alpha3 => AlphaIndex::Outline,
        TagName::Alpha4 => AlphaIndex::Shadow,
        _ => AlphaIndex::All,
    };
    // Two hex digits always fit
    let value = value.and_then(|alpha| u8::try_from(alpha).ok());
    Ok((Tag::Alpha { value, index }, len))
}

pub(crate) fn write_color(out: &mut String, color: Option<Rgb>) {
    if let Some(Rgb { red, green, blue }) = color {
        let _ = write!(out, "&H{blue:02X}{green:02X}{red:02X}&");
    }
}

pub(crate) fn write_alpha(out: &mut String, value: Option<u8>) {
    if let Some(value) = value {
        let _ = write!(out, "&H{value:02X}&");
    }
}
