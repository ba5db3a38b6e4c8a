//! Alignment and wrapping tags
//!
//! Positions are stored in numpad layout (1-9) for both spellings. The
//! legacy `\a` tag numbers the same positions 1, 2, 3 (bottom), 5, 6, 7
//! (top) and 9, 10, 11 (middle).
//!
//! # Supported Tags
//!
//! - `an`: Numpad alignment (1-9)
//! - `a`: Legacy alignment
//! - `q`: Wrap style (0-3)

use alloc::string::String;

use super::{write_value, TagArgs, TagParse};
use crate::{ast::Tag, catalog::TagName};

/// Legacy value for each numpad position, indexed by `position - 1`
const LEGACY_ALIGNMENT: [u8; 9] = [1, 2, 3, 5, 6, 7, 9, 10, 11];

/// Legacy `\a` number of a numpad position
#[must_use]
pub const fn to_legacy(position: u8) -> Option<u8> {
    match position {
        1..=9 => Some(LEGACY_ALIGNMENT[position as usize - 1]),
        _ => None,
    }
}

/// Numpad position of a legacy `\a` number
#[must_use]
pub fn from_legacy(value: u8) -> Option<u8> {
    LEGACY_ALIGNMENT
        .iter()
        .position(|&legacy| legacy == value)
        .and_then(|index| u8::try_from(index + 1).ok())
}

pub(crate) fn parse_alignment(args: &TagArgs<'_>) -> TagParse {
    let legacy = args.name == TagName::AlignmentLegacy;
    let (value, len) = args.optional_uint()?;
    let position = match value {
        None => None,
        Some(value) => {
            let value = u8::try_from(value).ok();
            let position = if legacy {
                value.and_then(from_legacy)
            } else {
                value.filter(|value| (1..=9).contains(value))
            };
            Some(position.ok_or_else(|| args.fail("alignment out of range"))?)
        }
    };
    Ok((Tag::Alignment { position, legacy }, len))
}

pub(crate) fn parse_wrap_style(args: &TagArgs<'_>) -> TagParse {
    let (style, len) = args.required_uint()?;
    let style = u8::try_from(style)
        .ok()
        .filter(|style| *style <= 3)
        .ok_or_else(|| args.fail("wrap style must be 0-3"))?;
    Ok((Tag::WrapStyle { style }, len))
}

pub(crate) fn write_alignment(out: &mut String, position: Option<u8>, legacy: bool) {
    let Some(position) = position else {
        return;
    };
    if legacy {
        // Out-of-range positions only reach here through the unchecked composer
        write_value(out, &to_legacy(position).unwrap_or(position));
    } else {
        write_value(out, &position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_mapping_is_a_bijection() {
        for position in 1..=9 {
            let legacy = to_legacy(position).unwrap();
            assert_eq!(from_legacy(legacy), Some(position));
        }
        for missing in [0, 4, 8, 12] {
            assert_eq!(from_legacy(missing), None);
        }
        assert_eq!(to_legacy(10), None);
    }

    #[test]
    fn legacy_alignment_is_stored_as_numpad() {
        let args = TagArgs::new(TagName::AlignmentLegacy, "10", 0);
        assert_eq!(
            parse_alignment(&args).unwrap(),
            (
                Tag::Alignment {
                    position: Some(8),
                    legacy: true
                },
                2
            )
        );
        assert!(parse_alignment(&TagArgs::new(TagName::AlignmentLegacy, "4", 0)).is_err());
    }

    #[test]
    fn numpad_alignment_range() {
        assert!(parse_alignment(&TagArgs::new(TagName::Alignment, "0", 0)).is_err());
        assert!(parse_alignment(&TagArgs::new(TagName::Alignment, "10", 0)).is_err());
        assert_eq!(
            parse_alignment(&TagArgs::new(TagName::Alignment, "", 0))
                .unwrap()
                .0,
            Tag::Alignment {
                position: None,
                legacy: false
            }
        );
    }

    #[test]
    fn wrap_style_is_required() {
        assert_eq!(
            parse_wrap_style(&TagArgs::new(TagName::WrapStyle, "2", 0))
                .unwrap()
                .0,
            Tag::WrapStyle { style: 2 }
        );
        assert!(parse_wrap_style(&TagArgs::new(TagName::WrapStyle, "", 0)).is_err());
        assert!(parse_wrap_style(&TagArgs::new(TagName::WrapStyle, "4", 0)).is_err());
    }
}
