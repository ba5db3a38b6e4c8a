//! Font control tags
//!
//! # Supported Tags
//!
//! - `fn`: Font name (rest of the token, verbatim)
//! - `fe`: Font encoding (non-negative integer)
//! - `fs`: Font size (non-negative integer)
//! - `fscx`, `fscy`: Horizontal and vertical scale in percent
//! - `fsp`: Letter spacing (may be negative)

use alloc::string::{String, ToString};

use super::{TagArgs, TagParse};
use crate::{ast::Tag, catalog::TagName};

/// `\fn` consumes the whole token; an empty name resets to the style font
pub(crate) fn parse_font_name(args: &TagArgs<'_>) -> TagParse {
    let name = (!args.text.is_empty()).then(|| args.text.to_string());
    Ok((Tag::FontName { name }, args.text.len()))
}

/// `\fe` and `\fs`
pub(crate) fn parse_font_number(args: &TagArgs<'_>) -> TagParse {
    let (value, len) = args.optional_uint()?;
    let tag = match args.name {
        TagName::FontEncoding => Tag::FontEncoding { encoding: value },
        _ => Tag::FontSize { size: value },
    };
    Ok((tag, len))
}

/// `\fscx`, `\fscy` and `\fsp`
pub(crate) fn parse_font_metric(args: &TagArgs<'_>) -> TagParse {
    let (value, len) = args.optional_real()?;
    let tag = match args.name {
        TagName::FontXScale => Tag::FontXScale { scale: value },
        TagName::FontYScale => Tag::FontYScale { scale: value },
        _ => Tag::LetterSpacing { spacing: value },
    };
    Ok((tag, len))
}

pub(crate) fn write_font_name(out: &mut String, name: Option<&str>) {
    if let Some(name) = name {
        out.push_str(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_name_keeps_spaces() {
        let args = TagArgs::new(TagName::FontName, "Comic Sans", 3);
        assert_eq!(
            parse_font_name(&args).unwrap(),
            (
                Tag::FontName {
                    name: Some("Comic Sans".to_string())
                },
                10
            )
        );
        let args = TagArgs::new(TagName::FontName, "", 3);
        assert_eq!(parse_font_name(&args).unwrap().0, Tag::FontName { name: None });
    }

    #[test]
    fn font_size_is_integral() {
        let args = TagArgs::new(TagName::FontSize, "5.4", 0);
        assert_eq!(
            parse_font_number(&args).unwrap(),
            (Tag::FontSize { size: Some(5) }, 1)
        );
        assert!(parse_font_number(&TagArgs::new(TagName::FontEncoding, "-1", 0)).is_err());
    }

    #[test]
    fn letter_spacing_may_be_negative() {
        let args = TagArgs::new(TagName::LetterSpacing, "-5.5", 0);
        assert_eq!(
            parse_font_metric(&args).unwrap().0,
            Tag::LetterSpacing {
                spacing: Some(-5.5)
            }
        );
    }
}
