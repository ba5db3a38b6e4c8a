//! Per-tag argument grammars
//!
//! Each submodule owns one family of tags and provides both directions for
//! it: a `parse_*` function that reads the arguments following the tag name
//! and a `write_*` function that appends the canonical text. The two
//! dispatch points, [`parse_tag`] and [`write_tag`], match exhaustively over
//! the catalog so adding a tag is a compile-checked change in one place.
//!
//! # Modules
//!
//! - [`formatting`] - Basic text formatting tags (`\b`, `\i`, `\u`, `\s`)
//! - [`advanced`] - Border, shadow and blur tags (`\bord`, `\shad`, `\be`, `\blur`)
//! - [`font`] - Font control tags (`\fn`, `\fe`, `\fs`, `\fscx`, `\fscy`, `\fsp`)
//! - [`transform`] - Rotation and shear tags (`\frx`, `\fry`, `\frz`, `\fr`, `\fax`, `\fay`)
//! - [`color`] - Color and alpha tags (`\c`, `\1c`-`\4c`, `\alpha`, `\1a`-`\4a`)
//! - [`karaoke`] - Karaoke timing tags (`\k`, `\K`, `\kf`, `\ko`)
//! - [`alignment`] - Alignment and wrapping tags (`\an`, `\a`, `\q`)
//! - [`position`] - Positioning tags (`\pos`, `\move`, `\org`)
//! - [`animation`] - Fades and animated transforms (`\fad`, `\fade`, `\t`)
//! - [`clipping`] - Clipping masks (`\clip`, `\iclip`)
//! - [`misc`] - Drawing mode, baseline offset and style reset (`\p`, `\pbo`, `\r`)
//!
//! Parsing a tag consumes a prefix of its argument text; whatever follows
//! is handed back to the caller, which turns it into a comment.

use alloc::{string::String, vec::Vec};
use core::fmt::{Display, Write};

use crate::{
    ast::Tag,
    catalog::TagName,
    parser::{ParseError, ParserConfig},
    utils::{
        find_closing_paren, int_prefix_len, parse_real, real_prefix_len, split_top_level, Number,
    },
};

pub mod advanced;
pub mod alignment;
pub mod animation;
pub mod clipping;
pub mod color;
pub mod font;
pub mod formatting;
pub mod karaoke;
pub mod misc;
pub mod position;
pub mod transform;

/// Result of parsing one tag: the tag and the number of argument bytes consumed
pub(crate) type TagParse = Result<(Tag, usize), ParseError>;

/// Arguments of one tag token
#[derive(Debug, Clone, Copy)]
pub(crate) struct TagArgs<'a> {
    /// Catalog entry the token resolved to
    pub name: TagName,
    /// Text after the tag name, up to the end of the token
    pub text: &'a str,
    /// Byte offset of `text` in the dialogue line
    pub pos: usize,
}

impl<'a> TagArgs<'a> {
    pub(crate) const fn new(name: TagName, text: &'a str, pos: usize) -> Self {
        Self { name, text, pos }
    }

    /// Bad-argument error for this tag
    pub(crate) fn fail(&self, reason: &'static str) -> ParseError {
        ParseError::bad_argument(self.name.as_str(), self.text, reason, self.pos)
    }

    /// Optional real number; `None` when the arguments do not start with one
    pub(crate) fn optional_real(&self) -> Result<(Option<f64>, usize), ParseError> {
        let len = real_prefix_len(self.text);
        if len == 0 {
            return Ok((None, 0));
        }
        let value = self.text[..len]
            .parse()
            .map_err(|_| self.fail("invalid number"))?;
        Ok((Some(value), len))
    }

    /// Optional real number that must not be negative
    pub(crate) fn optional_size(&self) -> Result<(Option<f64>, usize), ParseError> {
        let (value, len) = self.optional_real()?;
        if value.is_some_and(|size| size < 0.0) {
            return Err(self.fail("value cannot be negative"));
        }
        Ok((value, len))
    }

    /// Optional integer that must fit in `u32`
    pub(crate) fn optional_uint(&self) -> Result<(Option<u32>, usize), ParseError> {
        let len = int_prefix_len(self.text);
        if len == 0 {
            return Ok((None, 0));
        }
        let value = self.text[..len]
            .parse::<i64>()
            .ok()
            .and_then(|value| u32::try_from(value).ok())
            .ok_or_else(|| self.fail("expected a non-negative integer"))?;
        Ok((Some(value), len))
    }

    /// Required integer that must fit in `u32`
    pub(crate) fn required_uint(&self) -> Result<(u32, usize), ParseError> {
        match self.optional_uint()? {
            (Some(value), len) => Ok((value, len)),
            (None, _) => Err(self.fail("expected an integer")),
        }
    }

    /// Parenthesized argument list
    ///
    /// Returns the raw comma separated pieces (with offsets relative to the
    /// start of `text`) and the byte length up to and including `)`.
    pub(crate) fn parenthesized(&self) -> Result<(Vec<(usize, &'a str)>, usize), ParseError> {
        let (inner, consumed) = self.paren_body()?;
        let pieces = split_top_level(inner)
            .into_iter()
            .map(|(offset, piece)| (offset + 1, piece))
            .collect();
        Ok((pieces, consumed))
    }

    /// Text between the opening `(` and its `)`, and the byte length consumed
    pub(crate) fn paren_body(&self) -> Result<(&'a str, usize), ParseError> {
        if !self.text.starts_with('(') {
            return Err(self.fail("expected '('"));
        }
        let close = find_closing_paren(self.text).ok_or_else(|| self.fail("missing ')'"))?;
        Ok((&self.text[1..close], close + 1))
    }

    /// Parenthesized list of exactly `N` real numbers
    pub(crate) fn real_tuple<const N: usize>(&self) -> Result<([f64; N], usize), ParseError> {
        let (pieces, consumed) = self.parenthesized()?;
        if pieces.len() != N {
            return Err(self.fail("wrong number of values"));
        }
        let mut values = [0.0; N];
        for (slot, (_, piece)) in values.iter_mut().zip(pieces) {
            *slot = parse_real(piece.trim()).ok_or_else(|| self.fail("expected a number"))?;
        }
        Ok((values, consumed))
    }
}

/// Parse the arguments of `args.name` into a tag
///
/// `depth` is the animation nesting level of the tag.
pub(crate) fn parse_tag(args: &TagArgs<'_>, config: &ParserConfig, depth: usize) -> TagParse {
    match args.name {
        TagName::Bold => formatting::parse_bold(args),
        TagName::Italic | TagName::Underline | TagName::Strikeout => formatting::parse_toggle(args),
        TagName::Border
        | TagName::XBorder
        | TagName::YBorder
        | TagName::Shadow
        | TagName::XShadow
        | TagName::YShadow => advanced::parse_size(args),
        TagName::BlurEdges => advanced::parse_blur_edges(args),
        TagName::BlurEdgesGauss => advanced::parse_blur_gauss(args),
        TagName::FontName => font::parse_font_name(args),
        TagName::FontEncoding | TagName::FontSize => font::parse_font_number(args),
        TagName::FontXScale | TagName::FontYScale | TagName::LetterSpacing => {
            font::parse_font_metric(args)
        }
        TagName::XRotation
        | TagName::YRotation
        | TagName::ZRotation
        | TagName::ZRotationShort
        | TagName::XShear
        | TagName::YShear => transform::parse_transform(args),
        TagName::ColorShort
        | TagName::Color1
        | TagName::Color2
        | TagName::Color3
        | TagName::Color4 => color::parse_color(args),
        TagName::Alpha
        | TagName::Alpha1
        | TagName::Alpha2
        | TagName::Alpha3
        | TagName::Alpha4 => color::parse_alpha(args),
        TagName::Karaoke
        | TagName::KaraokeSweep
        | TagName::KaraokeFill
        | TagName::KaraokeOutline => karaoke::parse_karaoke(args),
        TagName::Alignment | TagName::AlignmentLegacy => alignment::parse_alignment(args),
        TagName::WrapStyle => alignment::parse_wrap_style(args),
        TagName::ResetStyle => misc::parse_reset(args),
        TagName::Draw => misc::parse_draw(args),
        TagName::BaselineOffset => misc::parse_baseline_offset(args),
        TagName::Position => position::parse_position(args),
        TagName::RotationOrigin => position::parse_origin(args),
        TagName::Move => position::parse_move(args),
        TagName::Fade => animation::parse_fade(args),
        TagName::FadeComplex => animation::parse_fade_complex(args),
        TagName::Animation => animation::parse_animation(args, config, depth),
        TagName::Clip | TagName::InverseClip => clipping::parse_clip(args),
    }
}

/// Append the canonical text of `tag`, backslash included, to `out`
///
/// `depth` is the animation nesting level; drawings only break out of the
/// brace group at the top level.
pub(crate) fn write_tag(out: &mut String, tag: &Tag, depth: usize) {
    out.push('\\');
    out.push_str(tag.name().as_str());
    match tag {
        Tag::Bold { weight } => formatting::write_bold(out, *weight),
        Tag::Italic { enabled } | Tag::Underline { enabled } | Tag::Strikeout { enabled } => {
            formatting::write_toggle(out, *enabled);
        }
        Tag::Border { size }
        | Tag::XBorder { size }
        | Tag::YBorder { size }
        | Tag::Shadow { size }
        | Tag::XShadow { size }
        | Tag::YShadow { size } => write_optional(out, size.map(Number)),
        Tag::BlurEdges { times } => write_optional(out, *times),
        Tag::BlurEdgesGauss { weight } => write_optional(out, weight.map(Number)),
        Tag::FontName { name } => font::write_font_name(out, name.as_deref()),
        Tag::FontEncoding { encoding } => write_optional(out, *encoding),
        Tag::FontSize { size } => write_optional(out, *size),
        Tag::FontXScale { scale } | Tag::FontYScale { scale } => {
            write_optional(out, scale.map(Number));
        }
        Tag::LetterSpacing { spacing } => write_optional(out, spacing.map(Number)),
        Tag::XRotation { angle } | Tag::YRotation { angle } | Tag::ZRotation { angle, .. } => {
            write_optional(out, angle.map(Number));
        }
        Tag::XShear { value } | Tag::YShear { value } => write_optional(out, value.map(Number)),
        Tag::Color { color, .. } => color::write_color(out, *color),
        Tag::Alpha { value, .. } => color::write_alpha(out, *value),
        Tag::Karaoke { duration, .. } => karaoke::write_karaoke(out, *duration),
        Tag::Alignment { position, legacy } => {
            alignment::write_alignment(out, *position, *legacy);
        }
        Tag::WrapStyle { style } => write_value(out, style),
        Tag::ResetStyle { style } => misc::write_reset(out, style.as_deref()),
        Tag::Draw { scale, path } => misc::write_draw(out, *scale, path, depth),
        Tag::BaselineOffset { y } => write_optional(out, y.map(Number)),
        Tag::Position { x, y } | Tag::RotationOrigin { x, y } => {
            write_tuple(out, &[*x, *y]);
        }
        Tag::Move {
            x1,
            y1,
            x2,
            y2,
            times,
        } => position::write_move(out, [*x1, *y1, *x2, *y2], *times),
        Tag::Fade { time1, time2 } => write_tuple(out, &[*time1, *time2]),
        Tag::FadeComplex {
            alpha1,
            alpha2,
            alpha3,
            time1,
            time2,
            time3,
            time4,
        } => animation::write_fade_complex(
            out,
            [*alpha1, *alpha2, *alpha3],
            [*time1, *time2, *time3, *time4],
        ),
        Tag::Animation {
            tags,
            times,
            acceleration,
        } => animation::write_animation(out, tags, *times, *acceleration, depth),
        Tag::ClipRectangle { x1, y1, x2, y2, .. } => write_tuple(out, &[*x1, *y1, *x2, *y2]),
        Tag::ClipVector { scale, path, .. } => clipping::write_clip_vector(out, *scale, path),
    }
}

/// Append `value` if it is set; an unset value leaves the bare tag name
pub(crate) fn write_optional<T: Display>(out: &mut String, value: Option<T>) {
    if let Some(value) = value {
        write_value(out, &value);
    }
}

pub(crate) fn write_value<T: Display + ?Sized>(out: &mut String, value: &T) {
    // Writing to a String cannot fail
    let _ = write!(out, "{value}");
}

/// Append `(a,b,...)`
pub(crate) fn write_tuple(out: &mut String, values: &[f64]) {
    out.push('(');
    write_list(out, values);
    out.push(')');
}

/// Append `a,b,...` without parentheses
pub(crate) fn write_list(out: &mut String, values: &[f64]) {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        write_value(out, &Number(*value));
    }
}
