//! Fade and animation tags
//!
//! `\t` is the one self-referential tag: its payload is an override block
//! parsed with the same grammar one nesting level deeper. Nested payloads
//! hold tags only; whitespace between them is dropped, any other comment is
//! rejected, as is a drawing.
//!
//! # Supported Tags
//!
//! - `fad(t1,t2)`: Fade in and out
//! - `fade(a1,a2,a3,t1,t2,t3,t4)`: Three-stage alpha fade
//! - `t([t1,t2,][accel,]tags)`: Animated transform
//!
//! # Example
//!
//! ```rust
//! use ass_tag_parser::{parse, Item, Tag};
//!
//! let items = parse(r"{\t(0,500,\fscx100)}")?;
//! let Item::Tag(Tag::Animation { tags, times, acceleration }) = &items[0] else {
//!     unreachable!()
//! };
//! assert_eq!(*times, Some((0.0, 500.0)));
//! assert_eq!(*acceleration, None);
//! assert_eq!(tags, &[Tag::FontXScale { scale: Some(100.0) }]);
//! # Ok::<(), ass_tag_parser::ParseError>(())
//! ```

use alloc::{string::String, vec::Vec};

use super::{write_list, write_tag, write_value, TagArgs, TagParse};
use crate::{
    ast::{Item, Tag},
    parser::{grammar::parse_block, ParseError, ParserConfig},
    utils::{parse_int, parse_real},
};

pub(crate) fn parse_fade(args: &TagArgs<'_>) -> TagParse {
    let ([time1, time2], len) = args.real_tuple::<2>()?;
    Ok((Tag::Fade { time1, time2 }, len))
}

pub(crate) fn parse_fade_complex(args: &TagArgs<'_>) -> TagParse {
    let (pieces, len) = args.parenthesized()?;
    let [a1, a2, a3, t1, t2, t3, t4] = pieces.as_slice() else {
        return Err(args.fail("fade takes 7 values"));
    };

    let alpha = |(_, piece): &(usize, &str)| {
        parse_int(piece.trim())
            .and_then(|value| u8::try_from(value).ok())
            .ok_or_else(|| args.fail("alpha must be an integer 0-255"))
    };
    let time = |(_, piece): &(usize, &str)| {
        parse_real(piece.trim()).ok_or_else(|| args.fail("expected a number"))
    };

    let tag = Tag::FadeComplex {
        alpha1: alpha(a1)?,
        alpha2: alpha(a2)?,
        alpha3: alpha(a3)?,
        time1: time(t1)?,
        time2: time(t2)?,
        time3: time(t3)?,
        time4: time(t4)?,
    };
    Ok((tag, len))
}

/// `\t`; `depth` is the nesting level of this tag
pub(crate) fn parse_animation(
    args: &TagArgs<'_>,
    config: &ParserConfig,
    depth: usize,
) -> TagParse {
    let (inner, len) = args.paren_body()?;
    let split = inner.find('\\').unwrap_or(inner.len());
    let (prefix, payload) = inner.split_at(split);

    let mut values = prefix
        .split(',')
        .map(str::trim)
        .collect::<Vec<_>>();
    if values.last().is_some_and(|value| value.is_empty()) {
        values.pop();
    }
    let values = values
        .into_iter()
        .map(|value| parse_real(value).ok_or_else(|| args.fail("expected a number")))
        .collect::<Result<Vec<_>, _>>()?;

    let (times, acceleration) = match *values.as_slice() {
        [] => (None, None),
        [accel] => (None, Some(accel)),
        [t1, t2] => (Some((t1, t2)), None),
        [t1, t2, accel] => (Some((t1, t2)), Some(accel)),
        _ => return Err(args.fail("too many leading values")),
    };

    let payload_pos = args.pos + 1 + split;
    if depth + 1 > config.max_nesting_depth {
        return Err(ParseError::MaxNestingDepth {
            limit: config.max_nesting_depth,
            pos: payload_pos,
        });
    }

    let mut tags = Vec::new();
    for item in parse_block(payload, payload_pos, config, depth + 1)? {
        match item {
            Item::Tag(Tag::Draw { .. }) => {
                return Err(args.fail("drawing inside an animation"));
            }
            Item::Tag(tag) => tags.push(tag),
            Item::Comment(text) if text.trim().is_empty() => {}
            _ => return Err(args.fail("animation may only contain tags")),
        }
    }

    Ok((
        Tag::Animation {
            tags,
            times,
            acceleration,
        },
        len,
    ))
}

pub(crate) fn write_fade_complex(out: &mut String, alphas: [u8; 3], times: [f64; 4]) {
    out.push('(');
    for alpha in alphas {
        write_value(out, &alpha);
        out.push(',');
    }
    write_list(out, &times);
    out.push(')');
}

pub(crate) fn write_animation(
    out: &mut String,
    tags: &[Tag],
    times: Option<(f64, f64)>,
    acceleration: Option<f64>,
    depth: usize,
) {
    out.push('(');
    if let Some((t1, t2)) = times {
        write_list(out, &[t1, t2]);
        out.push(',');
    }
    if let Some(accel) = acceleration {
        write_list(out, &[accel]);
        out.push(',');
    }
    for tag in tags {
        write_tag(out, tag, depth + 1);
    }
    out.push(')');
}
