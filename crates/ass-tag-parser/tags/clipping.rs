//! Clipping tags
//!
//! # Supported Tags
//!
//! - `clip(x1,y1,x2,y2)`, `iclip(x1,y1,x2,y2)`: Rectangular clip
//! - `clip([scale,]path)`, `iclip([scale,]path)`: Vector clip using the
//!   drawing path grammar
//!
//! The argument count selects the shape: four values are a rectangle, one
//! is a path and two are a scale followed by a path.

use alloc::{string::String, vec::Vec};

use super::{write_value, TagArgs, TagParse};
use crate::{
    ast::{DrawCommand, Tag},
    catalog::TagName,
    drawing::{parse_path, write_path},
    parser::ParseError,
    utils::{parse_int, parse_real},
};

pub(crate) fn parse_clip(args: &TagArgs<'_>) -> TagParse {
    let inverse = args.name == TagName::InverseClip;
    let (pieces, len) = args.parenthesized()?;

    let tag = match pieces.as_slice() {
        [a, b, c, d] => {
            let mut values = [0.0; 4];
            for (slot, (_, piece)) in values.iter_mut().zip([a, b, c, d]) {
                *slot = parse_real(piece.trim()).ok_or_else(|| args.fail("expected a number"))?;
            }
            let [x1, y1, x2, y2] = values;
            Tag::ClipRectangle {
                x1,
                y1,
                x2,
                y2,
                inverse,
            }
        }
        [(offset, path)] => Tag::ClipVector {
            scale: None,
            path: clip_path(args, path, *offset)?,
            inverse,
        },
        [(_, scale), (offset, path)] => {
            let scale = parse_int(scale.trim())
                .and_then(|scale| u32::try_from(scale).ok())
                .ok_or_else(|| args.fail("expected a non-negative integer scale"))?;
            Tag::ClipVector {
                scale: Some(scale),
                path: clip_path(args, path, *offset)?,
                inverse,
            }
        }
        _ => return Err(args.fail("clip takes 1, 2 or 4 values")),
    };
    Ok((tag, len))
}

fn clip_path(args: &TagArgs<'_>, text: &str, offset: usize) -> Result<Vec<DrawCommand>, ParseError> {
    let path = parse_path(text, args.pos + offset, args.name)?;
    if path.is_empty() {
        return Err(args.fail("clip path is empty"));
    }
    Ok(path)
}

pub(crate) fn write_clip_vector(out: &mut String, scale: Option<u32>, path: &[DrawCommand]) {
    out.push('(');
    if let Some(scale) = scale {
        write_value(out, &scale);
        out.push(',');
    }
    write_path(out, path);
    out.push(')');
}
