//! Drawing mode, baseline offset and style reset
//!
//! # Supported Tags
//!
//! - `p`: Drawing mode scale; `0` ends drawing mode
//! - `pbo`: Baseline offset for drawings
//! - `r`: Reset to a named style, or to the line's style when bare
//!
//! The path of a `\p` drawing is the dialogue text that follows its brace
//! group, so the tag grammar only reads the scale here and the parser fills
//! in the path. Composing reverses this: a top-level drawing closes its
//! group, writes the path and reopens a group for the closing `\p0`.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use super::{write_value, TagArgs, TagParse};
use crate::{
    ast::{DrawCommand, Tag},
    drawing::write_path,
};

pub(crate) fn parse_draw(args: &TagArgs<'_>) -> TagParse {
    let (scale, len) = args.required_uint()?;
    Ok((
        Tag::Draw {
            scale,
            path: Vec::new(),
        },
        len,
    ))
}

pub(crate) fn parse_baseline_offset(args: &TagArgs<'_>) -> TagParse {
    let (y, len) = args.optional_real()?;
    Ok((Tag::BaselineOffset { y }, len))
}

pub(crate) fn parse_reset(args: &TagArgs<'_>) -> TagParse {
    let style = (!args.text.is_empty()).then(|| args.text.to_string());
    Ok((Tag::ResetStyle { style }, args.text.len()))
}

pub(crate) fn write_reset(out: &mut String, style: Option<&str>) {
    if let Some(style) = style {
        out.push_str(style);
    }
}

/// `depth` is the animation nesting level; nested drawings print the scale only
pub(crate) fn write_draw(out: &mut String, scale: u32, path: &[DrawCommand], depth: usize) {
    write_value(out, &scale);
    if scale > 0 && depth == 0 {
        out.push('}');
        write_path(out, path);
        out.push_str("{\\p0");
    }
}
