//! Positioning tags
//!
//! # Supported Tags
//!
//! - `pos(x,y)`: Absolute position
//! - `org(x,y)`: Rotation origin
//! - `move(x1,y1,x2,y2[,t1,t2])`: Movement, optionally limited to a time window

use alloc::{string::String, vec::Vec};

use super::{write_list, TagArgs, TagParse};
use crate::{ast::Tag, utils::parse_real};

pub(crate) fn parse_position(args: &TagArgs<'_>) -> TagParse {
    let ([x, y], len) = args.real_tuple::<2>()?;
    Ok((Tag::Position { x, y }, len))
}

pub(crate) fn parse_origin(args: &TagArgs<'_>) -> TagParse {
    let ([x, y], len) = args.real_tuple::<2>()?;
    Ok((Tag::RotationOrigin { x, y }, len))
}

pub(crate) fn parse_move(args: &TagArgs<'_>) -> TagParse {
    let (pieces, len) = args.parenthesized()?;
    let values = pieces
        .iter()
        .map(|(_, piece)| parse_real(piece.trim()))
        .collect::<Option<Vec<f64>>>()
        .ok_or_else(|| args.fail("expected a number"))?;

    let tag = match values.as_slice() {
        &[x1, y1, x2, y2] => Tag::Move {
            x1,
            y1,
            x2,
            y2,
            times: None,
        },
        &[x1, y1, x2, y2, t1, t2] => Tag::Move {
            x1,
            y1,
            x2,
            y2,
            times: Some((t1, t2)),
        },
        _ => return Err(args.fail("move takes 4 or 6 values")),
    };
    Ok((tag, len))
}

pub(crate) fn write_move(out: &mut String, coordinates: [f64; 4], times: Option<(f64, f64)>) {
    out.push('(');
    write_list(out, &coordinates);
    if let Some((t1, t2)) = times {
        out.push(',');
        write_list(out, &[t1, t2]);
    }
    out.push(')');
}
