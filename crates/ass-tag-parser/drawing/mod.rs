//! Vector drawing sub-grammar
//!
//! Parses and composes the path language used after `\p` and inside vector
//! `\clip`/`\iclip` tags: whitespace separated tokens where a command letter
//! is followed by the coordinates it consumes.
//!
//! ```text
//! m 0 0 l 100 0 100 100 0 100 c
//! ```
//!
//! The grammar knows nothing about the tag that carries the path, so the
//! same code serves drawings and clips. Errors are reported as
//! `BadAssTagArgument` against the enclosing tag.
//!
//! # Example
//!
//! ```rust
//! use ass_tag_parser::drawing::{compose_draw_commands, parse_draw_commands};
//! use ass_tag_parser::{DrawCommand, Point};
//!
//! let path = parse_draw_commands("m 0 0 l 10 0 10 10")?;
//! assert_eq!(path[0], DrawCommand::Move { point: Point::new(0, 0), close: true });
//! assert_eq!(compose_draw_commands(&path), "m 0 0 l 10 0 10 10");
//! # Ok::<(), ass_tag_parser::ParseError>(())
//! ```

use alloc::{string::String, vec::Vec};
use core::fmt::Write;

use crate::{
    ast::{DrawCommand, DrawPath, Point},
    catalog::TagName,
    parser::ParseError,
    utils::{parse_real, Number},
};

/// Parse a drawing path written as a standalone string
///
/// Errors are reported against the `\p` tag with offsets relative to `text`.
///
/// # Errors
///
/// Returns [`ParseError::BadAssTagArgument`] on an unknown command letter,
/// a non-numeric coordinate or a coordinate count that does not fit the
/// command.
pub fn parse_draw_commands(text: &str) -> Result<DrawPath, ParseError> {
    parse_path(text, 0, TagName::Draw)
}

/// Compose a drawing path to its canonical text
#[must_use]
pub fn compose_draw_commands(path: &[DrawCommand]) -> String {
    let mut out = String::new();
    write_path(&mut out, path);
    out
}

/// Parse `text` as a drawing path that belongs to `tag`
///
/// `base` is the byte offset of `text` in the dialogue line.
pub(crate) fn parse_path(text: &str, base: usize, tag: TagName) -> Result<DrawPath, ParseError> {
    let fail = |reason| ParseError::bad_argument(tag.as_str(), text, reason, base);

    let words: Vec<&str> = text.split_whitespace().collect();
    let mut path = Vec::new();
    let mut index = 0;

    while let Some(word) = words.get(index) {
        let letter = match word.as_bytes() {
            [letter] => *letter,
            _ => return Err(fail("expected a drawing command")),
        };
        index += 1;

        let mut values = Vec::new();
        while let Some(value) = words.get(index).and_then(|word| parse_real(word)) {
            values.push(value);
            index += 1;
        }

        if values.len() % 2 != 0 {
            return Err(fail("odd number of coordinates"));
        }
        let points: Vec<Point> = values
            .chunks_exact(2)
            .map(|pair| Point { x: pair[0], y: pair[1] })
            .collect();

        match letter {
            b'm' | b'n' => {
                let [point] = points.as_slice() else {
                    return Err(fail("move takes exactly one point"));
                };
                path.push(DrawCommand::Move {
                    point: *point,
                    close: letter == b'm',
                });
            }
            b'l' | b'p' => {
                if points.is_empty() {
                    return Err(fail("command needs at least one point"));
                }
                path.push(if letter == b'l' {
                    DrawCommand::Line(points)
                } else {
                    DrawCommand::ExtendSpline(points)
                });
            }
            b'b' => {
                if points.is_empty() || points.len() % 3 != 0 {
                    return Err(fail("bezier takes points in groups of three"));
                }
                path.extend(
                    points
                        .chunks_exact(3)
                        .map(|curve| DrawCommand::Bezier([curve[0], curve[1], curve[2]])),
                );
            }
            b's' => {
                if points.len() < 3 {
                    return Err(fail("spline needs at least three points"));
                }
                path.push(DrawCommand::Spline(points));
            }
            b'c' => {
                if !points.is_empty() {
                    return Err(fail("close takes no points"));
                }
                path.push(DrawCommand::CloseSpline);
            }
            _ => return Err(fail("unknown drawing command")),
        }
    }

    Ok(path)
}

/// Append the canonical text of `path` to `out`
pub(crate) fn write_path(out: &mut String, path: &[DrawCommand]) {
    for (i, command) in path.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(command.letter());
        for point in command.points() {
            // Writing to a String cannot fail
            let _ = write!(out, " {} {}", Number(point.x), Number(point.y));
        }
    }
}
