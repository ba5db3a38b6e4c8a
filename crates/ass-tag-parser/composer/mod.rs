//! Item sequence composer
//!
//! Produces canonical dialogue text from an item sequence. Every maximal
//! run of non-text items becomes one brace group; text is written verbatim
//! between groups. Brace markers are hints only and contribute nothing, and
//! a group whose content is empty is left out entirely, so
//! `[ListOpening, ListEnding]` composes to the empty string.
//!
//! [`compose`] never fails. [`try_compose`] first checks that the sequence
//! would parse back to the same text and reports the first problem as a
//! [`ComposeError`].
//!
//! # Example
//!
//! ```rust
//! use ass_tag_parser::{compose, Item, Tag};
//!
//! let items = vec![
//!     Item::text("abc def"),
//!     Tag::Alignment { position: Some(5), legacy: false }.into(),
//!     Item::text("ghi jkl"),
//! ];
//! assert_eq!(compose(&items), r"abc def{\an5}ghi jkl");
//! ```

use alloc::{format, string::String, vec::Vec};

use crate::{
    ast::{DrawCommand, Item, Tag},
    parser::{grammar::parse_tag_token, ParserConfig},
    tags::write_tag,
    utils::ComposeError,
};

/// Default limit for nested `\t` animations
pub const DEFAULT_MAX_NESTING_DEPTH: usize = crate::parser::DEFAULT_MAX_NESTING_DEPTH;

/// Limits checked by [`try_compose_with_config`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposerConfig {
    /// Deepest allowed `\t` nesting
    pub max_nesting_depth: usize,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl ComposerConfig {
    /// Set the deepest allowed animation nesting.
    #[must_use]
    pub const fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}

/// Compose an item sequence to canonical text
#[must_use]
pub fn compose(items: &[Item]) -> String {
    let mut out = String::new();
    let mut group = String::new();

    for item in items {
        match item {
            Item::Text(text) => {
                flush_group(&mut out, &mut group);
                out.push_str(text);
            }
            Item::Comment(text) => group.push_str(text),
            Item::ListOpening | Item::ListEnding => {}
            Item::Tag(tag) => write_tag(&mut group, tag, 0),
        }
    }
    flush_group(&mut out, &mut group);

    out
}

fn flush_group(out: &mut String, group: &mut String) {
    if !group.is_empty() {
        out.push('{');
        out.push_str(group);
        out.push('}');
        group.clear();
    }
}

/// Validate an item sequence with the default limits, then compose it
///
/// # Errors
///
/// Returns the first structural problem found; see [`ComposeError`].
pub fn try_compose(items: &[Item]) -> Result<String, ComposeError> {
    try_compose_with_config(items, &ComposerConfig::default())
}

/// Validate an item sequence with explicit limits, then compose it
///
/// # Errors
///
/// Returns the first structural problem found; see [`ComposeError`].
pub fn try_compose_with_config(
    items: &[Item],
    config: &ComposerConfig,
) -> Result<String, ComposeError> {
    validate(items, config)?;
    Ok(compose(items))
}

/// Check that `items` composes to text that parses back to the same text
///
/// # Errors
///
/// Returns the first structural problem found; see [`ComposeError`].
pub fn validate(items: &[Item], config: &ComposerConfig) -> Result<(), ComposeError> {
    // Last tag of the open group and the comment text written after it
    let mut trailing: Option<(&Tag, String)> = None;

    for item in items {
        match item {
            Item::Text(text) => {
                check_characters(text, "text", &['{'])?;
                trailing = None;
            }
            Item::Comment(text) => {
                check_characters(text, "comment", &['{', '}', '\\'])?;
                check_parentheses(text, "comment")?;
                if let Some((tag, comment)) = trailing.as_mut() {
                    comment.push_str(text);
                    check_comment_boundary(tag, comment, config)?;
                }
            }
            Item::ListOpening | Item::ListEnding => {}
            Item::Tag(tag) => {
                validate_tag(tag, config, 0)?;
                trailing = Some((tag, String::new()));
            }
        }
    }
    Ok(())
}

/// Check that `comment`, written right after `tag`, reads back as a comment
///
/// The tag token is parsed alone and with the comment appended; both must
/// yield the same tag from the same prefix.
fn check_comment_boundary(
    tag: &Tag,
    comment: &str,
    config: &ComposerConfig,
) -> Result<(), ComposeError> {
    if comment.is_empty() {
        return Ok(());
    }

    let mut token = String::new();
    if tag.is_drawing() {
        // A top-level drawing ends with the `\p0` that closes it
        write_tag(&mut token, &Tag::Draw { scale: 0, path: Vec::new() }, 0);
    } else {
        write_tag(&mut token, tag, 0);
    }
    let token = &token[1..];

    let parser_config = ParserConfig::default().with_max_nesting_depth(config.max_nesting_depth);
    let alone = parse_tag_token(token, 1, &parser_config, 0);
    let joined = parse_tag_token(&format!("{token}{comment}"), 1, &parser_config, 0);
    match (alone, joined) {
        (Ok(alone), Ok(joined)) if alone == joined => Ok(()),
        _ => Err(ComposeError::CommentMergesIntoTag {
            tag: tag.name().as_str(),
        }),
    }
}

fn check_characters(
    text: &str,
    context: &'static str,
    forbidden: &[char],
) -> Result<(), ComposeError> {
    match text.chars().find(|ch| forbidden.contains(ch)) {
        Some(ch) => Err(ComposeError::ForbiddenCharacter { context, ch }),
        None => Ok(()),
    }
}

fn check_parentheses(text: &str, context: &'static str) -> Result<(), ComposeError> {
    let mut depth = 0usize;
    for ch in text.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or(ComposeError::UnbalancedParentheses { context })?;
            }
            _ => {}
        }
    }
    if depth == 0 {
        Ok(())
    } else {
        Err(ComposeError::UnbalancedParentheses { context })
    }
}

fn check_name(name: Option<&str>, context: &'static str) -> Result<(), ComposeError> {
    if let Some(name) = name {
        check_characters(name, context, &['{', '}', '\\'])?;
        check_parentheses(name, context)?;
    }
    Ok(())
}

/// Check that every value is finite and, if `non_negative`, not below zero
fn check_numbers(
    tag: &Tag,
    values: &[Option<f64>],
    non_negative: bool,
) -> Result<(), ComposeError> {
    let name = tag.name().as_str();
    for value in values.iter().flatten() {
        if !value.is_finite() {
            return Err(ComposeError::NonFiniteNumber { tag: name });
        }
        if non_negative && *value < 0.0 {
            return Err(ComposeError::NegativeValue { tag: name });
        }
    }
    Ok(())
}

fn check_path(tag: &Tag, path: &[DrawCommand]) -> Result<(), ComposeError> {
    for command in path {
        let points = command.points();
        if points.len() < command.min_points() {
            return Err(ComposeError::TooFewPoints {
                command: command.letter(),
                expected: command.min_points(),
                found: points.len(),
            });
        }
        for point in points {
            check_numbers(tag, &[Some(point.x), Some(point.y)], false)?;
        }
    }
    Ok(())
}

fn validate_tag(tag: &Tag, config: &ComposerConfig, depth: usize) -> Result<(), ComposeError> {
    match tag {
        Tag::Bold { .. }
        | Tag::Italic { .. }
        | Tag::Underline { .. }
        | Tag::Strikeout { .. }
        | Tag::BlurEdges { .. }
        | Tag::FontEncoding { .. }
        | Tag::FontSize { .. }
        | Tag::Color { .. }
        | Tag::Alpha { .. } => {}
        Tag::Karaoke { duration, .. } => {
            if depth > 0 && duration % 10 != 0 {
                return Err(ComposeError::KaraokeTenthsInAnimation {
                    duration: *duration,
                });
            }
        }
        Tag::Border { size }
        | Tag::XBorder { size }
        | Tag::YBorder { size }
        | Tag::Shadow { size }
        | Tag::XShadow { size }
        | Tag::YShadow { size }
        | Tag::BlurEdgesGauss { weight: size } => check_numbers(tag, &[*size], true)?,
        Tag::FontXScale { scale: value }
        | Tag::FontYScale { scale: value }
        | Tag::LetterSpacing { spacing: value }
        | Tag::XRotation { angle: value }
        | Tag::YRotation { angle: value }
        | Tag::ZRotation { angle: value, .. }
        | Tag::XShear { value }
        | Tag::YShear { value }
        | Tag::BaselineOffset { y: value } => check_numbers(tag, &[*value], false)?,
        Tag::FontName { name } => check_name(name.as_deref(), "font name")?,
        Tag::ResetStyle { style } => check_name(style.as_deref(), "style name")?,
        Tag::Alignment { position, legacy } => {
            if let Some(value) = position.filter(|value| !(1..=9).contains(value)) {
                return Err(ComposeError::AlignmentOutOfRange {
                    value,
                    legacy: *legacy,
                });
            }
        }
        Tag::WrapStyle { style } => {
            if *style > 3 {
                return Err(ComposeError::WrapStyleOutOfRange { style: *style });
            }
        }
        Tag::Draw { scale, path } => {
            if depth > 0 {
                return Err(ComposeError::DrawingInAnimation);
            }
            if *scale == 0 && !path.is_empty() {
                return Err(ComposeError::DrawingWithoutScale);
            }
            check_path(tag, path)?;
        }
        Tag::Position { x, y } | Tag::RotationOrigin { x, y } => {
            check_numbers(tag, &[Some(*x), Some(*y)], false)?;
        }
        Tag::Move {
            x1,
            y1,
            x2,
            y2,
            times,
        } => check_numbers(
            tag,
            &[
                Some(*x1),
                Some(*y1),
                Some(*x2),
                Some(*y2),
                times.map(|(t1, _)| t1),
                times.map(|(_, t2)| t2),
            ],
            false,
        )?,
        Tag::Fade { time1, time2 } => check_numbers(tag, &[Some(*time1), Some(*time2)], false)?,
        Tag::FadeComplex {
            time1,
            time2,
            time3,
            time4,
            ..
        } => check_numbers(
            tag,
            &[Some(*time1), Some(*time2), Some(*time3), Some(*time4)],
            false,
        )?,
        Tag::Animation {
            tags,
            times,
            acceleration,
        } => {
            if depth + 1 > config.max_nesting_depth {
                return Err(ComposeError::MaxNestingDepth {
                    limit: config.max_nesting_depth,
                });
            }
            check_numbers(
                tag,
                &[times.map(|(t1, _)| t1), times.map(|(_, t2)| t2), *acceleration],
                false,
            )?;
            for nested in tags {
                validate_tag(nested, config, depth + 1)?;
            }
        }
        Tag::ClipRectangle { x1, y1, x2, y2, .. } => {
            check_numbers(tag, &[Some(*x1), Some(*y1), Some(*x2), Some(*y2)], false)?;
        }
        Tag::ClipVector { path, .. } => {
            if path.is_empty() {
                return Err(ComposeError::EmptyClipPath);
            }
            check_path(tag, path)?;
        }
    }
    Ok(())
}
