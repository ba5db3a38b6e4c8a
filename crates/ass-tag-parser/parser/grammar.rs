//! Override block grammar
//!
//! Splits the content of one brace group into tag tokens and hands each to
//! its tag grammar. A token starts at a backslash and runs to the next
//! backslash outside parentheses, so `\t(\b1\i1)` stays one token.
//! Content before the first backslash, and whatever a tag grammar leaves
//! unread at the end of its token, becomes a comment.

use alloc::{string::ToString, vec::Vec};

use super::{ParseError, ParserConfig};
use crate::{
    ast::{Item, Tag},
    catalog::TagName,
    tags::{parse_tag, TagArgs},
};

/// Parse the content of one override block
///
/// `base` is the byte offset of `content` in the dialogue line and `depth`
/// the animation nesting level of the block.
pub(crate) fn parse_block(
    content: &str,
    base: usize,
    config: &ParserConfig,
    depth: usize,
) -> Result<Vec<Item>, ParseError> {
    let mut items = Vec::new();

    let mut start = content.find('\\').unwrap_or(content.len());
    if start > 0 {
        items.push(Item::Comment(content[..start].to_string()));
    }

    while start < content.len() {
        let end = token_end(content, start + 1);
        parse_token(
            &content[start + 1..end],
            base + start + 1,
            config,
            depth,
            &mut items,
        )?;
        start = end;
    }

    Ok(items)
}

/// Index of the backslash that ends the token starting at `from`
///
/// Parentheses only nest for tags with a parenthesized argument list; in a
/// free-text argument such as a font name they are ordinary characters.
fn token_end(content: &str, from: usize) -> usize {
    let nests = TagName::longest_prefix(&content[from..]).is_some_and(TagName::is_parenthesized);
    let mut depth = 0usize;
    for (index, byte) in content.bytes().enumerate().skip(from) {
        match byte {
            b'(' if nests => depth += 1,
            b')' if nests => depth = depth.saturating_sub(1),
            b'\\' if depth == 0 => return index,
            _ => {}
        }
    }
    content.len()
}

/// Parse one tag token (without its backslash) starting at byte `pos`
fn parse_token(
    token: &str,
    pos: usize,
    config: &ParserConfig,
    depth: usize,
    items: &mut Vec<Item>,
) -> Result<(), ParseError> {
    let (tag, consumed) = parse_tag_token(token, pos, config, depth)?;
    items.push(Item::Tag(tag));

    let rest = &token[consumed..];
    if !rest.is_empty() {
        items.push(Item::Comment(rest.to_string()));
    }
    Ok(())
}

/// Parse the tag at the start of `token` (without its backslash, at byte `pos`)
///
/// Returns the tag and the length of the token prefix it was read from;
/// the rest of the token is left to the caller.
pub(crate) fn parse_tag_token(
    token: &str,
    pos: usize,
    config: &ParserConfig,
    depth: usize,
) -> Result<(Tag, usize), ParseError> {
    let Some(name) = TagName::longest_prefix(token) else {
        return Err(ParseError::UnknownTag {
            name: unknown_name(token).to_string(),
            pos: pos.saturating_sub(1),
        });
    };

    let name_len = name.as_str().len();
    let args = TagArgs::new(name, &token[name_len..], pos + name_len);
    let (tag, consumed) = parse_tag(&args, config, depth)?;
    Ok((tag, name_len + consumed))
}

/// Name to report for a token that matches no catalog entry
fn unknown_name(token: &str) -> &str {
    let len = token
        .bytes()
        .take_while(u8::is_ascii_alphanumeric)
        .count();
    if len == 0 {
        token
    } else {
        &token[..len]
    }
}
