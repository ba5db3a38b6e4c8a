//! Plain text extraction
//!
//! Reduces a dialogue line to the text a viewer would read: tags, comments
//! and drawings are dropped and the text escapes are resolved.
//!
//! | Escape | Result |
//! |---|---|
//! | `\N` | line break |
//! | `\n` | line break |
//! | `\h` | no-break space (U+00A0) |
//!
//! # Example
//!
//! ```rust
//! use ass_tag_parser::to_plaintext;
//!
//! let text = to_plaintext(r"-Hey\N{\rAlternate}-Huh?{\p1}m 0 0 l 1 1{\p0}")?;
//! assert_eq!(text, "-Hey\n-Huh?");
//! # Ok::<(), ass_tag_parser::ParseError>(())
//! ```

use alloc::string::String;

use crate::{ast::Item, parser::parse, parser::ParseError};

/// Parse `text` and return only its readable text
///
/// # Errors
///
/// Returns the [`ParseError`] of the line if it does not parse.
pub fn to_plaintext(text: &str) -> Result<String, ParseError> {
    let mut out = String::new();
    for item in parse(text)? {
        if let Item::Text(text) = item {
            push_unescaped(&mut out, &text);
        }
    }
    Ok(out)
}

fn push_unescaped(out: &mut String, text: &str) {
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            match chars.peek() {
                Some('N' | 'n') => {
                    chars.next();
                    out.push('\n');
                    continue;
                }
                Some('h') => {
                    chars.next();
                    out.push('\u{a0}');
                    continue;
                }
                _ => {}
            }
        }
        out.push(ch);
    }
}
