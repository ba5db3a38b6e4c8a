//! Font face collection
//!
//! Walks the tags of each line and records every face (name, bold, italic)
//! that some visible text is rendered with. Each line starts from the
//! default face; `\r` returns to it.

use std::collections::BTreeMap;

use ass_tag_parser::{Item, Tag};
use serde::Serialize;

/// One font face as reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontFace {
    pub fontname: String,
    pub bold: bool,
    pub italic: bool,
}

impl FontFace {
    #[must_use]
    pub fn new(fontname: impl Into<String>, bold: bool, italic: bool) -> Self {
        Self {
            fontname: fontname.into(),
            bold,
            italic,
        }
    }

    /// Report key: `Name`, `Name-bold`, `Name-italic` or `Name-bold-italic`
    #[must_use]
    pub fn key(&self) -> String {
        let mut key = self.fontname.clone();
        if self.bold {
            key.push_str("-bold");
        }
        if self.italic {
            key.push_str("-italic");
        }
        key
    }

    fn apply(&mut self, tag: &Tag, default: &Self) {
        match tag {
            Tag::FontName { name } => {
                self.fontname = name.clone().unwrap_or_else(|| default.fontname.clone());
            }
            Tag::Bold { weight } => {
                self.bold = weight.map_or(default.bold, |weight| weight.is_bold());
            }
            Tag::Italic { enabled } => self.italic = enabled.unwrap_or(default.italic),
            Tag::ResetStyle { .. } => *self = default.clone(),
            _ => {}
        }
    }
}

/// Accumulates the faces used across many lines
#[derive(Debug, Clone)]
pub struct FontCollector {
    default: FontFace,
    faces: BTreeMap<String, FontFace>,
}

impl FontCollector {
    #[must_use]
    pub const fn new(default: FontFace) -> Self {
        Self {
            default,
            faces: BTreeMap::new(),
        }
    }

    /// Record the faces of one parsed line
    pub fn add_line(&mut self, items: &[Item]) {
        let mut face = self.default.clone();
        for item in items {
            match item {
                Item::Tag(tag) => face.apply(tag, &self.default),
                Item::Text(text) if !text.trim().is_empty() => {
                    self.faces.entry(face.key()).or_insert_with(|| face.clone());
                }
                _ => {}
            }
        }
    }

    #[must_use]
    pub const fn faces(&self) -> &BTreeMap<String, FontFace> {
        &self.faces
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ass_tag_parser::parse;

    fn collect(lines: &[&str]) -> Vec<String> {
        let mut collector = FontCollector::new(FontFace::new("Arial", false, false));
        for line in lines {
            collector.add_line(&parse(line).unwrap());
        }
        collector.faces().keys().cloned().collect()
    }

    #[test]
    fn plain_lines_use_default_face() {
        assert_eq!(collect(&["hello", "world"]), ["Arial"]);
    }

    #[test]
    fn tags_switch_faces() {
        assert_eq!(
            collect(&[r"a{\b1}b{\i1}c{\fnComic Sans\b0}d"]),
            ["Arial", "Arial-bold", "Arial-bold-italic", "Comic Sans-italic"]
        );
    }

    #[test]
    fn reset_and_bare_tags_restore_defaults() {
        assert_eq!(
            collect(&[r"{\fnVerdana\b700}x{\r}y", r"{\fnVerdana}z{\fn}w"]),
            ["Arial", "Verdana", "Verdana-bold"]
        );
    }

    #[test]
    fn faces_without_text_are_skipped() {
        assert!(collect(&[r"{\b1}", r"{\i1}  "]).is_empty());
    }
}
