//! # ASS Tag Parser
//!
//! Parser and composer for the override tag markup embedded in ASS subtitle
//! dialogue lines (`{\an5\t(0,500,\fscx100)}Boo!`). Parsing turns a line into
//! a strongly typed sequence of [`Item`]s; composing turns such a sequence
//! back into canonical text.
//!
//! ## Features
//!
//! - **Full tag catalog**: every override tag as one [`Tag`] variant with
//!   typed fields; unset fields model the bare "reset to default" form
//! - **Exact composer**: canonical numbers, hex colors, legacy alignment
//!   remapping and minimal brace grouping
//! - **Drawings**: `\p` drawings and vector clips share one path grammar
//! - **Strict errors**: malformed lines fail with a positioned [`ParseError`]
//! - **`no_std` capable**: only `alloc` is required with default features off
//!
//! ## Quick Start
//!
//! ```rust
//! use ass_tag_parser::{compose, parse, Item, Tag};
//!
//! let items = parse(r"{\an5\fscx0\fscy0\t(0,500,\fscx100\fscy100)}Boo!")?;
//! assert_eq!(items.len(), 5);
//! assert_eq!(items[0], Item::Tag(Tag::Alignment { position: Some(5), legacy: false }));
//! assert_eq!(compose(&items), r"{\an5\fscx0\fscy0\t(0,500,\fscx100\fscy100)}Boo!");
//! # Ok::<(), ass_tag_parser::ParseError>(())
//! ```
//!
//! Parsing is a pure function of its input, so lines can be handled on any
//! number of threads without coordination.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod ast;
pub mod catalog;
pub mod composer;
pub mod drawing;
pub mod parser;
pub mod plaintext;
mod tags;
pub mod tokenizer;
pub mod utils;

pub use ast::{
    AlphaIndex, BoldWeight, ColorIndex, DrawCommand, DrawPath, Item, KaraokeKind, Point, Rgb, Tag,
};
pub use catalog::TagName;
pub use composer::{compose, try_compose, try_compose_with_config, ComposerConfig};
pub use drawing::{compose_draw_commands, parse_draw_commands};
pub use parser::{parse, parse_with_config, ParseError, ParserConfig};
pub use plaintext::to_plaintext;
pub use utils::{BaseError, ComposeError, ErrorCategory, Result};

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
