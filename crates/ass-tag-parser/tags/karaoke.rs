//! Karaoke timing tags
//!
//! Durations are written in centiseconds and stored in milliseconds, so
//! `\k50` holds 500. A stored duration that is not a whole number of
//! centiseconds prints with one decimal (`505` → `\k50.5`).
//!
//! # Supported Tags
//!
//! - `k`: Instant highlight (type 1)
//! - `K`: Left-to-right sweep (type 2)
//! - `kf`: Sweep, alternate spelling (type 3)
//! - `ko`: Outline highlight (type 4)

use alloc::string::String;
use core::fmt::Write;

use super::{TagArgs, TagParse};
use crate::{
    ast::{KaraokeKind, Tag},
    catalog::TagName,
};

pub(crate) fn parse_karaoke(args: &TagArgs<'_>) -> TagParse {
    let (centiseconds, len) = args.required_uint()?;
    let duration = centiseconds
        .checked_mul(10)
        .ok_or_else(|| args.fail("duration out of range"))?;
    let kind = match args.name {
        TagName::KaraokeSweep => KaraokeKind::Sweep,
        TagName::KaraokeFill => KaraokeKind::Fill,
        TagName::KaraokeOutline => KaraokeKind::Outline,
        _ => KaraokeKind::Instant,
    };
    Ok((Tag::Karaoke { duration, kind }, len))
}

pub(crate) fn write_karaoke(out: &mut String, duration: u32) {
    let (whole, tenths) = (duration / 10, duration % 10);
    let _ = if tenths == 0 {
        write!(out, "{whole}")
    } else {
        write!(out, "{whole}.{tenths}")
    };
}
