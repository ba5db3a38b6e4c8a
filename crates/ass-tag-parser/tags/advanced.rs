//! Border, shadow and blur tags
//!
//! # Supported Tags
//!
//! - `bord`, `xbord`, `ybord`: Border width (non-negative real)
//! - `shad`, `xshad`, `yshad`: Shadow depth (non-negative real)
//! - `be`: Edge blur passes (non-negative integer)
//! - `blur`: Gaussian edge blur strength (non-negative real)
//!
//! `\be` takes an integer, so `\be2.2` parses as `\be2` followed by the
//! comment `.2`.

use super::{TagArgs, TagParse};
use crate::{ast::Tag, catalog::TagName};

/// Border and shadow family
pub(crate) fn parse_size(args: &TagArgs<'_>) -> TagParse {
    let (size, len) = args.optional_size()?;
    let tag = match args.name {
        TagName::Border => Tag::Border { size },
        TagName::XBorder => Tag::XBorder { size },
        TagName::YBorder => Tag::YBorder { size },
        TagName::Shadow => Tag::Shadow { size },
        TagName::XShadow => Tag::XShadow { size },
        _ => Tag::YShadow { size },
    };
    Ok((tag, len))
}

pub(crate) fn parse_blur_edges(args: &TagArgs<'_>) -> TagParse {
    let (times, len) = args.optional_uint()?;
    Ok((Tag::BlurEdges { times }, len))
}

pub(crate) fn parse_blur_gauss(args: &TagArgs<'_>) -> TagParse {
    let (weight, len) = args.optional_size()?;
    Ok((Tag::BlurEdgesGauss { weight }, len))
}
