//! Rotation and shear tags
//!
//! # Supported Tags
//!
//! - `frx`, `fry`, `frz`: Rotation around each axis in degrees
//! - `fr`: Short spelling of `frz`
//! - `fax`, `fay`: Shear factors
//!
//! The rotation origin (`\org`) lives with the positioning tags.

use super::{TagArgs, TagParse};
use crate::{ast::Tag, catalog::TagName};

pub(crate) fn parse_transform(args: &TagArgs<'_>) -> TagParse {
    let (value, len) = args.optional_real()?;
    let tag = match args.name {
        TagName::XRotation => Tag::XRotation { angle: value },
        TagName::YRotation => Tag::YRotation { angle: value },
        TagName::ZRotation | TagName::ZRotationShort => Tag::ZRotation {
            angle: value,
            short: args.name == TagName::ZRotationShort,
        },
        TagName::XShear => Tag::XShear { value },
        _ => Tag::YShear { value },
    };
    Ok((tag, len))
}
