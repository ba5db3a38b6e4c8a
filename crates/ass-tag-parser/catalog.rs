//! Tag name catalog shared by the parser and the composer
//!
//! Every spelling the grammar understands is one [`TagName`]. The parser
//! resolves a tag token by longest-prefix match against this table and the
//! composer writes the same spellings back, so both directions stay in step.
//!
//! # Example
//!
//! ```rust
//! use ass_tag_parser::catalog::TagName;
//!
//! assert_eq!(TagName::longest_prefix("fscx120"), Some(TagName::FontXScale));
//! assert_eq!(TagName::longest_prefix("fade(1,2,3,4,5,6,7)"), Some(TagName::FadeComplex));
//! assert_eq!(TagName::longest_prefix("fad(1,2)"), Some(TagName::Fade));
//! assert_eq!(TagName::longest_prefix("xyz"), None);
//! ```

use core::fmt;

/// Spelling of a known override tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagName {
    Bold,
    Italic,
    Underline,
    Strikeout,
    Border,
    XBorder,
    YBorder,
    Shadow,
    XShadow,
    YShadow,
    BlurEdges,
    BlurEdgesGauss,
    FontName,
    FontEncoding,
    FontSize,
    FontXScale,
    FontYScale,
    LetterSpacing,
    XRotation,
    YRotation,
    ZRotation,
    ZRotationShort,
    RotationOrigin,
    XShear,
    YShear,
    ColorShort,
    Color1,
    Color2,
    Color3,
    Color4,
    Alpha,
    Alpha1,
    Alpha2,
    Alpha3,
    Alpha4,
    Karaoke,
    KaraokeSweep,
    KaraokeFill,
    KaraokeOutline,
    Alignment,
    AlignmentLegacy,
    WrapStyle,
    ResetStyle,
    Draw,
    BaselineOffset,
    Position,
    Move,
    Fade,
    FadeComplex,
    Clip,
    InverseClip,
    Animation,
}

impl TagName {
    /// Every catalog entry
    pub const ALL: [Self; 52] = [
        Self::Bold,
        Self::Italic,
        Self::Underline,
        Self::Strikeout,
        Self::Border,
        Self::XBorder,
        Self::YBorder,
        Self::Shadow,
        Self::XShadow,
        Self::YShadow,
        Self::BlurEdges,
        Self::BlurEdgesGauss,
        Self::FontName,
        Self::FontEncoding,
        Self::FontSize,
        Self::FontXScale,
        Self::FontYScale,
        Self::LetterSpacing,
        Self::XRotation,
        Self::YRotation,
        Self::ZRotation,
        Self::ZRotationShort,
        Self::RotationOrigin,
        Self::XShear,
        Self::YShear,
        Self::ColorShort,
        Self::Color1,
        Self::Color2,
        Self::Color3,
        Self::Color4,
        Self::Alpha,
        Self::Alpha1,
        Self::Alpha2,
        Self::Alpha3,
        Self::Alpha4,
        Self::Karaoke,
        Self::KaraokeSweep,
        Self::KaraokeFill,
        Self::KaraokeOutline,
        Self::Alignment,
        Self::AlignmentLegacy,
        Self::WrapStyle,
        Self::ResetStyle,
        Self::Draw,
        Self::BaselineOffset,
        Self::Position,
        Self::Move,
        Self::Fade,
        Self::FadeComplex,
        Self::Clip,
        Self::InverseClip,
        Self::Animation,
    ];

    /// Spelling written after the backslash
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "b",
            Self::Italic => "i",
            Self::Underline => "u",
            Self::Strikeout => "s",
            Self::Border => "bord",
            Self::XBorder => "xbord",
            Self::YBorder => "ybord",
            Self::Shadow => "shad",
            Self::XShadow => "xshad",
            Self::YShadow => "yshad",
            Self::BlurEdges => "be",
            Self::BlurEdgesGauss => "blur",
            Self::FontName => "fn",
            Self::FontEncoding => "fe",
            Self::FontSize => "fs",
            Self::FontXScale => "fscx",
            Self::FontYScale => "fscy",
            Self::LetterSpacing => "fsp",
            Self::XRotation => "frx",
            Self::YRotation => "fry",
            Self::ZRotation => "frz",
            Self::ZRotationShort => "fr",
            Self::RotationOrigin => "org",
            Self::XShear => "fax",
            Self::YShear => "fay",
            Self::ColorShort => "c",
            Self::Color1 => "1c",
            Self::Color2 => "2c",
            Self::Color3 => "3c",
            Self::Color4 => "4c",
            Self::Alpha => "alpha",
            Self::Alpha1 => "1a",
            Self::Alpha2 => "2a",
            Self::Alpha3 => "3a",
            Self::Alpha4 => "4a",
            Self::Karaoke => "k",
            Self::KaraokeSweep => "K",
            Self::KaraokeFill => "kf",
            Self::KaraokeOutline => "ko",
            Self::Alignment => "an",
            Self::AlignmentLegacy => "a",
            Self::WrapStyle => "q",
            Self::ResetStyle => "r",
            Self::Draw => "p",
            Self::BaselineOffset => "pbo",
            Self::Position => "pos",
            Self::Move => "move",
            Self::Fade => "fad",
            Self::FadeComplex => "fade",
            Self::Clip => "clip",
            Self::InverseClip => "iclip",
            Self::Animation => "t",
        }
    }

    /// Resolve the catalog entry whose spelling is the longest prefix of `token`
    ///
    /// `token` is the tag text following the backslash, arguments included.
    /// Matching is case sensitive (`\k` and `\K` are different tags).
    #[must_use]
    pub fn longest_prefix(token: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|name| token.starts_with(name.as_str()))
            .max_by_key(|name| name.as_str().len())
    }

    /// Whether the tag takes a parenthesized argument list
    #[must_use]
    pub const fn is_parenthesized(self) -> bool {
        matches!(
            self,
            Self::RotationOrigin
                | Self::Position
                | Self::Move
                | Self::Fade
                | Self::FadeComplex
                | Self::Clip
                | Self::InverseClip
                | Self::Animation
        )
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
