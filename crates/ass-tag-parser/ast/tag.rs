//! Override tag catalog types
//!
//! One [`Tag`] variant per tag kind, each carrying exactly its own fields.
//! Fields wrapped in `Option` model the "reset to style default" form of a
//! tag (`\bord` with no value), which is distinct from an explicit zero.

use alloc::{string::String, vec::Vec};

use super::draw::DrawCommand;
use crate::catalog::TagName;

/// Weight argument of the bold tag
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoldWeight {
    /// `\b0`
    Off,
    /// `\b1`
    On,
    /// Explicit font weight such as `\b700`
    Weight(u32),
}

impl BoldWeight {
    /// Numeric argument as written after `\b`
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Off => 0,
            Self::On => 1,
            Self::Weight(weight) => weight,
        }
    }

    /// Interpret a numeric `\b` argument
    #[must_use]
    pub const fn from_value(value: u32) -> Self {
        match value {
            0 => Self::Off,
            1 => Self::On,
            weight => Self::Weight(weight),
        }
    }

    /// Whether text rendered with this weight counts as bold
    #[must_use]
    pub const fn is_bold(self) -> bool {
        match self {
            Self::Off => false,
            Self::On => true,
            Self::Weight(weight) => weight >= 700,
        }
    }
}

impl From<bool> for BoldWeight {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::On
        } else {
            Self::Off
        }
    }
}

/// RGB color value of a color tag
///
/// Stored in red/green/blue order; the tag text spells it blue-first
/// (`&HBBGGRR&`).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Rgb {
    /// Create a color from its channels
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Which of the four style colors a color tag targets
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorIndex {
    /// Fill color (`\1c`, also spelled `\c`)
    Primary,
    /// Karaoke pre-highlight color (`\2c`)
    Secondary,
    /// Border color (`\3c`)
    Outline,
    /// Shadow color (`\4c`)
    Shadow,
}

impl ColorIndex {
    /// Index number used in the tag spelling (1-4)
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Primary => 1,
            Self::Secondary => 2,
            Self::Outline => 3,
            Self::Shadow => 4,
        }
    }
}

/// Which alpha channel an alpha tag targets
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphaIndex {
    /// Every channel at once (`\alpha`)
    All,
    /// `\1a`
    Primary,
    /// `\2a`
    Secondary,
    /// `\3a`
    Outline,
    /// `\4a`
    Shadow,
}

impl AlphaIndex {
    /// Index number used in the tag spelling (0 for `\alpha`)
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::All => 0,
            Self::Primary => 1,
            Self::Secondary => 2,
            Self::Outline => 3,
            Self::Shadow => 4,
        }
    }
}

/// Karaoke highlight convention
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KaraokeKind {
    /// Syllable switches color instantly (`\k`, type 1)
    Instant,
    /// Color sweeps left to right (`\K`, type 2)
    Sweep,
    /// Same sweep, alternate spelling (`\kf`, type 3)
    Fill,
    /// Outline highlights instantly (`\ko`, type 4)
    Outline,
}

/// One override tag with its typed arguments
///
/// Positions, sizes and times are `f64`; an integral value composes without
/// a fractional part (`1.0` → `1`). Time values are milliseconds.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    /// `\b`
    Bold { weight: Option<BoldWeight> },
    /// `\i`
    Italic { enabled: Option<bool> },
    /// `\u`
    Underline { enabled: Option<bool> },
    /// `\s`
    Strikeout { enabled: Option<bool> },
    /// `\bord`
    Border { size: Option<f64> },
    /// `\xbord`
    XBorder { size: Option<f64> },
    /// `\ybord`
    YBorder { size: Option<f64> },
    /// `\shad`
    Shadow { size: Option<f64> },
    /// `\xshad`
    XShadow { size: Option<f64> },
    /// `\yshad`
    YShadow { size: Option<f64> },
    /// `\be`
    BlurEdges { times: Option<u32> },
    /// `\blur`
    BlurEdgesGauss { weight: Option<f64> },
    /// `\fn`
    FontName { name: Option<String> },
    /// `\fe`
    FontEncoding { encoding: Option<u32> },
    /// `\fs`
    FontSize { size: Option<u32> },
    /// `\fscx`
    FontXScale { scale: Option<f64> },
    /// `\fscy`
    FontYScale { scale: Option<f64> },
    /// `\fsp`
    LetterSpacing { spacing: Option<f64> },
    /// `\frx`
    XRotation { angle: Option<f64> },
    /// `\fry`
    YRotation { angle: Option<f64> },
    /// `\frz`, or `\fr` when `short` is set
    ZRotation { angle: Option<f64>, short: bool },
    /// `\org(x,y)`
    RotationOrigin { x: f64, y: f64 },
    /// `\fax`
    XShear { value: Option<f64> },
    /// `\fay`
    YShear { value: Option<f64> },
    /// `\1c`..`\4c`, or `\c` when `short` is set on the primary index
    Color {
        color: Option<Rgb>,
        index: ColorIndex,
        short: bool,
    },
    /// `\alpha`, `\1a`..`\4a`
    Alpha { value: Option<u8>, index: AlphaIndex },
    /// `\k`, `\K`, `\kf`, `\ko`; `duration` is in milliseconds
    Karaoke { duration: u32, kind: KaraokeKind },
    /// `\an` (1-9), or the legacy `\a` numbering when `legacy` is set
    ///
    /// `position` always uses the numpad layout 1-9, also for legacy tags.
    Alignment { position: Option<u8>, legacy: bool },
    /// `\q` (0-3)
    WrapStyle { style: u8 },
    /// `\r`; no style means "back to the line's own style"
    ResetStyle { style: Option<String> },
    /// `\p`; a scale of 0 ends drawing mode
    Draw { scale: u32, path: Vec<DrawCommand> },
    /// `\pbo`
    BaselineOffset { y: Option<f64> },
    /// `\pos(x,y)`
    Position { x: f64, y: f64 },
    /// `\move(x1,y1,x2,y2[,t1,t2])`
    Move {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        times: Option<(f64, f64)>,
    },
    /// `\fad(t1,t2)`
    Fade { time1: f64, time2: f64 },
    /// `\fade(a1,a2,a3,t1,t2,t3,t4)`
    FadeComplex {
        alpha1: u8,
        alpha2: u8,
        alpha3: u8,
        time1: f64,
        time2: f64,
        time3: f64,
        time4: f64,
    },
    /// `\t([t1,t2,][accel,]tags)`
    ///
    /// The nested payload holds tags only; text and comments cannot appear
    /// inside an animation.
    Animation {
        tags: Vec<Tag>,
        times: Option<(f64, f64)>,
        acceleration: Option<f64>,
    },
    /// `\clip(x1,y1,x2,y2)` or `\iclip(...)` when `inverse` is set
    ClipRectangle {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        inverse: bool,
    },
    /// `\clip([scale,]path)` or `\iclip(...)` when `inverse` is set
    ClipVector {
        scale: Option<u32>,
        path: Vec<DrawCommand>,
        inverse: bool,
    },
}

impl Tag {
    /// Catalog spelling this tag composes to
    #[must_use]
    pub const fn name(&self) -> TagName {
        match self {
            Self::Bold { .. } => TagName::Bold,
            Self::Italic { .. } => TagName::Italic,
            Self::Underline { .. } => TagName::Underline,
            Self::Strikeout { .. } => TagName::Strikeout,
            Self::Border { .. } => TagName::Border,
            Self::XBorder { .. } => TagName::XBorder,
            Self::YBorder { .. } => TagName::YBorder,
            Self::Shadow { .. } => TagName::Shadow,
            Self::XShadow { .. } => TagName::XShadow,
            Self::YShadow { .. } => TagName::YShadow,
            Self::BlurEdges { .. } => TagName::BlurEdges,
            Self::BlurEdgesGauss { .. } => TagName::BlurEdgesGauss,
            Self::FontName { .. } => TagName::FontName,
            Self::FontEncoding { .. } => TagName::FontEncoding,
            Self::FontSize { .. } => TagName::FontSize,
            Self::FontXScale { .. } => TagName::FontXScale,
            Self::FontYScale { .. } => TagName::FontYScale,
            Self::LetterSpacing { .. } => TagName::LetterSpacing,
            Self::XRotation { .. } => TagName::XRotation,
            Self::YRotation { .. } => TagName::YRotation,
            Self::ZRotation { short: false, .. } => TagName::ZRotation,
            Self::ZRotation { short: true, .. } => TagName::ZRotationShort,
            Self::RotationOrigin { .. } => TagName::RotationOrigin,
            Self::XShear { .. } => TagName::XShear,
            Self::YShear { .. } => TagName::YShear,
            Self::Color {
                index: ColorIndex::Primary,
                short: true,
                ..
            } => TagName::ColorShort,
            Self::Color { index, .. } => match index {
                ColorIndex::Primary => TagName::Color1,
                ColorIndex::Secondary => TagName::Color2,
                ColorIndex::Outline => TagName::Color3,
                ColorIndex::Shadow => TagName::Color4,
            },
            Self::Alpha { index, .. } => match index {
                AlphaIndex::All => TagName::Alpha,
                AlphaIndex::Primary => TagName::Alpha1,
                AlphaIndex::Secondary => TagName::Alpha2,
                AlphaIndex::Outline => TagName::Alpha3,
                AlphaIndex::Shadow => TagName::Alpha4,
            },
            Self::Karaoke { kind, .. } => match kind {
                KaraokeKind::Instant => TagName::Karaoke,
                KaraokeKind::Sweep => TagName::KaraokeSweep,
                KaraokeKind::Fill => TagName::KaraokeFill,
                KaraokeKind::Outline => TagName::KaraokeOutline,
            },
            Self::Alignment { legacy: false, .. } => TagName::Alignment,
            Self::Alignment { legacy: true, .. } => TagName::AlignmentLegacy,
            Self::WrapStyle { .. } => TagName::WrapStyle,
            Self::ResetStyle { .. } => TagName::ResetStyle,
            Self::Draw { .. } => TagName::Draw,
            Self::BaselineOffset { .. } => TagName::BaselineOffset,
            Self::Position { .. } => TagName::Position,
            Self::Move { .. } => TagName::Move,
            Self::Fade { .. } => TagName::Fade,
            Self::FadeComplex { .. } => TagName::FadeComplex,
            Self::Animation { .. } => TagName::Animation,
            Self::ClipRectangle { inverse: false, .. } | Self::ClipVector { inverse: false, .. } => {
                TagName::Clip
            }
            Self::ClipRectangle { inverse: true, .. } | Self::ClipVector { inverse: true, .. } => {
                TagName::InverseClip
            }
        }
    }

    /// Whether this tag opens a drawing region (`\p` with a non-zero scale)
    #[must_use]
    pub const fn is_drawing(&self) -> bool {
        matches!(self, Self::Draw { scale, .. } if *scale > 0)
    }
}
