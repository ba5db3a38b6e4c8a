//! Vector drawing model shared by `\p` drawings and `\clip`/`\iclip` masks
//!
//! A drawing path is an ordered list of [`DrawCommand`]s, each carrying the
//! points it operates on. The textual form (`m 0 0 l 100 0 100 100`) is
//! handled by [`crate::drawing`].

use alloc::vec::Vec;

/// A drawing path: an ordered, unbounded list of commands
pub type DrawPath = Vec<DrawCommand>;

/// Point in drawing coordinates
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point from any pair of numbers convertible to `f64`
    #[must_use]
    pub fn new(x: impl Into<f64>, y: impl Into<f64>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

/// Single vector drawing command
///
/// Each variant maps to one command letter of the drawing language:
///
/// | Variant | Letter | Points |
/// |---|---|---|
/// | `Move { close: true }` | `m` | exactly 1 |
/// | `Move { close: false }` | `n` | exactly 1 |
/// | `Line` | `l` | 1 or more |
/// | `Bezier` | `b` | exactly 3 |
/// | `Spline` | `s` | 3 or more |
/// | `ExtendSpline` | `p` | 1 or more |
/// | `CloseSpline` | `c` | none |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Start a new contour at `point`.
    ///
    /// With `close` set the contour drawn so far is closed first (`m`);
    /// otherwise it is left open (`n`).
    Move { point: Point, close: bool },
    /// Straight lines through every point
    Line(Vec<Point>),
    /// Cubic Bezier curve with two control points and an end point
    Bezier([Point; 3]),
    /// Cubic B-spline through the points
    Spline(Vec<Point>),
    /// Extend the preceding B-spline
    ExtendSpline(Vec<Point>),
    /// Close the preceding B-spline
    CloseSpline,
}

impl DrawCommand {
    /// Command letter used in the textual drawing language
    #[must_use]
    pub const fn letter(&self) -> char {
        match self {
            Self::Move { close: true, .. } => 'm',
            Self::Move { close: false, .. } => 'n',
            Self::Line(_) => 'l',
            Self::Bezier(_) => 'b',
            Self::Spline(_) => 's',
            Self::ExtendSpline(_) => 'p',
            Self::CloseSpline => 'c',
        }
    }

    /// Points carried by this command, in order
    #[must_use]
    pub fn points(&self) -> &[Point] {
        match self {
            Self::Move { point, .. } => core::slice::from_ref(point),
            Self::Line(points) | Self::Spline(points) | Self::ExtendSpline(points) => points,
            Self::Bezier(points) => points,
            Self::CloseSpline => &[],
        }
    }

    /// Minimum number of points the command needs to be well formed
    #[must_use]
    pub const fn min_points(&self) -> usize {
        match self {
            Self::Move { .. } | Self::Line(_) | Self::ExtendSpline(_) => 1,
            Self::Bezier(_) | Self::Spline(_) => 3,
            Self::CloseSpline => 0,
        }
    }
}
