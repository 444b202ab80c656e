//! Layout vocabulary: sizing policies, alignment and padding.
//!
//! Every enum here has a keyword spelling used by scene files
//! (`FromStr`/`Display`, and serde through those).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::primitives::Axis;

/// Implements serde for a keyword enum through its `FromStr`/`Display`.
macro_rules! keyword_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Monospace advance at [`BASE_FONT_SIZE`].
pub const CHAR_WIDTH: f32 = 8.4;
/// Line height at [`BASE_FONT_SIZE`].
pub const LINE_HEIGHT: f32 = 18.0;
pub const BASE_FONT_SIZE: f32 = 14.0;

fn unknown(kind: &'static str, value: &str) -> LayoutError {
    LayoutError::UnknownKeyword {
        kind,
        value: value.to_string(),
    }
}

// =========================================================================
// SizeMode
// =========================================================================

/// How a node's size is computed by its parent's layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeMode {
    /// Sized to the requested size, or left alone if none is set.
    #[default]
    Fixed,
    /// Matches the container along the cross axis; keeps its own flow extent.
    Flex,
    /// Splits the leftover flow-axis space evenly with other stretch siblings.
    Stretch,
    /// Ignored by the flow; sized to the container interior and centered.
    Fill,
}

impl FromStr for SizeMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fixed" => Ok(SizeMode::Fixed),
            "flex" => Ok(SizeMode::Flex),
            "stretch" => Ok(SizeMode::Stretch),
            "fill" => Ok(SizeMode::Fill),
            other => Err(unknown("size mode", other)),
        }
    }
}

impl fmt::Display for SizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SizeMode::Fixed => "fixed",
            SizeMode::Flex => "flex",
            SizeMode::Stretch => "stretch",
            SizeMode::Fill => "fill",
        })
    }
}

keyword_serde!(SizeMode);

// =========================================================================
// Alignment
// =========================================================================

/// Placement within spare space: left/top, center/middle, right/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

impl Alignment {
    /// Keyword for horizontal use.
    pub fn horizontal_keyword(self) -> &'static str {
        match self {
            Alignment::Start => "left",
            Alignment::Center => "center",
            Alignment::End => "right",
        }
    }

    /// Keyword for vertical use.
    pub fn vertical_keyword(self) -> &'static str {
        match self {
            Alignment::Start => "top",
            Alignment::Center => "middle",
            Alignment::End => "bottom",
        }
    }

    /// Offset of an item of `extent` inside `available`, honoring the
    /// leading/trailing insets at the start and end positions.
    #[inline]
    pub fn place(self, available: f32, extent: f32, lead: f32, trail: f32) -> f32 {
        match self {
            Alignment::Start => lead,
            Alignment::Center => available / 2.0 - extent / 2.0,
            Alignment::End => available - extent - trail,
        }
    }
}

impl FromStr for Alignment {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" | "left" | "top" => Ok(Alignment::Start),
            "center" | "middle" => Ok(Alignment::Center),
            "end" | "right" | "bottom" => Ok(Alignment::End),
            other => Err(unknown("alignment", other)),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Alignment::Start => "start",
            Alignment::Center => "center",
            Alignment::End => "end",
        })
    }
}

keyword_serde!(Alignment);

// =========================================================================
// AspectMode
// =========================================================================

/// Per-node override of the letterbox-vs-fill choice for fixed-aspect nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectMode {
    /// Use whatever the running layout pass asks for.
    #[default]
    Default,
    /// Always cover the target box (may overflow; clip in the renderer).
    Fill,
    /// Always fit inside the target box (may leave empty bands).
    Letterbox,
}

impl AspectMode {
    /// Resolve against the pass default: `true` means letterbox.
    #[inline]
    pub fn letterbox(self, default: bool) -> bool {
        match self {
            AspectMode::Default => default,
            AspectMode::Fill => false,
            AspectMode::Letterbox => true,
        }
    }
}

impl FromStr for AspectMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(AspectMode::Default),
            "fill" => Ok(AspectMode::Fill),
            "letterbox" => Ok(AspectMode::Letterbox),
            other => Err(unknown("aspect mode", other)),
        }
    }
}

impl fmt::Display for AspectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AspectMode::Default => "default",
            AspectMode::Fill => "fill",
            AspectMode::Letterbox => "letterbox",
        })
    }
}

keyword_serde!(AspectMode);

// =========================================================================
// LayoutType
// =========================================================================

/// The pass a container runs over its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutType {
    /// Leave children alone, but run their nested layouts.
    None,
    /// Size then position children top to bottom.
    #[default]
    VerticalFlow,
    /// Size then position children left to right.
    HorizontalFlow,
    /// Only resize children to the container box.
    SizeOnly,
    /// Vertical flow that starts a new column when out of height.
    VerticalWrap,
    /// Horizontal flow that starts a new row when out of width.
    HorizontalWrap,
}

impl LayoutType {
    /// Flow direction and wrap flag, for the flow variants.
    pub fn flow(self) -> Option<(Axis, bool)> {
        match self {
            LayoutType::VerticalFlow => Some((Axis::Vertical, false)),
            LayoutType::HorizontalFlow => Some((Axis::Horizontal, false)),
            LayoutType::VerticalWrap => Some((Axis::Vertical, true)),
            LayoutType::HorizontalWrap => Some((Axis::Horizontal, true)),
            LayoutType::None | LayoutType::SizeOnly => None,
        }
    }
}

impl FromStr for LayoutType {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(LayoutType::None),
            "vert" => Ok(LayoutType::VerticalFlow),
            "horiz" => Ok(LayoutType::HorizontalFlow),
            "size" => Ok(LayoutType::SizeOnly),
            "vert_wrap" => Ok(LayoutType::VerticalWrap),
            "horiz_wrap" => Ok(LayoutType::HorizontalWrap),
            other => Err(unknown("layout type", other)),
        }
    }
}

impl fmt::Display for LayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LayoutType::None => "none",
            LayoutType::VerticalFlow => "vert",
            LayoutType::HorizontalFlow => "horiz",
            LayoutType::SizeOnly => "size",
            LayoutType::VerticalWrap => "vert_wrap",
            LayoutType::HorizontalWrap => "horiz_wrap",
        })
    }
}

keyword_serde!(LayoutType);

// =========================================================================
// ShrinkMode
// =========================================================================

/// Which of a container's own dimensions are taken from its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShrinkMode {
    #[default]
    None,
    Width,
    Height,
    Both,
}

impl ShrinkMode {
    pub fn shrinks_width(self) -> bool {
        matches!(self, ShrinkMode::Width | ShrinkMode::Both)
    }

    pub fn shrinks_height(self) -> bool {
        matches!(self, ShrinkMode::Height | ShrinkMode::Both)
    }

    /// Whether the extent along `axis` is shrink-driven.
    pub fn shrinks(self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.shrinks_width(),
            Axis::Vertical => self.shrinks_height(),
        }
    }
}

impl FromStr for ShrinkMode {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(ShrinkMode::None),
            "width" => Ok(ShrinkMode::Width),
            "height" => Ok(ShrinkMode::Height),
            "both" => Ok(ShrinkMode::Both),
            other => Err(unknown("shrink mode", other)),
        }
    }
}

impl fmt::Display for ShrinkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShrinkMode::None => "none",
            ShrinkMode::Width => "width",
            ShrinkMode::Height => "height",
            ShrinkMode::Both => "both",
        })
    }
}

keyword_serde!(ShrinkMode);

// =========================================================================
// Padding
// =========================================================================

/// Insets around a node inside its layout slot.
///
/// Missing sides in a scene file default to zero. Negative values are not
/// guarded against during layout; `LayoutNode::validate` reports them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    /// Create padding with explicit values for each side.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Uniform padding on all sides.
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Inset before the node along `axis` (left or top).
    #[inline]
    pub fn lead(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.left,
            Axis::Vertical => self.top,
        }
    }

    /// Inset after the node along `axis` (right or bottom).
    #[inline]
    pub fn trail(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right,
            Axis::Vertical => self.bottom,
        }
    }

    /// Total padding along `axis`.
    #[inline]
    pub fn along(&self, axis: Axis) -> f32 {
        self.lead(axis) + self.trail(axis)
    }

    pub fn is_negative(&self) -> bool {
        self.top < 0.0 || self.right < 0.0 || self.bottom < 0.0 || self.left < 0.0
    }
}
