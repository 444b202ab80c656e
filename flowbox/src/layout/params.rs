//! Per-node layout descriptor.

use crate::primitives::{Axis, Point3, Size};

use super::length::{Alignment, AspectMode, Padding, SizeMode};

/// How a node participates in its parent's layout pass.
///
/// Attached to every node; the parent reads it, the node itself never does.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutParams {
    /// Sizing policy.
    pub size_mode: SizeMode,
    /// Explicit size for `Fixed` nodes. Only applied when both sides are positive.
    pub requested_size: Option<Size>,
    /// Insets around the node inside its slot.
    pub padding: Padding,
    /// Cross-axis placement in vertical flows.
    pub h_align: Alignment,
    /// Cross-axis placement in horizontal flows.
    pub v_align: Alignment,
    /// Size through the aspect-fit helper instead of direct assignment.
    pub fixed_aspect: bool,
    /// Letterbox/fill override for fixed-aspect sizing.
    pub aspect_mode: AspectMode,
    /// Translation added after alignment. `z` becomes the node's depth.
    pub fudge: Point3,
}

impl LayoutParams {
    pub fn new(size_mode: SizeMode) -> Self {
        Self {
            size_mode,
            ..Self::default()
        }
    }

    /// The requested size, if usable.
    pub fn explicit_size(&self) -> Option<Size> {
        self.requested_size.filter(|s| s.width > 0.0 && s.height > 0.0)
    }

    /// Cross-axis alignment for a flow along `axis`.
    pub fn cross_alignment(&self, axis: Axis) -> Alignment {
        match axis {
            Axis::Vertical => self.h_align,
            Axis::Horizontal => self.v_align,
        }
    }
}
