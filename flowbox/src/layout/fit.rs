//! Aspect-fit helper.
//!
//! Scales a node uniformly so it either fits inside a target rectangle
//! (letterbox, may leave empty bands) or covers it (fill, may overflow and
//! is expected to be clipped by the renderer), then centers it in the target.

use crate::primitives::{Point3, Rect, Size};

use super::node::Measurable;

/// Uniform scale that fits `natural` into `target`.
///
/// Returns `None` for degenerate natural sizes (zero width or height).
pub fn fit_scale(natural: Size, target: Size, letterbox: bool) -> Option<f32> {
    if natural.is_degenerate() {
        return None;
    }
    let natural_aspect = natural.aspect();
    let target_aspect = target.aspect();

    // Letterbox: a node narrower than the target is height-bound.
    // Fill: a node wider than the target is height-bound.
    let height_bound = if letterbox {
        natural_aspect < target_aspect
    } else {
        natural_aspect > target_aspect
    };

    Some(if height_bound {
        target.height / natural.height
    } else {
        target.width / natural.width
    })
}

/// Scale and top-left-placed rectangle for `natural` fitted into `area`.
pub fn fit_rect(natural: Size, area: Rect, letterbox: bool) -> Option<(f32, Rect)> {
    let scale = fit_scale(natural, area.size(), letterbox)?;
    let scaled = natural.scaled(scale);
    let x = area.x + area.width / 2.0 - scaled.width / 2.0;
    let y = area.y + area.height / 2.0 - scaled.height / 2.0;
    Some((scale, Rect::new(x, y, scaled.width, scaled.height)))
}

/// Fit `node` into `area`, setting its scale and centering it.
///
/// Zero-sized nodes are left untouched; returns whether the node changed.
pub fn fit_inside<M: Measurable + ?Sized>(node: &mut M, area: Rect, letterbox: bool) -> bool {
    let Some((scale, placed)) = fit_rect(node.natural_size(), area, letterbox) else {
        tracing::debug!("skipping aspect fit of a zero-sized node");
        return false;
    };
    let z = node.position().z;
    node.set_scale(scale);
    node.set_position(Point3::new(placed.x, placed.y, z));
    true
}
