//! Flow layout: children along one axis, optionally wrapping.
//!
//! A pass runs in order:
//! 1. Measure: size Fixed and Flex children, run their nested layouts and
//!    total up their padded extents. Stretch and Fill children are counted
//!    but not measured.
//! 2. Shrink-to-children: adopt the measured totals as the container size.
//! 3. Distribute: split the leftover flow space between Stretch children,
//!    or turn it into a block offset from the overall alignment.
//! 4. Position: walk the children with a cursor, aligning each on the cross
//!    axis and starting a new line when a wrap container runs out of room.
//! 5. Fill: size Fill children to the padded interior and center them.
//!
//! Wrap growth only changes the reported size. The extent the container had
//! before growing is kept on the container and restored at the start of the
//! next pass, so children are sized and aligned against the same box every
//! time.
//!
//! The axis-agnostic code reads extents through [`Size::main`] and
//! [`Size::cross`]; `axis` is the flow direction.

use crate::config::NegativeStretch;
use crate::primitives::{Axis, Point, Size};

use super::context::{LayoutContext, WarningKind};
use super::length::SizeMode;
use super::node::{Container, LayoutNode, Measurable};

// =========================================================================
// Pass
// =========================================================================

/// Run a flow pass over `container`, whose own size is `size`.
///
/// `size` is updated by shrink-to-children and by wrap growth.
pub(crate) fn run_flow(
    size: &mut Size,
    container: &mut Container,
    axis: Axis,
    wrap: bool,
    ctx: &mut LayoutContext,
) {
    let cross_axis = axis.cross();
    let spacing = container.spacing;
    let shrink = container.shrink_to_children;
    let overall = container.overall_alignment;

    if let Some((grown_axis, base)) = container.wrap_base.take() {
        size.set_main(grown_axis, base);
    }

    // ---------------------------------------------------------------------
    // Measure
    // ---------------------------------------------------------------------

    let container_size = *size;
    let mut has_fills = false;
    let mut stretches = 0usize;
    let mut spaced = 0usize;
    let mut total = 0.0f32;
    let mut max_cross = 0.0f32;

    for child in container.participants_mut() {
        match child.params.size_mode {
            SizeMode::Fill => {
                has_fills = true;
                continue;
            }
            SizeMode::Stretch => {
                spaced += 1;
                stretches += 1;
                continue;
            }
            SizeMode::Fixed => {
                if let Some(requested) = child.params.explicit_size() {
                    child.resize_to(requested, true);
                }
            }
            SizeMode::Flex => child.flex_to_cross(axis, container_size),
        }
        spaced += 1;

        child.run_layout_in(ctx);

        let (main, cross) = slot_extent(child, axis);
        total += main;
        max_cross = max_cross.max(cross);
    }

    if spaced > 1 {
        total += spacing * (spaced - 1) as f32;
    }

    // ---------------------------------------------------------------------
    // Shrink-to-children
    // ---------------------------------------------------------------------

    if shrink.shrinks(axis) {
        size.set_main(axis, total);
        if stretches > 0 {
            ctx.warn(
                WarningKind::ShrinkStretchConflict,
                format!(
                    "{} stretch children in a container shrinking along its flow; they get no leftover space",
                    stretches
                ),
            );
        }
    }
    if shrink.shrinks(cross_axis) {
        size.set_main(cross_axis, max_cross);
    }

    // ---------------------------------------------------------------------
    // Distribute
    // ---------------------------------------------------------------------

    let extent = size.main(axis);
    let cross_extent = size.cross(axis);

    let mut per_stretch = 0.0f32;
    let mut cursor = 0.0f32;
    if stretches > 0 {
        per_stretch = (extent - total) / stretches as f32;
    } else {
        cursor = overall.place(extent, total, 0.0, 0.0);
    }

    // ---------------------------------------------------------------------
    // Position
    // ---------------------------------------------------------------------

    let mut line_offset = 0.0f32;
    let mut line_peak = 0.0f32;
    let mut line_items = 0usize;

    for child in container.participants_mut() {
        match child.params.size_mode {
            SizeMode::Fill => continue,
            SizeMode::Stretch => stretch_child(child, axis, per_stretch, cross_extent, ctx),
            SizeMode::Fixed | SizeMode::Flex => {}
        }

        let (main, cross) = slot_extent(child, axis);

        if wrap {
            // Only break a line that already has something on it, and never
            // for a child that could not fit on any line.
            if line_items > 0 && cursor + main > extent && main < extent {
                cursor = 0.0;
                line_offset += line_peak + spacing;
                line_peak = cross;
                line_items = 0;
            } else {
                line_peak = line_peak.max(cross);
            }
            line_items += 1;
        }

        let padding = child.params.padding;
        let scaled = child.scaled_size();
        let main_pos = cursor + padding.lead(axis);
        let cross_pos = child.params.cross_alignment(axis).place(
            cross_extent,
            scaled.cross(axis),
            padding.lead(cross_axis),
            padding.trail(cross_axis),
        ) + line_offset;

        child.place_at(Point::from_axes(axis, main_pos, cross_pos));

        cursor += main + spacing;
    }

    if wrap && line_offset > 0.0 {
        let grown = cross_extent.max(line_offset + line_peak);
        if grown != cross_extent {
            container.wrap_base = Some((cross_axis, cross_extent));
            size.set_main(cross_axis, grown);
        }
    }

    // ---------------------------------------------------------------------
    // Fill
    // ---------------------------------------------------------------------

    if has_fills {
        let interior = *size;
        for child in container.participants_mut() {
            if child.params.size_mode == SizeMode::Fill {
                fill_child(child, interior, ctx);
            }
        }
    }
}

// =========================================================================
// Helpers
// =========================================================================

/// Padded (flow, cross) extent of a child's scaled box.
fn slot_extent(child: &LayoutNode, axis: Axis) -> (f32, f32) {
    let scaled = child.scaled_size();
    let padding = child.params.padding;
    (
        padding.along(axis) + scaled.main(axis),
        padding.along(axis.cross()) + scaled.cross(axis),
    )
}

/// Size a Stretch child to its share of the leftover flow space.
fn stretch_child(
    child: &mut LayoutNode,
    axis: Axis,
    share: f32,
    cross_extent: f32,
    ctx: &mut LayoutContext,
) {
    let padding = child.params.padding;
    let mut main = share - padding.along(axis);
    let cross = cross_extent - padding.along(axis.cross());

    if main < 0.0 {
        let policy = ctx.settings().negative_stretch;
        let label = child.label().to_string();
        ctx.warn(
            WarningKind::NegativeStretch,
            format!(
                "stretch child {:?} got {:.1} along the flow ({})",
                label, main, policy
            ),
        );
        if policy == NegativeStretch::Clamp {
            main = 0.0;
        }
    }

    child.resize_to(Size::from_axes(axis, main, cross), true);
    child.run_layout_in(ctx);
}

/// Size a Fill child to the padded interior and center it there.
fn fill_child(child: &mut LayoutNode, container: Size, ctx: &mut LayoutContext) {
    let padding = child.params.padding;
    let target = Size::new(
        container.width - padding.horizontal(),
        container.height - padding.vertical(),
    );

    child.resize_to(target, false);
    child.run_layout_in(ctx);

    // Aspect-constrained content may not match the target exactly.
    let scaled = child.scaled_size();
    child.place_at(Point::new(
        padding.left + (target.width - scaled.width) / 2.0,
        padding.top + (target.height - scaled.height) / 2.0,
    ));
}
