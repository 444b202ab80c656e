//! Size-only and None passes.
//!
//! Neither pass positions children. The size-only pass makes children match
//! the container box; the None pass only forwards to nested layouts.

use crate::primitives::Size;

use super::context::LayoutContext;
use super::length::SizeMode;
use super::node::{Container, Measurable};

/// Resize every child to the container box minus its padding.
///
/// Fixed children only change when they carry an explicit size. Flex, Stretch
/// and Fill all map onto the same target. Fixed-aspect children are fitted
/// (filling for Stretch, letterboxed otherwise) but keep their position.
pub(crate) fn run_size(size: Size, container: &mut Container, ctx: &mut LayoutContext) {
    for child in container.participants_mut() {
        let padding = child.params.padding;
        let position = child.position();

        match child.params.size_mode {
            SizeMode::Fixed => {
                if let Some(requested) = child.params.explicit_size() {
                    child.resize_to(requested, true);
                }
            }
            mode => {
                let target = Size::new(
                    size.width - padding.horizontal(),
                    size.height - padding.vertical(),
                );
                child.resize_to(target, mode != SizeMode::Stretch);
            }
        }

        child.set_position(position);
        child.run_layout_in(ctx);
    }
}

/// Run nested layouts without touching the children themselves.
pub(crate) fn run_none(container: &mut Container, ctx: &mut LayoutContext) {
    for child in container.children_mut() {
        child.run_layout_in(ctx);
    }
}
