//! Layout nodes - the tree a layout pass runs over.
//!
//! A [`LayoutNode`] pairs the geometry a pass reads and writes (size, scale,
//! pivot, position, visibility) with the [`LayoutParams`] its parent consults.
//! What the node *is* is a closed tag, [`Content`]:
//!
//! - `Plain`: a box that takes whatever size it is given
//! - `Reflowable`: content (usually text) that re-measures itself inside a
//!   box via [`ReflowableContent`]
//! - `Container`: a node that runs its own layout pass over children
//!
//! The fixed-aspect flag on the params turns a plain or container node into
//! an aspect box that is sized through [`fit_inside`](super::fit::fit_inside).
//! Passes branch on this tag instead of probing concrete types.

use std::fmt;

use crate::error::{LayoutError, Result};
use crate::primitives::{Axis, Point, Point3, Rect, Size};

use super::context::{LayoutContext, LayoutWarning};
use super::fit;
use super::flow;
use super::length::{Alignment, AspectMode, LayoutType, Padding, ShrinkMode, SizeMode};
use super::params::LayoutParams;
use super::size_pass;

// =========================================================================
// Capabilities
// =========================================================================

/// What a layout pass needs from a scene node.
pub trait Measurable {
    /// Unscaled size.
    fn natural_size(&self) -> Size;
    fn set_size(&mut self, size: Size);
    /// Pivot-relative position.
    fn position(&self) -> Point3;
    fn set_position(&mut self, position: Point3);
    /// Uniform scale.
    fn scale(&self) -> f32;
    fn set_scale(&mut self, scale: f32);
    /// Normalized pivot; (0, 0) is the top-left corner.
    fn center_anchor(&self) -> Point;

    /// Size after scaling.
    fn scaled_size(&self) -> Size {
        self.natural_size().scaled(self.scale())
    }
}

/// Content that re-measures itself for an available box.
///
/// A zero limit on either side means "unbounded" on that side.
pub trait ReflowableContent: fmt::Debug {
    fn set_resize_limit(&mut self, width: f32, height: f32);
    fn resize_limit(&self) -> Size;
    /// Size consistent with the current limit.
    fn natural_size(&self) -> Size;
}

// =========================================================================
// Content / Container
// =========================================================================

/// What a node is, as far as layout cares.
#[derive(Debug)]
pub enum Content {
    Plain,
    Reflowable(Box<dyn ReflowableContent>),
    Container(Container),
}

/// Called with the container's final size after each of its passes.
pub type LayoutUpdatedFn = Box<dyn FnMut(Size)>;

/// A node that lays out its children.
pub struct Container {
    /// Which pass to run.
    pub layout_type: LayoutType,
    /// Gap between consecutive non-fill children along the flow axis.
    pub spacing: f32,
    /// Own dimensions taken from the children after measuring.
    pub shrink_to_children: ShrinkMode,
    /// Placement of the whole child block when nothing stretches.
    pub overall_alignment: Alignment,
    /// Hidden children are left out of every calculation.
    pub skip_hidden_children: bool,
    pub(crate) children: Vec<LayoutNode>,
    /// Cross extent before the last wrap growth. Cleared whenever the
    /// node's size is set from outside its own pass.
    pub(crate) wrap_base: Option<(Axis, f32)>,
    on_layout_updated: Option<LayoutUpdatedFn>,
}

impl Container {
    pub fn new(layout_type: LayoutType) -> Self {
        Self {
            layout_type,
            spacing: 0.0,
            shrink_to_children: ShrinkMode::None,
            overall_alignment: Alignment::Start,
            skip_hidden_children: false,
            children: Vec::new(),
            wrap_base: None,
            on_layout_updated: None,
        }
    }

    pub fn children(&self) -> &[LayoutNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [LayoutNode] {
        &mut self.children
    }

    /// Children that take part in this container's calculations.
    pub(crate) fn participants_mut(&mut self) -> impl Iterator<Item = &mut LayoutNode> {
        let skip_hidden = self.skip_hidden_children;
        self.children
            .iter_mut()
            .filter(move |child| !skip_hidden || child.visible)
    }

    pub fn set_on_layout_updated(&mut self, callback: impl FnMut(Size) + 'static) {
        self.on_layout_updated = Some(Box::new(callback));
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("layout_type", &self.layout_type)
            .field("spacing", &self.spacing)
            .field("shrink_to_children", &self.shrink_to_children)
            .field("overall_alignment", &self.overall_alignment)
            .field("skip_hidden_children", &self.skip_hidden_children)
            .field("children", &self.children)
            .field("wrap_base", &self.wrap_base)
            .field("on_layout_updated", &self.on_layout_updated.is_some())
            .finish()
    }
}

// =========================================================================
// LayoutNode
// =========================================================================

/// One participant in a layout pass.
#[derive(Debug)]
pub struct LayoutNode {
    name: Option<String>,
    /// How the parent sizes and places this node.
    pub params: LayoutParams,
    size: Size,
    scale: f32,
    position: Point3,
    center_anchor: Point,
    visible: bool,
    content: Content,
}

impl LayoutNode {
    fn with_content(content: Content, size: Size) -> Self {
        Self {
            name: None,
            params: LayoutParams::default(),
            size,
            scale: 1.0,
            position: Point3::ORIGIN,
            center_anchor: Point::ORIGIN,
            visible: true,
            content,
        }
    }

    /// A plain box of the given size.
    pub fn plain(size: Size) -> Self {
        Self::with_content(Content::Plain, size)
    }

    /// A fixed-aspect box (an image) with the given natural size.
    pub fn image(size: Size) -> Self {
        let mut node = Self::plain(size);
        node.params.fixed_aspect = true;
        node
    }

    /// A node backed by reflowable content.
    pub fn reflowable(content: impl ReflowableContent + 'static) -> Self {
        Self::with_content(Content::Reflowable(Box::new(content)), Size::ZERO)
    }

    /// An empty container running `layout_type`.
    pub fn layout(layout_type: LayoutType) -> Self {
        Self::with_content(Content::Container(Container::new(layout_type)), Size::ZERO)
    }

    // ---------------------------------------------------------------------
    // Builders
    // ---------------------------------------------------------------------

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn size_mode(mut self, mode: SizeMode) -> Self {
        self.params.size_mode = mode;
        self
    }

    /// Set the explicit size used by `Fixed` sizing.
    pub fn requested_size(mut self, width: f32, height: f32) -> Self {
        self.params.requested_size = Some(Size::new(width, height));
        self
    }

    /// Set uniform padding.
    pub fn padding(mut self, padding: f32) -> Self {
        self.params.padding = Padding::all(padding);
        self
    }

    /// Set custom padding.
    pub fn padding_custom(mut self, padding: Padding) -> Self {
        self.params.padding = padding;
        self
    }

    pub fn h_align(mut self, align: Alignment) -> Self {
        self.params.h_align = align;
        self
    }

    pub fn v_align(mut self, align: Alignment) -> Self {
        self.params.v_align = align;
        self
    }

    pub fn fixed_aspect(mut self, fixed: bool) -> Self {
        self.params.fixed_aspect = fixed;
        self
    }

    pub fn aspect_mode(mut self, mode: AspectMode) -> Self {
        self.params.aspect_mode = mode;
        self
    }

    pub fn fudge(mut self, fudge: Point3) -> Self {
        self.params.fudge = fudge;
        self
    }

    /// Set the normalized pivot.
    pub fn center_anchor(mut self, x: f32, y: f32) -> Self {
        self.center_anchor = Point::new(x, y);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the current (unscaled) size.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.set_box_size(Size::new(width, height));
        self
    }

    // Container builders are no-ops on leaf nodes.

    pub fn spacing(mut self, spacing: f32) -> Self {
        if let Some(c) = self.container_mut() {
            c.spacing = spacing;
        }
        self
    }

    pub fn shrink_to_children(mut self, shrink: ShrinkMode) -> Self {
        if let Some(c) = self.container_mut() {
            c.shrink_to_children = shrink;
        }
        self
    }

    pub fn overall_alignment(mut self, align: Alignment) -> Self {
        if let Some(c) = self.container_mut() {
            c.overall_alignment = align;
        }
        self
    }

    pub fn skip_hidden_children(mut self, skip: bool) -> Self {
        if let Some(c) = self.container_mut() {
            c.skip_hidden_children = skip;
        }
        self
    }

    pub fn on_layout_updated(mut self, callback: impl FnMut(Size) + 'static) -> Self {
        if let Some(c) = self.container_mut() {
            c.set_on_layout_updated(callback);
        }
        self
    }

    /// Append a child. Insertion order is layout order.
    pub fn push(mut self, child: LayoutNode) -> Self {
        if let Some(c) = self.container_mut() {
            c.children.push(child);
        }
        self
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    /// Name for logs and errors.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }

    pub fn size(&self) -> Size {
        self.natural_size()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn container(&self) -> Option<&Container> {
        match &self.content {
            Content::Container(c) => Some(c),
            _ => None,
        }
    }

    pub fn container_mut(&mut self) -> Option<&mut Container> {
        match &mut self.content {
            Content::Container(c) => Some(c),
            _ => None,
        }
    }

    /// Children of a container; empty for leaves.
    pub fn children(&self) -> &[LayoutNode] {
        self.container().map(Container::children).unwrap_or(&[])
    }

    /// The scaled box in parent coordinates, with the pivot taken out.
    pub fn bounds(&self) -> Rect {
        let scaled = self.scaled_size();
        let origin = Point::new(
            self.position.x - self.center_anchor.x * scaled.width,
            self.position.y - self.center_anchor.y * scaled.height,
        );
        Rect::from_origin_size(origin, scaled)
    }

    /// Depth-first search for a named node, including `self`.
    pub fn find(&self, name: &str) -> Option<&LayoutNode> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(name))
    }

    /// Mutable variant of [`find`](Self::find).
    pub fn find_mut(&mut self, name: &str) -> Option<&mut LayoutNode> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        match &mut self.content {
            Content::Container(c) => c.children.iter_mut().find_map(|child| child.find_mut(name)),
            _ => None,
        }
    }

    // ---------------------------------------------------------------------
    // Layout entry points
    // ---------------------------------------------------------------------

    /// Run this node's layout with default settings.
    ///
    /// Returns the warnings the pass recorded. Leaves are a no-op.
    pub fn run_layout(&mut self) -> Vec<LayoutWarning> {
        let mut ctx = LayoutContext::default();
        self.run_layout_in(&mut ctx);
        ctx.take_warnings()
    }

    /// Run this node's layout inside an existing context.
    pub fn run_layout_in(&mut self, ctx: &mut LayoutContext) {
        let Content::Container(container) = &mut self.content else {
            return;
        };
        if !ctx.enter(self.name.as_deref().unwrap_or("<layout>")) {
            return;
        }

        let layout_type = container.layout_type;
        match layout_type.flow() {
            Some((axis, wrap)) => flow::run_flow(&mut self.size, container, axis, wrap, ctx),
            None if layout_type == LayoutType::SizeOnly => {
                size_pass::run_size(self.size, container, ctx)
            }
            None => size_pass::run_none(container, ctx),
        }

        ctx.log_layout(&layout_type.to_string(), self.size);
        ctx.exit();

        if let Some(callback) = container.on_layout_updated.as_mut() {
            callback(self.size);
        }
    }

    /// Check the tree for configurations layout would only paper over.
    ///
    /// Reports negative padding and containers that shrink along their flow
    /// axis while holding stretch children.
    pub fn validate(&self) -> Result<()> {
        if self.params.padding.is_negative() {
            return Err(LayoutError::NegativePadding {
                node: self.label().to_string(),
            });
        }
        let Content::Container(container) = &self.content else {
            return Ok(());
        };
        if let Some((axis, _)) = container.layout_type.flow() {
            let has_stretch = container.children.iter().any(|child| {
                child.params.size_mode == SizeMode::Stretch
                    && (!container.skip_hidden_children || child.visible)
            });
            if has_stretch && container.shrink_to_children.shrinks(axis) {
                return Err(LayoutError::ShrinkStretchConflict {
                    container: self.label().to_string(),
                    axis: axis_name(axis),
                });
            }
        }
        container.children.iter().try_for_each(LayoutNode::validate)
    }

    // ---------------------------------------------------------------------
    // Sizing primitives used by the passes
    // ---------------------------------------------------------------------

    /// Give the node a target box.
    ///
    /// Reflowable content gets a resize limit, aspect boxes are fitted
    /// (`letterbox` is the pass default, the node's aspect mode may override
    /// it) and everything else is resized directly. Nested layouts are not
    /// run here.
    pub(crate) fn resize_to(&mut self, target: Size, letterbox: bool) {
        if let Content::Reflowable(content) = &mut self.content {
            content.set_resize_limit(target.width, target.height);
            return;
        }
        if self.params.fixed_aspect {
            let letterbox = self.params.aspect_mode.letterbox(letterbox);
            fit::fit_inside(self, Rect::from_origin_size(Point::ORIGIN, target), letterbox);
            return;
        }
        self.set_box_size(target);
    }

    /// Match the container's cross extent (minus padding), keeping the
    /// node's own extent along the flow.
    pub(crate) fn flex_to_cross(&mut self, axis: Axis, container: Size) {
        let padding = self.params.padding;
        let available = Size::new(
            container.width - padding.horizontal(),
            container.height - padding.vertical(),
        );

        if let Content::Reflowable(content) = &mut self.content {
            match axis {
                Axis::Vertical => content.set_resize_limit(available.width, 0.0),
                Axis::Horizontal => {
                    let width = content.resize_limit().width;
                    content.set_resize_limit(width, available.height);
                }
            }
            return;
        }

        if self.params.fixed_aspect {
            let natural_cross = self.size.cross(axis);
            if natural_cross > 0.0 {
                self.scale = available.cross(axis) / natural_cross;
            }
            return;
        }

        self.set_box_extent(axis.cross(), available.cross(axis));
    }

    /// Size set from outside the node's own pass; it becomes the new base
    /// for wrap growth.
    fn set_box_size(&mut self, size: Size) {
        self.size = size;
        if let Some(c) = self.container_mut() {
            c.wrap_base = None;
        }
    }

    /// Like [`set_box_size`](Self::set_box_size) for one axis. A growth
    /// base on the other axis is kept.
    fn set_box_extent(&mut self, axis: Axis, value: f32) {
        self.size.set_main(axis, value);
        if let Some(c) = self.container_mut() {
            if matches!(c.wrap_base, Some((grown, _)) if grown == axis) {
                c.wrap_base = None;
            }
        }
    }

    /// Position the node so its scaled top-left lands on `top_left`, then
    /// apply the fudge offset. The fudge depth becomes the node's z.
    pub(crate) fn place_at(&mut self, top_left: Point) {
        let scaled = self.scaled_size();
        let fudge = self.params.fudge;
        self.position = Point3::new(
            top_left.x + self.center_anchor.x * scaled.width + fudge.x,
            top_left.y + self.center_anchor.y * scaled.height + fudge.y,
            fudge.z,
        );
    }
}

fn axis_name(axis: Axis) -> &'static str {
    match axis {
        Axis::Horizontal => "width",
        Axis::Vertical => "height",
    }
}

impl Measurable for LayoutNode {
    fn natural_size(&self) -> Size {
        match &self.content {
            Content::Reflowable(content) => content.natural_size(),
            _ => self.size,
        }
    }

    fn set_size(&mut self, size: Size) {
        if let Content::Reflowable(content) = &mut self.content {
            content.set_resize_limit(size.width, size.height);
            return;
        }
        self.set_box_size(size);
    }

    fn position(&self) -> Point3 {
        self.position
    }

    fn set_position(&mut self, position: Point3) {
        self.position = position;
    }

    fn scale(&self) -> f32 {
        self.scale
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    fn center_anchor(&self) -> Point {
        self.center_anchor
    }
}
