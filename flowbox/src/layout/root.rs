//! LayoutRoot - owns a node tree and decides when it needs a pass.
//!
//! Invalidation is explicit: anything that changes the tree through
//! [`LayoutRoot::root_mut`] or calls [`LayoutRoot::invalidate`] marks the root
//! dirty, and the host calls [`LayoutRoot::update`] once per tick.

use crate::config::LayoutSettings;

use super::context::{LayoutContext, LayoutWarning};
use super::node::LayoutNode;

#[derive(Debug)]
pub struct LayoutRoot {
    node: LayoutNode,
    settings: LayoutSettings,
    dirty: bool,
    passes: u64,
}

impl LayoutRoot {
    pub fn new(node: LayoutNode) -> Self {
        Self::with_settings(node, LayoutSettings::default())
    }

    pub fn with_settings(node: LayoutNode, settings: LayoutSettings) -> Self {
        Self {
            node,
            settings,
            dirty: true,
            passes: 0,
        }
    }

    pub fn node(&self) -> &LayoutNode {
        &self.node
    }

    /// Mutable access to the tree. Marks the root dirty.
    pub fn root_mut(&mut self) -> &mut LayoutNode {
        self.dirty = true;
        &mut self.node
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Completed passes so far.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Run one pass if the tree is dirty.
    ///
    /// Returns the pass's warnings, or `None` when nothing ran.
    pub fn update(&mut self) -> Option<Vec<LayoutWarning>> {
        if !self.dirty {
            return None;
        }
        let mut ctx = LayoutContext::new(self.settings);
        self.node.run_layout_in(&mut ctx);
        self.dirty = false;
        self.passes += 1;
        tracing::debug!(passes = self.passes, warnings = ctx.warnings().len(), "layout pass");
        Some(ctx.take_warnings())
    }
}
