//! Layout context carried through one layout invocation.
//!
//! The LayoutContext carries state through the node tree:
//! - The settings the pass runs under
//! - The container path and nesting depth (for the recursion guard)
//! - Warnings for anomalies the pass absorbed instead of failing
//!
//! A pass never aborts. Anything odd it runs into becomes a
//! [`LayoutWarning`] here and a `tracing` event.

use crate::config::LayoutSettings;
use crate::primitives::Size;

/// What kind of anomaly a pass absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Nesting went past `max_depth`; deeper layouts were skipped.
    DepthLimit,
    /// A stretch child's share minus padding came out negative.
    NegativeStretch,
    /// A container shrinks along its flow axis while holding stretch children.
    ShrinkStretchConflict,
}

/// A layout anomaly recorded during a pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutWarning {
    pub kind: WarningKind,
    pub depth: usize,
    pub container: String,
    pub message: String,
}

/// State passed down the node tree during a layout pass.
#[derive(Debug, Default)]
pub struct LayoutContext {
    settings: LayoutSettings,
    /// Names of the containers currently being laid out, outermost first.
    path: Vec<String>,
    warnings: Vec<LayoutWarning>,
}

impl LayoutContext {
    pub fn new(settings: LayoutSettings) -> Self {
        Self {
            settings,
            path: Vec::with_capacity(16),
            warnings: Vec::new(),
        }
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Enter a container scope.
    ///
    /// Returns `false` (and records a warning) when the container would sit
    /// deeper than `max_depth`; the caller must then skip its layout and must
    /// not call `exit()`.
    pub fn enter(&mut self, name: &str) -> bool {
        if self.path.len() >= self.settings.max_depth {
            self.warn(
                WarningKind::DepthLimit,
                format!(
                    "skipping layout of {:?}: nesting exceeds max depth {}",
                    name, self.settings.max_depth
                ),
            );
            return false;
        }
        self.path.push(name.to_string());
        true
    }

    /// Leave the current container scope.
    pub fn exit(&mut self) {
        self.path.pop();
    }

    /// Current nesting depth (0 outside any container).
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Name of the innermost container being laid out.
    pub fn current(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or("<root>")
    }

    /// Record an absorbed anomaly.
    pub fn warn(&mut self, kind: WarningKind, message: String) {
        tracing::warn!(container = self.current(), depth = self.depth(), "{}", message);
        self.warnings.push(LayoutWarning {
            kind,
            depth: self.depth(),
            container: self.current().to_string(),
            message,
        });
    }

    /// Log a finished container pass.
    pub fn log_layout(&self, kind: &str, size: Size) {
        tracing::trace!(
            container = self.current(),
            depth = self.depth(),
            "{} layout -> {{w:{:.1}, h:{:.1}}}",
            kind,
            size.width,
            size.height,
        );
    }

    pub fn warnings(&self) -> &[LayoutWarning] {
        &self.warnings
    }

    /// Take collected warnings.
    pub fn take_warnings(&mut self) -> Vec<LayoutWarning> {
        std::mem::take(&mut self.warnings)
    }
}
