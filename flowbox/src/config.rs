//! Scene and layout configuration.
//!
//! A scene file is JSON:
//!
//! ```json
//! {
//!   "settings": { "max_depth": 32, "negative_stretch": "clamp" },
//!   "viewport": { "width": 1920, "height": 1080 },
//!   "root": {
//!     "name": "page",
//!     "kind": "layout",
//!     "layout_type": "vert",
//!     "width": "100vw",
//!     "height": "100vh",
//!     "children": [
//!       { "kind": "text", "text": "Title", "size_mode": "flex" },
//!       { "kind": "box", "size_mode": "stretch" }
//!     ]
//!   }
//! }
//! ```
//!
//! Dimensions are [`Value`]s: bare numbers are pixels, strings may carry a
//! unit. Percentages resolve against the parent's configured size on the
//! same axis (the viewport for the root).

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::{
    Alignment, AspectMode, LayoutNode, LayoutParams, LayoutRoot, LayoutType, Measurable, Padding,
    ShrinkMode, SizeMode, TextBlock,
};
use crate::primitives::{Point, Point3, Size};
use crate::value::{Dimensions, Value};

// =========================================================================
// LayoutSettings
// =========================================================================

pub const DEFAULT_MAX_DEPTH: usize = 64;

/// What to do with a Stretch child whose share is smaller than its padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeStretch {
    /// Size it to zero along the flow.
    #[default]
    Clamp,
    /// Keep the negative size.
    Allow,
}

impl fmt::Display for NegativeStretch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NegativeStretch::Clamp => "clamped",
            NegativeStretch::Allow => "allowed",
        })
    }
}

/// Knobs for a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutSettings {
    /// Container nesting past which nested layouts are skipped.
    pub max_depth: usize,
    pub negative_stretch: NegativeStretch,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            negative_stretch: NegativeStretch::Clamp,
        }
    }
}

// =========================================================================
// NodeConfig
// =========================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    #[default]
    Box,
    Text,
    Image,
    Layout,
}

/// One node of a scene file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NodeConfig {
    pub name: Option<String>,
    pub kind: NodeKind,

    /// Text content, for `text` nodes.
    pub text: Option<String>,
    pub font_size: Option<f32>,

    /// Natural size. For `text` nodes this becomes the initial resize limit.
    pub width: Value,
    pub height: Value,
    /// Requested size used by `fixed` sizing.
    pub layout_width: Value,
    pub layout_height: Value,

    pub size_mode: SizeMode,
    pub padding: Padding,
    pub h_align: Alignment,
    pub v_align: Alignment,
    pub fixed_aspect: bool,
    pub aspect_mode: AspectMode,
    pub fudge: Point3,
    /// Normalized pivot.
    pub center: Point,
    pub visible: bool,

    // Layout nodes only.
    pub layout_type: LayoutType,
    pub spacing: f32,
    pub shrink_to_children: ShrinkMode,
    pub overall_align: Alignment,
    pub skip_hidden_children: bool,
    pub children: Vec<NodeConfig>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            name: None,
            kind: NodeKind::Box,
            text: None,
            font_size: None,
            width: Value::AUTO,
            height: Value::AUTO,
            layout_width: Value::AUTO,
            layout_height: Value::AUTO,
            size_mode: SizeMode::Fixed,
            padding: Padding::default(),
            h_align: Alignment::Start,
            v_align: Alignment::Start,
            fixed_aspect: false,
            aspect_mode: AspectMode::Default,
            fudge: Point3::ORIGIN,
            center: Point::ORIGIN,
            visible: true,
            layout_type: LayoutType::VerticalFlow,
            spacing: 0.0,
            shrink_to_children: ShrinkMode::None,
            overall_align: Alignment::Start,
            skip_hidden_children: false,
            children: Vec::new(),
        }
    }
}

impl NodeConfig {
    /// Build the node tree. `parent` is the percentage base.
    pub fn build(&self, parent: Size, viewport: Size) -> LayoutNode {
        let dims = Dimensions::new(parent.width, viewport);
        let width = self.width.resolve(&dims);
        let height = self.height.resolve(&dims.with_percent_of(parent.height));
        let size = Size::new(width.unwrap_or(0.0), height.unwrap_or(0.0));

        let layout_width = self.layout_width.resolve(&dims);
        let layout_height = self.layout_height.resolve(&dims.with_percent_of(parent.height));
        let requested_size = (layout_width.is_some() || layout_height.is_some()).then(|| {
            Size::new(layout_width.unwrap_or(0.0), layout_height.unwrap_or(0.0))
        });

        let mut node = match self.kind {
            NodeKind::Box => LayoutNode::plain(size),
            NodeKind::Image => LayoutNode::image(size),
            NodeKind::Text => {
                let mut block = TextBlock::new(self.text.clone().unwrap_or_default());
                if let Some(font_size) = self.font_size {
                    block = block.size(font_size);
                }
                let mut node = LayoutNode::reflowable(block);
                if size.width > 0.0 || size.height > 0.0 {
                    node.set_size(size);
                }
                node
            }
            NodeKind::Layout => LayoutNode::layout(self.layout_type)
                .with_size(size.width, size.height)
                .spacing(self.spacing)
                .shrink_to_children(self.shrink_to_children)
                .overall_alignment(self.overall_align)
                .skip_hidden_children(self.skip_hidden_children),
        };

        node.params = LayoutParams {
            size_mode: self.size_mode,
            requested_size,
            padding: self.padding,
            h_align: self.h_align,
            v_align: self.v_align,
            fixed_aspect: self.fixed_aspect || self.kind == NodeKind::Image,
            aspect_mode: self.aspect_mode,
            fudge: self.fudge,
        };
        node = node
            .center_anchor(self.center.x, self.center.y)
            .visible(self.visible);
        if let Some(name) = &self.name {
            node = node.name(name.clone());
        }

        if self.kind != NodeKind::Layout && !self.children.is_empty() {
            tracing::warn!(
                node = node.label(),
                "ignoring {} children of a {:?} node",
                self.children.len(),
                self.kind
            );
            return node;
        }
        for child in &self.children {
            node = node.push(child.build(size, viewport));
        }
        node
    }
}

// =========================================================================
// SceneConfig
// =========================================================================

/// A complete scene file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneConfig {
    #[serde(default)]
    pub settings: LayoutSettings,
    #[serde(default)]
    pub viewport: Size,
    pub root: NodeConfig,
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Build and validate the node tree, ready for its first pass.
    pub fn build(&self) -> Result<LayoutRoot> {
        let node = self.root.build(self.viewport, self.viewport);
        node.validate()?;
        Ok(LayoutRoot::with_settings(node, self.settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;

    #[test]
    fn test_settings_defaults() {
        let settings: LayoutSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, LayoutSettings::default());
        assert_eq!(settings.max_depth, 64);

        let settings: LayoutSettings =
            serde_json::from_str(r#"{"negative_stretch": "allow"}"#).unwrap();
        assert_eq!(settings.negative_stretch, NegativeStretch::Allow);
    }

    #[test]
    fn test_percentages_follow_parent_axis() {
        let config: NodeConfig = serde_json::from_str(
            r#"{
                "kind": "layout",
                "width": 400,
                "height": 200,
                "children": [{ "name": "half", "width": "50%", "height": "50%" }]
            }"#,
        )
        .unwrap();
        let node = config.build(Size::ZERO, Size::ZERO);

        assert_eq!(node.size(), Size::new(400.0, 200.0));
        assert_eq!(node.find("half").map(LayoutNode::size), Some(Size::new(200.0, 100.0)));
    }

    #[test]
    fn test_viewport_units_and_requested_size() {
        let config: NodeConfig = serde_json::from_str(
            r#"{ "layout_width": "10vw", "layout_height": "10vmin" }"#,
        )
        .unwrap();
        let node = config.build(Size::ZERO, Size::new(1000.0, 500.0));
        assert_eq!(node.params.requested_size, Some(Size::new(100.0, 50.0)));
    }

    #[test]
    fn test_auto_leaves_requested_size_unset() {
        let node = NodeConfig::default().build(Size::ZERO, Size::ZERO);
        assert_eq!(node.params.requested_size, None);
        assert!(node.is_visible());
    }

    #[test]
    fn test_image_kind_is_fixed_aspect() {
        let config: NodeConfig =
            serde_json::from_str(r#"{ "kind": "image", "width": 64, "height": 32 }"#).unwrap();
        let node = config.build(Size::ZERO, Size::ZERO);
        assert!(node.params.fixed_aspect);
    }

    #[test]
    fn test_children_of_leaf_are_ignored() {
        let config: NodeConfig =
            serde_json::from_str(r#"{ "kind": "box", "children": [{}] }"#).unwrap();
        let node = config.build(Size::ZERO, Size::ZERO);
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = SceneConfig::from_json(r#"{ "root": { "colour": "red" } }"#).unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));
    }

    #[test]
    fn test_bad_keyword_rejected() {
        let err = SceneConfig::from_json(r#"{ "root": { "size_mode": "huge" } }"#).unwrap_err();
        assert!(matches!(err, LayoutError::Config(_)));
    }

    #[test]
    fn test_scene_build_validates() {
        let scene = SceneConfig::from_json(
            r#"{
                "root": {
                    "kind": "layout",
                    "shrink_to_children": "height",
                    "children": [{ "size_mode": "stretch" }]
                }
            }"#,
        )
        .unwrap();
        assert!(matches!(
            scene.build(),
            Err(LayoutError::ShrinkStretchConflict { .. })
        ));
    }
}
