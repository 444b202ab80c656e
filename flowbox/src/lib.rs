//! flowbox: flow/flex layout for scene trees
//!
//! flowbox lays out a tree of boxes, reflowable text and fixed-aspect images
//! along vertical or horizontal flows:
//! - Fixed, flex, stretch and fill sizing policies
//! - Per-node padding, alignment, pivot and fudge offsets
//! - Wrapping flows and shrink-to-children containers
//! - CSS-like units (`px`, `%`, `vw`/`vh`/`vmin`/`vmax`, `fr`)
//!
//! # Usage
//!
//! ```
//! use flowbox::layout::{LayoutNode, LayoutType, SizeMode};
//! use flowbox::primitives::Size;
//!
//! let mut column = LayoutNode::layout(LayoutType::VerticalFlow)
//!     .with_size(300.0, 300.0)
//!     .push(LayoutNode::plain(Size::new(300.0, 100.0)))
//!     .push(LayoutNode::plain(Size::ZERO).size_mode(SizeMode::Stretch));
//! column.run_layout();
//!
//! assert_eq!(column.children()[1].size(), Size::new(300.0, 200.0));
//! ```
//!
//! Scenes can also be described in JSON, see [`config::SceneConfig`].

// Core primitives
pub mod primitives;
pub mod value;
pub mod error;

// Layout system
pub mod layout;

// Scene files
pub mod config;

pub use config::{LayoutSettings, NegativeStretch, NodeConfig, SceneConfig};
pub use error::{LayoutError, Result};
pub use value::{Dimensions, Unit, Value};
