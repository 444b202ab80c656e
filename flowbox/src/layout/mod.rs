//! Layout System for flowbox
//!
//! Flow layouts over a tree of differently-sized nodes: fixed, flex, stretch
//! and fill sizing, padding and alignment, wrapping, shrink-to-children, and
//! aspect fitting for fixed-ratio content.
//!
//! # Architecture
//!
//! ```text
//! measure children -> shrink -> distribute leftover -> position -> fill
//! ```
//!
//! Each container runs its own pass and recurses into nested containers
//! before reading their extents.

pub mod context;
pub mod elements;
pub mod fit;
pub mod length;
pub mod params;

// passes are driven from node
pub mod node;
pub mod flow;
pub mod size_pass;
pub mod root;

// Re-export core types
pub use context::{LayoutContext, LayoutWarning, WarningKind};
pub use length::{
    Alignment, AspectMode, LayoutType, Padding, ShrinkMode, SizeMode, BASE_FONT_SIZE, CHAR_WIDTH,
    LINE_HEIGHT,
};
pub use params::LayoutParams;

// Re-export nodes and capabilities
pub use node::{Container, Content, LayoutNode, LayoutUpdatedFn, Measurable, ReflowableContent};
pub use elements::TextBlock;
pub use fit::{fit_inside, fit_rect, fit_scale};
pub use root::LayoutRoot;
