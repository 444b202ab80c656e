//! Integration tests for JSON scene loading.

use std::io::Write;

use flowbox::layout::Measurable;
use flowbox::primitives::{Rect, Size};
use flowbox::{LayoutError, NegativeStretch, SceneConfig};

const SCENE: &str = r#"{
    "settings": { "max_depth": 8, "negative_stretch": "allow" },
    "viewport": { "width": 1000, "height": 500 },
    "root": {
        "name": "page",
        "kind": "layout",
        "layout_type": "vert",
        "width": "100vw",
        "height": "100vh",
        "spacing": 10,
        "children": [
            {
                "name": "header",
                "kind": "layout",
                "layout_type": "horiz",
                "size_mode": "flex",
                "height": 60,
                "overall_align": "right",
                "children": [
                    { "name": "logo", "kind": "image", "width": 200, "height": 100, "layout_width": 120, "layout_height": 60 },
                    { "name": "title", "kind": "text", "text": "Hello", "v_align": "middle", "padding": { "left": 8 } }
                ]
            },
            { "name": "body", "size_mode": "stretch", "padding": { "top": 5, "bottom": 5 } },
            { "name": "backdrop", "size_mode": "fill" }
        ]
    }
}"#;

#[test]
fn test_scene_from_json() {
    let scene = SceneConfig::from_json(SCENE).unwrap();
    assert_eq!(scene.settings.max_depth, 8);
    assert_eq!(scene.settings.negative_stretch, NegativeStretch::Allow);
    assert_eq!(scene.viewport, Size::new(1000.0, 500.0));

    let mut root = scene.build().unwrap();
    let warnings = root.update().unwrap();
    assert!(warnings.is_empty());

    let page = root.node();
    assert_eq!(page.size(), Size::new(1000.0, 500.0));

    let header = page.find("header").unwrap();
    assert_eq!(header.size(), Size::new(1000.0, 60.0));

    let logo = header.find("logo").unwrap();
    assert_eq!(logo.scale(), 0.6);

    // 60 + 10 spacing, then the body's top padding.
    let body = page.find("body").unwrap();
    assert_eq!(body.bounds(), Rect::new(0.0, 75.0, 1000.0, 420.0));

    let backdrop = page.find("backdrop").unwrap();
    assert_eq!(backdrop.bounds(), Rect::new(0.0, 0.0, 1000.0, 500.0));
}

#[test]
fn test_scene_right_aligned_header() {
    let mut root = SceneConfig::from_json(SCENE).unwrap().build().unwrap();
    root.update();

    let header = root.node().find("header").unwrap();
    let logo = header.find("logo").unwrap().bounds();
    let title = header.find("title").unwrap().bounds();

    // The block ends flush with the header's right edge.
    assert!((title.right() - 1000.0).abs() < 1e-3, "title ends at {}", title.right());
    assert!((title.x - 8.0 - logo.right()).abs() < 1e-3);
    assert_eq!(title.y, 30.0 - title.height / 2.0);
}

#[test]
fn test_scene_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SCENE.as_bytes()).unwrap();

    let scene = SceneConfig::load(file.path()).unwrap();
    assert_eq!(scene.root.name.as_deref(), Some("page"));
    assert_eq!(scene.root.children.len(), 3);
}

#[test]
fn test_scene_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SceneConfig::load(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, LayoutError::Io(_)));
}

#[test]
fn test_scene_malformed_value() {
    let err = SceneConfig::from_json(r#"{ "root": { "width": "-5px" } }"#).unwrap_err();
    assert!(matches!(err, LayoutError::Config(_)));
    assert!(err.to_string().contains("negative"));

    let err = SceneConfig::from_json(r#"{ "root": { "width": "12furlongs" } }"#).unwrap_err();
    assert!(matches!(err, LayoutError::Config(_)));
}

#[test]
fn test_scene_negative_padding_fails_validation() {
    let scene = SceneConfig::from_json(
        r#"{ "root": { "kind": "layout", "children": [{ "name": "bad", "padding": { "left": -2 } }] } }"#,
    )
    .unwrap();
    let err = scene.build().unwrap_err();
    assert!(matches!(err, LayoutError::NegativePadding { ref node } if node == "bad"));
}
