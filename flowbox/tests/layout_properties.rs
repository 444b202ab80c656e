//! Integration tests for layout passes through the public API.
//!
//! Each test builds a small tree, runs one or more passes and checks the
//! resulting sizes and positions.

use std::cell::Cell;
use std::rc::Rc;

use flowbox::layout::{
    fit_rect, Alignment, LayoutNode, LayoutRoot, LayoutType, Measurable, ShrinkMode, SizeMode,
    TextBlock, WarningKind, LINE_HEIGHT,
};
use flowbox::primitives::{Point3, Rect, Size};
use flowbox::{Dimensions, LayoutSettings, NegativeStretch, Value};

fn boxed(width: f32, height: f32) -> LayoutNode {
    LayoutNode::plain(Size::new(width, height))
}

fn stretch() -> LayoutNode {
    LayoutNode::plain(Size::ZERO).size_mode(SizeMode::Stretch)
}

/// Every node's bounds, depth first.
fn snapshot(node: &LayoutNode, out: &mut Vec<(Rect, f32)>) {
    out.push((node.bounds(), node.scale()));
    for child in node.children() {
        snapshot(child, out);
    }
}

#[test]
fn test_single_stretch_after_fixed() {
    let mut col = LayoutNode::layout(LayoutType::VerticalFlow)
        .with_size(300.0, 300.0)
        .push(boxed(300.0, 100.0))
        .push(stretch());
    col.run_layout();

    let stretched = &col.children()[1];
    assert_eq!(stretched.size().height, 200.0);
    assert_eq!(stretched.position().y, 100.0);
}

#[test]
fn test_overall_center_alignment() {
    let mut row = LayoutNode::layout(LayoutType::HorizontalFlow)
        .with_size(500.0, 100.0)
        .spacing(10.0)
        .overall_alignment(Alignment::Center)
        .push(boxed(100.0, 50.0))
        .push(boxed(100.0, 50.0));
    row.run_layout();

    assert_eq!(row.children()[0].position().x, 145.0);
    assert_eq!(row.children()[1].position().x, 255.0);
}

#[test]
fn test_stretch_distribution_sums_to_extent() {
    let mut row = LayoutNode::layout(LayoutType::HorizontalFlow)
        .with_size(400.0, 40.0)
        .push(boxed(60.0, 40.0))
        .push(stretch())
        .push(boxed(40.0, 40.0).size_mode(SizeMode::Flex))
        .push(stretch())
        .push(stretch());
    row.run_layout();

    let widths: Vec<f32> = row.children().iter().map(|c| c.size().width).collect();
    assert_eq!(widths, vec![60.0, 100.0, 40.0, 100.0, 100.0]);
    assert_eq!(widths.iter().sum::<f32>(), 400.0);

    let last = &row.children()[4];
    assert_eq!(last.bounds().right(), 400.0);
}

#[test]
fn test_shrink_both() {
    let mut col = LayoutNode::layout(LayoutType::VerticalFlow)
        .shrink_to_children(ShrinkMode::Both)
        .spacing(5.0)
        .push(boxed(50.0, 40.0))
        .push(boxed(60.0, 30.0));
    col.run_layout();

    assert_eq!(col.size(), Size::new(60.0, 75.0));
}

#[test]
fn test_horizontal_wrap_threshold() {
    let mut row = LayoutNode::layout(LayoutType::HorizontalWrap)
        .with_size(150.0, 20.0)
        .spacing(10.0)
        .push(boxed(60.0, 20.0))
        .push(boxed(60.0, 20.0))
        .push(boxed(60.0, 20.0));
    row.run_layout();

    let kids = row.children();
    assert_eq!(kids[0].position(), Point3::new(0.0, 0.0, 0.0));
    assert_eq!(kids[1].position(), Point3::new(70.0, 0.0, 0.0));
    assert_eq!(kids[2].position(), Point3::new(0.0, 30.0, 0.0));
    assert_eq!(row.size(), Size::new(150.0, 50.0));
}

#[test]
fn test_layout_is_idempotent() {
    let mut page = LayoutNode::layout(LayoutType::VerticalFlow)
        .with_size(320.0, 480.0)
        .spacing(8.0)
        .push(
            LayoutNode::reflowable(TextBlock::new("a heading long enough to wrap once or twice"))
                .size_mode(SizeMode::Flex)
                .padding(6.0),
        )
        .push(
            LayoutNode::layout(LayoutType::HorizontalFlow)
                .size_mode(SizeMode::Flex)
                .shrink_to_children(ShrinkMode::Height)
                .push(boxed(40.0, 40.0).v_align(Alignment::Center))
                .push(boxed(80.0, 20.0).v_align(Alignment::End))
                .push(stretch()),
        )
        .push(LayoutNode::image(Size::new(400.0, 300.0)).size_mode(SizeMode::Stretch))
        .push(boxed(100.0, 30.0).h_align(Alignment::Center).center_anchor(0.5, 0.5))
        .push(LayoutNode::image(Size::new(10.0, 10.0)).size_mode(SizeMode::Fill));

    page.run_layout();
    let mut first = Vec::new();
    snapshot(&page, &mut first);

    page.run_layout();
    let mut second = Vec::new();
    snapshot(&page, &mut second);

    assert_eq!(first, second);
}

#[test]
fn test_wrap_layout_is_idempotent() {
    let mut row = LayoutNode::layout(LayoutType::HorizontalWrap)
        .with_size(100.0, 20.0)
        .push(boxed(60.0, 5.0).size_mode(SizeMode::Flex).name("flex"))
        .push(boxed(60.0, 10.0).v_align(Alignment::Center).name("center"))
        .push(boxed(30.0, 10.0).v_align(Alignment::End).name("end"))
        .push(stretch().name("stretch"));

    row.run_layout();
    let mut first = Vec::new();
    snapshot(&row, &mut first);

    assert_eq!(row.size(), Size::new(100.0, 40.0));
    assert_eq!(row.find("flex").unwrap().size(), Size::new(60.0, 20.0));
    assert_eq!(row.find("center").unwrap().position().y, 25.0);
    assert_eq!(row.find("end").unwrap().position().y, 30.0);
    assert_eq!(row.find("stretch").unwrap().size().height, 20.0);

    for _ in 0..3 {
        row.run_layout();
        let mut again = Vec::new();
        snapshot(&row, &mut again);
        assert_eq!(first, again);
    }
}

#[test]
fn test_flex_wrap_inside_column_is_idempotent() {
    let mut col = LayoutNode::layout(LayoutType::VerticalFlow)
        .with_size(200.0, 300.0)
        .push(
            LayoutNode::layout(LayoutType::HorizontalWrap)
                .name("tags")
                .size_mode(SizeMode::Flex)
                .with_size(0.0, 20.0)
                .push(boxed(150.0, 5.0).size_mode(SizeMode::Flex))
                .push(boxed(150.0, 5.0).size_mode(SizeMode::Flex)),
        )
        .push(boxed(200.0, 10.0).name("below"));

    for _ in 0..3 {
        col.run_layout();
        assert_eq!(col.find("tags").unwrap().size(), Size::new(200.0, 40.0));
        assert_eq!(col.find("below").unwrap().position().y, 40.0);
    }
}

#[test]
fn test_flex_text_reflows_to_column_width() {
    let mut col = LayoutNode::layout(LayoutType::VerticalFlow)
        .with_size(100.0, 400.0)
        .shrink_to_children(ShrinkMode::Height)
        .push(LayoutNode::reflowable(TextBlock::new("aaaa bbbb cccc")).size_mode(SizeMode::Flex))
        .push(boxed(100.0, 10.0));
    col.run_layout();

    assert_eq!(col.children()[0].size().height, 2.0 * LINE_HEIGHT);
    assert_eq!(col.children()[1].position().y, 2.0 * LINE_HEIGHT);
    assert_eq!(col.size().height, 2.0 * LINE_HEIGHT + 10.0);
}

#[test]
fn test_stretch_image_is_letterboxed() {
    let mut col = LayoutNode::layout(LayoutType::VerticalFlow)
        .with_size(200.0, 300.0)
        .push(boxed(200.0, 100.0))
        .push(LayoutNode::image(Size::new(400.0, 100.0)).size_mode(SizeMode::Stretch));
    col.run_layout();

    let image = &col.children()[1];
    assert_eq!(image.scale(), 0.5);
    assert_eq!(image.bounds(), Rect::new(0.0, 100.0, 200.0, 50.0));
}

#[test]
fn test_percentage_and_viewport_units() {
    let half: Value = "50%".parse().unwrap();
    let viewport = Size::new(1000.0, 500.0);
    assert_eq!(half.resolve(&Dimensions::new(200.0, viewport)), Some(100.0));
    assert_eq!(half.resolve(&Dimensions::new(0.0, viewport)), Some(0.0));

    let dims = Dimensions::new(0.0, viewport);
    assert_eq!("10vw".parse::<Value>().unwrap().resolve(&dims), Some(100.0));
    assert_eq!("10vmax".parse::<Value>().unwrap().resolve(&dims), Some(100.0));
    assert_eq!("10vmin".parse::<Value>().unwrap().resolve(&dims), Some(50.0));
}

#[test]
fn test_aspect_fit_letterbox_and_fill() {
    let target = Rect::new(0.0, 0.0, 100.0, 100.0);

    let (scale, placed) = fit_rect(Size::new(200.0, 100.0), target, true).unwrap();
    assert_eq!(scale, 0.5);
    assert_eq!(placed, Rect::new(0.0, 25.0, 100.0, 50.0));

    let (scale, placed) = fit_rect(Size::new(200.0, 100.0), target, false).unwrap();
    assert_eq!(scale, 1.0);
    assert_eq!(placed.size(), Size::new(200.0, 100.0));
}

#[test]
fn test_zero_sized_image_is_left_alone() {
    let mut col = LayoutNode::layout(LayoutType::VerticalFlow)
        .with_size(100.0, 100.0)
        .push(LayoutNode::image(Size::ZERO).size_mode(SizeMode::Stretch));
    col.run_layout();

    assert_eq!(col.children()[0].scale(), 1.0);
    assert_eq!(col.children()[0].size(), Size::ZERO);
}

#[test]
fn test_negative_stretch_allowed_by_settings() {
    let tree = LayoutNode::layout(LayoutType::VerticalFlow)
        .with_size(100.0, 100.0)
        .push(boxed(100.0, 120.0))
        .push(stretch());
    let settings = LayoutSettings {
        negative_stretch: NegativeStretch::Allow,
        ..LayoutSettings::default()
    };
    let mut root = LayoutRoot::with_settings(tree, settings);
    let warnings = root.update().unwrap_or_default();

    assert_eq!(root.node().children()[1].size().height, -20.0);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].kind, WarningKind::NegativeStretch);
}

#[test]
fn test_layout_updated_callback_sees_final_size() {
    let seen = Rc::new(Cell::new(None));
    let sink = Rc::clone(&seen);

    let mut col = LayoutNode::layout(LayoutType::VerticalFlow)
        .shrink_to_children(ShrinkMode::Both)
        .on_layout_updated(move |size| sink.set(Some(size)))
        .push(boxed(30.0, 10.0))
        .push(boxed(20.0, 10.0));
    col.run_layout();

    assert_eq!(seen.get(), Some(Size::new(30.0, 20.0)));
}

#[test]
fn test_nested_stretch_container_relayouts() {
    let inner = LayoutNode::layout(LayoutType::HorizontalFlow)
        .name("inner")
        .size_mode(SizeMode::Stretch)
        .push(boxed(20.0, 10.0))
        .push(stretch().name("grow"));
    let mut col = LayoutNode::layout(LayoutType::VerticalFlow)
        .with_size(200.0, 100.0)
        .push(boxed(200.0, 40.0))
        .push(inner);
    col.run_layout();

    let inner = col.find("inner").unwrap();
    assert_eq!(inner.size(), Size::new(200.0, 60.0));
    assert_eq!(inner.position().y, 40.0);

    let grow = col.find("grow").unwrap();
    assert_eq!(grow.size(), Size::new(180.0, 60.0));
    assert_eq!(grow.position().x, 20.0);
}
