use super::*;
use crate::{
    foundation::core::{Color, Resolution, Vec2, ViewportRect},
    layout::engine::prepare_for_draw,
    model::camera::CameraState,
    model::request::{ElementConfig, GateKind, HorizontalAttach, VerticalAttach},
    render::display_list::{DisplayListPainter, PaintOp},
};

fn centered_viewport() -> ViewportRect {
    ViewportRect::new(-50.0, -50.0, 100.0, 100.0)
}

fn prepared_frame(registry: &mut HudRegistry, config: &ElementConfig) -> FrameData {
    registry.entry(0).request_mut(0).apply_config(config, &[]);
    let mut camera = CameraState::default();
    camera.name = "shotCam".to_string();
    prepare_for_draw(
        registry,
        &camera,
        centered_viewport(),
        Resolution::new(100.0, 100.0),
        0,
        None,
    )
    .unwrap()
}

fn playback() -> DrawContext {
    DrawContext {
        playback: PlaybackRange {
            start: 1.0,
            end: 10.0,
            current: 5.0,
        },
    }
}

#[test]
fn unbound_frames_draw_nothing() {
    let registry = HudRegistry::new();
    let mut painter = DisplayListPainter::new();

    draw(&mut painter, &registry, &playback(), &FrameData::default());
    assert!(painter.ops().is_empty());

    // Bound to an index with no surviving entry.
    let frame = FrameData {
        hud_index: Some(7),
        ..FrameData::default()
    };
    draw(&mut painter, &registry, &playback(), &frame);
    assert!(painter.ops().is_empty());
}

#[test]
fn text_element_paints_one_substituted_label() {
    let mut registry = HudRegistry::new();
    let config = ElementConfig {
        draw: true,
        shape: ShapeKind::Text,
        gate: GateKind::Viewport,
        draw_gate: false,
        region_size: Vec2::new(100.0, 100.0),
        horizontal_attach: HorizontalAttach::Middle,
        vertical_attach: VerticalAttach::Middle,
        text: "$CAMERA $FRAME".to_string(),
        color: Color::WHITE,
        ..ElementConfig::default()
    };
    let frame = prepared_frame(&mut registry, &config);

    let mut painter = DisplayListPainter::new();
    draw(&mut painter, &registry, &playback(), &frame);

    let ops = painter.ops();
    assert_eq!(ops.len(), 1);
    let PaintOp::Text {
        anchor,
        text,
        background_size,
        color,
        font,
        ..
    } = &ops[0]
    else {
        panic!("expected a text op");
    };
    assert_eq!(text, "shotCam 004");
    // Region fills the gate, so the label box starts at its lower-left corner.
    assert_eq!(*anchor, Point::new(-50.0, -50.0));
    assert_eq!(*background_size, (100.0, 100.0));
    assert_eq!(*color, Color::WHITE);
    assert_eq!(font.size, 12);
}

#[test]
fn empty_text_paints_nothing() {
    let mut registry = HudRegistry::new();
    let config = ElementConfig {
        draw: true,
        shape: ShapeKind::Text,
        draw_gate: false,
        text: String::new(),
        ..ElementConfig::default()
    };
    let frame = prepared_frame(&mut registry, &config);

    let mut painter = DisplayListPainter::new();
    draw(&mut painter, &registry, &playback(), &frame);
    assert!(painter.ops().is_empty());
}

#[test]
fn line_needs_at_least_two_points() {
    let mut registry = HudRegistry::new();
    let config = ElementConfig {
        draw: true,
        shape: ShapeKind::Line,
        draw_gate: false,
        region_size: Vec2::new(100.0, 100.0),
        positions: vec![Point::new(50.0, 50.0)],
        ..ElementConfig::default()
    };
    let frame = prepared_frame(&mut registry, &config);

    let mut painter = DisplayListPainter::new();
    draw(&mut painter, &registry, &playback(), &frame);
    assert!(painter.ops().is_empty());
}

#[test]
fn line_connects_consecutive_positions() {
    let mut registry = HudRegistry::new();
    let config = ElementConfig {
        draw: true,
        shape: ShapeKind::Line,
        draw_gate: false,
        region_size: Vec2::new(100.0, 100.0),
        horizontal_attach: HorizontalAttach::Middle,
        vertical_attach: VerticalAttach::Middle,
        positions: vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Point::new(100.0, 100.0),
        ],
        ..ElementConfig::default()
    };
    let frame = prepared_frame(&mut registry, &config);

    let mut painter = DisplayListPainter::new();
    draw(&mut painter, &registry, &playback(), &frame);

    let ops = painter.ops();
    assert_eq!(ops.len(), 2);
    let &PaintOp::Line { from, to, .. } = &ops[0] else {
        panic!("expected a line op");
    };
    assert_eq!(from, Point::new(-50.0, -50.0));
    assert_eq!(to, Point::new(50.0, -50.0));
    let &PaintOp::Line { to, .. } = &ops[1] else {
        panic!("expected a line op");
    };
    assert_eq!(to, Point::new(50.0, 50.0));
}

#[test]
fn gate_and_region_rectangles_precede_the_shape() {
    let mut registry = HudRegistry::new();
    let config = ElementConfig {
        draw: true,
        shape: ShapeKind::Circle,
        gate: GateKind::Viewport,
        draw_gate: true,
        draw_region: true,
        region_filled: true,
        region_size: Vec2::new(100.0, 100.0),
        horizontal_attach: HorizontalAttach::Middle,
        vertical_attach: VerticalAttach::Middle,
        color: Color::WHITE,
        region_color: Color::new(1.0, 0.0, 0.0, 1.0),
        radius: 25.0,
        positions: vec![Point::new(50.0, 50.0), Point::new(100.0, 100.0)],
        ..ElementConfig::default()
    };
    let frame = prepared_frame(&mut registry, &config);

    let mut painter = DisplayListPainter::new();
    draw(&mut painter, &registry, &playback(), &frame);

    let ops = painter.ops();
    assert_eq!(ops.len(), 4);

    let &PaintOp::Rect {
        center,
        half_width,
        filled,
        color,
        ..
    } = &ops[0]
    else {
        panic!("expected the gate rectangle first");
    };
    assert_eq!(center, Point::ZERO);
    assert_eq!(half_width, 50.0);
    assert!(!filled);
    assert_eq!(color, Color::WHITE);

    let &PaintOp::Rect { filled, color, .. } = &ops[1] else {
        panic!("expected the region rectangle second");
    };
    assert!(filled);
    assert_eq!(color, Color::new(1.0, 0.0, 0.0, 1.0));

    let &PaintOp::Circle { radius, center, .. } = &ops[2] else {
        panic!("expected a circle op");
    };
    assert_eq!(radius, 25.0);
    assert_eq!(center, Point::ZERO);
    assert!(matches!(ops[3], PaintOp::Circle { .. }));
}

#[test]
fn size_factor_scales_about_the_region_center() {
    let mut registry = HudRegistry::new();
    let config = ElementConfig {
        draw: true,
        shape: ShapeKind::Point,
        draw_gate: false,
        region_size: Vec2::new(50.0, 50.0),
        horizontal_attach: HorizontalAttach::Middle,
        vertical_attach: VerticalAttach::Middle,
        size: 2.0,
        radius: 4.0,
        positions: vec![Point::new(0.0, 0.0)],
        ..ElementConfig::default()
    };
    let frame = prepared_frame(&mut registry, &config);

    let mut painter = DisplayListPainter::new();
    draw(&mut painter, &registry, &playback(), &frame);

    let ops = painter.ops();
    assert_eq!(ops.len(), 1);
    let &PaintOp::Point { position, size, .. } = &ops[0] else {
        panic!("expected a point op");
    };
    // The 50x50 region doubles in place: its corner moves to (-50, -50).
    assert_eq!(position, Point::new(-50.0, -50.0));
    assert_eq!(size, 8.0);
}
