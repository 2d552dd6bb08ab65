use super::*;

#[test]
fn corners_track_center_and_size() {
    let canvas = Canvas::new(10.0, 20.0, 100.0, 50.0);

    assert_eq!(canvas.corner(Corner::LeftTop), Point::new(-40.0, 45.0));
    assert_eq!(canvas.corner(Corner::RightTop), Point::new(60.0, 45.0));
    assert_eq!(canvas.corner(Corner::LeftBottom), Point::new(-40.0, -5.0));
    assert_eq!(canvas.corner(Corner::RightBottom), Point::new(60.0, -5.0));
    assert_eq!(canvas.aspect_ratio(), 2.0);
}

#[test]
fn zero_height_yields_aspect_one() {
    let canvas = Canvas::new(0.0, 0.0, 640.0, 0.0);
    assert_eq!(canvas.aspect_ratio(), 1.0);
}

#[test]
fn mutators_refresh_derived_state() {
    let mut canvas = Canvas::default();
    canvas.apply(0.0, 0.0, 10.0, 10.0);
    assert_eq!(canvas.corner(Corner::RightTop), Point::new(5.0, 5.0));

    canvas.move_to(100.0, 100.0);
    assert_eq!(canvas.corner(Corner::RightTop), Point::new(105.0, 105.0));
    assert_eq!(canvas.width(), 10.0);

    canvas.resize(20.0, 40.0);
    assert_eq!(canvas.corner(Corner::LeftBottom), Point::new(90.0, 80.0));
    assert_eq!(canvas.aspect_ratio(), 0.5);

    canvas.scale(2.0, 0.5);
    assert_eq!(canvas.width(), 40.0);
    assert_eq!(canvas.height(), 20.0);
}

#[test]
fn inherit_copies_geometry() {
    let source = Canvas::new(3.0, 4.0, 30.0, 40.0);
    let mut target = Canvas::default();
    target.inherit(&source);

    assert_eq!(target.position(), source.position());
    assert_eq!(target.width(), source.width());
    assert_eq!(target.height(), source.height());
    assert_eq!(
        target.corner(Corner::LeftTop),
        source.corner(Corner::LeftTop)
    );
}
