use super::*;

#[test]
fn segment_count_clamps_to_the_tessellation_range() {
    assert_eq!(circle_segment_count(3.0), 8);
    assert_eq!(circle_segment_count(50.0), 50);
    assert_eq!(circle_segment_count(500.0), 360);
    assert_eq!(circle_segment_count(0.0), 8);
    assert_eq!(circle_segment_count(-10.0), 8);
    assert_eq!(circle_segment_count(360.9), 360);
}

#[test]
fn font_state_defaults_match_the_request_defaults() {
    let state = FontState::default();
    assert_eq!(state.name, None);
    assert_eq!(state.size, crate::model::request::DEFAULT_FONT_SIZE);
    assert_eq!(state.stretch, crate::model::request::FONT_STRETCH_UNSTRETCHED);
    assert_eq!(state.weight, FontWeight::Light);
    assert_eq!(state.incline, FontIncline::Normal);
    assert_eq!(state.line, FontLine::None);
}
