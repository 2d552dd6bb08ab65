use super::*;
use crate::{
    foundation::core::{Color, Point},
    model::request::{GateKind, ShapeKind},
    registry::directory::HudRegistry,
};

fn sample_document() -> HudDocument {
    HudDocument {
        name: "shot framing".to_string(),
        elements: vec![
            ElementConfig {
                draw: true,
                shape: ShapeKind::Text,
                gate: GateKind::Render,
                text: "$CAMERA $FOCAL_LENGHT".to_string(),
                color: Color::WHITE,
                positions: vec![Point::ZERO],
                font_style: 0,
                ..ElementConfig::default()
            },
            ElementConfig {
                draw: true,
                shape: ShapeKind::Circle,
                radius: 40.0,
                positions: vec![Point::new(50.0, 50.0)],
                ..ElementConfig::default()
            },
        ],
    }
}

#[test]
fn json_round_trip_preserves_the_document() {
    let document = sample_document();
    let json = document.to_json().unwrap();
    let restored = HudDocument::from_json(&json).unwrap();
    assert_eq!(restored, document);
}

#[test]
fn malformed_json_is_a_serde_error() {
    let result = HudDocument::from_json("{\"name\": ");
    assert!(result.is_err());
}

#[test]
fn apply_writes_slots_in_order() {
    let document = sample_document();
    let catalog = vec!["Courier".to_string()];

    let mut registry = HudRegistry::new();
    let entry = registry.entry(0);
    document.apply_to_entry(entry, &catalog);

    assert_eq!(entry.len(), 2);
    let slots: Vec<u32> = entry.slots().collect();
    assert_eq!(slots, vec![0, 1]);

    let text = entry.request(0).unwrap();
    assert_eq!(text.shape, ShapeKind::Text);
    assert_eq!(text.font_family.as_deref(), Some("Courier"));

    let circle = entry.request(1).unwrap();
    assert_eq!(circle.shape, ShapeKind::Circle);
    assert_eq!(circle.radius, 40.0);
}

#[test]
fn export_round_trips_through_an_entry() {
    let document = sample_document();
    let mut registry = HudRegistry::new();
    let entry = registry.entry(0);
    document.apply_to_entry(entry, &[]);

    let exported = HudDocument::from_entry("shot framing", &*entry);
    assert_eq!(exported, document);
}

#[test]
fn save_and_load_round_trip_on_disk() {
    let document = sample_document();
    let path = std::env::temp_dir().join("framegate_document_roundtrip.json");

    document.save(&path).unwrap();
    let restored = HudDocument::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(restored, document);
}

#[test]
fn load_missing_file_is_an_error() {
    let path = std::env::temp_dir().join("framegate_document_missing.json");
    assert!(HudDocument::load(&path).is_err());
}
