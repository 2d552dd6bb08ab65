use super::*;

#[test]
fn request_slots_auto_vivify_and_stay_identity_stable() {
    let mut registry = HudRegistry::new();
    let entry = registry.entry(0);

    entry.request_mut(5).text = "hello".to_string();
    assert_eq!(entry.len(), 1);
    assert_eq!(entry.request(5).map(|r| r.text.as_str()), Some("hello"));

    // A second access hits the same request, not a fresh default.
    entry.request_mut(5).draw = true;
    assert_eq!(entry.request(5).map(|r| r.text.as_str()), Some("hello"));
    assert!(entry.request(5).is_some_and(|r| r.draw));

    assert_eq!(entry.request(7), None);
}

#[test]
fn requests_iterate_in_first_access_order() {
    let mut registry = HudRegistry::new();
    let entry = registry.entry(0);

    entry.request_mut(9);
    entry.request_mut(2);
    entry.request_mut(4);
    entry.request_mut(2);

    let slots: Vec<u32> = entry.slots().collect();
    assert_eq!(slots, vec![9, 2, 4]);
    let slots: Vec<u32> = entry.requests().map(|(slot, _)| slot).collect();
    assert_eq!(slots, vec![9, 2, 4]);

    entry.remove(2);
    let slots: Vec<u32> = entry.slots().collect();
    assert_eq!(slots, vec![9, 4]);
}

#[test]
fn allocate_picks_the_lowest_free_index() {
    let mut registry = HudRegistry::new();
    assert_eq!(registry.allocate(&[]).index(), 0);

    let mut registry = HudRegistry::new();
    assert_eq!(registry.allocate(&[0, 2, 3]).index(), 1);

    // An existing entry blocks its index too.
    let mut registry = HudRegistry::new();
    registry.entry(1);
    assert_eq!(registry.allocate(&[0, 1]).index(), 2);
}

#[test]
fn prune_drops_entries_without_a_live_index() {
    let mut registry = HudRegistry::new();
    registry.entry(0);
    registry.entry(1);
    registry.entry(2);

    registry.prune(&[1]);
    assert_eq!(registry.len(), 1);
    assert!(registry.contains(1));
    assert!(!registry.contains(0));

    // Idempotent.
    registry.prune(&[1]);
    assert_eq!(registry.len(), 1);
}

#[test]
fn allocate_prunes_stale_entries_first() {
    let mut registry = HudRegistry::new();
    registry.entry(0);
    registry.entry(5);

    let index = registry.allocate(&[0]).index();
    assert_eq!(index, 1);
    assert!(!registry.contains(5));
}

#[test]
fn entry_stores_its_resolution() {
    let mut registry = HudRegistry::new();
    let entry = registry.entry(3);
    entry.set_resolution(1920.0, 1080.0);

    assert_eq!(entry.index(), 3);
    assert_eq!(entry.resolution(), Resolution::new(1920.0, 1080.0));
    assert!(entry.is_empty());
}
