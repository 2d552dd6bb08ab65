use std::collections::{BTreeMap, HashMap};

use crate::{foundation::core::Resolution, model::request::DrawRequest};

/// One HUD instance's overlay definitions, keyed by element slot.
///
/// Slot access auto-vivifies: [`RegistryEntry::request_mut`] inserts a default
/// [`DrawRequest`] on first use. Iteration visits slots in first-access order,
/// and a slot's request stays identity-stable for the entry's lifetime.
#[derive(Clone, Debug, Default)]
pub struct RegistryEntry {
    index: u32,
    resolution: Resolution,
    order: Vec<u32>,
    requests: HashMap<u32, DrawRequest>,
}

impl RegistryEntry {
    fn new(index: u32) -> Self {
        Self {
            index,
            resolution: Resolution::default(),
            order: Vec::new(),
            requests: HashMap::new(),
        }
    }

    /// HUD index this entry is registered under.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Render resolution used for the render-family gates.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Store the render resolution.
    pub fn set_resolution(&mut self, width: f64, height: f64) {
        self.resolution = Resolution::new(width, height);
    }

    /// Number of element slots touched so far.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether no element slot has been touched.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Request at `slot`, if it was ever touched.
    pub fn request(&self, slot: u32) -> Option<&DrawRequest> {
        self.requests.get(&slot)
    }

    /// Request at `slot`, creating a default one on first access.
    pub fn request_mut(&mut self, slot: u32) -> &mut DrawRequest {
        self.requests.entry(slot).or_insert_with(|| {
            self.order.push(slot);
            DrawRequest::default()
        })
    }

    /// Remove the request at `slot`, if present.
    pub fn remove(&mut self, slot: u32) {
        if self.requests.remove(&slot).is_some() {
            self.order.retain(|s| *s != slot);
        }
    }

    /// Slots in first-access order.
    pub fn slots(&self) -> impl Iterator<Item = u32> + '_ {
        self.order.iter().copied()
    }

    /// Requests in first-access order.
    pub fn requests(&self) -> impl Iterator<Item = (u32, &DrawRequest)> {
        self.order
            .iter()
            .filter_map(|slot| self.requests.get(slot).map(|r| (*slot, r)))
    }

    /// Visit every request mutably, in first-access order.
    pub fn for_each_request_mut(&mut self, mut f: impl FnMut(u32, &mut DrawRequest)) {
        for slot in &self.order {
            if let Some(request) = self.requests.get_mut(slot) {
                f(*slot, request);
            }
        }
    }
}

/// Directory of HUD registry entries keyed by index.
///
/// One instance is owned by the long-lived host context and passed to the
/// layout and draw calls; there is no hidden global state. Entries are only
/// removed by [`HudRegistry::prune`], driven by the host's live-index set.
#[derive(Clone, Debug, Default)]
pub struct HudRegistry {
    entries: BTreeMap<u32, RegistryEntry>,
}

impl HudRegistry {
    /// Build an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry at `index`, creating it on first access.
    pub fn entry(&mut self, index: u32) -> &mut RegistryEntry {
        self.entries
            .entry(index)
            .or_insert_with(|| RegistryEntry::new(index))
    }

    /// Entry at `index`, if it exists.
    pub fn get(&self, index: u32) -> Option<&RegistryEntry> {
        self.entries.get(&index)
    }

    /// Whether an entry exists at `index`.
    pub fn contains(&self, index: u32) -> bool {
        self.entries.contains_key(&index)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop entries whose index is not claimed by any live HUD node.
    ///
    /// Safe to run at any time; a no-op when nothing changed.
    pub fn prune(&mut self, live_indices: &[u32]) {
        self.entries
            .retain(|index, _| live_indices.contains(index));
    }

    /// Allocate the entry at the lowest free index.
    ///
    /// Prunes stale entries first, then picks the smallest non-negative
    /// integer used neither by a live HUD node nor by an existing entry.
    pub fn allocate(&mut self, live_indices: &[u32]) -> &mut RegistryEntry {
        self.prune(live_indices);
        let mut index = 0u32;
        while live_indices.contains(&index) || self.entries.contains_key(&index) {
            index += 1;
        }
        self.entry(index)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/registry/directory.rs"]
mod tests;
