//! In-memory image store, addressed identically to queue steps.
//!
//! The store keeps one fixed-shape record per selected flow: three
//! ordered slot vectors (BEFORE, CLEANING, AFTER) sized from the catalog.
//! Slots are sparse: a filled BEFORE slot says nothing about its AFTER
//! counterpart. Writing to a slot overwrites any prior capture at
//! the same key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::FlowCatalog;
use crate::models::{CapturedPhoto, FlowDefinition, FlowId, Phase, Slot};

/// Fixed-shape slot record for a single flow.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FlowImages {
    before: Vec<Slot>,
    cleaning: Vec<Slot>,
    after: Vec<Slot>,
}

impl FlowImages {
    /// Creates an all-empty record sized from a flow definition.
    fn sized_for(flow: &FlowDefinition) -> Self {
        Self {
            before: vec![Slot::Empty; flow.before.len()],
            cleaning: vec![Slot::Empty; flow.cleaning.len()],
            after: vec![Slot::Empty; flow.before.len()],
        }
    }

    /// Slots of one phase.
    pub fn phase(&self, phase: Phase) -> &[Slot] {
        match phase {
            Phase::Before => &self.before,
            Phase::Cleaning => &self.cleaning,
            Phase::After => &self.after,
        }
    }

    fn phase_mut(&mut self, phase: Phase) -> &mut Vec<Slot> {
        match phase {
            Phase::Before => &mut self.before,
            Phase::Cleaning => &mut self.cleaning,
            Phase::After => &mut self.after,
        }
    }

    /// Number of before/after comparison rows this record spans.
    pub fn comparison_rows(&self) -> usize {
        self.before.len().max(self.after.len())
    }

    /// Count of filled slots across all phases.
    pub fn filled_count(&self) -> usize {
        [&self.before, &self.cleaning, &self.after]
            .into_iter()
            .flatten()
            .filter(|slot| !slot.is_empty())
            .count()
    }
}

/// In-memory repository of captured photos for one session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImageStore {
    flows: BTreeMap<FlowId, FlowImages>,
}

impl ImageStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)initializes entries for exactly the selected flows.
    ///
    /// Entries for flows that remain selected keep their captured slots;
    /// entries for deselected flows are discarded; newly selected flows
    /// get all-empty records sized from the catalog.
    pub fn rebuild(&mut self, catalog: &FlowCatalog, selection: &[FlowId]) {
        let mut rebuilt = BTreeMap::new();
        for id in selection {
            let Some(flow) = catalog.get(id) else { continue };
            let entry = self
                .flows
                .remove(id)
                .unwrap_or_else(|| FlowImages::sized_for(flow));
            rebuilt.insert(id.clone(), entry);
        }
        self.flows = rebuilt;
    }

    /// Record for one flow, if it is part of the current selection.
    pub fn flow(&self, id: &FlowId) -> Option<&FlowImages> {
        self.flows.get(id)
    }

    /// Slot at an addressing key.
    pub fn slot(&self, flow: &FlowId, phase: Phase, index: usize) -> Option<&Slot> {
        self.flows.get(flow).and_then(|f| f.phase(phase).get(index))
    }

    /// Writes a capture at an addressing key, overwriting any prior value.
    ///
    /// Out-of-range indices grow the phase vector; this only happens when
    /// the catalog changed between queue build and capture, which the
    /// session prevents, but the store stays total either way.
    pub fn record(&mut self, flow: &FlowId, phase: Phase, index: usize, capture: CapturedPhoto) {
        let entry = self.flows.entry(flow.clone()).or_default();
        let slots = entry.phase_mut(phase);
        if index >= slots.len() {
            slots.resize(index + 1, Slot::Empty);
        }
        slots[index] = Slot::Filled(capture);
    }

    /// Flow ids currently tracked, in key order.
    pub fn flow_ids(&self) -> impl Iterator<Item = &FlowId> {
        self.flows.keys()
    }

    /// Total filled slots across all flows.
    pub fn filled_count(&self) -> usize {
        self.flows.values().map(FlowImages::filled_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhotoData;

    fn capture(label: &str) -> CapturedPhoto {
        CapturedPhoto {
            label: label.to_string(),
            photo: PhotoData {
                bytes: vec![0xff, 0xd8],
                width_px: 4,
                height_px: 3,
            },
        }
    }

    #[test]
    fn rebuild_sizes_records_from_catalog() {
        let catalog = FlowCatalog::builtin();
        let mut store = ImageStore::new();
        store.rebuild(&catalog, &[FlowId::from("interior_detailed")]);

        let flow = store.flow(&FlowId::from("interior_detailed")).unwrap();
        assert_eq!(flow.phase(Phase::Before).len(), 7);
        assert_eq!(flow.phase(Phase::Cleaning).len(), 5);
        assert_eq!(flow.phase(Phase::After).len(), 7);
        assert_eq!(flow.filled_count(), 0);
    }

    #[test]
    fn rebuild_preserves_kept_flows_and_discards_deselected() {
        let catalog = FlowCatalog::builtin();
        let interior = FlowId::from("interior");
        let exterior = FlowId::from("exterior");

        let mut store = ImageStore::new();
        store.rebuild(&catalog, &[interior.clone(), exterior.clone()]);
        store.record(&interior, Phase::Before, 0, capture("Foto general interior"));
        store.record(&exterior, Phase::Before, 0, capture("Foto frontal"));

        store.rebuild(&catalog, &[interior.clone()]);
        assert_eq!(store.filled_count(), 1);
        assert!(store.flow(&exterior).is_none());
        assert!(!store.slot(&interior, Phase::Before, 0).unwrap().is_empty());
    }

    #[test]
    fn record_overwrites_at_same_key() {
        let catalog = FlowCatalog::builtin();
        let interior = FlowId::from("interior");
        let mut store = ImageStore::new();
        store.rebuild(&catalog, &[interior.clone()]);

        store.record(&interior, Phase::After, 2, capture("first"));
        store.record(&interior, Phase::After, 2, capture("second"));

        let slot = store.slot(&interior, Phase::After, 2).unwrap();
        assert_eq!(slot.captured().unwrap().label, "second");
        assert_eq!(store.filled_count(), 1);
    }
}
