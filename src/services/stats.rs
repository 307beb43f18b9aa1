//! Statistics service

use crate::{models::summary::EquipmentSummary, store::TrackerStore};

#[derive(Clone)]
pub struct StatsService {
    store: TrackerStore,
}

impl StatsService {
    pub fn new(store: TrackerStore) -> Self {
        Self { store }
    }

    /// Aggregate totals, pending approvals and recent audit events
    pub fn summary(&self) -> EquipmentSummary {
        self.store.summary()
    }
}
