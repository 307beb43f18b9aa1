//! Business logic services

pub mod equipment;
pub mod movements;
pub mod stats;

use crate::store::TrackerStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub movements: movements::MovementsService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services over the shared store
    pub fn new(store: TrackerStore) -> Self {
        Self {
            equipment: equipment::EquipmentService::new(store.clone()),
            movements: movements::MovementsService::new(store.clone()),
            stats: stats::StatsService::new(store),
        }
    }
}
