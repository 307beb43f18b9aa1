//! Dashboard summary model

use serde::Serialize;
use utoipa::ToSchema;

use super::enums::EquipmentStatus;
use super::equipment::HistoryEvent;
use super::movement::Movement;

/// Count of equipment per lifecycle status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatusBreakdown {
    pub available: usize,
    pub in_use: usize,
    pub in_maintenance: usize,
    pub in_transit: usize,
    pub decommissioned: usize,
}

impl StatusBreakdown {
    pub fn bump(&mut self, status: EquipmentStatus) {
        match status {
            EquipmentStatus::Available => self.available += 1,
            EquipmentStatus::InUse => self.in_use += 1,
            EquipmentStatus::InMaintenance => self.in_maintenance += 1,
            EquipmentStatus::InTransit => self.in_transit += 1,
            EquipmentStatus::Decommissioned => self.decommissioned += 1,
        }
    }

    pub fn sum(&self) -> usize {
        self.available + self.in_use + self.in_maintenance + self.in_transit + self.decommissioned
    }
}

/// Aggregated view over the whole store
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentSummary {
    /// Total number of equipment records
    pub total: usize,
    pub by_status: StatusBreakdown,
    /// Movements awaiting approval, oldest request first
    pub pending_approvals: Vec<Movement>,
    /// Most recent history events across all equipment, newest first
    pub recent_events: Vec<HistoryEvent>,
}
