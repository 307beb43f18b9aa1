//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a tracked equipment asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Available,
    InUse,
    InMaintenance,
    InTransit,
    Decommissioned,
}

impl EquipmentStatus {
    pub const ALL: [EquipmentStatus; 5] = [
        EquipmentStatus::Available,
        EquipmentStatus::InUse,
        EquipmentStatus::InMaintenance,
        EquipmentStatus::InTransit,
        EquipmentStatus::Decommissioned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::Available => "available",
            EquipmentStatus::InUse => "in_use",
            EquipmentStatus::InMaintenance => "in_maintenance",
            EquipmentStatus::InTransit => "in_transit",
            EquipmentStatus::Decommissioned => "decommissioned",
        }
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MovementStatus
// ---------------------------------------------------------------------------

/// Approval-workflow status of a movement request.
///
/// `InTransit` and `Rejected` are part of the declared lifecycle but no
/// operation currently produces them; the workflow implemented here is
/// pending -> approved -> concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum MovementStatus {
    Pending,
    Approved,
    InTransit,
    Concluded,
    Rejected,
}

impl MovementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementStatus::Pending => "pending",
            MovementStatus::Approved => "approved",
            MovementStatus::InTransit => "in_transit",
            MovementStatus::Concluded => "concluded",
            MovementStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for MovementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// HistoryEventKind
// ---------------------------------------------------------------------------

/// Classification of an equipment audit-log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum HistoryEventKind {
    Registration,
    Movement,
    Status,
    Informative,
}

// ---------------------------------------------------------------------------
// TimelineStatus
// ---------------------------------------------------------------------------

/// Step marker on a movement timeline entry.
///
/// `Registered` marks the initial request entry; the remaining variants
/// mirror the movement status reached by that step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TimelineStatus {
    Registered,
    Pending,
    Approved,
    InTransit,
    Concluded,
    Rejected,
}

impl From<MovementStatus> for TimelineStatus {
    fn from(status: MovementStatus) -> Self {
        match status {
            MovementStatus::Pending => TimelineStatus::Pending,
            MovementStatus::Approved => TimelineStatus::Approved,
            MovementStatus::InTransit => TimelineStatus::InTransit,
            MovementStatus::Concluded => TimelineStatus::Concluded,
            MovementStatus::Rejected => TimelineStatus::Rejected,
        }
    }
}
