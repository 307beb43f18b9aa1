//! Movement model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::{MovementStatus, TimelineStatus};
use super::equipment::trim_opt;

/// A request to relocate an equipment asset through an approval workflow
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Movement {
    pub id: Uuid,
    pub equipment_id: Uuid,
    pub status: MovementStatus,
    pub origin_location: String,
    pub target_location: String,
    pub requested_by: String,
    pub approved_by: Option<String>,
    pub authorized_by: Option<String>,
    pub requested_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expected_return_at: Option<DateTime<Utc>>,
    pub reason: String,
    pub notes: Option<String>,
    /// Workflow steps, newest entry first
    pub timeline: Vec<TimelineEvent>,
}

/// Audit-log entry attached to a movement's workflow
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimelineEvent {
    pub id: Uuid,
    pub movement_id: Uuid,
    pub status: TimelineStatus,
    pub title: String,
    pub comment: Option<String>,
    pub actor: String,
    pub created_at: DateTime<Utc>,
}

/// Request movement request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RequestMovementRequest {
    pub equipment_id: Uuid,
    #[validate(length(min = 2, max = 120))]
    pub origin_location: String,
    #[validate(length(min = 2, max = 120))]
    pub target_location: String,
    #[validate(length(min = 2, max = 120))]
    pub requested_by: String,
    pub expected_return_at: Option<DateTime<Utc>>,
    #[validate(length(min = 3, max = 240))]
    pub reason: String,
    pub notes: Option<String>,
}

/// Normalized movement request handed to the store
#[derive(Debug, Clone)]
pub struct RequestMovement {
    pub equipment_id: Uuid,
    pub origin_location: String,
    pub target_location: String,
    pub requested_by: String,
    pub expected_return_at: Option<DateTime<Utc>>,
    pub reason: String,
    pub notes: Option<String>,
}

impl RequestMovementRequest {
    /// Trim free-text fields, mapping empty optionals to None
    pub fn normalize(self) -> RequestMovement {
        RequestMovement {
            equipment_id: self.equipment_id,
            origin_location: self.origin_location.trim().to_string(),
            target_location: self.target_location.trim().to_string(),
            requested_by: self.requested_by.trim().to_string(),
            expected_return_at: self.expected_return_at,
            reason: self.reason.trim().to_string(),
            notes: trim_opt(self.notes),
        }
    }
}

/// Approve movement request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ApproveMovementRequest {
    #[validate(length(min = 2, max = 120))]
    pub approved_by: String,
    #[validate(length(min = 2, max = 120))]
    pub authorized_by: String,
    pub comment: Option<String>,
}

/// Normalized approval handed to the store
#[derive(Debug, Clone)]
pub struct ApproveMovement {
    pub movement_id: Uuid,
    pub approved_by: String,
    pub authorized_by: String,
    pub comment: Option<String>,
}

impl ApproveMovementRequest {
    pub fn normalize(self, movement_id: Uuid) -> ApproveMovement {
        ApproveMovement {
            movement_id,
            approved_by: self.approved_by.trim().to_string(),
            authorized_by: self.authorized_by.trim().to_string(),
            comment: trim_opt(self.comment),
        }
    }
}

/// Conclude movement request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ConcludeMovementRequest {
    #[validate(length(min = 2, max = 120))]
    pub completed_by: String,
    #[validate(length(min = 2, max = 120))]
    pub received_by: String,
    pub comment: Option<String>,
}

/// Normalized conclusion handed to the store
#[derive(Debug, Clone)]
pub struct ConcludeMovement {
    pub movement_id: Uuid,
    pub completed_by: String,
    pub received_by: String,
    pub comment: Option<String>,
}

impl ConcludeMovementRequest {
    pub fn normalize(self, movement_id: Uuid) -> ConcludeMovement {
        ConcludeMovement {
            movement_id,
            completed_by: self.completed_by.trim().to_string(),
            received_by: self.received_by.trim().to_string(),
            comment: trim_opt(self.comment),
        }
    }
}
