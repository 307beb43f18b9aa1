//! Equipment model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::enums::{EquipmentStatus, HistoryEventKind};
use super::movement::Movement;

/// A tracked equipment asset
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Equipment {
    pub id: Uuid,
    /// Asset tag, unique across all equipment
    pub asset_tag: String,
    /// Manufacturer serial number, unique across all equipment
    pub serial_number: String,
    pub name: String,
    pub category: String,
    pub status: EquipmentStatus,
    /// Current physical location
    pub location: String,
    /// Person or team currently holding the asset
    pub current_holder: String,
    /// Who last authorized a change on this asset
    pub authorizer: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub purchase_value: Option<Decimal>,
    /// Preventive maintenance cycle, in days
    pub maintenance_cycle_days: Option<u32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Audit trail, newest entry first
    pub history: Vec<HistoryEvent>,
}

/// Audit-log entry attached to an equipment record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryEvent {
    pub id: Uuid,
    pub kind: HistoryEventKind,
    pub title: String,
    pub details: String,
    pub actor: String,
    pub created_at: DateTime<Utc>,
    /// Movement that triggered this entry, if any
    pub related_movement_id: Option<Uuid>,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipmentRequest {
    #[validate(length(min = 2, max = 32))]
    pub asset_tag: String,
    #[validate(length(min = 2, max = 64))]
    pub serial_number: String,
    #[validate(length(min = 3, max = 120))]
    pub name: String,
    #[validate(length(min = 2, max = 60))]
    pub category: String,
    pub status: EquipmentStatus,
    #[validate(length(min = 2, max = 120))]
    pub location: String,
    #[validate(length(min = 2, max = 120))]
    pub current_holder: String,
    #[validate(length(min = 2, max = 120))]
    pub authorizer: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub purchase_value: Option<Decimal>,
    pub maintenance_cycle_days: Option<u32>,
    pub notes: Option<String>,
}

/// Normalized create input handed to the store
#[derive(Debug, Clone)]
pub struct CreateEquipment {
    pub asset_tag: String,
    pub serial_number: String,
    pub name: String,
    pub category: String,
    pub status: EquipmentStatus,
    pub location: String,
    pub current_holder: String,
    pub authorizer: Option<String>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub purchase_value: Option<Decimal>,
    pub maintenance_cycle_days: Option<u32>,
    pub notes: Option<String>,
}

impl CreateEquipmentRequest {
    /// Trim free-text fields, mapping empty optionals to None
    pub fn normalize(self) -> CreateEquipment {
        CreateEquipment {
            asset_tag: self.asset_tag.trim().to_string(),
            serial_number: self.serial_number.trim().to_string(),
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            status: self.status,
            location: self.location.trim().to_string(),
            current_holder: self.current_holder.trim().to_string(),
            authorizer: trim_opt(self.authorizer),
            purchase_date: self.purchase_date,
            purchase_value: self.purchase_value,
            maintenance_cycle_days: self.maintenance_cycle_days,
            notes: trim_opt(self.notes),
        }
    }
}

/// Trim an optional string, collapsing blank values to None
pub(crate) fn trim_opt(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Exact-match filters plus free-text search over equipment listings
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct EquipmentFilters {
    /// Case-insensitive substring search over tag, serial, name, category,
    /// location and holder
    #[serde(rename = "q")]
    pub search: Option<String>,
    pub status: Option<EquipmentStatus>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub holder: Option<String>,
}

/// Equipment with its movement history, newest request first
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EquipmentDetail {
    pub equipment: Equipment,
    pub movements: Vec<Movement>,
}
