//! In-memory equipment/movement store.
//!
//! The store is the canonical owner of all equipment and movement state. It
//! enforces the movement approval workflow (pending -> approved -> concluded)
//! and the equipment status transitions tied to it, and records every change
//! on the entity's audit trail. All operations are synchronous and acquire
//! the internal lock exactly once, so each call is check-then-mutate atomic
//! even under a request-concurrent server.

pub mod seed;

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::models::enums::{EquipmentStatus, HistoryEventKind, MovementStatus, TimelineStatus};
use crate::models::equipment::{CreateEquipment, Equipment, EquipmentDetail, EquipmentFilters, HistoryEvent};
use crate::models::movement::{ApproveMovement, ConcludeMovement, Movement, RequestMovement, TimelineEvent};
use crate::models::summary::{EquipmentSummary, StatusBreakdown};

/// Default cap for [`TrackerStore::recent_movements`]
pub const DEFAULT_MOVEMENT_LIMIT: usize = 20;

/// Number of history events returned by [`TrackerStore::summary`]
const RECENT_EVENTS_LIMIT: usize = 12;

/// Wall-clock source, injected so transitions are deterministic under test
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Identity source for equipment, movements and audit events
#[cfg_attr(test, mockall::automock)]
pub trait IdProvider: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Production identity source backed by random v4 UUIDs
pub struct RandomIds;

impl IdProvider for RandomIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

#[derive(Default)]
struct State {
    equipments: IndexMap<Uuid, Equipment>,
    movements: IndexMap<Uuid, Movement>,
}

struct Inner {
    state: RwLock<State>,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdProvider>,
}

/// Handle to the shared in-memory store.
///
/// Cloning is cheap; all clones share the same state.
#[derive(Clone)]
pub struct TrackerStore {
    inner: Arc<Inner>,
}

impl TrackerStore {
    /// Create a store with system clock and random ids, pre-populated with
    /// the fixed seed set
    pub fn new() -> Self {
        Self::with_deps(Box::new(SystemClock), Box::new(RandomIds))
    }

    /// Create a seeded store with injected clock and identity providers
    pub fn with_deps(clock: Box<dyn Clock>, ids: Box<dyn IdProvider>) -> Self {
        let mut state = State::default();
        seed::populate(&mut state, clock.as_ref(), ids.as_ref());

        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(state),
                clock,
                ids,
            }),
        }
    }

    /// Clear both collections and re-seed
    pub fn reset(&self) {
        let mut state = self.write();
        state.equipments.clear();
        state.movements.clear();
        seed::populate(&mut state, self.inner.clock.as_ref(), self.inner.ids.as_ref());
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, State> {
        self.inner.state.read().expect("tracker store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, State> {
        self.inner.state.write().expect("tracker store lock poisoned")
    }

    fn now(&self) -> DateTime<Utc> {
        self.inner.clock.now()
    }

    fn next_id(&self) -> Uuid {
        self.inner.ids.next_id()
    }

    /// Register a new equipment asset.
    ///
    /// Fails if the asset tag or serial number is already registered; on
    /// success the record is stored with a single registration history event.
    pub fn create_equipment(&self, input: CreateEquipment) -> StoreResult<Equipment> {
        let mut state = self.write();

        if state.equipments.values().any(|e| e.asset_tag == input.asset_tag) {
            return Err(StoreError::DuplicateAssetTag);
        }

        if state
            .equipments
            .values()
            .any(|e| e.serial_number == input.serial_number)
        {
            return Err(StoreError::DuplicateSerialNumber);
        }

        let now = self.now();
        let id = self.next_id();
        let actor = input
            .authorizer
            .clone()
            .unwrap_or_else(|| input.current_holder.clone());

        let equipment = Equipment {
            id,
            asset_tag: input.asset_tag,
            serial_number: input.serial_number,
            name: input.name,
            category: input.category,
            status: input.status,
            location: input.location,
            current_holder: input.current_holder,
            authorizer: input.authorizer,
            purchase_date: input.purchase_date,
            purchase_value: input.purchase_value,
            maintenance_cycle_days: input.maintenance_cycle_days,
            notes: input.notes,
            created_at: now,
            updated_at: now,
            history: vec![HistoryEvent {
                id: self.next_id(),
                kind: HistoryEventKind::Registration,
                title: "Initial registration".to_string(),
                details: format!("Equipment created with status {}", input.status),
                actor,
                created_at: now,
                related_movement_id: None,
            }],
        };

        state.equipments.insert(id, equipment.clone());

        tracing::info!(equipment_id = %id, asset_tag = %equipment.asset_tag, "equipment registered");

        Ok(equipment)
    }

    /// Open a movement request for an equipment asset.
    ///
    /// The sole transition into `in_transit`: the movement is created in
    /// `pending` status and the equipment is flipped to `in_transit` in the
    /// same atomic step.
    pub fn request_movement(&self, input: RequestMovement) -> StoreResult<Movement> {
        let mut state = self.write();

        let equipment = state
            .equipments
            .get(&input.equipment_id)
            .ok_or(StoreError::EquipmentNotFound)?;

        if equipment.status == EquipmentStatus::InTransit {
            return Err(StoreError::EquipmentAlreadyInTransit);
        }

        let now = self.now();
        let movement_id = self.next_id();

        let movement = Movement {
            id: movement_id,
            equipment_id: input.equipment_id,
            status: MovementStatus::Pending,
            origin_location: input.origin_location,
            target_location: input.target_location.clone(),
            requested_by: input.requested_by.clone(),
            approved_by: None,
            authorized_by: None,
            requested_at: now,
            updated_at: now,
            expected_return_at: input.expected_return_at,
            reason: input.reason.clone(),
            notes: input.notes,
            timeline: vec![TimelineEvent {
                id: self.next_id(),
                movement_id,
                status: TimelineStatus::Registered,
                title: "Request registered".to_string(),
                comment: Some(input.reason),
                actor: input.requested_by.clone(),
                created_at: now,
            }],
        };

        let history_event = HistoryEvent {
            id: self.next_id(),
            kind: HistoryEventKind::Movement,
            title: "Movement requested".to_string(),
            details: format!("Requested by {} to {}", input.requested_by, input.target_location),
            actor: input.requested_by,
            created_at: now,
            related_movement_id: Some(movement_id),
        };

        state.movements.insert(movement_id, movement.clone());

        if let Some(equipment) = state.equipments.get_mut(&input.equipment_id) {
            equipment.status = EquipmentStatus::InTransit;
            equipment.updated_at = now;
            equipment.history.insert(0, history_event);
        }

        tracing::info!(movement_id = %movement_id, equipment_id = %input.equipment_id, "movement requested");

        Ok(movement)
    }

    /// Approve a pending movement.
    ///
    /// Records approver and authorizer on the movement and on the equipment.
    /// The equipment status stays `in_transit`; only conclusion moves it on.
    pub fn approve_movement(&self, input: ApproveMovement) -> StoreResult<Movement> {
        let mut state = self.write();

        let now = self.now();
        let timeline_id = self.next_id();
        let history_id = self.next_id();

        let movement = state
            .movements
            .get_mut(&input.movement_id)
            .ok_or(StoreError::MovementNotFound)?;

        if movement.status != MovementStatus::Pending {
            return Err(StoreError::MovementNotPending);
        }

        movement.status = MovementStatus::Approved;
        movement.approved_by = Some(input.approved_by.clone());
        movement.authorized_by = Some(input.authorized_by.clone());
        movement.updated_at = now;
        movement.timeline.insert(
            0,
            TimelineEvent {
                id: timeline_id,
                movement_id: movement.id,
                status: TimelineStatus::Approved,
                title: "Movement approved".to_string(),
                comment: input.comment,
                actor: input.approved_by.clone(),
                created_at: now,
            },
        );

        let approved = movement.clone();
        let equipment_id = approved.equipment_id;
        let target_location = approved.target_location.clone();

        if let Some(equipment) = state.equipments.get_mut(&equipment_id) {
            equipment.authorizer = Some(input.authorized_by.clone());
            equipment.updated_at = now;
            equipment.history.insert(
                0,
                HistoryEvent {
                    id: history_id,
                    kind: HistoryEventKind::Movement,
                    title: "Movement approved".to_string(),
                    details: format!("Approved by {} to {}", input.approved_by, target_location),
                    actor: input.authorized_by,
                    created_at: now,
                    related_movement_id: Some(approved.id),
                },
            );
        }

        tracing::info!(movement_id = %approved.id, "movement approved");

        Ok(approved)
    }

    /// Conclude an approved movement.
    ///
    /// The sole transition out of `in_transit`: the equipment becomes
    /// `in_use` at the movement's target location, held by the receiver.
    pub fn conclude_movement(&self, input: ConcludeMovement) -> StoreResult<Movement> {
        let mut state = self.write();

        let now = self.now();
        let timeline_id = self.next_id();
        let history_id = self.next_id();

        let movement = state
            .movements
            .get_mut(&input.movement_id)
            .ok_or(StoreError::MovementNotFound)?;

        if movement.status != MovementStatus::Approved {
            return Err(StoreError::MovementNotApproved);
        }

        movement.status = MovementStatus::Concluded;
        movement.updated_at = now;
        movement.timeline.insert(
            0,
            TimelineEvent {
                id: timeline_id,
                movement_id: movement.id,
                status: TimelineStatus::Concluded,
                title: "Delivery concluded".to_string(),
                comment: input.comment,
                actor: input.completed_by.clone(),
                created_at: now,
            },
        );

        let concluded = movement.clone();
        let equipment_id = concluded.equipment_id;
        let target_location = concluded.target_location.clone();

        if let Some(equipment) = state.equipments.get_mut(&equipment_id) {
            equipment.status = EquipmentStatus::InUse;
            equipment.location = target_location.clone();
            equipment.current_holder = input.received_by.clone();
            equipment.updated_at = now;
            equipment.history.insert(
                0,
                HistoryEvent {
                    id: history_id,
                    kind: HistoryEventKind::Status,
                    title: "Movement concluded".to_string(),
                    details: format!("Delivered to {} at {}", input.received_by, target_location),
                    actor: input.completed_by,
                    created_at: now,
                    related_movement_id: Some(concluded.id),
                },
            );
        }

        tracing::info!(movement_id = %concluded.id, "movement concluded");

        Ok(concluded)
    }

    /// List equipment matching the given filters, sorted by name
    pub fn list_equipments(&self, filters: &EquipmentFilters) -> Vec<Equipment> {
        let state = self.read();

        let mut items: Vec<Equipment> = state
            .equipments
            .values()
            .filter(|item| {
                if let Some(status) = filters.status {
                    if item.status != status {
                        return false;
                    }
                }

                if let Some(ref category) = filters.category {
                    if &item.category != category {
                        return false;
                    }
                }

                if let Some(ref location) = filters.location {
                    if &item.location != location {
                        return false;
                    }
                }

                if let Some(ref holder) = filters.holder {
                    if &item.current_holder != holder {
                        return false;
                    }
                }

                if let Some(ref search) = filters.search {
                    let needle = search.trim().to_lowercase();
                    let searchable = [
                        item.asset_tag.as_str(),
                        item.serial_number.as_str(),
                        item.name.as_str(),
                        item.category.as_str(),
                        item.location.as_str(),
                        item.current_holder.as_str(),
                    ]
                    .join(" ")
                    .to_lowercase();
                    return searchable.contains(&needle);
                }

                true
            })
            .cloned()
            .collect();

        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    /// Fetch an equipment with its movements, newest request first
    pub fn equipment_detail(&self, id: Uuid) -> StoreResult<EquipmentDetail> {
        let state = self.read();

        let equipment = state
            .equipments
            .get(&id)
            .cloned()
            .ok_or(StoreError::EquipmentNotFound)?;

        let mut movements: Vec<Movement> = state
            .movements
            .values()
            .filter(|movement| movement.equipment_id == id)
            .cloned()
            .collect();

        movements.sort_by(|a, b| b.requested_at.cmp(&a.requested_at));

        Ok(EquipmentDetail {
            equipment,
            movements,
        })
    }

    /// Aggregate the dashboard summary across the whole store
    pub fn summary(&self) -> EquipmentSummary {
        let state = self.read();

        let mut by_status = StatusBreakdown::default();
        for equipment in state.equipments.values() {
            by_status.bump(equipment.status);
        }

        let mut pending_approvals: Vec<Movement> = state
            .movements
            .values()
            .filter(|movement| movement.status == MovementStatus::Pending)
            .cloned()
            .collect();
        pending_approvals.sort_by(|a, b| a.requested_at.cmp(&b.requested_at));

        let mut recent_events: Vec<HistoryEvent> = state
            .equipments
            .values()
            .flat_map(|equipment| equipment.history.iter().cloned())
            .collect();
        recent_events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent_events.truncate(RECENT_EVENTS_LIMIT);

        EquipmentSummary {
            total: state.equipments.len(),
            by_status,
            pending_approvals,
            recent_events,
        }
    }

    /// Distinct equipment categories, sorted
    pub fn categories(&self) -> Vec<String> {
        self.distinct(|e| e.category.clone())
    }

    /// Distinct equipment locations, sorted
    pub fn locations(&self) -> Vec<String> {
        self.distinct(|e| e.location.clone())
    }

    /// Distinct current holders, sorted
    pub fn holders(&self) -> Vec<String> {
        self.distinct(|e| e.current_holder.clone())
    }

    fn distinct(&self, field: impl Fn(&Equipment) -> String) -> Vec<String> {
        let state = self.read();
        let values: BTreeSet<String> = state.equipments.values().map(field).collect();
        values.into_iter().collect()
    }

    /// Most recent movements by request time, capped at `limit`
    pub fn recent_movements(&self, limit: usize) -> Vec<Movement> {
        let state = self.read();

        let mut movements: Vec<Movement> = state.movements.values().cloned().collect();
        movements.sort_by(|a, b| b.requested_at.cmp(&a.requested_at));
        movements.truncate(limit);
        movements
    }
}

impl Default for TrackerStore {
    fn default() -> Self {
        Self::new()
    }
}
