//! Movement workflow service

use crate::{
    error::AppResult,
    models::movement::{ApproveMovement, ConcludeMovement, Movement, RequestMovement},
    store::{TrackerStore, DEFAULT_MOVEMENT_LIMIT},
};

#[derive(Clone)]
pub struct MovementsService {
    store: TrackerStore,
}

impl MovementsService {
    pub fn new(store: TrackerStore) -> Self {
        Self { store }
    }

    /// Open a movement request for an equipment asset
    pub fn request(&self, input: RequestMovement) -> AppResult<Movement> {
        Ok(self.store.request_movement(input)?)
    }

    /// Approve a pending movement
    pub fn approve(&self, input: ApproveMovement) -> AppResult<Movement> {
        Ok(self.store.approve_movement(input)?)
    }

    /// Conclude an approved movement, delivering the equipment
    pub fn conclude(&self, input: ConcludeMovement) -> AppResult<Movement> {
        Ok(self.store.conclude_movement(input)?)
    }

    /// Most recent movements, capped at `limit` (default 20)
    pub fn list_recent(&self, limit: Option<usize>) -> Vec<Movement> {
        self.store
            .recent_movements(limit.unwrap_or(DEFAULT_MOVEMENT_LIMIT))
    }
}
