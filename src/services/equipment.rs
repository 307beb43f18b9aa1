//! Equipment service

use uuid::Uuid;

use crate::{
    error::AppResult,
    models::equipment::{CreateEquipment, Equipment, EquipmentDetail, EquipmentFilters},
    store::TrackerStore,
};

#[derive(Clone)]
pub struct EquipmentService {
    store: TrackerStore,
}

impl EquipmentService {
    pub fn new(store: TrackerStore) -> Self {
        Self { store }
    }

    pub fn list(&self, filters: &EquipmentFilters) -> Vec<Equipment> {
        self.store.list_equipments(filters)
    }

    pub fn create(&self, input: CreateEquipment) -> AppResult<Equipment> {
        Ok(self.store.create_equipment(input)?)
    }

    pub fn get_detail(&self, id: Uuid) -> AppResult<EquipmentDetail> {
        Ok(self.store.equipment_detail(id)?)
    }

    /// Distinct categories across all equipment (for form dropdowns)
    pub fn categories(&self) -> Vec<String> {
        self.store.categories()
    }

    /// Distinct locations across all equipment
    pub fn locations(&self) -> Vec<String> {
        self.store.locations()
    }

    /// Distinct current holders across all equipment
    pub fn holders(&self) -> Vec<String> {
        self.store.holders()
    }
}
