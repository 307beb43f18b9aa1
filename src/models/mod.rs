//! Domain models for EquipTrack

pub mod enums;
pub mod equipment;
pub mod movement;
pub mod summary;
