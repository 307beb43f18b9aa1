//! Fixed seed dataset loaded at startup and on reset.
//!
//! Guarantees non-empty listings on cold start: four equipment records, one
//! of them mid-transfer with an already-approved movement attached.

use chrono::Duration;
use rust_decimal::Decimal;

use crate::models::enums::{EquipmentStatus, HistoryEventKind, MovementStatus, TimelineStatus};
use crate::models::equipment::{Equipment, HistoryEvent};
use crate::models::movement::{Movement, TimelineEvent};

use super::{Clock, IdProvider, State};

pub(super) fn populate(state: &mut State, clock: &dyn Clock, ids: &dyn IdProvider) {
    if !state.equipments.is_empty() {
        return;
    }

    let now = clock.now();

    let notebook = Equipment {
        id: ids.next_id(),
        asset_tag: "EQ-1001".to_string(),
        serial_number: "SN-AX4920".to_string(),
        name: "Dell Latitude 5420 Engineering Notebook".to_string(),
        category: "Notebook".to_string(),
        status: EquipmentStatus::InUse,
        location: "Curitiba Workshop".to_string(),
        current_holder: "Ana Lima".to_string(),
        authorizer: Some("Carlos Souza".to_string()),
        purchase_date: Some(now - Duration::days(420)),
        purchase_value: Some(Decimal::from(4500)),
        maintenance_cycle_days: Some(180),
        notes: Some("Primary machine of the maintenance team".to_string()),
        created_at: now - Duration::days(420),
        updated_at: now - Duration::days(5),
        history: Vec::new(),
    };

    let router = Equipment {
        id: ids.next_id(),
        asset_tag: "EQ-2033".to_string(),
        serial_number: "SN-BR7721".to_string(),
        name: "Cisco Catalyst 9200 Router".to_string(),
        category: "Network".to_string(),
        status: EquipmentStatus::Available,
        location: "Curitiba Warehouse".to_string(),
        current_holder: "Roberto Neri".to_string(),
        authorizer: Some("Lucia Dias".to_string()),
        purchase_date: Some(now - Duration::days(250)),
        purchase_value: Some(Decimal::from(18900)),
        maintenance_cycle_days: Some(365),
        notes: Some("Ready for installation at a new site".to_string()),
        created_at: now - Duration::days(250),
        updated_at: now - Duration::days(3),
        history: Vec::new(),
    };

    let printer = Equipment {
        id: ids.next_id(),
        asset_tag: "EQ-4508".to_string(),
        serial_number: "SN-MX8820".to_string(),
        name: "Zebra ZT411 Label Printer".to_string(),
        category: "Printer".to_string(),
        status: EquipmentStatus::InTransit,
        location: "Curitiba Warehouse".to_string(),
        current_holder: "Logistics Team".to_string(),
        authorizer: Some("Patricia Melo".to_string()),
        purchase_date: Some(now - Duration::days(120)),
        purchase_value: Some(Decimal::from(7800)),
        maintenance_cycle_days: Some(120),
        notes: Some("Urgent transfer to the Joinville branch".to_string()),
        created_at: now - Duration::days(120),
        updated_at: now - Duration::days(1),
        history: Vec::new(),
    };

    let generator = Equipment {
        id: ids.next_id(),
        asset_tag: "EQ-7701".to_string(),
        serial_number: "SN-QL1122".to_string(),
        name: "25kVA Power Generator".to_string(),
        category: "Power".to_string(),
        status: EquipmentStatus::InMaintenance,
        location: "Curitiba Workshop".to_string(),
        current_holder: "Engineering Team".to_string(),
        authorizer: Some("Rafael Costa".to_string()),
        purchase_date: Some(now - Duration::days(780)),
        purchase_value: Some(Decimal::from(54000)),
        maintenance_cycle_days: Some(90),
        notes: Some("Voltage regulator replacement".to_string()),
        created_at: now - Duration::days(780),
        updated_at: now - Duration::days(7),
        history: Vec::new(),
    };

    let printer_id = printer.id;

    for mut equipment in [notebook, router, printer, generator] {
        equipment.history.push(HistoryEvent {
            id: ids.next_id(),
            kind: HistoryEventKind::Registration,
            title: "Initial registration".to_string(),
            details: format!("Equipment created with status {}", equipment.status),
            actor: equipment
                .authorizer
                .clone()
                .unwrap_or_else(|| equipment.current_holder.clone()),
            created_at: equipment.created_at,
            related_movement_id: None,
        });

        state.equipments.insert(equipment.id, equipment);
    }

    // The printer is mid-transfer: one approved movement with its timeline,
    // newest step first.
    let movement_id = ids.next_id();
    let requested_at = now - Duration::days(2);
    let updated_at = now - Duration::days(1);
    let reason = "Rollout of the new packaging line".to_string();

    let movement = Movement {
        id: movement_id,
        equipment_id: printer_id,
        status: MovementStatus::Approved,
        origin_location: "Curitiba Warehouse".to_string(),
        target_location: "Joinville Operations".to_string(),
        requested_by: "Joao Naves".to_string(),
        approved_by: Some("Patricia Melo".to_string()),
        authorized_by: Some("Patricia Melo".to_string()),
        requested_at,
        updated_at,
        expected_return_at: Some(now + Duration::days(120)),
        reason: reason.clone(),
        notes: None,
        timeline: vec![
            TimelineEvent {
                id: ids.next_id(),
                movement_id,
                status: TimelineStatus::Approved,
                title: "Movement approved".to_string(),
                comment: Some(reason.clone()),
                actor: "Patricia Melo".to_string(),
                created_at: updated_at,
            },
            TimelineEvent {
                id: ids.next_id(),
                movement_id,
                status: TimelineStatus::Registered,
                title: "Request created".to_string(),
                comment: Some(reason),
                actor: "Joao Naves".to_string(),
                created_at: requested_at,
            },
        ],
    };

    state.movements.insert(movement_id, movement);

    if let Some(printer) = state.equipments.get_mut(&printer_id) {
        printer.history.insert(
            0,
            HistoryEvent {
                id: ids.next_id(),
                kind: HistoryEventKind::Movement,
                title: "Imported movement".to_string(),
                details: "Imported transfer history to Joinville Operations".to_string(),
                actor: "Patricia Melo".to_string(),
                created_at: updated_at,
                related_movement_id: Some(movement_id),
            },
        );
    }
}
