//! Equipment endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipmentRequest, Equipment, EquipmentDetail, EquipmentFilters},
};

/// Equipment listing response
#[derive(Serialize, ToSchema)]
pub struct EquipmentListResponse {
    /// Matching equipment, sorted by name
    pub items: Vec<Equipment>,
    /// Number of matching equipment
    pub total: usize,
}

/// List equipment with filters and free-text search
#[utoipa::path(
    get,
    path = "/equipments",
    tag = "equipment",
    params(
        ("q" = Option<String>, Query, description = "Free-text search over tag, serial, name, category, location and holder"),
        ("status" = Option<String>, Query, description = "Filter by equipment status"),
        ("category" = Option<String>, Query, description = "Filter by category"),
        ("location" = Option<String>, Query, description = "Filter by location"),
        ("holder" = Option<String>, Query, description = "Filter by current holder")
    ),
    responses(
        (status = 200, description = "List of equipment", body = EquipmentListResponse)
    )
)]
pub async fn list_equipments(
    State(state): State<crate::AppState>,
    Query(filters): Query<EquipmentFilters>,
) -> AppResult<Json<EquipmentListResponse>> {
    let items = state.services.equipment.list(&filters);
    let total = items.len();

    Ok(Json(EquipmentListResponse { items, total }))
}

/// Register a new equipment asset
#[utoipa::path(
    post,
    path = "/equipments",
    tag = "equipment",
    request_body = CreateEquipmentRequest,
    responses(
        (status = 201, description = "Equipment registered", body = Equipment),
        (status = 400, description = "Invalid request"),
        (status = 409, description = "Asset tag or serial number already registered")
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateEquipmentRequest>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let equipment = state.services.equipment.create(request.normalize())?;

    Ok((StatusCode::CREATED, Json(equipment)))
}

/// Get equipment details with its movement history
#[utoipa::path(
    get,
    path = "/equipments/{id}",
    tag = "equipment",
    params(
        ("id" = Uuid, Path, description = "Equipment ID")
    ),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentDetail),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<EquipmentDetail>> {
    let detail = state.services.equipment.get_detail(id)?;
    Ok(Json(detail))
}

/// List distinct equipment categories
#[utoipa::path(
    get,
    path = "/equipments/categories",
    tag = "equipment",
    responses(
        (status = 200, description = "Distinct categories, sorted", body = Vec<String>)
    )
)]
pub async fn list_categories(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<String>>> {
    Ok(Json(state.services.equipment.categories()))
}

/// List distinct equipment locations
#[utoipa::path(
    get,
    path = "/equipments/locations",
    tag = "equipment",
    responses(
        (status = 200, description = "Distinct locations, sorted", body = Vec<String>)
    )
)]
pub async fn list_locations(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<String>>> {
    Ok(Json(state.services.equipment.locations()))
}

/// List distinct current holders
#[utoipa::path(
    get,
    path = "/equipments/holders",
    tag = "equipment",
    responses(
        (status = 200, description = "Distinct holders, sorted", body = Vec<String>)
    )
)]
pub async fn list_holders(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<String>>> {
    Ok(Json(state.services.equipment.holders()))
}
