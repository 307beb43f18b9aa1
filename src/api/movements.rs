//! Movement workflow endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::movement::{
        ApproveMovementRequest, ConcludeMovementRequest, Movement, RequestMovementRequest,
    },
};

/// Query parameters for the movement listing
#[derive(Deserialize, ToSchema)]
pub struct MovementQuery {
    /// Maximum number of movements to return (default: 20)
    pub limit: Option<usize>,
}

/// List recent movements
#[utoipa::path(
    get,
    path = "/movements",
    tag = "movements",
    params(
        ("limit" = Option<usize>, Query, description = "Maximum number of movements (default: 20)")
    ),
    responses(
        (status = 200, description = "Recent movements, newest request first", body = Vec<Movement>)
    )
)]
pub async fn list_movements(
    State(state): State<crate::AppState>,
    Query(query): Query<MovementQuery>,
) -> AppResult<Json<Vec<Movement>>> {
    Ok(Json(state.services.movements.list_recent(query.limit)))
}

/// Request a movement for an equipment asset
#[utoipa::path(
    post,
    path = "/movements",
    tag = "movements",
    request_body = RequestMovementRequest,
    responses(
        (status = 201, description = "Movement requested", body = Movement),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Equipment not found"),
        (status = 422, description = "Equipment is already in transit")
    )
)]
pub async fn request_movement(
    State(state): State<crate::AppState>,
    Json(request): Json<RequestMovementRequest>,
) -> AppResult<(StatusCode, Json<Movement>)> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let movement = state.services.movements.request(request.normalize())?;

    Ok((StatusCode::CREATED, Json(movement)))
}

/// Approve a pending movement
#[utoipa::path(
    post,
    path = "/movements/{id}/approve",
    tag = "movements",
    params(
        ("id" = Uuid, Path, description = "Movement ID")
    ),
    request_body = ApproveMovementRequest,
    responses(
        (status = 200, description = "Movement approved", body = Movement),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Movement not found"),
        (status = 422, description = "Movement is not pending")
    )
)]
pub async fn approve_movement(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ApproveMovementRequest>,
) -> AppResult<Json<Movement>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let movement = state.services.movements.approve(request.normalize(id))?;

    Ok(Json(movement))
}

/// Conclude an approved movement
#[utoipa::path(
    post,
    path = "/movements/{id}/conclude",
    tag = "movements",
    params(
        ("id" = Uuid, Path, description = "Movement ID")
    ),
    request_body = ConcludeMovementRequest,
    responses(
        (status = 200, description = "Movement concluded", body = Movement),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Movement not found"),
        (status = 422, description = "Movement is not approved")
    )
)]
pub async fn conclude_movement(
    State(state): State<crate::AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ConcludeMovementRequest>,
) -> AppResult<Json<Movement>> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let movement = state.services.movements.conclude(request.normalize(id))?;

    Ok(Json(movement))
}
