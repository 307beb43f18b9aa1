//! Statistics endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::summary::EquipmentSummary};

/// Get the dashboard summary
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Aggregated equipment summary", body = EquipmentSummary)
    )
)]
pub async fn get_summary(
    State(state): State<crate::AppState>,
) -> AppResult<Json<EquipmentSummary>> {
    Ok(Json(state.services.stats.summary()))
}
