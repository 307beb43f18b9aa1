//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{equipment, health, movements, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "EquipTrack API",
        version = "0.1.0",
        description = "Equipment Movement Tracking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Equipment
        equipment::list_equipments,
        equipment::create_equipment,
        equipment::get_equipment,
        equipment::list_categories,
        equipment::list_locations,
        equipment::list_holders,
        // Movements
        movements::list_movements,
        movements::request_movement,
        movements::approve_movement,
        movements::conclude_movement,
        // Stats
        stats::get_summary,
    ),
    components(
        schemas(
            health::HealthResponse,
            equipment::EquipmentListResponse,
            crate::models::enums::EquipmentStatus,
            crate::models::enums::MovementStatus,
            crate::models::enums::HistoryEventKind,
            crate::models::enums::TimelineStatus,
            crate::models::equipment::Equipment,
            crate::models::equipment::HistoryEvent,
            crate::models::equipment::CreateEquipmentRequest,
            crate::models::equipment::EquipmentDetail,
            crate::models::movement::Movement,
            crate::models::movement::TimelineEvent,
            crate::models::movement::RequestMovementRequest,
            crate::models::movement::ApproveMovementRequest,
            crate::models::movement::ConcludeMovementRequest,
            crate::models::summary::EquipmentSummary,
            crate::models::summary::StatusBreakdown,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness and readiness checks"),
        (name = "equipment", description = "Equipment asset management"),
        (name = "movements", description = "Movement approval workflow"),
        (name = "stats", description = "Aggregated statistics")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI router serving the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
