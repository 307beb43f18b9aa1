//! EquipTrack Equipment Movement Tracking System
//!
//! A Rust implementation of the EquipTrack server, providing a REST JSON API
//! for registering equipment assets and walking their movements through an
//! approval workflow, backed by an in-memory state-machine store.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Equipment
        .route("/equipments", get(api::equipment::list_equipments))
        .route("/equipments", post(api::equipment::create_equipment))
        .route("/equipments/categories", get(api::equipment::list_categories))
        .route("/equipments/locations", get(api::equipment::list_locations))
        .route("/equipments/holders", get(api::equipment::list_holders))
        .route("/equipments/:id", get(api::equipment::get_equipment))
        // Movements
        .route("/movements", get(api::movements::list_movements))
        .route("/movements", post(api::movements::request_movement))
        .route("/movements/:id/approve", post(api::movements::approve_movement))
        .route("/movements/:id/conclude", post(api::movements::conclude_movement))
        // Statistics
        .route("/stats", get(api::stats::get_summary))
        .with_state(state);

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
