//! Error types for EquipTrack server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes exposed to API clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NoSuchEquipment = 2,
    NoSuchMovement = 3,
    DuplicateAssetTag = 4,
    DuplicateSerialNumber = 5,
    EquipmentInTransit = 6,
    MovementNotPending = 7,
    MovementNotApproved = 8,
    BadValue = 9,
}

/// Violations raised by the tracker store.
///
/// Every variant is raised before any state is mutated; a failed call leaves
/// the store exactly as it was.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("Asset tag is already registered")]
    DuplicateAssetTag,

    #[error("Serial number is already registered")]
    DuplicateSerialNumber,

    #[error("Equipment not found")]
    EquipmentNotFound,

    #[error("Movement not found")]
    MovementNotFound,

    #[error("Equipment is already in transit")]
    EquipmentAlreadyInTransit,

    #[error("Movement is not pending")]
    MovementNotPending,

    #[error("Movement is not approved")]
    MovementNotApproved,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl StoreError {
    fn code(self) -> ErrorCode {
        match self {
            StoreError::DuplicateAssetTag => ErrorCode::DuplicateAssetTag,
            StoreError::DuplicateSerialNumber => ErrorCode::DuplicateSerialNumber,
            StoreError::EquipmentNotFound => ErrorCode::NoSuchEquipment,
            StoreError::MovementNotFound => ErrorCode::NoSuchMovement,
            StoreError::EquipmentAlreadyInTransit => ErrorCode::EquipmentInTransit,
            StoreError::MovementNotPending => ErrorCode::MovementNotPending,
            StoreError::MovementNotApproved => ErrorCode::MovementNotApproved,
        }
    }

    fn status(self) -> StatusCode {
        match self {
            StoreError::DuplicateAssetTag | StoreError::DuplicateSerialNumber => {
                StatusCode::CONFLICT
            }
            StoreError::EquipmentNotFound | StoreError::MovementNotFound => StatusCode::NOT_FOUND,
            StoreError::EquipmentAlreadyInTransit
            | StoreError::MovementNotPending
            | StoreError::MovementNotApproved => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Store(e) => (e.status(), e.code(), e.to_string()),
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchEquipment, msg.clone())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
