//! Error types for the Elidune catalog engine

use serde::Serialize;
use thiserror::Error;

/// Kind of record an id refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Entity {
    Item,
    User,
    Loan,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Entity::Item => "Item",
            Entity::User => "User",
            Entity::Loan => "Loan",
        };
        write!(f, "{}", label)
    }
}

/// Stable error codes reported to front ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchUser = 4,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    MaxBorrowsReached = 11,
    ItemBorrowed = 13,
    BadValue = 18,
    NoSuchData = 20,
    UserHasBorrowedItems = 21,
    NotBorrowedByUser = 22,
    NoActiveLoan = 23,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: Entity, id: i32 },

    #[error("Conflict: {message}")]
    Conflict { entity: Entity, message: String },

    #[error("Item {item_id} is not available (status: {status})")]
    Unavailable { item_id: i32, status: String },

    #[error("User {user_id} has reached the maximum borrowing limit ({limit})")]
    LimitReached { user_id: i32, limit: u32 },

    #[error("User {user_id} has not borrowed item {item_id}")]
    NotBorrowedByUser { user_id: i32, item_id: i32 },

    #[error("No active loan found for user {user_id} and item {item_id}")]
    NoActiveLoan { user_id: i32, item_id: i32 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn not_found(entity: Entity, id: i32) -> Self {
        AppError::NotFound { entity, id }
    }

    pub fn conflict(entity: Entity, message: impl Into<String>) -> Self {
        AppError::Conflict {
            entity,
            message: message.into(),
        }
    }

    /// Code matching this error in the JSON error body
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound { entity: Entity::Item, .. } => ErrorCode::NoSuchItem,
            AppError::NotFound { entity: Entity::User, .. } => ErrorCode::NoSuchUser,
            AppError::NotFound { entity: Entity::Loan, .. } => ErrorCode::NoSuchData,
            AppError::Conflict { entity: Entity::User, .. } => ErrorCode::UserHasBorrowedItems,
            AppError::Conflict { .. } => ErrorCode::ItemBorrowed,
            AppError::Unavailable { .. } => ErrorCode::ItemNotAvailable,
            AppError::LimitReached { .. } => ErrorCode::MaxBorrowsReached,
            AppError::NotBorrowedByUser { .. } => ErrorCode::NotBorrowedByUser,
            AppError::NoActiveLoan { .. } => ErrorCode::NoActiveLoan,
            AppError::Validation(_) | AppError::BadRequest(_) => ErrorCode::BadValue,
            AppError::Serialization(_) => ErrorCode::Failure,
        }
    }

    /// Short kind name used in the `error` field of the error body
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "NotFound",
            AppError::Conflict { .. } => "Conflict",
            AppError::Unavailable { .. } => "Unavailable",
            AppError::LimitReached { .. } => "LimitReached",
            AppError::NotBorrowedByUser { .. } => "NotBorrowedByUser",
            AppError::NoActiveLoan { .. } => "NoActiveLoan",
            AppError::Validation(_) => "Validation",
            AppError::BadRequest(_) => "BadRequest",
            AppError::Serialization(_) => "Serialization",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        if let AppError::Serialization(e) = err {
            tracing::error!("Serialization error: {:?}", e);
        }

        Self {
            code: err.code() as u32,
            error: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
