//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Ovro POS                               │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('complete_sale')                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Data Error? ─── DataError::SaleRejected("...") ───┐            │  │
//! │  │         │                                          │            │  │
//! │  │         ▼                                          ▼            │  │
//! │  │  Validation Error? ─── CoreError::Validation ──── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  try {                                                                  │
//! │    await invoke('complete_sale')                                        │
//! │  } catch (e) {                                                          │
//! │    // e.message = "Sale submission rejected: ..."                       │
//! │    // e.code = "SALE_ERROR"                                             │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;
use tracing::error;

use ovro_core::CoreError;
use ovro_data::DataError;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Reminder not found: abc-123"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
///
/// ## Usage in Frontend
/// ```typescript
/// try {
///   await invoke('complete_sale', { details });
/// } catch (e) {
///   switch (e.code) {
///     case 'SALE_ERROR':
///       showNotification('Sale failed, cart kept for retry');
///       break;
///     case 'VALIDATION_ERROR':
///       showForm(e.message);
///       break;
///     default:
///       showError('An error occurred');
///   }
/// }
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Persistent storage failed (500)
    StorageError,

    /// Internal error (500)
    Internal,

    /// Cart operation failed
    CartError,

    /// Sale submission failed or is already in flight
    SaleError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    /// Creates a cart error.
    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts data layer errors to API errors.
impl From<DataError> for ApiError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::NotFound { entity, id } => ApiError::not_found(&entity, &id),
            DataError::WriteFailed { slot, source } => {
                // Log the actual error but return a generic message
                error!(slot, error = %source, "Blob write failed");
                ApiError::new(ErrorCode::StorageError, "Failed to save data")
            }
            DataError::SerializeFailed { slot, source } => {
                error!(slot, error = %source, "Blob serialization failed");
                ApiError::new(ErrorCode::StorageError, "Failed to save data")
            }
            DataError::SaleRejected(reason) => ApiError::new(
                ErrorCode::SaleError,
                format!("Sale submission rejected: {}", reason),
            ),
            DataError::SaleInProgress => {
                ApiError::new(ErrorCode::SaleError, "A sale is already being processed")
            }
            DataError::EmptyCart => ApiError::new(
                ErrorCode::CartError,
                "Cannot complete a sale with an empty cart",
            ),
            DataError::Internal(e) => {
                error!("Internal data error: {}", e);
                ApiError::new(ErrorCode::Internal, "Internal error")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", &id),
            CoreError::ReminderNotFound(id) => ApiError::not_found("Reminder", &id),
            CoreError::EmptyCart => ApiError::new(
                ErrorCode::CartError,
                "Cannot complete a sale with an empty cart",
            ),
            CoreError::SaleInProgress => {
                ApiError::new(ErrorCode::SaleError, "A sale is already being processed")
            }
            CoreError::SaleRejected(reason) => ApiError::new(
                ErrorCode::SaleError,
                format!("Sale submission rejected: {}", reason),
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
