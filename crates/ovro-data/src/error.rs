//! # Data Layer Error Types
//!
//! Error types for blob storage and provider operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  I/O Error (std::io::Error) / serde_json::Error                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DataError (this module) ← Adds context and categorization             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in Tauri app) ← Serialized for frontend                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Frontend displays user-friendly message                               │
//! │                                                                         │
//! │  Reads are deliberately NOT on this path: an absent or corrupt blob    │
//! │  degrades to the empty collection and never reaches the frontend.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Data layer errors.
///
/// These errors wrap storage and collaborator failures and provide
/// context for debugging and user feedback.
#[derive(Debug, Error)]
pub enum DataError {
    /// Entity not found in a store.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Writing a blob slot failed.
    ///
    /// ## When This Occurs
    /// - Data directory is not writable
    /// - Disk full
    #[error("Failed to write slot '{slot}': {source}")]
    WriteFailed {
        slot: String,
        #[source]
        source: std::io::Error,
    },

    /// Serializing a value for storage failed.
    #[error("Failed to serialize slot '{slot}': {source}")]
    SerializeFailed {
        slot: String,
        #[source]
        source: serde_json::Error,
    },

    /// The sale-processing collaborator rejected the submission.
    #[error("Sale submission rejected: {0}")]
    SaleRejected(String),

    /// A checkout was attempted while another is still in flight.
    #[error("A sale is already being processed")]
    SaleInProgress,

    /// A checkout was attempted with an empty cart.
    #[error("Cannot complete a sale with an empty cart")]
    EmptyCart,

    /// Internal data layer error.
    #[error("Internal data error: {0}")]
    Internal(String),
}

impl DataError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        DataError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Result type for data layer operations.
pub type DataResult<T> = Result<T, DataError>;
