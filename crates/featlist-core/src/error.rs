//! Common error types for list stores

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in list stores
#[derive(Debug, Error)]
pub enum StoreError {
    /// No list with the given id
    #[error("List not found: {0}")]
    ListNotFound(i64),

    /// No feature with the given composite key
    #[error("Feature not found: '{feature_id}' in list {list_id}")]
    FeatureNotFound { list_id: i64, feature_id: String },

    /// A feature with the same composite key already exists
    #[error("Feature already exists: '{feature_id}' in list {list_id}")]
    DuplicateFeature { list_id: i64, feature_id: String },

    /// Internal storage error
    #[error("Internal error: {0}")]
    Internal(String),
}
