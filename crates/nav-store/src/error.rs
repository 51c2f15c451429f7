use nav_types::{EntityId, EntityKind, TypeError};

/// Errors from dataset operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A required field is missing or blank. Nothing was changed.
    #[error(transparent)]
    Validation(#[from] TypeError),

    /// No entity of this kind has the requested id. Nothing was changed.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: EntityId },

    /// Missing or wrong credentials, or an unknown session.
    ///
    /// Deliberately carries no detail about which check failed.
    #[error("unauthorized")]
    Unauthorized,

    /// Every id up to `u32::MAX` has been handed out.
    #[error("id space exhausted")]
    IdSpaceExhausted,

    /// The dataset could not be encoded for writing.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The dataset file could not be written.
    ///
    /// The in-memory change that preceded the write has already been
    /// applied and is not rolled back.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn not_found(kind: EntityKind, id: EntityId) -> Self {
        Self::NotFound { kind, id }
    }

    /// The request itself was at fault (as opposed to the server).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::NotFound { .. } | Self::Unauthorized
        )
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
