use thiserror::Error;

use crate::core::types::StationId;

/// Errors reported by station registry operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Negative capacity or negative processing time
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Station {0} already exists")]
    DuplicateKey(StationId),

    #[error("Capacity exceeded: registry already holds {capacity} stations")]
    CapacityExceeded { capacity: usize },

    #[error("Station {0} not found")]
    NotFound(StationId),
}

/// Payload-free category of a [`RegistryError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    DuplicateKey,
    CapacityExceeded,
    NotFound,
}

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;

impl RegistryError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::DuplicateKey(_) => ErrorKind::DuplicateKey,
            Self::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            Self::NotFound(_) => ErrorKind::NotFound,
        }
    }
}
