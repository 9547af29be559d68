pub mod core;

// Re-export commonly used types
pub use crate::core::config::{RegistryConfig, TotalTimeScope};
pub use crate::core::registry::{
    AssemblyLine, ErrorKind, RegistryError, RegistryStats, Result, StationRegistry,
};
pub use crate::core::station::Station;
pub use crate::core::types::StationId;
