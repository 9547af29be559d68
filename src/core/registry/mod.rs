pub mod errors;
pub mod station_registry;
pub mod stats;
pub mod traits;

// Re-export commonly used types
pub use errors::{ErrorKind, RegistryError, Result};
pub use station_registry::StationRegistry;
pub use stats::RegistryStats;
pub use traits::AssemblyLine;
