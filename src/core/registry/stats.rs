use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of a station registry for monitoring and debugging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Maximum number of stations
    pub capacity: usize,
    /// Number of stations currently registered
    pub total_stations: usize,
    /// Number of stations with assembly running
    pub active_stations: usize,
    /// Number of stations with assembly stopped
    pub inactive_stations: usize,
    /// Total processing time, summed according to the registry's scope
    pub total_processing_time: i64,
}

impl RegistryStats {
    /// Slots still free for new stations
    pub fn remaining_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.total_stations)
    }

    pub fn is_full(&self) -> bool {
        self.total_stations >= self.capacity
    }
}
