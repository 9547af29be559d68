use crate::core::config::{RegistryConfig, TotalTimeScope};
use crate::core::registry::errors::{RegistryError, Result};
use crate::core::registry::stats::RegistryStats;
use crate::core::registry::traits::AssemblyLine;
use crate::core::station::Station;
use crate::core::types::StationId;
use log::{debug, warn};
use std::collections::HashMap;

/// Manages registration and activity of all stations on an assembly line
///
/// The registry owns every `Station` it holds. The number of stations never
/// exceeds the capacity fixed at construction, and `active_count` always equals
/// the number of stored stations whose flag is set.
#[derive(Debug, Clone)]
pub struct StationRegistry {
    capacity: usize,
    total_time_scope: TotalTimeScope,
    stations: HashMap<StationId, Station>,
    active_count: usize,
}

impl StationRegistry {
    /// Create a registry holding at most `capacity` stations
    pub fn new(capacity: i64) -> Result<Self> {
        Self::with_config(RegistryConfig::new().with_capacity(capacity))
    }

    /// Create a registry from a full configuration
    ///
    /// # Arguments
    /// * `config` - Capacity and total processing time scope
    ///
    /// # Returns
    /// The empty registry, or `InvalidArgument` if the capacity is negative
    ///
    /// # Note
    /// Capacity is only an upper bound. Storage grows as stations are added.
    pub fn with_config(config: RegistryConfig) -> Result<Self> {
        let capacity = config.validated_capacity().map_err(reject)?;

        debug!(
            "Created station registry with capacity {} ({:?})",
            capacity, config.total_time_scope
        );

        Ok(Self {
            capacity,
            total_time_scope: config.total_time_scope,
            stations: HashMap::new(),
            active_count: 0,
        })
    }

    /// Get the maximum number of stations, fixed at construction
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get which stations `total_processing_time` sums
    pub fn total_time_scope(&self) -> TotalTimeScope {
        self.total_time_scope
    }

    /// Slots still free for new stations
    pub fn remaining_capacity(&self) -> usize {
        self.capacity - self.stations.len()
    }

    /// Check if no further station can be added
    ///
    /// A registry with zero capacity is always full.
    pub fn is_full(&self) -> bool {
        self.stations.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Check if a station exists
    pub fn contains(&self, id: StationId) -> bool {
        self.stations.contains_key(&id)
    }

    /// Get a station by ID
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(&id)
    }

    /// Get all station IDs in ascending order
    pub fn station_ids(&self) -> Vec<StationId> {
        let mut ids: Vec<StationId> = self.stations.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Take a snapshot of the registry counters
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            capacity: self.capacity,
            total_stations: self.num_stations(),
            active_stations: self.num_active_stations(),
            inactive_stations: self.num_inactive_stations(),
            total_processing_time: self.total_processing_time(),
        }
    }

    fn get(&self, id: StationId) -> Result<&Station> {
        self.stations.get(&id).ok_or_else(|| reject(RegistryError::NotFound(id)))
    }

    fn set_active(&mut self, id: StationId, active: bool) -> Result<()> {
        let station = self
            .stations
            .get_mut(&id)
            .ok_or_else(|| reject(RegistryError::NotFound(id)))?;

        if station.set_active(active) {
            if active {
                self.active_count += 1;
            } else {
                self.active_count -= 1;
            }
            debug!("{} is now {}", id, if active { "active" } else { "inactive" });
        }
        Ok(())
    }
}

fn reject(err: RegistryError) -> RegistryError {
    warn!("Station registry operation rejected: {}", err);
    err
}

impl AssemblyLine for StationRegistry {
    fn add_station(&mut self, id: StationId, processing_time: i64) -> Result<()> {
        if processing_time < 0 {
            return Err(reject(RegistryError::invalid_argument(format!(
                "Processing time cannot be negative (got {} for {})",
                processing_time, id
            ))));
        }
        if self.stations.contains_key(&id) {
            return Err(reject(RegistryError::DuplicateKey(id)));
        }
        if self.is_full() {
            return Err(reject(RegistryError::CapacityExceeded {
                capacity: self.capacity,
            }));
        }

        self.stations.insert(id, Station::new(processing_time));
        debug!(
            "Added {} with processing time {} ({}/{})",
            id,
            processing_time,
            self.stations.len(),
            self.capacity
        );
        Ok(())
    }

    fn remove_station(&mut self, id: StationId) -> Result<()> {
        let station = self
            .stations
            .remove(&id)
            .ok_or_else(|| reject(RegistryError::NotFound(id)))?;

        if station.is_active() {
            self.active_count -= 1;
        }
        debug!("Removed {} ({}/{})", id, self.stations.len(), self.capacity);
        Ok(())
    }

    fn start_assembly(&mut self, id: StationId) -> Result<()> {
        self.set_active(id, true)
    }

    fn stop_assembly(&mut self, id: StationId) -> Result<()> {
        self.set_active(id, false)
    }

    fn processing_time(&self, id: StationId) -> Result<i64> {
        self.get(id).map(Station::processing_time)
    }

    fn total_processing_time(&self) -> i64 {
        self.stations
            .values()
            .filter(|station| self.total_time_scope.includes(station.is_active()))
            .fold(0i64, |total, station| {
                total.saturating_add(station.processing_time())
            })
    }

    fn num_stations(&self) -> usize {
        self.stations.len()
    }

    fn num_active_stations(&self) -> usize {
        self.active_count
    }

    fn is_station_active(&self, id: StationId) -> Result<bool> {
        self.get(id).map(Station::is_active)
    }
}
