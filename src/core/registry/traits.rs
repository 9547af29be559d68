use crate::core::registry::errors::Result;
use crate::core::types::StationId;

/// Operations an assembly line exposes to its callers
///
/// Every operation that names a station fails with `NotFound` if the id is not
/// registered. Failed operations leave the line unchanged.
pub trait AssemblyLine {
    /// Register a new, inactive station
    fn add_station(&mut self, id: StationId, processing_time: i64) -> Result<()>;

    fn remove_station(&mut self, id: StationId) -> Result<()>;

    /// Mark a station as running. Starting a running station is a no-op.
    fn start_assembly(&mut self, id: StationId) -> Result<()>;

    /// Mark a station as stopped. Stopping a stopped station is a no-op.
    fn stop_assembly(&mut self, id: StationId) -> Result<()>;

    fn processing_time(&self, id: StationId) -> Result<i64>;

    /// Sum the processing time of the stations in the registry's scope.
    ///
    /// The sum saturates: if the true total exceeds `i64::MAX`, `i64::MAX` is
    /// returned rather than an error.
    fn total_processing_time(&self) -> i64;

    fn num_stations(&self) -> usize;

    fn num_active_stations(&self) -> usize;

    fn num_inactive_stations(&self) -> usize {
        self.num_stations() - self.num_active_stations()
    }

    fn is_station_active(&self, id: StationId) -> Result<bool>;
}
