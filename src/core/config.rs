//! Configuration for a station registry
//!
//! This module provides configuration types for controlling how a registry is
//! constructed, including its fixed capacity and which stations count towards
//! the total processing time.

use crate::core::registry::errors::{RegistryError, Result};

/// Which stations are summed by `total_processing_time`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TotalTimeScope {
    /// Every station in the registry, active or not
    #[default]
    AllStations,
    /// Only stations whose assembly is currently running
    ActiveOnly,
}

impl TotalTimeScope {
    /// Check whether a station with the given activity flag is counted
    pub fn includes(&self, is_active: bool) -> bool {
        match self {
            TotalTimeScope::AllStations => true,
            TotalTimeScope::ActiveOnly => is_active,
        }
    }
}

/// Configuration for registry construction
///
/// Capacity is kept signed so that a negative value coming from a caller can be
/// rejected with `InvalidArgument` rather than wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Maximum number of stations the registry may hold at once
    pub capacity: i64,
    /// Stations included in the total processing time
    pub total_time_scope: TotalTimeScope,
}

impl RegistryConfig {
    /// Create a new configuration with default values
    ///
    /// Default configuration has zero capacity and sums every station
    pub fn new() -> Self {
        Self {
            capacity: 0,
            total_time_scope: TotalTimeScope::default(),
        }
    }

    /// Set the station capacity
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of stations the registry may hold
    ///
    /// # Returns
    /// A new configuration with the specified capacity
    ///
    /// # Note
    /// Negative values are accepted here and rejected when the registry is built
    pub fn with_capacity(mut self, capacity: i64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set which stations count towards the total processing time
    ///
    /// # Arguments
    /// * `scope` - The stations to include in the sum
    ///
    /// # Returns
    /// A new configuration with the specified scope
    pub fn with_total_time_scope(mut self, scope: TotalTimeScope) -> Self {
        self.total_time_scope = scope;
        self
    }

    /// Validate the configuration and return the capacity as a count
    ///
    /// # Returns
    /// The capacity as `usize`, or `InvalidArgument` if it is negative
    pub fn validated_capacity(&self) -> Result<usize> {
        usize::try_from(self.capacity).map_err(|_| {
            RegistryError::invalid_argument(format!(
                "Number of stations cannot be negative (got {})",
                self.capacity
            ))
        })
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}
