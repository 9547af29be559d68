pub mod config;
pub mod registry;
pub mod station;
pub mod types;
