//! Infrastructure layer: inventory persistence and configuration.

pub mod config;
pub mod store;

pub use config::{AppConfig, ConfigError, LogFormat, ParseLogFormatError};
pub use store::{FlatFileInventoryStore, InMemoryInventoryStore, InventoryStore, StoreError, StoreResult};
