//! Inventory storage abstractions.
//!
//! The store always deals in the whole inventory: `load` returns every record
//! and `save` replaces every record. There is no locking; concurrent writers
//! race and the last one wins.

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use cablestock_inventory::Inventory;

pub mod flat_file;
pub mod in_memory;

pub use flat_file::FlatFileInventoryStore;
pub use in_memory::InMemoryInventoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("inventory file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Whole-inventory load/save.
pub trait InventoryStore: Send + Sync {
    fn load(&self) -> StoreResult<Inventory>;
    fn save(&self, inventory: &Inventory) -> StoreResult<()>;
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn load(&self) -> StoreResult<Inventory> {
        (**self).load()
    }

    fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        (**self).save(inventory)
    }
}
