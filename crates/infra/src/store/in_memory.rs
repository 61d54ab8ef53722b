use std::sync::RwLock;

use cablestock_inventory::Inventory;

use super::{InventoryStore, StoreResult};

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    inner: RwLock<Inventory>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            inner: RwLock::new(inventory),
        }
    }
}

impl InventoryStore for InMemoryInventoryStore {
    fn load(&self) -> StoreResult<Inventory> {
        Ok(match self.inner.read() {
            Ok(inv) => inv.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        })
    }

    fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        let mut guard = match self.inner.write() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        *guard = inventory.clone();
        Ok(())
    }
}
