//! Per-request pipeline: load the whole inventory, apply one command,
//! persist if it changed, render the page.

use std::sync::Arc;

use cablestock_infra::InventoryStore;
use cablestock_inventory::InventoryCommand;

use crate::app::errors::AppError;
use crate::app::view::{PageRenderer, PageView};

pub struct AppServices {
    store: Arc<dyn InventoryStore>,
    renderer: PageRenderer,
}

impl AppServices {
    pub fn new(store: Arc<dyn InventoryStore>, renderer: PageRenderer) -> Self {
        Self { store, renderer }
    }

    /// Run one request cycle and return the rendered page.
    ///
    /// Nothing is cached between calls: the store is the only state.
    pub fn process(&self, command: &InventoryCommand) -> Result<String, AppError> {
        let mut inventory = self.store.load()?;
        let outcome = inventory.handle(command);

        if outcome.changed {
            if let Err(e) = self.store.save(&inventory) {
                tracing::warn!(action = command.name(), error = %e, "failed to persist inventory");
                return Err(e.into());
            }
            tracing::info!(
                action = command.name(),
                records = inventory.len(),
                message = %outcome.message,
                "inventory updated"
            );
        } else if !matches!(command, InventoryCommand::Noop) {
            tracing::debug!(action = command.name(), message = %outcome.message, "inventory unchanged");
        }

        let view = PageView::new(&inventory, &outcome);
        Ok(self.renderer.render(&view)?)
    }
}
