//! Commands against the inventory and the page state they produce.
//!
//! Every command is applied to a freshly loaded `Inventory`. Handling never
//! fails: bad input becomes a message and leaves the inventory untouched.
//! The caller persists only when `Outcome::changed` is set.

use std::collections::HashSet;

use crate::error::{parse_digits, parse_quantity};
use crate::item::{Inventory, InventoryItem};
use crate::length::Length;
use crate::reference::generate_reference;

/// One user action, decoded from the submitted form.
///
/// Numeric fields are carried as the raw submitted text; interpreting them
/// is part of handling because a parse failure has its own message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InventoryCommand {
    /// Nothing to apply (plain page load, or an action missing its fields).
    Noop,
    Add {
        wire_type: String,
        length: String,
    },
    Remove {
        wire_type: String,
        length: String,
    },
    UpdateQuantity {
        reference: Option<String>,
        quantity: Option<String>,
    },
    Search {
        wire_type: Option<String>,
        length: Option<String>,
    },
    /// Delete the listed references, reporting how many actually existed.
    DeleteSelected {
        items: Vec<String>,
    },
    /// Delete the listed references, reporting how many were requested.
    DeleteSelectedRefs {
        refs: Vec<String>,
    },
    Edit {
        reference: String,
    },
    CancelEdit,
    SaveEdit {
        reference: String,
        new_quantity: Option<String>,
    },
    DeleteQuantity {
        reference: Option<String>,
        quantity: Option<String>,
    },
    /// Delete every record sharing a type with any of the listed references.
    DeleteSelectedTypes {
        refs: Vec<String>,
    },
}

impl InventoryCommand {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            InventoryCommand::Noop => "noop",
            InventoryCommand::Add { .. } => "add",
            InventoryCommand::Remove { .. } => "remove",
            InventoryCommand::UpdateQuantity { .. } => "update_quantity",
            InventoryCommand::Search { .. } => "search",
            InventoryCommand::DeleteSelected { .. } => "delete_selected",
            InventoryCommand::DeleteSelectedRefs { .. } => "delete_selected_refs",
            InventoryCommand::Edit { .. } => "edit",
            InventoryCommand::CancelEdit => "cancel_edit",
            InventoryCommand::SaveEdit { .. } => "save_edit",
            InventoryCommand::DeleteQuantity { .. } => "delete_quantity",
            InventoryCommand::DeleteSelectedTypes { .. } => "delete_selected_types",
        }
    }
}

/// What the page should show after a command.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    pub message: String,
    pub search_results: Option<Inventory>,
    pub edit_ref: Option<String>,
    /// The inventory was mutated and must be written back.
    pub changed: bool,
}

impl Outcome {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    fn changed(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            changed: true,
            ..Self::default()
        }
    }
}

impl Inventory {
    /// Apply one command in place.
    pub fn handle(&mut self, command: &InventoryCommand) -> Outcome {
        match command {
            InventoryCommand::Noop | InventoryCommand::CancelEdit => Outcome::default(),
            InventoryCommand::Add { wire_type, length } => self.handle_add(wire_type, length),
            InventoryCommand::Remove { wire_type, length } => self.handle_remove(wire_type, length),
            InventoryCommand::UpdateQuantity {
                reference,
                quantity,
            } => self.handle_update_quantity(reference.as_deref(), quantity.as_deref()),
            InventoryCommand::Search { wire_type, length } => {
                self.handle_search(wire_type.as_deref(), length.as_deref())
            }
            InventoryCommand::DeleteSelected { items } => self.handle_delete_selected(items),
            InventoryCommand::DeleteSelectedRefs { refs } => self.handle_delete_selected_refs(refs),
            InventoryCommand::Edit { reference } => Outcome {
                edit_ref: Some(reference.clone()),
                ..Outcome::default()
            },
            InventoryCommand::SaveEdit {
                reference,
                new_quantity,
            } => self.handle_save_edit(reference, new_quantity.as_deref()),
            InventoryCommand::DeleteQuantity {
                reference,
                quantity,
            } => self.handle_delete_quantity(reference.as_deref(), quantity.as_deref()),
            InventoryCommand::DeleteSelectedTypes { refs } => self.handle_delete_selected_types(refs),
        }
    }

    fn handle_add(&mut self, wire_type: &str, length: &str) -> Outcome {
        let Ok(length) = Length::parse(length) else {
            return Outcome::message("Please enter a valid length");
        };
        // Stored lines are comma separated, one per line.
        if wire_type.contains(|c: char| c == ',' || c.is_control()) {
            return Outcome::message("Please select a valid wire type");
        }

        let reference = generate_reference(wire_type, length);
        match self.get_mut(&reference) {
            Some(item) => item.quantity = item.quantity.saturating_add(1),
            None => {
                self.insert(InventoryItem::with_reference(wire_type, length, 1, reference.clone()));
            }
        }
        Outcome::changed(format!("Wire added to inventory with reference: {reference}"))
    }

    fn handle_remove(&mut self, wire_type: &str, length: &str) -> Outcome {
        let Ok(length) = Length::parse(length) else {
            return Outcome::message("Please enter a valid length");
        };

        let reference = generate_reference(wire_type, length);
        let Some(item) = self.get_mut(&reference) else {
            return Outcome::message(format!("No {wire_type} ({length}m) found in inventory"));
        };

        if item.quantity > 1 {
            item.quantity -= 1;
            Outcome::changed(format!(
                "Removed 1 piece of {wire_type} ({length}m) from inventory"
            ))
        } else {
            self.remove(&reference);
            Outcome::changed(format!("Removed {wire_type} ({length}m) from inventory"))
        }
    }

    fn handle_update_quantity(&mut self, reference: Option<&str>, quantity: Option<&str>) -> Outcome {
        let quantity = match quantity.map(parse_quantity).transpose() {
            Ok(q) => q.unwrap_or(0),
            Err(_) => return Outcome::message("Please enter a valid quantity"),
        };

        let item = reference.and_then(|r| self.get_mut(r));
        match (item, u32::try_from(quantity)) {
            (Some(item), Ok(quantity)) if quantity > 0 => {
                item.quantity = quantity;
                Outcome::changed(format!(
                    "Updated quantity to {quantity} for {} ({}m)",
                    item.wire_type, item.length
                ))
            }
            _ => Outcome::message("Invalid reference or quantity"),
        }
    }

    fn handle_search(&self, wire_type: Option<&str>, length: Option<&str>) -> Outcome {
        let Some(wire_type) = wire_type else {
            let results = self.clone();
            let message = if results.is_empty() {
                "No inventory found"
            } else {
                ""
            };
            return Outcome {
                search_results: Some(results),
                ..Outcome::message(message)
            };
        };

        if let Some(length) = length.and_then(|l| Length::parse(l).ok()) {
            let reference = generate_reference(wire_type, length);
            let results: Inventory = self.get(&reference).cloned().into_iter().collect();
            return Outcome {
                search_results: Some(results),
                ..Outcome::default()
            };
        }

        // No length, or one that does not parse: every length of this type.
        let results = self.filter_by_type(wire_type);
        let message = if results.is_empty() {
            format!("No inventory found for {wire_type}")
        } else {
            String::new()
        };
        Outcome {
            search_results: Some(results),
            ..Outcome::message(message)
        }
    }

    fn handle_delete_selected(&mut self, items: &[String]) -> Outcome {
        if items.is_empty() {
            return Outcome::message("No items selected for deletion");
        }

        let deleted = items.iter().filter(|r| self.remove(r).is_some()).count();
        if deleted > 0 {
            Outcome::changed(format!("Deleted {deleted} item(s)"))
        } else {
            Outcome::message("No matching items found to delete")
        }
    }

    fn handle_delete_selected_refs(&mut self, refs: &[String]) -> Outcome {
        for reference in refs {
            self.remove(reference);
        }
        Outcome::changed(format!("Deleted {} items from inventory", refs.len()))
    }

    fn handle_save_edit(&mut self, reference: &str, new_quantity: Option<&str>) -> Outcome {
        let quantity = new_quantity.and_then(|q| parse_digits(q).ok());
        let Some(quantity) = quantity.filter(|_| self.contains(reference)) else {
            return Outcome::default();
        };

        // A zero count is never stored.
        if quantity == 0 {
            self.remove(reference);
        } else if let Some(item) = self.get_mut(reference) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
        Outcome::changed(format!("Updated quantity for {reference}"))
    }

    fn handle_delete_quantity(&mut self, reference: Option<&str>, quantity: Option<&str>) -> Outcome {
        let reference = reference.filter(|r| !r.is_empty());
        let quantity = quantity.and_then(|q| parse_digits(q).ok());
        let (Some(reference), Some(quantity)) = (reference, quantity) else {
            return Outcome::message("Invalid delete request");
        };

        let Some(item) = self.get_mut(reference) else {
            return Outcome::message("Item not found in inventory");
        };

        if u64::from(item.quantity) > quantity {
            // Strictly less than a u32 here, so the cast is lossless.
            item.quantity -= quantity as u32;
            Outcome::changed(format!("Removed {quantity} item(s) from {reference}"))
        } else {
            self.remove(reference);
            Outcome::changed(format!("Removed {reference} from inventory"))
        }
    }

    fn handle_delete_selected_types(&mut self, refs: &[String]) -> Outcome {
        if refs.is_empty() {
            return Outcome::message("No items selected for type deletion");
        }

        let types: HashSet<String> = refs
            .iter()
            .filter_map(|r| self.get(r))
            .map(|item| item.wire_type.clone())
            .collect();

        let deleted = self.remove_where(|item| types.contains(&item.wire_type));
        Outcome::changed(format!(
            "Deleted {deleted} items of selected type(s) from inventory"
        ))
    }
}
