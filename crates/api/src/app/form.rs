//! Decoding of the submitted page form.

use serde::Deserialize;

use cablestock_inventory::InventoryCommand;

/// Every field the page can post. Repeated checkbox fields arrive as lists.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct IndexForm {
    pub action: Option<String>,
    pub wire_type: Option<String>,
    pub length: Option<String>,
    pub reference: Option<String>,
    pub quantity: Option<String>,
    pub new_quantity: Option<String>,
    pub delete_ref: Option<String>,
    pub delete_quantity: Option<String>,
    #[serde(default)]
    pub selected_items: Vec<String>,
    #[serde(default)]
    pub selected_refs: Vec<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl IndexForm {
    /// Map the `action` field (and the fields it needs) to a command.
    ///
    /// Unknown actions, and `add`/`remove` without both a type and a length,
    /// decode to `Noop` so the page simply re-renders.
    pub fn into_command(self) -> InventoryCommand {
        let wire_type = non_empty(self.wire_type);
        let length = non_empty(self.length);
        let Some(action) = non_empty(self.action) else {
            return InventoryCommand::Noop;
        };

        match action.as_str() {
            "add" | "remove" => match (wire_type, length) {
                (Some(wire_type), Some(length)) if action == "add" => {
                    InventoryCommand::Add { wire_type, length }
                }
                (Some(wire_type), Some(length)) => InventoryCommand::Remove { wire_type, length },
                _ => InventoryCommand::Noop,
            },
            "update_quantity" => InventoryCommand::UpdateQuantity {
                reference: self.reference,
                quantity: self.quantity,
            },
            "search" => InventoryCommand::Search { wire_type, length },
            "delete_selected" => {
                if self.selected_items.is_empty() && !self.selected_refs.is_empty() {
                    InventoryCommand::DeleteSelectedRefs {
                        refs: self.selected_refs,
                    }
                } else {
                    InventoryCommand::DeleteSelected {
                        items: self.selected_items,
                    }
                }
            }
            "cancel_edit" => InventoryCommand::CancelEdit,
            "delete_quantity" => InventoryCommand::DeleteQuantity {
                reference: self.delete_ref,
                quantity: self.delete_quantity,
            },
            "delete_selected_types" => InventoryCommand::DeleteSelectedTypes {
                refs: self.selected_refs,
            },
            other => {
                if let Some(reference) = other.strip_prefix("edit_") {
                    InventoryCommand::Edit {
                        reference: reference.to_string(),
                    }
                } else if let Some(reference) = other.strip_prefix("save_edit_") {
                    InventoryCommand::SaveEdit {
                        reference: reference.to_string(),
                        new_quantity: self.new_quantity,
                    }
                } else {
                    InventoryCommand::Noop
                }
            }
        }
    }
}
