use indexmap::IndexMap;
use serde::Serialize;

use crate::length::Length;
use crate::reference::generate_reference;

/// One stocked cable type at one length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryItem {
    #[serde(rename = "type")]
    pub wire_type: String,
    pub length: Length,
    pub quantity: u32,
    pub reference: String,
}

impl InventoryItem {
    /// Build an item whose reference is derived from its type and length.
    pub fn new(wire_type: impl Into<String>, length: Length, quantity: u32) -> Self {
        let wire_type = wire_type.into();
        let reference = generate_reference(&wire_type, length);
        Self {
            wire_type,
            length,
            quantity,
            reference,
        }
    }

    /// Build an item with an explicit reference (as read back from storage).
    pub fn with_reference(
        wire_type: impl Into<String>,
        length: Length,
        quantity: u32,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            wire_type: wire_type.into(),
            length,
            quantity,
            reference: reference.into(),
        }
    }
}

/// The whole stock: reference code to item, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Inventory {
    items: IndexMap<String, InventoryItem>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, reference: &str) -> bool {
        self.items.contains_key(reference)
    }

    pub fn get(&self, reference: &str) -> Option<&InventoryItem> {
        self.items.get(reference)
    }

    pub fn get_mut(&mut self, reference: &str) -> Option<&mut InventoryItem> {
        self.items.get_mut(reference)
    }

    /// Insert under the item's own reference, replacing any previous record
    /// in place.
    pub fn insert(&mut self, item: InventoryItem) -> Option<InventoryItem> {
        self.items.insert(item.reference.clone(), item)
    }

    /// Remove a record, keeping the relative order of the rest.
    pub fn remove(&mut self, reference: &str) -> Option<InventoryItem> {
        self.items.shift_remove(reference)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.values()
    }

    /// All records of exactly this type, in inventory order.
    pub fn filter_by_type(&self, wire_type: &str) -> Inventory {
        self.iter()
            .filter(|item| item.wire_type == wire_type)
            .cloned()
            .collect()
    }

    /// Drop every record matching `pred`, returning how many went.
    pub fn remove_where(&mut self, mut pred: impl FnMut(&InventoryItem) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|_, item| !pred(item));
        before - self.items.len()
    }
}

impl FromIterator<InventoryItem> for Inventory {
    fn from_iter<I: IntoIterator<Item = InventoryItem>>(iter: I) -> Self {
        let mut inventory = Inventory::new();
        for item in iter {
            inventory.insert(item);
        }
        inventory
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a InventoryItem;
    type IntoIter = indexmap::map::Values<'a, String, InventoryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}
