//! Flat text file inventory store.
//!
//! One record per line, comma separated:
//!
//! ```text
//! <type>,<length>,<quantity>,<reference>
//! ```
//!
//! The older `<type>_<length>,<quantity>` shape is still accepted on read;
//! its reference is recomputed rather than trusted. Lines that match neither
//! shape are skipped.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use cablestock_inventory::error::parse_quantity;
use cablestock_inventory::{Inventory, InventoryItem, Length};

use super::{InventoryStore, StoreError, StoreResult};

#[derive(Debug, Clone)]
pub struct FlatFileInventoryStore {
    path: PathBuf,
}

impl FlatFileInventoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl InventoryStore for FlatFileInventoryStore {
    fn load(&self) -> StoreResult<Inventory> {
        let contents = match std::fs::read(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Inventory::new()),
            Err(e) => return Err(self.io_error(e)),
        };

        let mut inventory = Inventory::new();
        for (lineno, raw) in contents.split(|&b| b == b'\n').enumerate() {
            let Ok(line) = std::str::from_utf8(raw) else {
                tracing::debug!(
                    path = %self.path.display(),
                    line = lineno + 1,
                    "skipping inventory record that is not valid UTF-8"
                );
                continue;
            };
            match parse_line(line) {
                Some(item) => {
                    inventory.insert(item);
                }
                None if line.trim().is_empty() => {}
                None => tracing::debug!(
                    path = %self.path.display(),
                    line = lineno + 1,
                    "skipping unreadable inventory record"
                ),
            }
        }
        Ok(inventory)
    }

    fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        for item in inventory {
            writeln!(writer, "{}", format_line(item)).map_err(|e| self.io_error(e))?;
        }
        writer.flush().map_err(|e| self.io_error(e))
    }
}

/// Parse one stored line in either the current or the legacy shape.
pub fn parse_line(line: &str) -> Option<InventoryItem> {
    let parts: Vec<&str> = line.trim().split(',').collect();
    match parts.as_slice() {
        [name, quantity] => {
            let (wire_type, length) = split_legacy_name(name)?;
            let length = Length::parse(length).ok()?;
            let quantity = parse_stored_quantity(quantity)?;
            Some(InventoryItem::new(wire_type, length, quantity))
        }
        [wire_type, length, quantity, reference] => {
            let length = Length::parse(length).ok()?;
            let quantity = parse_stored_quantity(quantity)?;
            Some(InventoryItem::with_reference(
                *wire_type, length, quantity, *reference,
            ))
        }
        _ => None,
    }
}

/// Render one item in the current four-field shape (no trailing newline).
///
/// The type and reference must not contain `,` or line breaks; such a line
/// would not parse back. `Inventory::handle` refuses those types on add.
pub fn format_line(item: &InventoryItem) -> String {
    format!(
        "{},{},{},{}",
        item.wire_type, item.length, item.quantity, item.reference
    )
}

/// `Shielded 6_5.0` → (`Shielded 6`, `5.0`); exactly one `_` is required.
fn split_legacy_name(name: &str) -> Option<(&str, &str)> {
    let mut parts = name.split('_');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(wire_type), Some(length), None) => Some((wire_type, length)),
        _ => None,
    }
}

fn parse_stored_quantity(raw: &str) -> Option<u32> {
    parse_quantity(raw).ok().and_then(|q| u32::try_from(q).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn store_in(dir: &tempfile::TempDir) -> FlatFileInventoryStore {
        FlatFileInventoryStore::new(dir.path().join("inventory.txt"))
    }

    fn item(wire_type: &str, meters: f64, quantity: u32) -> InventoryItem {
        InventoryItem::new(wire_type, Length::new(meters).unwrap(), quantity)
    }

    #[test]
    fn missing_file_is_empty_inventory() {
        let dir = tempfile::tempdir().unwrap();
        let inv = store_in(&dir).load().unwrap();
        assert!(inv.is_empty());
    }

    #[test]
    fn save_then_load_preserves_records_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let inv: Inventory = [
            item("Shielded 6", 5.0, 2),
            item("Earth 14", 7.0, 1),
            item("Armored (1/0)", 2.5, 11),
        ]
        .into_iter()
        .collect();

        store.save(&inv).unwrap();
        let loaded = store.load().unwrap();

        let got: Vec<_> = loaded.iter().cloned().collect();
        let want: Vec<_> = inv.iter().cloned().collect();
        assert_eq!(got, want);
    }

    #[test]
    fn save_writes_four_field_lines() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let inv: Inventory = [item("Shielded 6", 5.0, 2), item("Red Cable", 3.0, 1)]
            .into_iter()
            .collect();
        store.save(&inv).unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(text, "Shielded 6,5.0,2,SH 6 Core - 5.0\nRed Cable,3.0,1,R\n");
    }

    #[test]
    fn save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let full: Inventory = [item("Earth 14", 7.0, 1), item("Earth 12", 7.0, 1)]
            .into_iter()
            .collect();
        store.save(&full).unwrap();

        let smaller: Inventory = [item("Earth 12", 7.0, 4)].into_iter().collect();
        store.save(&smaller).unwrap();

        let text = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(text, "Earth 12,7.0,4,ER 12 - 7.0\n");
    }

    #[test]
    fn legacy_records_get_recomputed_reference() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "Armored 6_3,4\n").unwrap();

        let inv = store.load().unwrap();
        let it = inv.get("AR 6 - 3.0").unwrap();
        assert_eq!(it.wire_type, "Armored 6");
        assert_eq!(it.quantity, 4);
    }

    #[test]
    fn current_records_trust_stored_reference_and_round_length() {
        let it = parse_line("Earth 14,7.04,3,custom-ref").unwrap();
        assert_eq!(it.reference, "custom-ref");
        assert_eq!(it.length.to_string(), "7.0");
        assert_eq!(it.quantity, 3);
    }

    #[test]
    fn corrupt_lines_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            "Earth 14,7.0,many,ER 14 - 7.0\nShielded 6,5.0,2,SH 6 Core - 5.0\n",
        )
        .unwrap();

        let inv = store.load().unwrap();
        assert_eq!(inv.len(), 1);
        assert!(inv.contains("SH 6 Core - 5.0"));
    }

    #[test]
    fn lines_with_invalid_utf8_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut bytes = b"Shielded 6,5.0,2,SH 6 Core - 5.0\n".to_vec();
        bytes.extend_from_slice(b"Bad\xff,1.0,1,X\n");
        bytes.extend_from_slice(b"Earth 14,7.0,1,ER 14 - 7.0\n");
        std::fs::write(store.path(), bytes).unwrap();

        let inv = store.load().unwrap();
        assert_eq!(inv.len(), 2);
        assert!(inv.contains("SH 6 Core - 5.0"));
        assert!(inv.contains("ER 14 - 7.0"));
    }

    #[test]
    fn parse_line_rejects_malformed_shapes() {
        assert!(parse_line("").is_none());
        assert!(parse_line("just-one-field").is_none());
        assert!(parse_line("a,b,c").is_none());
        assert!(parse_line("Earth_14_7,2").is_none());
        assert!(parse_line("Earth 14_seven,2").is_none());
        assert!(parse_line("Earth 14,7.0,-1,ER 14 - 7.0").is_none());
        assert!(parse_line("a,1,2,3,4").is_none());
    }

    #[test]
    fn parse_line_tolerates_surrounding_whitespace() {
        let it = parse_line("  Earth 14,7.0,3,ER 14 - 7.0\r").unwrap();
        assert_eq!(it.reference, "ER 14 - 7.0");
    }

    proptest! {
        #[test]
        fn file_round_trip(
            entries in prop::collection::vec(
                ("[A-Za-z][A-Za-z ]{0,10}[0-9]{0,2}", 1u32..500, 0.0f64..50.0),
                0..12,
            )
        ) {
            let dir = tempfile::tempdir().unwrap();
            let store = store_in(&dir);
            let inv: Inventory = entries
                .iter()
                .map(|(t, q, l)| item(t.trim(), *l, *q))
                .collect();

            store.save(&inv).unwrap();
            let loaded = store.load().unwrap();

            let got: Vec<_> = loaded.iter().cloned().collect();
            let want: Vec<_> = inv.iter().cloned().collect();
            prop_assert_eq!(got, want);
        }
    }
}
