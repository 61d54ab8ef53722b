//! Cable stock domain.
//!
//! Pure, deterministic inventory rules: reference derivation, length
//! rounding and command handling. No IO, no HTTP, no storage.

pub mod catalog;
pub mod command;
pub mod error;
pub mod item;
pub mod length;
pub mod reference;

pub use command::{InventoryCommand, Outcome};
pub use error::{ParseError, ParseResult};
pub use item::{Inventory, InventoryItem};
pub use length::Length;
pub use reference::generate_reference;
