//! Reference codes: the derived display key of an inventory item.

use core::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;

/// Prefix table consulted after the `Red Cable` and `Earth` rules.
///
/// Order matters: the first prefix that matches wins. `Earth Green` and
/// `Earth Yellow` can never match here because every type starting with
/// `Earth` is handled earlier; they remain so the table reads like the
/// catalogue it came from.
const TYPE_PREFIXES: &[(&str, &str)] = &[
    ("Shielded", "SH"),
    ("Armored", "AR"),
    ("Earth Green", "EG"),
    ("Earth Yellow", "EY"),
];

/// Leading alphabetic name followed by a numeric size (`14`, `1/0` or `(1/0)`).
static NAME_AND_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z ]+)(\d+(?:/\d+)?|\(\d+/\d+\))").expect("static regex is valid")
});

/// Derive the reference code for a cable type and length.
///
/// Pure and deterministic: two items with the same type and length always
/// share a reference, which is how the inventory merges duplicates.
pub fn generate_reference(wire_type: &str, length: impl Display) -> String {
    if wire_type == "Red Cable" {
        return "R".to_string();
    }

    if wire_type.starts_with("Earth") {
        let parts: Vec<&str> = wire_type.split_whitespace().collect();
        return match parts.as_slice() {
            [_, size] => format!("ER {size} - {length}"),
            _ => format!("ER - {length}"),
        };
    }

    for (name, prefix) in TYPE_PREFIXES {
        if let Some(rest) = wire_type.strip_prefix(name) {
            let size = rest.trim();
            if *name == "Shielded" {
                return format!("{prefix} {size} Core - {length}");
            }
            return format!("{prefix} {size} - {length}");
        }
    }

    if let Some(caps) = NAME_AND_SIZE.captures(wire_type) {
        let name = caps[1].trim();
        let size = &caps[2];
        return format!("{name} {size} - {length}");
    }

    format!("{wire_type} - {length}")
}
