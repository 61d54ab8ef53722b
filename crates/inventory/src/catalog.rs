//! The fixed cable catalogue offered by the entry forms.

use core::ops::RangeInclusive;

const LARGE_GAUGES: &[&str] = &["14", "12", "10", "8", "6", "4", "2", "1", "(1/0)", "(2/0)"];

/// Cable families and their sizes, in display order.
pub const CABLE_CATEGORIES: &[(&str, &[&str])] = &[
    ("Shielded", &["6", "4", "3", "2"]),
    ("Armored", LARGE_GAUGES),
    ("Earth", LARGE_GAUGES),
    ("Red Cable", LARGE_GAUGES),
];

/// Selectable lengths in whole meters.
pub const LENGTHS: RangeInclusive<u32> = 2..=20;

/// Every `"{family} {size}"` combination, in catalogue order.
pub fn wire_types() -> Vec<String> {
    CABLE_CATEGORIES
        .iter()
        .flat_map(|(family, sizes)| sizes.iter().map(move |size| format!("{family} {size}")))
        .collect()
}

pub fn lengths() -> Vec<u32> {
    LENGTHS.collect()
}
