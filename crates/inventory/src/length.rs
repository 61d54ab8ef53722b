//! Cable length in meters.

use core::fmt;
use core::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{ParseError, ParseResult};

/// A cable length in meters, always held rounded to one decimal place.
///
/// Rounding happens on construction, so every reference derivation and every
/// persisted value sees the same rounded number.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct Length(f64);

impl Length {
    /// Round `meters` to one decimal place.
    ///
    /// Rounding is done on the exact binary value (ties to even), so `2.45`
    /// becomes `2.5` and `0.35` becomes `0.3`. Returns `None` for NaN and
    /// infinities.
    pub fn new(meters: f64) -> Option<Self> {
        if !meters.is_finite() {
            return None;
        }
        let rounded = format!("{meters:.1}").parse::<f64>().ok()?;
        // Normalise -0.0 so it prints as "0.0".
        Some(Self(if rounded == 0.0 { 0.0 } else { rounded }))
    }

    /// Parse a user-supplied or persisted length.
    pub fn parse(raw: &str) -> ParseResult<Self> {
        let trimmed = raw.trim();
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ParseError::length(raw))
    }

    pub fn meters(&self) -> f64 {
        self.0
    }
}

impl FromStr for Length {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Magnitude from which lengths print in exponent form (`1e+16`).
const EXPONENT_THRESHOLD: f64 = 1e16;

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.abs() >= EXPONENT_THRESHOLD {
            return write_exponent(f, self.0);
        }
        if self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// `1.5e20` → `1.5e+20`: signed exponent with at least two digits.
fn write_exponent(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let shortest = format!("{value:e}");
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return f.write_str(&shortest);
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    write!(f, "{mantissa}e{sign}{digits:0>2}")
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
