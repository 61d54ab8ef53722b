//! Input parsing errors.

use thiserror::Error;

/// Result type for parsing user-supplied numeric fields.
pub type ParseResult<T> = Result<T, ParseError>;

/// Failure to interpret a form value as a length or quantity.
///
/// These never escape the domain boundary as errors: command handling turns
/// them into the message shown on the page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid length: {0:?}")]
    InvalidLength(String),

    #[error("invalid quantity: {0:?}")]
    InvalidQuantity(String),
}

impl ParseError {
    pub fn length(raw: impl Into<String>) -> Self {
        Self::InvalidLength(raw.into())
    }

    pub fn quantity(raw: impl Into<String>) -> Self {
        Self::InvalidQuantity(raw.into())
    }
}

/// Parse a signed integer quantity, tolerating surrounding whitespace and a
/// leading `+`.
pub fn parse_quantity(raw: &str) -> ParseResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ParseError::quantity(raw))
}

/// Parse a quantity that must consist of ASCII digits only (no sign, no
/// whitespace). Values too large for `u64` saturate.
pub fn parse_digits(raw: &str) -> ParseResult<u64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::quantity(raw));
    }
    Ok(raw.parse::<u64>().unwrap_or(u64::MAX))
}
