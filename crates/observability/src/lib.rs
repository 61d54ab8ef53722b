//! Tracing/logging setup shared by binaries and tests.

use cablestock_infra::LogFormat;

/// Tracing configuration (filters, output format).
pub mod tracing;

/// Initialize process-wide logging in the given format.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat) {
    tracing::init(format);
}
