// ============================================================================
// Numeric Module
// Error types and numeric-capability implementations
// ============================================================================
//
// This module provides:
// - NumericError: Error types for container operations
// - NumericValue implementations for primitive integers, floats and Decimal
//
// Design principles:
// - Every conversion is a value conversion owned by the type itself
// - All fallible operations return Result (no panics)

mod conversions;
mod errors;

pub use errors::{NumericError, NumericResult};
