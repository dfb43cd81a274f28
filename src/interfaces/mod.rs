// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod numeric_value;

pub use numeric_value::NumericValue;
