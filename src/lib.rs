// ============================================================================
// Bounded Box Library
// Generic numeric containers with compile-time bounded averaging
// ============================================================================

//! # Bounded Box
//!
//! Single-value containers whose numeric operations are checked at compile
//! time instead of at runtime.
//!
//! ## Features
//!
//! - **Bounded generics**: `NumberBox<T>` only accepts types implementing
//!   [`NumericValue`](interfaces::NumericValue)
//! - **Cast-free averaging** through each type's own `f64` conversion
//! - **Integers, floats and decimals** (`rust_decimal::Decimal`) out of the box
//! - **Explicit empty state**: averaging an empty box is an error, not garbage
//!
//! ## Example
//!
//! ```rust
//! use bounded_box::prelude::*;
//!
//! let mut a = NumberBox::new();
//! a.set_value(2i32);
//! let b = NumberBox::with_value(4i32);
//!
//! assert_eq!(a.average(&b), Ok(3.0));
//!
//! let empty: NumberBox<i32> = NumberBox::new();
//! assert_eq!(a.average(&empty), Err(NumericError::InvalidState));
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{AverageConfig, AveragePolicy, GenericBox, NumberBox};
    pub use crate::interfaces::NumericValue;
    pub use crate::numeric::{NumericError, NumericResult};
}
