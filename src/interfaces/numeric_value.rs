// ============================================================================
// Numeric Value Interface
// Defines the numeric-convertible capability required by bounded containers
// ============================================================================

/// Capability of converting a value to a 64-bit float.
///
/// This is the bound placed on [`NumberBox`](crate::domain::NumberBox). Any
/// type that can state how it maps itself onto `f64` qualifies: fixed-width
/// integers, floats, and arbitrary-precision decimals.
///
/// The conversion is owned by the implementing type, so averaging never needs
/// to guess the concrete type of a stored value.
///
/// # Precision
/// Conversions only need to be "lossless enough" for averaging. Integers wider
/// than 53 bits and high-precision decimals round to the nearest `f64`.
pub trait NumericValue {
    /// Convert this value to `f64`.
    fn to_double(&self) -> f64;
}

impl<T: NumericValue + ?Sized> NumericValue for &T {
    #[inline]
    fn to_double(&self) -> f64 {
        (**self).to_double()
    }
}
