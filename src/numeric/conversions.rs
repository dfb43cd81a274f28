// ============================================================================
// Numeric Conversions
// NumericValue implementations for built-in numeric types
// ============================================================================

use crate::interfaces::NumericValue;
use rust_decimal::Decimal;

macro_rules! impl_numeric_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl NumericValue for $t {
                #[inline]
                fn to_double(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_numeric_value!(i8, i16, i32, i64, i128, isize);
impl_numeric_value!(u8, u16, u32, u64, u128, usize);
impl_numeric_value!(f32, f64);

// ============================================================================
// Conversion from rust_decimal (arbitrary-precision values)
// ============================================================================

impl NumericValue for Decimal {
    /// Convert via `ToPrimitive::to_f64`.
    ///
    /// Decimal's range (about ±7.9e28) always fits in `f64`, so `None` is not
    /// expected; it maps to NaN so the strict policy can still reject it.
    fn to_double(&self) -> f64 {
        use rust_decimal::prelude::ToPrimitive;

        self.to_f64().unwrap_or(f64::NAN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_integers() {
        assert_eq!((-5i8).to_double(), -5.0);
        assert_eq!(300i16.to_double(), 300.0);
        assert_eq!(2i32.to_double(), 2.0);
        assert_eq!(i64::MIN.to_double(), -9_223_372_036_854_775_808.0);
        assert_eq!(42i128.to_double(), 42.0);
        assert_eq!((-1isize).to_double(), -1.0);
    }

    #[test]
    fn test_unsigned_integers() {
        assert_eq!(255u8.to_double(), 255.0);
        assert_eq!(4u32.to_double(), 4.0);
        assert_eq!(u64::MAX.to_double(), 18_446_744_073_709_551_615.0);
        assert_eq!(7usize.to_double(), 7.0);
    }

    #[test]
    fn test_floats() {
        assert_eq!(5.0f64.to_double(), 5.0);
        assert_eq!(0.5f32.to_double(), 0.5);
        assert!(f64::NAN.to_double().is_nan());
        assert!(!f64::INFINITY.to_double().is_finite());
    }

    #[test]
    fn test_decimal() {
        let d = Decimal::new(12345, 2); // 123.45
        assert!((d.to_double() - 123.45).abs() < 1e-12);
        assert_eq!(Decimal::ZERO.to_double(), 0.0);
        assert!(Decimal::MAX.to_double().is_finite());
    }

    #[test]
    fn test_wide_integer_rounds_to_nearest() {
        // 2^53 + 1 is not representable in f64
        let wide = (1i64 << 53) + 1;
        assert_eq!(wide.to_double(), (1i64 << 53) as f64);
    }
}
