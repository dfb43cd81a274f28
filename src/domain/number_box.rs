// ============================================================================
// Number Box
// Single-value container bounded to numeric-convertible types
// ============================================================================

use super::config::AverageConfig;
use crate::interfaces::NumericValue;
use crate::numeric::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Holds at most one value of a numeric-convertible type.
///
/// The `T: NumericValue` bound sits on the type itself, so a box of a
/// non-numeric type cannot be named at all:
///
/// ```compile_fail
/// use bounded_box::domain::NumberBox;
///
/// let _text: NumberBox<String> = NumberBox::new();
/// ```
///
/// Averaging converts each stored value with its own `to_double`, which works
/// for integers, floats and decimals alike.
///
/// # Example
/// ```
/// use bounded_box::domain::NumberBox;
///
/// let mut a = NumberBox::new();
/// a.set_value(5.0);
/// let b = NumberBox::with_value(8.0);
///
/// assert_eq!(a.average(&b).unwrap(), 6.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberBox<T: NumericValue> {
    value: Option<T>,
}

impl<T: NumericValue> NumberBox<T> {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create an empty box.
    #[inline]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Create a box already holding `value`.
    #[inline]
    pub fn with_value(value: T) -> Self {
        Self { value: Some(value) }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if the box holds a value.
    #[inline]
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Borrow the stored value, `None` if never set.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Copy out the stored value, `None` if never set.
    #[inline]
    pub fn get_value(&self) -> Option<T>
    where
        T: Clone,
    {
        self.value.clone()
    }

    /// The stored value converted to `f64`.
    ///
    /// # Errors
    /// Returns `InvalidState` if the box is empty.
    #[inline]
    pub fn to_double(&self) -> NumericResult<f64> {
        self.value
            .as_ref()
            .map(|v| v.to_double())
            .ok_or(NumericError::InvalidState)
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Store `value`, dropping any previous one.
    pub fn set_value(&mut self, value: T) {
        tracing::trace!(replaced = self.is_set(), "number box set");
        self.value = Some(value);
    }

    /// Store `value` and return the previous one.
    pub fn replace(&mut self, value: T) -> Option<T> {
        tracing::trace!(replaced = self.is_set(), "number box replace");
        self.value.replace(value)
    }

    /// Empty the box, returning what it held.
    pub fn take(&mut self) -> Option<T> {
        tracing::trace!(was_set = self.is_set(), "number box take");
        self.value.take()
    }

    /// Empty the box.
    #[inline]
    pub fn clear(&mut self) {
        self.value = None;
    }

    // ========================================================================
    // Averaging
    // ========================================================================

    /// Arithmetic mean of this box's value and `other`'s.
    ///
    /// Computes `(self + other) / 2` on the `f64` conversions, with plain
    /// IEEE-754 semantics.
    ///
    /// # Errors
    /// Returns `InvalidState` if either box is empty.
    pub fn average(&self, other: &NumberBox<T>) -> NumericResult<f64> {
        self.average_with(other, &AverageConfig::default())
    }

    /// Arithmetic mean of two boxes under an explicit configuration.
    ///
    /// # Errors
    /// - `InvalidState` if either box is empty
    /// - `NonFinite` if the policy is strict and an operand is NaN or infinite
    pub fn average_with(
        &self,
        other: &NumberBox<T>,
        config: &AverageConfig,
    ) -> NumericResult<f64> {
        let lhs = self.operand(config)?;
        let rhs = other.operand(config)?;
        let average = (lhs + rhs) / 2.0;

        tracing::debug!(lhs, rhs, average, policy = ?config.policy, "averaged two boxes");
        Ok(average)
    }

    /// Arithmetic mean over a slice of boxes.
    ///
    /// For two boxes this equals [`average`](Self::average).
    ///
    /// # Errors
    /// Returns `InvalidState` if the slice is empty or any box is empty.
    pub fn mean_of(boxes: &[NumberBox<T>]) -> NumericResult<f64> {
        Self::mean_of_with(boxes, &AverageConfig::default())
    }

    /// Arithmetic mean over a slice of boxes under an explicit configuration.
    ///
    /// Operands are summed and then divided. If that sum overflows while every
    /// operand is finite, each operand is divided by the count first, so finite
    /// inputs near `f64::MAX` still give a finite mean.
    ///
    /// # Errors
    /// - `InvalidState` if the slice is empty or any box is empty
    /// - `NonFinite` if the policy is strict and an operand is NaN or infinite
    pub fn mean_of_with(boxes: &[NumberBox<T>], config: &AverageConfig) -> NumericResult<f64> {
        if boxes.is_empty() {
            tracing::debug!("mean requested over no boxes");
            return Err(NumericError::InvalidState);
        }

        let operands = boxes
            .iter()
            .map(|b| b.operand(config))
            .collect::<NumericResult<Vec<f64>>>()?;
        let count = operands.len() as f64;

        let sum: f64 = operands.iter().sum();
        let mean = if sum.is_finite() || operands.iter().any(|v| !v.is_finite()) {
            sum / count
        } else {
            // Intermediate sum overflowed
            operands.iter().map(|v| v / count).sum()
        };

        tracing::debug!(count = boxes.len(), mean, "averaged box slice");
        Ok(mean)
    }

    /// Double value of this box, checked against the configured policy.
    fn operand(&self, config: &AverageConfig) -> NumericResult<f64> {
        let value = self.to_double().inspect_err(|_| {
            tracing::debug!("average requested on an empty box");
        })?;

        if config.rejects_non_finite() && !value.is_finite() {
            tracing::debug!(value, "rejected non-finite operand");
            return Err(NumericError::NonFinite);
        }
        Ok(value)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl<T: NumericValue> Default for NumberBox<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NumericValue> From<T> for NumberBox<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::with_value(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
