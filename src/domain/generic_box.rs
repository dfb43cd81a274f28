// ============================================================================
// Generic Box
// Single-value container with an unbounded type parameter
// ============================================================================

use super::NumberBox;
use crate::interfaces::NumericValue;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Holds at most one value of any type.
///
/// Unlike [`NumberBox`], `T` is unconstrained, so the box offers storage only.
/// There is no `average`: averaging needs the numeric capability, and a
/// `GenericBox<String>` has none to offer.
///
/// ```compile_fail
/// use bounded_box::domain::GenericBox;
///
/// let a = GenericBox::with_value(5.0);
/// let b = GenericBox::with_value(8.0);
/// let _ = a.average(&b);
/// ```
///
/// When the contents do satisfy the bound, [`into_numeric`](Self::into_numeric)
/// moves them into a `NumberBox`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GenericBox<T> {
    value: Option<T>,
}

impl<T> GenericBox<T> {
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

    pub fn set_value(&mut self, value: T) {
        tracing::trace!(replaced = self.is_set(), "generic box set");
        self.value = Some(value);
    }

    pub fn replace(&mut self, value: T) -> Option<T> {
        self.value.replace(value)
    }

    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Transform the contents, keeping an empty box empty.
    pub fn map<U, F>(self, f: F) -> GenericBox<U>
    where
        F: FnOnce(T) -> U,
    {
        GenericBox {
            value: self.value.map(f),
        }
    }
}

impl<T: NumericValue> GenericBox<T> {
    /// Move the contents into a bounded [`NumberBox`].
    pub fn into_numeric(self) -> NumberBox<T> {
        match self.value {
            Some(value) => NumberBox::with_value(value),
            None => NumberBox::new(),
        }
    }
}

impl<T> Default for GenericBox<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<T> for GenericBox<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::with_value(value)
    }
}
