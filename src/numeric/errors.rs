// ============================================================================
// Numeric Errors
// Error types for numeric container operations
// ============================================================================

use std::fmt;

/// Errors that can occur when reading or averaging numeric containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// An operand container holds no value
    InvalidState,
    /// An operand converted to NaN or an infinity under the strict policy
    NonFinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidState => {
                write!(f, "invalid state: container holds no value")
            },
            NumericError::NonFinite => {
                write!(f, "non-finite operand: value converts to NaN or infinity")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::InvalidState.to_string(),
            "invalid state: container holds no value"
        );
        assert_eq!(
            NumericError::NonFinite.to_string(),
            "non-finite operand: value converts to NaN or infinity"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::InvalidState, NumericError::InvalidState);
        assert_ne!(NumericError::InvalidState, NumericError::NonFinite);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumericError::InvalidState);
        assert!(err.source().is_none());
    }
}
