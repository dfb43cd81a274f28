// ============================================================================
// Domain Models Module
// Contains the value containers and their configuration
// ============================================================================

pub mod config;
pub mod generic_box;
pub mod number_box;

pub use config::{AverageConfig, AveragePolicy};
pub use generic_box::GenericBox;
pub use number_box::NumberBox;
