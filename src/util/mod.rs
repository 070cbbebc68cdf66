//! Utility modules for side-status
//!
//! Currently this is just the structured logging setup shared by the two
//! binaries.

pub mod logging;

// Re-export commonly used items
pub use logging::{init_from_env, init_with_level, parse_level};
