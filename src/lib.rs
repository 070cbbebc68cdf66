//! side-status - shell-prompt status line for side projects
//!
//! This library locates the enclosing project by walking parent directories
//! for a marker directory (`.side` or `.project`) containing a `manifest`
//! file, reads a handful of `key: value` fields from small text files, and
//! renders a one-line colored summary of the project name, build target, and
//! build stage.
//!
//! # Core Concepts
//!
//! - **Marker directory**: a hidden subdirectory whose presence identifies a
//!   directory as a project root
//! - **Manifest**: `<root>/<marker>/manifest`, holding project metadata
//! - **Target file**: `<root>/<marker>/.target`, holding the selected build
//!   target and stage
//! - **Settings file**: user-level `<settings home>/settings`, holding global
//!   preferences such as offline mode
//!
//! Two historical variants of the tool differ only in the marker directory
//! name and whether the settings file is consulted; both are expressed through
//! [`StatusConfig`] over the same code path.
//!
//! # Example Usage
//!
//! ```no_run
//! use side_status::{compose_status, SettingsEnv, StatusConfig};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), side_status::ConfigError> {
//! let config = StatusConfig::side();
//! let env = SettingsEnv::from_process();
//!
//! if let Some(status) = compose_status(&config, Path::new("/work/demo"), &env)? {
//!     println!("{}", status.render());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`locate`]: ancestor walk for the project root
//! - [`fields`]: line-oriented field lookup
//! - [`status`]: status composition and ANSI rendering

// Public modules
pub mod config;
pub mod fields;
pub mod locate;
pub mod status;
pub mod util;

// Re-export key types for convenient access
pub use config::{ConfigError, SettingsEnv, StatusConfig};
pub use fields::read_field;
pub use locate::find_project_root;
pub use status::{compose_status, ProjectStatus};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_side_status() {
        assert_eq!(NAME, "side-status");
    }
}
