//! Variant configuration for the status tools
//!
//! Two near-identical tools historically shipped as separate sources, one
//! keyed on a `.side` marker directory with a user-level settings lookup, the
//! other keyed on `.project` without one. [`StatusConfig`] captures the two
//! points of variation so both binaries share the same composition code.
//!
//! # Environment Variables
//!
//! The settings variant depends on two process environment variables, read
//! once by the binary and handed to the library as an explicit [`SettingsEnv`]:
//! - `SIDE_HOME`: settings-home override, used when set and non-empty
//! - `HOME`: fallback base; the settings home becomes `$HOME/.side`

use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Marker directory of the side variant, also the settings-home directory
/// name under `$HOME`.
pub const SIDE_MARKER_DIR: &str = ".side";

/// Marker directory of the project variant.
pub const PROJECT_MARKER_DIR: &str = ".project";

/// Manifest file name inside the marker directory.
pub const MANIFEST_FILE: &str = "manifest";

/// Target/stage file name inside the marker directory.
pub const TARGET_FILE: &str = ".target";

/// Settings file name inside the settings home.
pub const SETTINGS_FILE: &str = "settings";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Settings home cannot be resolved
    #[error("cannot resolve settings home: neither SIDE_HOME nor HOME is set")]
    SettingsHomeUnset,
}

/// Selects which variant of the status tool to run.
#[derive(Debug, Clone)]
pub struct StatusConfig {
    /// Marker directory identifying a project root
    pub marker_dir: &'static str,

    /// Consult the user-level settings file for the offline flag
    pub settings_lookup: bool,
}

impl StatusConfig {
    /// The `.side` variant: settings lookup enabled.
    pub fn side() -> Self {
        Self {
            marker_dir: SIDE_MARKER_DIR,
            settings_lookup: true,
        }
    }

    /// The `.project` variant: no settings lookup.
    pub fn project() -> Self {
        Self {
            marker_dir: PROJECT_MARKER_DIR,
            settings_lookup: false,
        }
    }
}

/// Environment values the settings lookup depends on.
///
/// Passed explicitly so [`compose_status`](crate::compose_status) never reads
/// ambient process state and tests never have to mutate the real environment.
#[derive(Debug, Clone, Default)]
pub struct SettingsEnv {
    pub side_home: Option<String>,
    pub home: Option<String>,
}

impl SettingsEnv {
    /// Captures `SIDE_HOME` and `HOME` from the process environment.
    pub fn from_process() -> Self {
        Self {
            side_home: env::var("SIDE_HOME").ok(),
            home: env::var("HOME").ok(),
        }
    }

    /// Resolves the directory holding the user-level settings file.
    ///
    /// `SIDE_HOME` wins when set and non-empty; otherwise `$HOME/.side`. With
    /// neither variable usable there is no sensible location to probe, so
    /// this is the one configuration error the crate reports instead of
    /// degrading silently.
    pub fn settings_home(&self) -> Result<PathBuf, ConfigError> {
        if let Some(side_home) = self.side_home.as_deref() {
            if !side_home.is_empty() {
                return Ok(PathBuf::from(side_home));
            }
        }
        match self.home.as_deref() {
            Some(home) if !home.is_empty() => Ok(PathBuf::from(home).join(SIDE_MARKER_DIR)),
            _ => Err(ConfigError::SettingsHomeUnset),
        }
    }
}
