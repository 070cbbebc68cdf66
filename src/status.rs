//! Status composition and rendering
//!
//! Puts the pieces together: locate the project root, read the project name,
//! target, stage, and (for the settings variant) the offline flag, then render
//! the one-line colored summary.

use std::path::{Path, PathBuf};

use console::Style;
use tracing::debug;

use crate::config::{
    ConfigError, SettingsEnv, StatusConfig, MANIFEST_FILE, SETTINGS_FILE, TARGET_FILE,
};
use crate::fields::read_field;
use crate::locate::find_project_root;

/// Everything the status line displays for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStatus {
    /// Project root directory
    pub root: PathBuf,

    /// Project name from the manifest
    pub project: String,

    /// Selected build target, if any
    pub target: Option<String>,

    /// Selected build stage, if any
    pub stage: Option<String>,

    /// Offline flag from the user-level settings (settings variant only)
    pub offline: bool,
}

/// Gathers the status of the project enclosing `start_dir`.
///
/// Returns `Ok(None)` when `start_dir` is not inside a tracked project or the
/// manifest has no usable project name; both cases are ordinary, not errors.
/// Missing or unreadable target and settings files degrade to absent fields.
/// The only error is [`ConfigError::SettingsHomeUnset`], raised by the
/// settings variant when neither `SIDE_HOME` nor `HOME` is available.
pub fn compose_status(
    config: &StatusConfig,
    start_dir: &Path,
    env: &SettingsEnv,
) -> Result<Option<ProjectStatus>, ConfigError> {
    let Some(root) = find_project_root(start_dir, config.marker_dir) else {
        return Ok(None);
    };
    let marker = root.join(config.marker_dir);

    let Some(project) = read_field(&marker.join(MANIFEST_FILE), "project") else {
        debug!(root = %root.display(), "manifest has no usable project field");
        return Ok(None);
    };

    let offline = if config.settings_lookup {
        let settings_home = env.settings_home()?;
        read_field(&settings_home.join(SETTINGS_FILE), "offline").as_deref() == Some("true")
    } else {
        false
    };

    let target_file = marker.join(TARGET_FILE);
    let target = read_field(&target_file, "target");
    let stage = read_field(&target_file, "stage");

    Ok(Some(ProjectStatus {
        root,
        project,
        target,
        stage,
        offline,
    }))
}

impl ProjectStatus {
    /// Renders the one-line colored status.
    ///
    /// Present values are cyan/bold, the `no target`/`no stage` placeholders
    /// and the trailing ` offline ` marker are yellow/bold, and every colored
    /// span carries its own reset. Styling is forced: the tool lives in shell
    /// prompts, where stdout is almost never a terminal.
    pub fn render(&self) -> String {
        let value = Style::new().cyan().bold().force_styling(true);
        let muted = Style::new().yellow().bold().force_styling(true);

        let target = match &self.target {
            Some(target) => value.apply_to(target.as_str()),
            None => muted.apply_to("no target"),
        };
        let stage = match &self.stage {
            Some(stage) => value.apply_to(stage.as_str()),
            None => muted.apply_to("no stage"),
        };

        let mut line = format!(
            "{} : {} : {}",
            value.apply_to(self.project.as_str()),
            target,
            stage
        );
        if self.offline {
            // Spacing inside the span is deliberate, it matches the output
            // shells already parse.
            line.push(' ');
            line.push_str(&muted.apply_to(" offline ").to_string());
        }
        line
    }
}
