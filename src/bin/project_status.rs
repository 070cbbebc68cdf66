//! `project-status`: the `.project` variant, without the settings lookup.

use side_status::util::logging;
use side_status::{compose_status, SettingsEnv, StatusConfig};

use anyhow::Context;
use std::env;
use tracing::{debug, error};

fn main() {
    logging::init_from_env();

    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run() -> anyhow::Result<i32> {
    debug!("project-status v{} starting", side_status::VERSION);

    let Ok(cwd) = env::current_dir() else {
        return Ok(0);
    };

    // This variant never touches the settings home, so the environment it
    // hands over can stay empty.
    let config = StatusConfig::project();
    let settings_env = SettingsEnv::default();

    let status =
        compose_status(&config, &cwd, &settings_env).context("composing project status")?;
    if let Some(status) = status {
        println!("{}", status.render());
    }

    Ok(0)
}
