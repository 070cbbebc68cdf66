//! `side-status`: the `.side` variant, with the user-level settings lookup.

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
    debug!("side-status v{} starting", side_status::VERSION);

    // An unreadable working directory is the same as not being in a project.
    let Ok(cwd) = env::current_dir() else {
        return Ok(0);
    };

    let config = StatusConfig::side();
    let settings_env = SettingsEnv::from_process();

    let status =
        compose_status(&config, &cwd, &settings_env).context("composing project status")?;
    if let Some(status) = status {
        println!("{}", status.render());
    }

    Ok(0)
}
