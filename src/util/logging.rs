//! Structured logging setup for side-status
//!
//! The status line is the only thing allowed on stdout, so everything the
//! `tracing` subscriber emits goes to stderr. The tool runs embedded in shell
//! prompts, so the default level is `error`; set `SIDE_STATUS_LOG_LEVEL` (or
//! `RUST_LOG`) to see the locator and field lookups at work.
//!
//! # Example
//!
//! ```no_run
//! use side_status::util::logging;
//!
//! logging::init_from_env();
//!
//! use tracing::debug;
//! debug!("looking for a project root");
//! ```

use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Ensures logging is only initialized once
static INIT: Once = Once::new();

const DEFAULT_LOG_LEVEL: &str = "error";

/// Parses a log level from a string
///
/// # Example
///
/// ```
/// use side_status::util::logging::parse_level;
/// use tracing::Level;
///
/// assert_eq!(parse_level("debug"), Level::DEBUG);
/// assert_eq!(parse_level("INFO"), Level::INFO);
/// assert_eq!(parse_level("invalid"), Level::ERROR);
/// ```
pub fn parse_level(level_str: &str) -> Level {
    match level_str.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => {
            eprintln!(
                "Invalid log level '{}', defaulting to ERROR. Valid levels: trace, debug, info, warn, error",
                level_str
            );
            Level::ERROR
        }
    }
}

/// Initializes the logging system at the given level.
///
/// Subsequent calls are ignored. `RUST_LOG` takes precedence over `level`
/// when set.
pub fn init_with_level(level: Level) {
    INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();

        if env::var("RUST_LOG").is_err() {
            filter = filter.add_directive(format!("side_status={}", level).parse().unwrap());
        }

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    });
}

/// Initializes logging from `SIDE_STATUS_LOG_LEVEL`, defaulting to `error`.
pub fn init_from_env() {
    let level_str =
        env::var("SIDE_STATUS_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
    init_with_level(parse_level(&level_str));
}
