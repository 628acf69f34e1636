use crate::config::{LogFormat, LoggingSection};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATE_TARGET: &str = "backup_model";

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={},warn", CRATE_TARGET, level)))
}

fn init_compact(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn init_json(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

pub fn init_cli_logger(verbose: bool) {
    init_compact(env_filter(if verbose { "debug" } else { "info" }));
}

/// JSON lines, one event per line.
pub fn init_json_logger() {
    init_json(env_filter("info"));
}

/// Pick format and level from the `[logging]` section. `verbose` wins over
/// the configured level. `RUST_LOG` wins over both.
pub fn init_from_config(logging: &LoggingSection, verbose: bool) {
    let level = if verbose {
        "debug".to_string()
    } else {
        logging
            .level
            .as_deref()
            .unwrap_or("info")
            .to_ascii_lowercase()
    };

    match logging.format {
        LogFormat::Compact => init_compact(env_filter(&level)),
        LogFormat::Json => init_json(env_filter(&level)),
    }
}
