use std::path::PathBuf;

use tracing::debug;
use tracing_appender::non_blocking::{self, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter, Targets};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{self, Layer};

/// Environment variable holding an `EnvFilter` directive for stderr logs.
pub const LOG_ENV_VAR: &str = "NOTEBOX_LOG";

/// Installs the global subscriber.
///
/// Human-readable logs go to stderr so they never mix with the command
/// output on stdout. When `log_dir` is set, every `notebox_*` event at debug
/// level or above is also written as JSON to a daily rolling file.
pub fn init_tracing(verbose: bool, log_dir: Option<PathBuf>) -> anyhow::Result<Guard> {
    let stderr_filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(stderr_filter);

    let (file_layer, guard) = match log_dir {
        Some(log_dir) => {
            let (writer, guard) = prepare_writer(log_dir);
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_timer(tracing_subscriber::fmt::time::uptime())
                .with_thread_ids(false)
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_writer(writer)
                .with_filter(Targets::new().with_target("notebox", LevelFilter::DEBUG));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    debug!("Logging system initialized");
    Ok(Guard(guard))
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "notebox=debug" } else { "warn" }
}

fn prepare_writer(log_path: PathBuf) -> (non_blocking::NonBlocking, WorkerGuard) {
    let append = tracing_appender::rolling::daily(log_path, "notebox.log");
    tracing_appender::non_blocking(append)
}

/// Keeps the background log writer alive; logs are flushed when dropped.
pub struct Guard(#[allow(dead_code)] Option<WorkerGuard>);
