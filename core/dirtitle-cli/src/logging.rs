//! Logging initialization for the dirtitle binary.
//!
//! Stdout belongs to the title contract, so nothing may ever log there. By
//! default the process is silent; `DIRTITLE_LOG_DIR` opts into a non-blocking
//! file appender, and `RUST_LOG` alone opts into stderr logging.

use std::env;
use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Directory receiving `dirtitle.log` when file logging is enabled.
pub const LOG_DIR_ENV: &str = "DIRTITLE_LOG_DIR";

const LOG_FILE: &str = "dirtitle.log";

/// Initializes the tracing subscriber.
///
/// The returned guard must be held for the process lifetime so buffered log
/// lines are flushed on exit.
pub fn init() -> Option<WorkerGuard> {
    if let Some(dir) = env::var_os(LOG_DIR_ENV) {
        std::fs::create_dir_all(&dir).ok();
        let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        tracing_subscriber::fmt()
            .with_env_filter(env_filter("info"))
            .with_writer(writer)
            .with_ansi(false)
            .init();
        return Some(guard);
    }

    if env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter("warn"))
            .with_writer(io::stderr)
            .init();
    }

    None
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
