//! Logging setup for the tracklist binary.
//!
//! Without `--dev` only warnings reach stderr, since stdout belongs to the display.
//! With `--dev` everything goes to `logs/tracklist.log*`, rotated daily. The
//! appender's worker guard is parked here so the Ctrl+C path can flush it before
//! exiting the process.

use std::path::Path;
use std::sync::Mutex;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "tracklist.log";

static LOG_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);

pub fn init_logging(dev: bool) -> anyhow::Result<()> {
    if !dev {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(false)
            .with_env_filter(filter)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        return Ok(());
    }

    let log_dir = Path::new(LOG_DIR);
    std::fs::create_dir_all(log_dir)?;

    // Daily rotating file appender
    let file_appender = tracing_appender::rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tracklist=debug"));

    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    park_guard(guard);

    eprintln!("🔧 Dev mode: debug output in {}", log_dir.join("tracklist.log*").display());
    Ok(())
}

/// Keep the appender worker alive until `flush` is called.
pub fn park_guard(guard: WorkerGuard) {
    if let Ok(mut slot) = LOG_GUARD.lock() {
        *slot = Some(guard);
    }
}

/// Drop the parked guard, which blocks until buffered lines are written.
///
/// Returns whether there was anything to flush. Safe to call from the signal
/// thread and more than once.
pub fn flush() -> bool {
    let guard = match LOG_GUARD.lock() {
        Ok(mut slot) => slot.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    };
    guard.is_some()
}
