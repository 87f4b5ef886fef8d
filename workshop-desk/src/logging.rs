//! Logging setup
//!
//! Everything goes to a daily file under `<home>/logs`; only warnings and
//! errors reach stderr so command output on stdout stays clean.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Install the global subscriber; keep the guard alive until exit
pub fn init(home: &Path, verbose: bool) -> anyhow::Result<WorkerGuard> {
    let log_dir = home.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = rolling::daily(&log_dir, "workshop-desk.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = if let Ok(from_env) = EnvFilter::try_from_default_env() {
        from_env
    } else if cfg!(debug_assertions) {
        EnvFilter::new("info,workshop_desk=debug,workshop_client=debug,reqwest=warn,hyper=warn")
    } else {
        EnvFilter::new("info,reqwest=warn,hyper=warn")
    };

    let file_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(non_blocking_file);

    let stderr_level = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let stderr_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_filter(stderr_level);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;

    tracing::debug!(path = %log_dir.display(), "Tracing initialized");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_dir() {
        let home = tempfile::tempdir().unwrap();
        let guard = init(home.path(), false).unwrap();
        tracing::info!("hello from the test");
        drop(guard);

        let logs = home.path().join("logs");
        assert!(logs.is_dir());
        let written = std::fs::read_dir(&logs).unwrap().count();
        assert_eq!(written, 1);
    }
}
