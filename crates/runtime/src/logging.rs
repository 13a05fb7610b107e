use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// `~/.ideinfo/logs`, or `./.ideinfo/logs` when there is no home directory.
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".ideinfo/logs")
}

/// Installs the global subscriber: a daily `<component>.<date>` file under
/// [`log_dir`] plus, when `to_stderr` is set, a colored stderr copy for
/// `ideinfo --verbose`.
///
/// Returns `None` if a subscriber is already installed. Keep the guard alive
/// until exit or buffered lines are lost.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<WorkerGuard> {
    let dir = log_dir();
    // A missing log directory only loses the file output.
    let _ = std::fs::create_dir_all(&dir);

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&dir, component));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);
    let stderr_layer = to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .ok()
        .map(|_| guard)
}
