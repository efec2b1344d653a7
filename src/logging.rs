use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Sets up file logging under the config directory; the terminal itself
/// belongs to the UI. Returns the guard that flushes the writer on drop,
/// or `None` when no home directory is available.
pub fn init() -> Option<WorkerGuard> {
    let dir = crate::app::persistence::config_dir()?;
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::never(dir, "nlsh-tour.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let initialized = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .is_ok();

    initialized.then_some(guard)
}
