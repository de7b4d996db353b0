use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialise logging. Without debug logging the level is fixed at `info`;
/// with it, `RUST_LOG` may override the default `debug` level.
///
/// When `log_file` is given, output is appended to that file through a
/// non-blocking writer instead of stdout. Keep the returned guard alive for
/// as long as log lines should reach the file.
pub fn init(debug: bool, log_file: Option<PathBuf>) -> Option<WorkerGuard> {
    let level = if debug { "debug" } else { "info" };

    // `RUST_LOG` is only honoured with debug logging on.
    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let Some(path) = log_file else {
        let _ = builder.try_init();
        return None;
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let name = path
        .file_name()
        .map(|n| n.to_owned())
        .unwrap_or_else(|| "drag_and_draw.log".into());
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
    let _ = builder.with_writer(writer).with_ansi(false).try_init();
    Some(guard)
}
