use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Log directory: `<cache_dir>/popcorn/logs`.
pub fn log_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("popcorn").join("logs"))
}

/// Filter directive for a `-v` count: 0 = info, 1 = debug, 2+ = trace.
pub fn default_filter(verbose_level: u8) -> &'static str {
    match verbose_level {
        0 => "popcorn=info",
        // -v: debug for our crates but keep the HTTP stack quiet
        1 => "popcorn=debug,hyper=warn,reqwest=warn",
        _ => "trace",
    }
}

/// Install a file logger. The terminal belongs to the UI, so records go to a
/// daily-rolling file instead of stderr. `RUST_LOG` overrides `-v`.
///
/// The returned guard must live until exit or buffered records are lost.
pub fn init_logging(verbose_level: u8) -> Result<Option<WorkerGuard>> {
    let Some(dir) = log_dir() else {
        return Ok(None);
    };
    std::fs::create_dir_all(&dir)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose_level)));

    let appender = tracing_appender::rolling::daily(&dir, "popcorn.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;

    Ok(Some(guard))
}
