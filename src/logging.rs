use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Default directives for a `-v` count.
pub fn verbosity_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn,healbuddy=info",
        1 => "info,healbuddy=debug",
        _ => "debug,healbuddy=trace",
    }
}

/// Pick the filter: `HEALBUDDY_LOG`, then `RUST_LOG`, then the configured
/// level, then the verbosity count.
pub fn build_filter(configured: Option<&str>, verbose: u8) -> EnvFilter {
    select_filter(
        std::env::var("HEALBUDDY_LOG").ok().as_deref(),
        std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
        configured,
        verbose,
    )
}

/// The first source that parses wins; invalid directives fall through.
pub fn select_filter(
    app_env: Option<&str>,
    rust_log: Option<&str>,
    configured: Option<&str>,
    verbose: u8,
) -> EnvFilter {
    [app_env, rust_log, configured]
        .into_iter()
        .flatten()
        .find_map(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity_directives(verbose)))
}

/// Send tracing output to `path`. The terminal belongs to the UI, so nothing
/// is written to stdout or stderr. Keep the guard alive until exit.
pub fn init_file(path: &Path, filter: EnvFilter) -> Result<WorkerGuard> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .context("Log file path has no file name")?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init();

    Ok(guard)
}

/// Plain stderr logging for the one-shot commands.
pub fn init_stderr(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
