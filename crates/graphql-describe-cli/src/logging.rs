const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Install the stderr `tracing` subscriber that backs the library's `log`
/// output.
pub(crate) fn setup_logger(verbose: bool) {
    let (log_level, warning) =
        if verbose {
            (tracing::Level::DEBUG, None)
        } else {
            log_level_from_env(std::env::var("LOG_LEVEL").ok().as_deref())
        };

    // Diagnostics go to stderr so `describe` output stays pipeable.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// Map a `LOG_LEVEL` value to a level, plus a warning when the value is not
/// recognized.
pub(crate) fn log_level_from_env(
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    match env_val.map(str::trim) {
        Some("DEBUG" | "debug" | "VERBOSE" | "verbose") => (tracing::Level::DEBUG, None),
        Some("INFO" | "info") => (tracing::Level::INFO, None),
        Some("TRACE" | "trace") => (tracing::Level::TRACE, None),
        Some("WARN" | "warn") => (tracing::Level::WARN, None),
        Some(other) => (
            DEFAULT_LOG_LEVEL,
            Some(format!("Invalid `LOG_LEVEL` environment variable value: `{other}`")),
        ),
        None => (DEFAULT_LOG_LEVEL, None),
    }
}
