use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Diagnostics go to stderr so the prompt
/// flow on stdout stays machine-readable.
pub fn init(log_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
