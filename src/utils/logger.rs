use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// `RUST_LOG` wins; otherwise only this crate's events at `level`.
fn crate_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("potential_jobs={}", level)))
}

/// Installs the global subscriber. Output goes to stderr so command
/// results on stdout stay clean.
pub fn init_logger(level: &str, format: LogFormat) {
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(crate_filter(level));

    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json()).init(),
    }
}

pub fn init_cli_logger(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    init_logger(level, LogFormat::Compact);
}

pub fn init_json_logger(level: &str) {
    init_logger(level, LogFormat::Json);
}
