use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// Events go to stderr so the rendered pass list keeps stdout to
/// itself. `RUST_LOG` refines the configured base level.
pub fn init_logging(level: &str) {
    let level = match level {
        "trace" => level,
        "debug" => level,
        "info" => level,
        "warn" => level,
        "error" => level,
        _ => "info",
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.parse().unwrap())
        .parse_lossy(&std::env::var("RUST_LOG").unwrap_or_default());

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_layer).init();
}
