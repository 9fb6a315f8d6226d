use tracing_subscriber::EnvFilter;

/// Initialize tracing from the CLI verbosity level.
///
/// 0 -> warn, 1 (-v) -> info, 2 (-vv) -> debug, 3+ -> trace.
/// `RUST_LOG` overrides the flag when set.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fedholidays={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
