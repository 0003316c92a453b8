use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr so rendered views on
/// stdout stay clean; `RUST_LOG` overrides the default filter.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("pizzashop_panel=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
