use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "ecoestate=info";

/// Installs the global fmt subscriber. Honors `RUST_LOG`, falling back to
/// `ecoestate=info`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed (tests); keep the existing one then.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
