/// Initializes the tracing/logging infrastructure for the application.
///
/// Structured logging via the `tracing` crate with environment-based
/// filtering: set `RUST_LOG` to control verbosity.
/// - `RUST_LOG=info` - populated models and demo flow
/// - `RUST_LOG=debug` - per-key assignment outcomes, skipped keys included
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Application started");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
