const DEFAULT_FILTER: &str = "info";

/// Install the global tracing subscriber, honoring `RUST_LOG`.
/// Module code logs through `log::` macros; the LogTracer bridge routes
/// them into tracing.
pub fn init_tracing_from_env() {
    let _ = tracing_log::LogTracer::init();
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into());
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_level(true)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
