use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise JSON structured logging with an `RUST_LOG` environment filter,
/// defaulting to `info`.
///
/// The engine itself only emits diagnostics for per-asset and pairwise
/// failure isolation; callers embedding it in a larger application will
/// usually install their own subscriber instead.
pub fn init_json_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::INFO.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init()
}
