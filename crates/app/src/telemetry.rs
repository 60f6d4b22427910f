//! Tracing setup. The desktop shell calls [`init`] once at startup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber with an env-filter.
///
/// `RUST_LOG` overrides the default of `causa=debug`.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "causa=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
