//! Log filter shared by the binary and its tests.

use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or invalid. Request logs come from `tower_http` at INFO.
pub const DEFAULT_LOG_FILTER: &str = "simple_api=info,tower_http=info";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
