//! System-wide constants for tickmatch.

/// Default API listen port.
pub const DEFAULT_API_PORT: u16 = 8080;

/// Default `tracing` filter when neither `RUST_LOG` nor
/// `TICKMATCH_LOG_FILTER` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Prefix of the environment variables read into `ApiConfig`.
pub const ENV_PREFIX: &str = "TICKMATCH";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "tickmatch";
