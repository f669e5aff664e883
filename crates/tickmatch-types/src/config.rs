//! Configuration for the tickmatch API service.
//!
//! Values come from `TICKMATCH_`-prefixed environment variables layered over
//! built-in defaults, e.g. `TICKMATCH_LISTEN_ADDR=127.0.0.1:9000`.

use std::net::{Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::{Result, TickmatchError, constants};

/// Log output format for the service binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LogFormat {
    /// Human-readable, one line per event.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = TickmatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(TickmatchError::Configuration(format!(
                "unknown log format {other:?} (expected pretty or json)"
            ))),
        }
    }
}

impl TryFrom<String> for LogFormat {
    type Error = TickmatchError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Configuration for one API process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address to listen on for the REST API.
    pub listen_addr: SocketAddr,
    pub log_format: LogFormat,
    /// `tracing_subscriber::EnvFilter` directives, used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, constants::DEFAULT_API_PORT)),
            log_format: LogFormat::default(),
            log_filter: constants::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ApiConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Read configuration from the given variables instead of the process
    /// environment. Keys carry the same `TICKMATCH_` prefix.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<::config::Map<String, String>>();
        Self::load(Some(vars))
    }

    fn load(vars: Option<::config::Map<String, String>>) -> Result<Self> {
        let defaults = Self::default();
        let settings = ::config::Config::builder()
            .set_default("listen_addr", defaults.listen_addr.to_string())?
            .set_default("log_format", "pretty")?
            .set_default("log_filter", defaults.log_filter)?
            .add_source(::config::Environment::with_prefix(constants::ENV_PREFIX).source(vars))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
