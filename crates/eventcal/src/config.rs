use std::{env, str::FromStr, time::Duration};

/// Which interval index backs the in-memory store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IndexKind {
    /// Linear scan over every stored event.
    #[default]
    Linear,
    /// Start-ordered BTreeMap, logarithmic lookups.
    BTree,
}

impl FromStr for IndexKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(IndexKind::Linear),
            "btree" => Ok(IndexKind::BTree),
            other => Err(format!("unknown index kind: {other}")),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interval index used by the store (default: linear)
    pub index_kind: IndexKind,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Seed a few demo events on startup (default: false)
    pub seed_demo: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVENTCAL_INDEX` - `linear` or `btree` (default: linear)
    /// - `EVENTCAL_REQUEST_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    /// - `EVENTCAL_SEED_DEMO` - `1`/`true` to seed demo events (default: false)
    pub fn from_env() -> Self {
        Self {
            index_kind: env::var("EVENTCAL_INDEX")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            request_timeout_seconds: env::var("EVENTCAL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            seed_demo: env::var("EVENTCAL_SEED_DEMO")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_kind: IndexKind::Linear,
            request_timeout_seconds: 10,
            seed_demo: false,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
