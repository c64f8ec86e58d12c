//! Runtime configuration
//!
//! Loaded from environment variables with logged defaults.

use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Lower bound of the simulated latency, milliseconds.
    pub latency_min_ms: u64,
    /// Upper bound of the simulated latency, milliseconds.
    pub latency_max_ms: u64,
    /// Secret used to sign session tokens.
    pub token_secret: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            latency_min_ms: 200,
            latency_max_ms: 500,
            token_secret: "change-me-in-production".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let latency_min_ms = read_millis("WANDER_LATENCY_MIN_MS", defaults.latency_min_ms);
        let latency_max_ms = read_millis("WANDER_LATENCY_MAX_MS", defaults.latency_max_ms);

        let token_secret = std::env::var("WANDER_TOKEN_SECRET").unwrap_or_else(|_| {
            warn!("WANDER_TOKEN_SECRET not set, using default (insecure for production)");
            defaults.token_secret
        });

        Self {
            latency_min_ms,
            latency_max_ms,
            token_secret,
        }
    }

    /// Zero-latency configuration, used by tests and embedders that do not
    /// want the artificial delay.
    pub fn immediate() -> Self {
        Self {
            latency_min_ms: 0,
            latency_max_ms: 0,
            ..Self::default()
        }
    }
}

fn read_millis(var: &str, default: u64) -> u64 {
    match std::env::var(var) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            warn!("Invalid {}={}, using {}ms", var, value, default);
            default
        }),
        Err(_) => default,
    }
}
