use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

/// Default capacity of each actor's request channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Runtime configuration for the order system.
///
/// Everything has a sensible default; [`SystemConfig::from_env`] lets a
/// deployment override parts of it without recompiling.
#[derive(Debug, Clone)]
pub struct SystemConfig {
    /// Capacity of each actor's request channel.
    pub channel_capacity: usize,
    /// Directory for JSON snapshots. `None` keeps all state in memory.
    pub data_dir: Option<PathBuf>,
    /// Artificial delay applied before each service operation, to make the
    /// demo feel like a remote backend. `None` disables it.
    pub simulated_latency: Option<Duration>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            data_dir: None,
            simulated_latency: None,
        }
    }
}

impl SystemConfig {
    /// Builds a config from the environment:
    ///
    /// - `BAZAAR_CHANNEL_CAPACITY` - actor channel capacity
    /// - `BAZAAR_DATA_DIR` - snapshot directory (unset = in-memory only)
    /// - `BAZAAR_LATENCY_MS` - simulated latency in milliseconds
    ///
    /// Unparseable values are logged and fall back to the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("BAZAAR_CHANNEL_CAPACITY") {
            match raw.parse::<usize>() {
                Ok(capacity) if capacity > 0 => config.channel_capacity = capacity,
                _ => warn!(%raw, "Ignoring invalid BAZAAR_CHANNEL_CAPACITY"),
            }
        }

        if let Ok(dir) = std::env::var("BAZAAR_DATA_DIR") {
            if !dir.trim().is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        if let Ok(raw) = std::env::var("BAZAAR_LATENCY_MS") {
            match raw.parse::<u64>() {
                Ok(0) => {}
                Ok(ms) => config.simulated_latency = Some(Duration::from_millis(ms)),
                Err(_) => warn!(%raw, "Ignoring invalid BAZAAR_LATENCY_MS"),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_in_memory() {
        let config = SystemConfig::default();
        assert_eq!(config.channel_capacity, DEFAULT_CHANNEL_CAPACITY);
        assert!(config.data_dir.is_none());
        assert!(config.simulated_latency.is_none());
    }
}
