//! Backend bridge settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// `host:port` of the compositor backend.
    pub backend: String,
    /// Display refresh rate driving the tick loop (valid range: 1-240).
    pub refresh_hz: u32,
    /// Collapse queued `window_map` commands for the same window before flush.
    pub coalesce_window_maps: bool,
}

impl BridgeConfig {
    /// Delay between a completed tick and the next one.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(1) / self.refresh_hz.max(1)
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            backend: "127.0.0.1:7400".into(),
            refresh_hz: 60,
            coalesce_window_maps: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_interval_from_hz() {
        let config = BridgeConfig {
            refresh_hz: 50,
            ..Default::default()
        };
        assert_eq!(config.refresh_interval(), Duration::from_millis(20));
    }

    #[test]
    fn zero_hz_does_not_divide_by_zero() {
        let config = BridgeConfig {
            refresh_hz: 0,
            ..Default::default()
        };
        assert_eq!(config.refresh_interval(), Duration::from_secs(1));
    }
}
