//! Configuration schema types for Casement.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod bridge;
mod chrome;
mod system;

pub use bridge::*;
pub use chrome::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Casement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct CasementConfig {
    pub chrome: ChromeConfig,
    pub placement: PlacementConfig,
    pub screen: ScreenConfig,
    pub bridge: BridgeConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config: CasementConfig = toml::from_str("").unwrap();
        assert_eq!(config.chrome.border_width, 26);
        assert_eq!(config.chrome.border_base, 3);
        assert_eq!(config.chrome.min_size, 150);
        assert_eq!(config.placement.anchor_x, 100);
        assert_eq!(config.screen.width, 1920);
        assert_eq!(config.bridge.backend, "127.0.0.1:7400");
        assert_eq!(config.logging.filter, "casement=info");
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let toml_str = r#"
[chrome]
min_size = 200

[screen]
width = 2560
"#;
        let config: CasementConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chrome.min_size, 200);
        assert_eq!(config.chrome.border_width, 26);
        assert_eq!(config.screen.width, 2560);
        assert_eq!(config.screen.height, 1080);
        assert!(!config.bridge.coalesce_window_maps);
    }
}
