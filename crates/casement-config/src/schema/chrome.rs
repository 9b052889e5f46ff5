//! Frame chrome, initial placement and screen geometry.

use serde::{Deserialize, Serialize};

/// Client-drawn decoration sizes in pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Height of the title-bar band above the content area (valid range: 0-64).
    pub border_width: u32,
    /// Thickness of the resize border around the frame (valid range: 0-16).
    pub border_base: u32,
    /// Smallest content width/height a resize may produce (valid range: 1-2000).
    pub min_size: u32,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            border_width: 26,
            border_base: 3,
            min_size: 150,
        }
    }
}

/// Where a freshly mapped window reported at (0,0) is moved to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub anchor_x: u32,
    pub anchor_y: u32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            anchor_x: 100,
            anchor_y: 100,
        }
    }
}

/// Available screen area used for maximize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_config_defaults() {
        let config = ChromeConfig::default();
        assert_eq!(config.border_width, 26);
        assert_eq!(config.border_base, 3);
        assert_eq!(config.min_size, 150);
    }

    #[test]
    fn placement_partial_toml() {
        let config: PlacementConfig = toml::from_str("anchor_y = 64").unwrap();
        assert_eq!(config.anchor_x, 100);
        assert_eq!(config.anchor_y, 64);
    }
}
