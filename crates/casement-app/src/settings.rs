//! Runtime settings resolved from the config file and CLI overrides.

use std::time::Duration;

use casement_common::Point;
use casement_config::CasementConfig;
use casement_wm::{ChromeMetrics, Screen};

use crate::cli::Args;

#[derive(Debug, Clone)]
pub struct Settings {
    pub chrome: ChromeMetrics,
    pub screen: Screen,
    pub backend: String,
    pub refresh_interval: Duration,
    pub coalesce_window_maps: bool,
    pub startup_programs: Vec<String>,
    pub read_input: bool,
}

impl Settings {
    pub fn resolve(config: &CasementConfig, args: &Args) -> Self {
        let chrome = ChromeMetrics {
            border_width: px(config.chrome.border_width),
            border_base: px(config.chrome.border_base),
            min_size: px(config.chrome.min_size),
            anchor: Point::new(px(config.placement.anchor_x), px(config.placement.anchor_y)),
        };
        let screen = args.screen.unwrap_or(Screen {
            width: px(config.screen.width),
            height: px(config.screen.height),
        });

        Self {
            chrome,
            screen,
            backend: args
                .backend
                .clone()
                .unwrap_or_else(|| config.bridge.backend.clone()),
            refresh_interval: config.bridge.refresh_interval(),
            coalesce_window_maps: config.bridge.coalesce_window_maps,
            startup_programs: args.run.clone(),
            read_input: !args.no_input,
        }
    }
}

fn px(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn defaults_match_builtin_metrics() {
        let args = Args::try_parse_from(["casement"]).unwrap();
        let settings = Settings::resolve(&CasementConfig::default(), &args);
        assert_eq!(settings.chrome, ChromeMetrics::default());
        assert_eq!(settings.screen, Screen::default());
        assert_eq!(settings.backend, "127.0.0.1:7400");
        assert!(settings.read_input);
    }

    #[test]
    fn cli_overrides_config() {
        let args = Args::try_parse_from([
            "casement",
            "--backend",
            "10.0.0.2:9000",
            "--screen",
            "1280x720",
            "--no-input",
        ])
        .unwrap();
        let mut config = CasementConfig::default();
        config.chrome.border_width = 30;
        config.placement.anchor_x = 64;
        let settings = Settings::resolve(&config, &args);
        assert_eq!(settings.backend, "10.0.0.2:9000");
        assert_eq!(settings.screen.width, 1280);
        assert_eq!(settings.chrome.border_width, 30);
        assert_eq!(settings.chrome.anchor, Point::new(64, 100));
        assert!(!settings.read_input);
    }
}
