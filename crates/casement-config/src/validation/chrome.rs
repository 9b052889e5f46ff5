//! Chrome, placement and screen validation.

use crate::schema::CasementConfig;

use super::helpers::validate_range;

pub(crate) fn validate_chrome(errors: &mut Vec<String>, config: &CasementConfig) {
    validate_range(
        errors,
        "chrome.border_width",
        config.chrome.border_width,
        0,
        64,
    );
    validate_range(errors, "chrome.border_base", config.chrome.border_base, 0, 16);
    validate_range(errors, "chrome.min_size", config.chrome.min_size, 1, 2000);
}

/// The anchor must itself satisfy the title-bar band minimum.
pub(crate) fn validate_placement(errors: &mut Vec<String>, config: &CasementConfig) {
    validate_range(errors, "placement.anchor_x", config.placement.anchor_x, 0, 16384);
    validate_range(errors, "placement.anchor_y", config.placement.anchor_y, 0, 16384);
    if config.placement.anchor_y < config.chrome.border_width {
        errors.push(format!(
            "placement.anchor_y = {} is inside the title-bar band (chrome.border_width = {})",
            config.placement.anchor_y, config.chrome.border_width
        ));
    }
}

/// A maximized window must still be at least `min_size` on both axes.
pub(crate) fn validate_screen(errors: &mut Vec<String>, config: &CasementConfig) {
    let chrome = &config.chrome;
    let min_width = chrome.min_size + chrome.border_base * 2;
    let min_height = chrome.min_size + chrome.border_width + chrome.border_base * 2;
    validate_range(errors, "screen.width", config.screen.width, min_width, 16384);
    validate_range(errors, "screen.height", config.screen.height, min_height, 16384);
}
