//! Validation for the bridge and logging sections.

use crate::schema::CasementConfig;

use super::helpers::{validate_not_blank, validate_range};

pub(crate) fn validate_bridge(errors: &mut Vec<String>, config: &CasementConfig) {
    validate_range(errors, "bridge.refresh_hz", config.bridge.refresh_hz, 1, 240);
    validate_not_blank(errors, "bridge.backend", &config.bridge.backend);
    if !config.bridge.backend.trim().is_empty() && !config.bridge.backend.contains(':') {
        errors.push(format!(
            "bridge.backend = {:?} must be host:port",
            config.bridge.backend
        ));
    }
}

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &CasementConfig) {
    validate_not_blank(errors, "logging.filter", &config.logging.filter);
}
