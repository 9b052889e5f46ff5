//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod chrome;
mod helpers;
mod misc;


use crate::schema::CasementConfig;
use casement_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CasementConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    chrome::validate_chrome(&mut errors, config);
    chrome::validate_placement(&mut errors, config);
    chrome::validate_screen(&mut errors, config);
    misc::validate_bridge(&mut errors, config);
    misc::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
