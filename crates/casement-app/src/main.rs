mod cli;
mod input;
mod runtime;
mod settings;

use casement_config::CasementConfig;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

fn main() {
    let args = cli::parse();

    // Load config before logging so the filter can come from it; report
    // the failure once the subscriber is up.
    let loaded = match args.config.as_deref() {
        Some(path) => casement_config::load_config_from(path),
        None => casement_config::load_config(),
    };
    let (config, load_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (CasementConfig::default(), Some(e)),
    };

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.filter.clone());
    let directive: Directive = log_directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Casement v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = load_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }

    let settings = Settings::resolve(&config, &args);
    tracing::info!(
        backend = %settings.backend,
        screen = ?settings.screen,
        interval = ?settings.refresh_interval,
        "settings resolved"
    );

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to start runtime: {e}");
            std::process::exit(1);
        }
    };
    runtime.block_on(runtime::run(settings));
}
