#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use ans::api::ApiClient;
use ans::domain::config::ClientConfig;
use ans::kernel::config::load_config;
use ans_desktop::DesktopApp;
use ans_logger::Logger;
use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let config: ClientConfig =
        load_config(Some("client")).context("Critical: Configuration is malformed")?;

    let mut logger = Logger::builder(env!("CARGO_PKG_NAME")).directives(config.logging.level.as_str());
    if let Some(directory) = &config.logging.directory {
        logger = logger.directory(directory);
    }
    let _log = logger.init()?;
    tracing::info!(features = ?ans::features::ENABLED, "Starting");

    let api = ApiClient::new(&config.api)?;

    DesktopApp::new(config, api).launch();
    Ok(())
}
