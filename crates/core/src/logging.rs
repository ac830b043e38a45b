//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - Startup configuration logging

use anyhow::Result;
use simplelog::*;
use std::fs::File;

use crate::config;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to create the file or a logger is already installed
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs the effective configuration at application startup.
///
/// Only the bot id part of the token is printed.
pub fn log_startup_configuration(config: &config::Config) {
    log::info!("✅ BOT_TOKEN found: {}", config.bot_id_hint());
    log::info!("✅ Channel: {}", config.channel_username);
    if config.channel_id != config.channel_username {
        log::info!("✅ Membership checked against: {}", config.channel_id);
    }
    log::info!("✅ Database: {}", config.database_path);
    if let Some(url) = &config.bot_api_url {
        log::info!("✅ Custom Bot API URL: {}", url);
    }
}
