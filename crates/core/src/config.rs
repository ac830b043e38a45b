use secrecy::{ExposeSecret, SecretString};
use std::env;
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// Channel used for both the subscription check and the join link when nothing is configured.
pub const DEFAULT_CHANNEL: &str = "@Channlist";

/// Default SQLite file, compatible with databases created by earlier deployments.
pub const DEFAULT_DATABASE_PATH: &str = "channels.db";

/// Default log file path
pub const DEFAULT_LOG_FILE_PATH: &str = "chanlist.log";

/// Runtime configuration, read once at startup and passed to handlers explicitly.
#[derive(Debug)]
pub struct Config {
    /// Bot token (BOT_TOKEN, required)
    pub bot_token: SecretString,
    /// Public username of the gating channel, shown to users (CHANNEL_USERNAME)
    pub channel_username: String,
    /// Chat used for the membership lookup: `@username` or numeric id (CHANNEL_ID)
    pub channel_id: String,
    /// SQLite database path (DATABASE_PATH)
    pub database_path: String,
    /// Custom Bot API server (BOT_API_URL)
    pub bot_api_url: Option<String>,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns `AppError::Config` when `BOT_TOKEN` is missing or empty.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as missing ones.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bot_token = get("BOT_TOKEN")
            .ok_or_else(|| AppError::Config("BOT_TOKEN not found in environment variables".to_string()))?;

        Ok(Self {
            bot_token: SecretString::from(bot_token),
            channel_username: get("CHANNEL_USERNAME").unwrap_or_else(|| DEFAULT_CHANNEL.to_string()),
            channel_id: get("CHANNEL_ID").unwrap_or_else(|| DEFAULT_CHANNEL.to_string()),
            database_path: get("DATABASE_PATH").unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string()),
            bot_api_url: get("BOT_API_URL"),
        })
    }

    /// `https://t.me/<username>` link for the join button.
    pub fn channel_join_url(&self) -> String {
        let username = self.channel_username.trim_start_matches('@');
        format!("https://t.me/{}", username)
    }

    /// The bot id part of the token (before `:`), safe to print in logs.
    pub fn bot_id_hint(&self) -> String {
        let token = self.bot_token.expose_secret();
        match token.split_once(':') {
            Some((id, _)) => format!("{}:***", id),
            None => "***".to_string(),
        }
    }
}

/// Log file path, read before the rest of the config so the logger can report config errors.
/// Read from LOG_FILE_PATH environment variable
pub fn log_file_path_from_env() -> String {
    env::var("LOG_FILE_PATH")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILE_PATH.to_string())
}

/// Database path, for commands that run without a bot token.
/// Read from DATABASE_PATH environment variable
pub fn database_path_from_env() -> String {
    env::var("DATABASE_PATH")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string())
}

/// Category listing configuration
pub mod listing {
    /// Rows fetched per category
    pub const FETCH_LIMIT: usize = 20;

    /// Rows rendered in a listing message
    pub const DISPLAY_LIMIT: usize = 10;

    /// Characters of the description shown in a listing
    pub const DESCRIPTION_PREVIEW_CHARS: usize = 50;
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
