//! Bot initialization and command registration
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Command list registration in the Telegram UI

use reqwest::ClientBuilder;
use secrecy::ExposeSecret;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use teloxide::utils::command::BotCommands;

use chanlist_core::config::{self, Config};
use chanlist_core::i18n;

use super::Bot;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "show the main menu")]
    Start,
    #[command(description = "add a channel: /add link | name | description | category | subscribers")]
    Add(String),
}

/// Parses a command message, also accepting a line break between the command
/// and its arguments (`/add` on one line, the fields on the next).
pub fn parse_command(text: &str, bot_username: &str) -> Option<Command> {
    let normalized = match text.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((idx, sep)) if sep != ' ' => format!("{} {}", &text[..idx], &text[idx + sep.len_utf8()..]),
        _ => text.to_string(),
    };
    Command::parse(&normalized, bot_username).ok()
}

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Failed to create bot (invalid URL, HTTP client setup)
pub fn create_bot(config: &Config) -> anyhow::Result<Bot> {
    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    let bot = Bot::with_client(config.bot_token.expose_secret(), client);

    let bot = if let Some(bot_api_url) = &config.bot_api_url {
        log::info!("Using custom Bot API URL: {}", bot_api_url);
        let url = url::Url::parse(bot_api_url).map_err(|e| anyhow::anyhow!("Invalid BOT_API_URL: {}", e))?;
        bot.set_api_url(url)
    } else {
        bot
    };

    Ok(bot)
}

/// Localized command list for one language
fn bot_commands(lang: &unic_langid::LanguageIdentifier) -> Vec<BotCommand> {
    vec![
        BotCommand::new("start", i18n::t(lang, "command-start")),
        BotCommand::new("add", i18n::t(lang, "command-add")),
    ]
}

/// Sets up bot commands in Telegram UI
///
/// The default list is Arabic; English-speaking clients get the English list.
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(bot_commands(&i18n::default_lang())).await?;

    for code in i18n::SUPPORTED_LANGS.iter().filter(|code| **code != "ar") {
        let lang = i18n::lang_from_telegram_code(Some(*code));
        bot.set_my_commands(bot_commands(&lang))
            .language_code(code.to_string())
            .await?;
    }

    Ok(())
}
