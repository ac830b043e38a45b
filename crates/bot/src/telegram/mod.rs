//! Telegram bot integration and handlers

pub mod bot;
pub mod callback;
pub mod handlers;
pub mod menu;
pub mod subscription;

use teloxide::types::InlineKeyboardButton;

/// Bot type used across handlers
pub type Bot = teloxide::Bot;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use callback::CallbackAction;
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use subscription::{channel_recipient, grants_access, is_subscribed};

/// Shorthand for an inline callback button.
pub fn cb(text: impl Into<String>, data: impl Into<String>) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text, data)
}
