//! Handler types and dependencies

use std::sync::Arc;

use teloxide::types::{Recipient, User};
use unic_langid::LanguageIdentifier;

use chanlist_core::{i18n, Config, DbPool};

use crate::telegram::subscription::channel_recipient;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub db_pool: Arc<DbPool>,
    pub config: Arc<Config>,
    /// Channel the subscription gate checks, derived from `config.channel_id`
    pub channel: Recipient,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(db_pool: Arc<DbPool>, config: Arc<Config>) -> Self {
        let channel = channel_recipient(&config.channel_id);
        Self {
            db_pool,
            config,
            channel,
        }
    }
}

/// Reply language for a Telegram user
pub(super) fn user_lang(user: Option<&User>) -> LanguageIdentifier {
    i18n::lang_from_telegram_code(user.and_then(|u| u.language_code.as_deref()))
}
