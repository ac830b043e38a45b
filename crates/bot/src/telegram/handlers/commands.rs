//! Command handler implementations (/start, /add)

use fluent_templates::fluent_bundle::FluentArgs;
use teloxide::prelude::*;
use teloxide::types::Message;
use unic_langid::LanguageIdentifier;

use chanlist_core::storage;
use chanlist_core::{i18n, parse_add_args, AddRequestError, Category, DbPool};

use super::types::{user_lang, HandlerDeps, HandlerError};
use crate::telegram::subscription::is_subscribed;
use crate::telegram::{menu, Bot};

/// Handle /start command
///
/// Non-subscribers get the join prompt, everyone else the main menu.
pub(super) async fn handle_start_command(bot: &Bot, msg: &Message, deps: &HandlerDeps) -> Result<(), HandlerError> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    let lang = user_lang(Some(user));

    if !is_subscribed(bot, &deps.channel, user.id).await {
        let (text, keyboard) = menu::subscribe_prompt(&lang, &deps.config);
        let mut request = bot.send_message(msg.chat.id, text);
        if let Some(keyboard) = keyboard {
            request = request.reply_markup(keyboard);
        }
        request.await?;
        return Ok(());
    }

    let (text, keyboard) = menu::main_menu(&lang, &user.first_name);
    bot.send_message(msg.chat.id, text).reply_markup(keyboard).await?;

    Ok(())
}

/// Handle /add command
///
/// `args` is everything after `/add`.
pub(super) async fn handle_add_command(
    bot: &Bot,
    msg: &Message,
    args: &str,
    deps: &HandlerDeps,
) -> Result<(), HandlerError> {
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    let lang = user_lang(Some(user));

    if !is_subscribed(bot, &deps.channel, user.id).await {
        bot.send_message(msg.chat.id, i18n::t(&lang, "subscribe-required-short"))
            .await?;
        return Ok(());
    }

    let submitter_id = i64::try_from(user.id.0).unwrap_or_default();
    let reply = add_channel_reply(&lang, &deps.db_pool, submitter_id, args);
    bot.send_message(msg.chat.id, reply).await?;

    Ok(())
}

/// Validates an `/add` submission, stores it and returns the reply text.
///
/// Nothing is written unless all fields are valid. Any failed insert is
/// reported as "already exists".
pub fn add_channel_reply(lang: &LanguageIdentifier, db_pool: &DbPool, submitter_id: i64, args: &str) -> String {
    let request = match parse_add_args(args) {
        Ok(request) => request,
        Err(AddRequestError::WrongFieldCount(count)) => {
            log::info!("Rejected /add from {}: {} fields", submitter_id, count);
            return i18n::t(lang, "add-wrong-format");
        }
        Err(AddRequestError::InvalidSubscribers(e)) => {
            log::info!("Rejected /add from {}: bad subscriber count: {}", submitter_id, e);
            let mut args = FluentArgs::new();
            args.set("error", e.to_string());
            return i18n::t_args(lang, "add-error", &args);
        }
        Err(AddRequestError::UnknownCategory(category)) => {
            log::info!("Rejected /add from {}: unknown category {}", submitter_id, category);
            let mut args = FluentArgs::new();
            args.set("categories", Category::valid_labels());
            return i18n::t_args(lang, "add-unknown-category", &args);
        }
    };

    let name = request.name.clone();
    let category = request.category;

    if storage::add_channel(db_pool, &request.into_new_channel(submitter_id)) {
        let mut args = FluentArgs::new();
        args.set("name", name);
        args.set("category", category.label());
        i18n::t_args(lang, "add-success", &args)
    } else {
        i18n::t(lang, "add-already-exists")
    }
}
