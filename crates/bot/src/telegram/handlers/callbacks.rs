//! Inline keyboard callback handling
//!
//! Every button press edits the message that carried the keyboard.

use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, LinkPreviewOptions, MessageId};
use teloxide::{ApiError, RequestError};

use chanlist_core::{i18n, storage, Category};

use super::types::{user_lang, HandlerDeps};
use crate::telegram::callback::CallbackAction;
use crate::telegram::subscription::is_subscribed;
use crate::telegram::{menu, Bot};

/// Handles a press on any inline button of the bot.
///
/// The query is always answered first so the client stops its spinner,
/// even when the payload is unknown.
pub(super) async fn handle_menu_callback(bot: Bot, q: CallbackQuery, deps: HandlerDeps) -> ResponseResult<()> {
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        log::warn!("Failed to answer callback query from user {}: {}", q.from.id, e);
    }

    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };

    let Some(action) = CallbackAction::parse(data) else {
        log::warn!("Unknown callback data from user {}: {}", q.from.id, data);
        return Ok(());
    };

    let Some((chat_id, message_id)) = q.message.as_ref().map(|m| (m.chat().id, m.id())) else {
        log::warn!("Callback {:?} from user {} has no message to edit", action, q.from.id);
        return Ok(());
    };

    let lang = user_lang(Some(&q.from));
    log::debug!("Callback {:?} from user {} in chat {}", action, q.from.id, chat_id);

    match action {
        CallbackAction::Browse => {
            let (text, keyboard) = menu::categories_menu(&lang);
            edit_menu(&bot, chat_id, message_id, text, Some(keyboard), false).await
        }
        CallbackAction::Category(category) => {
            let entries = load_listing(&deps, category);
            let (text, keyboard) = menu::category_listing(&lang, category, &entries);
            edit_menu(&bot, chat_id, message_id, text, keyboard, true).await
        }
        CallbackAction::Add => edit_menu(&bot, chat_id, message_id, menu::add_instructions(&lang), None, false).await,
        CallbackAction::Help => {
            let text = menu::help_text(&lang, &deps.config);
            edit_menu(&bot, chat_id, message_id, text, None, false).await
        }
        CallbackAction::Back => {
            if is_subscribed(&bot, &deps.channel, q.from.id).await {
                let (text, keyboard) = menu::main_menu(&lang, &q.from.first_name);
                edit_menu(&bot, chat_id, message_id, text, Some(keyboard), false).await
            } else {
                let (text, keyboard) = menu::subscribe_prompt(&lang, &deps.config);
                edit_menu(&bot, chat_id, message_id, text, keyboard, false).await
            }
        }
    }
}

/// Newest entries of a category. Read failures are logged and shown as an
/// empty category.
fn load_listing(deps: &HandlerDeps, category: Category) -> Vec<storage::ChannelEntry> {
    match storage::list_by_category(&deps.db_pool, category) {
        Ok(entries) => entries,
        Err(e) => {
            log::error!("Failed to list channels for {}: {}", category, e);
            Vec::new()
        }
    }
}

async fn edit_menu(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    text: String,
    keyboard: Option<InlineKeyboardMarkup>,
    disable_preview: bool,
) -> ResponseResult<()> {
    let mut request = bot.edit_message_text(chat_id, message_id, text);
    if let Some(keyboard) = keyboard {
        request = request.reply_markup(keyboard);
    }
    if disable_preview {
        request = request.link_preview_options(LinkPreviewOptions {
            is_disabled: true,
            url: None,
            prefer_small_media: false,
            prefer_large_media: false,
            show_above_text: false,
        });
    }

    match request.await {
        Ok(_) => Ok(()),
        // Pressing the same button twice
        Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
        Err(e) => Err(e),
    }
}
