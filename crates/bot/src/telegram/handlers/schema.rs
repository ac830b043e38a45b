//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{Me, Message};

use super::callbacks::handle_menu_callback;
use super::commands::{handle_add_command, handle_start_command};
use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::{parse_command, Command};
use crate::telegram::Bot;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// The same schema is used in production and in integration tests.
/// Updates that match no branch (plain text, other commands) are ignored.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        .branch(command_handler(deps_commands))
        .branch(callback_handler(deps_callback))
}

/// Handler for bot commands (/start, /add)
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let parse = |msg: Message, me: Me| msg.text().and_then(|text| parse_command(text, me.username()));

    Update::filter_message().branch(dptree::entry().filter_map(parse).endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);

                match cmd {
                    Command::Start => {
                        handle_start_command(&bot, &msg, &deps).await?;
                    }
                    Command::Add(args) => {
                        handle_add_command(&bot, &msg, &args, &deps).await?;
                    }
                }
                Ok(())
            }
        },
    ))
}

/// Handler for callback queries (inline keyboard buttons)
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move {
            handle_menu_callback(bot, q, deps)
                .await
                .map_err(|e| Box::new(e) as HandlerError)
        }
    })
}
