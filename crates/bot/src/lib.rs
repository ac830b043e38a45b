//! chanlist - Telegram channel directory bot
//!
//! Users browse submitted channels by category and add their own with
//! `/add`, after passing a subscription check against the bot's channel.
//!
//! # Module Structure
//!
//! - `cli`: Command line interface
//! - `telegram`: Bot creation, dispatcher schema, handlers and menus

pub mod cli;
pub mod telegram;

pub use telegram::{schema, CallbackAction, HandlerDeps, HandlerError};
