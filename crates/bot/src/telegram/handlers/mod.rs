//! Telegram bot handler tree configuration
//!
//! This module provides the dispatcher schema. Handlers are split so that the
//! reply logic can be tested without a Telegram server.

mod callbacks;
mod commands;
mod schema;
mod types;

pub use commands::add_channel_reply;
pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
