//! Mandatory channel subscription check
//!
//! Access is granted only to owners, administrators and plain members of the
//! configured channel. Every other status, and every failed lookup, counts as
//! "not subscribed".

use teloxide::prelude::*;
use teloxide::types::{ChatMemberStatus, Recipient};

use super::Bot;

/// Turns the configured channel into a request target.
///
/// Numeric values are chat ids (`-100...`), anything else is a public username.
pub fn channel_recipient(channel_id: &str) -> Recipient {
    let channel_id = channel_id.trim();
    match channel_id.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) if channel_id.starts_with('@') => Recipient::ChannelUsername(channel_id.to_string()),
        Err(_) => Recipient::ChannelUsername(format!("@{}", channel_id)),
    }
}

/// Statuses that count as subscribed.
pub fn grants_access(status: ChatMemberStatus) -> bool {
    matches!(
        status,
        ChatMemberStatus::Owner | ChatMemberStatus::Administrator | ChatMemberStatus::Member
    )
}

/// Checks whether `user_id` is subscribed to `channel`.
///
/// Lookup failures (network, unknown user, bot not admin in the channel) return `false`.
pub async fn is_subscribed(bot: &Bot, channel: &Recipient, user_id: UserId) -> bool {
    match bot.get_chat_member(channel.clone(), user_id).await {
        Ok(member) => {
            let status = member.kind.status();
            let subscribed = grants_access(status);
            if !subscribed {
                log::info!("User {} is not subscribed to {:?} (status: {:?})", user_id, channel, status);
            }
            subscribed
        }
        Err(e) => {
            log::warn!("Membership lookup for user {} in {:?} failed: {}", user_id, channel, e);
            false
        }
    }
}
