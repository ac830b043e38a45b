//! SQLite storage for channel entries

pub mod db;
pub mod migrations;

// Re-exports for convenience
pub use db::{
    add_channel, create_pool, get_connection, list_by_category, ChannelEntry, DbConnection, DbPool, NewChannel,
};
