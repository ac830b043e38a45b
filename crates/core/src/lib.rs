//! chanlist-core - Telegram-free building blocks of the channel directory bot
//!
//! # Module Structure
//!
//! - `config`: Environment configuration and tunables
//! - `error`: Application error type
//! - `logging`: Console + file logger
//! - `category`: The fixed category set
//! - `add_request`: Parsing of `/add` submissions
//! - `storage`: SQLite pool, migrations and channel queries
//! - `i18n`: Fluent-backed localized strings

pub mod add_request;
pub mod category;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod storage;
pub mod utils;

// Re-export commonly used types for convenience
pub use add_request::{parse_add_args, AddRequest, AddRequestError};
pub use category::Category;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use logging::{init_logger, log_startup_configuration};
pub use storage::{create_pool, get_connection, ChannelEntry, DbConnection, DbPool, NewChannel};
