use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;

use chanlist::cli::{Cli, Commands};
use chanlist::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};
use chanlist_core::config::{self, Config};
use chanlist_core::storage::db::count_channels;
use chanlist_core::storage::{self, create_pool, get_connection, DbPool};
use chanlist_core::{init_logger, log_startup_configuration, Category};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, database, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // LOG_FILE_PATH may come from .env
    let _ = dotenv();

    init_logger(&config::log_file_path_from_env())?;

    match cli.command {
        Some(Commands::Run) | None => run_bot().await,
        Some(Commands::List { category }) => run_list(&category),
    }
}

/// Starts long polling until Ctrl-C.
async fn run_bot() -> Result<()> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("❌ {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Starting bot...");
    log_startup_configuration(&config);

    let db_pool = Arc::new(
        create_pool(&config.database_path).map_err(|e| anyhow::anyhow!("Failed to create database pool: {}", e))?,
    );

    log_stored_channels(&db_pool);

    let bot = create_bot(&config)?;

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    let deps = HandlerDeps::new(db_pool, Arc::new(config));

    log::info!("Bot is running");
    Dispatcher::builder(bot, schema(deps))
        .error_handler(LoggingErrorHandler::with_custom_text("An error has occurred in the dispatcher"))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}

/// Prints the newest stored entries of a category.
fn run_list(category: &str) -> Result<()> {
    let category = Category::from_label(category.trim()).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown category '{}'. Valid categories: {}",
            category,
            Category::valid_labels()
        )
    })?;

    let db_pool = create_pool(&config::database_path_from_env())?;
    let entries = storage::list_by_category(&db_pool, category)?;
    let total = count_channels(&*get_connection(&db_pool)?)?;
    println!("{} channels stored, showing newest in {}", total, category);

    if entries.is_empty() {
        println!("No channels in {}", category);
        return Ok(());
    }

    for entry in entries {
        println!(
            "#{} {} | {} | {} | {} | {} subscribers (by {})",
            entry.id, entry.link, entry.name, entry.description, entry.category, entry.subscribers, entry.user_id
        );
    }

    Ok(())
}

fn log_stored_channels(db_pool: &DbPool) {
    match get_connection(db_pool).map_err(anyhow::Error::from).and_then(|conn| Ok(count_channels(&conn)?)) {
        Ok(count) => log::info!("✅ Channels stored: {}", count),
        Err(e) => log::warn!("Failed to count stored channels: {}", e),
    }
}
