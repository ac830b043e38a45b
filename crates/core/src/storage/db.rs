use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, Connection, ErrorCode, Result, Row};
use std::time::Duration;

use super::migrations::run_migrations;
use crate::category::Category;
use crate::config::listing;
use crate::error::AppResult;

/// A channel entry as stored in the `channels` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelEntry {
    /// Row id; newer entries have larger ids
    pub id: i64,
    /// Telegram id of the submitter
    pub user_id: i64,
    /// Channel link or @username, unique across entries
    pub link: String,
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Category label
    pub category: String,
    /// Subscriber count as reported by the submitter
    pub subscribers: i64,
}

/// Insert payload for a new channel entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChannel {
    pub user_id: i64,
    pub link: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub subscribers: i64,
}

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a new database connection pool and bring the schema up to date
///
/// # Arguments
///
/// * `database_path` - Path to SQLite database file
///
/// # Errors
///
/// Fails if the pool cannot open a connection or a migration fails.
pub fn create_pool(database_path: &str) -> AppResult<DbPool> {
    let manager = SqliteConnectionManager::file(database_path).with_init(|conn| conn.busy_timeout(BUSY_TIMEOUT));
    let pool = Pool::builder().max_size(10).build(manager)?;

    let mut conn = pool.get()?;
    run_migrations(&mut conn)?;

    Ok(pool)
}

/// Get a connection from the pool
///
/// The connection is returned to the pool when dropped.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, r2d2::Error> {
    pool.get()
}

/// Inserts a channel entry and returns its row id.
///
/// Fails with a constraint violation when the link is already stored.
pub fn insert_channel(conn: &Connection, channel: &NewChannel) -> Result<i64> {
    conn.execute(
        "INSERT INTO channels (user_id, link, name, description, category, subscribers)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            channel.user_id,
            channel.link,
            channel.name,
            channel.description,
            channel.category.label(),
            channel.subscribers,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// True if the error is a UNIQUE/constraint violation.
pub fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(err, rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation)
}

/// Adds a channel entry.
///
/// Returns `false` on any failure (duplicate link, pool or driver error); the
/// cause is only logged.
pub fn add_channel(pool: &DbPool, channel: &NewChannel) -> bool {
    let conn = match get_connection(pool) {
        Ok(conn) => conn,
        Err(e) => {
            log::error!("Failed to get database connection for insert: {}", e);
            return false;
        }
    };

    match insert_channel(&conn, channel) {
        Ok(id) => {
            log::info!(
                "Added channel {} (id={}) to {} by user {}",
                channel.link,
                id,
                channel.category,
                channel.user_id
            );
            true
        }
        Err(e) if is_constraint_violation(&e) => {
            log::warn!("Rejected duplicate channel link {}: {}", channel.link, e);
            false
        }
        Err(e) => {
            log::error!("Failed to insert channel {}: {}", channel.link, e);
            false
        }
    }
}

fn channel_from_row(row: &Row<'_>) -> Result<ChannelEntry> {
    Ok(ChannelEntry {
        id: row.get(0)?,
        user_id: row.get::<_, Option<i64>>(1)?.unwrap_or_default(),
        link: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        name: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        description: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
        category: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        subscribers: row.get::<_, Option<i64>>(6)?.unwrap_or_default(),
    })
}

/// Gets up to `limit` entries of a category, newest first.
pub fn get_channels_by_category(conn: &Connection, category: Category, limit: usize) -> Result<Vec<ChannelEntry>> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let mut stmt = conn.prepare(
        "SELECT id, user_id, link, name, description, category, subscribers
         FROM channels
         WHERE category = ?1
         ORDER BY id DESC
         LIMIT ?2",
    )?;
    let rows = stmt.query_map(params![category.label(), limit], channel_from_row)?;

    let mut channels = Vec::new();
    for row in rows {
        channels.push(row?);
    }
    Ok(channels)
}

/// Lists the newest entries of a category, capped at `listing::FETCH_LIMIT`.
///
/// An empty category yields an empty vector.
pub fn list_by_category(pool: &DbPool, category: Category) -> AppResult<Vec<ChannelEntry>> {
    let conn = get_connection(pool)?;
    Ok(get_channels_by_category(&conn, category, listing::FETCH_LIMIT)?)
}

/// Total number of stored entries.
pub fn count_channels(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM channels", [], |row| row.get(0))
}
