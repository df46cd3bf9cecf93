//! SQLite connection pool for the member store.
//!
//! Every pooled connection gets the pragmas described by [`ConnectionOptions`]
//! applied when it is checked out.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;
use serde::Deserialize;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Per-connection pragmas and pool sizing, readable from the `store` config section.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ConnectionOptions {
    pub enable_wal: bool,
    /// `ON DELETE SET NULL` on `members.team_id` only fires with this on.
    pub enable_foreign_keys: bool,
    pub busy_timeout_ms: Option<u64>,
    pub max_pool_size: u32,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            enable_wal: true,
            enable_foreign_keys: true,
            busy_timeout_ms: Some(30_000),
            max_pool_size: 8,
        }
    }
}

impl ConnectionOptions {
    fn pragmas(&self) -> String {
        let mut sql = String::new();
        if self.enable_wal {
            sql.push_str("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;");
        }
        if self.enable_foreign_keys {
            sql.push_str("PRAGMA foreign_keys = ON;");
        }
        if let Some(timeout) = self.busy_timeout_ms {
            sql.push_str(&format!("PRAGMA busy_timeout = {timeout};"));
        }
        sql
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        let pragmas = self.pragmas();
        if pragmas.is_empty() {
            return Ok(());
        }
        conn.batch_execute(&pragmas)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Builds a pool whose connections are configured by `options`.
pub fn establish_connection_pool_with(
    database_url: &str,
    options: ConnectionOptions,
) -> Result<DbPool, PoolError> {
    log::debug!("Opening member store at {database_url} with {options:?}");

    Pool::builder()
        .max_size(options.max_pool_size.max(1))
        .connection_customizer(Box::new(options))
        .build(ConnectionManager::<SqliteConnection>::new(database_url))
}

/// Checks a connection out of the pool, logging checkout failures.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get().inspect_err(|err| {
        log::error!("Failed to get connection from pool: {err}");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pragmas_follow_options() {
        let options = ConnectionOptions {
            enable_wal: false,
            busy_timeout_ms: None,
            ..ConnectionOptions::default()
        };
        assert_eq!(options.pragmas(), "PRAGMA foreign_keys = ON;");

        let all = ConnectionOptions::default().pragmas();
        assert!(all.contains("journal_mode = WAL"));
        assert!(all.contains("busy_timeout = 30000"));
    }

    #[test]
    fn in_memory_pool_hands_out_connections() {
        let pool = establish_connection_pool_with(
            ":memory:",
            ConnectionOptions {
                enable_wal: false,
                max_pool_size: 1,
                ..ConnectionOptions::default()
            },
        )
        .expect("build pool");

        assert!(get_connection(&pool).is_ok());
    }
}
