//! Embedded schema versions for the `items` table.
//!
//! Version 1 creates `items(id INTEGER PRIMARY KEY AUTOINCREMENT,
//! name VARCHAR(256) NOT NULL, description TEXT)`. `AUTOINCREMENT` keeps ids
//! of deleted items from being handed out again.
//!
//! The applied version lives in `PRAGMA user_version`; pending versions run
//! inside one transaction so a half-created schema is never committed.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

/// `(version, sql)` pairs, strictly increasing by version.
const SCHEMA_VERSIONS: &[(u32, &str)] = &[(1, include_str!("0001_init.sql"))];

/// Returns the newest schema version this binary can create.
pub fn latest_version() -> u32 {
    SCHEMA_VERSIONS.last().map_or(0, |&(version, _)| version)
}

/// Brings `conn` up to `latest_version()`. No-op when already current.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let stored: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let latest = latest_version();

    if stored > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: stored,
            latest_supported: latest,
        });
    }

    let mut pending = SCHEMA_VERSIONS
        .iter()
        .filter(|&&(version, _)| version > stored)
        .peekable();
    if pending.peek().is_none() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for &(version, sql) in pending {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
        info!("event=db_migrate module=db status=ok from={stored} to={version}");
    }
    tx.commit()?;

    Ok(())
}
