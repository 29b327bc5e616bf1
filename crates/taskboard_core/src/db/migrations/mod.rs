//! Board schema versions.
//!
//! # Invariants
//! - `SCHEMA` versions start at 1 and increase by one per entry.
//! - `PRAGMA user_version` equals the last applied entry; pending entries
//!   commit in one transaction.

use crate::repo::kv_store::{StoreError, StoreResult};
use log::info;
use rusqlite::Connection;

/// `(version, sql)` in application order.
const SCHEMA: &[(u32, &str)] = &[(1, include_str!("0001_kv_entries.sql"))];

/// Returns the newest schema version this binary can write.
pub fn latest_version() -> u32 {
    SCHEMA.last().map_or(0, |(version, _)| *version)
}

/// Brings the board schema up to `latest_version()`.
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file was written by a newer binary.
pub fn apply_migrations(conn: &mut Connection) -> StoreResult<()> {
    let found: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    let latest = latest_version();
    if found > latest {
        return Err(StoreError::UnsupportedSchemaVersion {
            db_version: found,
            latest_supported: latest,
        });
    }

    let pending: Vec<&(u32, &str)> = SCHEMA
        .iter()
        .filter(|(version, _)| *version > found)
        .collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (version, sql) in pending {
        tx.execute_batch(sql)?;
        tx.pragma_update(None, "user_version", version)?;
    }
    tx.commit()?;

    info!("event=db_migrate module=db status=ok from_version={found} to_version={latest}");
    Ok(())
}
