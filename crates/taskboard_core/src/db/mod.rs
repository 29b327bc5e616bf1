//! SQLite bootstrap for the board key-value store.
//!
//! Connections handed out here have the `kv_entries` schema in place; every
//! failure is reported as a `StoreError`, the same error the store itself
//! returns.

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};
