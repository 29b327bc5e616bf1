//! Persistence layer for the board document.
//!
//! # Responsibility
//! - Define the key-value storage contract and its backends.
//! - Convert between in-memory projects and the stored JSON document.
//!
//! # Invariants
//! - The whole board lives under a single key; writes replace it entirely.

pub mod board_repo;
pub mod kv_store;
