//! Board domain model: projects, tasks and subtasks.
//!
//! # Responsibility
//! - Define the entities persisted in the board JSON document.
//! - Own the per-entity behavior (status transitions, completion toggles).
//!
//! # Invariants
//! - Ownership is strictly top-down: Project owns Tasks, Task owns Subtasks.
//! - Positional indices shift down after any removal; callers must re-resolve.
//! - Derived values (completed subtask count) are computed, never stored.

pub mod index;
pub mod project;
pub mod seed;
pub mod task;
