//! Board use-case layer.
//!
//! # Responsibility
//! - Own board state and persist it after each mutation (`board_service`).
//! - Track the current project for view-layer intents (`board_controller`).
//! - Produce read-only projections for rendering (`board_view`).

pub mod board_controller;
pub mod board_service;
pub mod board_view;
