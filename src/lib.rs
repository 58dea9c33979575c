//! # Connect Four
//!
//! Two-player Connect Four on a fixed 7x6 board. Moves are given as a column
//! letter (`A`-`G`) or as a full point id (`E6`); gravity is enforced by a
//! per-column frontier and wins are found by scanning rows, columns and both
//! diagonals.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, point ids, players, game state
//! - [`ui`] — Console driver, text rendering, and a Ratatui terminal UI
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`logging`] — `tracing` subscriber setup

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
