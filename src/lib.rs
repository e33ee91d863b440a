//! Timelord Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof and holds the command-line
//! configuration shared by the binary and its tests.

pub mod config;

pub use timelord_tetris_core as core;
pub use timelord_tetris_input as input;
pub use timelord_tetris_term as term;
pub use timelord_tetris_types as types;

pub use config::Config;
