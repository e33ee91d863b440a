//! Terminal input module (engine-facing).
//!
//! Decodes `crossterm` key and mouse events into abstract
//! [`Command`]s carrying [`Intent`](crate::types::Intent)s. The engine never
//! sees a key code.
//!
//! Soft drop is a held action; [`SoftDropTracker`] turns presses, releases and
//! (for terminals without release events) a short grace timeout into a
//! start/release pair.

pub mod handler;
pub mod map;

pub use timelord_tetris_types as types;

pub use handler::SoftDropTracker;
pub use map::{handle_key_event, handle_mouse_event, is_soft_drop_key, should_quit, Command};
