//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: snapshots are drawn into a plain
//! framebuffer which is then flushed to the terminal with `crossterm`. No
//! widget toolkit is involved.
//!
//! - [`fb`]: glyphs, styles and the framebuffer
//! - [`game_view`]: snapshot + effects to framebuffer (pure, testable)
//! - [`renderer`]: terminal setup/teardown and full or diffed flushes

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use timelord_tetris_core as core;
pub use timelord_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{Beam, Effects, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
