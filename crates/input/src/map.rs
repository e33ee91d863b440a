//! Key and pointer mapping from terminal events to intents.

use crate::types::Intent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward to the running game
    Intent(Intent),
    /// Start a game from the title screen, or regenerate after game over
    Start,
    /// Throw the current game away and start over
    Reset,
}

/// Map a key press to a command.
///
/// Soft drop keys map to [`Intent::SoftDropStart`]; the matching release is
/// produced by [`SoftDropTracker`](crate::SoftDropTracker).
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    let intent = match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => Intent::MoveLeft,
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => Intent::MoveRight,
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => Intent::SoftDropStart,
        KeyCode::Char(' ' | 'w' | 'W') => Intent::HardDrop,

        // Rotation
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'x' | 'X') => Intent::RotateCw,
        KeyCode::Char('z' | 'Z' | 'y' | 'Y' | 'q' | 'Q') => Intent::RotateCcw,

        // Session
        KeyCode::Enter => return Some(Command::Start),
        KeyCode::Char('r' | 'R') => return Some(Command::Reset),

        _ => return None,
    };
    Some(Command::Intent(intent))
}

/// True for the keys that hold soft drop
pub fn is_soft_drop_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J'))
}

/// Map a pointer press: left button rotates counter-clockwise, right clockwise.
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<Intent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Intent::RotateCcw),
        MouseEventKind::Down(MouseButton::Right) => Some(Intent::RotateCw),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
