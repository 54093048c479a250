//! Key mapping from terminal events to movement intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_fps_types::Intent;

/// Map keyboard input to a movement intent.
///
/// Unmapped keys yield `None`, which the step algorithm treats identically
/// to no input at all.
pub fn handle_key_event(key: KeyEvent) -> Option<Intent> {
    match key.code {
        // Movement
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Intent::Forward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Intent::Backward),
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Intent::StrafeLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Intent::StrafeRight),

        // Facing
        KeyCode::Left | KeyCode::Char('q') | KeyCode::Char('Q') => Some(Intent::RotateLeft),
        KeyCode::Right | KeyCode::Char('e') | KeyCode::Char('E') => Some(Intent::RotateRight),

        // Quit
        KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('X') => Some(Intent::Quit),

        _ => None,
    }
}

/// Check if key should quit immediately, bypassing the step algorithm.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
