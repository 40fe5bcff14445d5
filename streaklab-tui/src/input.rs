//! Keyboard input dispatch.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Handle a key event against the app state.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_prev(),
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => app.increase_streak(),
        KeyCode::Char('-') | KeyCode::Left => app.decrease_streak(),
        KeyCode::Char('m') => app.toggle_missing_policy(),
        KeyCode::Char('r') => app.rerun(),
        _ => {}
    }
}

/// Key hints shown in the status bar.
pub fn key_hints() -> &'static str {
    " q:quit j/k:select +/-:streak m:missing r:rerun"
}
