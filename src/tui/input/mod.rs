mod confirm;
mod edit;
mod mouse;
mod move_mode;
mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Help overlay swallows everything until dismissed
    if app.show_help {
        app.show_help = false;
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Search => search::handle_search(app, key),
        Mode::Move => move_mode::handle_move(app, key),
        Mode::Create | Mode::Edit => edit::handle_form(app, key),
        Mode::Confirm => confirm::handle_confirm(app, key),
    }
}

/// Handle a mouse event. Pointer drags only make sense against the board
/// view, so modal modes ignore the mouse entirely.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match app.mode {
        Mode::Navigate | Mode::Search => mouse::handle_mouse(app, mouse),
        _ => {}
    }
}
