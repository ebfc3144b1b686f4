use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, FormField, Mode};

/// Handle a key press while a create/edit form is open
pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    if app.form.is_none() {
        app.mode = Mode::Navigate;
        return;
    }

    // Form-level actions first; everything else edits the active field
    match key.code {
        KeyCode::Esc => {
            app.form = None;
            app.mode = Mode::Navigate;
            return;
        }
        KeyCode::Enter => {
            app.submit_form();
            return;
        }
        _ => {}
    }

    let Some(form) = app.form.as_mut() else {
        return;
    };
    match (key.modifiers, key.code) {
        (_, KeyCode::BackTab) => {
            form.prev_field();
        }
        (_, KeyCode::Tab) | (_, KeyCode::Down) => {
            form.next_field();
        }
        (_, KeyCode::Up) => {
            form.prev_field();
        }
        // Priority is cycled, not typed
        (_, KeyCode::Left | KeyCode::Right | KeyCode::Char(' '))
            if form.field == FormField::Priority =>
        {
            form.cycle_priority();
        }
        (_, KeyCode::Backspace) => {
            form.backspace();
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            form.insert_char(c);
        }
        _ => {}
    }
}
