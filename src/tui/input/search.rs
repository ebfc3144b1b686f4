use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Handle a key press in Search mode.
///
/// Typed characters land in `search_input` and start the debounce timer;
/// the filter itself only changes when the text settles (or on Enter).
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => {
            app.commit_search();
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Esc) => {
            // Abandon the typed text; the last settled query stands
            app.search_input = app.filter.query.clone();
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Backspace) => {
            app.search_input.pop();
            app.note_search_input();
        }
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            app.search_input.clear();
            app.note_search_input();
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.search_input.push(c);
            app.note_search_input();
        }
        _ => {}
    }
}
