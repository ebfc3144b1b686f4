use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Handle a key press in Navigate mode
pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Char('q')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Char('?')) => {
            app.show_help = true;
        }

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Left | KeyCode::Char('h')) | (_, KeyCode::BackTab) => {
            if app.cursor_column > 0 {
                app.cursor_column -= 1;
                app.clamp_cursor();
            }
        }
        (KeyModifiers::NONE, KeyCode::Right | KeyCode::Char('l')) | (_, KeyCode::Tab) => {
            if app.cursor_column + 1 < app.board.columns.len() {
                app.cursor_column += 1;
                app.clamp_cursor();
            }
        }
        (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => {
            let len = visible_len(app);
            if len > 0 && app.cursor_row + 1 < len {
                app.cursor_row += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => {
            app.cursor_row = app.cursor_row.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) | (_, KeyCode::Home) => {
            app.cursor_row = 0;
        }
        (KeyModifiers::SHIFT, KeyCode::Char('G')) | (_, KeyCode::End) => {
            app.cursor_row = visible_len(app).saturating_sub(1);
        }

        // Keyboard drag
        (_, KeyCode::Char('m') | KeyCode::Char(' ')) => {
            enter_move_mode(app);
        }

        // CRUD
        (_, KeyCode::Char('n')) => {
            app.open_create_form();
        }
        (_, KeyCode::Enter | KeyCode::Char('e')) => {
            app.open_edit_form();
        }
        (_, KeyCode::Char('d')) => {
            if let Some(task_id) = app.cursor_task_id() {
                app.confirm_delete = Some(task_id);
                app.mode = Mode::Confirm;
            }
        }

        // Filtering & theme
        (_, KeyCode::Char('/')) => {
            app.search_input = app.filter.query.clone();
            app.mode = Mode::Search;
        }
        (_, KeyCode::Char('p')) => {
            cycle_priority_filter(app);
        }
        (_, KeyCode::Char('t')) => {
            app.toggle_theme();
        }
        (_, KeyCode::Esc) => {
            if app.filter.is_active() {
                app.filter.clear();
                app.search_input.clear();
                app.clamp_cursor();
            }
            app.status_message = None;
        }
        _ => {}
    }
}

fn visible_len(app: &App) -> usize {
    app.current_column()
        .map_or(0, |c| app.visible_ids(&c.id).len())
}

/// Pick up the cursor task for a keyboard drag
pub(super) fn enter_move_mode(app: &mut App) {
    let Some(task_id) = app.cursor_task_id() else {
        return;
    };
    if app.keyboard_drag.start(&app.board, &task_id) {
        app.mode = Mode::Move;
    }
}

/// off → low → medium → high → urgent → off
fn cycle_priority_filter(app: &mut App) {
    use crate::model::task::Priority;
    app.filter.priority = match app.filter.priority {
        None => Some(Priority::Low),
        Some(Priority::Urgent) => None,
        Some(p) => Some(p.next()),
    };
    app.clamp_cursor();
}
