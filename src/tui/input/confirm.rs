use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::board_ops;
use crate::tui::app::{App, Mode};

/// Handle a key press while a delete confirmation is pending
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            if let Some(task_id) = app.confirm_delete.take() {
                if board_ops::delete_task(&mut app.board, &task_id) {
                    app.set_status(format!("deleted {}", task_id));
                }
            }
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.confirm_delete = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Board;
    use crate::model::config::UiConfig;

    fn app() -> App {
        let mut app = App::new(
            Board::sample(),
            UiConfig::default(),
            None,
            toml_edit::DocumentMut::default(),
        );
        app.confirm_delete = Some("T-001".into());
        app.mode = Mode::Confirm;
        app
    }

    #[test]
    fn yes_deletes_and_clamps_cursor() {
        let mut app = app();
        handle_confirm(&mut app, KeyEvent::from(KeyCode::Char('y')));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.board.task("T-001").is_none());
        assert_eq!(app.board.column("todo").unwrap().len(), 1);
        assert_eq!(app.cursor_row, 0);
    }

    #[test]
    fn no_keeps_the_task() {
        let mut app = app();
        handle_confirm(&mut app, KeyEvent::from(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.board.task("T-001").is_some());
        assert!(app.confirm_delete.is_none());
    }

    #[test]
    fn other_keys_keep_the_prompt() {
        let mut app = app();
        handle_confirm(&mut app, KeyEvent::from(KeyCode::Char('x')));
        assert_eq!(app.mode, Mode::Confirm);
        assert!(app.confirm_delete.is_some());
    }
}
