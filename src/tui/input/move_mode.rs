use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};
use crate::tui::keyboard_drag::Direction;

/// Handle a key press in Move mode (keyboard drag active).
///
/// Arrows/hjkl walk the drop target, Enter/m commits, Esc cancels. Keys
/// outside this set are no-ops — the drag stays live.
pub(super) fn handle_move(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.keyboard_drag.move_target(&app.board, Direction::Up);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.keyboard_drag.move_target(&app.board, Direction::Down);
        }
        KeyCode::Left | KeyCode::Char('h') => {
            app.keyboard_drag.move_target(&app.board, Direction::Left);
        }
        KeyCode::Right | KeyCode::Char('l') => {
            app.keyboard_drag.move_target(&app.board, Direction::Right);
        }
        KeyCode::Enter | KeyCode::Char('m') | KeyCode::Char(' ') => {
            if let Some(request) = app.keyboard_drag.commit(&app.board) {
                app.apply_move_request(request);
            }
            app.mode = Mode::Navigate;
        }
        KeyCode::Esc => {
            app.keyboard_drag.cancel();
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
    use crate::ops::board_ops;
    use crate::tui::input::navigate::enter_move_mode;

    fn app() -> App {
        App::new(
            Board::sample(),
            UiConfig::default(),
            None,
            toml_edit::DocumentMut::default(),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_move(app, KeyEvent::from(code));
    }

    #[test]
    fn commit_moves_cursor_with_the_task() {
        let mut app = app();
        enter_move_mode(&mut app); // picks up T-001 in todo
        press(&mut app, KeyCode::Right); // target in-progress, end
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.board.task("T-001").unwrap().status, "in-progress");
        assert_eq!(app.cursor_column, 1);
        assert_eq!(app.cursor_row, 1);
    }

    #[test]
    fn escape_cancels_without_moving() {
        let mut app = app();
        enter_move_mode(&mut app);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.board.task("T-001").unwrap().status, "todo");
        assert!(!app.keyboard_drag.is_active());
    }

    #[test]
    fn commit_after_external_delete_degrades_to_noop() {
        let mut app = app();
        enter_move_mode(&mut app);
        board_ops::delete_task(&mut app.board, "T-001");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.board.task("T-001").is_none());
        // Nothing panicked; board still consistent
        assert!(crate::ops::check::check_board(&app.board).valid);
    }

    #[test]
    fn unrecognized_key_keeps_dragging() {
        let mut app = app();
        enter_move_mode(&mut app);
        press(&mut app, KeyCode::Char('z'));
        assert_eq!(app.mode, Mode::Move);
        assert!(app.keyboard_drag.is_active());
    }
}
