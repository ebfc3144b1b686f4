use std::collections::HashMap;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::NaiveDate;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;

use crate::io::config_io::{discover_config, persist_theme, read_config};
use crate::model::config::UiConfig;
use crate::model::task::{Priority, Task};
use crate::model::{Board, Column};
use crate::ops::board_ops::{self, MoveRequest, TaskPatch};
use crate::ops::filter::FilterState;

use super::drag::DragSession;
use super::input;
use super::keyboard_drag::KeyboardDrag;
use super::render;
use super::theme::Theme;

/// Rows a card occupies: title, meta, separator
pub const CARD_HEIGHT: u16 = 3;

/// How long typed search text must settle before the filter recomputes
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(250);

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Search,
    /// Keyboard drag in progress
    Move,
    Create,
    Edit,
    /// Delete confirmation pending
    Confirm,
}

/// Which record a task form will write to on submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormTarget {
    Create { column_id: String },
    Edit { task_id: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    Assignee,
    Tags,
    DueDate,
    Priority,
}

impl FormField {
    pub const ORDER: [FormField; 6] = [
        FormField::Title,
        FormField::Description,
        FormField::Assignee,
        FormField::Tags,
        FormField::DueDate,
        FormField::Priority,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Assignee => "Assignee",
            FormField::Tags => "Tags",
            FormField::DueDate => "Due date",
            FormField::Priority => "Priority",
        }
    }
}

/// In-flight create/edit modal state. Field-level rules (non-blank title,
/// date format) live here; the board only checks structure.
#[derive(Debug, Clone)]
pub struct TaskForm {
    pub target: FormTarget,
    pub field: FormField,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub tags: String,
    pub due_date: String,
    pub priority: Priority,
}

impl TaskForm {
    pub fn create(column_id: impl Into<String>) -> Self {
        TaskForm {
            target: FormTarget::Create {
                column_id: column_id.into(),
            },
            field: FormField::Title,
            title: String::new(),
            description: String::new(),
            assignee: String::new(),
            tags: String::new(),
            due_date: String::new(),
            priority: Priority::default(),
        }
    }

    pub fn edit(task: &Task) -> Self {
        TaskForm {
            target: FormTarget::Edit {
                task_id: task.id.clone(),
            },
            field: FormField::Title,
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            assignee: task.assignee.clone().unwrap_or_default(),
            tags: task.tags.join(", "),
            due_date: task.due_date.map(|d| d.to_string()).unwrap_or_default(),
            priority: task.priority,
        }
    }

    pub fn next_field(&mut self) {
        let pos = FormField::ORDER.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = FormField::ORDER[(pos + 1) % FormField::ORDER.len()];
    }

    pub fn prev_field(&mut self) {
        let pos = FormField::ORDER.iter().position(|f| *f == self.field).unwrap_or(0);
        self.field = FormField::ORDER[(pos + FormField::ORDER.len() - 1) % FormField::ORDER.len()];
    }

    fn active_buffer(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::Assignee => Some(&mut self.assignee),
            FormField::Tags => Some(&mut self.tags),
            FormField::DueDate => Some(&mut self.due_date),
            FormField::Priority => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(buffer) = self.active_buffer() {
            buffer.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(buffer) = self.active_buffer() {
            buffer.pop();
        }
    }

    pub fn cycle_priority(&mut self) {
        self.priority = self.priority.next();
    }

    pub fn field_text(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
            FormField::Assignee => &self.assignee,
            FormField::Tags => &self.tags,
            FormField::DueDate => &self.due_date,
            FormField::Priority => self.priority.as_str(),
        }
    }

    pub fn parsed_due(&self) -> Result<Option<NaiveDate>, String> {
        let text = self.due_date.trim();
        if text.is_empty() {
            return Ok(None);
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| "due date must be YYYY-MM-DD".to_string())
    }

    /// Comma-separated tags, `#` prefixes stripped, duplicates dropped
    pub fn parsed_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for tag in self.tags.split(',') {
            let tag = tag.trim().trim_start_matches('#');
            if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        tags
    }
}

/// Column geometry cached at render time, for mouse hit-testing
#[derive(Debug, Clone)]
pub struct ColumnRect {
    pub column_id: String,
    /// Full column area including the header
    pub area: Rect,
    /// Card list area
    pub cards: Rect,
    /// Scroll offset of the card list, in rows
    pub scroll: usize,
}

impl ColumnRect {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.area.x
            && x < self.area.x + self.area.width
            && y >= self.area.y
            && y < self.area.y + self.area.height
    }

    /// Pointer is on the column header (column-drag territory)
    pub fn in_header(&self, y: u16) -> bool {
        y >= self.area.y && y < self.cards.y
    }

    /// Visible-list index of the card under the pointer, if any
    pub fn card_index_at(&self, y: u16, visible_len: usize) -> Option<usize> {
        if y < self.cards.y {
            return None;
        }
        let row = self.scroll + (y - self.cards.y) as usize;
        let index = row / CARD_HEIGHT as usize;
        (index < visible_len).then_some(index)
    }

    /// Insertion slot under the pointer: upper part of a card inserts
    /// before it, lower part after. Clamped to the visible length.
    pub fn insert_index_at(&self, y: u16, visible_len: usize) -> usize {
        if y < self.cards.y {
            return 0;
        }
        let row = self.scroll + (y - self.cards.y) as usize;
        ((row + CARD_HEIGHT as usize / 2) / CARD_HEIGHT as usize).min(visible_len)
    }
}

#[derive(Debug, Clone, Default)]
pub struct BoardLayout {
    pub columns: Vec<ColumnRect>,
}

impl BoardLayout {
    pub fn column_at(&self, x: u16, y: u16) -> Option<&ColumnRect> {
        self.columns.iter().find(|c| c.contains(x, y))
    }
}

/// Main application state
pub struct App {
    pub board: Board,
    pub config_path: Option<PathBuf>,
    pub config_doc: toml_edit::DocumentMut,
    pub ui_config: UiConfig,
    pub theme: Theme,
    pub theme_name: String,
    pub mode: Mode,
    pub should_quit: bool,
    pub show_help: bool,
    /// Cursor column (index into board.columns)
    pub cursor_column: usize,
    /// Cursor row within the column's visible (filtered) list
    pub cursor_row: usize,
    /// Per-column scroll offset, in rows
    pub column_scroll: HashMap<String, usize>,
    pub filter: FilterState,
    /// Search text as typed (pre-debounce)
    pub search_input: String,
    /// When the typed text is considered settled
    search_settle: Option<Instant>,
    pub drag: DragSession,
    pub keyboard_drag: KeyboardDrag,
    pub form: Option<TaskForm>,
    /// Task id awaiting delete confirmation
    pub confirm_delete: Option<String>,
    pub status_message: Option<String>,
    pub layout: BoardLayout,
}

impl App {
    pub fn new(
        board: Board,
        ui_config: UiConfig,
        config_path: Option<PathBuf>,
        config_doc: toml_edit::DocumentMut,
    ) -> Self {
        let (theme_name, theme) = Theme::from_config(&ui_config);
        App {
            board,
            config_path,
            config_doc,
            ui_config,
            theme,
            theme_name,
            mode: Mode::Navigate,
            should_quit: false,
            show_help: false,
            cursor_column: 0,
            cursor_row: 0,
            column_scroll: HashMap::new(),
            filter: FilterState::default(),
            search_input: String::new(),
            search_settle: None,
            drag: DragSession::default(),
            keyboard_drag: KeyboardDrag::default(),
            form: None,
            confirm_delete: None,
            status_message: None,
            layout: BoardLayout::default(),
        }
    }

    // -----------------------------------------------------------------------
    // Cursor & views

    /// The column under the cursor
    pub fn current_column(&self) -> Option<&Column> {
        self.board.columns.get(self.cursor_column)
    }

    /// Filtered view of a column's task ids, in stored order
    pub fn visible_ids(&self, column_id: &str) -> Vec<String> {
        match self.board.column(column_id) {
            Some(column) => self.filter.visible_ids(&self.board, column),
            None => Vec::new(),
        }
    }

    /// Task id under the cursor, through the filter
    pub fn cursor_task_id(&self) -> Option<String> {
        let column = self.current_column()?;
        self.visible_ids(&column.id).get(self.cursor_row).cloned()
    }

    /// Keep the cursor on a valid column/row after any mutation
    pub fn clamp_cursor(&mut self) {
        if self.board.columns.is_empty() {
            self.cursor_column = 0;
            self.cursor_row = 0;
            return;
        }
        self.cursor_column = self.cursor_column.min(self.board.columns.len() - 1);
        let len = self
            .current_column()
            .map_or(0, |c| self.visible_ids(&c.id).len());
        self.cursor_row = self.cursor_row.min(len.saturating_sub(1));
    }

    /// Point the cursor at a task, wherever it now is in the filtered view
    pub fn move_cursor_to_task(&mut self, task_id: &str) {
        for (col_idx, column) in self.board.columns.iter().enumerate() {
            if let Some(row) = self
                .visible_ids(&column.id)
                .iter()
                .position(|id| id == task_id)
            {
                self.cursor_column = col_idx;
                self.cursor_row = row;
                return;
            }
        }
        self.clamp_cursor();
    }

    pub fn scroll_for(&self, column_id: &str) -> usize {
        self.column_scroll.get(column_id).copied().unwrap_or(0)
    }

    pub fn set_scroll(&mut self, column_id: &str, offset: usize) {
        self.column_scroll.insert(column_id.to_string(), offset);
    }

    /// Map a visible-list insertion slot to an index into the column's
    /// stored task_ids. Slot == visible length means append.
    pub fn stored_insert_index(&self, column_id: &str, visible_index: usize) -> usize {
        let Some(column) = self.board.column(column_id) else {
            return 0;
        };
        let visible = self.visible_ids(column_id);
        match visible.get(visible_index) {
            Some(id) => column.index_of(id).unwrap_or(column.len()),
            None => column.len(),
        }
    }

    /// Map a stored index back to a visible-list slot, for indicator
    /// rendering under an active filter.
    pub fn visible_slot(&self, column_id: &str, stored_index: usize) -> usize {
        let Some(column) = self.board.column(column_id) else {
            return 0;
        };
        let visible = self.visible_ids(column_id);
        visible
            .iter()
            .filter(|id| column.index_of(id).is_some_and(|pos| pos < stored_index))
            .count()
    }

    // -----------------------------------------------------------------------
    // Moves

    /// Apply a move produced by either drag path, then follow the task
    pub fn apply_move_request(&mut self, request: MoveRequest) {
        if board_ops::apply_move(&mut self.board, &request) {
            self.set_status(format!("{} → {}", request.task_id, request.to_column));
            self.move_cursor_to_task(&request.task_id);
        }
        self.clamp_cursor();
    }

    // -----------------------------------------------------------------------
    // Search debounce

    /// Record a keystroke in the search input: the filter stays put until
    /// the text settles.
    pub fn note_search_input(&mut self) {
        self.search_settle = Some(Instant::now() + SEARCH_DEBOUNCE);
    }

    /// Commit the typed query immediately (Enter) and stop the timer
    pub fn commit_search(&mut self) {
        self.filter.query = self.search_input.clone();
        self.search_settle = None;
        self.clamp_cursor();
    }

    /// Flush the debounce if its deadline passed. Called on every loop
    /// tick; returns true when the filter changed.
    pub fn flush_search(&mut self, now: Instant) -> bool {
        match self.search_settle {
            Some(deadline) if now >= deadline => {
                self.search_settle = None;
                if self.filter.query != self.search_input {
                    self.filter.query = self.search_input.clone();
                    self.clamp_cursor();
                    return true;
                }
                false
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn search_pending(&self) -> bool {
        self.search_settle.is_some()
    }

    // -----------------------------------------------------------------------
    // Theme & status

    /// Flip dark/light and persist the choice, ignoring storage failures
    pub fn toggle_theme(&mut self) {
        self.theme_name = if self.theme_name == "light" {
            "dark".to_string()
        } else {
            "light".to_string()
        };
        let mut theme = Theme::named(&self.theme_name);
        theme.apply_overrides(&self.ui_config);
        self.theme = theme;
        if let Some(path) = self.config_path.clone() {
            persist_theme(&path, &mut self.config_doc, &self.theme_name);
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    // -----------------------------------------------------------------------
    // Form & confirm helpers

    pub fn open_create_form(&mut self) {
        let Some(column_id) = self.current_column().map(|c| c.id.clone()) else {
            return;
        };
        self.form = Some(TaskForm::create(column_id));
        self.mode = Mode::Create;
    }

    pub fn open_edit_form(&mut self) {
        if let Some(task_id) = self.cursor_task_id() {
            if let Some(task) = self.board.task(&task_id) {
                self.form = Some(TaskForm::edit(task));
                self.mode = Mode::Edit;
            }
        }
    }

    /// Submit the open form. Returns to Navigate on success; a validation
    /// problem keeps the form open with a status message.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.clone() else {
            return;
        };
        let due = match form.parsed_due() {
            Ok(due) => due,
            Err(message) => {
                self.set_status(message);
                return;
            }
        };
        if form.title.trim().is_empty() {
            self.set_status("title must not be empty");
            return;
        }

        match &form.target {
            FormTarget::Create { column_id } => {
                let mut draft = Task::new("", form.title.trim(), "");
                draft.description =
                    (!form.description.trim().is_empty()).then(|| form.description.trim().into());
                draft.assignee =
                    (!form.assignee.trim().is_empty()).then(|| form.assignee.trim().into());
                draft.tags = form.parsed_tags();
                draft.due_date = due;
                draft.priority = form.priority;
                match board_ops::create_task(&mut self.board, column_id, draft) {
                    Some(id) => {
                        self.set_status(format!("created {}", id));
                        self.move_cursor_to_task(&id);
                    }
                    None => self.set_status(format!("unknown column: {}", column_id)),
                }
            }
            FormTarget::Edit { task_id } => {
                let patch = TaskPatch {
                    title: Some(form.title.trim().to_string()),
                    description: Some(
                        (!form.description.trim().is_empty())
                            .then(|| form.description.trim().to_string()),
                    ),
                    assignee: Some(
                        (!form.assignee.trim().is_empty())
                            .then(|| form.assignee.trim().to_string()),
                    ),
                    tags: Some(form.parsed_tags()),
                    due_date: Some(due),
                    priority: Some(form.priority),
                    status: None,
                };
                if board_ops::update_task(&mut self.board, task_id, patch) {
                    self.set_status(format!("updated {}", task_id));
                } else {
                    self.set_status(format!("task vanished: {}", task_id));
                }
            }
        }
        self.form = None;
        self.mode = Mode::Navigate;
        self.clamp_cursor();
    }
}

/// Run the TUI application
pub fn run(config_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = match discover_config(config_path) {
        Some(path) => {
            let (config, doc) = read_config(&path)?;
            let board = Board::from_config(&config);
            App::new(board, config.ui.clone(), Some(path), doc)
        }
        None => App::new(
            Board::sample(),
            UiConfig::default(),
            None,
            toml_edit::DocumentMut::default(),
        ),
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Short poll so the search debounce fires without further input
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }
        app.flush_search(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
