//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tasklist_config::Config;
use tasklist_protocol::{Message, TaskStore};
use tracing::{debug, info};

use crate::{
    AppState, Focus,
    controller::Controller,
    event::{event_to_message, poll_event},
    layout::{HEADER_HEIGHT, INPUT_HEIGHT, MIN_HEIGHT, MIN_WIDTH, STATUS_HEIGHT},
    surface::{Screen, TextInput},
    terminal::AppTerminal,
    widgets::{
        control_at, render_help_overlay, render_input_bar, render_status_bar, render_task_panel,
        task_list::list_inner_area,
    },
};

/// The controller type the terminal front end drives.
pub type AppController = Controller<Screen<Message>, TextInput>;

/// The main application struct.
///
/// Owns the controller (and through it the task store) plus the purely
/// visual state: focus, selection and overlays.
#[derive(Debug)]
pub struct App {
    controller: AppController,
    state: AppState,
    should_quit: bool,
    /// Last known input bar area, used for click hit-testing.
    input_area: Rect,
    /// Last known list panel area, used for click hit-testing.
    list_area: Rect,
    /// Scroll offset of the list in the last render.
    list_offset: usize,
}

impl App {
    /// Creates a new application over the given store and renders the
    /// initial task view.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklist_protocol::{TaskStore, seed::default_seed};
    /// use tasklist_tui::App;
    ///
    /// let app = App::new(TaskStore::from_seed(default_seed()));
    /// assert_eq!(app.controller().display().entry_count(), 4);
    /// ```
    #[must_use]
    pub fn new(store: TaskStore) -> Self {
        let mut controller = Controller::new(store, Screen::new(), TextInput::new());
        controller.render_task_view();

        Self {
            controller,
            state: AppState::new(),
            should_quit: false,
            input_area: Rect::default(),
            list_area: Rect::default(),
            list_offset: 0,
        }
    }

    /// Creates a new application and applies the UI options from `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tasklist_config::Config;
    /// use tasklist_protocol::TaskStore;
    /// use tasklist_tui::App;
    ///
    /// let config = Config {
    ///     show_help_on_start: true,
    ///     ..Config::default()
    /// };
    /// let app = App::with_config(TaskStore::new(), &config);
    /// assert!(app.state().help_visible);
    /// ```
    #[must_use]
    pub fn with_config(store: TaskStore, config: &Config) -> Self {
        let mut app = Self::new(store);
        app.state.help_visible = config.show_help_on_start;
        app
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the controller.
    #[must_use]
    pub fn controller(&self) -> &AppController {
        &self.controller
    }

    /// Returns whether the application has been asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, most messages are intercepted to
    /// dismiss the help instead of their normal action. Only `Quit` and
    /// `ToggleHelp` work normally when help is shown.
    pub fn update(&mut self, msg: Message) {
        if self.state.help_visible {
            match msg {
                Message::Quit => {
                    self.should_quit = true;
                }
                Message::ToggleHelp | Message::Escape => {
                    self.state.toggle_help();
                }
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        if msg.is_mutation() {
            self.controller.update(msg);
            self.state
                .clamp_selection(self.controller.display().entry_count());
            return;
        }

        match msg {
            Message::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
            Message::InputChar { ch } => {
                self.state.focus = Focus::Input;
                self.controller.input_mut().push(ch);
            }
            Message::InputBackspace => {
                self.controller.input_mut().pop();
            }
            Message::NavigateUp => {
                self.state
                    .navigate_up(self.controller.display().entry_count());
            }
            Message::NavigateDown => {
                self.state
                    .navigate_down(self.controller.display().entry_count());
            }
            Message::SwitchFocus => {
                self.state
                    .switch_focus(self.controller.display().entry_count());
            }
            Message::Escape => {
                self.state.focus = Focus::Input;
            }
            Message::ToggleHelp => {
                self.state.toggle_help();
            }
            Message::Activate => {
                if let Some(index) = self.state.selected_entry {
                    self.activate_entry(index);
                }
            }
            Message::ClickAt { column, row } => {
                self.handle_click(column, row);
            }
            _ => {}
        }
    }

    /// Activates the control of the entry at `index` and dispatches the
    /// message it produces.
    fn activate_entry(&mut self, index: usize) {
        let Some(msg) = self
            .controller
            .display()
            .entry(index)
            .map(|entry| {
                debug!(index, id = %entry.control.task().id, "activating control");
                entry.control.activate()
            })
        else {
            return;
        };

        self.update(msg);
    }

    /// Handles a mouse click at the given coordinates.
    ///
    /// A click on an entry's control completes that task. A click elsewhere
    /// on an entry selects it, and a click on the input bar focuses it.
    fn handle_click(&mut self, column: u16, row: u16) {
        let position = (column, row).into();

        if self.input_area.contains(position) {
            self.state.focus = Focus::Input;
            return;
        }

        let entry_count = self.controller.display().entry_count();
        if let Some(index) = control_at(self.list_area, self.list_offset, entry_count, column, row)
        {
            self.state.focus = Focus::List;
            self.state.selected_entry = Some(index);
            self.activate_entry(index);
            return;
        }

        let inner = list_inner_area(self.list_area);
        if inner.contains(position) {
            let index = self.list_offset + usize::from(row - inner.y);
            if index < entry_count {
                self.state.focus = Focus::List;
                self.state.selected_entry = Some(index);
            }
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Below the minimum terminal size only a "terminal too small" message
    /// is drawn.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.input_area = Rect::default();
            self.list_area = Rect::default();
            self.render_terminal_too_small(frame, area);
            return;
        }

        let [header_area, input_area, list_area, status_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .areas(area);
        self.input_area = input_area;
        self.list_area = list_area;

        self.render_header(frame, header_area);

        let buf = frame.buffer_mut();
        render_input_bar(
            self.controller.input().as_str(),
            self.state.focus == Focus::Input,
            input_area,
            buf,
        );
        self.list_offset = render_task_panel(
            self.controller.display().root(),
            self.state.selected_entry,
            self.state.focus == Focus::List,
            list_area,
            buf,
        );
        render_status_bar(self.state.focus, status_area, buf);

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Renders the header bar with title, task counts and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(18), // "Press F1 for help" + padding
        ])
        .areas(inner);

        let store = self.controller.store();
        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                "tasklist",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(
                format!(
                    "{} open, {} done",
                    store.incomplete_count(),
                    store.complete_count()
                ),
                Style::default().fg(Color::White),
            ),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("F1", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use tasklist_protocol::TaskStore;
    /// use tasklist_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(TaskStore::new());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()?
                && let Some(msg) = event_to_message(&event, self.state.focus)
            {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}
