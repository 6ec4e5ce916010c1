//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle: pointer and key messages drive the drag
//! coordinator, drops are written to the task store, and every render pass
//! remounts the zones and handles the next pointer event is resolved against.

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use taskboard_config::Config;
use taskboard_dnd::{
    DragCoordinator, DragError, DropOutcome, HandleSet, SessionToken, StatusAggregator,
};
use taskboard_protocol::{MemoryTaskStore, Message, TaskStore, display_name};
use tracing::{debug, info, warn};

use crate::{
    AppState,
    event::{event_to_message, poll_event},
    layout::{MIN_HEIGHT, MIN_WIDTH, ScreenLayout},
    notification::Notification,
    terminal::AppTerminal,
    widgets::{
        DragView, MountedBoard, render_board, render_chart, render_help_overlay,
        render_status_bar,
    },
};

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    dnd: DragCoordinator,
    /// Task cards mounted by the last render, used for pointer hit-testing.
    handles: HandleSet,
    chart: StatusAggregator,
    /// Token of the drag started by the last pointer press.
    drag_token: Option<SessionToken>,
    notification: Option<Notification>,
    should_quit: bool,
    /// Last known terminal area.
    last_area: Rect,
    /// Whether the header was shown in the last render.
    header_visible: bool,
    /// The application configuration.
    config: Config,
}

impl App {
    /// Creates a new application over the given task store.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_protocol::dummy::dummy_store;
    /// use taskboard_tui::App;
    ///
    /// let app = App::new(dummy_store());
    /// assert!(!app.is_dragging());
    /// ```
    #[must_use]
    pub fn new(store: MemoryTaskStore) -> Self {
        Self::with_config(store, Config::default())
    }

    /// Creates a new application with the given task store and configuration.
    ///
    /// The configured columns are shown first, in order, and the chart starts
    /// shown or hidden as configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use taskboard_config::Config;
    /// use taskboard_protocol::MemoryTaskStore;
    /// use taskboard_tui::App;
    ///
    /// let mut config = Config::default();
    /// config.board.show_chart = false;
    ///
    /// let app = App::with_config(MemoryTaskStore::new(), config);
    /// assert!(!app.state().chart_visible);
    /// assert_eq!(app.state().columns, ["todo", "doing", "done"]);
    /// ```
    #[must_use]
    pub fn with_config(store: MemoryTaskStore, config: Config) -> Self {
        let mut state = AppState::new(store, config.board.columns.clone());
        state.chart_visible = config.board.show_chart;

        let mut chart = StatusAggregator::new();
        chart.sync(&state.store);

        Self {
            state,
            dnd: DragCoordinator::new(),
            handles: HandleSet::new(),
            chart,
            drag_token: None,
            notification: None,
            should_quit: false,
            last_area: Rect::default(),
            header_visible: true,
            config,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the per-status counts the chart shows.
    #[must_use]
    pub fn chart(&self) -> &StatusAggregator {
        &self.chart
    }

    /// Returns the notification currently shown in the status bar.
    #[must_use]
    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Returns `true` while a card is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dnd.is_dragging()
    }

    /// Returns `true` once the user asked to quit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    ///
    /// When the help overlay is visible, most messages dismiss it instead of
    /// performing their normal action. `Quit`, `ToggleHelp` and `Tick` work
    /// normally, and pointer motion is ignored.
    pub fn update(&mut self, msg: Message) {
        if self.state.help_visible {
            match msg {
                Message::Quit => self.should_quit = true,
                Message::ToggleHelp => self.state.toggle_help(),
                Message::Tick => self.expire_notification(Instant::now()),
                Message::PointerDrag { .. } | Message::PointerUp { .. } => {}
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        match msg {
            Message::Quit => self.should_quit = true,
            Message::ToggleHelp => {
                self.cancel_drag();
                self.state.toggle_help();
            }
            Message::ToggleChart => self.state.toggle_chart(),
            Message::Escape => {
                if !self.cancel_drag() {
                    self.state.clear_selection();
                }
            }
            Message::NavigateLeft => self.state.navigate_left(),
            Message::NavigateRight => self.state.navigate_right(),
            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::PointerDown { column, row } => self.pointer_down(Position::new(column, row)),
            Message::PointerDrag { column, row } => self.pointer_drag(Position::new(column, row)),
            Message::PointerUp { column, row } => self.pointer_up(Position::new(column, row)),
            Message::Tick => self.expire_notification(Instant::now()),
        }
    }

    /// Starts a drag if the press lands on a task card.
    fn pointer_down(&mut self, pointer: Position) {
        let Some(handle) = self.handles.hit(pointer).copied() else {
            // A release lost outside the terminal leaves a drag behind
            self.cancel_drag();
            return;
        };

        let token = self.dnd.start(handle.payload());
        self.drag_token = Some(token);
        let _ = self.state.select_task_by_id(handle.task_id);
        self.track(token, pointer);
    }

    fn pointer_drag(&mut self, pointer: Position) {
        if let Some(token) = self.drag_token {
            self.track(token, pointer);
        }
    }

    /// Drops the dragged card on the zone under the pointer.
    fn pointer_up(&mut self, pointer: Position) {
        let Some(token) = self.drag_token.take() else {
            return;
        };
        self.track(token, pointer);

        match self.dnd.drop(token, &mut self.state.store) {
            Ok(DropOutcome::Moved { task_id, from, to }) => {
                info!(%task_id, %from, %to, "task moved");
                self.refresh();
                let _ = self.state.select_task_by_id(task_id);
                self.notify(Notification::info(
                    format!("Moved to {}", display_name(&to)),
                    Instant::now(),
                    self.notification_ttl(),
                ));
            }
            Ok(DropOutcome::Unchanged { task_id, reason }) => {
                debug!(%task_id, ?reason, "drop left task in place");
            }
            Err(err) => self.report(err),
        }
    }

    /// Feeds a pointer position to the active drag.
    fn track(&mut self, token: SessionToken, pointer: Position) {
        if let Some(err) = self.dnd.pointer_moved(token, pointer).err() {
            self.report(err);
        }
    }

    fn report(&mut self, err: DragError) {
        if err.is_silent() {
            debug!(error = %err, "ignored drag event");
            if !self.dnd.is_dragging() {
                self.drag_token = None;
            }
            return;
        }

        warn!(error = %err, "drag failed");
        let text = match &err {
            DragError::DropRejected { source, .. } => format!("Couldn't move task: {source}"),
            other => format!("Couldn't move task: {other}"),
        };
        self.notify(Notification::error(text, Instant::now(), self.notification_ttl()));
    }

    /// Cancels the active drag. Returns `true` if there was one.
    fn cancel_drag(&mut self) -> bool {
        match self.drag_token.take() {
            Some(token) => self.dnd.cancel(token).is_ok(),
            None => self.dnd.abort().is_some(),
        }
    }

    /// Brings columns and chart in line with the store after a write.
    fn refresh(&mut self) {
        self.state.sync_columns();
        if self.chart.sync(&self.state.store) {
            debug!(total = self.chart.total(), "chart counts updated");
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    fn notification_ttl(&self) -> Duration {
        Duration::from_secs(self.config.board.notification_secs)
    }

    fn expire_notification(&mut self, now: Instant) {
        if self.notification.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notification = None;
        }
    }

    /// Renders the application UI to the given frame.
    ///
    /// Shows a "terminal too small" message if the terminal is below the
    /// minimum dimensions. Otherwise renders header, board, chart and status
    /// bar, then mounts the drawn columns and cards for hit-testing.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.last_area = area;

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.mount(MountedBoard::default());
            self.render_terminal_too_small(frame, area);
            return;
        }

        let layout = ScreenLayout::compute(area, self.state.chart_visible);
        self.header_visible = layout.header.is_some();
        if let Some(header) = layout.header {
            self.render_header(frame, header);
        }

        let drag = DragView {
            dragged: self.dnd.session().map(|s| s.task_id),
            hovered: self.dnd.hovered_zone(),
        };
        let mounted = render_board(&self.state, drag, layout.board, frame.buffer_mut());
        self.mount(mounted);

        if let Some(chart) = layout.chart {
            render_chart(self.chart.counts(), chart, frame.buffer_mut());
        }
        render_status_bar(
            self.notification.as_ref(),
            self.dnd.is_dragging(),
            layout.status_bar,
            frame.buffer_mut(),
        );

        if self.state.help_visible {
            render_help_overlay(area, frame.buffer_mut());
        }
    }

    /// Replaces the mounted zones and handles with the ones just drawn.
    fn mount(&mut self, mounted: MountedBoard) {
        self.dnd.mount_zones(mounted.zones);

        self.handles.clear();
        for (task_id, bounds) in mounted.handles {
            self.handles.mount(task_id, bounds);
        }

        if let Some(task_id) = self.dnd.session().map(|s| s.task_id)
            && !self.handles.is_mounted(task_id)
            && self.dnd.handle_unmounted(task_id)
        {
            self.drag_token = None;
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

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application. It polls
    /// for events, updates state, and renders the UI; an idle poll becomes a
    /// [`Message::Tick`].
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use taskboard_protocol::dummy::dummy_store;
    /// use taskboard_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(dummy_store());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        info!(
            columns = self.state.columns.len(),
            tasks = self.state.store.len(),
            "board opened"
        );

        loop {
            terminal.draw(|frame| self.view(frame))?;

            let msg = match poll_event()? {
                Some(event) => event_to_message(&event),
                None => Some(Message::Tick),
            };
            if let Some(msg) = msg {
                self.update(msg);
            }

            if self.should_quit {
                break;
            }
        }

        info!(revision = self.state.store.revision(), "board closed");
        Ok(())
    }

    /// Renders the header bar with title and help cue.
    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(17)]).areas(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                self.config.board.title.as_str(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" - "),
            Span::styled(
                format!("{} tasks", self.chart.total()),
                Style::default().fg(Color::White),
            ),
        ]));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};
    use taskboard_protocol::{Task, TaskId, dummy};

    use super::*;
    use crate::test_utils::buffer_to_string;

    fn sample_store() -> MemoryTaskStore {
        MemoryTaskStore::from_tasks(vec![
            Task::new("Write docs", "Explain drag and drop").with_status("todo"),
            Task::new("Fix bug", "Off by one").with_status("todo"),
            Task::new("Ship", "Tag the release").with_status("done"),
        ])
    }

    fn task_id(app: &App, title: &str) -> TaskId {
        app.state
            .store
            .list_tasks()
            .iter()
            .find(|t| t.title == title)
            .map(|t| t.id)
            .unwrap()
    }

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn center(bounds: Rect) -> (u16, u16) {
        (bounds.x + bounds.width / 2, bounds.y + bounds.height / 2)
    }

    fn card_of(app: &App, id: TaskId) -> (u16, u16) {
        let handle = app.handles.iter().find(|h| h.task_id == id).unwrap();
        center(handle.bounds)
    }

    fn column_of(app: &App, status: &str) -> (u16, u16) {
        center(app.dnd.zones().get(status).unwrap().bounds)
    }

    fn drag(app: &mut App, from: (u16, u16), to: (u16, u16)) {
        app.update(Message::PointerDown {
            column: from.0,
            row: from.1,
        });
        app.update(Message::PointerDrag {
            column: to.0,
            row: to.1,
        });
        app.update(Message::PointerUp {
            column: to.0,
            row: to.1,
        });
    }

    #[test]
    fn app_new_shows_configured_then_observed_columns() {
        let app = App::new(dummy::dummy_store());

        assert_eq!(
            app.state().columns,
            ["todo", "doing", "done", "in_progress", "review", "unset"]
        );
        assert_eq!(app.chart().total(), 8);
    }

    #[test]
    fn app_quit_message_sets_should_quit() {
        let mut app = App::new(sample_store());
        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn app_toggle_chart() {
        let mut app = App::new(sample_store());
        assert!(app.state().chart_visible);

        app.update(Message::ToggleChart);
        assert!(!app.state().chart_visible);
    }

    #[test]
    fn app_help_dismisses_on_any_key() {
        let mut app = App::new(sample_store());
        app.update(Message::ToggleHelp);
        assert!(app.state().help_visible);

        app.update(Message::NavigateRight);
        assert!(!app.state().help_visible);
        assert_eq!(app.state().selected_column, 0);
    }

    #[test]
    fn app_quit_works_with_help_visible() {
        let mut app = App::new(sample_store());
        app.update(Message::ToggleHelp);
        app.update(Message::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn drag_moves_task_and_updates_chart() {
        let mut app = App::new(sample_store());
        render(&mut app, 100, 24);
        let id = task_id(&app, "Write docs");

        let from = card_of(&app, id);
        let to = column_of(&app, "done");
        drag(&mut app, from, to);

        assert_eq!(app.state().store.get_task(id).unwrap().status, "done");
        assert_eq!(app.chart().count_of("done"), 2);
        assert_eq!(app.chart().count_of("todo"), 1);
        assert!(!app.is_dragging());
        assert_eq!(app.state().selected_task().map(|t| t.id), Some(id));

        let note = app.notification().unwrap();
        assert!(!note.is_error());
        assert_eq!(note.text, "Moved to Done");

        let content = render(&mut app, 100, 24);
        assert!(content.contains("Todo (1)"));
        assert!(content.contains("Done (2)"));
        assert!(content.contains("Moved to Done"));
    }

    #[test]
    fn drop_on_source_column_changes_nothing() {
        let mut app = App::new(sample_store());
        render(&mut app, 100, 24);
        let id = task_id(&app, "Fix bug");
        let revision = app.state().store.revision();

        let from = card_of(&app, id);
        let to = column_of(&app, "todo");
        drag(&mut app, from, to);

        assert_eq!(app.state().store.revision(), revision);
        assert!(app.notification().is_none());
    }

    #[test]
    fn drop_outside_every_column_changes_nothing() {
        let mut app = App::new(sample_store());
        render(&mut app, 100, 24);
        let id = task_id(&app, "Fix bug");
        let revision = app.state().store.revision();

        // Bottom row belongs to the status bar
        let from = card_of(&app, id);
        drag(&mut app, from, (1, 23));

        assert_eq!(app.state().store.revision(), revision);
        assert_eq!(app.state().store.get_task(id).unwrap().status, "todo");
        assert!(!app.is_dragging());
    }

    #[test]
    fn rejected_drop_shows_error_notification() {
        let mut store = MemoryTaskStore::with_allowed_statuses(["todo", "done"]);
        store.add_task(Task::new("Write docs", "").with_status("todo"));
        let mut app = App::new(store);
        render(&mut app, 100, 24);
        let id = task_id(&app, "Write docs");

        let from = card_of(&app, id);
        let to = column_of(&app, "doing");
        drag(&mut app, from, to);

        assert_eq!(app.state().store.get_task(id).unwrap().status, "todo");
        let note = app.notification().unwrap();
        assert!(note.is_error());
        assert!(note.text.starts_with("Couldn't move task"));

        let content = render(&mut app, 100, 24);
        assert!(content.contains("Couldn't move task"));
    }

    #[test]
    fn notification_expires_on_tick() {
        let mut app = App::new(sample_store());
        render(&mut app, 100, 24);
        let id = task_id(&app, "Write docs");
        let from = card_of(&app, id);
        let to = column_of(&app, "done");
        drag(&mut app, from, to);
        assert!(app.notification().is_some());

        app.expire_notification(Instant::now() + Duration::from_secs(1));
        assert!(app.notification().is_some());

        app.expire_notification(Instant::now() + Duration::from_secs(60));
        assert!(app.notification().is_none());
    }

    #[test]
    fn escape_cancels_drag_and_keeps_selection() {
        let mut app = App::new(sample_store());
        render(&mut app, 100, 24);
        let id = task_id(&app, "Fix bug");
        let (column, row) = card_of(&app, id);

        app.update(Message::PointerDown { column, row });
        assert!(app.is_dragging());

        app.update(Message::Escape);
        assert!(!app.is_dragging());
        assert_eq!(app.state().selected_task().map(|t| t.id), Some(id));

        let (column, row) = column_of(&app, "done");
        app.update(Message::PointerUp { column, row });
        assert_eq!(app.state().store.get_task(id).unwrap().status, "todo");
    }

    #[test]
    fn escape_without_drag_clears_selection() {
        let mut app = App::new(sample_store());
        app.update(Message::NavigateDown);
        assert!(app.state().selected_task.is_some());

        app.update(Message::Escape);
        assert!(app.state().selected_task.is_none());
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut app = App::new(sample_store());
        render(&mut app, 100, 24);
        let revision = app.state().store.revision();

        let (column, row) = column_of(&app, "done");
        app.update(Message::PointerUp { column, row });

        assert_eq!(app.state().store.revision(), revision);
        assert!(app.notification().is_none());
    }

    #[test]
    fn press_outside_cards_starts_nothing() {
        let mut app = App::new(sample_store());
        render(&mut app, 100, 24);

        app.update(Message::PointerDown { column: 0, row: 0 });
        assert!(!app.is_dragging());
    }

    #[test]
    fn opening_help_cancels_drag() {
        let mut app = App::new(sample_store());
        render(&mut app, 100, 24);
        let (column, row) = card_of(&app, task_id(&app, "Ship"));

        app.update(Message::PointerDown { column, row });
        app.update(Message::ToggleHelp);

        assert!(!app.is_dragging());
        assert!(app.state().help_visible);
    }

    #[test]
    fn shrinking_below_minimum_aborts_drag() {
        let mut app = App::new(sample_store());
        render(&mut app, 100, 24);
        let (column, row) = card_of(&app, task_id(&app, "Ship"));
        app.update(Message::PointerDown { column, row });
        assert!(app.is_dragging());

        render(&mut app, 30, 8);

        assert!(!app.is_dragging());
        assert!(app.handles.is_empty());
        assert!(app.dnd.zones().is_empty());
    }

    #[test]
    fn dragging_shows_drop_hints() {
        let mut app = App::new(sample_store());
        render(&mut app, 100, 24);
        let (column, row) = card_of(&app, task_id(&app, "Fix bug"));
        let to = column_of(&app, "done");

        app.update(Message::PointerDown { column, row });
        app.update(Message::PointerDrag {
            column: to.0,
            row: to.1,
        });

        let content = render(&mut app, 100, 24);
        assert!(content.contains("+ drop here"));
        assert!(content.contains("Esc Cancel"));
    }

    // --- Graceful degradation tests ---

    #[test]
    fn app_view_shows_too_small_message_when_height_below_minimum() {
        let mut app = App::new(sample_store());

        let content = render(&mut app, 80, 8);

        assert!(!app.header_visible);
        assert!(content.contains("Terminal too small"));
    }

    #[test]
    fn app_view_shows_too_small_message_when_width_below_minimum() {
        let mut app = App::new(sample_store());

        let content = render(&mut app, 30, 24);

        assert!(!app.header_visible);
        assert!(content.contains("Terminal too small"));
    }

    #[test]
    fn app_view_hides_header_in_compact_mode() {
        let mut app = App::new(sample_store());

        let content = render(&mut app, 80, 11);

        assert!(!app.header_visible);
        assert!(content.contains("Todo (2)"));
        assert_eq!(app.last_area, Rect::new(0, 0, 80, 11));
    }

    #[test]
    fn app_view_shows_configured_title() {
        let mut config = Config::default();
        config.board.title = "Sprint 12".to_string();
        let mut app = App::with_config(sample_store(), config);

        let content = render(&mut app, 80, 15);

        assert!(app.header_visible);
        assert!(content.contains("Sprint 12 - 3 tasks"));
        assert!(content.contains("Press ? for help"));
    }

    #[test]
    fn hidden_chart_is_not_rendered() {
        let mut config = Config::default();
        config.board.show_chart = false;
        let mut app = App::with_config(sample_store(), config);

        let content = render(&mut app, 100, 24);

        assert!(!content.contains("Status (3)"));
        app.update(Message::ToggleChart);
        let content = render(&mut app, 100, 24);
        assert!(content.contains("Status (3)"));
    }
}
