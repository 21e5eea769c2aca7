use super::drag::DragState;
use super::input::{self, AppAction};
use super::theme::Theme;
use super::view::TuiView;
use super::widgets::{BoardGeometry, BoardWidget, Highlights, NoticeWidget, StatusPanel};
use chess::{legal_destinations, BoardController, Grid, MoveAttempt, MoveOutcome};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

const STATUS_PANEL_HEIGHT: u16 = 7;

/// Interactive board state: the controller plus gesture and input tracking.
pub struct App {
    controller: BoardController<TuiView>,
    drag: DragState,
    input: String,
    theme: Theme,
    board_area: Rect,
}

impl App {
    pub fn new(grid: Grid, theme: Theme) -> Self {
        Self {
            controller: BoardController::new(grid, TuiView::new()),
            drag: DragState::default(),
            input: String::new(),
            theme,
            board_area: Rect::default(),
        }
    }

    /// Hand the initial grid to the view.
    pub fn start(&mut self) {
        self.controller.start();
    }

    pub fn grid(&self) -> &Grid {
        self.controller.grid()
    }

    pub fn view(&self) -> &TuiView {
        self.controller.view()
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Geometry of the board as last drawn.
    pub fn board_geometry(&self) -> BoardGeometry {
        BoardGeometry::for_area(self.board_area)
    }

    fn layout(area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(10),
                Constraint::Length(STATUS_PANEL_HEIGHT),
            ])
            .split(area);
        (chunks[0], chunks[1])
    }

    fn highlights(&self) -> Highlights {
        let mut highlights = Highlights {
            last_move: self.view().last_move(),
            ..Default::default()
        };
        if let Some((from, piece)) = self.drag.origin() {
            highlights.origin = Some(from);
            highlights.hover = self.drag.hovered();
            highlights.targets = legal_destinations(piece, from);
        }
        highlights
    }

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let (board_area, status_area) = Self::layout(area);
        self.board_area = board_area;

        let highlights = self.highlights();
        let view = self.controller.view();
        frame.render_widget(
            BoardWidget {
                grid: view.grid(),
                highlights: &highlights,
                theme: &self.theme,
            },
            board_area,
        );

        let placement = chess::encode_placement(view.grid());
        frame.render_widget(
            StatusPanel {
                placement: &placement,
                last_move: view.last_move(),
                status: view.status(),
                input: &self.input,
                theme: &self.theme,
            },
            status_area,
        );

        if let Some(notice) = view.notice() {
            frame.render_widget(
                NoticeWidget {
                    message: &notice.message,
                    detail: notice.detail.as_deref(),
                    theme: &self.theme,
                },
                area,
            );
        }
    }

    pub fn handle_event(&mut self, event: Event) -> AppAction {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                AppAction::Continue
            }
            _ => AppAction::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        // The notice is modal: nothing reaches the board until it is gone
        if self.view().notice().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.controller.view_mut().dismiss_notice();
            }
            return AppAction::Continue;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return AppAction::Quit;
            }
            KeyCode::Esc => {
                if self.drag.is_dragging() {
                    self.drag.cancel();
                } else if !self.input.is_empty() {
                    self.input.clear();
                } else {
                    return AppAction::Quit;
                }
            }
            KeyCode::Char('q') if self.input.is_empty() => return AppAction::Quit,
            KeyCode::Char('t') if self.input.is_empty() => {
                self.theme.toggle();
                tracing::debug!(theme = self.theme.name(), "theme toggled");
            }
            KeyCode::Char(c) => self.input.push(c),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => self.submit_input(),
            _ => {}
        }
        AppAction::Continue
    }

    fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input);
        if input.trim().is_empty() {
            return;
        }

        let (from, to) = match input::parse_move_input(&input) {
            Ok(squares) => squares,
            Err(e) => {
                tracing::debug!(input = %input, "unparsable move input: {}", e);
                self.controller.view_mut().set_status(e.to_string());
                return;
            }
        };

        let Some(piece) = self.controller.grid().piece_at(from) else {
            self.controller
                .view_mut()
                .set_status(format!("No piece on {from}"));
            return;
        };

        self.attempt(MoveAttempt::new(piece.glyph(), from, to));
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let square = self.board_geometry().square_at(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.view().notice().is_some() {
                    self.controller.view_mut().dismiss_notice();
                    return;
                }
                if let Some(square) = square {
                    if self.drag.begin(square, self.controller.grid()) {
                        tracing::debug!(from = %square, "drag started");
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => self.drag.hover(square),
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(attempt) = self.drag.drop_on(square) {
                    self.attempt(attempt);
                }
            }
            _ => {}
        }
    }

    fn attempt(&mut self, attempt: MoveAttempt) -> MoveOutcome {
        let outcome = self.controller.handle_move_attempt(&attempt);
        if outcome == MoveOutcome::Vacant {
            self.controller
                .view_mut()
                .set_status(format!("No piece on {}", attempt.from));
        }
        outcome
    }
}

/// Run the interactive board until the user quits.
pub async fn run_app(fen: &str, theme: Theme, tick: Duration) -> anyhow::Result<()> {
    // Decode before touching the terminal so bad input prints normally
    let grid = chess::decode(fen)?;
    let mut app = App::new(grid, theme);
    app.start();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_ui_loop(&mut terminal, &mut app, tick).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run_ui_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick: Duration,
) -> anyhow::Result<()> {
    let mut term_events = EventStream::new();
    let mut redraw_tick = tokio::time::interval(tick);

    loop {
        terminal.draw(|f| app.draw(f))?;

        let term_event = tokio::select! {
            biased;

            maybe_event = term_events.next() => {
                match maybe_event {
                    Some(Ok(ev)) => Some(ev),
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                        None
                    }
                    None => return Ok(()),
                }
            }

            _ = redraw_tick.tick() => None,
        };

        if let Some(event) = term_event {
            if app.handle_event(event) == AppAction::Quit {
                tracing::info!("quit requested");
                return Ok(());
            }
        }
    }
}
