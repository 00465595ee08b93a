//! TUI application model (Elm architecture).

use std::io;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use memviz_core::charts::ChartOptions;
use memviz_core::constants::DEFAULT_TICK;
use memviz_core::selection::SelectionEvent;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::debug;

use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::messages::TuiMessage;
use crate::panels::{build_panels, Panel, PanelKind};
use crate::pointer::{map_mouse, PointerAction};
use crate::tooltip::render_tooltip;

/// Startup settings of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuiOptions {
    /// Panel shown first.
    pub initial: PanelKind,
    /// Chart overrides.
    pub charts: ChartOptions,
    /// Event-loop poll interval.
    pub tick_rate: Duration,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            initial: PanelKind::default(),
            charts: ChartOptions::default(),
            tick_rate: DEFAULT_TICK,
        }
    }
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// One panel per tab.
    panels: Vec<Box<dyn Panel>>,
    /// Index of the mounted panel.
    active: usize,
    /// Record under the pointer, if it selected one by hovering.
    hovered: Option<usize>,
    /// Message receiver.
    rx: Receiver<TuiMessage>,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    tick_rate: Duration,
}

impl TuiApp {
    /// Create a new TUI app. Nothing is mounted until [`start`](Self::start).
    #[must_use]
    pub fn new(rx: Receiver<TuiMessage>, opts: TuiOptions) -> Self {
        let panels = build_panels(&opts.charts);
        let active = opts.initial.index().min(panels.len().saturating_sub(1));
        Self {
            should_quit: false,
            panels,
            active,
            hovered: None,
            rx,
            terminal_width: 80,
            terminal_height: 24,
            tick_rate: opts.tick_rate,
        }
    }

    /// Kind of the mounted panel.
    #[must_use]
    pub fn active_kind(&self) -> PanelKind {
        self.panels[self.active].kind()
    }

    /// The mounted panel.
    #[must_use]
    pub fn active_panel(&self) -> &dyn Panel {
        self.panels[self.active].as_ref()
    }

    /// Record currently hovered by the pointer.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Mount the initial panel.
    pub fn start(&mut self, now: Instant) {
        debug!(panel = %self.active_kind(), "dashboard started");
        self.panels[self.active].mount(now);
    }

    /// Unmount the active panel, cancelling its timers.
    pub fn shutdown(&mut self) {
        self.panels[self.active].unmount();
    }

    /// Unmount the current panel and mount panel `index`.
    pub fn switch_to(&mut self, index: usize, now: Instant) {
        if index >= self.panels.len() || index == self.active {
            return;
        }
        self.panels[self.active].unmount();
        self.active = index;
        self.hovered = None;
        self.panels[self.active].mount(now);
        debug!(panel = %self.active_kind(), "panel switched");
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self, now: Instant) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg, now);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage, now: Instant) {
        match msg {
            TuiMessage::Tick => {
                self.tick(now);
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action, now);
            }
            TuiMessage::Pointer(pointer) => {
                self.handle_pointer(pointer, now);
            }
        }
    }

    /// Fire due timers of the mounted panel.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.panels[self.active].tick(now)
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction, now: Instant) {
        let count = self.panels.len();
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::NextPanel => {
                self.switch_to((self.active + 1) % count, now);
            }
            KeyAction::PrevPanel => {
                self.switch_to((self.active + count - 1) % count, now);
            }
            KeyAction::ShowPanel(index) => {
                self.switch_to(index, now);
            }
            KeyAction::SelectNext | KeyAction::SelectPrev => {
                let panel = &mut self.panels[self.active];
                let len = panel.record_count();
                if len == 0 {
                    return;
                }
                let next = match (panel.selection().index(), action) {
                    (None, KeyAction::SelectNext) => 0,
                    (None, _) => len - 1,
                    (Some(i), KeyAction::SelectNext) => (i + 1) % len,
                    (Some(i), _) => (i + len - 1) % len,
                };
                panel.select(SelectionEvent::HoverEnter(next));
            }
            KeyAction::Activate => {
                let panel = &mut self.panels[self.active];
                let index = panel.selection().index().unwrap_or(0);
                panel.select(SelectionEvent::Click(index));
            }
            KeyAction::ClearSelection => {
                self.panels[self.active].select(SelectionEvent::HoverLeave);
                self.hovered = None;
            }
            KeyAction::ToggleScale | KeyAction::NextScenario => {
                self.panels[self.active].handle_action(action, now);
            }
            KeyAction::None => {}
        }
    }

    /// Turn pointer input into hover and click events on the mounted panel.
    pub fn handle_pointer(&mut self, pointer: PointerAction, now: Instant) {
        let (_, body, _) = Self::compute_layout(Rect::new(0, 0, self.terminal_width, self.terminal_height));
        let panel = &mut self.panels[self.active];
        match pointer {
            PointerAction::Move { x, y } => {
                let hit = panel.hit_test(body, now, x, y, true);
                if hit == self.hovered {
                    return;
                }
                match hit {
                    Some(index) => panel.select(SelectionEvent::HoverEnter(index)),
                    None => panel.select(SelectionEvent::HoverLeave),
                }
                self.hovered = hit;
            }
            PointerAction::Click { x, y } => {
                if let Some(index) = panel.hit_test(body, now, x, y, false) {
                    panel.select(SelectionEvent::Click(index));
                }
            }
        }
    }

    /// Split the screen into header, panel body and footer.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(5),    // panel
                Constraint::Length(2), // footer
            ])
            .split(area);
        (outer[0], outer[1], outer[2])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame, now: Instant) {
        let (header_area, body, footer_area) = Self::compute_layout(frame.area());
        let panel = self.active_panel();

        let titles: Vec<&str> = self.panels.iter().map(|p| p.kind().title()).collect();
        render_header(frame, header_area, &titles, self.active);

        panel.render(frame, body, now);

        if let Some(tooltip) = panel.tooltip() {
            let selected = panel.selection().index();
            let anchor = panel
                .hitboxes(body, now)
                .into_iter()
                .find(|hb| Some(hb.index) == selected && !hb.area.is_empty())
                .map_or(Rect { height: 1, ..body }, |hb| hb.area);
            render_tooltip(frame, anchor, body, &tooltip);
        }

        render_footer(frame, footer_area, panel.hints());
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// Sets up the terminal, mounts the initial panel, runs the main loop
    /// (tick, render, poll, update) and tears down on exit, even when the
    /// loop fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let size = terminal.size()?;
        self.terminal_width = size.width;
        self.terminal_height = size.height;

        self.start(Instant::now());
        let result = self.event_loop(&mut terminal);
        self.shutdown();

        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        loop {
            let now = Instant::now();
            self.tick(now);

            terminal.draw(|frame| {
                self.render(frame, now);
            })?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(self.tick_rate)? {
                let msg = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        Some(TuiMessage::KeyPress(map_key(key)))
                    }
                    Event::Mouse(mouse) => map_mouse(mouse).map(TuiMessage::Pointer),
                    Event::Resize(width, height) => Some(TuiMessage::Resize { width, height }),
                    _ => None,
                };
                if let Some(msg) = msg {
                    self.handle_message(msg, Instant::now());
                }
            }

            // Messages from outside the UI thread (Ctrl+C handler)
            self.update(Instant::now());
        }
    }
}
