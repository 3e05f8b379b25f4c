use crate::context::SiteContext;
use crate::routes::{Route, Topic, NAV_LINKS};
use crate::ui::pages::{Page, PageAction};
use crate::ui::panes::{render_footer, render_header, render_menu, render_status_bar, HeaderState};
use crate::ui::theme::theme;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Main application state
pub struct App {
    ctx: SiteContext,

    /// Current route and its page state
    route: Route,
    page: Page,

    /// Paths visited before the current one, most recent last
    history: Vec<String>,

    header: HeaderState,

    /// Whether the app should quit
    should_quit: bool,

    /// Status message to display
    status_message: String,
}

impl App {
    /// Create the app on the configured start route
    pub fn new(ctx: SiteContext) -> Self {
        let route = Route::resolve(&ctx.config.start_route);
        let page = Page::for_route(&route, &ctx);
        App {
            ctx,
            route,
            page,
            history: Vec::new(),
            header: HeaderState::default(),
            should_quit: false,
            status_message: String::from("Welcome!"),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn header(&self) -> &HeaderState {
        &self.header
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Go to `path`, remembering the current one. Unmatched paths land on
    /// the not-found page.
    pub fn navigate(&mut self, path: &str) {
        let route = Route::resolve(path);
        if route == self.route {
            return;
        }
        tracing::debug!(from = %self.route, to = %route, "navigate");
        self.history.push(self.route.path());
        self.show(route);
    }

    /// Return to the previous path. Returns false when there is none.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(path) => {
                self.show(Route::resolve(&path));
                true
            }
            None => false,
        }
    }

    fn show(&mut self, route: Route) {
        self.page = Page::for_route(&route, &self.ctx);
        self.status_message = match &route {
            Route::NotFound(path) => format!("No page at {}", path),
            other => other.to_string(),
        };
        self.route = route;
        self.header.menu_open = false;
    }

    /// Open the patterns index filtered by `term`
    fn search(&mut self, term: String) {
        self.navigate(&Route::Patterns.path());
        if let Page::Patterns(page) = &mut self.page {
            page.set_search(term);
        }
    }

    /// Advance pending simulated runs on the current page
    pub fn tick(&mut self, now: Instant) {
        self.page.tick(now);
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick(Instant::now());

            // Poll with a timeout so pending runs complete without input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let palette = theme(self.ctx.dark_mode());

        frame.render_widget(
            Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
            size,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.header.height()),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(size);

        render_header(frame, chunks[0], &self.route, &self.header, palette);
        self.page.render(frame, chunks[1], palette);
        render_footer(frame, chunks[2], palette);

        let mode = if self.header.search_open {
            Some("SEARCH")
        } else if self.header.menu_open {
            Some("MENU")
        } else {
            self.page.mode()
        };
        render_status_bar(
            frame,
            chunks[3],
            &self.route,
            &self.status_message,
            self.page.hints(),
            mode,
            palette,
        );

        if self.header.menu_open {
            render_menu(frame, size, &self.route, palette);
        }
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.header.search_open {
            self.handle_search_key(key);
            return;
        }

        if self.header.menu_open {
            self.handle_menu_key(key);
            return;
        }

        match self.page.handle_key(key) {
            PageAction::Handled => return,
            PageAction::Navigate(path) => {
                self.navigate(&path);
                return;
            }
            PageAction::Status(message) => {
                self.status_message = message;
                return;
            }
            PageAction::Ignored => {}
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Esc | KeyCode::Backspace => {
                if !self.back() {
                    self.status_message = "Nothing to go back to".to_string();
                }
            }
            KeyCode::Char('/') => self.header.toggle_search(),
            KeyCode::Char('m') => self.header.toggle_menu(),
            KeyCode::Char('g') => self.navigate(&Route::Topic(Topic::OopFundamentals).path()),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.header.toggle_search(),
            KeyCode::Enter => {
                let term = self.header.take_search();
                self.search(term);
            }
            KeyCode::Backspace => {
                self.header.search.pop();
            }
            KeyCode::Char(c) => self.header.search.push(c),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('m') => self.header.toggle_menu(),
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                if let Some(link) = NAV_LINKS.get(idx) {
                    self.navigate(link.path);
                }
                self.header.menu_open = false;
            }
            KeyCode::Char('g') => {
                self.navigate(&Route::Topic(Topic::OopFundamentals).path());
                self.header.menu_open = false;
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }
}
