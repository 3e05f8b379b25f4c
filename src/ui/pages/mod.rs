//! Route-level pages
//!
//! Each page owns its UI state, reacts to keys through `handle_key`, and is
//! drawn by a `render` method. Pages never talk to each other: the only thing
//! a page can ask of the application is a [`PageAction`], usually a
//! navigation to another path.

pub mod fundamentals;
pub mod home;
pub mod not_found;
pub mod pattern;
pub mod patterns;
pub mod resources;
pub mod roadmap;
pub mod solid;
pub mod topic;

use crate::context::SiteContext;
use crate::routes::{Route, Topic};
use crate::runner::CodeRunner;
use crate::ui::panes::keep_visible;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

pub use fundamentals::FundamentalsPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use pattern::PatternPage;
pub use patterns::PatternsPage;
pub use resources::ResourcesPage;
pub use roadmap::RoadmapPage;
pub use solid::SolidPage;
pub use topic::TopicPage;

/// What a page asks of the application after handling a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    /// The page did not use the key; global bindings apply
    Ignored,
    /// The page used the key
    Handled,
    /// Go to another path
    Navigate(String),
    /// Show a message in the status bar
    Status(String),
}

/// Key/description pairs shown in the status bar
pub type Hints = &'static [(&'static str, &'static str)];

/// Clamped cursor over a list of `len` entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    len: usize,
}

impl Selection {
    pub fn new(len: usize) -> Self {
        Selection { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
    }

    pub fn prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// Change the list length, pulling the cursor back inside it
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = len.saturating_sub(1);
        }
    }
}

/// Wrapping tab selection; exactly one tab is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    index: usize,
    len: usize,
}

impl TabState {
    pub fn new(len: usize) -> Self {
        TabState { index: 0, len: len.max(1) }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Select `index` if it names a tab
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

/// A page of the application, one variant per route
pub enum Page {
    Home(HomePage),
    Roadmap(RoadmapPage),
    Fundamentals(FundamentalsPage),
    Solid(SolidPage),
    Topic(TopicPage),
    Patterns(PatternsPage),
    Pattern(PatternPage),
    Resources(ResourcesPage),
    NotFound(NotFoundPage),
}

impl Page {
    /// Fresh page state for `route`. Every visit starts from scratch.
    pub fn for_route(route: &Route, ctx: &SiteContext) -> Page {
        match route {
            Route::Home => Page::Home(HomePage::new()),
            Route::Roadmap => Page::Roadmap(RoadmapPage::new()),
            Route::Topic(Topic::OopFundamentals) => Page::Fundamentals(FundamentalsPage::new(ctx)),
            Route::Topic(Topic::SolidPrinciples) => Page::Solid(SolidPage::new(ctx)),
            Route::Topic(Topic::DesignPatterns) => Page::Topic(TopicPage::new()),
            Route::Patterns => Page::Patterns(PatternsPage::new()),
            Route::Pattern(id) => Page::Pattern(PatternPage::new(*id, ctx)),
            Route::Resources => Page::Resources(ResourcesPage::new()),
            Route::NotFound(path) => Page::NotFound(NotFoundPage::new(path.clone())),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        match self {
            Page::Home(p) => p.handle_key(key),
            Page::Roadmap(p) => p.handle_key(key),
            Page::Fundamentals(p) => p.handle_key(key),
            Page::Solid(p) => p.handle_key(key),
            Page::Topic(p) => p.handle_key(key),
            Page::Patterns(p) => p.handle_key(key),
            Page::Pattern(p) => p.handle_key(key),
            Page::Resources(p) => p.handle_key(key),
            Page::NotFound(p) => p.handle_key(key),
        }
    }

    /// Advance pending simulated runs
    pub fn tick(&mut self, now: Instant) {
        match self {
            Page::Fundamentals(p) => p.tick(now),
            Page::Pattern(p) => p.tick(now),
            _ => {}
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        match self {
            Page::Home(p) => p.render(frame, area, theme),
            Page::Roadmap(p) => p.render(frame, area, theme),
            Page::Fundamentals(p) => p.render(frame, area, theme),
            Page::Solid(p) => p.render(frame, area, theme),
            Page::Topic(p) => p.render(frame, area, theme),
            Page::Patterns(p) => p.render(frame, area, theme),
            Page::Pattern(p) => p.render(frame, area, theme),
            Page::Resources(p) => p.render(frame, area, theme),
            Page::NotFound(p) => p.render(frame, area, theme),
        }
    }

    pub fn hints(&self) -> Hints {
        match self {
            Page::Home(_) => home::HINTS,
            Page::Roadmap(_) => roadmap::HINTS,
            Page::Fundamentals(p) => p.hints(),
            Page::Solid(_) => solid::HINTS,
            Page::Topic(_) => topic::HINTS,
            Page::Patterns(p) => p.hints(),
            Page::Pattern(p) => p.hints(),
            Page::Resources(_) => resources::HINTS,
            Page::NotFound(_) => not_found::HINTS,
        }
    }

    /// Status bar badge for text-entry modes
    pub fn mode(&self) -> Option<&'static str> {
        match self {
            Page::Fundamentals(p) if p.is_editing() => Some("EDIT"),
            Page::Pattern(p) if p.is_editing() => Some("EDIT"),
            Page::Patterns(p) if p.is_searching() => Some("FILTER"),
            _ => None,
        }
    }
}

/// Keys while a runner is being edited. Esc ends editing.
pub(crate) fn handle_edit_key(runner: &mut CodeRunner, editing: &mut bool, key: KeyEvent) -> PageAction {
    match key.code {
        KeyCode::Esc => {
            *editing = false;
            PageAction::Status("Finished editing".to_string())
        }
        KeyCode::Enter => {
            runner.insert_char('\n');
            PageAction::Handled
        }
        KeyCode::Tab => {
            runner.insert_char(' ');
            runner.insert_char(' ');
            PageAction::Handled
        }
        KeyCode::Backspace => {
            runner.backspace();
            PageAction::Handled
        }
        KeyCode::Char(c) => {
            runner.insert_char(c);
            PageAction::Handled
        }
        _ => PageAction::Handled,
    }
}

/// Start a run on `runner` and describe the outcome
pub(crate) fn run_action(runner: &mut CodeRunner) -> PageAction {
    if runner.is_read_only() {
        PageAction::Status("This example is read-only".to_string())
    } else if runner.run() {
        PageAction::Status("Running code...".to_string())
    } else {
        PageAction::Status("Already running".to_string())
    }
}

/// Bordered block with the focused style
pub(crate) fn page_block<'a>(title: impl Into<String>, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title.into()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
}

/// Screen rows each line takes once wrapped to `width` columns
fn wrapped_rows(lines: &[Line<'static>], width: u16) -> Vec<usize> {
    lines
        .iter()
        .map(|line| {
            Paragraph::new(line.clone())
                .wrap(Wrap { trim: false })
                .line_count(width)
                .max(1)
        })
        .collect()
}

/// Render `lines` in a bordered, wrapped, scrollable paragraph. `selected`
/// is the line to keep on screen; `offset` counts wrapped rows.
pub(crate) fn render_scrolled(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    lines: Vec<Line<'static>>,
    selected: Option<usize>,
    offset: &mut u16,
    theme: &Theme,
) {
    let visible_height = area.height.saturating_sub(2).max(1);
    let rows = wrapped_rows(&lines, area.width.saturating_sub(2));
    let total_rows: usize = rows.iter().sum();

    if let Some(line) = selected.filter(|line| *line < rows.len()) {
        let first_row: usize = rows[..line].iter().sum();
        let last_row = first_row + rows[line] - 1;
        *offset = keep_visible(*offset, last_row, visible_height);
        *offset = keep_visible(*offset, first_row, visible_height);
    }
    let max_offset = total_rows
        .saturating_sub(visible_height as usize)
        .min(u16::MAX as usize) as u16;
    *offset = (*offset).min(max_offset);

    let paragraph = Paragraph::new(lines)
        .block(page_block(title, theme))
        .wrap(Wrap { trim: false })
        .scroll((*offset, 0));
    frame.render_widget(paragraph, area);
}

/// Line for a selectable entry, marked when selected
pub(crate) fn entry_line(label: impl Into<String>, selected: bool, theme: &Theme) -> Line<'static> {
    let label = label.into();
    if selected {
        Line::from(vec![
            Span::styled(" ▶ ", Style::default().fg(theme.secondary)),
            Span::styled(
                label,
                Style::default()
                    .fg(theme.primary)
                    .bg(theme.current_line_bg)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(vec![
            Span::raw("   "),
            Span::styled(label, Style::default().fg(theme.primary)),
        ])
    }
}

pub(crate) fn heading(text: impl Into<String>, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
    ))
}

pub(crate) fn subheading(text: impl Into<String>, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
    ))
}

pub(crate) fn body(text: impl Into<String>, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(theme.fg)))
}

pub(crate) fn muted(text: impl Into<String>, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(text.into(), Style::default().fg(theme.comment)))
}

pub(crate) fn bullet(text: impl Into<String>, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(theme.primary)),
        Span::styled(text.into(), Style::default().fg(theme.fg)),
    ])
}

/// Colored badge span, e.g. a difficulty level
pub(crate) fn badge(text: impl Into<String>, color: ratatui::style::Color) -> Span<'static> {
    Span::styled(
        format!(" {} ", text.into()),
        Style::default()
            .bg(color)
            .fg(ratatui::style::Color::Black)
            .add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::DARK_THEME;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw_scrolled(
        width: u16,
        height: u16,
        lines: &[Line<'static>],
        selected: Option<usize>,
        offset: &mut u16,
    ) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_scrolled(f, area, "Page", lines.to_vec(), selected, offset, &DARK_THEME)
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_wrapped_rows_counts_each_line() {
        let lines = vec![body("word ".repeat(12), &DARK_THEME), Line::default()];
        let rows = wrapped_rows(&lines, 18);
        // 60 columns of text cannot fit in fewer than 4 rows of 18
        assert!(rows[0] >= 4);
        assert_eq!(rows[1], 1);
    }

    #[test]
    fn test_selected_line_below_long_wrapped_text_is_shown() {
        let mut lines: Vec<Line<'static>> =
            (0..6).map(|_| body("word ".repeat(40), &DARK_THEME)).collect();
        lines.push(entry_line("Target", true, &DARK_THEME));
        let mut offset = 0;

        let screen = draw_scrolled(20, 10, &lines, Some(6), &mut offset);

        assert!(screen.contains("▶ Target"));
        // Six logical lines above, but far more wrapped rows
        assert!(offset > 6);
    }

    #[test]
    fn test_offset_stops_at_last_screenful() {
        let lines: Vec<Line<'static>> = (0..30).map(|n| body(format!("line {}", n), &DARK_THEME)).collect();
        let mut offset = 500;

        let screen = draw_scrolled(20, 10, &lines, None, &mut offset);

        // 30 rows in an 8-row viewport
        assert_eq!(offset, 22);
        assert!(screen.contains("line 29"));

        let mut offset = 500;
        let screen = draw_scrolled(20, 10, &lines, Some(0), &mut offset);
        assert_eq!(offset, 0);
        assert!(screen.contains("line 0"));
    }

    #[test]
    fn test_selection_clamps() {
        let mut sel = Selection::new(2);
        sel.next();
        sel.next();
        assert_eq!(sel.index(), 1);
        sel.set_len(0);
        assert_eq!(sel.index(), 0);
        sel.prev();
        assert_eq!(sel.index(), 0);
    }

    #[test]
    fn test_tabs_wrap() {
        let mut tabs = TabState::new(4);
        tabs.prev();
        assert_eq!(tabs.index(), 3);
        tabs.next();
        assert_eq!(tabs.index(), 0);
        tabs.select(9);
        assert_eq!(tabs.index(), 0);
    }
}
