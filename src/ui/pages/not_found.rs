//! Fallback page for unmatched paths

use super::{body, entry_line, heading, muted, render_scrolled, Hints, PageAction, Selection};
use crate::routes::{Link, NOT_FOUND_ACTIONS, NOT_FOUND_SUGGESTIONS};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub const HINTS: Hints = &[("↑/↓", "select"), ("↵", "open")];

pub struct NotFoundPage {
    path: String,
    selection: Selection,
    scroll: u16,
}

impl NotFoundPage {
    pub fn new(path: impl Into<String>) -> Self {
        NotFoundPage {
            path: path.into(),
            selection: Selection::new(NOT_FOUND_ACTIONS.len() + NOT_FOUND_SUGGESTIONS.len()),
            scroll: 0,
        }
    }

    /// The path nothing matched
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn suggestions(&self) -> &'static [Link] {
        &NOT_FOUND_SUGGESTIONS
    }

    /// Actions first, then suggestions
    fn links() -> impl Iterator<Item = &'static Link> {
        let actions: &'static [Link] = &NOT_FOUND_ACTIONS;
        let suggestions: &'static [Link] = &NOT_FOUND_SUGGESTIONS;
        actions.iter().chain(suggestions)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        match key.code {
            KeyCode::Up => self.selection.prev(),
            KeyCode::Down => self.selection.next(),
            KeyCode::Enter => {
                if let Some(link) = Self::links().nth(self.selection.index()) {
                    return PageAction::Navigate(link.path.to_string());
                }
            }
            _ => return PageAction::Ignored,
        }
        PageAction::Handled
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let selected = self.selection.index();
        let mut lines: Vec<Line<'static>> = vec![
            Line::from(Span::styled(
                "404",
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            )),
            heading("Page not found", theme),
            body(
                "The page you're looking for doesn't exist or has been moved.",
                theme,
            ),
            muted(format!("No page at {}", self.path), theme),
            Line::default(),
        ];
        let mut selected_line = None;

        for (idx, link) in Self::links().enumerate() {
            if idx == NOT_FOUND_ACTIONS.len() {
                lines.push(Line::default());
                lines.push(muted("You might be interested in:", theme));
            }
            if idx == selected {
                selected_line = Some(lines.len());
            }
            lines.push(entry_line(link.title, idx == selected, theme));
        }

        render_scrolled(frame, area, "Not Found", lines, selected_line, &mut self.scroll, theme);
    }
}
