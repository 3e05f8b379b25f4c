//! Pattern index with search, category and level filters

use super::{badge, entry_line, muted, page_block, render_scrolled, Hints, PageAction, Selection};
use crate::content::patterns::PATTERNS;
use crate::content::{PatternFilter, PatternInfo};
use crate::routes::Route;
use crate::ui::theme::{level_color, Theme};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const BROWSE_HINTS: Hints = &[
    ("↑/↓", "select"),
    ("↵", "open"),
    ("/", "filter"),
    ("c", "category"),
    ("l", "level"),
    ("x", "clear"),
];

const SEARCH_HINTS: Hints = &[("↵/esc", "done"), ("⌫", "delete")];

pub struct PatternsPage {
    filter: PatternFilter,
    selection: Selection,
    searching: bool,
    scroll: u16,
}

impl PatternsPage {
    pub fn new() -> Self {
        PatternsPage {
            filter: PatternFilter::default(),
            selection: Selection::new(PATTERNS.len()),
            searching: false,
            scroll: 0,
        }
    }

    /// Filter by a search term, e.g. one entered in the header
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.refresh();
    }

    pub fn filter(&self) -> &PatternFilter {
        &self.filter
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn hints(&self) -> Hints {
        if self.searching {
            SEARCH_HINTS
        } else {
            BROWSE_HINTS
        }
    }

    /// Patterns passing the current filters, in catalogue order
    pub fn visible(&self) -> Vec<&'static PatternInfo> {
        self.filter.apply(&PATTERNS)
    }

    fn refresh(&mut self) {
        self.selection.set_len(self.visible().len());
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        if self.searching {
            match key.code {
                KeyCode::Enter | KeyCode::Esc => self.searching = false,
                KeyCode::Backspace => {
                    self.filter.search.pop();
                    self.refresh();
                }
                KeyCode::Char(c) => {
                    self.filter.search.push(c);
                    self.refresh();
                }
                _ => {}
            }
            return PageAction::Handled;
        }

        match key.code {
            KeyCode::Up => self.selection.prev(),
            KeyCode::Down => self.selection.next(),
            KeyCode::Char('/') => self.searching = true,
            KeyCode::Char('c') => {
                self.filter.cycle_category();
                self.refresh();
            }
            KeyCode::Char('l') => {
                self.filter.cycle_level();
                self.refresh();
            }
            KeyCode::Char('x') => {
                self.filter = PatternFilter::default();
                self.refresh();
            }
            KeyCode::Enter => {
                if let Some(pattern) = self.visible().get(self.selection.index()) {
                    return PageAction::Navigate(Route::Pattern(pattern.id).path());
                }
            }
            _ => return PageAction::Ignored,
        }
        PageAction::Handled
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        let search_style = if self.searching {
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.comment)
        };
        let search_text = if self.filter.search.is_empty() && !self.searching {
            "Search patterns...".to_string()
        } else {
            self.filter.search.clone()
        };
        let mut spans = vec![
            Span::styled(" 🔍 ", Style::default().fg(theme.primary)),
            Span::styled(search_text, search_style),
        ];
        if self.searching {
            spans.push(Span::styled("▏", Style::default().fg(theme.secondary)));
        }
        spans.push(Span::styled("   │ ", Style::default().fg(theme.comment)));
        spans.push(Span::styled(
            format!("[c] {}", self.filter.category_label()),
            Style::default().fg(theme.fg),
        ));
        spans.push(Span::styled("   │ ", Style::default().fg(theme.comment)));
        spans.push(Span::styled(
            format!("[l] {}", self.filter.level_label()),
            Style::default().fg(theme.fg),
        ));
        let bar = Paragraph::new(Line::from(spans)).block(page_block("Filter", theme));
        frame.render_widget(bar, rows[0]);

        let visible = self.visible();
        let selected = self.selection.index();
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut selected_line = None;

        if visible.is_empty() {
            lines.push(muted("No patterns found matching your criteria.", theme));
            lines.push(muted("Press x to clear the filters.", theme));
        }
        for (idx, pattern) in visible.iter().enumerate() {
            if idx == selected {
                selected_line = Some(lines.len());
            }
            let mut line = entry_line(pattern.name, idx == selected, theme);
            line.spans.push(Span::raw("  "));
            line.spans.push(badge(pattern.category.label(), theme.secondary));
            line.spans.push(Span::raw(" "));
            line.spans.push(badge(pattern.level.label(), level_color(theme, pattern.level)));
            lines.push(line);
            lines.push(muted(format!("     {}", pattern.summary), theme));
        }

        let title = format!("Design Patterns ({} of {})", visible.len(), PATTERNS.len());
        render_scrolled(frame, rows[1], &title, lines, selected_line, &mut self.scroll, theme);
    }
}

impl Default for PatternsPage {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive() {
        let mut page = PatternsPage::new();
        page.set_search("SINGLE");
        let names: Vec<_> = page.visible().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Singleton"]);
    }

    #[test]
    fn test_selection_follows_filter_length() {
        let mut page = PatternsPage::new();
        for _ in 0..8 {
            page.selection.next();
        }
        page.set_search("observer");
        assert_eq!(page.selection.index(), 0);
    }
}
