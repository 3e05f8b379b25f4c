//! Design patterns topic page: patterns grouped by category

use super::{badge, body, entry_line, heading, muted, render_scrolled, subheading, Hints, PageAction, Selection};
use crate::content::patterns::by_category;
use crate::content::Category;
use crate::routes::{Route, Topic};
use crate::ui::theme::{level_color, Theme};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

pub const HINTS: Hints = &[("↑/↓", "select"), ("↵", "open"), ("p", "prev")];

/// Link targets in display order: patterns by category, then the index
fn link_targets() -> Vec<String> {
    let mut targets: Vec<String> = Category::ALL
        .iter()
        .flat_map(|category| by_category(*category))
        .map(|pattern| Route::Pattern(pattern.id).path())
        .collect();
    targets.push(Route::Patterns.path());
    targets
}

pub struct TopicPage {
    selection: Selection,
    scroll: u16,
}

impl TopicPage {
    pub fn new() -> Self {
        TopicPage {
            selection: Selection::new(link_targets().len()),
            scroll: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        match key.code {
            KeyCode::Up => self.selection.prev(),
            KeyCode::Down => self.selection.next(),
            KeyCode::Enter => {
                if let Some(path) = link_targets().into_iter().nth(self.selection.index()) {
                    return PageAction::Navigate(path);
                }
            }
            KeyCode::Char('p') => {
                return PageAction::Navigate(Route::Topic(Topic::SolidPrinciples).path())
            }
            _ => return PageAction::Ignored,
        }
        PageAction::Handled
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let selected = self.selection.index();
        let mut lines: Vec<Line<'static>> = vec![
            heading("Design Patterns", theme),
            body(
                "Design patterns are reusable solutions to common problems in software design. They are templates that can be applied to many situations.",
                theme,
            ),
            Line::default(),
        ];
        let mut selected_line = None;
        let mut link_idx = 0;

        for category in Category::ALL {
            lines.push(subheading(category.heading(), theme));
            for pattern in by_category(category) {
                if link_idx == selected {
                    selected_line = Some(lines.len());
                }
                let mut line = entry_line(pattern.name, link_idx == selected, theme);
                line.spans.push(Span::raw(" "));
                line.spans.push(badge(pattern.level.label(), level_color(theme, pattern.level)));
                lines.push(line);
                lines.push(muted(format!("     {}", pattern.summary), theme));
                link_idx += 1;
            }
            lines.push(Line::default());
        }

        if link_idx == selected {
            selected_line = Some(lines.len());
        }
        lines.push(entry_line("Browse all patterns →", link_idx == selected, theme));

        render_scrolled(frame, area, "Design Patterns", lines, selected_line, &mut self.scroll, theme);
    }
}

impl Default for TopicPage {
    fn default() -> Self {
        Self::new()
    }
}
