//! Curated books, courses, sites and tools

use super::{body, entry_line, heading, muted, render_scrolled, subheading, Hints, PageAction, Selection};
use crate::content::site::{ResourceItem, RESOURCES, RESOURCES_INTRO};
use crate::routes::Route;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, text::Line, Frame};

pub const HINTS: Hints = &[("↑/↓", "select"), ("↵", "show link")];

/// All resources in display order
fn items() -> impl Iterator<Item = &'static ResourceItem> {
    RESOURCES.iter().flat_map(|category| category.items.iter())
}

pub struct ResourcesPage {
    /// Resources, then the trailing "View Roadmap" link
    selection: Selection,
    scroll: u16,
}

impl ResourcesPage {
    pub fn new() -> Self {
        ResourcesPage {
            selection: Selection::new(items().count() + 1),
            scroll: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        match key.code {
            KeyCode::Up => self.selection.prev(),
            KeyCode::Down => self.selection.next(),
            KeyCode::Enter => {
                return match items().nth(self.selection.index()) {
                    Some(ResourceItem { name, url: Some(url), .. }) => {
                        PageAction::Status(format!("{}: {}", name, url))
                    }
                    Some(ResourceItem { name, url: None, .. }) => {
                        PageAction::Status(format!("{}: no public link", name))
                    }
                    None => PageAction::Navigate(Route::Roadmap.path()),
                };
            }
            _ => return PageAction::Ignored,
        }
        PageAction::Handled
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let selected = self.selection.index();
        let mut lines: Vec<Line<'static>> = vec![
            heading("Educational Resources", theme),
            body(RESOURCES_INTRO, theme),
            Line::default(),
        ];
        let mut selected_line = None;
        let mut idx = 0;

        for category in RESOURCES.iter() {
            lines.push(subheading(category.title, theme));
            for item in category.items {
                if idx == selected {
                    selected_line = Some(lines.len());
                }
                lines.push(entry_line(item.name, idx == selected, theme));
                lines.push(muted(format!("     {}", item.description), theme));
                idx += 1;
            }
            lines.push(Line::default());
        }

        lines.push(subheading("Ready to Apply Your Knowledge?", theme));
        lines.push(body(
            "Put these resources to use by following our structured learning roadmap.",
            theme,
        ));
        if idx == selected {
            selected_line = Some(lines.len());
        }
        lines.push(entry_line("View Roadmap", idx == selected, theme));

        render_scrolled(frame, area, "Resources", lines, selected_line, &mut self.scroll, theme);
    }
}

impl Default for ResourcesPage {
    fn default() -> Self {
        Self::new()
    }
}
