//! Learning roadmap with links to the topic pages

use super::{badge, bullet, entry_line, heading, muted, render_scrolled, subheading, Hints, PageAction, Selection};
use crate::content::curriculum::ROADMAP;
use crate::content::Level;
use crate::routes::{Route, Topic};
use crate::ui::theme::{level_color, Theme};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    Frame,
};

pub const HINTS: Hints = &[("↑/↓", "select"), ("↵", "open")];

/// Roadmap label of a level
pub fn stage_label(level: Level) -> &'static str {
    match level {
        Level::Beginner => "Foundation",
        Level::Intermediate => "Intermediate",
        Level::Advanced => "Advanced",
    }
}

/// Paths the cursor walks through: every linked topic, then "Start Learning"
fn link_targets() -> Vec<(String, String)> {
    let mut targets: Vec<(String, String)> = ROADMAP
        .iter()
        .flat_map(|level| level.topics.iter())
        .map(|topic| (format!("Explore {}", topic.title()), Route::Topic(*topic).path()))
        .collect();
    targets.push((
        "Start Learning".to_string(),
        Route::Topic(Topic::OopFundamentals).path(),
    ));
    targets
}

pub struct RoadmapPage {
    selection: Selection,
    scroll: u16,
}

impl RoadmapPage {
    pub fn new() -> Self {
        RoadmapPage {
            selection: Selection::new(link_targets().len()),
            scroll: 0,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        match key.code {
            KeyCode::Up => self.selection.prev(),
            KeyCode::Down => self.selection.next(),
            KeyCode::Enter => {
                if let Some((_, path)) = link_targets().into_iter().nth(self.selection.index()) {
                    return PageAction::Navigate(path);
                }
            }
            _ => return PageAction::Ignored,
        }
        PageAction::Handled
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let targets = link_targets();
        let selected = self.selection.index();
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut selected_line = None;
        let mut link_idx = 0;

        lines.push(heading("Low-Level Design Roadmap", theme));
        lines.push(Line::default());
        lines.push(subheading("Getting Started with Low-Level Design", theme));
        lines.push(muted(
            "This roadmap will guide you through the process of mastering Low-Level Design concepts and principles. Follow the steps below to build a strong foundation and progress to advanced topics.",
            theme,
        ));
        lines.push(Line::from(
            Level::ALL
                .iter()
                .flat_map(|level| {
                    [
                        badge(stage_label(*level), level_color(theme, *level)),
                        Span::raw(" "),
                    ]
                })
                .collect::<Vec<_>>(),
        ));
        lines.push(Line::default());

        for level in ROADMAP.iter() {
            lines.push(Line::from(vec![
                badge(level.step.to_string(), level_color(theme, level.level)),
                Span::raw(" "),
                Span::styled(level.title, ratatui::style::Style::default().fg(theme.fg)),
            ]));
            for section in level.sections {
                lines.push(subheading(format!("   {}", section.title), theme));
                lines.extend(section.items.iter().map(|item| bullet(format!("  {}", item), theme)));
            }
            for _ in level.topics {
                if let Some((label, _)) = targets.get(link_idx) {
                    if link_idx == selected {
                        selected_line = Some(lines.len());
                    }
                    lines.push(entry_line(label.clone(), link_idx == selected, theme));
                }
                link_idx += 1;
            }
            lines.push(Line::default());
        }

        lines.push(subheading("Ready to start your journey?", theme));
        lines.push(muted(
            "Begin with the foundations and gradually progress through each step. Remember that building a strong foundation is crucial for mastering advanced concepts.",
            theme,
        ));
        if let Some((label, _)) = targets.get(link_idx) {
            if link_idx == selected {
                selected_line = Some(lines.len());
            }
            lines.push(entry_line(label.clone(), link_idx == selected, theme));
        }

        render_scrolled(frame, area, "Roadmap", lines, selected_line, &mut self.scroll, theme);
    }
}

impl Default for RoadmapPage {
    fn default() -> Self {
        Self::new()
    }
}
