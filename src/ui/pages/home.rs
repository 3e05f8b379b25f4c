//! Landing page: hero, introduction, roadmap preview, pattern showcase,
//! testimonials, FAQ and call to action

use super::{
    badge, body, bullet, entry_line, heading, muted, render_scrolled, subheading, Hints,
    PageAction, Selection, TabState,
};
use crate::content::patterns::by_category;
use crate::content::site::{
    CTA_TEXT, CTA_TITLE, FAQ, HERO_EYEBROW, HERO_STATS, HERO_SUBTITLE, HERO_TITLE, INTRO,
    LEARNING_PATH, ROADMAP_PREVIEW, TESTIMONIALS, TESTIMONIALS_SUBTITLE, TESTIMONIALS_TITLE,
    WHY_LLD,
};
use crate::content::Category;
use crate::progress::Disclosure;
use crate::routes::{Route, Topic};
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

pub const HINTS: Hints = &[("↑/↓", "select"), ("←/→", "category"), ("↵", "open")];

/// Something the cursor can land on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEntry {
    Link { label: String, path: String },
    Faq(usize),
}

pub struct HomePage {
    selection: Selection,
    showcase: TabState,
    faq: Disclosure,
    scroll: u16,
}

impl HomePage {
    pub fn new() -> Self {
        let mut page = HomePage {
            selection: Selection::new(0),
            showcase: TabState::new(Category::ALL.len()),
            faq: Disclosure::new(),
            scroll: 0,
        };
        page.selection.set_len(page.entries().len());
        page
    }

    pub fn showcase_category(&self) -> Category {
        Category::ALL[self.showcase.index()]
    }

    pub fn faq(&self) -> &Disclosure {
        &self.faq
    }

    pub fn selected_entry(&self) -> Option<HomeEntry> {
        self.entries().into_iter().nth(self.selection.index())
    }

    /// Selectable entries in display order; the showcase links follow the
    /// active category tab
    pub fn entries(&self) -> Vec<HomeEntry> {
        let link = |label: &str, path: String| HomeEntry::Link {
            label: label.to_string(),
            path,
        };

        let mut entries = vec![
            link("Start Learning", Route::Topic(Topic::OopFundamentals).path()),
            link("View Roadmap", Route::Roadmap.path()),
        ];
        for step in ROADMAP_PREVIEW {
            entries.push(link(step.topic.title(), Route::Topic(step.topic).path()));
        }
        for pattern in by_category(self.showcase_category()) {
            entries.push(link(pattern.name, Route::Pattern(pattern.id).path()));
        }
        entries.push(link("View All Patterns", Route::Patterns.path()));
        entries.extend((0..FAQ.len()).map(HomeEntry::Faq));
        entries.push(link("Get Started", Route::Roadmap.path()));
        entries
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        match key.code {
            KeyCode::Up => self.selection.prev(),
            KeyCode::Down => self.selection.next(),
            KeyCode::Left => {
                self.showcase.prev();
                self.selection.set_len(self.entries().len());
            }
            KeyCode::Right => {
                self.showcase.next();
                self.selection.set_len(self.entries().len());
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.selected_entry() {
                Some(HomeEntry::Link { path, .. }) => return PageAction::Navigate(path),
                Some(HomeEntry::Faq(idx)) => self.faq.toggle(idx),
                None => {}
            },
            _ => return PageAction::Ignored,
        }
        PageAction::Handled
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let entries = self.entries();
        let selected = self.selection.index();
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut selected_line = None;
        let mut cursor = 0;

        // `idx` is the entry's position in `entries()`
        let mut push_entry = |lines: &mut Vec<Line<'static>>, idx: usize, label: String| {
            let is_selected = idx == selected;
            if is_selected {
                selected_line = Some(lines.len());
            }
            lines.push(entry_line(label, is_selected, theme));
        };

        // Hero
        lines.push(Line::from(badge(HERO_EYEBROW, theme.primary)));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            HERO_TITLE,
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        )));
        lines.push(body(HERO_SUBTITLE, theme));
        lines.push(Line::default());
        for (idx, entry) in entries.iter().enumerate().skip(cursor).take(2) {
            if let HomeEntry::Link { label, .. } = entry {
                push_entry(&mut lines, idx, label.clone());
            }
        }
        cursor += 2;
        let stats: Vec<String> = HERO_STATS
            .iter()
            .map(|(value, label)| format!("{} {}", value, label))
            .collect();
        lines.push(muted(format!("   {}", stats.join("   ·   ")), theme));
        lines.push(Line::default());

        // Introduction
        lines.push(heading("What is Low-Level Design?", theme));
        lines.push(body(INTRO, theme));
        lines.push(Line::default());
        lines.push(subheading("Why Learn LLD?", theme));
        lines.extend(WHY_LLD.iter().map(|item| bullet(*item, theme)));
        lines.push(subheading("Our Learning Path", theme));
        lines.extend(
            LEARNING_PATH
                .iter()
                .enumerate()
                .map(|(idx, item)| body(format!("  {}. {}", idx + 1, item), theme)),
        );
        lines.push(Line::default());

        // Roadmap preview
        lines.push(heading("Your LLD Learning Roadmap", theme));
        for (offset, step) in ROADMAP_PREVIEW.iter().enumerate() {
            push_entry(&mut lines, cursor + offset, step.topic.title().to_string());
            lines.push(muted(format!("     {}", step.description), theme));
        }
        cursor += ROADMAP_PREVIEW.len();
        lines.push(Line::default());

        // Pattern showcase
        lines.push(heading("Explore Design Patterns", theme));
        let tabs: Vec<Span<'static>> = Category::ALL
            .iter()
            .enumerate()
            .flat_map(|(idx, category)| {
                let style = if idx == self.showcase.index() {
                    Style::default()
                        .fg(theme.primary)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(theme.comment)
                };
                [Span::raw("  "), Span::styled(category.heading(), style)]
            })
            .collect();
        lines.push(Line::from(tabs));
        for pattern in by_category(self.showcase_category()) {
            push_entry(&mut lines, cursor, pattern.name.to_string());
            lines.push(muted(format!("     {}", pattern.summary), theme));
            cursor += 1;
        }
        push_entry(&mut lines, cursor, "View All Patterns →".to_string());
        cursor += 1;
        lines.push(Line::default());

        // Testimonials
        lines.push(heading(TESTIMONIALS_TITLE, theme));
        lines.push(muted(TESTIMONIALS_SUBTITLE, theme));
        for testimonial in TESTIMONIALS.iter() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("  {}", "★".repeat(usize::from(testimonial.stars))),
                Style::default().fg(theme.warning),
            )));
            lines.push(body(format!("  \"{}\"", testimonial.text), theme));
            lines.push(Line::from(vec![
                Span::styled(format!("  [{}] ", testimonial.initials), Style::default().fg(theme.primary)),
                Span::styled(
                    testimonial.name,
                    Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(", {} at {}", testimonial.role, testimonial.company),
                    Style::default().fg(theme.comment),
                ),
            ]));
        }
        lines.push(Line::default());

        // FAQ
        lines.push(heading("Frequently Asked Questions", theme));
        for (idx, item) in FAQ.iter().enumerate() {
            let marker = if self.faq.is_open(idx) { "▾" } else { "▸" };
            push_entry(&mut lines, cursor + idx, format!("{} {}", marker, item.question));
            if self.faq.is_open(idx) {
                lines.push(body(format!("     {}", item.answer), theme));
            }
        }
        cursor += FAQ.len();
        lines.push(Line::default());

        // Call to action
        lines.push(heading(CTA_TITLE, theme));
        lines.push(body(CTA_TEXT, theme));
        push_entry(&mut lines, cursor, "Get Started".to_string());

        render_scrolled(frame, area, "Home", lines, selected_line, &mut self.scroll, theme);
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}
