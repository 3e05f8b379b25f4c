//! Pattern detail page with Overview, Implementation, Examples and
//! Discussion tabs

use super::{
    badge, body, bullet, entry_line, handle_edit_key, heading, muted, page_block, run_action,
    subheading, Hints, PageAction, Selection, TabState,
};
use crate::content::patterns::{by_category, pattern};
use crate::content::PatternInfo;
use crate::context::SiteContext;
use crate::routes::{PatternId, Route};
use crate::runner::CodeRunner;
use crate::ui::panes::render_code_runner;
use crate::ui::theme::{level_color, Theme};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Wrap},
    Frame,
};
use std::time::Instant;

pub const TAB_TITLES: [&str; 4] = ["Overview", "Implementation", "Examples", "Discussion"];

const OVERVIEW: usize = 0;
const IMPLEMENTATION: usize = 1;
const EXAMPLES: usize = 2;
const DISCUSSION: usize = 3;

const BROWSE_HINTS: Hints = &[
    ("←/→", "tab"),
    ("1-4", "jump"),
    ("↑/↓", "select"),
    ("J/K", "scroll code"),
    ("r", "run"),
    ("e", "edit"),
];
const EDIT_HINTS: Hints = &[("esc", "finish"), ("↵", "newline"), ("tab", "indent")];

pub struct PatternPage {
    info: &'static PatternInfo,
    tabs: TabState,
    implementation: CodeRunner,
    examples: Vec<CodeRunner>,
    example: Selection,
    related: Selection,
    editing: bool,
    scroll: u16,
    /// First source line shown in the active runner
    runner_scroll: u16,
}

impl PatternPage {
    pub fn new(id: PatternId, ctx: &SiteContext) -> Self {
        let info = pattern(id);
        PatternPage {
            info,
            tabs: TabState::new(TAB_TITLES.len()),
            implementation: ctx.runner(&info.implementation, false),
            examples: info.examples.iter().map(|e| ctx.runner(&e.sample, false)).collect(),
            example: Selection::new(info.examples.len()),
            related: Selection::new(related(info).len()),
            editing: false,
            scroll: 0,
            runner_scroll: 0,
        }
    }

    pub fn info(&self) -> &'static PatternInfo {
        self.info
    }

    pub fn active_tab(&self) -> usize {
        self.tabs.index()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn runner_scroll(&self) -> u16 {
        self.runner_scroll
    }

    pub fn hints(&self) -> Hints {
        if self.editing {
            EDIT_HINTS
        } else {
            BROWSE_HINTS
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.implementation.poll(now);
        for runner in &mut self.examples {
            runner.poll(now);
        }
    }

    /// Runner of the active tab, if it has one
    pub fn active_runner(&self) -> Option<&CodeRunner> {
        match self.tabs.index() {
            IMPLEMENTATION => Some(&self.implementation),
            EXAMPLES => self.examples.get(self.example.index()),
            _ => None,
        }
    }

    fn active_runner_mut(&mut self) -> Option<&mut CodeRunner> {
        match self.tabs.index() {
            IMPLEMENTATION => Some(&mut self.implementation),
            EXAMPLES => self.examples.get_mut(self.example.index()),
            _ => None,
        }
    }

    fn select_tab(&mut self, index: usize) {
        self.tabs.select(index);
        self.scroll = 0;
        self.runner_scroll = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        if self.editing {
            let mut editing = true;
            let action = match self.active_runner_mut() {
                Some(runner) => handle_edit_key(runner, &mut editing, key),
                None => {
                    editing = false;
                    PageAction::Handled
                }
            };
            self.editing = editing;
            return action;
        }

        match key.code {
            KeyCode::Left => {
                self.tabs.prev();
                self.scroll = 0;
                self.runner_scroll = 0;
            }
            KeyCode::Right | KeyCode::Tab => {
                self.tabs.next();
                self.scroll = 0;
                self.runner_scroll = 0;
            }
            KeyCode::Char(c @ '1'..='4') => self.select_tab(c as usize - '1' as usize),
            KeyCode::Up => match self.tabs.index() {
                IMPLEMENTATION => self.runner_scroll = self.runner_scroll.saturating_sub(1),
                EXAMPLES => {
                    self.example.prev();
                    self.runner_scroll = 0;
                }
                DISCUSSION => self.related.prev(),
                _ => self.scroll = self.scroll.saturating_sub(1),
            },
            KeyCode::Down => match self.tabs.index() {
                IMPLEMENTATION => self.runner_scroll = self.runner_scroll.saturating_add(1),
                EXAMPLES => {
                    self.example.next();
                    self.runner_scroll = 0;
                }
                DISCUSSION => self.related.next(),
                _ => self.scroll = self.scroll.saturating_add(1),
            },
            KeyCode::Char('J') if self.active_runner().is_some() => {
                self.runner_scroll = self.runner_scroll.saturating_add(1)
            }
            KeyCode::Char('K') if self.active_runner().is_some() => {
                self.runner_scroll = self.runner_scroll.saturating_sub(1)
            }
            KeyCode::Enter if self.tabs.index() == DISCUSSION => {
                if let Some(other) = related(self.info).get(self.related.index()) {
                    return PageAction::Navigate(Route::Pattern(other.id).path());
                }
            }
            KeyCode::Char('r') => {
                return match self.active_runner_mut() {
                    Some(runner) => run_action(runner),
                    None => PageAction::Status("No runnable code on this tab".to_string()),
                };
            }
            KeyCode::Char('e') => {
                if self.active_runner().is_none() {
                    return PageAction::Status("No editable code on this tab".to_string());
                }
                self.editing = true;
                return PageAction::Status("Editing example".to_string());
            }
            _ => return PageAction::Ignored,
        }
        PageAction::Handled
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let info = self.info;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let header = vec![
            Line::from(vec![
                Span::styled(
                    info.name,
                    Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                badge(info.category.card_label(), theme.secondary),
                Span::raw(" "),
                badge(info.level.label(), level_color(theme, info.level)),
            ]),
            body(info.summary, theme),
        ];
        let header = Paragraph::new(header)
            .block(page_block("Design Pattern", theme))
            .wrap(Wrap { trim: true });
        frame.render_widget(header, rows[0]);

        let tabs = Tabs::new(TAB_TITLES.to_vec())
            .select(self.tabs.index())
            .style(Style::default().fg(theme.comment))
            .highlight_style(
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        frame.render_widget(tabs, rows[1]);

        match self.tabs.index() {
            OVERVIEW => self.render_overview(frame, rows[2], theme),
            IMPLEMENTATION => render_code_runner(
                frame,
                rows[2],
                &self.implementation,
                true,
                self.editing,
                &mut self.runner_scroll,
            ),
            EXAMPLES => self.render_examples(frame, rows[2], theme),
            _ => self.render_discussion(frame, rows[2], theme),
        }
    }

    fn render_overview(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let info = self.info;
        let mut lines: Vec<Line<'static>> = vec![subheading("Intent", theme), body(info.intent, theme)];
        lines.push(Line::default());
        lines.push(subheading("Problem", theme));
        lines.extend(info.problem.iter().map(|p| bullet(*p, theme)));
        lines.push(Line::default());
        lines.push(subheading("When to Use", theme));
        lines.extend(info.when_to_use.iter().map(|p| bullet(*p, theme)));

        let paragraph = Paragraph::new(lines)
            .block(page_block("Overview", theme))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }

    fn render_examples(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if self.info.examples.is_empty() {
            let empty = Paragraph::new(muted("No examples for this pattern yet.", theme))
                .block(page_block("Examples", theme));
            frame.render_widget(empty, area);
            return;
        }

        let listed = self.info.examples.len() as u16 * 2 + 2;
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(listed), Constraint::Min(0)])
            .split(area);

        let selected = self.example.index();
        let mut lines: Vec<Line<'static>> = Vec::new();
        for (idx, example) in self.info.examples.iter().enumerate() {
            lines.push(entry_line(example.title, idx == selected, theme));
            lines.push(muted(format!("     {}", example.description), theme));
        }
        let list = Paragraph::new(lines)
            .block(page_block("Real-World Examples", theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(list, rows[0]);

        if let Some(runner) = self.examples.get(selected) {
            render_code_runner(frame, rows[1], runner, true, self.editing, &mut self.runner_scroll);
        }
    }

    fn render_discussion(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let info = self.info;
        let mut lines: Vec<Line<'static>> = vec![heading("Advantages", theme)];
        lines.extend(info.pros.iter().map(|p| {
            Line::from(vec![
                Span::styled("  ✓ ", Style::default().fg(theme.success)),
                Span::styled(*p, Style::default().fg(theme.fg)),
            ])
        }));
        lines.push(Line::default());
        lines.push(heading("Disadvantages", theme));
        lines.extend(info.cons.iter().map(|c| {
            Line::from(vec![
                Span::styled("  ✗ ", Style::default().fg(theme.error)),
                Span::styled(*c, Style::default().fg(theme.fg)),
            ])
        }));
        lines.push(Line::default());
        lines.push(heading(format!("Related {}", info.category.heading()), theme));
        let selected = self.related.index();
        for (idx, other) in related(info).iter().enumerate() {
            lines.push(entry_line(other.name, idx == selected, theme));
        }

        let paragraph = Paragraph::new(lines)
            .block(page_block("Discussion", theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}

/// Other patterns of the same category
fn related(info: &PatternInfo) -> Vec<&'static PatternInfo> {
    by_category(info.category).filter(|p| p.id != info.id).collect()
}
