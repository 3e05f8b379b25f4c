//! SOLID principles with read-only violation/fix examples

use super::{body, heading, muted, page_block, run_action, subheading, Hints, PageAction, Selection, TabState};
use crate::content::curriculum::PRINCIPLES;
use crate::context::SiteContext;
use crate::progress::Disclosure;
use crate::routes::{Route, Topic};
use crate::runner::CodeRunner;
use crate::ui::panes::render_code_runner;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

pub const HINTS: Hints = &[
    ("↑/↓", "principle"),
    ("←/→", "bad/good"),
    ("↵", "details"),
    ("J/K", "scroll code"),
    ("p/n", "prev/next"),
];

const SAMPLE_TABS: [&str; 2] = ["Violation", "Better Approach"];

pub struct SolidPage {
    /// Violation and fix runner per principle
    runners: Vec<(CodeRunner, CodeRunner)>,
    selection: Selection,
    sample: TabState,
    details: Disclosure,
    runner_scroll: u16,
}

impl SolidPage {
    pub fn new(ctx: &SiteContext) -> Self {
        SolidPage {
            runners: PRINCIPLES
                .iter()
                .map(|p| (ctx.runner(&p.violation, true), ctx.runner(&p.fix, true)))
                .collect(),
            selection: Selection::new(PRINCIPLES.len()),
            sample: TabState::new(SAMPLE_TABS.len()),
            details: Disclosure::new(),
            runner_scroll: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selection.index()
    }

    pub fn runner_scroll(&self) -> u16 {
        self.runner_scroll
    }

    /// Runner on display: the violation or the fix of the selected principle
    pub fn current_runner(&self) -> Option<&CodeRunner> {
        let (violation, fix) = self.runners.get(self.selection.index())?;
        Some(if self.sample.index() == 0 { violation } else { fix })
    }

    fn current_runner_mut(&mut self) -> Option<&mut CodeRunner> {
        let good = self.sample.index() == 1;
        let (violation, fix) = self.runners.get_mut(self.selection.index())?;
        Some(if good { fix } else { violation })
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        match key.code {
            KeyCode::Up => {
                self.selection.prev();
                self.runner_scroll = 0;
            }
            KeyCode::Down => {
                self.selection.next();
                self.runner_scroll = 0;
            }
            KeyCode::Left => {
                self.sample.prev();
                self.runner_scroll = 0;
            }
            KeyCode::Right | KeyCode::Tab => {
                self.sample.next();
                self.runner_scroll = 0;
            }
            KeyCode::Char('J') => self.runner_scroll = self.runner_scroll.saturating_add(1),
            KeyCode::Char('K') => self.runner_scroll = self.runner_scroll.saturating_sub(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.details.toggle(self.selection.index()),
            KeyCode::Char('r') => {
                if let Some(runner) = self.current_runner_mut() {
                    return run_action(runner);
                }
            }
            KeyCode::Char('p') => {
                return PageAction::Navigate(Route::Topic(Topic::OopFundamentals).path())
            }
            KeyCode::Char('n') => {
                return PageAction::Navigate(Route::Topic(Topic::DesignPatterns).path())
            }
            _ => return PageAction::Ignored,
        }
        PageAction::Handled
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(area);

        let items: Vec<ListItem> = PRINCIPLES
            .iter()
            .map(|p| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!(" {} ", p.acronym),
                        Style::default()
                            .bg(theme.primary)
                            .fg(theme.bg)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(p.title, Style::default().fg(theme.fg)),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(page_block("SOLID Principles", theme))
            .highlight_style(Style::default().bg(theme.current_line_bg).add_modifier(Modifier::BOLD))
            .highlight_symbol("▶ ");
        let mut state = ListState::default().with_selected(Some(self.selection.index()));
        frame.render_stateful_widget(list, columns[0], &mut state);

        let detail = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(columns[1]);

        let idx = self.selection.index();
        let principle = &PRINCIPLES[idx];
        let mut lines: Vec<Line<'static>> = vec![
            heading(format!("{}: {}", principle.acronym, principle.title), theme),
            body(principle.description, theme),
        ];
        if self.details.is_open(idx) {
            lines.push(Line::default());
            lines.push(subheading(principle.violation.title, theme));
            lines.push(subheading(principle.fix.title, theme));
        } else {
            lines.push(muted("Press ↵ for details", theme));
        }
        let paragraph = Paragraph::new(lines)
            .block(page_block("The SOLID Principles of Object-Oriented Design", theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, detail[0]);

        let tabs = Tabs::new(SAMPLE_TABS.to_vec())
            .select(self.sample.index())
            .style(Style::default().fg(theme.comment))
            .highlight_style(
                Style::default()
                    .fg(if self.sample.index() == 0 { theme.error } else { theme.success })
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, detail[1]);

        let good = self.sample.index() == 1;
        if let Some((violation, fix)) = self.runners.get(idx) {
            let runner = if good { fix } else { violation };
            render_code_runner(frame, detail[2], runner, true, false, &mut self.runner_scroll);
        }
    }
}
