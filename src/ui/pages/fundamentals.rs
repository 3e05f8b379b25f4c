//! OOP fundamentals: concept list, quizzes, code runners and progress

use super::{
    body, bullet, handle_edit_key, heading, muted, page_block, run_action, subheading, Hints,
    PageAction, Selection,
};
use crate::content::curriculum::{quiz_answers, CONCEPTS};
use crate::content::Concept;
use crate::context::SiteContext;
use crate::progress::ProgressTracker;
use crate::routes::{Route, Topic};
use crate::runner::CodeRunner;
use crate::ui::panes::render_code_runner;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

const BROWSE_HINTS: Hints = &[
    ("↑/↓", "select"),
    ("↵", "expand"),
    ("c", "complete"),
    ("1-4", "answer"),
    ("r", "run"),
    ("e", "edit"),
    ("J/K", "scroll code"),
    ("x", "reset"),
    ("p/n", "prev/next"),
];

const EDIT_HINTS: Hints = &[("esc", "finish"), ("↵", "newline"), ("tab", "indent")];

pub struct FundamentalsPage {
    tracker: ProgressTracker,
    runners: Vec<CodeRunner>,
    selection: Selection,
    editing: bool,
    detail_scroll: u16,
    runner_scroll: u16,
}

impl FundamentalsPage {
    pub fn new(ctx: &SiteContext) -> Self {
        FundamentalsPage {
            tracker: ProgressTracker::new(CONCEPTS.iter().map(|c| c.id)),
            runners: CONCEPTS.iter().map(|c| ctx.runner(&c.example, false)).collect(),
            selection: Selection::new(CONCEPTS.len()),
            editing: false,
            detail_scroll: 0,
            runner_scroll: 0,
        }
    }

    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    pub fn selected(&self) -> usize {
        self.selection.index()
    }

    pub fn runner(&self, concept: usize) -> Option<&CodeRunner> {
        self.runners.get(concept)
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// First source line shown in the runner pane
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
        for runner in &mut self.runners {
            runner.poll(now);
        }
    }

    fn concept(&self) -> &'static Concept {
        &CONCEPTS[self.selection.index()]
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PageAction {
        let idx = self.selection.index();
        if self.editing {
            return match self.runners.get_mut(idx) {
                Some(runner) => handle_edit_key(runner, &mut self.editing, key),
                None => {
                    self.editing = false;
                    PageAction::Handled
                }
            };
        }

        match key.code {
            KeyCode::Up => {
                self.selection.prev();
                self.detail_scroll = 0;
                self.runner_scroll = 0;
            }
            KeyCode::Down => {
                self.selection.next();
                self.detail_scroll = 0;
                self.runner_scroll = 0;
            }
            KeyCode::PageDown => self.detail_scroll = self.detail_scroll.saturating_add(5),
            KeyCode::PageUp => self.detail_scroll = self.detail_scroll.saturating_sub(5),
            KeyCode::Char('J') => self.runner_scroll = self.runner_scroll.saturating_add(1),
            KeyCode::Char('K') => self.runner_scroll = self.runner_scroll.saturating_sub(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.tracker.toggle_expanded(idx),
            KeyCode::Char('c') => {
                let concept = self.concept();
                let done = self.tracker.toggle_complete(concept.id);
                let verb = if done { "completed" } else { "not completed" };
                return PageAction::Status(format!("{} marked {}", concept.title, verb));
            }
            KeyCode::Char(c @ '1'..='4') => {
                let option = c as usize - '1' as usize;
                if option >= self.concept().quiz.options.len() {
                    return PageAction::Handled;
                }
                self.tracker.select_answer(idx, option);
            }
            KeyCode::Char('r') => {
                if let Some(runner) = self.runners.get_mut(idx) {
                    return run_action(runner);
                }
            }
            KeyCode::Char('e') => {
                self.editing = true;
                return PageAction::Status("Editing example".to_string());
            }
            KeyCode::Char('x') => {
                self.tracker.reset();
                return PageAction::Status("Progress reset".to_string());
            }
            KeyCode::Char('p') => return PageAction::Navigate(Route::Roadmap.path()),
            KeyCode::Char('n') => {
                return PageAction::Navigate(Route::Topic(Topic::SolidPrinciples).path())
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

        self.render_progress(frame, rows[0], theme);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(rows[1]);

        self.render_concept_list(frame, columns[0], theme);

        let detail = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[1]);

        self.render_detail(frame, detail[0], theme);
        if let Some(runner) = self.runners.get(self.selection.index()) {
            render_code_runner(frame, detail[1], runner, true, self.editing, &mut self.runner_scroll);
        }
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let progress = self.tracker.progress();
        let score = self.tracker.quiz_score(quiz_answers());
        let label = format!(
            "{}% complete · {}/{} concepts · quiz {}/{}",
            progress as u16,
            self.tracker.completed_count(),
            self.tracker.total(),
            score,
            CONCEPTS.len()
        );
        let gauge = Gauge::default()
            .block(page_block("Object-Oriented Programming Fundamentals", theme))
            .gauge_style(Style::default().fg(theme.success).bg(theme.current_line_bg))
            .ratio((progress / 100.0).clamp(0.0, 1.0))
            .label(label);
        frame.render_widget(gauge, area);
    }

    fn render_concept_list(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = CONCEPTS
            .iter()
            .map(|concept| {
                let (mark, color) = if self.tracker.is_complete(concept.id) {
                    ("✓", theme.success)
                } else {
                    ("○", theme.comment)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", mark), Style::default().fg(color)),
                    Span::styled(concept.title, Style::default().fg(theme.fg)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(page_block("Concepts", theme))
            .highlight_style(
                Style::default()
                    .bg(theme.current_line_bg)
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        let mut state = ListState::default().with_selected(Some(self.selection.index()));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_detail(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let idx = self.selection.index();
        let concept = self.concept();
        let mut lines: Vec<Line<'static>> = vec![heading(concept.title, theme), body(concept.description, theme)];

        if self.tracker.expanded() == Some(idx) {
            lines.push(Line::default());
            lines.push(subheading("Key Points", theme));
            lines.extend(concept.key_points.iter().map(|p| bullet(*p, theme)));

            lines.push(Line::default());
            lines.push(subheading("Quiz", theme));
            lines.push(body(concept.quiz.question, theme));
            let answer = self.tracker.answer(idx);
            for (opt, text) in concept.quiz.options.iter().enumerate() {
                let style = match answer {
                    Some(a) if a == opt && opt == concept.quiz.correct => Style::default().fg(theme.success),
                    Some(a) if a == opt => Style::default().fg(theme.error),
                    _ => Style::default().fg(theme.fg),
                };
                lines.push(Line::from(Span::styled(
                    format!("  [{}] {}", opt + 1, text),
                    style,
                )));
            }
            match self.tracker.is_correct(idx, concept.quiz.correct) {
                Some(true) => lines.push(Line::from(Span::styled(
                    format!("Correct! {}", concept.quiz.explanation),
                    Style::default().fg(theme.success),
                ))),
                Some(false) => lines.push(Line::from(Span::styled(
                    format!("Not quite. {}", concept.quiz.explanation),
                    Style::default().fg(theme.error),
                ))),
                None => {}
            }
        } else {
            lines.push(muted("Press ↵ to show key points and the quiz", theme));
        }

        if self.tracker.completed_count() == self.tracker.total() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Congratulations! You've completed all OOP fundamentals.",
                Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(page_block(format!("{}/{}", idx + 1, CONCEPTS.len()), theme))
            .wrap(Wrap { trim: false })
            .scroll((self.detail_scroll, 0));
        frame.render_widget(paragraph, area);
    }
}
