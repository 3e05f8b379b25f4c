//! Status bar rendering with keybindings and the current path

use crate::routes::Route;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Global keybindings appended after the page's own
const GLOBAL_HINTS: [(&str, &str); 4] = [("/", "search"), ("m", "menu"), ("esc", "back"), ("q", "quit")];

/// Render the status bar at the bottom.
///
/// `mode` is an optional badge such as `EDIT` or `SEARCH` shown at the far
/// right.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    route: &Route,
    message: &str,
    hints: &[(&str, &str)],
    mode: Option<&str>,
    theme: &Theme,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    // Left side: path and message
    let path_bg = if route.is_not_found() {
        theme.error
    } else {
        theme.primary
    };
    let left_spans = vec![
        Span::styled(
            format!(" {} ", route.path()),
            Style::default()
                .bg(path_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default().bg(theme.current_line_bg).fg(theme.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default().bg(theme.current_line_bg).fg(theme.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(theme.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(theme.comment).fg(Color::Black);
    let desc_style = Style::default().bg(theme.current_line_bg).fg(theme.fg);
    let sep_style = Style::default().bg(theme.current_line_bg).fg(theme.comment);

    let mut right_spans = Vec::new();
    for (idx, (key, desc)) in hints.iter().chain(GLOBAL_HINTS.iter()).enumerate() {
        if idx > 0 {
            right_spans.push(Span::styled("│", sep_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    if let Some(mode) = mode {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            format!(" {} ", mode),
            Style::default()
                .bg(theme.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(theme.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
