//! Footer with tagline and link columns

use crate::content::site::{FOOTER_COLUMNS, TAGLINE};
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) {
    let mut spans = vec![
        Span::styled(
            " LearnLLD ",
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{}  ", TAGLINE), Style::default().fg(theme.comment)),
    ];

    for (title, links) in FOOTER_COLUMNS {
        spans.push(Span::styled(
            format!("{}: ", title),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ));
        let names: Vec<&str> = links.iter().map(|l| l.title).collect();
        spans.push(Span::styled(
            format!("{}  ", names.join(", ")),
            Style::default().fg(theme.comment),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
