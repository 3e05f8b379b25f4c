//! Site header: brand, navigation, menu and search toggles

use crate::content::site::{SITE_BADGE, SITE_NAME};
use crate::routes::{Route, NAV_LINKS};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Open/closed state of the header's menu and search bar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub menu_open: bool,
    pub search_open: bool,
    pub search: String,
}

impl HeaderState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn toggle_search(&mut self) {
        self.search_open = !self.search_open;
        if !self.search_open {
            self.search.clear();
        }
    }

    /// Close the search bar and hand back the typed term
    pub fn take_search(&mut self) -> String {
        self.search_open = false;
        std::mem::take(&mut self.search)
    }

    /// Rows the header occupies
    pub fn height(&self) -> u16 {
        if self.search_open {
            6
        } else {
            3
        }
    }
}

/// Index into [`NAV_LINKS`] of the section `route` belongs to
pub fn active_nav_index(route: &Route) -> Option<usize> {
    match route {
        Route::Home => Some(0),
        Route::Roadmap | Route::Topic(_) => Some(1),
        Route::Patterns | Route::Pattern(_) => Some(2),
        Route::Resources => Some(3),
        Route::NotFound(_) => None,
    }
}

pub fn render_header(frame: &mut Frame, area: Rect, route: &Route, state: &HeaderState, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let active = active_nav_index(route);
    let mut spans = vec![
        Span::styled(
            format!(" {} ", SITE_BADGE),
            Style::default()
                .bg(theme.primary)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}   ", SITE_NAME),
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
        ),
    ];

    for (idx, link) in NAV_LINKS.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(theme.comment)));
        }
        let style = if Some(idx) == active {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.fg)
        };
        spans.push(Span::styled(link.title, style));
    }

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_normal));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), rows[0]);

    if state.search_open {
        let search_block = Block::default()
            .title(" Search for concepts, patterns... ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused));
        let text = Line::from(vec![
            Span::styled(state.search.clone(), Style::default().fg(theme.fg)),
            Span::styled("▏", Style::default().fg(theme.secondary)),
        ]);
        frame.render_widget(Paragraph::new(text).block(search_block), rows[1]);
    }
}

/// Navigation popup shown while the menu is open
pub fn render_menu(frame: &mut Frame, area: Rect, route: &Route, theme: &Theme) {
    let width = 30.min(area.width);
    let height = (NAV_LINKS.len() as u16 + 3).min(area.height);
    let popup = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1,
        width,
        height,
    };

    let active = active_nav_index(route);
    let mut items: Vec<ListItem> = NAV_LINKS
        .iter()
        .enumerate()
        .map(|(idx, link)| {
            let style = if Some(idx) == active {
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };
            ListItem::new(format!(" {}  {}", idx + 1, link.title)).style(style)
        })
        .collect();
    items.push(ListItem::new(" g  Get Started").style(Style::default().fg(theme.secondary)));

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg));

    frame.render_widget(Clear, popup);
    frame.render_widget(List::new(items).block(block), popup);
}
