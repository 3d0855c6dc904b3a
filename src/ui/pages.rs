use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::AppState;
use crate::nav::LANDING_CARDS;

/// Public landing page: greeting plus one card per entry point.
pub fn render_landing(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            "Welcome to NextLibrary",
            Style::default().fg(app.theme.header_fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Manage your library resources with ease. Press Enter to open the admin area.",
            Style::default().fg(app.theme.muted),
        )),
    ]);
    f.render_widget(intro, chunks[0]);

    let constraints = vec![Constraint::Ratio(1, LANDING_CARDS.len() as u32); LANDING_CARDS.len()];
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(chunks[1]);
    for ((title, description), rect) in LANDING_CARDS.iter().zip(cards.iter()) {
        let p = Paragraph::new(*description)
            .style(Style::default().fg(app.theme.text))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Span::styled(*title, Style::default().fg(app.theme.header_fg).add_modifier(Modifier::BOLD)))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.border)),
            );
        f.render_widget(p, *rect);
    }
}

/// Menu page without content yet.
pub fn render_placeholder(f: &mut Frame, area: Rect, app: &AppState, name: &str) {
    let p = Paragraph::new(vec![
        Line::from(Span::styled(name.to_string(), Style::default().fg(app.theme.header_fg).add_modifier(Modifier::BOLD))),
        Line::raw(""),
        Line::from(Span::styled("Nothing to show here yet.", Style::default().fg(app.theme.muted))),
    ]);
    f.render_widget(p, area);
}

pub fn render_not_found(f: &mut Frame, area: Rect, app: &AppState) {
    let p = Paragraph::new(format!("404 · no page at {}", app.route)).style(Style::default().fg(app.theme.danger));
    f.render_widget(p, area);
}
