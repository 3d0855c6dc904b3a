use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::AppState;
use crate::nav::{SIDEBAR_MENU, is_active};

/// Menu groups and items; the active item is highlighted and marked with a dot.
/// When collapsed only the item glyphs are shown.
pub fn render_sidebar(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();
    if app.sidebar_collapsed {
        lines.push(Line::from(Span::styled(" L", Style::default().fg(theme.header_fg).add_modifier(Modifier::BOLD))));
    } else {
        lines.push(Line::from(vec![
            Span::styled(" L ", Style::default().fg(theme.surface).bg(theme.header_fg).add_modifier(Modifier::BOLD)),
            Span::styled(" NextLibrary", Style::default().fg(theme.header_fg).add_modifier(Modifier::BOLD)),
        ]));
    }

    for group in SIDEBAR_MENU {
        lines.push(Line::raw(""));
        if !app.sidebar_collapsed {
            lines.push(Line::from(Span::styled(
                format!(" {}", group.label.to_uppercase()),
                Style::default().fg(theme.muted).add_modifier(Modifier::BOLD),
            )));
        }
        for item in group.items {
            let active = is_active(item.href, &app.route);
            let style = if active {
                Style::default().fg(theme.highlight_fg).bg(theme.highlight_bg)
            } else {
                Style::default().fg(theme.text)
            };
            if app.sidebar_collapsed {
                lines.push(Line::from(Span::styled(format!(" {} ", item.icon), style)));
            } else {
                let mut spans = vec![Span::styled(format!(" {} {:<14}", item.icon, item.name), style)];
                if active {
                    spans.push(Span::styled("●", Style::default().fg(theme.accent)));
                }
                lines.push(Line::from(spans));
            }
        }
    }

    let p = Paragraph::new(lines).style(Style::default().bg(theme.surface)).block(
        Block::default()
            .borders(Borders::RIGHT)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(p, area);
}
