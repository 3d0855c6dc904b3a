//! Shared UI pieces: navbar, status bar, search overlay and dialogs.
//!
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::keymap::KeyAction;
use crate::app::{AppState, InputMode, ModalState, ROW_ACTIONS};
use crate::nav::{CrumbKind, breadcrumbs};
use crate::search::SearchOverlay;

/// Breadcrumbs on the left, search hint on the right.
pub fn render_navbar(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = &app.theme;
    let mut spans: Vec<Span> = vec![Span::raw(" ")];
    let crumbs = breadcrumbs(&app.route);
    if crumbs.is_empty() {
        spans.push(Span::styled("Home", Style::default().fg(theme.header_fg)));
    }
    for (i, crumb) in crumbs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" › ", Style::default().fg(theme.muted)));
        }
        let style = match crumb.kind {
            CrumbKind::Current => Style::default().fg(theme.header_fg).add_modifier(Modifier::BOLD),
            CrumbKind::Link => Style::default().fg(theme.text).add_modifier(Modifier::UNDERLINED),
            CrumbKind::Plain => Style::default().fg(theme.muted),
        };
        spans.push(Span::styled(crumb.title.clone(), style));
    }

    let hint = " ⌕ Search...  CTRL + K ";
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let inner_w = area.width.saturating_sub(2) as usize;
    let pad = inner_w.saturating_sub(used + hint.chars().count());
    spans.push(Span::raw(" ".repeat(pad)));
    spans.push(Span::styled(hint, Style::default().fg(theme.muted).bg(theme.status_bg)));

    let p = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border)),
    );
    f.render_widget(p, area);
}

/// Bottom line: input mode, route and view state.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let mode = match app.input_mode {
        InputMode::Normal => "NORMAL",
        InputMode::FilterAuthors => "FILTER",
        InputMode::Search => "SEARCH",
        InputMode::Modal => "DIALOG",
    };
    let view = &app.authors;
    let sort = match view.sorting().first() {
        Some(k) => format!("{} {}", k.column, k.direction.arrow()),
        None => "none".to_string(),
    };
    let filters = if view.filters().is_empty() {
        String::new()
    } else {
        let parts: Vec<String> = view.filters().iter().map(|(k, v)| format!("{k}~\"{v}\"")).collect();
        format!("  filters:[{}]", parts.join(","))
    };
    let msg = format!(
        " mode: {mode}  route: {}  sort: {sort}  rows/page: {}{filters}  · ?: help  q: quit",
        app.route,
        view.page_size()
    );
    let p = Paragraph::new(msg).style(Style::default().fg(app.theme.status_fg).bg(app.theme.status_bg));
    f.render_widget(p, area);
}

/// Compute a rectangle centered within `area` with a maximum size.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Palette box in the upper fifth of the screen.
pub fn render_search_overlay(f: &mut Frame, area: Rect, app: &AppState) {
    let search = &app.search;
    let width = area.width.saturating_sub(8).clamp(30, 64).min(area.width);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height / 5,
        width,
        height: 6.min(area.height),
    };
    let input = if search.query.is_empty() {
        Span::styled(SearchOverlay::PLACEHOLDER, Style::default().fg(app.theme.muted))
    } else {
        Span::styled(format!("{}▏", search.query), Style::default().fg(app.theme.header_fg))
    };
    let lines = vec![
        Line::from(vec![Span::raw("⌕ "), input]),
        Line::raw(""),
        Line::from(Span::styled(search.message(), Style::default().fg(app.theme.muted))).centered(),
    ];
    let p = Paragraph::new(lines).block(
        Block::default()
            .title(" Search ")
            .title_bottom(Line::from(" ESC ").right_aligned())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

pub fn render_modal(f: &mut Frame, area: Rect, app: &AppState, state: &ModalState) {
    match state {
        ModalState::Actions { selected, .. } => render_actions_modal(f, area, app, *selected),
        ModalState::Info { message } => render_info_modal(f, area, app, message),
        ModalState::Help { scroll } => render_help_modal(f, area, app, *scroll),
    }
}

fn render_actions_modal(f: &mut Frame, area: Rect, app: &AppState, selected: usize) {
    let rect = centered_rect(28, 6, area);
    let lines: Vec<Line> = ROW_ACTIONS
        .iter()
        .enumerate()
        .map(|(idx, label)| {
            let marker = if idx == selected { "▶ " } else { "  " };
            let style = match *label {
                "Delete" => Style::default().fg(app.theme.danger),
                _ => Style::default().fg(app.theme.text),
            };
            Line::from(Span::styled(format!("{marker}{label}"), style))
        })
        .collect();
    let p = Paragraph::new(lines).block(
        Block::default()
            .title("Actions")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

/// Render a generic informational modal dialog.
pub fn render_info_modal(f: &mut Frame, area: Rect, app: &AppState, message: &str) {
    let max_w = area.width.saturating_sub(6).max(30);
    let width = 40u16.min(max_w);
    let chars = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let approx_lines = (chars / width.saturating_sub(4).max(10)).max(1);
    let height = approx_lines.saturating_add(4).min(area.height.saturating_sub(6).max(5)).max(5);
    let rect = centered_rect(width, height, area);
    let p = Paragraph::new(message.to_string())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title("Info")
                .title_bottom(Line::from(" Enter/Esc ").right_aligned())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}

/// Help dialog rows: section title, then (label, action) pairs.
const HELP_SECTIONS: &[(&str, &[(&str, KeyAction)])] = &[
    (
        "General:",
        &[
            ("Quit", KeyAction::Quit),
            ("Search overlay", KeyAction::ToggleSearch),
            ("Collapse sidebar", KeyAction::ToggleSidebar),
            ("Next menu item", KeyAction::NextNavItem),
            ("Previous menu item", KeyAction::PrevNavItem),
            ("Help", KeyAction::OpenHelp),
        ],
    ),
    (
        "Authors page:",
        &[
            ("Filter by username", KeyAction::FilterAuthors),
            ("Sort by username", KeyAction::ToggleSort),
            ("Clear sort & filter", KeyAction::ResetView),
            ("Next page", KeyAction::NextPage),
            ("Previous page", KeyAction::PrevPage),
            ("Move up", KeyAction::MoveUp),
            ("Move down", KeyAction::MoveDown),
            ("Row actions", KeyAction::EnterAction),
            ("Add author", KeyAction::AddAuthor),
        ],
    ),
];

/// Number of text lines in the help dialog body.
pub fn help_line_count() -> u16 {
    let body: usize = HELP_SECTIONS.iter().map(|(_, items)| items.len() + 1).sum();
    let gaps = HELP_SECTIONS.len().saturating_sub(1);
    u16::try_from(body + gaps).unwrap_or(u16::MAX)
}

/// Largest scroll offset that still leaves the last help line on screen.
pub fn help_max_scroll() -> u16 {
    help_line_count().saturating_sub(1)
}

/// Help lists every bound action with its keys, in two sections.
pub fn render_help_modal(f: &mut Frame, area: Rect, app: &AppState, scroll: u16) {
    let label_w = HELP_SECTIONS
        .iter()
        .flat_map(|(_, items)| items.iter())
        .map(|(l, _)| l.len())
        .max()
        .unwrap_or(0);
    let mut lines: Vec<Line> = Vec::new();
    for (title, section) in HELP_SECTIONS {
        if !lines.is_empty() {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(*title, Style::default().add_modifier(Modifier::BOLD))));
        for (label, action) in section.iter() {
            let keys = app.keymap.keys_for(*action).join(", ");
            lines.push(Line::from(vec![
                Span::raw(format!("  {label:>label_w$} │ ")),
                Span::styled(keys, Style::default().add_modifier(Modifier::ITALIC)),
            ]));
        }
    }

    let width = area.width.saturating_sub(10).clamp(40, 70).min(area.width);
    let height = area.height.saturating_sub(4).min(22);
    let rect = centered_rect(width, height, area);
    let p = Paragraph::new(lines)
        .scroll((scroll.min(help_max_scroll()), 0))
        .block(
            Block::default()
                .title("Keybindings")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}
