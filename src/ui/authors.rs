use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::app::{AppState, InputMode};

pub const EMPTY_MESSAGE: &str = "No authors found.";

/// Header line plus its bottom margin.
const HEADER_HEIGHT: u16 = 2;

/// Title, filter input, table and pagination controls.
pub fn render_authors_page(f: &mut Frame, area: Rect, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(vec![
        Line::from(Span::styled("Authors", Style::default().fg(app.theme.header_fg).add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(
            "Manage authors, control their access and keep profiles up to date.   [n] Add author",
            Style::default().fg(app.theme.muted),
        )),
    ]);
    f.render_widget(title, chunks[0]);

    render_filter_input(f, chunks[1], app);
    render_authors_table(f, chunks[2], app);
    render_pagination(f, chunks[3], app);
}

fn render_filter_input(f: &mut Frame, area: Rect, app: &AppState) {
    let focused = app.input_mode == InputMode::FilterAuthors;
    let (text, style) = if app.filter_input.is_empty() && !focused {
        ("Search by username...  [/]".to_string(), Style::default().fg(app.theme.muted))
    } else {
        let cursor = if focused { "▏" } else { "" };
        (format!("{}{cursor}", app.filter_input), Style::default().fg(app.theme.text))
    };
    let border = if focused { app.theme.accent } else { app.theme.border };
    let p = Paragraph::new(format!("⌕ {text}")).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    f.render_widget(p, area);
}

/// Table of the current page. Headers of sortable columns carry the sort arrow
/// (or a neutral marker while unsorted).
pub fn render_authors_table(f: &mut Frame, area: Rect, app: &AppState) {
    let view = &app.authors;
    let columns = view.columns();

    let header_cells = columns.iter().map(|c| {
        let label = if c.is_sortable() {
            let marker = view.sort_direction(c.id()).map_or("⇅", |d| d.arrow());
            format!("{} {marker}", c.header())
        } else {
            c.header().to_string()
        };
        Cell::from(label)
    });
    let header = Row::new(header_cells)
        .style(Style::default().fg(app.theme.header_fg).add_modifier(Modifier::BOLD))
        .bottom_margin(HEADER_HEIGHT - 1);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));
    let visible = view.visible_rows();
    let rows: Vec<Row> = visible
        .iter()
        .enumerate()
        .map(|(i, author)| {
            let style = if i == app.selected_row && app.input_mode != InputMode::FilterAuthors {
                Style::default().fg(app.theme.highlight_fg).bg(app.theme.highlight_bg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text)
            };
            let cells = columns.iter().map(|c| {
                let text = c.render(author);
                match c.id() {
                    "email" => Cell::from(text).style(Style::default().fg(app.theme.muted)),
                    _ => Cell::from(text),
                }
            });
            Row::new(cells).style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Length(18),
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(3),
    ];
    let inner = block.inner(area);
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);
    f.render_widget(table, area);

    // the empty message spans every column, below the header and its margin
    if visible.is_empty() && inner.height > HEADER_HEIGHT {
        let body = Rect {
            y: inner.y + HEADER_HEIGHT,
            height: 1,
            ..inner
        };
        let msg = Paragraph::new(Line::from(EMPTY_MESSAGE).centered()).style(Style::default().fg(app.theme.muted));
        f.render_widget(msg, body);
    }
}

/// `Page x of y` with Previous/Next, dimmed when unavailable.
fn render_pagination(f: &mut Frame, area: Rect, app: &AppState) {
    let view = &app.authors;
    let enabled = |on: bool| {
        if on { Style::default().fg(app.theme.text) } else { Style::default().fg(app.theme.muted).add_modifier(Modifier::DIM) }
    };
    let line = Line::from(vec![
        Span::styled(
            format!(
                "{} of {} authors · page {} of {}   ",
                view.filtered_row_count(),
                view.total_row_count(),
                view.page_index() + 1,
                view.page_count().max(1)
            ),
            Style::default().fg(app.theme.muted),
        ),
        Span::styled("[← Previous]", enabled(view.can_go_previous())),
        Span::raw(" "),
        Span::styled("[Next →]", enabled(view.can_go_next())),
    ])
    .right_aligned();
    f.render_widget(Paragraph::new(line), area);
}
