//! ratatui rendering of the admin shell.
//!
//! Layout: sidebar on the left, then a column with the navbar (breadcrumbs and
//! search hint), the page content and a one-line status bar. The search
//! overlay and dialogs are drawn last, on top.

pub mod authors;
pub mod components;
pub mod pages;
pub mod sidebar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::AppState;
use crate::nav::Page;

pub const SIDEBAR_WIDTH: u16 = 24;
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 5;

pub fn render(f: &mut Frame, app: &AppState) {
    let sidebar_w = if app.sidebar_collapsed { SIDEBAR_COLLAPSED_WIDTH } else { SIDEBAR_WIDTH };
    let root = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(sidebar_w), Constraint::Min(20)])
        .split(f.area());
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5), Constraint::Length(1)])
        .split(root[1]);

    sidebar::render_sidebar(f, root[0], app);
    components::render_navbar(f, main[0], app);

    match app.page() {
        Page::Authors => authors::render_authors_page(f, main[1], app),
        Page::Landing => pages::render_landing(f, main[1], app),
        Page::Placeholder(name) => pages::render_placeholder(f, main[1], app, name),
        Page::NotFound => pages::render_not_found(f, main[1], app),
    }

    components::render_status_bar(f, main[2], app);

    if app.search.open {
        components::render_search_overlay(f, f.area(), app);
    }
    if let Some(modal) = &app.modal {
        components::render_modal(f, f.area(), app, modal);
    }
}
