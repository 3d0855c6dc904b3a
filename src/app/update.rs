use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::app::keymap::KeyAction;
use crate::app::{AppState, InputMode, ModalState, ROW_ACTIONS};
use crate::nav::{self, Page};
use crate::search::apply_author_filter;
use crate::ui;

/// Draw and dispatch keys until the user quits.
pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    info!(route = %app.route, "event loop started");
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key) {
                    break;
                }
            }
        }
    }
    info!(uptime_ms = app.started_at.elapsed().as_millis() as u64, "event loop finished");
    Ok(())
}

/// Apply one key press. Returns `true` when the application should exit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> bool {
    // Ctrl+K toggles the overlay from every mode except an open dialog
    if is_search_toggle(app, &key) && app.input_mode != InputMode::Modal {
        toggle_search(app);
        return false;
    }
    match app.input_mode {
        InputMode::Normal => return handle_normal_key(app, key),
        InputMode::Search => handle_search_key(app, key),
        InputMode::FilterAuthors => handle_filter_key(app, key),
        InputMode::Modal => handle_modal_key(app, key.code),
    }
    false
}

fn is_search_toggle(app: &AppState, key: &KeyEvent) -> bool {
    app.keymap.resolve(key) == Some(KeyAction::ToggleSearch)
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('k'))
}

fn toggle_search(app: &mut AppState) {
    app.search.toggle();
    app.input_mode = if app.search.open { InputMode::Search } else { InputMode::Normal };
    debug!(open = app.search.open, "search overlay toggled");
}

fn handle_normal_key(app: &mut AppState, key: KeyEvent) -> bool {
    let Some(action) = app.keymap.resolve(&key) else {
        return false;
    };
    let on_authors = app.page() == Page::Authors;
    match action {
        KeyAction::Quit => return true,
        KeyAction::ToggleSearch => toggle_search(app),
        KeyAction::ToggleSidebar => app.sidebar_collapsed = !app.sidebar_collapsed,
        KeyAction::NextNavItem => {
            let next = nav::next_route(&app.route);
            app.navigate(next);
        }
        KeyAction::PrevNavItem => {
            let prev = nav::previous_route(&app.route);
            app.navigate(prev);
        }
        KeyAction::OpenHelp => {
            app.modal = Some(ModalState::Help { scroll: 0 });
            app.input_mode = InputMode::Modal;
        }
        KeyAction::EnterAction => match app.page() {
            Page::Landing => app.navigate("/admin/dashboard"),
            Page::Authors => {
                if let Some(author) = app.selected_author() {
                    let author_id = author.id.clone();
                    app.modal = Some(ModalState::Actions { selected: 0, author_id });
                    app.input_mode = InputMode::Modal;
                }
            }
            Page::Placeholder(_) | Page::NotFound => {}
        },
        KeyAction::FilterAuthors if on_authors => {
            app.input_mode = InputMode::FilterAuthors;
        }
        KeyAction::ToggleSort if on_authors => {
            if let Err(e) = app.authors.toggle_sort("username") {
                debug!(error = %e, "sort rejected");
            }
            app.selected_row = 0;
        }
        KeyAction::ResetView if on_authors => {
            app.authors.reset();
            app.filter_input.clear();
            app.selected_row = 0;
        }
        KeyAction::NextPage if on_authors => {
            app.authors.next_page();
            app.selected_row = 0;
        }
        KeyAction::PrevPage if on_authors => {
            app.authors.previous_page();
            app.selected_row = 0;
        }
        KeyAction::MoveUp if on_authors => {
            app.selected_row = app.selected_row.saturating_sub(1);
        }
        KeyAction::MoveDown if on_authors => {
            app.selected_row += 1;
            app.clamp_selection();
        }
        KeyAction::AddAuthor if on_authors => app.open_info("Open add-author dialog"),
        _ => {}
    }
    false
}

/// Text entry only takes plain or shifted characters; chords are dropped.
fn is_text_key(key: &KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn handle_search_key(app: &mut AppState, key: KeyEvent) {
    if !is_text_key(&key) {
        return;
    }
    match key.code {
        KeyCode::Esc => {
            app.search.close();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => app.search.pop(),
        KeyCode::Char(c) => app.search.push(c),
        _ => {}
    }
}

fn handle_filter_key(app: &mut AppState, key: KeyEvent) {
    if !is_text_key(&key) {
        return;
    }
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Backspace => {
            app.filter_input.pop();
            apply_author_filter(app);
        }
        KeyCode::Char(c) => {
            app.filter_input.push(c);
            apply_author_filter(app);
        }
        _ => {}
    }
}

fn handle_modal_key(app: &mut AppState, code: KeyCode) {
    match &mut app.modal {
        Some(ModalState::Actions { selected, author_id }) => match code {
            KeyCode::Esc => app.close_modal(),
            KeyCode::Up | KeyCode::Char('k') => *selected = selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                *selected = (*selected + 1).min(ROW_ACTIONS.len() - 1);
            }
            KeyCode::Enter => {
                let choice = *selected;
                let author_id = author_id.clone();
                let username = app
                    .authors
                    .rows()
                    .iter()
                    .find(|a| a.id == author_id)
                    .map(|a| a.username.clone())
                    .unwrap_or_default();
                let message = match choice {
                    0 => format!("Edit {username}"),
                    _ => format!("Delete {username}?"),
                };
                info!(author = %username, action = ROW_ACTIONS[choice.min(1)], "row action (not wired)");
                app.open_info(message);
            }
            _ => {}
        },
        Some(ModalState::Help { scroll }) => match code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q') => app.close_modal(),
            KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                *scroll = scroll.saturating_add(1).min(ui::components::help_max_scroll());
            }
            _ => {}
        },
        Some(ModalState::Info { .. }) => {
            if matches!(code, KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace) {
                app.close_modal();
            }
        }
        None => app.input_mode = InputMode::Normal,
    }
}
