//! Search overlay state and the authors username filter.

use tracing::debug;

use crate::app::AppState;

/// Column the authors filter input is bound to.
pub const AUTHOR_FILTER_COLUMN: &str = "username";

/// Command-palette style overlay toggled with Ctrl+K.
///
/// Searching is not wired to any data source; the overlay only echoes the
/// query back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchOverlay {
    pub open: bool,
    pub query: String,
}

impl SearchOverlay {
    pub const PLACEHOLDER: &'static str = "Search books, authors, members...";

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn push(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop(&mut self) {
        self.query.pop();
    }

    /// Text shown under the input.
    pub fn message(&self) -> String {
        if self.query.is_empty() {
            "Start typing to search...".to_string()
        } else {
            format!("No results found for \"{}\"", self.query)
        }
    }
}

/// Push `app.filter_input` into the authors view as the username filter and
/// move the highlight back to the first row.
pub fn apply_author_filter(app: &mut AppState) {
    if let Err(e) = app.authors.set_filter(AUTHOR_FILTER_COLUMN, &app.filter_input) {
        debug!(error = %e, "author filter rejected");
    }
    app.selected_row = 0;
}
