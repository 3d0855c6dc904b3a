//! Application state types and entry glue.
//!
//! Defines the enums and structs that model the admin shell (route, sidebar,
//! overlays, the authors view) and where its config files live. The event
//! loop is re-exported as `run`.
//!
pub mod keymap;
pub mod settings;
pub mod theme;
pub mod update;

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use crate::catalog::{self, Author};
use crate::nav::{self, Page};
use crate::search::SearchOverlay;
use crate::table::TabularDataView;

pub use keymap::Keymap;
pub use settings::Settings;
pub use theme::Theme;

/// Current input mode for key handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Typing into the username filter above the authors table.
    FilterAuthors,
    /// Typing into the search overlay.
    Search,
    Modal,
}

/// Dialogs drawn over the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalState {
    /// Row actions for the author at `author_id`.
    Actions { selected: usize, author_id: String },
    Info { message: String },
    Help { scroll: u16 },
}

pub const ROW_ACTIONS: [&str; 2] = ["Edit", "Delete"];

pub struct AppState {
    pub started_at: Instant,
    pub route: String,
    pub sidebar_collapsed: bool,
    pub authors: TabularDataView<Author>,
    /// Highlighted row within the visible page.
    pub selected_row: usize,
    pub input_mode: InputMode,
    pub filter_input: String,
    pub search: SearchOverlay,
    pub modal: Option<ModalState>,
    pub theme: Theme,
    pub keymap: Keymap,
    pub settings: Settings,
}

impl AppState {
    /// Build the shell from already-loaded configuration.
    pub fn new(settings: Settings, theme: Theme, keymap: Keymap) -> crate::Result<Self> {
        let authors = catalog::authors_view(settings.page_size)?;
        Ok(Self {
            started_at: Instant::now(),
            route: settings.start_route.clone(),
            sidebar_collapsed: settings.sidebar_collapsed,
            authors,
            selected_row: 0,
            input_mode: InputMode::Normal,
            filter_input: String::new(),
            search: SearchOverlay::default(),
            modal: None,
            theme,
            keymap,
            settings,
        })
    }

    /// Load theme, keybindings and settings from `dir`, creating missing files.
    pub fn load(dir: &ConfigDir) -> crate::Result<Self> {
        let settings = Settings::load_or_init(&dir.file("settings.conf"));
        let theme = Theme::load_or_init(&dir.file("theme.conf"));
        let keymap = Keymap::load_or_init(&dir.file("keybinds.conf"));
        Self::new(settings, theme, keymap)
    }

    pub fn page(&self) -> Page {
        nav::page_for(&self.route)
    }

    pub fn navigate(&mut self, route: &str) {
        if self.route != route {
            info!(from = %self.route, to = route, "navigate");
            self.route = route.to_string();
            self.selected_row = 0;
        }
    }

    /// Author under the row highlight, if the page has rows.
    pub fn selected_author(&self) -> Option<&Author> {
        self.authors.visible_rows().get(self.selected_row).copied()
    }

    /// Keep the highlight inside the visible page.
    pub fn clamp_selection(&mut self) {
        let len = self.authors.visible_rows().len();
        self.selected_row = self.selected_row.min(len.saturating_sub(1));
    }

    pub fn open_info(&mut self, message: impl Into<String>) {
        self.modal = Some(ModalState::Info { message: message.into() });
        self.input_mode = InputMode::Modal;
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.input_mode = InputMode::Normal;
    }
}

/// Directory holding `settings.conf`, `theme.conf` and `keybinds.conf`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigDir(PathBuf);

impl ConfigDir {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    /// `explicit`, else `$XDG_CONFIG_HOME/library-admin`, else
    /// `$HOME/.config/library-admin`, else the working directory.
    /// The chosen directory is created if needed; on failure the working
    /// directory is used instead.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let candidate = explicit
            .or_else(|| std::env::var_os("XDG_CONFIG_HOME").map(|x| PathBuf::from(x).join("library-admin")))
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config").join("library-admin")));
        match candidate {
            Some(dir) if std::fs::create_dir_all(&dir).is_ok() => Self(dir),
            _ => Self(PathBuf::from(".")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }
}

/// Re-export the application event loop entry function.
pub use update::run_app as run;
