//! UI preferences stored in `settings.conf`.
//!
//! Only shell preferences live here (page size, sidebar state, start route);
//! author data is never written anywhere.

use std::path::Path;

use tracing::warn;

use super::AppState;
use crate::nav;
use crate::table::PaginationState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Rows per page on the Authors table.
    pub page_size: usize,
    pub sidebar_collapsed: bool,
    /// Route shown at startup.
    pub start_route: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: PaginationState::DEFAULT_PAGE_SIZE,
            sidebar_collapsed: false,
            start_route: "/admin/authors".to_string(),
        }
    }
}

impl Settings {
    /// Capture the preferences to keep from `app`.
    ///
    /// Page size and start route come from the loaded settings, so one-run
    /// overrides applied to the view (`--page-size`, `--route`) are not saved.
    pub fn from_app(app: &AppState) -> Self {
        Self {
            page_size: app.settings.page_size,
            sidebar_collapsed: app.sidebar_collapsed,
            start_route: app.settings.start_route.clone(),
        }
    }

    pub fn save_from_app(app: &AppState, path: &Path) -> std::io::Result<()> {
        Self::from_app(app).write_file(path)
    }

    /// Parse `key = value` lines over the defaults. Invalid values keep the default.
    pub fn parse(contents: &str) -> Self {
        let mut cfg = Self::default();
        for raw in contents.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else {
                continue;
            };
            let (key, val) = (key.trim(), val.trim());
            match key {
                "page_size" => match val.parse::<usize>() {
                    Ok(n) if n > 0 => cfg.page_size = n,
                    _ => warn!(value = val, "page_size must be a positive integer"),
                },
                "sidebar_collapsed" => cfg.sidebar_collapsed = parse_bool(val),
                "start_route" => {
                    if val.starts_with('/') {
                        cfg.start_route = val.to_string();
                    } else {
                        warn!(value = val, "start_route must begin with '/'");
                    }
                }
                _ => {}
            }
        }
        cfg
    }

    pub fn from_file(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        Some(Self::parse(&contents))
    }

    pub fn write_file(&self, path: &Path) -> std::io::Result<()> {
        let buf = format!(
            "# library-admin settings\n\
             # page_size: rows per page on the authors table (>= 1)\n\
             page_size = {}\n\
             sidebar_collapsed = {}\n\
             # start_route: {} for the landing page, or any /admin/... route\n\
             start_route = {}\n",
            self.page_size,
            self.sidebar_collapsed,
            nav::LANDING,
            self.start_route
        );
        std::fs::write(path, buf)
    }

    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::from_file(path).unwrap_or_default();
        }
        let cfg = Self::default();
        if let Err(e) = cfg.write_file(path) {
            warn!(path = %path.display(), error = %e, "could not write default settings");
        }
        cfg
    }
}

fn parse_bool(s: &str) -> bool {
    matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
