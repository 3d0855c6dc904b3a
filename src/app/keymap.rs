//! Keybinding configuration: defaults, `keybinds.conf` parsing and key resolution.

use std::collections::HashMap;
use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::warn;

/// Semantic actions reachable from the keyboard in normal mode.
///
/// Several keys may map to one action (both `j` and Down move down).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Open or close the command-palette search overlay.
    ToggleSearch,
    /// Collapse or expand the sidebar.
    ToggleSidebar,
    /// Go to the next sidebar item, wrapping at the end.
    NextNavItem,
    /// Go to the previous sidebar item, wrapping at the start.
    PrevNavItem,
    /// Focus the username filter on the Authors page.
    FilterAuthors,
    /// Cycle the username sort: none → ascending → descending.
    ToggleSort,
    /// Clear sort and filters on the Authors page.
    ResetView,
    /// Show the next page of authors.
    NextPage,
    /// Show the previous page of authors.
    PrevPage,
    /// Move the row highlight up.
    MoveUp,
    /// Move the row highlight down, stopping at the last visible row.
    MoveDown,
    /// Open the row actions menu (or enter the admin area from the landing page).
    EnterAction,
    /// Start adding an author (informational dialog only).
    AddAuthor,
    /// Display the keybindings reference.
    OpenHelp,
    /// Swallow the key without doing anything.
    Ignore,
}

const ACTIONS: [(KeyAction, &str); 16] = [
    (KeyAction::Quit, "Quit"),
    (KeyAction::ToggleSearch, "ToggleSearch"),
    (KeyAction::ToggleSidebar, "ToggleSidebar"),
    (KeyAction::NextNavItem, "NextNavItem"),
    (KeyAction::PrevNavItem, "PrevNavItem"),
    (KeyAction::FilterAuthors, "FilterAuthors"),
    (KeyAction::ToggleSort, "ToggleSort"),
    (KeyAction::ResetView, "ResetView"),
    (KeyAction::NextPage, "NextPage"),
    (KeyAction::PrevPage, "PrevPage"),
    (KeyAction::MoveUp, "MoveUp"),
    (KeyAction::MoveDown, "MoveDown"),
    (KeyAction::EnterAction, "EnterAction"),
    (KeyAction::AddAuthor, "AddAuthor"),
    (KeyAction::OpenHelp, "OpenHelp"),
    (KeyAction::Ignore, "Ignore"),
];

/// Config-file name of an action.
pub fn format_action(a: KeyAction) -> &'static str {
    ACTIONS.iter().find(|(k, _)| *k == a).map_or("Ignore", |(_, name)| *name)
}

fn parse_action(s: &str) -> Option<KeyAction> {
    let s = s.trim();
    ACTIONS.iter().find(|(_, name)| *name == s).map(|(a, _)| *a)
}

/// Mapping from `(modifiers, code)` to [`KeyAction`].
#[derive(Clone, Debug)]
pub struct Keymap {
    bindings: HashMap<(KeyModifiers, KeyCode), KeyAction>,
}

impl Keymap {
    /// Built-in bindings used when no config file overrides them.
    pub fn new_defaults() -> Self {
        use KeyCode::*;
        use KeyModifiers as M;
        let defaults = [
            ((M::NONE, Char('q')), KeyAction::Quit),
            ((M::NONE, Esc), KeyAction::Ignore),
            ((M::CONTROL, Char('k')), KeyAction::ToggleSearch),
            ((M::CONTROL, Char('b')), KeyAction::ToggleSidebar),
            ((M::NONE, Tab), KeyAction::NextNavItem),
            ((M::NONE, BackTab), KeyAction::PrevNavItem),
            // some terminals report Shift+Tab as BackTab with SHIFT set
            ((M::SHIFT, BackTab), KeyAction::PrevNavItem),
            ((M::NONE, Char('/')), KeyAction::FilterAuthors),
            ((M::NONE, Char('s')), KeyAction::ToggleSort),
            ((M::NONE, Char('r')), KeyAction::ResetView),
            ((M::NONE, Right), KeyAction::NextPage),
            ((M::NONE, Left), KeyAction::PrevPage),
            ((M::NONE, Char('l')), KeyAction::NextPage),
            ((M::NONE, Char('h')), KeyAction::PrevPage),
            ((M::NONE, PageDown), KeyAction::NextPage),
            ((M::NONE, PageUp), KeyAction::PrevPage),
            ((M::NONE, Up), KeyAction::MoveUp),
            ((M::NONE, Down), KeyAction::MoveDown),
            ((M::NONE, Char('k')), KeyAction::MoveUp),
            ((M::NONE, Char('j')), KeyAction::MoveDown),
            ((M::NONE, Enter), KeyAction::EnterAction),
            ((M::NONE, Char('n')), KeyAction::AddAuthor),
            ((M::NONE, Char('?')), KeyAction::OpenHelp),
        ];
        Self { bindings: defaults.into_iter().collect() }
    }

    /// Start from the defaults and apply `Action = KeySpec` lines on top.
    pub fn parse(contents: &str) -> Self {
        let mut map = Self::default();
        for raw in contents.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((lhs, rhs)) = line.split_once('=') else {
                continue;
            };
            match (parse_action(lhs), parse_key(rhs)) {
                (Some(action), Some(key)) => {
                    map.bindings.insert(key, action);
                }
                _ => warn!(line, "ignoring keybinding"),
            }
        }
        map
    }

    /// Parse `path` over the defaults; `None` when it cannot be read.
    pub fn from_file(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        Some(Self::parse(&contents))
    }

    /// Dump every binding as `Action = KeySpec`, grouped by action.
    pub fn write_file(&self, path: &Path) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# library-admin keybindings\n");
        buf.push_str("# Format: <Action> = <KeySpec>   (KeySpec: q, Ctrl+k, Enter, Esc, Tab, BackTab, Up, Down, Left, Right, PageUp, PageDown, Delete, /)\n");
        buf.push_str("# Actions: ");
        buf.push_str(&ACTIONS.iter().map(|(_, n)| *n).collect::<Vec<_>>().join(", "));
        buf.push_str("\n\n");
        for (action, name) in ACTIONS {
            for k in self.keys_for(action) {
                let _ = writeln!(&mut buf, "{name} = {k}");
            }
        }
        std::fs::write(path, buf)
    }

    /// Read `path`, or write the default bindings there when it does not exist.
    ///
    /// # Arguments
    /// - `path`: location of `keybinds.conf`
    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::from_file(path).unwrap_or_default();
        }
        let km = Self::default();
        if let Err(e) = km.write_file(path) {
            warn!(path = %path.display(), error = %e, "could not write default keybindings");
        }
        km
    }

    /// Action bound to `key` with its exact modifiers, if any.
    pub fn resolve(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&(key.modifiers, key.code)).copied()
    }

    /// Keys bound to `action`, formatted and sorted.
    pub fn keys_for(&self, action: KeyAction) -> Vec<String> {
        let mut keys: Vec<String> = self
            .bindings
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|((m, c), _)| Self::format_key(*m, *c))
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }

    /// Human-readable key spec, the same form `keybinds.conf` accepts.
    pub fn format_key(mods: KeyModifiers, code: KeyCode) -> String {
        use KeyCode::*;
        let base = match code {
            Char(c) => c.to_string(),
            Enter => "Enter".into(),
            Delete => "Delete".into(),
            Esc => "Esc".into(),
            Tab => "Tab".into(),
            BackTab => "BackTab".into(),
            Up => "Up".into(),
            Down => "Down".into(),
            Left => "Left".into(),
            Right => "Right".into(),
            PageUp => "PageUp".into(),
            PageDown => "PageDown".into(),
            other => format!("{other:?}"),
        };
        if mods.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{base}")
        } else {
            base
        }
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new_defaults()
    }
}

fn parse_key(spec: &str) -> Option<(KeyModifiers, KeyCode)> {
    use KeyCode::*;
    let s = spec.trim();
    let (mods, rest) = match s.strip_prefix("Ctrl+") {
        Some(after) => (KeyModifiers::CONTROL, after),
        None => (KeyModifiers::NONE, s),
    };
    let code = match rest {
        "Enter" => Enter,
        "Delete" => Delete,
        "Esc" | "Escape" => Esc,
        "Tab" => Tab,
        "BackTab" => BackTab,
        "Up" => Up,
        "Down" => Down,
        "Left" => Left,
        "Right" => Right,
        "PageUp" => PageUp,
        "PageDown" => PageDown,
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Char(c),
                _ => return None,
            }
        }
    };
    Some((mods, code))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(mods: KeyModifiers, code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    #[test]
    fn ctrl_k_is_search_and_plain_k_moves() {
        let km = Keymap::default();
        assert_eq!(
            km.resolve(&press(KeyModifiers::CONTROL, KeyCode::Char('k'))),
            Some(KeyAction::ToggleSearch)
        );
        assert_eq!(km.resolve(&press(KeyModifiers::NONE, KeyCode::Char('k'))), Some(KeyAction::MoveUp));
    }

    #[test]
    fn overrides_apply_and_bad_lines_are_skipped() {
        let km = Keymap::parse("ToggleSort = o\nNope = x\nQuit = Ctrl+q\nQuit = TooLong\n");
        assert_eq!(km.resolve(&press(KeyModifiers::NONE, KeyCode::Char('o'))), Some(KeyAction::ToggleSort));
        assert_eq!(km.resolve(&press(KeyModifiers::CONTROL, KeyCode::Char('q'))), Some(KeyAction::Quit));
        assert_eq!(km.resolve(&press(KeyModifiers::NONE, KeyCode::Char('x'))), None);
    }

    #[test]
    fn action_names_round_trip() {
        for (action, name) in ACTIONS {
            assert_eq!(parse_action(name), Some(action));
            assert_eq!(format_action(action), name);
        }
        assert_eq!(Keymap::default().keys_for(KeyAction::NextPage), ["PageDown", "Right", "l"]);
    }
}
