//! Colour theme: built-in presets plus a `theme.conf` override file.

use std::path::Path;

use ratatui::style::Color;
use tracing::warn;

/// Colour palette for the admin shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub surface: Color,
    pub header_fg: Color,
    pub status_bg: Color,
    pub status_fg: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub danger: Color,
}

const KEYS: [&str; 11] = [
    "text",
    "muted",
    "accent",
    "border",
    "surface",
    "header_fg",
    "status_bg",
    "status_fg",
    "highlight_fg",
    "highlight_bg",
    "danger",
];

impl Theme {
    /// Dark neutral palette with a blue accent (default).
    pub fn neutral() -> Self {
        Self {
            text: Color::Rgb(0xe5, 0xe5, 0xe5),         // neutral-200
            muted: Color::Rgb(0x73, 0x73, 0x73),        // neutral-500
            accent: Color::Rgb(0x3b, 0x82, 0xf6),       // blue-500
            border: Color::Rgb(0x26, 0x26, 0x26),       // neutral-800
            surface: Color::Rgb(0x0a, 0x0a, 0x0a),      // neutral-950
            header_fg: Color::Rgb(0xff, 0xff, 0xff),
            status_bg: Color::Rgb(0x17, 0x17, 0x17),    // neutral-900
            status_fg: Color::Rgb(0xa3, 0xa3, 0xa3),    // neutral-400
            highlight_fg: Color::Rgb(0xff, 0xff, 0xff),
            highlight_bg: Color::Rgb(0x26, 0x26, 0x26),
            danger: Color::Rgb(0xef, 0x44, 0x44),       // red-500
        }
    }

    /// Named ANSI colours only, for terminals without truecolor.
    pub fn mono() -> Self {
        Self {
            text: Color::Gray,
            muted: Color::DarkGray,
            accent: Color::Blue,
            border: Color::DarkGray,
            surface: Color::Reset,
            header_fg: Color::White,
            status_bg: Color::DarkGray,
            status_fg: Color::Black,
            highlight_fg: Color::Black,
            highlight_bg: Color::Gray,
            danger: Color::Red,
        }
    }

    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "neutral" | "dark" => Some(Self::neutral()),
            "mono" | "ansi" => Some(Self::mono()),
            _ => None,
        }
    }

    fn slot(&mut self, key: &str) -> Option<&mut Color> {
        Some(match key {
            "text" => &mut self.text,
            "muted" => &mut self.muted,
            "accent" => &mut self.accent,
            "border" => &mut self.border,
            "surface" => &mut self.surface,
            "header_fg" => &mut self.header_fg,
            "status_bg" => &mut self.status_bg,
            "status_fg" => &mut self.status_fg,
            "highlight_fg" => &mut self.highlight_fg,
            "highlight_bg" => &mut self.highlight_bg,
            "danger" => &mut self.danger,
            _ => return None,
        })
    }

    fn get(&self, key: &str) -> Option<Color> {
        let mut copy = *self;
        copy.slot(key).map(|c| *c)
    }

    /// Parse `key = value` lines. `preset = <name>` picks the base palette;
    /// individual colour keys then override it. Unknown keys are skipped.
    pub fn parse(contents: &str) -> Self {
        let mut theme = Self::neutral();
        for raw in contents.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else {
                continue;
            };
            let (key, val) = (key.trim(), val.trim());
            if key == "preset" {
                match Self::preset(val) {
                    Some(p) => theme = p,
                    None => warn!(preset = val, "unknown theme preset"),
                }
                continue;
            }
            match (theme.slot(key), parse_color(val)) {
                (Some(slot), Some(color)) => *slot = color,
                (Some(_), None) => warn!(key, value = val, "unparseable theme colour"),
                (None, _) => {}
            }
        }
        theme
    }

    pub fn from_file(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        Some(Self::parse(&contents))
    }

    pub fn write_file(&self, path: &Path) -> std::io::Result<()> {
        use std::fmt::Write as _;
        let mut buf = String::new();
        buf.push_str("# library-admin theme\n");
        buf.push_str("# preset = neutral|mono, then per-colour overrides as #RRGGBB, a colour name or 'reset'\n\n");
        for key in KEYS {
            if let Some(c) = self.get(key) {
                let _ = writeln!(&mut buf, "{key} = {}", color_to_str(c));
            }
        }
        std::fs::write(path, buf)
    }

    /// Read `path`, or write the default theme there when it does not exist.
    pub fn load_or_init(path: &Path) -> Self {
        if path.exists() {
            return Self::from_file(path).unwrap_or_else(Self::neutral);
        }
        let t = Self::neutral();
        if let Err(e) = t.write_file(path) {
            warn!(path = %path.display(), error = %e, "could not write default theme");
        }
        t
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::neutral()
    }
}

/// `#RRGGBB`, `RRGGBB`, `reset`, or one of the sixteen ANSI colour names.
pub fn parse_color(s: &str) -> Option<Color> {
    let lower = s.trim().to_ascii_lowercase();
    let named = match lower.as_str() {
        "reset" => Some(Color::Reset),
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "white" => Some(Color::White),
        _ => None,
    };
    if named.is_some() {
        return named;
    }
    let hex = lower.strip_prefix('#').unwrap_or(&lower);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

fn color_to_str(c: Color) -> String {
    match c {
        Color::Rgb(r, g, b) => format!("#{r:02X}{g:02X}{b:02X}"),
        Color::Reset => "reset".into(),
        Color::Black => "black".into(),
        Color::Red => "red".into(),
        Color::Green => "green".into(),
        Color::Yellow => "yellow".into(),
        Color::Blue => "blue".into(),
        Color::Magenta => "magenta".into(),
        Color::Cyan => "cyan".into(),
        Color::Gray => "gray".into(),
        Color::DarkGray => "darkgray".into(),
        Color::White => "white".into(),
        // light variants and indexed colours have no stable name here
        _ => "reset".into(),
    }
}
