//! library-admin binary entry point.
//!
//! Parses the command line, loads config, initializes the terminal in raw
//! mode, runs the TUI event loop and restores the terminal state on exit.
//!
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use library_admin::app::{self, AppState, ConfigDir, Settings};

#[derive(Parser, Debug)]
#[command(name = "library-admin", version, about = "Library admin panel in the terminal")]
struct Cli {
    /// Rows per page on the authors table (overrides settings.conf)
    #[arg(long, env = "LIBRARY_ADMIN_PAGE_SIZE", value_parser = clap::value_parser!(u16).range(1..))]
    page_size: Option<u16>,

    /// Route to open at startup, e.g. `/` or `/admin/authors`
    #[arg(long)]
    route: Option<String>,

    /// Directory holding settings.conf, theme.conf and keybinds.conf
    #[arg(long, env = "LIBRARY_ADMIN_CONFIG_DIR")]
    config_dir: Option<PathBuf>,

    /// Write logs to this file; nothing is logged without it
    #[arg(long, env = "LIBRARY_ADMIN_LOG")]
    log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Install a file-backed subscriber. The terminal belongs to the TUI, so
/// nothing is written to stdout or stderr.
fn init_logging(cli: &Cli) -> Result<()> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Program entry point: run the TUI and report any top-level error to stderr.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let config_dir = ConfigDir::resolve(cli.config_dir.clone());
    info!(dir = %config_dir.path().display(), "using config directory");

    let mut state = AppState::load(&config_dir).context("build authors view")?;
    if let Some(n) = cli.page_size {
        state.authors.set_page_size(usize::from(n));
    }
    if let Some(route) = &cli.route {
        state.navigate(route);
    }

    let mut terminal = init_terminal().context("init terminal")?;

    let res = app::run(&mut terminal, &mut state);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(e) = Settings::save_from_app(&state, &config_dir.file("settings.conf")) {
        warn!(error = %e, "could not save settings");
    }

    if let Err(err) = res {
        eprintln!("application error: {err}");
    }
    Ok(())
}
