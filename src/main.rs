mod config;
mod consts;
mod events;
mod language;
mod logging;
mod navigator;
mod ui;

use crate::config::{Config, get_config_path};
use crate::consts::ui_consts::DEFAULT_SPLASH_DELAY_MS;
use crate::language::NoopSink;
use crate::navigator::Navigator;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Splash screen dwell time in milliseconds. Overrides the config file.
    #[arg(long, value_name = "MILLIS")]
    splash_delay_ms: Option<u64>,

    /// Disable accent colors in the UI.
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // Dwell precedence: CLI flag, then config file, then the default.
    let mut splash_delay_ms = args.splash_delay_ms;
    if splash_delay_ms.is_none() {
        if let Ok(config_path) = get_config_path() {
            if config_path.exists() {
                if let Ok(config) = Config::load_from_file(&config_path) {
                    splash_delay_ms = Some(config.splash_delay_ms);
                }
            }
        }
    }
    let splash_delay_ms = splash_delay_ms.unwrap_or(DEFAULT_SPLASH_DELAY_MS);

    start(splash_delay_ms, !args.no_color).await
}

/// Starts the terminal UI with the given splash dwell.
async fn start(splash_delay_ms: u64, with_accent_color: bool) -> Result<(), Box<dyn Error>> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create the application and run it. The language choice is
    // reported to a no-op sink until a persistence layer exists.
    let ui_config = ui::UiConfig::new(splash_delay_ms, with_accent_color);
    let app = ui::App::new(Navigator::new(), Box::new(NoopSink), ui_config);
    let res = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}
