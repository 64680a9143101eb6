//! staffdir - a terminal employee directory.
//!
//! Fetches a batch of people once at startup and shows them as a searchable
//! card gallery with a detail overlay for browsing one person at a time.

mod app;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use staffdir_core::models::parse_people;
use staffdir_core::{ApiClient, Config, PeopleSource};

use app::{App, AppState};
use ui::input::{handle_input, handle_mouse};
use ui::render::render;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds)
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Log file name inside the log directory
const LOG_FILE_NAME: &str = "staffdir.log";

/// Initialize the tracing subscriber for logging.
///
/// Logs go to a file so they never draw over the terminal UI. The returned
/// guard must stay alive for buffered lines to be flushed.
fn init_tracing(config: &Config) -> Option<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let appender = match config.log_dir().and_then(|dir| {
        RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix(LOG_FILE_NAME)
            .build(dir)
            .map_err(anyhow::Error::from)
    }) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            return None;
        }
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();

    Some(guard)
}

fn load_config() -> Config {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {:#}; using default settings", e);
        Config::default()
    });
    config.with_env_overrides()
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // Check for CLI commands
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "--version" {
        println!("staffdir {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = load_config();

    if args.len() > 1 && args[1] == "--dump-json" {
        return dump_json(&config).await;
    }

    // Initialize logging
    let _guard = init_tracing(&config);
    info!(endpoint = %config.endpoint_url(), "staffdir starting");

    // Create app before touching the terminal so a bad endpoint fails cleanly
    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    app.search.init();
    app.start_load();

    // Main loop
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        warn!(error = %e, "Main loop ended with an error");
        eprintln!("Error: {}", e);
    }

    info!("staffdir shutting down");
    Ok(())
}

/// Fetch the directory once and print it to stdout as JSON
async fn dump_json(config: &Config) -> Result<()> {
    let endpoint = config.endpoint_url();
    eprintln!("Fetching {}...", endpoint);

    let client = ApiClient::new(endpoint)?;
    let body = client.fetch_body().await?;
    let people = parse_people(&body)?;

    let json = serde_json::to_string_pretty(&people)?;
    println!("{}", json);

    eprintln!("Done! {} employees exported.", people.len());
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Draw UI
        terminal.draw(|f| render(f, app))?;

        // Poll for events with timeout to allow background updates
        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            let size = terminal.size()?;
            let area = Rect::new(0, 0, size.width, size.height);

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Ctrl+C to quit
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    // Handle input
                    if handle_input(app, key, area) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => handle_mouse(app, mouse, area),
                _ => {}
            }
        }

        // Check for completed background tasks
        app.check_background_tasks();

        // Check if we should quit
        if matches!(app.state, AppState::Quitting) {
            return Ok(());
        }
    }
}
