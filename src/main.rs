//! Pokédex - browse species, forms, stats and evolution chains from PokéAPI
//!
//! A terminal UI application over the paginated species catalog, with a
//! `--dump` mode that prints one assembled record as JSON.

use std::fs::File;
use std::io;
use std::panic;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pokedex::app::{App, AppState};
use pokedex::cache::CacheManager;
use pokedex::cli::{Cli, StartupConfig, StartupMode};
use pokedex::data::CatalogClient;
use pokedex::{ui, Aggregator, DexStore, FetchOutcome};

const LOG_FILE_NAME: &str = "pokedex.log";

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Logs to stderr, quiet unless RUST_LOG says otherwise
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Logs to a file in the cache directory, since the TUI owns the terminal
fn init_file_logging() {
    let Some(cache) = CacheManager::new() else {
        return;
    };
    if std::fs::create_dir_all(cache.dir()).is_err() {
        return;
    }
    let Ok(file) = File::create(cache.dir().join(LOG_FILE_NAME)) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

/// Fetches one record and prints it as pretty JSON
async fn dump_record(config: &StartupConfig, species: &str) -> Result<(), Box<dyn std::error::Error>> {
    let aggregator = Aggregator::new(
        CatalogClient::configured(&config.dex, config.use_cache),
        &config.dex,
    );
    let mut store = DexStore::new();

    match aggregator.fetch_full_record(&mut store, species).await {
        FetchOutcome::Found(record) => {
            println!("{}", serde_json::to_string_pretty(&record)?);
            Ok(())
        }
        FetchOutcome::NotFound => {
            eprintln!("Error: no species called '{}'", species);
            std::process::exit(1);
        }
        FetchOutcome::Failed(e) => {
            eprintln!("Error: could not load '{}': {}", species, e);
            std::process::exit(1);
        }
    }
}

/// Renders the UI based on the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    match &app.state {
        AppState::Loading => {
            render_loading(frame, "Loading species...");
        }
        AppState::CatalogList => {
            ui::render_catalog_list(frame, app);
        }
        AppState::RecordDetail => {
            ui::render_record_detail(frame, app);
        }
    }

    if app.show_help {
        ui::render_help_overlay(frame);
    }
}

/// Renders a loading message while data is being fetched
fn render_loading(frame: &mut ratatui::Frame, message: &str) {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::{Color, Style},
        widgets::Paragraph,
    };

    let area = frame.area();

    // Center the loading message vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse CLI arguments before terminal setup so errors print normally
    let cli = Cli::parse();
    let startup_config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let StartupMode::Dump(species) = &startup_config.mode {
        init_stderr_logging();
        return dump_record(&startup_config, species).await;
    }

    init_file_logging();
    info!(api = %startup_config.dex.api_base_url, cache = startup_config.use_cache, "starting");

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&startup_config);

    // Initial render to show loading state
    terminal.draw(|f| render_ui(f, &app))?;

    // Trigger initial data load
    app.load_initial().await;

    // Main event loop
    loop {
        // Render UI
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if let Some(action) = app.take_pending() {
            terminal.draw(|f| render_loading(f, "Loading..."))?;
            app.run_action(action).await;
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
