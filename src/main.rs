//! Catwalk - a terminal user interface for the CatWiki breeds API.
//!
//! This application provides a fast, keyboard-driven interface for browsing
//! and searching cat breeds, with account sign-in for the profile page.

mod app;
mod auth;
mod api;
mod config;
mod models;
mod ui;
mod utils;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::{App, AppState, Route};
use auth::{CredentialStore, SessionStore};
use config::Config;
use models::LoginRequest;
use ui::input::handle_input;
use ui::render::render;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds)
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Log file name, written under the data directory
const LOG_FILE: &str = "catwalk.log";

/// Initialize the tracing subscriber for logging.
///
/// Logs go to a file under the data directory, not the terminal the UI
/// draws on. The returned guard must stay alive for the writer to flush.
fn init_tracing() -> Result<WorkerGuard> {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let log_dir = Config::data_dir().unwrap_or_else(|_| PathBuf::from("."));
    std::fs::create_dir_all(&log_dir)?;
    let appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    // Check for CLI commands
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 && args[1] == "--login" {
        return login_cli().await;
    }
    if args.len() > 1 && args[1] == "--logout" {
        return logout_cli();
    }
    if args.len() > 1 && args[1] == "--whoami" {
        return whoami_cli();
    }

    // Initialize logging
    let _guard = init_tracing()?;
    info!("Catwalk starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and load the first page of breeds
    let mut app = App::new().await?;
    app.navigate(Route::Home);

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
        eprintln!("Error: {}", e);
    }

    info!("Catwalk shutting down");
    Ok(())
}

/// Sign in from the terminal without starting the UI
async fn login_cli() -> Result<()> {
    let mut config = Config::load().unwrap_or_default();

    println!("Sign in to {}", config.resolved_api_url());

    // Email, defaulting to the last one used
    let remembered = config
        .last_email
        .as_deref()
        .map(|e| format!(" [{}]", e))
        .unwrap_or_default();
    print!("Email{}: ", remembered);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    let typed = input.trim();
    let email = if typed.is_empty() {
        config.last_email.clone().unwrap_or_default()
    } else {
        typed.to_string()
    };
    if email.is_empty() {
        return Err(anyhow::anyhow!("No email given"));
    }

    // Offer the password saved in the OS keychain
    let password = if CredentialStore::has_credentials(&email) {
        print!("Use the saved password? [Y/n]: ");
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if answer.trim().eq_ignore_ascii_case("n") {
            rpassword::prompt_password("Password: ")?
        } else {
            CredentialStore::get_password(&email)?
        }
    } else {
        rpassword::prompt_password("Password: ")?
    };

    let api_client = api::ApiClient::new(&config.resolved_api_url())?;
    let response = api_client
        .login(&LoginRequest {
            email: email.clone(),
            password: password.clone(),
        })
        .await?;
    let (token, user) = response
        .into_session_parts()
        .ok_or_else(|| anyhow::anyhow!("Invalid email or password"))?;

    let data_dir = Config::data_dir().unwrap_or_else(|_| PathBuf::from("."));
    let session = SessionStore::new(data_dir);
    session.save(&token, &user)?;

    if let Err(e) = CredentialStore::store(&email, &password) {
        eprintln!("Warning: could not save the password to the keychain: {}", e);
    }

    config.last_email = Some(email);
    if let Err(e) = config.save() {
        eprintln!("Warning: could not save config: {}", e);
    }

    println!("Signed in as {} <{}>", user.name, user.email);
    Ok(())
}

/// Clear the saved session without starting the UI
fn logout_cli() -> Result<()> {
    let data_dir = Config::data_dir().unwrap_or_else(|_| PathBuf::from("."));
    let session = SessionStore::new(data_dir);

    let had_session = session.is_authenticated();
    session.clear()?;

    if had_session {
        println!("Signed out.");
    } else {
        println!("No active session.");
    }
    Ok(())
}

/// Print the signed-in account without starting the UI
fn whoami_cli() -> Result<()> {
    let data_dir = Config::data_dir().unwrap_or_else(|_| PathBuf::from("."));
    let session = SessionStore::new(data_dir);

    if !session.is_authenticated() {
        println!("Not signed in.");
        return Ok(());
    }
    match session.current_user() {
        Some(user) => println!("{} <{}>", user.name, user.email),
        None => println!("Signed in, but the stored account is unreadable."),
    }
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
            if let Event::Key(key) = event::read()? {
                // Ctrl+C to quit
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                // Handle input
                if handle_input(app, key).await? {
                    return Ok(());
                }
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
