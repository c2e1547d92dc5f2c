//! Customer TUI - Terminal User Interface for the Customers REST service
//!
//! A Ratatui-based TUI for creating, retrieving, updating, deleting and
//! searching customers and their addresses.

mod api;
mod app;
mod bridge;
mod config;
mod state;
mod ui;

use anyhow::Result;
use api::RestClient;
use app::App;
use config::{ClientConfig, LOG_FILE_NAME};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How long to wait for input before checking for completed requests
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Single log file that is appended to across runs
fn log_appender(log_dir: &Path) -> Option<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(log_dir)
        .map_err(|err| eprintln!("Logging disabled: {err}"))
        .ok()
}

/// Initialize logging. The terminal owns stdout, so events go to a
/// non-blocking file writer in the cache directory; the returned guard
/// flushes it on drop and must live until the app exits.
fn init_logging() -> Option<WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "customer_tui=info".into());

    let appender = ClientConfig::log_dir().and_then(|dir| log_appender(&dir));

    let Some(appender) = appender else {
        tracing_subscriber::registry().with(filter).init();
        return None;
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .init();
    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    let log_guard = init_logging();

    let config = ClientConfig::load_or_create()?.with_env();
    let client = RestClient::new(config.base_url(), config.api_prefix());
    tracing::info!("Using Customers service at {}", client.root());
    let service_root = client.root().to_string();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(Arc::new(client), service_root);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Exiting: {err:?}");
        eprintln!("Error: {err:?}");
        drop(log_guard);
        std::process::exit(1);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Draw the UI
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle crossterm events
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    // Global quit: Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        app.quit();
                    } else {
                        app.handle_key(key);
                    }
                }
            }
        }

        // Apply requests that completed since the last frame
        app.drain_outcomes();

        // Check if app wants to quit
        if app.should_quit() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_log_appender_writes_single_file() {
        let dir = std::env::temp_dir().join(format!("customer-tui-log-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        let mut appender = log_appender(&dir).unwrap();
        appender.write_all(b"first\n").unwrap();
        appender.write_all(b"second\n").unwrap();
        appender.flush().unwrap();

        let content = std::fs::read_to_string(dir.join(LOG_FILE_NAME)).unwrap();
        assert_eq!(content, "first\nsecond\n");
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
