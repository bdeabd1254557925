//! Advertising Timeline - terminal slideshow of advertising history.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Timeline content or navigation rules (see `adtimeline_core`).
//! - Configuration parsing (see `adtimeline_config`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > config file > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.

use std::sync::Arc;

use adtimeline_config::constants::{DEFAULT_CHANNEL_CAPACITY, LOG_FILE_NAME};
use adtimeline_core::catalog::advertising_history;
use adtimeline_tui::action::Action;
use adtimeline_tui::app::App;
use adtimeline_tui::cli::Cli;
use adtimeline_tui::runtime::{config::load_config, terminal::TerminalGuard};
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{Sender, channel, error::TrySendError};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&cli.log_dir)
        .with_context(|| format!("Failed to create log directory {}", cli.log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, LOG_FILE_NAME);
    // _guard must live for the entire main() so logs are flushed
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let config = load_config(&cli)?;
    let timeline = Arc::new(advertising_history().context("Built-in timeline is invalid")?);
    tracing::info!(entries = timeline.len(), "Timeline loaded");

    let mut app = App::new(timeline, &config);

    let mut terminal_guard =
        TerminalGuard::enter(config.mouse).context("Failed to set up terminal")?;
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    let tracker = TaskTracker::new();
    let shutdown = CancellationToken::new();
    tracker.spawn(forward_input(tx, shutdown.clone()));
    tracker.close();

    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|f| app.render(f)) {
            break Err(e.into());
        }

        tokio::select! {
            action = rx.recv() => {
                let Some(action) = action else {
                    tracing::warn!("Input stream ended");
                    break Ok(());
                };
                let action = match action {
                    Action::Input(key) => app.handle_input(key),
                    Action::Mouse(mouse) => app.handle_mouse(mouse),
                    other => Some(other),
                };
                let Some(action) = action else { continue };
                if action == Action::Quit {
                    tracing::info!("Quit requested");
                    break Ok(());
                }
                app.update(action);
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received interrupt signal");
                break Ok(());
            }
        }
    };

    shutdown.cancel();
    drop(rx);
    tracker.wait().await;

    terminal_guard.restore().context("Failed to restore terminal")?;
    terminal.show_cursor()?;

    result
}

/// Forward terminal events to the action channel until cancelled.
async fn forward_input(tx: Sender<Action>, shutdown: CancellationToken) {
    let mut reader = EventStream::new();
    loop {
        let event = tokio::select! {
            _ = shutdown.cancelled() => break,
            event = reader.next() => event,
        };
        let event = match event {
            Some(Ok(event)) => event,
            Some(Err(e)) => {
                tracing::error!(error = %e, "Terminal event stream failed");
                break;
            }
            None => break,
        };

        let action = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Action::Input(key),
            Event::Mouse(mouse) => Action::Mouse(mouse),
            Event::Resize(width, height) => Action::Resize(width, height),
            _ => continue,
        };

        // Keys and resizes wait for room; mouse floods are dropped.
        if action.is_critical() {
            if tx.send(action).await.is_err() {
                break;
            }
        } else {
            match tx.try_send(action) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    tracing::debug!("Input channel full, dropping mouse event");
                }
                Err(TrySendError::Closed(_)) => break,
            }
        }
    }
}
