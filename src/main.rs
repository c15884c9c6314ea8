//! coinlens — terminal dashboard for a simulated crypto investment portfolio.
//!
//! Talks to the portfolio backend over REST (or runs against built-in
//! fixtures) and renders portfolio overview, holdings, AI analysis reports
//! with an audit workflow, and a market news feed.

mod api;
mod app;
mod components;
mod config;
mod dashboard;
mod fixtures;
mod holdings;
mod keyboard;
mod news;
mod reports;
mod theme;
#[cfg(test)]
mod tests;

use std::fs::File;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use crate::api::{ApiClient, PortfolioService};
use crate::app::App;
use crate::config::Config;
use crate::fixtures::FixtureService;
use crate::keyboard::Keymap;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing(&config)?;
    tracing::info!(api_base = %config.api_base, fixtures = config.use_fixtures, "starting");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;

    let service: Arc<dyn PortfolioService> = if config.use_fixtures {
        Arc::new(FixtureService::new())
    } else {
        Arc::new(ApiClient::new(config.api_base.clone()))
    };

    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut app = App::new(service, runtime.handle().clone(), tx, config.reviewer);
    let keymap = Keymap::default_bindings();

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    app.load_dashboard();
    let result = run_loop(&mut terminal, &mut app, &keymap, &mut rx);

    // Restore the terminal even when the loop errored.
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    keymap: &Keymap,
    rx: &mut tokio::sync::mpsc::UnboundedReceiver<app::AppEvent>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| app::render(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(action) = keymap.resolve(&key) {
                        app.handle_action(action);
                    }
                }
            }
        }

        // Drain results posted by worker tasks since the last frame.
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let file = File::create(&config.log_path)
        .with_context(|| format!("failed to open log file {}", config.log_path))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
