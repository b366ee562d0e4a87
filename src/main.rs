//! recipebox - Terminal Recipe Browser
//!
//! Loads a recipe collection from a JSON document and lets you narrow it
//! down by search text, vegetarian/meat, category, carbohydrate source,
//! country, number of days, quick preparation and group-friendliness.
//!
//! Run without arguments for the TUI, or with a command (`list`, `show`,
//! `facets`, `copy`, `migrate`) for one-shot CLI output.

use crate::app::App;
use crate::config::Config;
use crate::models::RecipeStore;
use color_eyre::{Result, eyre::eyre};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use std::io;
use std::time::Duration;
use tracing::info;

mod app;
mod cli;
mod clipboard;
mod config;
mod error;
mod filter;
mod handlers;
mod logging;
mod models;
mod ui;

/// Application entry point and initialization
/// Resolves configuration, loads the recipe collection once, then hands
/// over to either the CLI or the TUI event loop.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (source_flag, args) = cli::take_source_flag(&args).map_err(|e| eyre!("{e:#}"))?;

    let mut config = Config::load().map_err(|e| eyre!("{e:#}"))?;
    if let Some(source) = source_flag {
        config.source = source;
    }
    logging::init(&config);

    if !args.is_empty() {
        return cli::execute_cli(&args, &config)
            .await
            .map_err(|e| eyre!("{e}"));
    }

    let source = config.recipe_source();
    let loaded = RecipeStore::load(&source).await;
    run_tui(App::new(loaded, &source))?;

    Ok(())
}

/// Runs the terminal UI until the user quits, restoring the terminal afterwards.
fn run_tui(mut app: App) -> Result<()> {
    info!(source = %app.source, "Starting TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, app))?;
            app.needs_redraw = false;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handlers::keys::handle_key_events(key, app) {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => app.needs_redraw = true,
                _ => {}
            }
        }
    }
}
