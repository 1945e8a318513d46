//! Article History - revision log viewer for wiki articles
//!
//! Binary entry point for the TUI application.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use article_history::api::ArticleClient;
use article_history::app::App;
use article_history::config::Config;
use article_history::logging;

/// Event poll timeout; also the tick interval for fetch polling and the spinner
const TICK: Duration = Duration::from_millis(100);

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Config::parse();
    config.validate()?;
    logging::init(config.log_file.as_deref(), &config.log_level)?;

    let client = ArticleClient::new(&config.api_url, config.timeout())?;
    tracing::info!(page_id = %config.page_id, api_url = %config.api_url, "starting");

    let terminal = ratatui::init();
    let result = run(terminal, &config, client);
    ratatui::restore();
    result
}

/// Run the application's main loop.
fn run(
    mut terminal: DefaultTerminal,
    config: &Config,
    client: ArticleClient,
) -> color_eyre::Result<()> {
    let mut app = App::new(
        config.page_id.clone(),
        Arc::new(client),
        config.app_options(),
    );

    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events, then run the periodic tick.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(TICK)? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    }
    app.tick();
    Ok(())
}
