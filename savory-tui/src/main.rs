use std::io;

use anyhow::Context;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use dotenv::dotenv;
use ratatui::prelude::*;
use savory_tui::logger::{self, LOG_RETENTION_DAYS};
use savory_tui::{run, App, Config};

fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, config, logging)
    dotenv().ok();
    let config = Config::from_env();
    logger::init(&config).context("initialize logging")?;

    match logger::cleanup_old_logs(&config.log_dir, LOG_RETENTION_DAYS) {
        Ok(removed) if removed > 0 => tracing::info!(removed, "removed aged log files"),
        Ok(_) => {}
        Err(e) => tracing::warn!("log cleanup failed: {e}"),
    }

    // 2. Floor plan
    let catalog = config.load_catalog().context("load table catalog")?;
    tracing::info!(
        tables = catalog.len(),
        available = catalog.available().count(),
        "Savory Haven reservations starting"
    );

    // 3. Terminal
    enable_raw_mode().context("enable raw mode")?;
    execute!(io::stdout(), EnterAlternateScreen).context("enter alternate screen")?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    // 4. Wizard loop
    let mut app = App::new(catalog);
    let result = run(&mut terminal, &mut app);

    // Restore the terminal before reporting any loop error
    disable_raw_mode().context("disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;

    result.context("event loop")?;
    tracing::info!("Savory Haven reservations exiting");
    Ok(())
}
