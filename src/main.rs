//! artable - a terminal table for the Art Institute of Chicago collection
//!
//! Browse artworks page by page, select rows across pages, and bulk-select
//! the first N artworks of the collection.

use std::io::{self, Stdout};
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{error, info};

use artable::{
    api::ArticClient,
    app::App,
    cli::{Cli, Command, ConfigCommand},
    config::Config,
    events::EventHandler,
    logging,
    selection::{parse_bulk_count, SelectionController},
    tasks::{create_task_channel, ApiMessage},
};

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so buffered log lines are flushed
    let _log_guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: failed to initialize logging: {:#}", e);
            None
        }
    };

    let result = run(cli).await;
    if let Err(e) = &result {
        error!(error = %e, "Exiting with error");
    }
    logging::shutdown();
    result
}

async fn run(cli: Cli) -> Result<()> {
    let Cli {
        config,
        url,
        page_size,
        command,
    } = cli;

    let config_path = match config {
        Some(path) => path,
        None => Config::path().context("Failed to determine config file location")?,
    };

    match command.unwrap_or(Command::Tui) {
        Command::Config {
            action: ConfigCommand::Path,
        } => {
            println!("{}", config_path.display());
            Ok(())
        }
        Command::Config {
            action: ConfigCommand::Init { force },
        } => init_config(&config_path, force),
        Command::Tui => run_tui(load_config(&config_path, url, page_size)?).await,
        Command::Page { index } => {
            print_page(&load_config(&config_path, url, page_size)?, index).await
        }
        Command::Select { count } => {
            print_selection(&load_config(&config_path, url, page_size)?, &count).await
        }
    }
}

fn load_config(path: &Path, url: Option<String>, page_size: Option<u32>) -> Result<Config> {
    Config::load_from(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?
        .with_overrides(url, page_size)
        .context("Invalid command line override")
}

fn init_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    Config::default()
        .save_to(path)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

async fn print_page(config: &Config, index: u32) -> Result<()> {
    let client = ArticClient::new(&config.source).context("Failed to create API client")?;
    let mut controller = SelectionController::new(config.source.page_size);
    controller
        .load_page(&client, index)
        .await
        .with_context(|| format!("Failed to load page {}", index))?;

    let snapshot = controller.snapshot();
    println!(
        "Page {} of {} ({} artworks)",
        snapshot.page_index + 1,
        snapshot.page_count,
        snapshot.total_records
    );
    for artwork in &snapshot.records {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            artwork.id,
            artwork.title(),
            artwork.artist(),
            artwork.date_start_display(),
            artwork.date_end_display()
        );
    }
    Ok(())
}

async fn print_selection(config: &Config, count: &str) -> Result<()> {
    let n = parse_bulk_count(count)?;
    let client = ArticClient::new(&config.source).context("Failed to create API client")?;
    let mut controller = SelectionController::new(config.source.page_size);

    // The first page supplies the total the count is checked against
    controller
        .load_page(&client, 0)
        .await
        .context("Failed to load the first page")?;

    let selected = controller.bulk_select(&client, n).await?;
    info!(selected, "Headless bulk select finished");

    for id in controller.selection().snapshot() {
        println!("{}", id);
    }
    eprintln!("Selected {} artworks", selected);
    Ok(())
}

async fn run_tui(config: Config) -> Result<()> {
    let client = ArticClient::new(&config.source).context("Failed to create API client")?;
    let (mut rx, tasks) = create_task_channel(Arc::new(client));
    let mut app = App::new(&config, tasks);
    let events = EventHandler::with_tick_rate(config.settings.tick_rate_ms);

    install_panic_hook();
    let mut terminal = setup_terminal().context("Failed to set up terminal")?;

    app.start();
    let result = event_loop(&mut terminal, &mut app, &events, &mut rx);

    restore_terminal(&mut terminal).context("Failed to restore terminal")?;
    result
}

fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    events: &EventHandler,
    rx: &mut UnboundedReceiver<ApiMessage>,
) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.view(frame))?;

        let event = events.next()?;
        app.update(event);

        while let Ok(message) = rx.try_recv() {
            app.handle_api_message(message);
        }
    }
    Ok(())
}

fn setup_terminal() -> io::Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

/// Leave raw mode before the default hook prints the panic message.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));
}
