use folio::app::{App, AppMessage};
use folio::cli::{parse_args, run_cli_command, CliCommand, TuiOptions};
use folio::config::FolioConfig;
use folio::portfolio::{Portfolio, PortfolioDeps};
use folio::terminal::{setup_panic_hook, TerminalManager};
use folio::{logging, ui};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Housekeeping interval; the like acknowledgment is checked on each tick.
const TICK: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    let mut config = FolioConfig::load().wrap_err("failed to load configuration")?;

    if let Some(result) = run_cli_command(&command, &config) {
        return result;
    }
    let options = match command {
        CliCommand::RunTui(options) => options,
        _ => TuiOptions::default(),
    };
    if let Some(owner) = options.owner {
        config = config.with_github_owner(owner);
    }

    if let Some(path) = logging::default_log_path() {
        logging::init(&path, options.verbose);
    }
    tracing::info!("Starting folio {} for {}", folio::cli::VERSION, config.github_owner);

    let deps = PortfolioDeps::from_config(&config).wrap_err("failed to build HTTP client")?;
    let mut portfolio = Portfolio::new(&config, deps);
    portfolio.initialize();
    let mut app = App::new(portfolio, &config);

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let mut term = TerminalManager::new()?;
    let result = runtime.block_on(run_app(term.terminal(), &mut app));
    term.restore();

    if let Err(ref e) = result {
        tracing::error!("Exiting with error: {}", e);
    }
    result
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();
    let mut ticker = tokio::time::interval(TICK);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick(Instant::now());
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }

            Some(message) = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(message);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
