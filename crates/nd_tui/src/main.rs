mod app;
mod ui;
mod worker;

use std::io;
use std::sync::Arc;

use clap::Parser;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use futures_util::StreamExt;
use nd_core::{ArticleAnalyzer, Result};
use nd_extract::Pipeline;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use worker::WorkerEvent;

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize a news article and score its sentiment", long_about = None)]
struct Cli {
    /// Article URL to prefill in the entry field
    url: Option<String>,
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let analyzer: Arc<dyn ArticleAnalyzer> = Arc::new(Pipeline::new()?);
    let app = match cli.url {
        Some(url) => App::with_input(url),
        None => App::new(),
    };

    info!("🚀 News summarizer started");
    run(app, analyzer).await
}

async fn run(mut app: App, analyzer: Arc<dyn ArticleAnalyzer>) -> Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // The channel is the only path from the worker back to this loop, and
    // this loop is the only place display state mutates.
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut events = EventStream::new();

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        handle_key(&mut app, key, &analyzer, &tx);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
            Some(WorkerEvent::Finished(outcome)) = rx.recv() => {
                app.finish(outcome);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(
    app: &mut App,
    key: KeyEvent,
    analyzer: &Arc<dyn ArticleAnalyzer>,
    tx: &UnboundedSender<WorkerEvent>,
) {
    // A validation notice is modal: the next key only dismisses it.
    if app.notice.is_some() {
        app.dismiss_notice();
        return;
    }

    match key.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Enter => {
            if let Some(url) = app.submit() {
                worker::dispatch(analyzer.clone(), url, tx.clone());
            }
        }
        KeyCode::Char(c) => app.input.push(c),
        KeyCode::Backspace => {
            app.input.pop();
        }
        _ => {}
    }
}
