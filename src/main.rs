//! Terminal memory-matching game.

use std::io::{self, BufRead, IsTerminal};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Instant;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use memory_match::core::{DEFAULT_COLUMNS, DEFAULT_FLIP_BACK_DELAY_MS};
use memory_match::terminal::{App, Control, HELP};
use memory_match::{GameConfig, MemoryGame};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Find every pair of cards in as few moves as possible", long_about = None)]
struct Args {
    /// Number of pairs on the board (defaults to every symbol)
    #[clap(short, long)]
    pairs: Option<usize>,

    /// Board width
    #[clap(short, long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,

    /// How long a mismatched pair stays face up, in milliseconds
    #[clap(short, long, default_value_t = DEFAULT_FLIP_BACK_DELAY_MS)]
    delay_ms: u64,

    /// Seed for reproducible decks
    #[clap(short, long)]
    seed: Option<u64>,

    /// Comma-separated card faces to use instead of the default animals
    #[clap(long, value_delimiter = ',')]
    symbols: Option<Vec<String>>,

    /// Disable colored output
    #[clap(long, action = clap::ArgAction::SetTrue)]
    no_color: bool,
}

impl Args {
    fn to_config(&self) -> memory_match::error::Result<GameConfig> {
        let mut builder = GameConfig::builder()
            .columns(self.columns)
            .flip_back_delay_ms(self.delay_ms);

        if let Some(symbols) = &self.symbols {
            builder = builder.symbols(symbols.iter().map(|s| s.trim().to_string()));
        }
        if let Some(pairs) = self.pairs {
            builder = builder.pair_count(pairs);
        }
        if let Some(seed) = self.seed {
            builder = builder.seed(seed);
        }

        builder.build()
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Forward stdin lines to the game thread.
fn spawn_input_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = args.to_config()?;
    let game = MemoryGame::new(config);
    tracing::info!(seed = game.seed(), "game started");

    let styled = !args.no_color && io::stdout().is_terminal();
    let mut app = App::new(game, styled);
    let mut out = io::stdout();

    println!("{HELP}");
    app.draw(&mut out)?;

    let input = spawn_input_reader();
    loop {
        let line = match app.deadline() {
            Some(due) => match input.recv_timeout(due.saturating_duration_since(Instant::now())) {
                Ok(line) => line,
                Err(RecvTimeoutError::Timeout) => {
                    app.fire_due(Instant::now(), &mut out)?;
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            },
            None => match input.recv() {
                Ok(line) => line,
                Err(_) => break,
            },
        };

        // A flip that came due while the player was typing resolves first.
        app.fire_due(Instant::now(), &mut out)?;

        if app.handle_line(&line, Instant::now(), &mut out)? == Control::Quit {
            break;
        }
    }

    Ok(())
}
