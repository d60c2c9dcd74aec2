use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub mod events;
pub mod profile;
pub mod state;

use self::events::{AppEvent, handle_events};
use self::state::AppState;

/// Log filter when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "warn";


#[derive(Parser)]
#[command(name = "wordcraft", version, about = "English to Indonesian vocabulary lookup and flashcards")]
struct Cli {
    /// Config file, defaults to ./config.json when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Store file, overrides the configured path
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a word
    Search {
        word: String,
        /// Save the primary definition as a flashcard
        #[arg(long)]
        add: bool,
    },
    /// List saved flashcards grouped by part of speech
    Cards,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = profile::load_config(cli.config.as_deref())?;
    if let Some(store) = cli.store {
        config.store.path = store;
    }

    let mut state = AppState::new(config)?;

    let event = match cli.command {
        Command::Search { word, add } => AppEvent::Search { word, add },
        Command::Cards => AppEvent::ShowCards,
    };

    let mut stdout = std::io::stdout();
    handle_events(&mut state, event, &mut stdout).await
}
