//! Hebrew Wordle for kids - CLI
//!
//! Four-letter Hebrew Wordle with a TUI (default) and a plain text mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hebrew_wordle::{
    commands::{list_categories, run_simple, stats_report},
    config::{Config, WordSource},
    core::DEFAULT_CATEGORY,
    game::Session,
    interactive::{App, run_tui},
    output::{print_categories, print_stats_report},
    storage::{AppPaths, FileStore},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "hebrew_wordle",
    about = "Four-letter Hebrew Wordle for kids, with word categories and saved stats",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON word list: {"category": ["word", ...]} (default: bundled lists)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Directory for saved stats and the log file (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Category to start in
    #[arg(short, long, global = true, default_value = DEFAULT_CATEGORY)]
    category: String,

    /// Check the guess as soon as the row is full, without Enter
    #[arg(long, global = true)]
    auto_submit: bool,

    /// Keep playing when the word list is broken or missing categories
    #[arg(long, global = true)]
    lenient: bool,

    /// Log debug details to the log file
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text mode (one guess per line, no TUI)
    Simple,

    /// Show saved wins and losses
    Stats,

    /// List categories and how many words each has
    Categories,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            words: self
                .words
                .clone()
                .map_or(WordSource::Embedded, WordSource::File),
            paths: self
                .data_dir
                .clone()
                .map_or_else(AppPaths::from_platform, AppPaths::new),
            category: self.category.clone(),
            auto_submit: self.auto_submit,
            lenient: self.lenient,
            log_level: if self.verbose {
                Level::DEBUG
            } else {
                Level::INFO
            },
        }
    }
}

/// Send logs to a file in the data directory so they never draw over the TUI
fn init_logging(config: &Config) -> Result<()> {
    let data_dir = config.paths.data_dir();
    fs::create_dir_all(data_dir)
        .with_context(|| format!("cannot create data directory {}", data_dir.display()))?;

    let log_path = config.paths.log_file();
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("cannot open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_max_level(config.log_level)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    init_logging(&config)?;

    let command = cli.command.unwrap_or(Commands::Play);
    let store = FileStore::open(config.paths.data_dir()).context("cannot open stats store")?;

    match command {
        Commands::Stats => {
            print_stats_report(&stats_report(store));
            Ok(())
        }
        Commands::Categories => {
            let words = config.load_words().context("cannot load word lists")?;
            print_categories(&list_categories(&words));
            Ok(())
        }
        Commands::Play => {
            let session = start_session(&config, store)?;
            run_tui(App::new(session, config.auto_submit))
        }
        Commands::Simple => {
            let mut session = start_session(&config, store)?;
            run_simple(&mut session, io::stdin().lock(), io::stdout().lock())
        }
    }
}

fn start_session(config: &Config, store: FileStore) -> Result<Session<FileStore>> {
    let words = config.load_words().context("cannot load word lists")?;
    let mut session = Session::new(words, store, StdRng::from_os_rng());

    // An unavailable start category is shown in the UI, not fatal
    if let Err(err) = session.reset_game(&config.category) {
        tracing::warn!("{err}");
    }
    Ok(session)
}
