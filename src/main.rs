//! Word Finder - CLI
//!
//! Word search with TUI and one-shot CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use word_finder::{
    client::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, DatamuseClient},
    commands::{FindConfig, FindOutcome, find_words},
    output::{print_search_result, results_json},
    search::SearchState,
};

#[derive(Parser)]
#[command(
    name = "word_finder",
    about = "Find words by included/excluded letters, length and pattern",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word-lookup endpoint
    #[arg(long, global = true, env = "WORD_FINDER_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "WORD_FINDER_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI form (default)
    Play,

    /// Run a single search and print the results
    Find {
        /// Letters the word must contain
        #[arg(short, long, default_value = "")]
        include: String,

        /// Letters the word must not contain
        #[arg(short = 'x', long, default_value = "")]
        exclude: String,

        /// Exact word length (1-15)
        #[arg(short, long, default_value = "")]
        length: String,

        /// Positional pattern, '?' for any letter (e.g. ??RA?)
        #[arg(short, long, default_value = "")]
        pattern: String,

        /// Print results as a JSON array
        #[arg(long)]
        json: bool,
    },
}

/// Install the tracing subscriber
///
/// Logs go to `log_file` when given, otherwise to stderr unless the TUI owns the
/// terminal, in which case logging stays off.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None if !interactive => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    let config = ClientConfig {
        endpoint: cli.endpoint,
        timeout: Duration::from_secs(cli.timeout),
    };
    let client = DatamuseClient::new(&config)?;

    match command {
        Commands::Play => run_play_command(client),
        Commands::Find {
            include,
            exclude,
            length,
            pattern,
            json,
        } => {
            let config = FindConfig {
                include,
                exclude,
                length,
                pattern,
                show_spinner: !json,
            };
            run_find_command(&config, json, &client)
        }
    }
}

fn run_find_command(config: &FindConfig, json: bool, client: &DatamuseClient) -> Result<()> {
    let FindOutcome { constraints, state } = find_words(config, client)?;

    match state {
        SearchState::Failed(err) => Err(err.into()),
        SearchState::Success(result) if json => {
            println!("{}", results_json(&result)?);
            Ok(())
        }
        state => {
            print_search_result(&constraints, &state);
            Ok(())
        }
    }
}

fn run_play_command(client: DatamuseClient) -> Result<()> {
    use word_finder::interactive::{App, run_tui};

    let app = App::new(Arc::new(client));
    run_tui(app)
}
