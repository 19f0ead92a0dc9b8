//! Word Match - CLI
//!
//! Check guesses against secrets, play interactively, and analyze how useful a
//! guess is across the dictionary.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_match::{
    commands::{PlayConfig, RankConfig, analyze_guess, check_words, rank_guesses, run_play},
    core::Matcher,
    game::GameConfig,
    output::{print_analysis_result, print_check_result, print_rank_result},
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_match",
    about = "Word-guessing game engine with multiset-aware letter matching",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play {
        /// Use this secret instead of a random dictionary word
        #[arg(short, long)]
        secret: Option<String>,

        /// Guesses allowed per game (at least 1)
        #[arg(
            short = 'm',
            long,
            default_value = "6",
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        max_guesses: u32,
    },

    /// Score one guess against a secret
    Check {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },

    /// Analyze a guess against every word in the dictionary
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Rank dictionary words as guesses
    Rank {
        /// Only score the first N dictionary words as guesses
        #[arg(short, long)]
        limit: Option<usize>,

        /// Number of words to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: &str) -> Result<WordList> {
    let dictionary = match wordlist {
        "embedded" => WordList::embedded(),
        path => load_from_file(path).with_context(|| format!("Failed to load wordlist {path}"))?,
    };
    info!(words = dictionary.len(), source = wordlist, "dictionary loaded");
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let dictionary = load_dictionary(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        secret: None,
        max_guesses: 6,
    });

    match command {
        Commands::Play {
            secret,
            max_guesses,
        } => {
            let config = PlayConfig {
                secret,
                game: GameConfig::new(usize::try_from(max_guesses)?),
            };
            run_play(&dictionary, &config, io::stdin().lock(), io::stdout().lock())?;
            Ok(())
        }
        Commands::Check { secret, guess } => {
            let matcher = Matcher::new(&dictionary);
            let check = check_words(&matcher, &secret, &guess)?;
            print_check_result(&check);
            Ok(())
        }
        Commands::Analyze { word } => {
            let summary = analyze_guess(&word, &dictionary)?;
            print_analysis_result(&summary);
            Ok(())
        }
        Commands::Rank { limit, top } => {
            let config = RankConfig {
                limit,
                top,
                show_progress: true,
            };
            let result = rank_guesses(dictionary.words(), config);
            print_rank_result(&result);
            Ok(())
        }
    }
}
