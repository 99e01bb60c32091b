//! Kelimele - CLI
//!
//! Terminal Wordle-style word guessing game in Turkish, with TUI and plain
//! CLI modes.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use kelimele::{
    commands::{evaluate_guess, run_simple},
    core::Word,
    output::print_evaluation_report,
    wordlists::{DICTIONARY, Dictionary, TARGETS, loader::words_from_slice},
};
use rand::prelude::IndexedRandom;
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser)]
#[command(
    name = "kelimele",
    about = "Wordle-style word guessing game in Turkish (guess the 5-letter word in 6 tries)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a word list file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Target pool: 'embedded' (default) or path to a word list file
    #[arg(short = 't', long, global = true, default_value = "embedded")]
    targets: String,

    /// Seed for target selection, for reproducible games
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Force a specific target word instead of drawing one
        #[arg(long)]
        target: Option<String>,
    },

    /// Simple CLI mode (line-based game without TUI)
    Simple {
        /// Force a specific target word instead of drawing one
        #[arg(long)]
        target: Option<String>,
    },

    /// Score a guess against a target word without playing
    Evaluate {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

/// Load a word list based on a -w/-t flag value
///
/// - "embedded": the list compiled into the binary
/// - "<path>": load custom word list from file
fn load_words(mode: &str, embedded: &[&str]) -> Result<Vec<Word>> {
    use kelimele::wordlists::loader::load_from_file;

    let words = match mode {
        "embedded" => words_from_slice(embedded),
        path => load_from_file(path)?,
    };

    if words.is_empty() {
        return Err(anyhow!("Word list '{mode}' contains no valid words"));
    }

    Ok(words)
}

/// Pick the session's target word
///
/// A forced word wins over the pool; a seed makes the draw reproducible.
fn pick_target(pool: &[Word], seed: Option<u64>, forced: Option<&str>) -> Result<Word> {
    if let Some(raw) = forced {
        return Word::new(raw).map_err(|e| anyhow!("Invalid target word: {e}"));
    }

    let word = match seed {
        Some(seed) => pool.choose(&mut StdRng::seed_from_u64(seed)),
        None => pool.choose(&mut rand::rng()),
    };

    word.cloned().ok_or_else(|| anyhow!("Target pool is empty"))
}

/// Build the guess dictionary
///
/// Targets (and a forced target) are always guessable, also under custom
/// word list files that don't repeat them.
fn build_dictionary(dictionary_words: &[Word], target_words: &[Word], target: &Word) -> Dictionary {
    let mut all = dictionary_words.to_vec();
    all.extend_from_slice(target_words);
    all.push(target.clone());
    Dictionary::new(&all)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load word lists based on -w/-t flags
    let dictionary_words = load_words(&cli.wordlist, DICTIONARY)?;
    let target_words = load_words(&cli.targets, TARGETS)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { target: None });

    match command {
        Commands::Play { target } => {
            let target = pick_target(&target_words, cli.seed, target.as_deref())?;
            let dictionary = build_dictionary(&dictionary_words, &target_words, &target);
            run_play_command(&dictionary, &target_words, target)
        }
        Commands::Simple { target } => {
            let target = pick_target(&target_words, cli.seed, target.as_deref())?;
            let dictionary = build_dictionary(&dictionary_words, &target_words, &target);
            run_simple(&dictionary, &target_words, target).map_err(|e| anyhow!(e))
        }
        Commands::Evaluate { guess, target } => {
            let report = evaluate_guess(&guess, &target).map_err(|e| anyhow!(e))?;
            print_evaluation_report(&report);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &Dictionary, target_words: &[Word], target: Word) -> Result<()> {
    use kelimele::interactive::{App, run_tui};

    let app = App::new(dictionary, target_words, target);
    run_tui(app)
}
