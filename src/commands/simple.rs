//! Simple interactive CLI mode
//!
//! Line-based game loop without TUI: read a guess, print colored tiles,
//! repeat until the game ends.

use crate::core::{Word, WordError, display_upper_word};
use crate::output::formatters::{colored_guess, colored_keyboard, share_grid};
use crate::session::{
    GameSession, GameStatus, KeyboardState, MAX_ATTEMPTS, SubmitError, SubmitOutcome,
};
use crate::wordlists::Dictionary;
use colored::Colorize;
use rand::prelude::IndexedRandom;
use std::io::{self, Write};

/// Run the simple line-based game
///
/// Plays against `first_target`; replays draw fresh targets from `targets`.
///
/// # Errors
///
/// Returns an error if reading user input fails or the target pool is empty.
pub fn run_simple(
    dictionary: &Dictionary,
    targets: &[Word],
    first_target: Word,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     KELİMELE - Kelime Oyunu                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("5 harfli gizli kelimeyi {MAX_ATTEMPTS} denemede bul.");
    println!("  - Yeşil: harf doğru yerde");
    println!("  - Sarı:  harf kelimede var, yeri yanlış");
    println!("  - Gri:   harf kelimede yok\n");
    println!("Komutlar: 'çık' oyundan çıkar\n");

    let mut target = first_target;

    loop {
        if !play_round(dictionary, target)? {
            return Ok(());
        }

        match get_user_input("Tekrar oynamak ister misin? (e/h)")?
            .to_lowercase()
            .as_str()
        {
            "e" | "evet" => {
                target = targets
                    .choose(&mut rand::rng())
                    .cloned()
                    .ok_or("Hedef kelime havuzu boş")?;
                println!("\n🔄 Yeni oyun başladı!\n");
            }
            _ => {
                println!("\n👋 Görüşmek üzere!\n");
                return Ok(());
            }
        }
    }
}

/// Play a single game to completion
///
/// Returns `false` when the player quits mid-game.
fn play_round(dictionary: &Dictionary, target: Word) -> Result<bool, String> {
    let mut game = GameSession::new(dictionary, target);
    let mut keyboard = KeyboardState::new();

    while game.status() == GameStatus::InProgress {
        let attempt = MAX_ATTEMPTS - game.remaining_attempts() + 1;
        let input = get_user_input(&format!("Tahmin {attempt}/{MAX_ATTEMPTS}"))?;

        match input.to_lowercase().as_str() {
            "çık" | "çik" | "cik" | "quit" | "q" => {
                println!("\n👋 Görüşmek üzere!\n");
                return Ok(false);
            }
            _ => {}
        }

        // Reject malformed input before it reaches the session
        let word = match Word::new(&input) {
            Ok(word) => word,
            Err(WordError::InvalidLength(_)) => {
                println!("❌ {}\n", SubmitError::IncompleteGuess);
                continue;
            }
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        match game.submit_word(word) {
            Ok(outcome) => {
                let record = game.history().last().expect("accepted guess recorded");
                keyboard.absorb(&record.word, &record.evaluation);

                println!("\n  {}", colored_guess(&record.word, &record.evaluation));
                println!("  {}\n", colored_keyboard(&keyboard));

                match outcome {
                    SubmitOutcome::Won(_) => print_win(&game),
                    SubmitOutcome::Lost(_) => print_loss(&game),
                    SubmitOutcome::Continue(_) => {}
                }
            }
            Err(e) => println!("❌ {e}\n"),
        }
    }

    Ok(true)
}

fn print_win(game: &GameSession) {
    let attempts = game.history().len();

    println!("{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        format!("  🎉 Tebrikler Kazandın! {attempts} denemede bildin.")
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());
    println!("\n{}\n", share_grid(game.history()));
}

fn print_loss(game: &GameSession) {
    println!("{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        format!(
            "  😔 Kaybettin. Kelime: {}",
            display_upper_word(game.target().text())
        )
        .bright_red()
        .bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());
    println!("\n{}\n", share_grid(game.history()));
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
