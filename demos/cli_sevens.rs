//! CLI Sevens example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use svrs::{Card, Game, GameOptions, Player, RunState, SUIT_SIZE, Suit};

const SUIT_NAMES: [&str; 4] = ["clubs", "diamonds", "hearts", "spades"];
const RANK_NAMES: [&str; 13] = [
    "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King",
];

fn main() {
    println!("Sevens CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let game = Game::new(options, seed);

    println!("My hand:   {}", format_hand(&game, Player::Computer));
    println!("Your hand: {}", format_hand(&game, Player::Human));

    loop {
        if let Some(winner) = game.winner() {
            match winner {
                Player::Computer => println!("I win!"),
                Player::Human => println!("You win!"),
            }
            break;
        }

        match game.current_player() {
            Player::Computer => computer_turn(&game),
            Player::Human => {
                if !human_turn(&game) {
                    return;
                }
            }
        }

        game.switch_players();
    }
}

fn computer_turn(game: &Game) {
    match game.best_move() {
        Some(card) => {
            println!("I play {}.", format_card(card));
            if let Err(err) = game.apply_move(card) {
                println!("Move error: {err}");
            }
        }
        None => println!("I have no card to play."),
    }
}

/// Runs one human turn. Returns `false` if the player quit.
fn human_turn(game: &Game) -> bool {
    print_table(game);
    println!("Your hand: {}", format_hand(game, Player::Human));

    if !game.player_has_available_moves() {
        println!("You have no card to play!");
        return true;
    }

    loop {
        let Some(suit_index) = prompt_choice("suit", &SUIT_NAMES) else {
            return false;
        };
        let Some(rank) = prompt_choice("card", &RANK_NAMES) else {
            return false;
        };
        let card = Card::new(Suit::ALL[suit_index], rank as u8);

        if game.is_card_valid_to_play(card) {
            if let Err(err) = game.apply_move(card) {
                println!("Move error: {err}");
            }
            return true;
        }
        println!("You can't play that card, silly :)");
    }
}

/// Prompts for one of the listed options by number. `None` means quit.
fn prompt_choice(name: &str, choices: &[&str]) -> Option<usize> {
    println!("Pick a {name}:");
    for (i, choice) in choices.iter().enumerate() {
        println!("({}) {choice}", i + 1);
    }

    loop {
        let input = prompt_line("> ");
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(n) if (1..=choices.len()).contains(&n) => return Some(n - 1),
            _ => println!("Invalid input, please enter a valid number:"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    println!("\nTable:");
    for suit in Suit::ALL {
        let run = match game.run(suit) {
            RunState::Unopened => "(unopened)".to_string(),
            RunState::Open { low, high } => (low..=high)
                .map(|rank| format_card(Card::new(suit, rank)))
                .collect::<Vec<_>>()
                .join(" "),
        };
        println!("  {:<9} {run}", SUIT_NAMES[suit.index()]);
    }
    println!();
}

fn format_hand(game: &Game, player: Player) -> String {
    let cards = game.hand(player).cards();
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .map(|&card| format_card(card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Clubs => ("C", "32"),
        Suit::Diamonds => ("D", "31"),
        Suit::Hearts => ("H", "31"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank {
        0 => "A".to_string(),
        10 => "J".to_string(),
        11 => "Q".to_string(),
        12 => "K".to_string(),
        r if r < SUIT_SIZE => (r + 1).to_string(),
        r => r.to_string(),
    };

    format!("{rank}{}", colorize(suit, color_code))
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
