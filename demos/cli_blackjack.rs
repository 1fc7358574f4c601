//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{BetResult, EventSink, Game, GameEvent, HandStatus, HouseRules, InputProvider};

fn main() {
    println!("Blackjack CLI example");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(HouseRules::default(), seed);
    let mut input = Terminal;
    let mut output = Console;

    if let Err(err) = game.seat_players(&mut input) {
        println!("Seating error: {err}");
        return;
    }

    loop {
        if let Err(err) = game.manage_broke_players(&mut input, &mut output) {
            println!("Seating error: {err}");
            break;
        }

        if game.player_count() == 0 {
            println!("Nobody left at the table.");
            break;
        }

        if let Err(err) = game.play_round(&mut input, &mut output) {
            println!("Round aborted: {err}");
        }

        if !input.ask_yes_no("\nWould you like to play another round?") {
            println!("Game over!");
            break;
        }

        game.clear_round();
    }
}

struct Terminal;

impl InputProvider for Terminal {
    fn ask_yes_no(&mut self, prompt: &str) -> bool {
        loop {
            match prompt_line(prompt).to_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => println!("Please answer yes or no."),
            }
        }
    }

    fn ask_number(&mut self, prompt: &str) -> i64 {
        loop {
            match prompt_line(prompt).parse::<i64>() {
                Ok(value) => return value,
                Err(_) => println!("Please enter a number."),
            }
        }
    }

    fn ask_string(&mut self, prompt: &str) -> String {
        loop {
            let line = prompt_line(prompt);
            if !line.is_empty() {
                return line;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    println!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_owned()
}

struct Console;

impl EventSink for Console {
    fn emit(&mut self, event: GameEvent) {
        match event {
            GameEvent::HandShown { name, cards, score } => {
                println!("\n{name}'s cards\n--------------------");
                println!("{}", cards.join(" "));
                println!("Score is: {score}\n");
            }
            GameEvent::Status { name, status } => match status {
                HandStatus::Blackjack => println!("{name} has Blackjack!"),
                HandStatus::TwentyOne => println!("{name} has 21!"),
                HandStatus::Bust => println!("{name} has bust!"),
            },
            GameEvent::DealerUpCard { name, card, value } => {
                println!("\n{name} is showing a {card} for a score of {value}");
                println!("{}", "-".repeat(60));
            }
            GameEvent::InvalidBet { .. } => println!("Invalid bet amount!"),
            GameEvent::ScoreComparison {
                dealer,
                dealer_score,
                name,
                score,
            } => println!("{dealer} has {dealer_score}, {name} has {score}"),
            GameEvent::BetResult {
                name,
                result,
                chips,
            } => match result {
                BetResult::Won(amount) => {
                    println!("{name} has won {amount} chips! {name} now has {chips} chips");
                }
                BetResult::Lost(amount) => {
                    println!("{name} has lost {amount} and now has {chips} remaining.");
                }
            },
            GameEvent::ChipsAdded { name, chips, .. } => println!("{name} now has {chips} chips."),
            GameEvent::PlayerRemoved { name } => println!("{name} has left the table."),
            GameEvent::PlayingWithoutChips { name } => {
                println!("{name} is continuing with no chips.");
            }
        }
    }
}
