//! One round at the console: a human and two automated participants.
//!
//! Run with `cargo run --example table`. Set `RUST_LOG=debug` to watch the
//! engine's log output.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcrew::{ActionGateway, Card, PlayerState, Round, RoundOptions, Suit, TurnGuard};

const HUMAN: &str = "Human";
const PARTICIPANTS: [&str; 3] = [HUMAN, "AI_Strategist", "AI_Cautious"];

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = RoundOptions::default().with_seed(seed);
    let round = match Round::new(PARTICIPANTS, options) {
        Ok(round) => round,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    round.deal_initial_cards();
    let gateway = ActionGateway::new(&round);
    let guard = TurnGuard::new(&gateway);

    if let Some(card) = round.dealer_up_card() {
        println!("Dealer shows {}", format_card(card));
    }

    for name in round.participants() {
        println!("\n--- {name}'s turn ---");
        while round.is_active(name) {
            let Some(state) = round.get_state(name) else {
                break;
            };
            print_state(&state);

            let raw = if name == HUMAN {
                prompt_line("Action (hit/stand, or JSON like {\"action\": \"Hit\"}): ")
            } else {
                let choice = automated_choice(name, &state);
                println!("{name} chooses {choice}");
                format!("{{\"action\": \"{choice}\"}}")
            };

            let result = guard.submit(name, &raw);
            println!("{}", result.message);
        }
        if let Some(state) = round.get_state(name) {
            println!("{name} finishes on {} ({})", state.score, state.status);
        }
    }

    println!("\n--- Dealer's turn ---");
    match round.dealer_play() {
        Ok(log) => println!("{log}"),
        Err(err) => {
            println!("Dealer error: {err}");
            return;
        }
    }

    println!("\n--- Results ---");
    match gateway.result() {
        Ok(result) => println!("{result}"),
        Err(err) => println!("Result error: {err}"),
    }
}

/// Fixed house-style rules standing in for the automated agents.
fn automated_choice(name: &str, state: &PlayerState) -> &'static str {
    let dealer_weak = state
        .dealer_up_card
        .is_some_and(|c| (2..=6).contains(&c.value()));
    let stand_on = match name {
        "AI_Cautious" => 15,
        _ if dealer_weak => 13,
        _ => 17,
    };
    if state.score >= stand_on { "Stand" } else { "Hit" }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn print_state(state: &PlayerState) {
    let hand = state
        .hand
        .iter()
        .copied()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}: {hand} (score {})", state.name, state.score);
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
