//! CLI cribbage analyst example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use cribrs::{Analysis, Analyst, AnalystOptions, Card, KeyBus, KeyCode, KeyEvent, Suit};

fn main() {
    env_logger::init();
    println!("Cribbage analyst CLI example (type 'help' for commands, 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let analyst = Arc::new(Analyst::new(AnalystOptions::default(), seed));

    let bus = KeyBus::new();
    let mut keyboard = analyst.attach_keyboard(&bus);

    loop {
        let line = prompt_line("> ");
        let (command, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));

        match command {
            "" => continue,
            "q" | "quit" => break,
            "help" => {
                print_help();
                continue;
            }
            "t" | "text" => {
                analyst.set_text(rest);
            }
            "k" | "keys" => {
                for event in key_events(rest) {
                    if !bus.dispatch(event) {
                        println!("Ignored key: {event:?}");
                    }
                }
            }
            "rm" | "remove" => match rest.trim().parse::<Card>() {
                Ok(card) => {
                    if !analyst.remove_card(&card) {
                        println!("{card} is not in the hand.");
                    }
                }
                Err(err) => println!("Card error: {err}"),
            },
            "d" | "deal" => {
                if let Err(err) = analyst.deal() {
                    println!("Deal error: {err}");
                }
            }
            "c" | "clear" => analyst.clear(),
            _ => {
                println!("Unknown command.");
                continue;
            }
        }

        print_hand(&analyst);
    }

    keyboard.release();
    println!("Goodbye.");
}

fn print_help() {
    println!("  text <spec>   replace the hand from free text, e.g. 'text AC 5d th'");
    println!("  keys <keys>   type keys one by one; 'esc' and 'del' are editing keys");
    println!("  rm <card>     remove one card, e.g. 'rm A♣' or 'rm 5'");
    println!("  deal          deal a random hand");
    println!("  clear         empty the hand");
}

fn key_events(input: &str) -> Vec<KeyEvent> {
    let mut events = Vec::new();
    for word in input.split_whitespace() {
        match word {
            "esc" => events.push(KeyEvent::Down(KeyCode::Escape)),
            "del" => events.push(KeyEvent::Down(KeyCode::Delete)),
            "bs" => events.push(KeyEvent::Down(KeyCode::Backspace)),
            _ => events.extend(word.chars().map(KeyEvent::Press)),
        }
    }
    events
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        // EOF
        return "q".to_string();
    }
    input.trim().to_string()
}

fn print_hand(analyst: &Analyst) {
    let hand = analyst.hand();
    println!("\nHand: {}", format_cards(hand.cards()));

    match analyst.analysis() {
        Analysis::NotEnoughCards { have, need } => {
            println!("Enter at least {need} cards to analyze ({have} so far).");
        }
        Analysis::Partitions(partitions) => {
            for partition in &partitions {
                println!(
                    "  keep {} | discard {} | score {:?}",
                    format_cards(&partition.keep),
                    format_cards(&partition.discard),
                    partition.score
                );
            }
            println!("{} ways to keep four.", partitions.len());
        }
    }
    println!();
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Some(Suit::Hearts | Suit::Diamonds) => "31",
        Some(Suit::Clubs | Suit::Spades) => "37",
        None => "33",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
