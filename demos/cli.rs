//! CLI front end for the blackjack engine.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjclimb::{BetError, Card, Engine, Hand, Outcome, Phase};

fn main() {
    println!("bjclimb CLI (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut engine = Engine::new(seed);

    print_tips(&engine);

    loop {
        let snapshot = engine.snapshot();
        let min_bet = snapshot.level.min_bet;

        if snapshot.balance < min_bet {
            println!("Balance {} is below the table minimum. Game over.", snapshot.balance);
            break;
        }

        println!(
            "\nLevel {} ({}/{} wins) | balance {} | streak {}",
            snapshot.level.name,
            snapshot.wins_at_level,
            snapshot.level.target_wins,
            snapshot.balance,
            snapshot.win_streak,
        );

        let Some(bet) = prompt_number(&format!(
            "Bet amount (min {min_bet}, max {}, 0 to quit): ",
            snapshot.balance
        )) else {
            break;
        };

        if bet == 0 {
            println!("Goodbye.");
            break;
        }

        match engine.place_bet(bet) {
            Ok(_) => {}
            Err(BetError::TooLow { minimum }) => {
                println!("Minimum bet at this level is {minimum}.");
                continue;
            }
            Err(err) => {
                println!("Bet error: {err}");
                continue;
            }
        }

        while engine.round().phase == Phase::PlayerTurn {
            print_table(&engine);

            let result = match prompt_line("Hit or stand? (h/s): ").as_str() {
                "h" | "hit" => engine.hit(),
                "s" | "stand" => engine.stand(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        print_table(&engine);

        let leveled_up = report_settlement(&engine);
        engine.new_round();

        if leveled_up {
            print_tips(&engine);
        }
    }
}

fn report_settlement(engine: &Engine) -> bool {
    let Some(settlement) = engine.round().settlement.as_ref() else {
        return false;
    };

    match settlement.outcome {
        Outcome::PlayerBust => println!("Bust! You lose!"),
        Outcome::DealerBust => println!("Dealer busts! You win!"),
        Outcome::PlayerWin => println!("You win!"),
        Outcome::DealerWin => println!("Dealer wins!"),
        Outcome::Push => println!("Push! Bet returned."),
    }

    for achievement in &settlement.unlocked {
        println!("Achievement unlocked: {achievement}!");
    }

    if settlement.leveled_up {
        let level = engine.snapshot().level;
        println!(
            "Level up! Welcome to {}: {} decks, min bet {}, smarter dealer.",
            level.name, level.decks, level.min_bet,
        );
    }

    settlement.leveled_up
}

fn print_tips(engine: &Engine) {
    let level = engine.snapshot().level;
    println!("Tips for {}:", level.name);
    for tip in level.tips {
        println!("  - {tip}");
    }
}

fn print_table(engine: &Engine) {
    let round = engine.round();

    let dealer_value = if round.phase == Phase::Settled {
        round.dealer_hand.value().to_string()
    } else {
        "?".to_string()
    };
    println!("Dealer: {} ({dealer_value})", format_hand(&round.dealer_hand));
    println!(
        "You:    {} ({})",
        format_hand(&round.player_hand),
        round.player_hand.value()
    );
}

fn format_hand(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    format!("{}{}", card.label(), card.suit.symbol())
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_lowercase()
}

fn prompt_number(prompt: &str) -> Option<u32> {
    loop {
        let line = prompt_line(prompt);
        if line == "q" || line == "quit" {
            return None;
        }
        match line.parse() {
            Ok(value) => return Some(value),
            Err(_) => println!("Enter a number."),
        }
    }
}
