//! The static difficulty ladder.

/// A difficulty level descriptor.
///
/// Levels are compiled-in configuration: more decks, higher minimum bets, and
/// a more aggressive dealer as the index grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    /// Display name.
    pub name: &'static str,
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Minimum bet accepted at this level.
    pub min_bet: u32,
    /// Probability in `[0, 1]` that the dealer hits on a total of 17 or 18.
    pub dealer_aggressiveness: f64,
    /// Wins required at this level before advancing to the next.
    pub target_wins: u32,
    /// Strategy tips shown by the presentation layer.
    pub tips: &'static [&'static str],
}

/// The difficulty ladder, easiest first.
pub static LEVELS: [Level; 5] = [
    Level {
        name: "Rookie",
        decks: 1,
        min_bet: 10,
        dealer_aggressiveness: 0.0,
        target_wins: 3,
        tips: &[
            "Start with small bets to learn the game",
            "Always hit on 11 or below",
            "Stand on 17 and above",
        ],
    },
    Level {
        name: "Amateur",
        decks: 2,
        min_bet: 25,
        dealer_aggressiveness: 0.2,
        target_wins: 4,
        tips: &[
            "Consider doubling your bet after wins",
            "Watch the dealer's upcard",
            "Stand on hard 16 against dealer's 6 or lower",
        ],
    },
    Level {
        name: "Pro",
        decks: 4,
        min_bet: 50,
        dealer_aggressiveness: 0.4,
        target_wins: 5,
        tips: &[
            "Multiple decks make card counting harder",
            "Dealer gets more aggressive",
            "Manage your bankroll carefully",
        ],
    },
    Level {
        name: "Expert",
        decks: 6,
        min_bet: 100,
        dealer_aggressiveness: 0.6,
        target_wins: 6,
        tips: &[
            "Watch out for dealer's aggressive play",
            "Higher minimum bets require strategy",
            "Consider surrender on hard 16 vs 10",
        ],
    },
    Level {
        name: "Master",
        decks: 8,
        min_bet: 200,
        dealer_aggressiveness: 0.8,
        target_wins: 7,
        tips: &[
            "Maximum difficulty achieved",
            "Dealer plays optimally",
            "Risk management is crucial",
        ],
    },
];
