//! A single-player blackjack engine with betting, progressive difficulty
//! levels, and achievement tracking.
//!
//! The crate provides an [`Engine`] that owns all game state — the player
//! profile, the current round, and a seeded random source — and exposes a
//! small intent API (`place_bet`, `hit`, `stand`, `new_round`) plus a
//! read-only [`Snapshot`] for rendering. The presentation layer never mutates
//! engine state directly.
//!
//! # Example
//!
//! ```
//! use bjclimb::{Engine, Phase};
//!
//! let mut engine = Engine::new(42);
//! let round = engine.place_bet(50).unwrap();
//! assert_eq!(round.phase, Phase::PlayerTurn);
//! assert_eq!(round.player_hand.len(), 2);
//! assert_eq!(engine.snapshot().balance, 950);
//! ```

pub mod card;
pub mod engine;
pub mod error;
pub mod hand;
pub mod level;
pub mod profile;
pub mod result;
pub mod shoe;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use engine::{Engine, Phase, RoundState, Snapshot};
pub use error::{ActionError, BetError};
pub use hand::Hand;
pub use level::{LEVELS, Level};
pub use profile::{Achievement, PlayerProfile};
pub use result::{Outcome, Settlement};
pub use shoe::Shoe;
