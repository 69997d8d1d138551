//! The game engine: round orchestration and the presentation boundary.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::level::Level;
use crate::profile::{Achievement, PlayerProfile};

mod actions;
mod bet;
pub mod dealer;
mod settle;
pub mod state;

pub use state::{Phase, RoundState};

/// The blackjack engine.
///
/// Owns all game state exclusively: the player profile, the current round,
/// and the random source. The presentation layer reads [`Snapshot`]s and
/// submits intents (`place_bet`, `hit`, `stand`, `new_round`); each intent is
/// a single atomic transition that completes fully, including any level-up or
/// achievement side effects, before returning.
pub struct Engine {
    /// Session-persistent player state.
    profile: PlayerProfile,
    /// The one active round.
    round: RoundState,
    /// Random source for shuffling and the dealer's stochastic hits. Seeded
    /// at construction so tests can fix outcomes.
    rng: ChaCha8Rng,
}

/// Read-only projection of engine state for rendering.
///
/// The presentation layer may only read this and submit intents; it never
/// mutates engine fields directly.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Current chip balance.
    pub balance: u32,
    /// The active level.
    pub level: &'static Level,
    /// Index of the active level.
    pub level_index: usize,
    /// Wins accumulated toward the level target.
    pub wins_at_level: u32,
    /// Consecutive wins.
    pub win_streak: u32,
    /// Unlocked achievements, in unlock order.
    pub achievements: &'a [Achievement],
    /// The current round.
    pub round: &'a RoundState,
}

impl Engine {
    /// Creates an engine with a fresh profile and the given RNG seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjclimb::Engine;
    ///
    /// let engine = Engine::new(42);
    /// assert_eq!(engine.snapshot().balance, 1000);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_profile(PlayerProfile::new(), seed)
    }

    /// Creates an engine over an existing profile.
    #[must_use]
    pub fn with_profile(profile: PlayerProfile, seed: u64) -> Self {
        Self {
            profile,
            round: RoundState::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns a read-only projection of the full game state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            balance: self.profile.balance(),
            level: self.profile.level(),
            level_index: self.profile.level_index(),
            wins_at_level: self.profile.wins_at_level(),
            win_streak: self.profile.win_streak(),
            achievements: self.profile.achievements(),
            round: &self.round,
        }
    }

    /// Returns the player profile.
    #[must_use]
    pub const fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    /// Returns the current round.
    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    /// Discards the current round and returns to the betting phase.
    ///
    /// Accepted in any phase. A bet already debited for an unfinished round
    /// is forfeited; profile state persists.
    pub fn new_round(&mut self) -> &RoundState {
        self.round = RoundState::new();
        &self.round
    }
}
