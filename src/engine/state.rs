//! Round phase and per-round state.

use crate::hand::Hand;
use crate::result::Settlement;
use crate::shoe::Shoe;

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting a bet; no cards dealt.
    Betting,
    /// Cards dealt; waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer draws out their hand. Transient: `stand` runs dealer play and
    /// settlement in one transition, so callers observe `Settled`.
    DealerTurn,
    /// Round has ended; the settlement record is available.
    Settled,
}

/// All per-round mutable state.
///
/// Exactly one round exists at a time; it is reset in place on a new-round
/// request while the player profile persists.
#[derive(Debug, Clone)]
pub struct RoundState {
    /// Current phase.
    pub phase: Phase,
    /// The debited bet at stake, zero while betting.
    pub bet: u32,
    /// The player's hand.
    pub player_hand: Hand,
    /// The dealer's hand. One card after the deal; the face-down second card
    /// is a presentation concern, not engine state.
    pub dealer_hand: Hand,
    /// The shoe for this round, consumed by dealing and hits.
    pub shoe: Shoe,
    /// Settlement record, present once the phase is `Settled`.
    pub settlement: Option<Settlement>,
}

impl RoundState {
    /// A fresh round awaiting a bet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Betting,
            bet: 0,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            shoe: Shoe::default(),
            settlement: None,
        }
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}
