//! Bet placement and the initial deal.

use crate::error::BetError;
use crate::shoe::Shoe;

use super::{Engine, Phase, RoundState};

impl Engine {
    /// Places a bet, builds a fresh shoe for the active level, and deals.
    ///
    /// On success the balance is debited, the player holds two cards, the
    /// dealer holds one, and the round is in [`Phase::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the betting phase, the amount
    /// is below the level minimum (the error carries the minimum so the
    /// caller can clamp its suggestion), or the amount exceeds the balance.
    /// The engine is left unchanged on any rejection.
    pub fn place_bet(&mut self, amount: u32) -> Result<&RoundState, BetError> {
        let decks = self.profile.level().decks;
        let shoe = Shoe::shuffled(decks, &mut self.rng);
        self.place_bet_with_shoe(amount, shoe)
    }

    /// Places a bet and deals from a caller-supplied shoe.
    ///
    /// Bypasses the shuffle; the shoe determines every draw for the round.
    /// Useful for deterministic tests and for replaying recorded rounds.
    ///
    /// # Errors
    ///
    /// Same contract as [`Engine::place_bet`], plus [`BetError::EmptyShoe`]
    /// if the supplied shoe cannot cover the initial deal.
    pub fn place_bet_with_shoe(
        &mut self,
        amount: u32,
        mut shoe: Shoe,
    ) -> Result<&RoundState, BetError> {
        if self.round.phase != Phase::Betting {
            return Err(BetError::InvalidState);
        }

        let minimum = self.profile.level().min_bet;
        if amount < minimum {
            return Err(BetError::TooLow { minimum });
        }

        // Two player cards plus the dealer upcard.
        if shoe.remaining() < 3 {
            return Err(BetError::EmptyShoe);
        }

        if !self.profile.debit(amount) {
            return Err(BetError::InsufficientFunds);
        }

        self.round.bet = amount;

        for _ in 0..2 {
            if let Some(card) = shoe.draw() {
                self.round.player_hand.push(card);
            }
        }
        if let Some(card) = shoe.draw() {
            self.round.dealer_hand.push(card);
        }

        self.round.shoe = shoe;
        self.round.phase = Phase::PlayerTurn;

        Ok(&self.round)
    }
}
