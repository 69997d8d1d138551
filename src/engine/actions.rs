//! Player intents during their turn.

use crate::error::ActionError;
use crate::result::Outcome;

use super::{Engine, Phase, RoundState};

impl Engine {
    /// Player action: hit (draw one card).
    ///
    /// If the drawn card takes the player over 21 the round settles
    /// immediately as [`Outcome::PlayerBust`] without dealer play.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player-turn phase, or if
    /// the shoe is exhausted (defensive; deck sizing makes this unreachable).
    pub fn hit(&mut self) -> Result<&RoundState, ActionError> {
        if self.round.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        let card = self.round.shoe.draw().ok_or(ActionError::EmptyShoe)?;
        self.round.player_hand.push(card);

        if self.round.player_hand.is_bust() {
            self.settle(Outcome::PlayerBust);
        }

        Ok(&self.round)
    }

    /// Player action: stand.
    ///
    /// Runs dealer play and settlement as one atomic transition; the returned
    /// round is in [`Phase::Settled`] with the settlement record populated.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in the player-turn phase, or if
    /// the shoe runs out while the dealer must draw (defensive; deck sizing
    /// makes this unreachable).
    pub fn stand(&mut self) -> Result<&RoundState, ActionError> {
        if self.round.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        self.round.phase = Phase::DealerTurn;
        self.dealer_play()?;

        let outcome = self.compare_hands();
        self.settle(outcome);

        Ok(&self.round)
    }
}
