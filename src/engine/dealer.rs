//! Dealer decision policy and draw-out.

use rand::Rng;

use crate::error::ActionError;

use super::Engine;

/// Decides whether the dealer draws another card.
///
/// Below 17 the dealer always hits. On 17 or 18 the dealer hits with
/// probability `aggressiveness`, so higher levels press soft totals harder.
/// From 19 up the dealer always stands.
pub fn should_hit<R: Rng>(value: u8, aggressiveness: f64, rng: &mut R) -> bool {
    if value < 17 {
        return true;
    }
    if value <= 18 {
        return rng.random::<f64>() < aggressiveness;
    }
    false
}

impl Engine {
    /// Draws out the dealer's hand according to [`should_hit`].
    ///
    /// Aggressiveness is read once from the active level and held for the
    /// whole draw-out.
    pub(super) fn dealer_play(&mut self) -> Result<(), ActionError> {
        let aggressiveness = self.profile.level().dealer_aggressiveness;

        while should_hit(self.round.dealer_hand.value(), aggressiveness, &mut self.rng) {
            let card = self.round.shoe.draw().ok_or(ActionError::EmptyShoe)?;
            self.round.dealer_hand.push(card);
        }

        Ok(())
    }
}
