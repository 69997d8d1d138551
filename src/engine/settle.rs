//! Outcome comparison, payout, and profile mutation.

use crate::result::{Outcome, Settlement};

use super::{Engine, Phase};

impl Engine {
    /// Compares the finished hands against each other and 21.
    ///
    /// Call only after dealer play; player bust is settled earlier and never
    /// reaches this comparison.
    pub(super) fn compare_hands(&self) -> Outcome {
        let dealer = self.round.dealer_hand.value();
        let player = self.round.player_hand.value();

        if dealer > 21 {
            Outcome::DealerBust
        } else if dealer > player {
            Outcome::DealerWin
        } else if dealer < player {
            Outcome::PlayerWin
        } else {
            Outcome::Push
        }
    }

    /// Settles the round: applies the payout, updates streak and level
    /// progress, checks achievements, and records the settlement.
    ///
    /// A win credits twice the bet (stake plus even-money winnings) and
    /// advances level progress. A loss forfeits the already-debited bet,
    /// resets the streak, and walks level progress back by one. A push
    /// refunds the stake and leaves streak and progress alone.
    pub(super) fn settle(&mut self, outcome: Outcome) {
        let bet = self.round.bet;

        let (payout, leveled_up) = match outcome {
            Outcome::PlayerWin | Outcome::DealerBust => {
                let winnings = bet.saturating_mul(2);
                self.profile.credit(winnings);
                (winnings, self.profile.record_win())
            }
            Outcome::DealerWin | Outcome::PlayerBust => {
                self.profile.record_loss();
                (0, false)
            }
            Outcome::Push => {
                self.profile.credit(bet);
                (bet, false)
            }
        };

        let unlocked = self.profile.unlock_achievements();

        self.round.settlement = Some(Settlement {
            outcome,
            bet,
            payout,
            player_value: self.round.player_hand.value(),
            dealer_value: self.round.dealer_hand.value(),
            leveled_up,
            unlocked,
        });
        self.round.phase = Phase::Settled;
    }
}
