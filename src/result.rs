//! Settlement record produced when a round ends.

use crate::profile::Achievement;

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player went over 21; the dealer never played.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player's total beat the dealer's.
    PlayerWin,
    /// Dealer's total beat the player's.
    DealerWin,
    /// Equal totals; the bet was refunded.
    Push,
}

impl Outcome {
    /// Returns whether this outcome counts as a player win.
    #[must_use]
    pub const fn is_win(self) -> bool {
        matches!(self, Self::PlayerWin | Self::DealerBust)
    }
}

/// Everything that happened when a round settled.
///
/// The payout and profile mutations have already been applied by the time the
/// caller sees this; it is a read-only record for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The bet that was at stake.
    pub bet: u32,
    /// Amount credited back to the balance (2x bet on a win, 1x on a push,
    /// 0 on a loss — the bet itself was debited when placed).
    pub payout: u32,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether this win advanced the ladder.
    pub leveled_up: bool,
    /// Achievements unlocked by this settlement.
    pub unlocked: Vec<Achievement>,
}
