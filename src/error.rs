//! Error types for engine operations.

use thiserror::Error;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid phase for betting.
    #[error("invalid phase for betting")]
    InvalidState,
    /// Bet is below the level minimum. Carries the minimum so the caller can
    /// clamp its suggested amount.
    #[error("bet is below the level minimum of {minimum}")]
    TooLow {
        /// The minimum bet at the active level.
        minimum: u32,
    },
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// Not enough cards in the shoe to deal.
    #[error("not enough cards in the shoe")]
    EmptyShoe,
}

/// Errors that can occur during a hit or stand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid phase for this action.
    #[error("invalid phase for this action")]
    InvalidState,
    /// No cards left in the shoe. Deck sizing scales with the level, so this
    /// is unreachable in normal play.
    #[error("no cards left in the shoe")]
    EmptyShoe,
}
