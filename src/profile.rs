//! Player profile, level progression, and achievements.

use core::fmt;

use crate::level::{LEVELS, Level};

/// Balance at which the "High Roller" achievement unlocks.
pub const HIGH_ROLLER_BALANCE: u32 = 2000;

/// Win streak at which the "Hot Streak" achievement unlocks.
pub const HOT_STREAK_WINS: u32 = 5;

/// Starting balance for a new profile.
pub const STARTING_BALANCE: u32 = 1000;

/// An unlockable achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Achievement {
    /// Balance reached [`HIGH_ROLLER_BALANCE`].
    HighRoller,
    /// Win streak reached [`HOT_STREAK_WINS`].
    HotStreak,
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighRoller => f.write_str("High Roller"),
            Self::HotStreak => f.write_str("Hot Streak"),
        }
    }
}

/// Per-session player state: bankroll, ladder position, streak, unlocks.
///
/// Persists across rounds; mutated only by round settlement.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerProfile {
    /// Current chip balance.
    balance: u32,
    /// Index into [`LEVELS`].
    level_index: usize,
    /// Wins accumulated toward the current level's target.
    wins_at_level: u32,
    /// Consecutive wins.
    win_streak: u32,
    /// Unlocked achievements, in unlock order. Never revoked.
    achievements: Vec<Achievement>,
}

impl PlayerProfile {
    /// Creates a fresh profile at the first level with the starting balance.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            balance: STARTING_BALANCE,
            level_index: 0,
            wins_at_level: 0,
            win_streak: 0,
            achievements: Vec::new(),
        }
    }

    /// Returns the current balance.
    #[must_use]
    pub const fn balance(&self) -> u32 {
        self.balance
    }

    /// Returns the active level.
    #[must_use]
    pub fn level(&self) -> &'static Level {
        &LEVELS[self.level_index]
    }

    /// Returns the active level index.
    #[must_use]
    pub const fn level_index(&self) -> usize {
        self.level_index
    }

    /// Returns wins accumulated toward the current level's target.
    #[must_use]
    pub const fn wins_at_level(&self) -> u32 {
        self.wins_at_level
    }

    /// Returns the current win streak.
    #[must_use]
    pub const fn win_streak(&self) -> u32 {
        self.win_streak
    }

    /// Returns the unlocked achievements, in unlock order.
    #[must_use]
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Debits `amount` from the balance.
    ///
    /// Returns `false` and leaves the balance untouched if funds are
    /// insufficient.
    pub(crate) fn debit(&mut self, amount: u32) -> bool {
        if amount > self.balance {
            return false;
        }
        self.balance -= amount;
        true
    }

    /// Credits `amount` to the balance.
    pub(crate) fn credit(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Records a won round: extends the streak and level progress, advancing
    /// the ladder when the target is reached and a next level exists.
    ///
    /// Returns `true` if a level-up happened. Level-ups are irreversible.
    pub(crate) fn record_win(&mut self) -> bool {
        self.win_streak += 1;
        self.wins_at_level += 1;

        if self.wins_at_level >= self.level().target_wins && self.level_index < LEVELS.len() - 1 {
            self.level_index += 1;
            self.wins_at_level = 0;
            return true;
        }
        false
    }

    /// Records a lost round: resets the streak and walks level progress back
    /// by one win, floored at zero.
    pub(crate) fn record_loss(&mut self) {
        self.win_streak = 0;
        self.wins_at_level = self.wins_at_level.saturating_sub(1);
    }

    /// Unlocks any achievements whose thresholds are now met.
    ///
    /// Idempotent and additive only; returns the newly unlocked set.
    pub(crate) fn unlock_achievements(&mut self) -> Vec<Achievement> {
        let mut unlocked = Vec::new();

        if self.balance >= HIGH_ROLLER_BALANCE {
            self.unlock(Achievement::HighRoller, &mut unlocked);
        }
        if self.win_streak >= HOT_STREAK_WINS {
            self.unlock(Achievement::HotStreak, &mut unlocked);
        }

        unlocked
    }

    fn unlock(&mut self, achievement: Achievement, unlocked: &mut Vec<Achievement>) {
        if !self.achievements.contains(&achievement) {
            self.achievements.push(achievement);
            unlocked.push(achievement);
        }
    }
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self::new()
    }
}
