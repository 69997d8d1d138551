//! Hand representation and blackjack valuation.

use crate::card::Card;

/// An ordered set of cards held by the player or the dealer.
///
/// Grows only by appending drawn cards; never shrinks within a round.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a drawn card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the blackjack value of the hand.
    ///
    /// Non-ace ranks are summed first (face cards count 10), then each ace is
    /// folded in one at a time against the running total: 11 if that keeps the
    /// total at or below 21, otherwise 1.
    ///
    /// # Example
    ///
    /// ```
    /// use bjclimb::{Card, Hand, Suit};
    ///
    /// let mut hand = Hand::new();
    /// hand.push(Card::new(Suit::Hearts, 1));
    /// hand.push(Card::new(Suit::Spades, 1));
    /// hand.push(Card::new(Suit::Clubs, 9));
    /// assert_eq!(hand.value(), 21);
    /// ```
    #[must_use]
    pub fn value(&self) -> u8 {
        let mut value: u8 = 0;
        let mut aces: u8 = 0;

        for card in &self.cards {
            match card.rank {
                1 => aces += 1,
                2..=10 => value = value.saturating_add(card.rank),
                _ => value = value.saturating_add(10),
            }
        }

        for _ in 0..aces {
            if value + 11 <= 21 {
                value += 11;
            } else {
                value = value.saturating_add(1);
            }
        }

        value
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
