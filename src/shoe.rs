//! The multi-deck shoe.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};

/// A shoe of shuffled cards, drawn from the end.
///
/// A fresh shoe is built for every round, sized by the active level's deck
/// count, and is owned exclusively by that round.
#[derive(Debug, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds a shoe of `decks` full 52-card decks and shuffles it.
    ///
    /// The shuffle is `SliceRandom::shuffle` (Fisher–Yates), so every
    /// permutation is equally likely for an unbiased generator.
    #[must_use]
    pub fn shuffled<R: Rng>(decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Builds a shoe that yields `draws` in order.
    ///
    /// The first card in `draws` is the first card drawn. Intended for tests
    /// and replaying recorded rounds.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card, or `None` if the shoe is exhausted.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Shoe {
    /// An empty shoe, used as the placeholder before a bet is placed.
    fn default() -> Self {
        Self { cards: Vec::new() }
    }
}
