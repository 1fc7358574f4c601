//! The round-scoped deck.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;

/// A single 52-card deck.
///
/// Cards are dealt from the end of the sequence and never put back. A fresh
/// deck is built for every round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a deck shuffled with an OS-seeded generator.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn new() -> Self {
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        let mut rng = ChaCha8Rng::from_os_rng();
        Self::shuffled(&mut rng)
    }

    /// Creates a deck shuffled with the given random number generator.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::with_shuffle(|cards| cards.shuffle(rng))
    }

    /// Creates a deck and lets `shuffle` permute it.
    ///
    /// The closure receives all 52 cards in rank-major order (four Aces,
    /// four Kings, ...). The last card of the slice is dealt first.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Deck, Rank};
    ///
    /// let mut deck = Deck::with_shuffle(|cards| cards.reverse());
    /// assert_eq!(deck.deal().unwrap().rank, Rank::Ace);
    /// ```
    pub fn with_shuffle<F>(shuffle: F) -> Self
    where
        F: FnOnce(&mut [Card]),
    {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        shuffle(&mut cards);
        Self { cards }
    }

    /// Creates a stacked deck that deals exactly `draws`, first to last.
    ///
    /// Useful for tests and demos. The deck is not checked against the
    /// standard 52-card composition.
    #[must_use]
    pub fn from_draw_order(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] when no cards are left.
    pub fn deal(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Returns the cards still in the deck. The last one is dealt next.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(feature = "std")]
impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
