//! Player and dealer hands.
//!
//! A [`Hand`] is the long-lived state of one participant: the cards held this
//! round, the chip balance and the stake. Scoring is always derived from the
//! cards currently held, so clearing the cards also clears bust and
//! blackjack.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::BetError;
use crate::options::HouseRules;

/// Terminal status of a hand.
///
/// A hand that is still in progress has no status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Two cards totaling 21.
    Blackjack,
    /// 21 with more than two cards.
    TwentyOne,
    /// Over 21.
    Bust,
}

/// Sums card values, saturating at `u8::MAX`.
pub(crate) fn score_cards(cards: &[Card]) -> u8 {
    cards
        .iter()
        .fold(0u8, |total, card| total.saturating_add(card.value()))
}

/// A participant's hand, chips and bet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    name: String,
    /// Cards in draw order.
    cards: Vec<Card>,
    chips: usize,
    bet: usize,
}

impl Hand {
    /// Creates an empty hand with the given chip balance.
    #[must_use]
    pub fn new(name: impl Into<String>, chips: usize) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
            chips,
            bet: 0,
        }
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the first card dealt, the only one the dealer shows early.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes all cards for the next round.
    pub fn clear_cards(&mut self) {
        self.cards.clear();
    }

    /// Sums the values of the held cards.
    #[must_use]
    pub fn score(&self) -> u8 {
        score_cards(&self.cards)
    }

    /// Returns whether the hand went over the limit.
    #[must_use]
    pub fn is_bust(&self, rules: &HouseRules) -> bool {
        self.score() > rules.blackjack
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self, rules: &HouseRules) -> bool {
        self.cards.len() == 2 && self.score() == rules.blackjack
    }

    /// Classifies the hand, or `None` while it is still in progress.
    #[must_use]
    pub fn status(&self, rules: &HouseRules) -> Option<HandStatus> {
        let score = self.score();
        if self.is_blackjack(rules) {
            Some(HandStatus::Blackjack)
        } else if score == rules.blackjack {
            Some(HandStatus::TwentyOne)
        } else if score > rules.blackjack {
            Some(HandStatus::Bust)
        } else {
            None
        }
    }

    /// Returns the score as reported at the end of the round.
    ///
    /// A bust hand reports 0.
    #[must_use]
    pub fn final_score(&self, rules: &HouseRules) -> u8 {
        if self.is_bust(rules) { 0 } else { self.score() }
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns the stake for this round.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Moves `amount` chips from the balance onto the bet.
    ///
    /// Repeated calls within one betting phase raise the stake. Zero is a
    /// valid bet.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::NegativeAmount`] or [`BetError::InsufficientChips`];
    /// chips and bet are left untouched.
    pub fn place_bet(&mut self, amount: i64) -> Result<(), BetError> {
        if amount < 0 {
            return Err(BetError::NegativeAmount);
        }
        let amount = usize::try_from(amount).map_err(|_| BetError::InsufficientChips)?;
        if amount > self.chips {
            return Err(BetError::InsufficientChips);
        }

        self.chips -= amount;
        self.bet += amount;
        Ok(())
    }

    /// Credits a payout to the balance, saturating at `usize::MAX`.
    pub const fn settle(&mut self, payout: usize) {
        self.chips = self.chips.saturating_add(payout);
    }

    /// Zeroes the bet after settlement.
    pub const fn reset_bet(&mut self) {
        self.bet = 0;
    }

    /// Adds chips to the balance.
    pub const fn add_chips(&mut self, amount: usize) {
        self.settle(amount);
    }
}
