extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ActionError, ShowdownError};
use crate::hand::{Hand, HandStatus};
use crate::options::HouseRules;
use crate::result::{PlayerResult, RoundResult};
use crate::settlement::settle_hand;

use super::{DealerStep, Game, GameState};

/// The dealer's fixed policy: draw below the threshold, stand at or above.
#[must_use]
pub fn dealer_step(hand: &Hand, rules: &HouseRules) -> DealerStep {
    if hand.score() < rules.dealer_stands_on {
        DealerStep::Draw
    } else {
        DealerStep::Stand(hand.status(rules))
    }
}

/// What the dealer did on its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealerPlay {
    /// Cards drawn after the initial two.
    pub drawn: Vec<Card>,
    /// Terminal status the dealer stood with, if any.
    pub status: Option<HandStatus>,
}

impl Game {
    /// Dealer plays their hand according to the house rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<DealerPlay, ActionError> {
        if self.state != GameState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        let mut drawn = Vec::new();
        let status = loop {
            match dealer_step(&self.dealer, &self.rules) {
                DealerStep::Draw => {
                    let card = self.deck.deal()?;
                    self.dealer.add_card(card);
                    drawn.push(card);
                }
                DealerStep::Stand(status) => break status,
            }
        };

        tracing::debug!(
            drawn = drawn.len(),
            score = self.dealer.score(),
            "dealer stands"
        );
        self.state = GameState::RoundOver;

        Ok(DealerPlay { drawn, status })
    }

    /// Settles every bet against the dealer.
    ///
    /// Payouts are credited, bets are reset, and the game moves to
    /// [`GameState::Settled`].
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in round-over state.
    pub fn showdown(&mut self) -> Result<RoundResult, ShowdownError> {
        if self.state != GameState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let dealer_score = self.dealer.final_score(&self.rules);
        let mut players = Vec::with_capacity(self.players.len());

        for (seat, player) in self.players.iter_mut().enumerate() {
            let (outcome, payout) = settle_hand(player, &self.dealer, &self.rules);
            let bet = player.bet();

            if payout > 0 {
                player.settle(payout);
            }
            player.reset_bet();

            tracing::info!(
                player = player.name(),
                ?outcome,
                bet,
                payout,
                chips = player.chips(),
                "bet settled"
            );

            players.push(PlayerResult {
                seat,
                name: player.name().into(),
                outcome,
                bet,
                payout,
                player_score: player.final_score(&self.rules),
                chips: player.chips(),
            });
        }

        self.state = GameState::Settled;

        Ok(RoundResult {
            players,
            dealer_score,
            dealer_bust: self.dealer.is_bust(&self.rules),
            dealer_blackjack: self.dealer.is_blackjack(&self.rules),
        })
    }
}
