use crate::card::Card;
use crate::error::ActionError;
use crate::hand::Hand;
use crate::options::HouseRules;

use super::{Game, GameState, TurnStep};

/// Decides whether a player may still act.
///
/// A hand at 21 or above ends the turn without asking; its status is always
/// one of blackjack, twenty-one or bust.
#[must_use]
pub fn player_step(hand: &Hand, rules: &HouseRules) -> TurnStep {
    hand.status(rules)
        .map_or(TurnStep::AwaitDecision, TurnStep::Finished)
}

impl Game {
    pub(super) fn ensure_player_turn(&self, seat: usize) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }

        if seat >= self.players.len() {
            return Err(ActionError::PlayerNotFound);
        }

        if seat != self.current_turn {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    /// Returns where the given player's turn stands.
    ///
    /// # Errors
    ///
    /// Returns an error if the seat is empty.
    pub fn turn_step(&self, seat: usize) -> Result<TurnStep, ActionError> {
        let hand = self.players.get(seat).ok_or(ActionError::PlayerNotFound)?;
        Ok(player_step(hand, &self.rules))
    }

    /// Player action: Hit (draw a card).
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, it is not
    /// the player's turn, the hand already reached 21 or more, or the deck is
    /// empty.
    pub fn hit(&mut self, seat: usize) -> Result<Card, ActionError> {
        self.ensure_player_turn(seat)?;

        if let TurnStep::Finished(_) = self.turn_step(seat)? {
            return Err(ActionError::HandFinished);
        }

        let card = self.deck.deal()?;
        let hand = self
            .players
            .get_mut(seat)
            .ok_or(ActionError::PlayerNotFound)?;
        hand.add_card(card);
        tracing::debug!(
            player = hand.name(),
            card = card.label(),
            score = hand.score(),
            "hit"
        );

        Ok(card)
    }

    /// Ends the player's turn and passes it to the next seat.
    ///
    /// This closes finished hands too. After the last seat the dealer plays.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or it is not
    /// the player's turn.
    pub fn stand(&mut self, seat: usize) -> Result<(), ActionError> {
        self.ensure_player_turn(seat)?;

        self.current_turn += 1;
        if self.current_turn >= self.players.len() {
            self.state = GameState::DealerTurn;
        }

        Ok(())
    }
}
