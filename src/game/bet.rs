use crate::error::{BetError, DealError};

use super::{Game, GameState};

/// Cards each participant starts a round with.
const STARTING_CARDS: usize = 2;

impl Game {
    /// Places a bet for the player in `seat`.
    ///
    /// Bets accumulate until the deal, so a player may raise by betting
    /// again.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, the seat is
    /// empty, the amount is negative, or the player lacks chips.
    pub fn bet(&mut self, seat: usize, amount: i64) -> Result<(), BetError> {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        let player = self.players.get_mut(seat).ok_or(BetError::PlayerNotFound)?;
        if let Err(err) = player.place_bet(amount) {
            tracing::warn!(
                player = player.name(),
                amount,
                chips = player.chips(),
                "bet rejected"
            );
            return Err(err);
        }

        tracing::debug!(player = player.name(), amount, total = player.bet(), "bet placed");
        Ok(())
    }

    /// Deals two cards to every player in seat order, then two to the
    /// dealer, and hands the turn to the first seat.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state, nobody is
    /// seated, or the deck runs out.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Betting {
            return Err(DealError::InvalidState);
        }

        if self.players.is_empty() {
            return Err(DealError::NoPlayers);
        }

        self.dealer.clear_cards();
        for player in &mut self.players {
            player.clear_cards();
            for _ in 0..STARTING_CARDS {
                player.add_card(self.deck.deal()?);
            }
            tracing::debug!(player = player.name(), score = player.score(), "dealt");
        }

        for _ in 0..STARTING_CARDS {
            self.dealer.add_card(self.deck.deal()?);
        }

        self.current_turn = 0;
        self.state = GameState::PlayerTurn;

        Ok(())
    }
}
