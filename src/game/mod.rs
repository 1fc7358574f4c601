//! Game engine and state management.

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::BetError;
use crate::hand::Hand;
use crate::options::HouseRules;

mod actions;
mod bet;
mod dealer;
mod roster;
mod round;
pub mod state;

pub use actions::player_step;
pub use dealer::{DealerPlay, dealer_step};
pub use state::{DealerStep, GameState, TurnEnd, TurnStep};

/// A blackjack table: one dealer, the seated players, and the current round.
///
/// Rounds move through [`GameState`]: bets are taken, two cards are dealt to
/// every player and then to the dealer, players take their turns strictly in
/// seat order, the dealer draws to its threshold, and the showdown settles
/// every bet. [`Game::play_round`] drives one full round against an
/// [`InputProvider`](crate::InputProvider).
#[derive(Debug, Clone)]
pub struct Game {
    /// Deck for the current round. Replaced by [`Game::start_betting`].
    pub deck: Deck,
    /// House rules.
    pub rules: HouseRules,
    /// Current game state.
    state: GameState,
    /// Seated players, in turn order.
    players: Vec<Hand>,
    /// Dealer's hand.
    dealer: Hand,
    /// Seat whose turn it is during [`GameState::PlayerTurn`].
    current_turn: usize,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{Game, GameState, HouseRules};
    ///
    /// let game = Game::new(HouseRules::default(), 42);
    /// assert_eq!(game.state(), GameState::WaitingForPlayers);
    /// ```
    #[must_use]
    pub fn new(rules: HouseRules, seed: u64) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(seed);
        // Each round shuffles its own deck in `start_betting`.
        let deck = Deck::from_draw_order(&[]);
        let dealer = Hand::new(rules.dealer_name.clone(), 0);

        Self {
            deck,
            rules,
            state: GameState::WaitingForPlayers,
            players: Vec::new(),
            dealer,
            current_turn: 0,
            rng,
        }
    }

    /// Returns the current game state.
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the seated players in turn order.
    pub fn players(&self) -> &[Hand] {
        &self.players
    }

    /// Returns the player in the given seat.
    pub fn player(&self, seat: usize) -> Option<&Hand> {
        self.players.get(seat)
    }

    /// Returns the number of seated players.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Returns the dealer's hand.
    pub const fn dealer(&self) -> &Hand {
        &self.dealer
    }

    /// Returns the number of cards left in the round's deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the seat whose turn it is.
    ///
    /// Returns `None` outside of [`GameState::PlayerTurn`].
    pub fn current_player(&self) -> Option<usize> {
        (self.state == GameState::PlayerTurn && self.current_turn < self.players.len())
            .then_some(self.current_turn)
    }

    /// Starts a round: builds a freshly shuffled deck and opens betting.
    ///
    /// # Errors
    ///
    /// Returns an error unless the table is between rounds.
    pub fn start_betting(&mut self) -> Result<(), BetError> {
        if !self.between_rounds() {
            return Err(BetError::InvalidState);
        }

        if self.state == GameState::Settled {
            self.clear_round();
        }

        self.deck = Deck::shuffled(&mut self.rng);
        self.state = GameState::Betting;
        tracing::info!(players = self.players.len(), "round started");
        Ok(())
    }

    /// Clears all hands and returns the table to `WaitingForPlayers`.
    ///
    /// Stakes still on the table (a round abandoned before showdown) go back
    /// to their owners.
    pub fn clear_round(&mut self) {
        for player in &mut self.players {
            player.add_chips(player.bet());
            player.reset_bet();
            player.clear_cards();
        }
        self.dealer.clear_cards();
        self.current_turn = 0;
        self.state = GameState::WaitingForPlayers;
    }

    const fn between_rounds(&self) -> bool {
        matches!(self.state, GameState::WaitingForPlayers | GameState::Settled)
    }
}
