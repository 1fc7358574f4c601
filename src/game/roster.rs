extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec;

use crate::error::SeatError;
use crate::events::{EventSink, GameEvent};
use crate::hand::Hand;
use crate::input::InputProvider;

use super::Game;

impl Game {
    /// Seats a new player with the starting chips.
    ///
    /// Returns the seat index.
    ///
    /// # Errors
    ///
    /// Returns an error during a round or when every seat is taken.
    pub fn join(&mut self, name: impl Into<String>) -> Result<usize, SeatError> {
        if !self.between_rounds() {
            return Err(SeatError::InvalidState);
        }

        if self.players.len() >= self.rules.max_players {
            return Err(SeatError::TableFull);
        }

        let hand = Hand::new(name, self.rules.starting_chips);
        tracing::info!(player = hand.name(), chips = hand.chips(), "player joined");
        self.players.push(hand);
        Ok(self.players.len() - 1)
    }

    /// Removes the player in `seat`; later seats move up by one.
    ///
    /// # Errors
    ///
    /// Returns an error during a round or if the seat is empty.
    pub fn leave(&mut self, seat: usize) -> Result<Hand, SeatError> {
        if !self.between_rounds() {
            return Err(SeatError::InvalidState);
        }

        if seat >= self.players.len() {
            return Err(SeatError::PlayerNotFound);
        }

        Ok(self.players.remove(seat))
    }

    /// Adds chips to a player's balance and returns the new balance.
    ///
    /// # Errors
    ///
    /// Returns an error during a round or if the seat is empty.
    pub fn add_chips(&mut self, seat: usize, amount: usize) -> Result<usize, SeatError> {
        if !self.between_rounds() {
            return Err(SeatError::InvalidState);
        }

        let player = self
            .players
            .get_mut(seat)
            .ok_or(SeatError::PlayerNotFound)?;
        player.add_chips(amount);
        Ok(player.chips())
    }

    /// Asks how many people are playing and seats each of them by name.
    ///
    /// The count is asked again until it fits the free seats. Returns the
    /// number of players seated.
    ///
    /// # Errors
    ///
    /// Returns an error during a round or when the table is already full.
    pub fn seat_players<I>(&mut self, input: &mut I) -> Result<usize, SeatError>
    where
        I: InputProvider + ?Sized,
    {
        if !self.between_rounds() {
            return Err(SeatError::InvalidState);
        }

        let free = self.rules.max_players.saturating_sub(self.players.len());
        if free == 0 {
            return Err(SeatError::TableFull);
        }

        let count = loop {
            let answer = input.ask_number("How many players?");
            match usize::try_from(answer) {
                Ok(count) if (1..=free).contains(&count) => break count,
                _ => tracing::warn!(answer, free, "player count rejected"),
            }
        };

        for number in 1..=count {
            let name = input.ask_string(&format!("What is the name of player {number}?"));
            self.join(name)?;
        }

        Ok(count)
    }

    /// Offers every player without chips a top-up, or else a way out.
    ///
    /// Players who choose to leave are removed after everyone has been
    /// asked, so seat order is stable during the pass.
    ///
    /// # Errors
    ///
    /// Returns an error during a round.
    pub fn manage_broke_players<I, S>(&mut self, input: &mut I, sink: &mut S) -> Result<(), SeatError>
    where
        I: InputProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        if !self.between_rounds() {
            return Err(SeatError::InvalidState);
        }

        let mut keep = vec![true; self.players.len()];

        for (seat, player) in self.players.iter_mut().enumerate() {
            if player.chips() != 0 {
                continue;
            }

            let name = String::from(player.name());
            if input.ask_yes_no(&format!("{name}, would you like to add chips?")) {
                // Negative answers add nothing.
                let amount =
                    usize::try_from(input.ask_number("How many chips would you like to add?"))
                        .unwrap_or(0);
                player.add_chips(amount);
                sink.emit(GameEvent::ChipsAdded {
                    name,
                    amount,
                    chips: player.chips(),
                });
            } else if input.ask_yes_no(&format!("Would you like to remove {name} from the game?")) {
                keep[seat] = false;
                tracing::info!(player = name.as_str(), "player removed");
                sink.emit(GameEvent::PlayerRemoved { name });
            } else {
                sink.emit(GameEvent::PlayingWithoutChips { name });
            }
        }

        let mut flags = keep.into_iter();
        self.players
            .retain(|_| flags.next().unwrap_or(true));

        Ok(())
    }
}
