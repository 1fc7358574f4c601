//! The interactive round driver.
//!
//! Glues the round state machine to an [`InputProvider`] and reports what
//! happens to an [`EventSink`]. All decisions are made by the state machine
//! and the settlement engine; this layer only asks and reports.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use crate::card::Card;
use crate::error::{ActionError, BetError, RoundError};
use crate::events::{BetResult, EventSink, GameEvent};
use crate::hand::score_cards;
use crate::input::InputProvider;
use crate::result::RoundResult;

use super::{DealerPlay, Game, GameState, TurnEnd, TurnStep};

fn hand_shown(name: &str, cards: &[Card]) -> GameEvent {
    GameEvent::HandShown {
        name: String::from(name),
        cards: cards.iter().map(Card::label).collect(),
        score: score_cards(cards),
    }
}

impl Game {
    /// Plays one full round: bets, deal, player turns, dealer turn, showdown.
    ///
    /// If betting is already open, the round uses the deck already in place.
    /// The hands stay on the table afterwards; call [`Game::clear_round`] or
    /// [`Game::start_betting`] to move on.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is mid-round, nobody is seated, or the
    /// deck runs out. Invalid bets are asked again rather than returned.
    pub fn play_round<I, S>(&mut self, input: &mut I, sink: &mut S) -> Result<RoundResult, RoundError>
    where
        I: InputProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        if self.state != GameState::Betting {
            self.start_betting()?;
        }
        self.take_bets(input, sink)?;
        self.deal()?;

        for seat in 0..self.players.len() {
            self.play_turn(seat, input, sink)?;
        }

        self.play_dealer(sink)?;

        let result = self.showdown()?;
        for player in &result.players {
            sink.emit(GameEvent::ScoreComparison {
                dealer: String::from(self.dealer.name()),
                dealer_score: result.dealer_score,
                name: player.name.clone(),
                score: player.player_score,
            });

            let bet_result = if player.payout > 0 {
                BetResult::Won(player.payout)
            } else {
                BetResult::Lost(player.bet)
            };
            sink.emit(GameEvent::BetResult {
                name: player.name.clone(),
                result: bet_result,
                chips: player.chips,
            });
        }

        Ok(result)
    }

    /// Asks every player for a bet, repeating until each bet is valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in betting state.
    pub fn take_bets<I, S>(&mut self, input: &mut I, sink: &mut S) -> Result<(), BetError>
    where
        I: InputProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        if self.state != GameState::Betting {
            return Err(BetError::InvalidState);
        }

        for seat in 0..self.players.len() {
            loop {
                let player = &self.players[seat];
                let name = String::from(player.name());
                let chips = player.chips();

                let amount = input.ask_number(&format!("{name} you have {chips}. Make a bet:"));
                match self.bet(seat, amount) {
                    Ok(()) => break,
                    Err(err) if err.is_invalid_bet() => {
                        sink.emit(GameEvent::InvalidBet {
                            name,
                            amount,
                            chips,
                        });
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        Ok(())
    }

    /// Runs one player's turn: show, check for a finished hand, ask, repeat.
    ///
    /// The dealer's up card is reported first.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not this player's turn or the deck runs
    /// out. Nothing is asked or reported when the turn is not this
    /// player's.
    pub fn play_turn<I, S>(&mut self, seat: usize, input: &mut I, sink: &mut S) -> Result<TurnEnd, ActionError>
    where
        I: InputProvider + ?Sized,
        S: EventSink + ?Sized,
    {
        self.ensure_player_turn(seat)?;

        if let Some(card) = self.dealer.up_card() {
            sink.emit(GameEvent::DealerUpCard {
                name: String::from(self.dealer.name()),
                card: card.label(),
                value: card.value(),
            });
        }

        loop {
            let hand = self.players.get(seat).ok_or(ActionError::PlayerNotFound)?;
            sink.emit(hand_shown(hand.name(), hand.cards()));

            match self.turn_step(seat)? {
                TurnStep::Finished(status) => {
                    sink.emit(GameEvent::Status {
                        name: String::from(hand.name()),
                        status,
                    });
                    self.stand(seat)?;
                    return Ok(TurnEnd::Finished(status));
                }
                TurnStep::AwaitDecision => {
                    if input.ask_yes_no("Draw a card (yes/no)?") {
                        self.hit(seat)?;
                    } else {
                        self.stand(seat)?;
                        return Ok(TurnEnd::Stood);
                    }
                }
            }
        }
    }

    /// Runs the dealer's turn, reporting the hand after every draw.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in dealer turn state or the deck
    /// runs out.
    pub fn play_dealer<S>(&mut self, sink: &mut S) -> Result<DealerPlay, ActionError>
    where
        S: EventSink + ?Sized,
    {
        let play = self.dealer_play()?;

        let cards = self.dealer.cards();
        let initial = cards.len() - play.drawn.len();
        for shown in initial..=cards.len() {
            sink.emit(hand_shown(self.dealer.name(), &cards[..shown]));
        }

        if let Some(status) = play.status {
            sink.emit(GameEvent::Status {
                name: String::from(self.dealer.name()),
                status,
            });
        }

        Ok(play)
    }
}
