//! Display events emitted by the interactive round driver.
//!
//! The engine never prints. It reports what happened, in order, to an
//! [`EventSink`], and a presentation layer turns the events into text.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::hand::HandStatus;

/// How a player's bet ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetResult {
    /// Chips credited back to the player, stake included.
    Won(usize),
    /// The stake that was forfeited.
    Lost(usize),
}

/// Something an observer of the table needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A hand was shown in full.
    HandShown {
        /// Owner of the hand.
        name: String,
        /// Card labels in draw order.
        cards: Vec<&'static str>,
        /// Current score.
        score: u8,
    },
    /// A hand reached a terminal status.
    Status {
        /// Owner of the hand.
        name: String,
        /// The status reached.
        status: HandStatus,
    },
    /// The dealer's first card, shown before a player's turn.
    DealerUpCard {
        /// The dealer's name.
        name: String,
        /// Label of the up card.
        card: &'static str,
        /// Value of the up card.
        value: u8,
    },
    /// A bet was rejected and will be asked for again.
    InvalidBet {
        /// The player betting.
        name: String,
        /// The amount entered.
        amount: i64,
        /// Chips available.
        chips: usize,
    },
    /// Final dealer score next to a player's final score.
    ScoreComparison {
        /// The dealer's name.
        dealer: String,
        /// The dealer's final score.
        dealer_score: u8,
        /// The player's name.
        name: String,
        /// The player's final score.
        score: u8,
    },
    /// A bet was settled.
    BetResult {
        /// The player.
        name: String,
        /// What happened to the stake.
        result: BetResult,
        /// Balance after settlement.
        chips: usize,
    },
    /// A player bought more chips.
    ChipsAdded {
        /// The player.
        name: String,
        /// Chips added.
        amount: usize,
        /// Balance afterwards.
        chips: usize,
    },
    /// A player left the table.
    PlayerRemoved {
        /// The player.
        name: String,
    },
    /// A player with no chips stays seated.
    PlayingWithoutChips {
        /// The player.
        name: String,
    },
}

/// Receiver of [`GameEvent`]s.
pub trait EventSink {
    /// Handles one event.
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, event: GameEvent) {
        (**self).emit(event);
    }
}
