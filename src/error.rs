//! Error types for game operations.

use thiserror::Error;

/// A card was requested from an exhausted deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is negative.
    #[error("bet amount is negative")]
    NegativeAmount,
    /// Bet amount exceeds the chips on hand.
    #[error("insufficient chips")]
    InsufficientChips,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
}

impl BetError {
    /// Returns whether the error is about the amount itself.
    ///
    /// Invalid bets are recovered by asking the player again.
    #[must_use]
    pub const fn is_invalid_bet(self) -> bool {
        matches!(self, Self::NegativeAmount | Self::InsufficientChips)
    }
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// Nobody is seated at the table.
    #[error("no players at the table")]
    NoPlayers,
    /// The deck ran out while dealing.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// The hand already reached 21 or more and cannot draw.
    #[error("hand is finished")]
    HandFinished,
    /// The deck ran out while drawing.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid game state for showdown.
    #[error("invalid game state for showdown")]
    InvalidState,
}

/// Errors that can occur while seating or managing players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeatError {
    /// Players can only join or leave between rounds.
    #[error("invalid game state for changing seats")]
    InvalidState,
    /// Every seat is taken.
    #[error("table is full")]
    TableFull,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
}

/// Any error that ends an interactive round early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Betting failed for a reason other than an invalid amount.
    #[error(transparent)]
    Bet(#[from] BetError),
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player or dealer action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// Settlement failed.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
    /// Seating failed.
    #[error(transparent)]
    Seat(#[from] SeatError),
}
