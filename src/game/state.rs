//! Game state types.

use crate::hand::HandStatus;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Between rounds; players may join or leave.
    WaitingForPlayers,
    /// Accepting bets for the next round.
    Betting,
    /// Waiting for player decisions.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// All hands are final and bets can be settled.
    RoundOver,
    /// Bets are settled; hands stay visible until the round is cleared.
    Settled,
}

/// Where a player's turn stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStep {
    /// The player must choose to hit or stand.
    AwaitDecision,
    /// The hand reached 21 or more; the turn is over.
    Finished(HandStatus),
}

/// How a player's turn ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEnd {
    /// The player chose to stop drawing.
    Stood,
    /// The hand reached a terminal status.
    Finished(HandStatus),
}

/// The dealer's next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DealerStep {
    /// Below the threshold; draw another card.
    Draw,
    /// At or above the threshold; stop with the given status, if any.
    Stand(Option<HandStatus>),
}
