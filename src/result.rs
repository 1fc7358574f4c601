//! Round result types for showdown.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of a single hand after showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player beat the dealer or the dealer busted.
    Win,
    /// Player lost the stake.
    Lose,
    /// Tie; the stake comes back.
    Push,
    /// Player has blackjack and the dealer does not.
    Blackjack,
}

/// Result for a single player after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    /// Seat index at showdown.
    pub seat: usize,
    /// The player's name.
    pub name: String,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The stake that was settled.
    pub bet: usize,
    /// Chips credited back, stake included. Zero on a loss.
    pub payout: usize,
    /// The player's final score (0 when bust).
    pub player_score: u8,
    /// Balance after settlement.
    pub chips: usize,
}

impl PlayerResult {
    /// Net change in chips over the round.
    #[expect(clippy::cast_possible_wrap, reason = "chip values fit in isize")]
    #[must_use]
    pub const fn net(&self) -> isize {
        self.payout as isize - self.bet as isize
    }
}

/// Result of the entire round after showdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final score (0 when bust).
    pub dealer_score: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}
