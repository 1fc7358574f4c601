//! A turn-based blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that runs rounds for one dealer and any
//! number of seated players: betting, the deal, strictly sequential player
//! turns, the dealer's fixed drawing policy, and settlement under
//! [`HouseRules`].
//!
//! Aces always count 11. There is no splitting, doubling or insurance.
//!
//! # Example
//!
//! ```
//! use bjtable::{Game, GameState, HouseRules};
//!
//! let mut game = Game::new(HouseRules::default(), 42);
//! let seat = game.join("Ann").unwrap();
//!
//! game.start_betting().unwrap();
//! game.bet(seat, 10).unwrap();
//! game.deal().unwrap();
//! game.stand(seat).unwrap();
//! game.dealer_play().unwrap();
//!
//! let result = game.showdown().unwrap();
//! assert_eq!(result.players.len(), 1);
//! assert_eq!(game.state(), GameState::Settled);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod events;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod result;
pub mod settlement;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, BetError, DealError, EmptyDeckError, RoundError, SeatError, ShowdownError,
};
pub use events::{BetResult, EventSink, GameEvent};
pub use game::{
    DealerPlay, DealerStep, Game, GameState, TurnEnd, TurnStep, dealer_step, player_step,
};
pub use hand::{Hand, HandStatus};
pub use input::InputProvider;
pub use options::{HouseRules, RoundingMode};
pub use result::{HandOutcome, PlayerResult, RoundResult};
pub use settlement::{payout, settle_hand};
