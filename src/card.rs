//! Card types.

use core::fmt;

/// Card suit.
///
/// Suits carry no scoring meaning; they only provide the four copies of each
/// rank in a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace, always worth 11.
    Ace,
    /// King.
    King,
    /// Queen.
    Queen,
    /// Jack.
    Jack,
    /// Ten.
    Ten,
    /// Nine.
    Nine,
    /// Eight.
    Eight,
    /// Seven.
    Seven,
    /// Six.
    Six,
    /// Five.
    Five,
    /// Four.
    Four,
    /// Three.
    Three,
    /// Two.
    Two,
}

impl Rank {
    /// All thirteen ranks, highest first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::King,
        Self::Queen,
        Self::Jack,
        Self::Ten,
        Self::Nine,
        Self::Eight,
        Self::Seven,
        Self::Six,
        Self::Five,
        Self::Four,
        Self::Three,
        Self::Two,
    ];

    /// Returns the scoring value of the rank.
    ///
    /// Aces count 11, tens and face cards count 10, everything else its pip
    /// value.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 11,
            Self::King | Self::Queen | Self::Jack | Self::Ten => 10,
            Self::Nine => 9,
            Self::Eight => 8,
            Self::Seven => 7,
            Self::Six => 6,
            Self::Five => 5,
            Self::Four => 4,
            Self::Three => 3,
            Self::Two => 2,
        }
    }

    /// Returns the display label of the rank.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::King => "King",
            Self::Queen => "Queen",
            Self::Jack => "Jack",
            Self::Ten => "10",
            Self::Nine => "9",
            Self::Eight => "8",
            Self::Seven => "7",
            Self::Six => "6",
            Self::Five => "5",
            Self::Four => "4",
            Self::Three => "3",
            Self::Two => "2",
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the scoring value of the card.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.value()
    }

    /// Returns the display label of the card.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.rank.label()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
