//! House rules.

extern crate alloc;

use alloc::string::String;

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// The fixed rules of the table.
///
/// One immutable value is shared by the turn controller and the settlement
/// engine. Payout ratios are total returns: the stake is included, so `2.0`
/// means a bet of 10 comes back as 20.
///
/// ```
/// use bjtable::HouseRules;
///
/// let rules = HouseRules::default()
///     .with_blackjack_pays(2.5)
///     .with_dealer_stands_on(18)
///     .with_max_players(4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HouseRules {
    /// Best possible total; anything above busts.
    pub blackjack: u8,
    /// The dealer stops drawing once reaching this total.
    pub dealer_stands_on: u8,
    /// Total return on a winning blackjack.
    pub blackjack_pays: f64,
    /// Total return on an ordinary win.
    pub win_pays: f64,
    /// Rounding mode for fractional payouts.
    pub rounding: RoundingMode,
    /// Chips given to a newly seated player.
    pub starting_chips: usize,
    /// Maximum number of seated players.
    pub max_players: usize,
    /// Name of the dealer's hand.
    pub dealer_name: String,
}

impl Default for HouseRules {
    fn default() -> Self {
        Self {
            blackjack: 21,
            dealer_stands_on: 17,
            blackjack_pays: 2.25,
            win_pays: 2.0,
            rounding: RoundingMode::Down,
            starting_chips: 100,
            max_players: 7,
            dealer_name: String::from("Dealer"),
        }
    }
}

impl HouseRules {
    /// Sets the blackjack total.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::HouseRules;
    ///
    /// let rules = HouseRules::default().with_blackjack(31);
    /// assert_eq!(rules.blackjack, 31);
    /// ```
    #[must_use]
    pub fn with_blackjack(mut self, total: u8) -> Self {
        self.blackjack = total;
        self
    }

    /// Sets the total at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::HouseRules;
    ///
    /// let rules = HouseRules::default().with_dealer_stands_on(16);
    /// assert_eq!(rules.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Sets the total return on a winning blackjack.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::HouseRules;
    ///
    /// let rules = HouseRules::default().with_blackjack_pays(2.5);
    /// assert_eq!(rules.blackjack_pays, 2.5);
    /// ```
    #[must_use]
    pub fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the total return on an ordinary win.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::HouseRules;
    ///
    /// let rules = HouseRules::default().with_win_pays(1.95);
    /// assert_eq!(rules.win_pays, 1.95);
    /// ```
    #[must_use]
    pub fn with_win_pays(mut self, ratio: f64) -> Self {
        self.win_pays = ratio;
        self
    }

    /// Sets the rounding mode for fractional payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{HouseRules, RoundingMode};
    ///
    /// let rules = HouseRules::default().with_rounding(RoundingMode::Up);
    /// assert_eq!(rules.rounding, RoundingMode::Up);
    /// ```
    #[must_use]
    pub fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }

    /// Sets the chips given to new players.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::HouseRules;
    ///
    /// let rules = HouseRules::default().with_starting_chips(500);
    /// assert_eq!(rules.starting_chips, 500);
    /// ```
    #[must_use]
    pub fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the maximum number of seated players.
    ///
    /// Keep this small enough that one deck covers every hand of a round.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::HouseRules;
    ///
    /// let rules = HouseRules::default().with_max_players(3);
    /// assert_eq!(rules.max_players, 3);
    /// ```
    #[must_use]
    pub fn with_max_players(mut self, max: usize) -> Self {
        self.max_players = max;
        self
    }

    /// Sets the dealer's name.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::HouseRules;
    ///
    /// let rules = HouseRules::default().with_dealer_name("House");
    /// assert_eq!(rules.dealer_name, "House");
    /// ```
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }
}
