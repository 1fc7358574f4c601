//! Settlement of finished hands against the dealer.

use crate::hand::Hand;
use crate::options::{HouseRules, RoundingMode};
use crate::result::HandOutcome;

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

/// Applies a total-return ratio to a stake.
#[must_use]
pub fn payout(bet: usize, ratio: f64, mode: RoundingMode) -> usize {
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for chip values"
    )]
    let amount = (bet as f64) * ratio;
    round_amount(amount, mode)
}

/// Settles one finished player hand against the finished dealer hand.
///
/// Returns the outcome and the chips to credit back, stake included. A loss
/// credits nothing: the stake was already taken when the bet was placed.
///
/// ```
/// use bjtable::{Card, Hand, HandOutcome, HouseRules, Rank, Suit, settle_hand};
///
/// let rules = HouseRules::default();
/// let mut dealer = Hand::new("Dealer", 0);
/// dealer.add_card(Card::new(Suit::Clubs, Rank::Ten));
/// dealer.add_card(Card::new(Suit::Clubs, Rank::Eight));
///
/// let mut player = Hand::new("Ann", 100);
/// player.add_card(Card::new(Suit::Hearts, Rank::Ten));
/// player.add_card(Card::new(Suit::Hearts, Rank::Queen));
/// player.place_bet(10).unwrap();
///
/// assert_eq!(settle_hand(&player, &dealer, &rules), (HandOutcome::Win, 20));
/// ```
#[must_use]
pub fn settle_hand(player: &Hand, dealer: &Hand, rules: &HouseRules) -> (HandOutcome, usize) {
    let bet = player.bet();

    if dealer.is_blackjack(rules) {
        return if player.is_blackjack(rules) {
            (HandOutcome::Push, bet)
        } else {
            (HandOutcome::Lose, 0)
        };
    }

    if player.is_blackjack(rules) {
        return (
            HandOutcome::Blackjack,
            payout(bet, rules.blackjack_pays, rules.rounding),
        );
    }

    let player_bust = player.is_bust(rules);
    let player_score = player.final_score(rules);
    let dealer_score = dealer.final_score(rules);

    if (player_score > dealer_score && !player_bust) || (dealer.is_bust(rules) && !player_bust) {
        (HandOutcome::Win, payout(bet, rules.win_pays, rules.rounding))
    } else if player_score == dealer_score && !player_bust {
        (HandOutcome::Push, bet)
    } else {
        (HandOutcome::Lose, 0)
    }
}
