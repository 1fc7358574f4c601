//! Game integration tests.

use std::collections::{HashMap, HashSet};

use bjtable::{
    ActionError, BetError, Card, DECK_SIZE, DealError, DealerStep, Deck, EmptyDeckError, Game,
    GameState, Hand, HandOutcome, HandStatus, HouseRules, Rank, RoundingMode, SeatError,
    ShowdownError, Suit, TurnStep, dealer_step, player_step, settle_hand,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(rank: Rank) -> Card {
    Card::new(Suit::Hearts, rank)
}

fn hand_with(name: &str, ranks: &[Rank]) -> Hand {
    let mut hand = Hand::new(name, 100);
    for &rank in ranks {
        hand.add_card(card(rank));
    }
    hand
}

fn betting_hand(ranks: &[Rank], bet: i64) -> Hand {
    let mut hand = hand_with("Player", ranks);
    hand.place_bet(bet).unwrap();
    hand
}

#[test]
fn deck_holds_four_of_each_rank() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let deck = Deck::shuffled(&mut rng);
    assert_eq!(deck.len(), DECK_SIZE);

    let mut counts: HashMap<Rank, usize> = HashMap::new();
    for card in deck.cards() {
        *counts.entry(card.rank).or_default() += 1;
    }
    assert_eq!(counts.len(), 13);
    assert!(counts.values().all(|&count| count == 4));

    for card in deck.cards() {
        let expected = match card.rank {
            Rank::Ace => 11,
            Rank::King | Rank::Queen | Rank::Jack | Rank::Ten => 10,
            other => other.label().parse::<u8>().unwrap(),
        };
        assert_eq!(card.value(), expected);
    }
}

#[test]
fn dealing_is_exhaustive_and_non_repeating() {
    let mut deck = Deck::new();
    let mut seen = HashSet::new();

    for _ in 0..DECK_SIZE {
        assert!(seen.insert(deck.deal().unwrap()));
    }

    assert!(deck.is_empty());
    assert_eq!(deck.deal(), Err(EmptyDeckError));
}

#[test]
fn injected_shuffle_is_deterministic() {
    let mut deck = Deck::with_shuffle(|_| {});
    assert_eq!(deck.deal().unwrap(), Card::new(Suit::Spades, Rank::Two));

    let mut first = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(3));
    let mut second = Deck::shuffled(&mut ChaCha8Rng::seed_from_u64(3));
    for _ in 0..DECK_SIZE {
        assert_eq!(first.deal(), second.deal());
    }
}

#[test]
fn scoring_and_status() {
    let rules = HouseRules::default();

    let nineteen = hand_with("A", &[Rank::Ten, Rank::Nine]);
    assert_eq!(nineteen.score(), 19);
    assert_eq!(nineteen.status(&rules), None);

    let blackjack = hand_with("B", &[Rank::Ace, Rank::King]);
    assert_eq!(blackjack.score(), 21);
    assert_eq!(blackjack.status(&rules), Some(HandStatus::Blackjack));
    assert!(blackjack.is_blackjack(&rules));

    let twenty_one = hand_with("C", &[Rank::Seven, Rank::Seven, Rank::Seven]);
    assert_eq!(twenty_one.status(&rules), Some(HandStatus::TwentyOne));
    assert!(!twenty_one.is_blackjack(&rules));

    let bust = hand_with("D", &[Rank::Ten, Rank::Ten, Rank::Five]);
    assert_eq!(bust.score(), 25);
    assert_eq!(bust.status(&rules), Some(HandStatus::Bust));
    assert_eq!(bust.final_score(&rules), 0);

    let aces = hand_with("E", &[Rank::Ace, Rank::Ace]);
    assert_eq!(aces.score(), 22);
    assert!(aces.is_bust(&rules));
}

#[test]
fn clearing_cards_resets_derived_status() {
    let rules = HouseRules::default();
    let mut hand = hand_with("A", &[Rank::Ten, Rank::Ten, Rank::Five]);
    assert!(hand.is_bust(&rules));

    hand.clear_cards();
    assert!(hand.is_empty());
    assert_eq!(hand.score(), 0);
    assert!(!hand.is_bust(&rules));
    assert_eq!(hand.status(&rules), None);

    hand.add_card(card(Rank::Ace));
    hand.add_card(card(Rank::Jack));
    assert_eq!(hand.status(&rules), Some(HandStatus::Blackjack));
}

#[test]
fn betting_rejects_over_betting_and_accumulates() {
    let mut hand = Hand::new("A", 50);

    let err = hand.place_bet(60).unwrap_err();
    assert_eq!(err, BetError::InsufficientChips);
    assert!(err.is_invalid_bet());
    assert_eq!(hand.chips(), 50);
    assert_eq!(hand.bet(), 0);

    assert_eq!(hand.place_bet(-1).unwrap_err(), BetError::NegativeAmount);
    assert_eq!(hand.chips(), 50);

    hand.place_bet(30).unwrap();
    hand.place_bet(20).unwrap();
    assert_eq!(hand.chips(), 0);
    assert_eq!(hand.bet(), 50);

    hand.place_bet(0).unwrap();
    hand.settle(100);
    hand.reset_bet();
    assert_eq!(hand.chips(), 100);
    assert_eq!(hand.bet(), 0);
}

#[test]
fn settlement_against_standing_dealer() {
    let rules = HouseRules::default();
    let dealer = hand_with("Dealer", &[Rank::Ten, Rank::Eight]);

    let winner = betting_hand(&[Rank::Ten, Rank::Queen], 10);
    assert_eq!(
        settle_hand(&winner, &dealer, &rules),
        (HandOutcome::Win, 20)
    );

    let tie = betting_hand(&[Rank::Ten, Rank::Eight], 10);
    assert_eq!(settle_hand(&tie, &dealer, &rules), (HandOutcome::Push, 10));

    let bust = betting_hand(&[Rank::Ten, Rank::Ten, Rank::Five], 10);
    assert_eq!(settle_hand(&bust, &dealer, &rules), (HandOutcome::Lose, 0));

    let short = betting_hand(&[Rank::Ten, Rank::Seven], 10);
    assert_eq!(settle_hand(&short, &dealer, &rules), (HandOutcome::Lose, 0));
}

#[test]
fn settlement_against_dealer_blackjack() {
    let rules = HouseRules::default();
    let dealer = hand_with("Dealer", &[Rank::Ace, Rank::King]);

    let blackjack = betting_hand(&[Rank::Ace, Rank::Queen], 10);
    assert_eq!(
        settle_hand(&blackjack, &dealer, &rules),
        (HandOutcome::Push, 10)
    );

    let twenty_one = betting_hand(&[Rank::Seven, Rank::Seven, Rank::Seven], 10);
    assert_eq!(
        settle_hand(&twenty_one, &dealer, &rules),
        (HandOutcome::Lose, 0)
    );
}

#[test]
fn settlement_against_busted_dealer() {
    let rules = HouseRules::default();
    let dealer = hand_with("Dealer", &[Rank::Ten, Rank::Six, Rank::Ten]);

    let low = betting_hand(&[Rank::Ten, Rank::Two], 10);
    assert_eq!(settle_hand(&low, &dealer, &rules), (HandOutcome::Win, 20));

    let bust = betting_hand(&[Rank::Ten, Rank::Nine, Rank::Five], 10);
    assert_eq!(settle_hand(&bust, &dealer, &rules), (HandOutcome::Lose, 0));
}

#[test]
fn blackjack_payout_and_rounding() {
    let dealer = hand_with("Dealer", &[Rank::Ten, Rank::Nine]);
    let rules = HouseRules::default();

    let ten = betting_hand(&[Rank::Ace, Rank::King], 10);
    assert_eq!(
        settle_hand(&ten, &dealer, &rules),
        (HandOutcome::Blackjack, 22)
    );

    let up = rules.clone().with_rounding(RoundingMode::Up);
    assert_eq!(settle_hand(&ten, &dealer, &up).1, 23);

    let four = betting_hand(&[Rank::Ace, Rank::King], 4);
    assert_eq!(settle_hand(&four, &dealer, &rules).1, 9);

    let generous = rules.with_win_pays(3.0).with_blackjack_pays(2.5);
    let winner = betting_hand(&[Rank::Ten, Rank::Queen], 10);
    assert_eq!(settle_hand(&winner, &dealer, &generous).1, 30);
    assert_eq!(settle_hand(&ten, &dealer, &generous).1, 25);
}

#[test]
fn turn_and_dealer_steps() {
    let rules = HouseRules::default();

    assert_eq!(
        player_step(&hand_with("A", &[Rank::Ten, Rank::Nine]), &rules),
        TurnStep::AwaitDecision
    );
    assert_eq!(
        player_step(&hand_with("A", &[Rank::Ace, Rank::Ten]), &rules),
        TurnStep::Finished(HandStatus::Blackjack)
    );
    assert_eq!(
        player_step(&hand_with("A", &[Rank::Ten, Rank::Nine, Rank::Five]), &rules),
        TurnStep::Finished(HandStatus::Bust)
    );

    assert_eq!(
        dealer_step(&hand_with("D", &[Rank::Ten, Rank::Six]), &rules),
        DealerStep::Draw
    );
    assert_eq!(
        dealer_step(&hand_with("D", &[Rank::Ten, Rank::Seven]), &rules),
        DealerStep::Stand(None)
    );
    assert_eq!(
        dealer_step(&hand_with("D", &[Rank::Ten, Rank::Seven, Rank::Five]), &rules),
        DealerStep::Stand(Some(HandStatus::Bust))
    );

    let cautious = rules.with_dealer_stands_on(18);
    assert_eq!(
        dealer_step(&hand_with("D", &[Rank::Ten, Rank::Seven]), &cautious),
        DealerStep::Draw
    );
}

#[test]
fn rules_builder_sets_fields() {
    let rules = HouseRules::default()
        .with_blackjack(31)
        .with_dealer_stands_on(27)
        .with_rounding(RoundingMode::Nearest)
        .with_starting_chips(250)
        .with_max_players(2)
        .with_dealer_name("House");

    assert_eq!(rules.blackjack, 31);
    assert_eq!(rules.dealer_stands_on, 27);
    assert_eq!(rules.rounding, RoundingMode::Nearest);
    assert_eq!(rules.starting_chips, 250);
    assert_eq!(rules.max_players, 2);
    assert_eq!(rules.dealer_name, "House");

    let game = Game::new(rules, 1);
    assert_eq!(game.dealer().name(), "House");
}

#[test]
fn bet_errors() {
    let mut game = Game::new(HouseRules::default(), 1);
    let player = game.join("Ann").unwrap();

    assert_eq!(game.bet(player, 5).unwrap_err(), BetError::InvalidState);

    game.start_betting().unwrap();
    assert_eq!(
        game.bet(player, 200).unwrap_err(),
        BetError::InsufficientChips
    );
    assert_eq!(
        game.bet(player + 1, 1).unwrap_err(),
        BetError::PlayerNotFound
    );

    game.bet(player, 30).unwrap();
    game.bet(player, 20).unwrap();
    assert_eq!(game.player(player).unwrap().bet(), 50);
    assert_eq!(game.player(player).unwrap().chips(), 50);
}

#[test]
fn deal_errors() {
    let mut game = Game::new(HouseRules::default(), 1);

    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);

    game.start_betting().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::NoPlayers);

    game.clear_round();
    game.join("Ann").unwrap();
    game.start_betting().unwrap();
    game.deck = Deck::from_draw_order(&[card(Rank::Nine), card(Rank::Five), card(Rank::Seven)]);

    assert_eq!(
        game.deal().unwrap_err(),
        DealError::EmptyDeck(EmptyDeckError)
    );
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let mut game = Game::new(HouseRules::default(), 7);
    let player = game.join("Ann").unwrap();

    game.start_betting().unwrap();
    game.bet(player, 10).unwrap();
    game.deck = Deck::from_draw_order(&[
        card(Rank::Five),  // player
        card(Rank::Six),   // player
        card(Rank::Nine),  // dealer up
        card(Rank::Seven), // dealer hole
    ]);

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(
        game.hit(player).unwrap_err(),
        ActionError::EmptyDeck(EmptyDeckError)
    );

    game.clear_round();
    assert_eq!(game.player(player).unwrap().chips(), 100);
    assert_eq!(game.player(player).unwrap().bet(), 0);
    assert!(game.player(player).unwrap().is_empty());
}

#[test]
fn basic_round_flow() {
    let mut game = Game::new(HouseRules::default(), 42);
    let ann = game.join("Ann").unwrap();
    let bob = game.join("Bob").unwrap();

    game.start_betting().unwrap();
    game.bet(ann, 10).unwrap();
    game.bet(bob, 10).unwrap();

    game.deck = Deck::from_draw_order(&[
        card(Rank::Ten),   // Ann
        card(Rank::Seven), // Ann
        card(Rank::Ace),   // Bob
        card(Rank::King),  // Bob
        card(Rank::Ten),   // dealer up
        card(Rank::Six),   // dealer hole
        card(Rank::Five),  // dealer draw
    ]);

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.current_player(), Some(ann));
    assert_eq!(game.dealer().up_card(), Some(&card(Rank::Ten)));

    assert_eq!(game.hit(bob).unwrap_err(), ActionError::NotYourTurn);
    game.stand(ann).unwrap();

    assert_eq!(
        game.turn_step(bob).unwrap(),
        TurnStep::Finished(HandStatus::Blackjack)
    );
    assert_eq!(game.hit(bob).unwrap_err(), ActionError::HandFinished);
    game.stand(bob).unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.current_player(), None);

    let play = game.dealer_play().unwrap();
    assert_eq!(play.drawn, vec![card(Rank::Five)]);
    assert_eq!(play.status, Some(HandStatus::TwentyOne));
    assert_eq!(game.state(), GameState::RoundOver);

    let result = game.showdown().unwrap();
    assert_eq!(result.dealer_score, 21);
    assert!(!result.dealer_blackjack);
    assert_eq!(result.players[0].outcome, HandOutcome::Lose);
    assert_eq!(result.players[0].net(), -10);
    assert_eq!(result.players[1].outcome, HandOutcome::Blackjack);
    assert_eq!(result.players[1].payout, 22);

    assert_eq!(game.player(ann).unwrap().chips(), 90);
    assert_eq!(game.player(bob).unwrap().chips(), 112);
    assert_eq!(game.player(bob).unwrap().bet(), 0);
    assert_eq!(game.state(), GameState::Settled);

    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);

    game.clear_round();
    assert!(game.dealer().is_empty());
    assert!(game.players().iter().all(Hand::is_empty));
    assert_eq!(game.state(), GameState::WaitingForPlayers);
}

#[test]
fn hitting_draws_in_order() {
    let mut game = Game::new(HouseRules::default(), 9);
    let ann = game.join("Ann").unwrap();

    game.start_betting().unwrap();
    game.bet(ann, 10).unwrap();
    game.deck = Deck::from_draw_order(&[
        card(Rank::Two),
        card(Rank::Three),
        card(Rank::Ten),
        card(Rank::Seven),
        card(Rank::Four),
        card(Rank::Ten),
    ]);

    game.deal().unwrap();
    assert_eq!(game.hit(ann).unwrap(), card(Rank::Four));
    assert_eq!(game.hit(ann).unwrap(), card(Rank::Ten));
    assert_eq!(game.player(ann).unwrap().score(), 19);
    assert_eq!(game.turn_step(ann).unwrap(), TurnStep::AwaitDecision);
}

#[test]
fn showdown_rejects_wrong_state() {
    let mut game = Game::new(HouseRules::default(), 1);
    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn seating_limits() {
    let mut game = Game::new(HouseRules::default().with_max_players(2), 1);
    game.join("Ann").unwrap();
    game.join("Bob").unwrap();
    assert_eq!(game.join("Cy").unwrap_err(), SeatError::TableFull);

    game.start_betting().unwrap();
    assert_eq!(game.leave(0).unwrap_err(), SeatError::InvalidState);
    assert_eq!(game.add_chips(0, 5).unwrap_err(), SeatError::InvalidState);

    game.clear_round();
    let left = game.leave(0).unwrap();
    assert_eq!(left.name(), "Ann");
    assert_eq!(game.player(0).unwrap().name(), "Bob");
    assert_eq!(game.leave(3).unwrap_err(), SeatError::PlayerNotFound);
    assert_eq!(game.add_chips(0, 5), Ok(105));
}

#[test]
fn dealer_blackjack_takes_every_other_bet() {
    let mut game = Game::new(HouseRules::default(), 11);
    let ann = game.join("Ann").unwrap();

    game.start_betting().unwrap();
    game.bet(ann, 25).unwrap();
    game.deck = Deck::from_draw_order(&[
        card(Rank::King),  // Ann
        card(Rank::Queen), // Ann
        card(Rank::Ace),   // dealer up
        card(Rank::Jack),  // dealer hole
    ]);

    game.deal().unwrap();
    game.stand(ann).unwrap();
    let play = game.dealer_play().unwrap();
    assert!(play.drawn.is_empty());
    assert_eq!(play.status, Some(HandStatus::Blackjack));

    let result = game.showdown().unwrap();
    assert!(result.dealer_blackjack);
    assert_eq!(result.players[0].outcome, HandOutcome::Lose);
    assert_eq!(result.players[0].player_score, 20);
    assert_eq!(result.players[0].payout, 0);

    let hand = game.player(ann).unwrap();
    assert_eq!(hand.chips(), 75);
    assert_eq!(hand.bet(), 0);
}

#[test]
fn chip_credits_saturate() {
    let mut game = Game::new(HouseRules::default(), 1);
    let ann = game.join("Ann").unwrap();

    assert_eq!(game.add_chips(ann, usize::MAX), Ok(usize::MAX));
    assert_eq!(game.add_chips(ann, usize::MAX), Ok(usize::MAX));

    let mut hand = Hand::new("Bob", usize::MAX - 1);
    hand.settle(10);
    assert_eq!(hand.chips(), usize::MAX);
}

#[test]
fn new_game_shuffles_only_when_betting_opens() {
    let mut game = Game::new(HouseRules::default(), 3);
    assert_eq!(game.cards_remaining(), 0);

    game.start_betting().unwrap();
    assert_eq!(game.cards_remaining(), DECK_SIZE);
}
