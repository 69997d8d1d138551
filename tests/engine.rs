//! Engine integration tests.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use bjclimb::engine::dealer::should_hit;
use bjclimb::{
    ActionError, BetError, Card, DECK_SIZE, Engine, Hand, LEVELS, Outcome, Phase, Shoe, Suit,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn hand_of(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &c in cards {
        hand.push(c);
    }
    hand
}

/// A shoe that lets the player stand on 20 against a dealer 19.
///
/// Deterministic at every level: the dealer stops on 19 regardless of
/// aggressiveness.
fn winning_shoe() -> Shoe {
    Shoe::from_draws(&[
        card(Suit::Hearts, 13),  // player
        card(Suit::Diamonds, 12), // player (20)
        card(Suit::Spades, 10),  // dealer up
        card(Suit::Clubs, 9),    // dealer draw (19, always stands)
    ])
}

/// A shoe where one hit busts the player. Dealer never plays.
fn busting_shoe() -> Shoe {
    Shoe::from_draws(&[
        card(Suit::Hearts, 10),  // player
        card(Suit::Diamonds, 6), // player (16)
        card(Suit::Spades, 5),   // dealer up
        card(Suit::Clubs, 13),   // player hit (26, bust)
    ])
}

fn win_round(engine: &mut Engine) {
    let bet = engine.snapshot().level.min_bet;
    engine.place_bet_with_shoe(bet, winning_shoe()).unwrap();
    engine.stand().unwrap();
    assert!(
        engine
            .round()
            .settlement
            .as_ref()
            .is_some_and(|s| s.outcome.is_win())
    );
    engine.new_round();
}

fn lose_round(engine: &mut Engine) {
    let bet = engine.snapshot().level.min_bet;
    engine.place_bet_with_shoe(bet, busting_shoe()).unwrap();
    engine.hit().unwrap();
    assert!(
        engine
            .round()
            .settlement
            .as_ref()
            .is_some_and(|s| s.outcome == Outcome::PlayerBust)
    );
    engine.new_round();
}

#[test]
fn hand_value_soft_ace_handling() {
    assert_eq!(hand_of(&[card(Suit::Hearts, 1), card(Suit::Spades, 1)]).value(), 12);
    assert_eq!(
        hand_of(&[
            card(Suit::Hearts, 1),
            card(Suit::Spades, 1),
            card(Suit::Clubs, 9)
        ])
        .value(),
        21
    );
    assert_eq!(hand_of(&[card(Suit::Hearts, 1), card(Suit::Spades, 13)]).value(), 21);
    assert_eq!(
        hand_of(&[
            card(Suit::Hearts, 1),
            card(Suit::Spades, 10),
            card(Suit::Clubs, 10)
        ])
        .value(),
        21
    );
}

#[test]
fn hand_value_faces_and_bust() {
    let hand = hand_of(&[
        card(Suit::Hearts, 11),
        card(Suit::Spades, 12),
        card(Suit::Clubs, 13),
    ]);
    assert_eq!(hand.value(), 30);
    assert!(hand.is_bust());
}

#[test]
fn shuffled_shoe_is_a_permutation() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let shoe = Shoe::shuffled(2, &mut rng);
    assert_eq!(shoe.remaining(), 2 * DECK_SIZE);

    let mut counts: HashMap<Card, usize> = HashMap::new();
    for &c in shoe.cards() {
        *counts.entry(c).or_default() += 1;
    }
    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&n| n == 2));
}

#[test]
fn shuffle_spreads_cards_across_positions() {
    // Across many seeds the ace of spades should land in the top half of a
    // single deck about half the time.
    let target = card(Suit::Spades, 1);
    let mut top_half = 0;

    for seed in 0..1000 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let shoe = Shoe::shuffled(1, &mut rng);
        let position = shoe
            .cards()
            .iter()
            .position(|&c| c == target)
            .expect("ace of spades must be in the deck");
        if position >= DECK_SIZE / 2 {
            top_half += 1;
        }
    }

    assert!((400..=600).contains(&top_half), "top_half = {top_half}");
}

#[test]
fn bet_below_minimum_is_rejected_and_state_unchanged() {
    let mut engine = Engine::new(1);
    assert_eq!(LEVELS[0].min_bet, 10);

    let err = engine.place_bet(5).unwrap_err();
    assert_eq!(err, BetError::TooLow { minimum: 10 });

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.balance, 1000);
    assert_eq!(snapshot.round.phase, Phase::Betting);
    assert!(snapshot.round.player_hand.is_empty());
}

#[test]
fn bet_above_balance_is_rejected() {
    let mut engine = Engine::new(1);
    let err = engine.place_bet(2000).unwrap_err();
    assert_eq!(err, BetError::InsufficientFunds);
    assert_eq!(engine.snapshot().balance, 1000);
}

#[test]
fn placing_a_bet_debits_and_deals() {
    let mut engine = Engine::new(1);
    let round = engine.place_bet(50).unwrap();

    assert_eq!(round.phase, Phase::PlayerTurn);
    assert_eq!(round.bet, 50);
    assert_eq!(round.player_hand.len(), 2);
    assert_eq!(round.dealer_hand.len(), 1);
    assert_eq!(engine.snapshot().balance, 950);
}

#[test]
fn fresh_shoe_is_sized_for_the_level() {
    let mut engine = Engine::new(3);
    let round = engine.place_bet(10).unwrap();
    // Rookie plays a single deck; three cards went to the deal.
    assert_eq!(round.shoe.remaining(), DECK_SIZE - 3);
}

#[test]
fn busting_hit_settles_without_dealer_play() {
    let mut engine = Engine::new(1);
    engine.place_bet_with_shoe(50, busting_shoe()).unwrap();

    let round = engine.hit().unwrap();
    assert_eq!(round.phase, Phase::Settled);
    assert!(round.player_hand.is_bust());
    // Dealer still holds only the upcard.
    assert_eq!(round.dealer_hand.len(), 1);

    let settlement = round.settlement.as_ref().unwrap();
    assert_eq!(settlement.outcome, Outcome::PlayerBust);
    assert_eq!(settlement.payout, 0);

    // Bet already forfeited at placement; no further balance change.
    assert_eq!(engine.snapshot().balance, 950);
    assert_eq!(engine.snapshot().win_streak, 0);
}

#[test]
fn standing_runs_dealer_and_settles_a_win() {
    let mut engine = Engine::new(1);
    engine.place_bet_with_shoe(50, winning_shoe()).unwrap();

    let round = engine.stand().unwrap();
    assert_eq!(round.phase, Phase::Settled);

    let settlement = round.settlement.as_ref().unwrap();
    assert_eq!(settlement.outcome, Outcome::PlayerWin);
    assert_eq!(settlement.player_value, 20);
    assert_eq!(settlement.dealer_value, 19);
    assert_eq!(settlement.payout, 100);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.balance, 1050);
    assert_eq!(snapshot.win_streak, 1);
    assert_eq!(snapshot.wins_at_level, 1);
}

#[test]
fn dealer_bust_pays_the_player() {
    let mut engine = Engine::new(1);
    engine
        .place_bet_with_shoe(
            50,
            Shoe::from_draws(&[
                card(Suit::Hearts, 10),  // player
                card(Suit::Diamonds, 9), // player (19)
                card(Suit::Spades, 10),  // dealer up
                card(Suit::Clubs, 6),    // dealer draw (16)
                card(Suit::Hearts, 13),  // dealer draw (26, bust)
            ]),
        )
        .unwrap();

    let round = engine.stand().unwrap();
    let settlement = round.settlement.as_ref().unwrap();
    assert_eq!(settlement.outcome, Outcome::DealerBust);
    assert_eq!(engine.snapshot().balance, 1050);
}

#[test]
fn dealer_win_forfeits_the_bet() {
    let mut engine = Engine::new(1);
    engine
        .place_bet_with_shoe(
            50,
            Shoe::from_draws(&[
                card(Suit::Hearts, 10),  // player
                card(Suit::Diamonds, 7), // player (17)
                card(Suit::Spades, 10),  // dealer up
                card(Suit::Clubs, 9),    // dealer draw (19)
            ]),
        )
        .unwrap();

    let round = engine.stand().unwrap();
    let settlement = round.settlement.as_ref().unwrap();
    assert_eq!(settlement.outcome, Outcome::DealerWin);
    assert_eq!(settlement.payout, 0);
    assert_eq!(engine.snapshot().balance, 950);
    assert_eq!(engine.snapshot().win_streak, 0);
}

#[test]
fn push_refunds_the_bet_and_keeps_the_streak() {
    let mut engine = Engine::new(1);
    win_round(&mut engine);
    let streak_before = engine.snapshot().win_streak;

    engine
        .place_bet_with_shoe(
            50,
            Shoe::from_draws(&[
                card(Suit::Hearts, 10),  // player
                card(Suit::Diamonds, 9), // player (19)
                card(Suit::Spades, 10),  // dealer up
                card(Suit::Clubs, 9),    // dealer draw (19)
            ]),
        )
        .unwrap();

    let balance_before = engine.snapshot().balance;
    let round = engine.stand().unwrap();
    let settlement = round.settlement.as_ref().unwrap();
    assert_eq!(settlement.outcome, Outcome::Push);
    assert_eq!(settlement.payout, 50);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.balance, balance_before + 50);
    assert_eq!(snapshot.win_streak, streak_before);
}

#[test]
fn reaching_target_wins_advances_the_level_once() {
    let mut engine = Engine::new(1);
    assert_eq!(LEVELS[0].target_wins, 3);

    win_round(&mut engine);
    win_round(&mut engine);
    assert_eq!(engine.snapshot().level_index, 0);
    assert_eq!(engine.snapshot().wins_at_level, 2);

    let bet = engine.snapshot().level.min_bet;
    engine.place_bet_with_shoe(bet, winning_shoe()).unwrap();
    let round = engine.stand().unwrap();
    assert!(round.settlement.as_ref().unwrap().leveled_up);
    engine.new_round();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.level_index, 1);
    assert_eq!(snapshot.level.name, "Amateur");
    assert_eq!(snapshot.wins_at_level, 0);

    // A subsequent loss does not revert the level.
    lose_round(&mut engine);
    assert_eq!(engine.snapshot().level_index, 1);
    assert_eq!(engine.snapshot().wins_at_level, 0);
}

#[test]
fn loss_walks_level_progress_back_floored_at_zero() {
    let mut engine = Engine::new(1);

    lose_round(&mut engine);
    assert_eq!(engine.snapshot().wins_at_level, 0);

    win_round(&mut engine);
    win_round(&mut engine);
    assert_eq!(engine.snapshot().wins_at_level, 2);

    lose_round(&mut engine);
    assert_eq!(engine.snapshot().wins_at_level, 1);
    assert_eq!(engine.snapshot().win_streak, 0);
}

#[test]
fn high_roller_unlocks_exactly_once() {
    let mut engine = Engine::new(1);

    // 1000 -> 1500.
    engine.place_bet_with_shoe(500, winning_shoe()).unwrap();
    let round = engine.stand().unwrap();
    assert!(round.settlement.as_ref().unwrap().unlocked.is_empty());
    engine.new_round();

    // 1500 -> 2000: threshold reached.
    engine.place_bet_with_shoe(500, winning_shoe()).unwrap();
    let round = engine.stand().unwrap();
    assert_eq!(
        round.settlement.as_ref().unwrap().unlocked,
        vec![bjclimb::Achievement::HighRoller]
    );
    engine.new_round();

    // Balance stays above the threshold; no re-unlock.
    engine.place_bet_with_shoe(500, winning_shoe()).unwrap();
    let round = engine.stand().unwrap();
    assert!(round.settlement.as_ref().unwrap().unlocked.is_empty());
    engine.new_round();

    assert_eq!(
        engine.snapshot().achievements,
        &[bjclimb::Achievement::HighRoller]
    );
}

#[test]
fn hot_streak_unlocks_at_five_wins() {
    let mut engine = Engine::new(1);

    for _ in 0..4 {
        win_round(&mut engine);
    }
    assert_eq!(engine.snapshot().win_streak, 4);
    assert!(engine.snapshot().achievements.is_empty());

    let bet = engine.snapshot().level.min_bet;
    engine.place_bet_with_shoe(bet, winning_shoe()).unwrap();
    let round = engine.stand().unwrap();
    assert_eq!(
        round.settlement.as_ref().unwrap().unlocked,
        vec![bjclimb::Achievement::HotStreak]
    );
}

#[test]
fn wrong_phase_intents_are_rejected() {
    let mut engine = Engine::new(1);

    assert_eq!(engine.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(engine.stand().unwrap_err(), ActionError::InvalidState);

    engine.place_bet(50).unwrap();
    assert_eq!(engine.place_bet(50).unwrap_err(), BetError::InvalidState);

    engine.new_round();
    assert_eq!(engine.round().phase, Phase::Betting);
}

#[test]
fn new_round_mid_round_forfeits_the_bet() {
    let mut engine = Engine::new(1);
    engine.place_bet(50).unwrap();

    let round = engine.new_round();
    assert_eq!(round.phase, Phase::Betting);
    assert_eq!(round.bet, 0);
    assert!(round.player_hand.is_empty());
    assert_eq!(engine.snapshot().balance, 950);
}

#[test]
fn empty_shoe_is_surfaced_on_hit() {
    let mut engine = Engine::new(1);
    engine
        .place_bet_with_shoe(
            50,
            Shoe::from_draws(&[
                card(Suit::Hearts, 5),
                card(Suit::Diamonds, 6),
                card(Suit::Spades, 9),
            ]),
        )
        .unwrap();

    assert_eq!(engine.hit().unwrap_err(), ActionError::EmptyShoe);
}

#[test]
fn short_shoe_is_rejected_before_the_debit() {
    let mut engine = Engine::new(1);
    let err = engine
        .place_bet_with_shoe(
            50,
            Shoe::from_draws(&[card(Suit::Hearts, 5), card(Suit::Diamonds, 6)]),
        )
        .unwrap_err();

    assert_eq!(err, BetError::EmptyShoe);
    assert_eq!(engine.snapshot().balance, 1000);
    assert_eq!(engine.round().phase, Phase::Betting);
}

#[test]
fn dealer_policy_thresholds() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    for value in 2..17 {
        assert!(should_hit(value, 0.0, &mut rng));
    }
    for value in 19..=21 {
        assert!(!should_hit(value, 1.0, &mut rng));
    }
    for value in [17, 18] {
        assert!(!should_hit(value, 0.0, &mut rng));
        assert!(should_hit(value, 1.0, &mut rng));
    }
}

#[test]
fn aggressive_dealer_presses_17_and_18() {
    // With aggressiveness 1.0 the dealer must keep drawing through 17 and 18,
    // stopping only at 19 or above (or busting).
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut hits = 0;
    let mut value = 17;
    while should_hit(value, 1.0, &mut rng) && hits < 3 {
        hits += 1;
        value += 1;
    }
    assert_eq!(hits, 2);
    assert_eq!(value, 19);
}
