use headsup_engine::config::{TableConfig, MAX_BUY_IN};
use headsup_engine::engine::Engine;
use headsup_engine::errors::{ConfigError, GameError};
use headsup_engine::player::Action;

fn engine_with(buy_in: u32) -> Engine {
    let mut eng = Engine::new(&TableConfig {
        buy_in,
        seed: Some(21),
        ..TableConfig::default()
    })
    .unwrap();
    eng.new_round().unwrap();
    eng
}

fn chips_in_play(eng: &Engine) -> u32 {
    eng.players().iter().map(|p| p.stack()).sum::<u32>() + eng.current_pot()
}

/// Moves chips from seat 0 to seat 1 through a won pot so stacks differ.
fn skew_stacks(eng: &mut Engine, amount: u32) {
    eng.player_raise(0, amount).unwrap();
    eng.player_win(1).unwrap();
    eng.new_round().unwrap();
}

#[test]
fn blinds_go_into_the_pot() {
    let mut eng = engine_with(1000);
    let sb = eng.button();
    eng.post_blinds().unwrap();
    assert_eq!(eng.current_pot(), 15);
    assert_eq!(eng.current_bet(), 10);
    assert_eq!(eng.players()[sb].round_pot_commitment(), 5);
    assert_eq!(eng.players()[1 - sb].round_pot_commitment(), 10);
    assert_eq!(eng.current_action(), sb);
    assert_eq!(chips_in_play(&eng), 2000);
}

#[test]
fn call_bets_only_the_difference() {
    let mut eng = engine_with(1000);
    eng.player_raise(0, 40).unwrap();
    eng.player_raise(1, 100).unwrap();
    eng.player_call(0).unwrap();
    assert_eq!(eng.players()[0].round_pot_commitment(), 100);
    assert_eq!(eng.players()[0].stack(), 900);
    assert_eq!(eng.current_pot(), 200);
}

#[test]
fn raise_targets_an_absolute_level() {
    let mut eng = engine_with(1000);
    eng.player_raise(0, 50).unwrap();
    eng.player_raise(1, 150).unwrap();
    eng.player_raise(0, 400).unwrap();
    assert_eq!(eng.current_bet(), 400);
    assert_eq!(eng.players()[0].round_pot_commitment(), 400);
    assert_eq!(eng.players()[0].stack(), 600);
    assert_eq!(eng.current_pot(), 550);
}

#[test]
fn raise_then_other_seat_min_is_double() {
    let mut eng = engine_with(1000);
    eng.player_raise(0, 70).unwrap();
    let (min, _) = eng.return_min_max_raise(1).unwrap();
    assert_eq!(min, 140);
}

#[test]
fn max_raise_is_bounded_by_the_opponent() {
    let mut eng = engine_with(1000);
    skew_stacks(&mut eng, 300);
    // seat 0 now has 700, seat 1 has 1300
    eng.player_raise(0, 100).unwrap();
    let (_, max_for_big_stack) = eng.return_min_max_raise(1).unwrap();
    assert_eq!(max_for_big_stack, 700);
    let (_, max_for_short_stack) = eng.return_min_max_raise(0).unwrap();
    assert_eq!(max_for_short_stack, 1300);
}

#[test]
fn short_call_refunds_the_excess_and_conserves_chips() {
    let mut eng = engine_with(1000);
    skew_stacks(&mut eng, 600);
    // seat 0: 400, seat 1: 1600
    eng.player_raise(0, 50).unwrap();
    eng.player_raise(1, 900).unwrap();
    let before = chips_in_play(&eng);

    eng.player_call(0).unwrap();

    assert_eq!(eng.players()[0].stack(), 0);
    assert_eq!(eng.players()[0].round_pot_commitment(), 400);
    assert_eq!(eng.current_bet(), 400);
    assert_eq!(eng.players()[1].round_pot_commitment(), 400);
    assert_eq!(eng.players()[1].stack(), 1600 - 400);
    assert_eq!(eng.current_pot(), 800);
    assert_eq!(chips_in_play(&eng), before);
}

#[test]
fn all_in_call_with_enough_chips_is_a_plain_call() {
    let mut eng = engine_with(1000);
    eng.player_raise(0, 200).unwrap();
    eng.player_all_in_call(1).unwrap();
    assert_eq!(eng.players()[1].stack(), 800);
    assert_eq!(eng.current_bet(), 200);
    assert_eq!(eng.current_pot(), 400);
}

#[test]
fn all_in_raise_commits_the_whole_stack() {
    let mut eng = engine_with(1000);
    eng.player_raise(0, 30).unwrap();
    eng.player_all_in_raise(0).unwrap();
    assert_eq!(eng.players()[0].stack(), 0);
    assert_eq!(eng.current_bet(), 1000);
    assert_eq!(eng.current_pot(), 1000);
}

#[test]
fn short_big_blind_settles_against_the_small_blind() {
    let mut eng = Engine::new(&TableConfig {
        buy_in: 1000,
        small_blind: 50,
        big_blind: 100,
        seed: Some(3),
    })
    .unwrap();
    eng.new_round().unwrap();
    // leave seat 0 with 30 chips, then bring the button back to seat 1
    eng.player_raise(0, 970).unwrap();
    eng.player_win(1).unwrap();
    eng.new_round().unwrap();
    assert_eq!(eng.button(), 0);
    eng.new_round().unwrap();
    assert_eq!(eng.button(), 1);

    eng.post_blinds().unwrap();
    assert_eq!(eng.players()[0].stack(), 0);
    assert_eq!(eng.current_bet(), 30);
    assert_eq!(eng.players()[1].round_pot_commitment(), 30);
    assert_eq!(eng.current_pot(), 60);
    assert_eq!(chips_in_play(&eng), 2000);
}

#[test]
fn overbetting_is_a_contract_error_and_changes_nothing() {
    let mut eng = engine_with(100);
    let err = eng.player_bet(0, 101).unwrap_err();
    assert_eq!(
        err,
        GameError::InsufficientChips {
            seat: 0,
            amount: 101,
            stack: 100
        }
    );
    assert!(eng.player_raise(1, 500).is_err());
    assert_eq!(eng.current_bet(), 0);
    assert_eq!(eng.current_pot(), 0);
    assert_eq!(chips_in_play(&eng), 200);
}

#[test]
fn raising_below_own_commitment_is_rejected() {
    let mut eng = engine_with(1000);
    eng.player_raise(0, 100).unwrap();
    assert!(matches!(
        eng.player_raise(0, 50),
        Err(GameError::InvalidRaise { .. })
    ));
    assert_eq!(eng.current_bet(), 100);
}

#[test]
fn fold_awards_the_pot_to_the_opponent() {
    let mut eng = engine_with(1000);
    eng.post_blinds().unwrap();
    let button = eng.button();
    eng.apply_action(button, Action::Fold).unwrap();
    assert_eq!(eng.players()[button].stack(), 995);
    assert_eq!(eng.players()[1 - button].stack(), 1005);
    assert_eq!(eng.stack_deltas()[button], -5);
    assert_eq!(eng.stack_deltas()[1 - button], 5);
}

#[test]
fn check_with_chips_owed_is_rejected() {
    let mut eng = engine_with(1000);
    eng.post_blinds().unwrap();
    let button = eng.button();
    assert_eq!(
        eng.apply_action(button, Action::Check),
        Err(GameError::CannotCheck { to_call: 5 })
    );
    eng.apply_action(button, Action::Call).unwrap();
    eng.apply_action(1 - button, Action::Check).unwrap();
    assert_eq!(eng.current_pot(), 20);
}

#[test]
fn all_in_action_against_a_bigger_bet_calls_short() {
    let mut eng = engine_with(1000);
    skew_stacks(&mut eng, 500);
    // seat 0: 500, seat 1: 1500
    eng.apply_action(1, Action::Raise(800)).unwrap();
    eng.apply_action(0, Action::AllIn).unwrap();
    assert_eq!(eng.current_bet(), 500);
    assert_eq!(eng.players()[1].stack(), 1000);
    assert_eq!(eng.current_pot(), 1000);
}

#[test]
fn largest_buy_in_plays_all_in_without_overflow() {
    let cfg = TableConfig::from_toml_str(&format!("buy_in = {MAX_BUY_IN}\nseed = 4")).unwrap();
    let mut eng = Engine::new(&cfg).unwrap();
    eng.new_round().unwrap();
    eng.player_all_in_raise(0).unwrap();
    eng.player_call(1).unwrap();
    assert_eq!(eng.current_pot(), MAX_BUY_IN * 2);
    assert_eq!(chips_in_play(&eng), MAX_BUY_IN * 2);

    let winner = eng.showdown().unwrap();
    eng.player_win(winner).unwrap();
    let stacks: u32 = eng.players().iter().map(|p| p.stack()).sum();
    assert_eq!(stacks, MAX_BUY_IN * 2);
}

#[test]
fn engine_refuses_a_config_that_fails_validation() {
    let inverted = TableConfig {
        small_blind: 20,
        big_blind: 10,
        ..TableConfig::default()
    };
    assert!(matches!(Engine::new(&inverted), Err(ConfigError::Invalid(_))));

    let oversized = TableConfig {
        buy_in: MAX_BUY_IN + 1,
        ..TableConfig::default()
    };
    assert!(Engine::new(&oversized).is_err());
}
