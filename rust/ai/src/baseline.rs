//! Rule-based opponent used as a sparring partner and for simulations.
//!
//! Preflop it rates the two hole cards from a fixed table; once the flop is
//! out it rates the evaluator's category for hole cards plus board. Calls go
//! through a pot-odds gate and raises are sized inside the legal window, so
//! every answer passes [`validate_action`].

use headsup_engine::cards::{Card, Rank};
use headsup_engine::game::{Round, Snapshot};
use headsup_engine::hand::{compare_hands, evaluate_cards, Category};
use headsup_engine::player::Action;
use headsup_engine::rules::validate_action;
use tracing::debug;

use crate::DecisionProvider;

/// Deterministic baseline strategy.
///
/// - strength 9-10: bet or raise for value, call when a raise does not fit
/// - strength 7-8: bet when checked to, call otherwise
/// - strength 3-6: check, call when the price is right
/// - weaker: check or fold
///
/// # Example
///
/// ```rust
/// use headsup_ai::baseline::BaselineAI;
/// use headsup_ai::DecisionProvider;
/// use headsup_engine::config::TableConfig;
/// use headsup_engine::engine::Engine;
///
/// let ai = BaselineAI::new();
/// let mut engine = Engine::new(&TableConfig { seed: Some(7), ..TableConfig::default() }).unwrap();
/// engine.new_round().unwrap();
/// engine.post_blinds().unwrap();
///
/// let snapshot = engine.snapshot(engine.button()).unwrap();
/// let _action = ai.decide(&snapshot);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }

    /// Preflop strength on a 0-10 scale.
    ///
    /// - 9-10: AA-JJ, AKs
    /// - 7-8: TT-99, AK, AQ, KQs
    /// - 5-6: 88-77, AJ, KQ, suited broadway, high suited connectors
    /// - 3-4: small pairs, weak aces, low suited connectors
    /// - 0-2: the rest
    fn preflop_strength(hole: [Card; 2]) -> u8 {
        let (a, b) = (hole[0].rank.value(), hole[1].rank.value());
        let (high, low) = (a.max(b), a.min(b));
        let suited = hole[0].suit == hole[1].suit;

        if high == low {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        let (base, suited_bonus) = match (high, low) {
            (14, 13) => (8, 2),
            (14, 12) => (7, 1),
            (14, 11) => (6, 1),
            (14, 10) => (5, 1),
            (14, _) => (4, 1),
            (13, 12) => (6, 1),
            (13, 11) | (12, 11) => (5, 1),
            (13, 10) | (12, 10) => (4, 1),
            _ if suited && high - low <= 2 => (if high >= 9 { 5 } else { 4 }, 0),
            _ if low >= 9 => (4, 0),
            _ => (2, 0),
        };
        base + if suited { suited_bonus } else { 0 }
    }

    /// Postflop strength on a 0-10 scale, `None` before the flop.
    ///
    /// A hand that only plays the board is rated two points lower.
    fn postflop_strength(hole: [Card; 2], board: &[Card]) -> Option<u8> {
        if board.len() < 3 {
            return None;
        }
        let mut cards = hole.to_vec();
        cards.extend_from_slice(board);
        let strength = evaluate_cards(&cards)?;

        let base: u8 = match strength.category {
            Category::HighCard => 1,
            Category::Pair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush | Category::RoyalFlush => 10,
        };
        let top_boost = u8::from(strength.cards[0].rank >= Rank::Queen);
        let mut rating = (base + top_boost).min(10);

        if let Some(board_only) = evaluate_cards(board) {
            if compare_hands(&strength, &board_only).is_eq() {
                rating = rating.saturating_sub(2);
            }
        }
        Some(rating)
    }

    /// Share of the final pot this call would pay for.
    fn call_price(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 0.0;
        }
        to_call as f32 / (pot + to_call) as f32
    }

    fn strength(snapshot: &Snapshot, hole: [Card; 2]) -> u8 {
        match snapshot.round {
            Round::PreFlop => Self::preflop_strength(hole),
            _ => Self::postflop_strength(hole, &snapshot.board)
                .unwrap_or_else(|| Self::preflop_strength(hole)),
        }
    }

    /// Raise target `extra` above the current bet, pulled into the legal
    /// window. `None` when no legal raise exists.
    fn raise_to(snapshot: &Snapshot, extra: u32) -> Option<Action> {
        let minimum = snapshot.min_raise.max(snapshot.big_blind);
        let maximum = snapshot.max_raise.min(snapshot.total_chips());
        if minimum > maximum {
            return None;
        }
        let target = snapshot.current_bet.saturating_add(extra);
        Some(Action::Raise(target.clamp(minimum, maximum)))
    }

    fn choose(snapshot: &Snapshot, strength: u8) -> Action {
        let pot = snapshot.pot;
        let to_call = snapshot.to_call;

        if to_call == 0 {
            return match strength {
                9..=10 => Self::raise_to(snapshot, pot * 2 / 3).unwrap_or(Action::Check),
                7..=8 => Self::raise_to(snapshot, pot / 2).unwrap_or(Action::Check),
                _ => Action::Check,
            };
        }

        // calling would put the whole stack in
        if to_call >= snapshot.stack {
            return if strength >= 7 { Action::Call } else { Action::Fold };
        }

        let price = Self::call_price(pot, to_call);
        match strength {
            9..=10 => Self::raise_to(snapshot, pot / 2).unwrap_or(Action::Call),
            7..=8 => Action::Call,
            5..=6 if price <= 0.34 => Action::Call,
            3..=4 if price <= 0.25 => Action::Call,
            _ => Action::Fold,
        }
    }
}

impl DecisionProvider for BaselineAI {
    fn decide(&self, snapshot: &Snapshot) -> Action {
        let passive = if snapshot.to_call == 0 {
            Action::Check
        } else {
            Action::Fold
        };
        let Some(hole) = snapshot.hole_cards else {
            return passive;
        };

        let strength = Self::strength(snapshot, hole);
        let choice = Self::choose(snapshot, strength);
        let action = validate_action(snapshot, choice).unwrap_or(passive);
        debug!(seat = snapshot.seat, strength, ?action, "baseline decision");
        action
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headsup_engine::cards::Suit;
    use headsup_engine::player::Position;

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn snapshot(hole: [Card; 2], board: Vec<Card>, to_call: u32) -> Snapshot {
        let round = match board.len() {
            0 => Round::PreFlop,
            3 => Round::Flop,
            4 => Round::Turn,
            _ => Round::River,
        };
        Snapshot {
            seat: 0,
            position: Position::Button,
            small_blind: 5,
            big_blind: 10,
            round,
            hole_cards: Some(hole),
            board,
            pot: 100 + to_call,
            current_bet: to_call,
            stack: 900,
            commitment: 0,
            opponent_stack: 900 - to_call,
            opponent_commitment: to_call,
            to_call,
            min_raise: to_call * 2,
            max_raise: 900,
        }
    }

    #[test]
    fn test_baseline_ai_name() {
        assert_eq!(BaselineAI::new().name(), "BaselineAI");
        assert_eq!(BaselineAI.name(), "BaselineAI");
    }

    #[test]
    fn test_preflop_strength_premium_pairs() {
        let aces = [c(Rank::Ace, Suit::Hearts), c(Rank::Ace, Suit::Spades)];
        assert_eq!(BaselineAI::preflop_strength(aces), 10);
        let kings = [c(Rank::King, Suit::Hearts), c(Rank::King, Suit::Spades)];
        assert_eq!(BaselineAI::preflop_strength(kings), 10);
    }

    #[test]
    fn test_preflop_strength_ace_king() {
        let suited = [c(Rank::Ace, Suit::Hearts), c(Rank::King, Suit::Hearts)];
        assert_eq!(BaselineAI::preflop_strength(suited), 10);
        let offsuit = [c(Rank::King, Suit::Spades), c(Rank::Ace, Suit::Hearts)];
        assert_eq!(BaselineAI::preflop_strength(offsuit), 8);
    }

    #[test]
    fn test_preflop_strength_weak_and_connectors() {
        let weak = [c(Rank::Seven, Suit::Hearts), c(Rank::Two, Suit::Spades)];
        assert!(BaselineAI::preflop_strength(weak) <= 3);
        let connectors = [c(Rank::Nine, Suit::Hearts), c(Rank::Eight, Suit::Hearts)];
        assert!((4..=6).contains(&BaselineAI::preflop_strength(connectors)));
    }

    #[test]
    fn test_call_price() {
        assert!((BaselineAI::call_price(100, 50) - 0.333).abs() < 0.01);
        assert_eq!(BaselineAI::call_price(100, 0), 0.0);
    }

    #[test]
    fn test_postflop_needs_a_flop() {
        let hole = [c(Rank::Ace, Suit::Hearts), c(Rank::Ace, Suit::Spades)];
        assert_eq!(BaselineAI::postflop_strength(hole, &[]), None);
        let flop = [
            c(Rank::Ace, Suit::Diamonds),
            c(Rank::Seven, Suit::Clubs),
            c(Rank::Two, Suit::Hearts),
        ];
        assert_eq!(BaselineAI::postflop_strength(hole, &flop), Some(7));
    }

    #[test]
    fn test_playing_the_board_is_discounted() {
        let hole = [c(Rank::Two, Suit::Hearts), c(Rank::Three, Suit::Clubs)];
        let board = [
            c(Rank::Ace, Suit::Hearts),
            c(Rank::King, Suit::Spades),
            c(Rank::Queen, Suit::Clubs),
            c(Rank::Jack, Suit::Diamonds),
            c(Rank::Ten, Suit::Hearts),
        ];
        // board straight, ace high: 7 + 1, less 2
        assert_eq!(BaselineAI::postflop_strength(hole, &board), Some(6));
    }

    #[test]
    fn test_no_hole_cards_is_passive() {
        let ai = BaselineAI::new();
        let mut snap = snapshot(
            [c(Rank::Ace, Suit::Hearts), c(Rank::Ace, Suit::Spades)],
            vec![],
            0,
        );
        snap.hole_cards = None;
        assert_eq!(ai.decide(&snap), Action::Check);
        snap.to_call = 20;
        assert_eq!(ai.decide(&snap), Action::Fold);
    }

    #[test]
    fn test_strong_hand_raises_inside_the_window() {
        let ai = BaselineAI::new();
        let snap = snapshot(
            [c(Rank::Ace, Suit::Hearts), c(Rank::Ace, Suit::Spades)],
            vec![],
            20,
        );
        match ai.decide(&snap) {
            Action::Raise(amount) => {
                assert!(amount >= snap.min_raise && amount <= snap.max_raise);
            }
            other => panic!("expected a raise, got {other:?}"),
        }
    }

    #[test]
    fn test_weak_hand_folds_to_a_big_bet() {
        let ai = BaselineAI::new();
        let snap = snapshot(
            [c(Rank::Seven, Suit::Hearts), c(Rank::Two, Suit::Spades)],
            vec![],
            300,
        );
        assert_eq!(ai.decide(&snap), Action::Fold);
    }

    #[test]
    fn test_weak_hand_checks_when_free() {
        let ai = BaselineAI::new();
        let snap = snapshot(
            [c(Rank::Seven, Suit::Hearts), c(Rank::Two, Suit::Spades)],
            vec![],
            0,
        );
        assert_eq!(ai.decide(&snap), Action::Check);
    }

    #[test]
    fn test_no_legal_raise_falls_back_to_call() {
        let ai = BaselineAI::new();
        let mut snap = snapshot(
            [c(Rank::Ace, Suit::Hearts), c(Rank::Ace, Suit::Spades)],
            vec![],
            200,
        );
        // opponent is all in for 200
        snap.opponent_stack = 0;
        snap.max_raise = 200;
        assert_eq!(ai.decide(&snap), Action::Call);
    }
}
