use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{all_suits, Card, Rank};

/// The ten hand categories, weakest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three Of A Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four Of A Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };
        f.write_str(s)
    }
}

/// Result of evaluating a hand: its category and the five cards that make it.
///
/// `cards` lists the primary-rank cards before the kickers, each group high to
/// low. A wheel is listed as 5-4-3-2-A so its top card is the Five.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    pub cards: [Card; 5],
}

impl HandStrength {
    /// Rank values of the best five, in tiebreak order.
    pub fn ranks(&self) -> [u8; 5] {
        self.cards.map(|c| c.rank.value())
    }
}

/// Straight runs by their lowest card, strongest first. Ace last is the wheel.
const STRAIGHT_LOWS: [Rank; 10] = [
    Rank::Ten,
    Rank::Nine,
    Rank::Eight,
    Rank::Seven,
    Rank::Six,
    Rank::Five,
    Rank::Four,
    Rank::Three,
    Rank::Two,
    Rank::Ace,
];

/// Classifies the best five-card hand out of seven cards (2 hole + 5 board).
///
/// ```
/// use headsup_engine::cards::{Card, Rank as R, Suit as S};
/// use headsup_engine::hand::{evaluate_hand, Category};
///
/// let cards = [
///     Card::new(R::Ace, S::Spades),
///     Card::new(R::King, S::Spades),
///     Card::new(R::Queen, S::Spades),
///     Card::new(R::Jack, S::Spades),
///     Card::new(R::Ten, S::Spades),
///     Card::new(R::Two, S::Hearts),
///     Card::new(R::Three, S::Hearts),
/// ];
/// let hs = evaluate_hand(&cards);
/// assert_eq!(hs.category, Category::RoyalFlush);
/// assert_eq!(hs.cards[0], Card::new(R::Ace, S::Spades));
/// ```
pub fn evaluate_hand(cards: &[Card; 7]) -> HandStrength {
    evaluate_sorted(sorted_desc(cards))
}

/// Hole cards plus a complete five-card board.
pub fn evaluate_holdem(hole: &[Card; 2], board: &[Card; 5]) -> HandStrength {
    evaluate_hand(&[
        hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
    ])
}

/// Best five out of any 5 to 7 cards; `None` with fewer than five.
///
/// Used for partial boards (flop, turn) where only some of the seven cards
/// are known.
pub fn evaluate_cards(cards: &[Card]) -> Option<HandStrength> {
    if cards.len() < 5 {
        return None;
    }
    Some(evaluate_sorted(sorted_desc(cards)))
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.ranks().cmp(&b.ranks()),
        ord => ord,
    }
}

fn sorted_desc(cards: &[Card]) -> Vec<Card> {
    let mut v = cards.to_vec();
    v.sort_by(|a, b| b.cmp_rank(a));
    v
}

fn evaluate_sorted(sorted: Vec<Card>) -> HandStrength {
    if let Some(hs) = detect_straight_flush(&sorted) {
        return hs;
    }

    let groups = rank_groups(&sorted);

    if let Some(quad) = groups.iter().find(|g| g.len() == 4) {
        return made(Category::FourOfAKind, fill_kickers(quad.clone(), &sorted));
    }

    if let Some(five) = detect_full_house(&groups) {
        return made(Category::FullHouse, five);
    }

    if let Some(five) = detect_flush(&sorted) {
        return made(Category::Flush, five);
    }

    if let Some(five) = find_straight(&sorted) {
        return made(Category::Straight, five);
    }

    if let Some(trip) = groups.iter().find(|g| g.len() == 3) {
        return made(Category::ThreeOfAKind, fill_kickers(trip.clone(), &sorted));
    }

    let pairs: Vec<&Vec<Card>> = groups.iter().filter(|g| g.len() == 2).collect();
    if pairs.len() >= 2 {
        let mut both = pairs[0].clone();
        both.extend_from_slice(pairs[1]);
        return made(Category::TwoPair, fill_kickers(both, &sorted));
    }
    if let Some(pair) = pairs.first() {
        return made(Category::Pair, fill_kickers((*pair).clone(), &sorted));
    }

    made(Category::HighCard, fill_kickers(Vec::new(), &sorted))
}

fn made(category: Category, cards: [Card; 5]) -> HandStrength {
    HandStrength { category, cards }
}

// Groups cards of equal rank; `sorted` is descending so groups come out highest first.
fn rank_groups(sorted: &[Card]) -> Vec<Vec<Card>> {
    let mut groups: Vec<Vec<Card>> = Vec::new();
    for &c in sorted {
        match groups.last_mut() {
            Some(g) if g[0].rank == c.rank => g.push(c),
            _ => groups.push(vec![c]),
        }
    }
    groups
}

// Tops `primary` up to five cards with the highest cards not already used.
fn fill_kickers(mut primary: Vec<Card>, sorted: &[Card]) -> [Card; 5] {
    for &c in sorted {
        if primary.len() == 5 {
            break;
        }
        if !primary.contains(&c) {
            primary.push(c);
        }
    }
    first_five(&primary)
}

// Callers always hold at least five cards here.
fn first_five(v: &[Card]) -> [Card; 5] {
    [v[0], v[1], v[2], v[3], v[4]]
}

fn detect_straight_flush(sorted: &[Card]) -> Option<HandStrength> {
    let mut best: Option<[Card; 5]> = None;
    for suit in all_suits() {
        let suited: Vec<Card> = sorted.iter().copied().filter(|c| c.suit == suit).collect();
        if suited.len() < 5 {
            continue;
        }
        if let Some(run) = find_straight(&suited) {
            let higher = best.is_none_or(|b| run[0].cmp_rank(&b[0]).is_gt());
            if higher {
                best = Some(run);
            }
        }
    }
    best.map(|run| {
        let category = if run[0].rank == Rank::Ace {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
        made(category, run)
    })
}

fn detect_full_house(groups: &[Vec<Card>]) -> Option<[Card; 5]> {
    let trip = groups.iter().find(|g| g.len() >= 3)?;
    let pair = groups
        .iter()
        .find(|g| g.len() >= 2 && g[0].rank != trip[0].rank)?;
    let mut five = trip[..3].to_vec();
    five.extend_from_slice(&pair[..2]);
    Some(first_five(&five))
}

fn detect_flush(sorted: &[Card]) -> Option<[Card; 5]> {
    all_suits().into_iter().find_map(|suit| {
        let suited: Vec<Card> = sorted.iter().copied().filter(|c| c.suit == suit).collect();
        (suited.len() >= 5).then(|| first_five(&suited))
    })
}

/// Highest run of five consecutive ranks, listed top card first.
fn find_straight(cards: &[Card]) -> Option<[Card; 5]> {
    let mut by_rank: [Option<Card>; 15] = [None; 15];
    for &c in cards {
        by_rank[c.rank.value() as usize].get_or_insert(c);
    }

    STRAIGHT_LOWS.iter().find_map(|&low| {
        let mut run = Vec::with_capacity(5);
        let mut rank = low;
        for _ in 0..5 {
            run.push(by_rank[rank.value() as usize]?);
            rank = rank.successor();
        }
        run.reverse();
        Some(first_five(&run))
    })
}
