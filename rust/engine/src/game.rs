use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::player::Position;

/// Phase of the current hand. The engine stores it; the orchestrator moves it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Round {
    /// Hole cards dealt, no board
    PreFlop,
    /// 3 community cards
    Flop,
    /// 4th community card
    Turn,
    /// 5th community card
    River,
    /// Hands compared, pot awarded
    Showdown,
}

impl Round {
    /// The phase that follows; Showdown stays Showdown.
    pub fn next(self) -> Round {
        match self {
            Round::PreFlop => Round::Flop,
            Round::Flop => Round::Turn,
            Round::Turn => Round::River,
            Round::River | Round::Showdown => Round::Showdown,
        }
    }

    /// How many board cards are out once this phase is dealt.
    pub fn board_size(self) -> usize {
        match self {
            Round::PreFlop => 0,
            Round::Flop => 3,
            Round::Turn => 4,
            Round::River | Round::Showdown => 5,
        }
    }
}

/// Showdown outcome: one seat takes the pot, or the tied seats split it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Winner {
    Seat(usize),
    Split(Vec<usize>),
}

impl From<usize> for Winner {
    fn from(seat: usize) -> Self {
        Winner::Seat(seat)
    }
}

impl From<Vec<usize>> for Winner {
    fn from(seats: Vec<usize>) -> Self {
        Winner::Split(seats)
    }
}

/// Read-only view of the table from one seat, handed to a decision provider.
///
/// Carries no opponent hole cards.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seat: usize,
    pub position: Position,
    pub small_blind: u32,
    pub big_blind: u32,
    pub round: Round,
    pub hole_cards: Option<[Card; 2]>,
    pub board: Vec<Card>,
    pub pot: u32,
    pub current_bet: u32,
    pub stack: u32,
    pub commitment: u32,
    pub opponent_stack: u32,
    pub opponent_commitment: u32,
    /// Chips owed to stay in the hand
    pub to_call: u32,
    pub min_raise: u32,
    pub max_raise: u32,
}

impl Snapshot {
    pub fn total_chips(&self) -> u32 {
        self.stack + self.commitment
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
