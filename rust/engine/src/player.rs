use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{Category, HandStrength};

/// Represents a player's position at the table in heads-up poker.
/// Button posts the small blind, BigBlind posts the big blind.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Position {
    /// Button position (small blind in heads-up)
    Button,
    /// Big blind position
    BigBlind,
}

/// A decision returned by the human or AI collaborator.
///
/// Raise carries the absolute amount to raise *to*, not the increment.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Action {
    /// Pass without betting, only valid when nothing is owed
    Check,
    /// Match the current bet
    Call,
    /// Raise the current bet to the given total
    Raise(u32),
    /// Put the whole stack in
    AllIn,
    /// Give up the hand
    Fold,
}

/// Per-seat state: chips behind, this street's commitment, hole cards and
/// the last showdown evaluation.
///
/// Chips leave the stack only through [`Player::bet`] and come back only as
/// refunds or pot awards.
#[derive(Debug, Clone)]
pub struct Player {
    /// Display name
    name: String,
    /// Chips not yet wagered this hand
    stack: u32,
    /// Chips moved to the pot during the current betting round
    round_pot_commitment: u32,
    /// Hole cards (exactly two once dealt)
    hole: [Option<Card>; 2],
    /// Category and best five from the last evaluation
    hand: Option<HandStrength>,
}

impl Player {
    pub fn new(name: impl Into<String>, stack: u32) -> Self {
        Self {
            name: name.into(),
            stack,
            round_pot_commitment: 0,
            hole: [None, None],
            hand: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn stack(&self) -> u32 {
        self.stack
    }
    pub fn round_pot_commitment(&self) -> u32 {
        self.round_pot_commitment
    }

    /// Stack plus this street's commitment: the most this seat can reach.
    pub fn total_chips(&self) -> u32 {
        self.stack + self.round_pot_commitment
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    /// Both hole cards, once dealt.
    pub fn hand(&self) -> Option<[Card; 2]> {
        match self.hole {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        }
    }

    pub fn deal_hand(&mut self, first: Card, second: Card) {
        self.hole = [Some(first), Some(second)];
        self.hand = None;
    }

    /// Category from the last evaluation.
    pub fn hand_rank(&self) -> Option<Category> {
        self.hand.map(|h| h.category)
    }

    /// Best five cards from the last evaluation.
    pub fn hand_played(&self) -> Option<[Card; 5]> {
        self.hand.map(|h| h.cards)
    }

    pub fn hand_strength(&self) -> Option<&HandStrength> {
        self.hand.as_ref()
    }

    pub(crate) fn set_hand_strength(&mut self, hs: HandStrength) {
        self.hand = Some(hs);
    }

    /// Moves `amount` from the stack into this street's commitment.
    pub(crate) fn bet(&mut self, seat: usize, amount: u32) -> Result<(), GameError> {
        if amount > self.stack {
            return Err(GameError::InsufficientChips {
                seat,
                amount,
                stack: self.stack,
            });
        }
        self.stack -= amount;
        self.round_pot_commitment += amount;
        Ok(())
    }

    /// Returns committed chips the opponent could not match.
    pub(crate) fn refund(&mut self, amount: u32) {
        let amount = amount.min(self.round_pot_commitment);
        self.round_pot_commitment -= amount;
        self.stack += amount;
    }

    pub(crate) fn add_chips(&mut self, amount: u32) {
        self.stack += amount;
    }

    pub(crate) fn reset_commitment(&mut self) {
        self.round_pot_commitment = 0;
    }

    /// Clears hole cards, commitment and evaluation ahead of a new hand.
    pub fn reset(&mut self) {
        self.hole = [None, None];
        self.round_pot_commitment = 0;
        self.hand = None;
    }
}
