use thiserror::Error;

use crate::cards::Card;

/// Contract violations raised by the engine's primitives.
///
/// None of these are recoverable game situations; they mean the caller asked
/// for something the current state cannot honor, and the engine refused it
/// without mutating anything.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Seat {seat} does not exist at a heads-up table")]
    InvalidSeat { seat: usize },
    #[error("Seat {seat} cannot put {amount} chips in with a stack of {stack}")]
    InsufficientChips { seat: usize, amount: u32, stack: u32 },
    #[error("Board cannot hold {requested} cards (maximum 5)")]
    InvalidBoardSize { requested: usize },
    #[error("No hand has been dealt")]
    HandNotDealt,
    #[error("Hands have not been evaluated against a full board")]
    HandNotEvaluated,
    #[error("The pot for this hand was already awarded")]
    PotAlreadyAwarded,
    #[error("Deck is exhausted")]
    DeckExhausted,
    #[error("Card {card} is placed more than once")]
    DuplicateCard { card: Card },
    #[error("Invalid raise to {amount}: must be between {minimum} and {maximum}")]
    InvalidRaise {
        amount: u32,
        minimum: u32,
        maximum: u32,
    },
    #[error("Cannot check while {to_call} chips are owed")]
    CannotCheck { to_call: u32 },
    #[error("Action is not available in the current state")]
    InvalidAction,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse table config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid table config: {0}")]
    Invalid(String),
}
