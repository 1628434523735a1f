//! # headsup-engine: Heads-Up Hold'em Rules Engine
//!
//! Owns the deck, deals cards, classifies the best five-card hand out of each
//! player's seven, resolves showdown ties, and keeps a chip ledger for a
//! two-player pot including the short-stack all-in cases.
//!
//! The engine is synchronous and single-owner. It never calls out to a human
//! or AI; an orchestrator asks a decision provider for an [`player::Action`]
//! and feeds it back through [`engine::Engine`]'s primitives.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Seeded ChaCha20 shuffling with draw-without-replacement
//! - [`engine`] - The betting/table engine
//! - [`game`] - Round phases, showdown winners, decision snapshots
//! - [`hand`] - Best-five evaluation and hand comparison
//! - [`player`] - Per-seat state and the Action type
//! - [`rules`] - Action validation for orchestrators
//! - [`config`] - Table configuration (buy-in, blinds, seed)
//! - [`errors`] - Error types
//!
//! ## Quick Start
//!
//! ```rust
//! use headsup_engine::cards::{Card, Rank, Suit};
//! use headsup_engine::hand::{evaluate_hand, Category};
//!
//! let cards = [
//!     Card::new(Rank::King, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::King, Suit::Diamonds),
//!     Card::new(Rank::King, Suit::Clubs),
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::Two, Suit::Diamonds),
//!     Card::new(Rank::Three, Suit::Clubs),
//! ];
//!
//! let strength = evaluate_hand(&cards);
//! assert_eq!(strength.category, Category::FourOfAKind);
//! assert_eq!(strength.cards[4].rank, Rank::Ace);
//! ```
//!
//! ## Playing a hand
//!
//! ```rust
//! use headsup_engine::config::TableConfig;
//! use headsup_engine::engine::Engine;
//!
//! let mut engine = Engine::new(&TableConfig { seed: Some(42), ..TableConfig::default() }).unwrap();
//! engine.new_round().unwrap();
//! engine.post_blinds().unwrap();
//! engine.player_all_in_raise(engine.button()).unwrap();
//! engine.player_call(1 - engine.button()).unwrap();
//!
//! let winner = engine.showdown().unwrap();
//! engine.player_win(winner).unwrap();
//! let total: u32 = engine.players().iter().map(|p| p.stack()).sum();
//! assert_eq!(total, 2000);
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod player;
pub mod rules;
