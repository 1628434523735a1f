use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A shuffled bag of the 52 cards supporting draw without replacement.
///
/// Each [`crate::engine::Engine`] owns its own deck; decks are never shared
/// between sessions.
///
/// ```
/// use headsup_engine::deck::Deck;
///
/// let mut a = Deck::new_with_seed(42);
/// let mut b = Deck::new_with_seed(42);
/// assert_eq!(a.draw(), b.draw());
/// assert_eq!(a.remaining(), 51);
/// ```
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Deck seeded from the operating system, already shuffled.
    pub fn new() -> Self {
        Self::from_rng(ChaCha20Rng::from_os_rng())
    }

    /// Deck with a reproducible order for the given seed, already shuffled.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha20Rng) -> Self {
        let mut deck = Self {
            cards: full_deck(),
            position: 0,
            rng,
        };
        deck.shuffle();
        deck
    }

    /// Restores all 52 cards and shuffles them with the deck's own RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_excluding(&[]);
    }

    /// Reshuffles the full deck minus `placed`, the cards already in play.
    ///
    /// ```
    /// use headsup_engine::cards::{Card, Rank, Suit};
    /// use headsup_engine::deck::Deck;
    ///
    /// let ace = Card::new(Rank::Ace, Suit::Spades);
    /// let mut deck = Deck::new_with_seed(3);
    /// deck.shuffle_excluding(&[ace]);
    /// assert_eq!(deck.remaining(), 51);
    /// assert!(std::iter::from_fn(|| deck.draw()).all(|c| c != ace));
    /// ```
    pub fn shuffle_excluding(&mut self, placed: &[Card]) {
        self.cards = full_deck();
        self.cards.retain(|c| !placed.contains(c));
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Removes and returns the current top card.
    pub fn draw(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
