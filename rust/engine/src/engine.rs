use std::cmp::Ordering;
use std::collections::HashSet;

use tracing::{debug, info, warn};

use crate::cards::{join_cards, Card};
use crate::config::TableConfig;
use crate::deck::Deck;
use crate::errors::{ConfigError, GameError};
use crate::game::{Round, Snapshot, Winner};
use crate::hand::{compare_hands, evaluate_holdem, HandStrength};
use crate::player::{Action, Player, Position};

/// Heads-up betting and table engine: two players, the deck, the board, the
/// pot and the legal-bet arithmetic across streets.
///
/// The engine exposes primitives and never sequences a hand on its own; an
/// orchestrator calls them in response to decisions. Each game owns one
/// `Engine`; nothing in it is shared between games.
///
/// # Examples
///
/// ```
/// use headsup_engine::config::TableConfig;
/// use headsup_engine::engine::Engine;
///
/// let cfg = TableConfig { seed: Some(12345), ..TableConfig::default() };
/// let mut engine = Engine::new(&cfg).unwrap();
/// engine.new_round().unwrap();
/// engine.post_blinds().unwrap();
/// assert_eq!(engine.current_pot(), 15);
///
/// // button completes, big blind checks, flop comes
/// engine.player_call(engine.button()).unwrap();
/// engine.reset_betting();
/// engine.deal_board(3).unwrap();
/// assert_eq!(engine.board().len(), 3);
/// assert_eq!(engine.current_pot(), 20);
/// ```
#[derive(Debug)]
pub struct Engine {
    /// The deck used for dealing cards
    deck: Deck,
    /// Exactly two seats
    players: [Player; 2],
    small_blind: u32,
    big_blind: u32,
    starting_stack: u32,
    /// Community cards (0 to 5)
    board: Vec<Card>,
    /// Chips in the middle for this hand, across all streets
    current_pot: u32,
    /// Commitment level every seat must reach this street
    current_bet: u32,
    /// Seat on the button (small blind)
    button: usize,
    round: Round,
    /// Seat whose decision is awaited
    current_action: usize,
    pot_awarded: bool,
    hand_start_stacks: [u32; 2],
}

fn other(seat: usize) -> usize {
    1 - seat
}

impl Engine {
    /// Builds a table from a config, refusing one that fails
    /// [`TableConfig::validate`].
    pub fn new(config: &TableConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let deck = config.seed.map_or_else(Deck::new, Deck::new_with_seed);
        let players = [
            Player::new("Player 1", config.buy_in),
            Player::new("Player 2", config.buy_in),
        ];
        Ok(Self {
            deck,
            players,
            small_blind: config.small_blind,
            big_blind: config.big_blind,
            starting_stack: config.buy_in,
            board: Vec::with_capacity(5),
            current_pot: 0,
            current_bet: 0,
            button: 0,
            round: Round::PreFlop,
            current_action: 0,
            pot_awarded: false,
            hand_start_stacks: [config.buy_in; 2],
        })
    }

    fn check_seat(seat: usize) -> Result<usize, GameError> {
        if seat < 2 {
            Ok(seat)
        } else {
            Err(GameError::InvalidSeat { seat })
        }
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, seat: usize) -> Result<&Player, GameError> {
        Ok(&self.players[Self::check_seat(seat)?])
    }

    pub fn set_player_name(&mut self, seat: usize, name: impl Into<String>) -> Result<(), GameError> {
        self.players[Self::check_seat(seat)?].set_name(name);
        Ok(())
    }

    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn current_pot(&self) -> u32 {
        self.current_pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn button(&self) -> usize {
        self.button
    }
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn current_action(&self) -> usize {
        self.current_action
    }
    pub fn small_blind(&self) -> u32 {
        self.small_blind
    }
    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }
    pub fn starting_stack(&self) -> u32 {
        self.starting_stack
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn set_round(&mut self, round: Round) {
        self.round = round;
    }

    pub fn set_current_action(&mut self, seat: usize) -> Result<(), GameError> {
        self.current_action = Self::check_seat(seat)?;
        Ok(())
    }

    /// Passes the turn to the other seat.
    pub fn advance_action(&mut self) {
        self.current_action = other(self.current_action);
    }

    /// Board in short form, e.g. `AS, 10H, 2C`.
    pub fn return_community_cards(&self) -> String {
        join_cards(&self.board)
    }

    pub fn return_player_stack(&self, seat: usize) -> Result<u32, GameError> {
        Ok(self.player(seat)?.stack())
    }

    pub fn return_player_hand_str(&self, seat: usize) -> Result<String, GameError> {
        let hole = self.player(seat)?.hole_cards();
        Ok(join_cards(hole.iter().flatten()))
    }

    /// Starts a new hand: fresh shuffle, two hole cards each, empty board,
    /// zero pot and bet, button moved to the other seat who also acts first.
    pub fn new_round(&mut self) -> Result<(), GameError> {
        self.deck.shuffle();
        self.board.clear();
        for p in &mut self.players {
            p.reset();
            let first = self.deck.draw().ok_or(GameError::DeckExhausted)?;
            let second = self.deck.draw().ok_or(GameError::DeckExhausted)?;
            p.deal_hand(first, second);
        }
        self.current_pot = 0;
        self.current_bet = 0;
        self.button = other(self.button);
        self.current_action = self.button;
        self.round = Round::PreFlop;
        self.pot_awarded = false;
        self.hand_start_stacks = [self.players[0].stack(), self.players[1].stack()];
        info!(
            button = self.button,
            stack0 = self.players[0].stack(),
            stack1 = self.players[1].stack(),
            "new round"
        );
        Ok(())
    }

    /// Replaces the dealt cards with known ones, e.g. to replay a hand.
    ///
    /// The deck is reshuffled without the placed cards, so later draws never
    /// repeat them. Chips, pot and button are untouched. Previous evaluations
    /// are dropped.
    pub fn set_cards(&mut self, holes: [[Card; 2]; 2], board: &[Card]) -> Result<(), GameError> {
        if board.len() > 5 {
            return Err(GameError::InvalidBoardSize {
                requested: board.len(),
            });
        }
        let placed: Vec<Card> = holes.iter().flatten().chain(board).copied().collect();
        let mut seen = HashSet::with_capacity(placed.len());
        if let Some(&card) = placed.iter().find(|c| !seen.insert(**c)) {
            return Err(GameError::DuplicateCard { card });
        }

        for (p, [first, second]) in self.players.iter_mut().zip(holes) {
            p.deal_hand(first, second);
        }
        self.board = board.to_vec();
        self.deck.shuffle_excluding(&placed);
        Ok(())
    }

    /// Zeros the current bet and both commitments at the start of a street.
    pub fn reset_betting(&mut self) {
        self.current_bet = 0;
        for p in &mut self.players {
            p.reset_commitment();
        }
    }

    /// Draws until the board holds `n` cards. Never removes cards.
    pub fn deal_board(&mut self, n: usize) -> Result<(), GameError> {
        if n > 5 {
            return Err(GameError::InvalidBoardSize { requested: n });
        }
        while self.board.len() < n {
            let c = self.deck.draw().ok_or(GameError::DeckExhausted)?;
            self.board.push(c);
        }
        Ok(())
    }

    /// Moves `amount` from the seat's stack into the pot.
    pub fn player_bet(&mut self, seat: usize, amount: u32) -> Result<(), GameError> {
        let seat = Self::check_seat(seat)?;
        self.players[seat].bet(seat, amount)?;
        self.current_pot += amount;
        debug!(seat, amount, pot = self.current_pot, "bet");
        Ok(())
    }

    /// Matches the current bet, going through the all-in settlement when the
    /// seat cannot cover it.
    pub fn player_call(&mut self, seat: usize) -> Result<(), GameError> {
        let seat = Self::check_seat(seat)?;
        if self.players[seat].total_chips() < self.current_bet {
            return self.player_all_in_call(seat);
        }
        self.match_current_bet(seat)
    }

    fn match_current_bet(&mut self, seat: usize) -> Result<(), GameError> {
        let owed = self.amount_owed(seat);
        self.player_bet(seat, owed)
    }

    fn amount_owed(&self, seat: usize) -> u32 {
        self.current_bet
            .saturating_sub(self.players[seat].round_pot_commitment())
    }

    /// Raises the current bet to the absolute level `amount`.
    ///
    /// Raise legality (at least the big blind, at least double the current
    /// bet) is the caller's job, see [`crate::rules::validate_action`]. The
    /// engine only refuses amounts the seat cannot physically put in.
    pub fn player_raise(&mut self, seat: usize, amount: u32) -> Result<(), GameError> {
        let seat = Self::check_seat(seat)?;
        let p = &self.players[seat];
        let delta = amount
            .checked_sub(p.round_pot_commitment())
            .ok_or(GameError::InvalidRaise {
                amount,
                minimum: p.round_pot_commitment(),
                maximum: p.total_chips(),
            })?;
        if delta > p.stack() {
            return Err(GameError::InsufficientChips {
                seat,
                amount: delta,
                stack: p.stack(),
            });
        }
        self.current_bet = amount;
        self.player_bet(seat, delta)
    }

    /// Raises to everything the seat has.
    pub fn player_all_in_raise(&mut self, seat: usize) -> Result<(), GameError> {
        let seat = Self::check_seat(seat)?;
        let total = self.players[seat].total_chips();
        self.player_raise(seat, total)
    }

    /// Heads-up short-stack settlement.
    ///
    /// A seat that cannot reach the current bet caps it at its own total; the
    /// opponent gets back whatever it committed above that cap, and the short
    /// seat commits its whole stack. With only two seats this replaces side
    /// pots. A seat that can cover simply calls.
    pub fn player_all_in_call(&mut self, seat: usize) -> Result<(), GameError> {
        let seat = Self::check_seat(seat)?;
        let total = self.players[seat].total_chips();
        if total >= self.current_bet {
            return self.match_current_bet(seat);
        }

        let opp = other(seat);
        let refund = self.players[opp]
            .round_pot_commitment()
            .saturating_sub(total);
        self.players[opp].refund(refund);
        self.current_pot -= refund;
        self.current_bet = total;
        debug!(seat = opp, amount = refund, pot = self.current_pot, "refund");

        let stack = self.players[seat].stack();
        self.player_bet(seat, stack)
    }

    /// `(min, max)` raise targets for `seat`.
    ///
    /// The max is the *opponent's* stack plus commitment: a raise beyond what
    /// the opponent can match would only be refunded.
    pub fn return_min_max_raise(&self, seat: usize) -> Result<(u32, u32), GameError> {
        let seat = Self::check_seat(seat)?;
        let min = self.current_bet.saturating_mul(2);
        let max = self.players[other(seat)].total_chips();
        Ok((min, max))
    }

    /// Chips `seat` still owes this street.
    pub fn amount_to_call(&self, seat: usize) -> Result<u32, GameError> {
        Ok(self.amount_owed(Self::check_seat(seat)?))
    }

    /// Button posts the small blind and the other seat the big blind.
    ///
    /// A seat short of its blind posts everything; a big blind that cannot
    /// even reach the posted small blind settles through
    /// [`Engine::player_all_in_call`].
    pub fn post_blinds(&mut self) -> Result<(), GameError> {
        let sb_seat = self.button;
        let bb_seat = other(sb_seat);

        let sb = self.small_blind.min(self.players[sb_seat].total_chips());
        self.player_raise(sb_seat, sb)?;

        let bb_total = self.players[bb_seat].total_chips();
        if bb_total < self.current_bet {
            self.player_all_in_call(bb_seat)?;
        } else {
            self.player_raise(bb_seat, self.big_blind.min(bb_total))?;
        }
        self.current_action = sb_seat;
        Ok(())
    }

    /// Evaluates both seats against the full board and stores the results.
    pub fn evaluate_hands(&mut self) -> Result<(), GameError> {
        let strengths = [self.get_hand_rank(0)?, self.get_hand_rank(1)?];
        for (p, hs) in self.players.iter_mut().zip(strengths) {
            p.set_hand_strength(hs);
        }
        Ok(())
    }

    /// Category and best five for `seat` from its hole cards and the board.
    pub fn get_hand_rank(&self, seat: usize) -> Result<HandStrength, GameError> {
        let hole = self.player(seat)?.hand().ok_or(GameError::HandNotDealt)?;
        let board: &[Card; 5] = self
            .board
            .as_slice()
            .try_into()
            .map_err(|_| GameError::HandNotEvaluated)?;
        Ok(evaluate_holdem(&hole, board))
    }

    /// Compares the stored evaluations: category first, then the best five
    /// card by card. Identical hands split.
    pub fn determine_winner(&self) -> Result<Winner, GameError> {
        let a = self.players[0]
            .hand_strength()
            .ok_or(GameError::HandNotEvaluated)?;
        let b = self.players[1]
            .hand_strength()
            .ok_or(GameError::HandNotEvaluated)?;
        Ok(match compare_hands(a, b) {
            Ordering::Greater => Winner::Seat(0),
            Ordering::Less => Winner::Seat(1),
            Ordering::Equal => Winner::Split(vec![0, 1]),
        })
    }

    /// Runs the board out, evaluates both hands and names the winner.
    pub fn showdown(&mut self) -> Result<Winner, GameError> {
        self.deal_board(5)?;
        self.round = Round::Showdown;
        self.evaluate_hands()?;
        let winner = self.determine_winner()?;
        info!(
            board = %self.return_community_cards(),
            winner = ?winner,
            pot = self.current_pot,
            "showdown"
        );
        Ok(winner)
    }

    /// Credits the pot to a seat, or splits it evenly between tied seats.
    ///
    /// An odd chip left by a split goes to the first tied seat after the
    /// button. The pot value stays readable until the next `new_round`, but it
    /// can only be awarded once.
    pub fn player_win(&mut self, target: impl Into<Winner>) -> Result<(), GameError> {
        if self.pot_awarded {
            return Err(GameError::PotAlreadyAwarded);
        }
        match target.into() {
            Winner::Seat(seat) => {
                let seat = Self::check_seat(seat)?;
                self.players[seat].add_chips(self.current_pot);
                debug!(seat, amount = self.current_pot, "pot awarded");
            }
            Winner::Split(seats) => {
                if seats.is_empty() {
                    return Err(GameError::InvalidAction);
                }
                for &s in &seats {
                    Self::check_seat(s)?;
                }
                let n = seats.len() as u32;
                let share = self.current_pot / n;
                let remainder = self.current_pot % n;
                for &s in &seats {
                    self.players[s].add_chips(share);
                    debug!(seat = s, amount = share, "split share");
                }
                if remainder > 0 {
                    let first_after_button = [other(self.button), self.button]
                        .into_iter()
                        .find(|s| seats.contains(s))
                        .unwrap_or(seats[0]);
                    self.players[first_after_button].add_chips(remainder);
                    warn!(seat = first_after_button, remainder, "odd chip from split pot");
                }
            }
        }
        self.pot_awarded = true;
        Ok(())
    }

    /// Executes a collaborator's decision for `seat`.
    ///
    /// Check changes nothing, Fold awards the pot to the opponent; the rest
    /// map onto the betting primitives.
    pub fn apply_action(&mut self, seat: usize, action: Action) -> Result<(), GameError> {
        let seat = Self::check_seat(seat)?;
        debug!(seat, ?action, "apply action");
        match action {
            Action::Check => {
                let to_call = self.amount_owed(seat);
                if to_call > 0 {
                    return Err(GameError::CannotCheck { to_call });
                }
                Ok(())
            }
            Action::Call => self.player_call(seat),
            Action::Raise(amount) => self.player_raise(seat, amount),
            Action::AllIn => {
                if self.players[seat].total_chips() > self.current_bet {
                    self.player_all_in_raise(seat)
                } else {
                    self.player_all_in_call(seat)
                }
            }
            Action::Fold => self.player_win(other(seat)),
        }
    }

    /// Read-only view for the decision provider sitting in `seat`.
    pub fn snapshot(&self, seat: usize) -> Result<Snapshot, GameError> {
        let seat = Self::check_seat(seat)?;
        let me = &self.players[seat];
        let opp = &self.players[other(seat)];
        let (min_raise, max_raise) = self.return_min_max_raise(seat)?;
        Ok(Snapshot {
            seat,
            position: if seat == self.button {
                Position::Button
            } else {
                Position::BigBlind
            },
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            round: self.round,
            hole_cards: me.hand(),
            board: self.board.clone(),
            pot: self.current_pot,
            current_bet: self.current_bet,
            stack: me.stack(),
            commitment: me.round_pot_commitment(),
            opponent_stack: opp.stack(),
            opponent_commitment: opp.round_pot_commitment(),
            to_call: self.amount_owed(seat),
            min_raise,
            max_raise,
        })
    }

    /// Chip change per seat since the current hand started.
    pub fn stack_deltas(&self) -> [i64; 2] {
        [0, 1].map(|s| self.players[s].stack() as i64 - self.hand_start_stacks[s] as i64)
    }

    /// A seat is broke and no pot is left to win.
    pub fn is_game_over(&self) -> bool {
        let pot_settled = self.pot_awarded || self.current_pot == 0;
        pot_settled && self.players.iter().any(|p| p.stack() == 0)
    }
}
