use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::bid_eval::BidCandidate;
use crate::domain::bidding::{Bid, FinalBid};
use crate::domain::rules::PLAYERS;
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

pub type Seat = u8; // 0..=3

/// Partnerships: seats 0 and 2 form team A, seats 1 and 3 form team B.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::A, Team::B];

    #[inline]
    pub const fn of(seat: Seat) -> Team {
        if seat % 2 == 0 {
            Team::A
        } else {
            Team::B
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Team::A => 0,
            Team::B => 1,
        }
    }

    #[inline]
    pub const fn other(self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Game created, no hand started yet.
    Initiated,
    /// Hand setup begins: per-hand state reset.
    Start,
    /// Deck rebuilt and shuffled.
    Shuffle,
    /// Hands and kitty dealt.
    Deal,
    /// Seats submit bids in turn from the first bidder.
    Bid,
    /// Bid winner finalizes the contract and exchanges the kitty.
    Kitty,
    /// Tricks are played.
    Play,
    /// Hand is being scored.
    Score,
    /// Game over.
    End,
}

/// AI strength tier.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(DomainError::validation(
                ValidationKind::InvalidPlayers,
                format!("Unknown difficulty: {other}"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "difficulty", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerKind {
    Human,
    Ai(Difficulty),
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub seat: Seat,
    pub name: String,
    pub kind: PlayerKind,
}

impl Player {
    pub fn human(seat: Seat, name: impl Into<String>) -> Self {
        Self {
            seat,
            name: name.into(),
            kind: PlayerKind::Human,
        }
    }

    pub fn ai(seat: Seat, difficulty: Difficulty) -> Self {
        Self {
            seat,
            name: format!("{difficulty} bot {}", seat + 1),
            kind: PlayerKind::Ai(difficulty),
        }
    }

    pub const fn team(&self) -> Team {
        Team::of(self.seat)
    }

    pub const fn is_ai(&self) -> bool {
        matches!(self.kind, PlayerKind::Ai(_))
    }

    pub const fn difficulty(&self) -> Option<Difficulty> {
        match self.kind {
            PlayerKind::Ai(d) => Some(d),
            PlayerKind::Human => None,
        }
    }
}

/// Per-seat, per-suit record of suits a seat has shown out of.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct VoidMap([[bool; 4]; PLAYERS]);

impl VoidMap {
    pub fn mark(&mut self, seat: Seat, suit: Suit) {
        self.0[seat as usize][suit_index(suit)] = true;
    }

    pub fn is_void(&self, seat: Seat, suit: Suit) -> bool {
        self.0[seat as usize][suit_index(suit)]
    }

    /// True when both opponents of `seat` have shown out of `suit`.
    pub fn opponents_void(&self, seat: Seat, suit: Suit) -> bool {
        self.is_void(next_player(seat), suit) && self.is_void(prev_player(seat), suit)
    }
}

const fn suit_index(suit: Suit) -> usize {
    match suit {
        Suit::Clubs => 0,
        Suit::Diamonds => 1,
        Suit::Hearts => 2,
        Suit::Spades => 3,
    }
}

/// A finished trick in play order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CompletedTrick {
    pub trick_no: u8,
    pub plays: Vec<(Seat, Card)>,
    pub winner: Seat,
}

/// Per-hand state; reset at every hand boundary.
#[derive(Debug, Clone, Default)]
pub struct HandState {
    pub hands: [Vec<Card>; PLAYERS],
    pub kitty: Vec<Card>,
    /// Bids in submission order.
    pub bids: Vec<Bid>,
    /// Highest non-pass bid so far.
    pub highest: Option<Bid>,
    pub final_bid: Option<FinalBid>,
    /// Ordered plays for the current trick (who, card).
    pub current_trick: Vec<(Seat, Card)>,
    pub completed_tricks: Vec<CompletedTrick>,
    pub tricks_won: [u8; 2],
    pub voids: VoidMap,
    /// Best bid candidate per AI seat, cached when the seat bids.
    pub ai_best: [Option<BidCandidate>; PLAYERS],
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: Phase,
    pub players: [Player; PLAYERS],
    /// 1-based hand number; 0 before the first hand.
    pub hand_no: u32,
    /// Seat that bids first this hand; rotates every hand.
    pub first_bidder: Seat,
    /// Seat expected to act next, None when nobody can act.
    pub turn: Option<Seat>,
    /// Cumulative team scores, indexed by `Team::index`.
    pub scores: [i32; 2],
    pub winner: Option<Team>,
    pub game_seed: i64,
    pub hand: HandState,
}

impl GameState {
    /// New game in `Initiated`. The first hand's first bidder is seat 0.
    pub fn new(players: [Player; PLAYERS], game_seed: i64) -> Result<Self, DomainError> {
        for (idx, p) in players.iter().enumerate() {
            if p.seat as usize != idx {
                return Err(DomainError::validation(
                    ValidationKind::InvalidPlayers,
                    format!("Player at index {idx} claims seat {}", p.seat),
                ));
            }
        }
        Ok(Self {
            phase: Phase::Initiated,
            players,
            hand_no: 0,
            first_bidder: 0,
            turn: None,
            scores: [0; 2],
            winner: None,
            game_seed,
            hand: HandState::default(),
        })
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat as usize]
    }

    pub fn is_ai(&self, seat: Seat) -> bool {
        self.player(seat).is_ai()
    }

    pub fn score(&self, team: Team) -> i32 {
        self.scores[team.index()]
    }

    pub fn tricks_won(&self, team: Team) -> u8 {
        self.hand.tricks_won[team.index()]
    }

    pub fn hand_of(&self, seat: Seat) -> &[Card] {
        &self.hand.hands[seat as usize]
    }
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(4)) as Seat
}

/// Returns the next player clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_player(p: Seat) -> Seat {
    seat_offset(p, 1)
}

#[inline]
pub fn prev_player(p: Seat) -> Seat {
    seat_offset(p, -1)
}

#[inline]
pub fn partner(p: Seat) -> Seat {
    seat_offset(p, 2)
}

/// Returns the seat `n` steps clockwise from `start`.
#[inline]
pub fn nth_from(start: Seat, n: u8) -> Seat {
    seat_offset(start, n as i8)
}

pub fn require_seat(seat: u8) -> Result<Seat, DomainError> {
    if (seat as usize) < PLAYERS {
        Ok(seat)
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidSeat,
            format!("Seat {seat} out of range 0..=3"),
        ))
    }
}

pub fn require_phase(state: &GameState, phase: Phase, ctx: &'static str) -> Result<(), DomainError> {
    if state.phase == phase {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            format!("{ctx} requires phase {phase:?}, game is in {:?}", state.phase),
        ))
    }
}

pub fn require_turn(state: &GameState, who: Seat, ctx: &'static str) -> Result<(), DomainError> {
    match state.turn {
        Some(turn) if turn == who => Ok(()),
        Some(turn) => Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("{ctx}: seat {who} acted but it is seat {turn}'s turn"),
        )),
        None => Err(DomainError::invariant(format!("turn must be set ({ctx})"))),
    }
}

pub fn require_final_bid(state: &GameState, ctx: &'static str) -> Result<FinalBid, DomainError> {
    state.hand.final_bid.ok_or_else(|| {
        DomainError::validation(
            ValidationKind::BidNotFinalized,
            format!("final bid must be set ({ctx})"),
        )
    })
}
