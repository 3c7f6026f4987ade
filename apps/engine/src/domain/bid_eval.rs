//! Hand evaluation: run strength per suit/direction and candidate bids.
//!
//! A run is walked down the direction's rank order. Jokers lengthen the
//! usable order and each add one to the score; a single missing rank is
//! tolerated, a second consecutive one trims the order until the walk ends.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::FinalBid;
use crate::domain::rules::{BOOK_OFFSET, MAX_BID, MIN_BID};
use crate::domain::state::Seat;
use crate::domain::{Card, Direction, Rank, Suit};

/// Most no-trump "sure tricks" that still map onto a legal bid.
const NO_TRUMP_MAX_TOTAL: u8 = MAX_BID + BOOK_OFFSET;
const NO_TRUMP_MIN_TOTAL: u8 = MIN_BID + BOOK_OFFSET;

/// A bid the evaluator considers justified by the hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct BidCandidate {
    pub value: u8,
    pub direction: Direction,
    /// Trump suit the run was measured in; None for pure no-trump candidates.
    pub suit: Option<Suit>,
    pub no_trump: bool,
    /// Uncapped evaluator score behind `value`.
    pub strength: u8,
}

impl BidCandidate {
    /// Score delta the contract would earn if made exactly; used to rank candidates.
    pub fn weight(&self) -> u32 {
        let base = u32::from(self.value);
        if self.no_trump {
            base * 2
        } else {
            base
        }
    }

    pub fn into_final(self, seat: Seat) -> FinalBid {
        FinalBid {
            seat,
            value: self.value,
            direction: self.direction,
            no_trump: self.no_trump,
            trump: if self.no_trump { None } else { self.suit },
        }
    }
}

fn joker_count(hand: &[Card]) -> usize {
    hand.iter().filter(|c| c.is_joker()).count()
}

fn holds(hand: &[Card], rank: Rank, suit: Suit) -> bool {
    hand.iter().any(|c| !c.is_joker() && c.rank == rank && c.suit == Some(suit))
}

/// Run score of `suit` in `direction`, jokers included. Always in 0..=13.
pub fn run_strength(hand: &[Card], suit: Suit, direction: Direction) -> u8 {
    let jokers = joker_count(hand).min(Rank::JOKERS.len());
    let mut order: Vec<Rank> = direction.rank_order().to_vec();
    order.truncate(order.len() - (Rank::JOKERS.len() - jokers));

    let mut kept = 0usize;
    let mut gaps = 0usize;
    let mut pos = 0usize;
    while pos < order.len() {
        if holds(hand, order[pos], suit) {
            kept += 1;
            gaps = 0;
            pos += 1;
            continue;
        }
        gaps += 1;
        if gaps >= 2 {
            // Second consecutive gap: shorten the order and look again here.
            order.pop();
            continue;
        }
        pos += 1;
    }

    (kept + jokers) as u8
}

/// Suited candidates for every suit and direction whose run reaches a
/// minimum bid. With `with_no_trump_variants`, each suited candidate is
/// also offered with the no-trump flag set.
pub fn evaluate_all(hand: &[Card], with_no_trump_variants: bool) -> Vec<BidCandidate> {
    let mut out = Vec::new();
    for suit in Suit::ALL {
        for direction in Direction::ALL {
            let strength = run_strength(hand, suit, direction);
            if strength < MIN_BID {
                continue;
            }
            let candidate = BidCandidate {
                value: strength.min(MAX_BID),
                direction,
                suit: Some(suit),
                no_trump: false,
                strength,
            };
            out.push(candidate);
            if with_no_trump_variants {
                out.push(BidCandidate {
                    no_trump: true,
                    ..candidate
                });
            }
        }
    }
    out
}

/// Sum over suits of the unbroken run from the Ace in `direction`'s order.
pub fn no_trump_score(hand: &[Card], direction: Direction) -> u8 {
    Suit::ALL
        .iter()
        .map(|&suit| {
            direction
                .rank_order()
                .iter()
                .take_while(|&&rank| holds(hand, rank, suit))
                .count() as u8
        })
        .sum()
}

/// No-trump candidates, one per direction whose score lands in the bid range.
pub fn no_trump_candidates(hand: &[Card]) -> Vec<BidCandidate> {
    Direction::ALL
        .iter()
        .filter_map(|&direction| {
            let total = no_trump_score(hand, direction);
            (NO_TRUMP_MIN_TOTAL..=NO_TRUMP_MAX_TOTAL)
                .contains(&total)
                .then(|| BidCandidate {
                    value: total - BOOK_OFFSET,
                    direction,
                    suit: None,
                    no_trump: true,
                    strength: total,
                })
        })
        .collect()
}

/// Highest-weight candidate; earlier entries win ties.
pub fn best_candidate(candidates: &[BidCandidate]) -> Option<BidCandidate> {
    candidates.iter().copied().fold(None, |best, c| match best {
        Some(b) if b.weight() >= c.weight() => Some(b),
        _ => Some(c),
    })
}

/// Suited candidates plus no-trump candidates, the pool the AI bids from.
pub fn all_candidates(hand: &[Card]) -> Vec<BidCandidate> {
    let mut out = evaluate_all(hand, false);
    out.extend(no_trump_candidates(hand));
    out
}

/// Minimum bid imposed when every seat passes: the strongest suit/direction
/// at value 4. First maximum in suit then direction order wins.
pub fn forced_minimum_bid(hand: &[Card]) -> BidCandidate {
    let mut best: Option<(Suit, Direction, u8)> = None;
    for suit in Suit::ALL {
        for direction in Direction::ALL {
            let strength = run_strength(hand, suit, direction);
            if strength == 0 {
                continue;
            }
            if best.is_none_or(|(_, _, s)| strength > s) {
                best = Some((suit, direction, strength));
            }
        }
    }
    let (suit, direction, strength) = best.unwrap_or((Suit::Clubs, Direction::Ascending, 0));
    BidCandidate {
        value: MIN_BID,
        direction,
        suit: Some(suit),
        no_trump: false,
        strength,
    }
}
