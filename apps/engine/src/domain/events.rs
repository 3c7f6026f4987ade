//! Presentation events emitted alongside state changes, in the order they happened.

use serde::{Deserialize, Serialize};

use crate::domain::bidding::{BidChoice, FinalBid};
use crate::domain::state::{Seat, Team};
use crate::domain::Card;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameEvent {
    /// New hand dealt.
    Deal { hand_no: u32, first_bidder: Seat },
    /// A seat bid or passed.
    Bid { seat: Seat, choice: BidChoice },
    /// Winning bid and trump revealed.
    Reveal { seat: Seat, final_bid: FinalBid },
    /// A card hit the table.
    Play { seat: Seat, card: Card },
    /// Trick gathered by its winner.
    Collect { trick_no: u8, winner: Seat },
    /// Table cleared.
    Clear,
    /// Hand scored.
    Score { team: Team, delta: i32, scores: [i32; 2] },
    Win { team: Team, scores: [i32; 2] },
    Quit { seat: Seat },
}
