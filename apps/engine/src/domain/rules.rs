use std::ops::RangeInclusive;

pub const PLAYERS: usize = 4;
pub const HAND_SIZE: usize = 12;
pub const KITTY_SIZE: usize = 6;
pub const DECK_SIZE: usize = PLAYERS * HAND_SIZE + KITTY_SIZE;
pub const TRICKS_PER_HAND: usize = HAND_SIZE;

pub const MIN_BID: u8 = 4;
pub const MAX_BID: u8 = 7;
/// Tricks a contract must take beyond its bid value ("books").
pub const BOOK_OFFSET: u8 = 5;

pub const DEFAULT_WINNING_SCORE: i32 = 7;
pub const DEFAULT_LOSING_SCORE: i32 = -7;

pub const fn valid_bid_range() -> RangeInclusive<u8> {
    MIN_BID..=MAX_BID
}

/// Tricks the contracting team must take to make a bid of `value`.
pub const fn tricks_required(value: u8) -> u8 {
    value + BOOK_OFFSET
}
