//! Deterministic deck construction and dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::rules::{DECK_SIZE, HAND_SIZE, KITTY_SIZE, PLAYERS};
use crate::domain::{Card, Rank, Suit};

/// The full 54-card deck in standard order: 52 suited cards, then both jokers.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::STANDARD {
            deck.push(Card::new(rank, suit));
        }
    }
    for rank in Rank::JOKERS {
        deck.push(Card::joker(rank));
    }
    deck
}

/// Result of dealing one hand: four seat hands plus the kitty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: [Vec<Card>; PLAYERS],
    pub kitty: Vec<Card>,
}

/// Shuffle a fresh deck with the given seed and deal 12 cards per seat,
/// leaving the last 6 as the kitty. Hands are sorted for convenience.
pub fn deal_hands(seed: u64) -> Deal {
    let mut deck = full_deck();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let mut hands: [Vec<Card>; PLAYERS] = Default::default();
    for (seat, hand_slot) in hands.iter_mut().enumerate() {
        let start = seat * HAND_SIZE;
        let mut hand = deck[start..start + HAND_SIZE].to_vec();
        hand.sort();
        *hand_slot = hand;
    }
    let kitty = deck[PLAYERS * HAND_SIZE..].to_vec();
    debug_assert_eq!(kitty.len(), KITTY_SIZE);

    Deal { hands, kitty }
}
