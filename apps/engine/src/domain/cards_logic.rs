//! Card game logic: contract-aware rank values, card strength and comparison

use super::cards_types::{Card, Direction, Rank, Suit};

/// The rules a hand is played under once the winning bid is finalized.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Contract {
    /// Trump suit; `None` under no-trump (and before a suit is assigned).
    pub trump: Option<Suit>,
    pub direction: Direction,
    pub no_trump: bool,
}

impl Contract {
    pub const fn trumped(trump: Suit, direction: Direction) -> Self {
        Self {
            trump: Some(trump),
            direction,
            no_trump: false,
        }
    }

    pub const fn no_trump(direction: Direction) -> Self {
        Self {
            trump: None,
            direction,
            no_trump: true,
        }
    }

    pub fn is_trump(&self, card: &Card) -> bool {
        match self.trump {
            Some(t) => card.is_suit(t),
            None => false,
        }
    }
}

/// Direction-aware rank value. Descending inverts Two..King (`15 - natural`),
/// while Ace and both jokers keep their natural high value.
pub const fn rank_value(rank: Rank, direction: Direction) -> i32 {
    match direction {
        Direction::Ascending => rank.natural_value(),
        Direction::Descending => match rank {
            Rank::Ace | Rank::SmallJoker | Rank::BigJoker => rank.natural_value(),
            _ => 15 - rank.natural_value(),
        },
    }
}

/// Comparison weight of a card within a trick, or `None` if the card cannot
/// win under this contract.
///
/// - Trumped: `(trump ? 1000 : lead ? 100 : 0) + rank_value`.
/// - No-trump: only lead-suit cards are eligible; jokers never are. Descending
///   no-trump ranks by lowest natural rank and excludes the Ace.
pub fn card_strength(card: &Card, lead: Option<Suit>, contract: &Contract) -> Option<i32> {
    if contract.no_trump {
        if card.is_joker() || lead.is_none() || card.suit != lead {
            return None;
        }
        return match contract.direction {
            Direction::Ascending => Some(card.rank.natural_value()),
            Direction::Descending if card.rank == Rank::Ace => None,
            Direction::Descending => Some(rank_value(card.rank, Direction::Descending)),
        };
    }

    let base = if contract.is_trump(card) {
        1000
    } else if lead.is_some() && card.suit == lead {
        100
    } else {
        0
    };
    Some(base + rank_value(card.rank, contract.direction))
}

/// Whether `a` beats `b` given the lead suit and contract.
///
/// Trump beats non-trump unconditionally; same-suit cards compare by
/// direction-aware rank; off-suit non-trump cards never beat anything.
pub fn card_beats(a: &Card, b: &Card, lead: Option<Suit>, contract: &Contract) -> bool {
    let a_relevant = contract.is_trump(a) || (lead.is_some() && a.suit == lead);
    if !a_relevant {
        return false;
    }
    match (
        card_strength(a, lead, contract),
        card_strength(b, lead, contract),
    ) {
        (Some(sa), Some(sb)) => sa > sb,
        (Some(_), None) => true,
        _ => false,
    }
}

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.is_suit(suit))
}
