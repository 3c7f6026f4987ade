//! Card parsing and formatting for the compact text form (e.g., "AS", "TD", "BJ", "SJ:H")

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_err(s: &str) -> DomainError {
    DomainError::validation(ValidationKind::ParseCard, format!("Parse card: {s}"))
}

pub(crate) fn suit_from_char(ch: char) -> Option<Suit> {
    match ch {
        'C' => Some(Suit::Clubs),
        'D' => Some(Suit::Diamonds),
        'H' => Some(Suit::Hearts),
        'S' => Some(Suit::Spades),
        _ => None,
    }
}

pub(crate) const fn suit_char(suit: Suit) -> char {
    match suit {
        Suit::Clubs => 'C',
        Suit::Diamonds => 'D',
        Suit::Hearts => 'H',
        Suit::Spades => 'S',
    }
}

const fn rank_char(rank: Rank) -> char {
    match rank {
        Rank::Two => '2',
        Rank::Three => '3',
        Rank::Four => '4',
        Rank::Five => '5',
        Rank::Six => '6',
        Rank::Seven => '7',
        Rank::Eight => '8',
        Rank::Nine => '9',
        Rank::Ten => 'T',
        Rank::Jack => 'J',
        Rank::Queen => 'Q',
        Rank::King => 'K',
        Rank::Ace => 'A',
        Rank::SmallJoker => 'S',
        Rank::BigJoker => 'B',
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Jokers: "SJ" / "BJ", optionally stamped as "SJ:H"
        let (body, stamp) = match s.split_once(':') {
            Some((body, stamp)) => (body, Some(stamp)),
            None => (s, None),
        };
        if body == "SJ" || body == "BJ" {
            let rank = if body == "SJ" {
                Rank::SmallJoker
            } else {
                Rank::BigJoker
            };
            let suit = match stamp {
                None => None,
                Some(st) => {
                    let mut chars = st.chars();
                    match (chars.next().and_then(suit_from_char), chars.next()) {
                        (Some(suit), None) => Some(suit),
                        _ => return Err(parse_err(s)),
                    }
                }
            };
            return Ok(Card { rank, suit });
        }
        if stamp.is_some() || body.chars().count() != 2 {
            return Err(parse_err(s));
        }

        let mut chars = body.chars();
        let rank_ch = chars.next().ok_or_else(|| parse_err(s))?;
        let suit_ch = chars.next().ok_or_else(|| parse_err(s))?;
        let rank = match rank_ch {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return Err(parse_err(s)),
        };
        let suit = suit_from_char(suit_ch).ok_or_else(|| parse_err(s))?;
        Ok(Card::new(rank, suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            write!(f, "{}J", rank_char(self.rank))?;
            if let Some(suit) = self.suit {
                write!(f, ":{}", suit_char(suit))?;
            }
            return Ok(());
        }
        match self.suit {
            Some(suit) => write!(f, "{}{}", rank_char(self.rank), suit_char(suit)),
            None => write!(f, "{}?", rank_char(self.rank)),
        }
    }
}

/// Non-panicking helper to parse card tokens (e.g., "AS", "BJ") into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
