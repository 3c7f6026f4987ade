//! Shared AI building blocks: bidding, discards and card ordering helpers.

use crate::ai::trait_def::{AiError, BidDecision};
use crate::domain::bid_eval::{all_candidates, best_candidate};
use crate::domain::cards_logic::{card_beats, card_strength, rank_value, Contract};
use crate::domain::dealing::full_deck;
use crate::domain::player_view::VisibleGameState;
use crate::domain::rules::KITTY_SIZE;
use crate::domain::{BidChoice, Card, Direction, Rank, Suit};

pub fn bid_from_candidates(state: &VisibleGameState) -> BidDecision {
    let best = best_candidate(&all_candidates(&state.hand));
    let choice = match best {
        Some(c) if c.value > state.highest_value() => BidChoice::Bid {
            value: c.value,
            direction: c.direction,
            no_trump: c.no_trump,
        },
        _ => BidChoice::Pass,
    };
    BidDecision { choice, best }
}

/// Keep trumps and jokers; return the six lowest of everything else,
/// topping up with the lowest keepers when short.
pub fn weakest_discards(state: &VisibleGameState) -> Result<Vec<Card>, AiError> {
    let contract = require_contract(state)?;
    if state.hand.len() < KITTY_SIZE {
        return Err(AiError::Internal(format!(
            "hand of {} cannot discard {KITTY_SIZE}",
            state.hand.len()
        )));
    }
    let mut ranked = state.hand.clone();
    ranked.sort_by_key(|c| {
        let keeper = c.is_joker() || contract.is_trump(c);
        (keeper, value(c, contract.direction), *c)
    });
    ranked.truncate(KITTY_SIZE);
    Ok(ranked)
}

pub fn require_contract(state: &VisibleGameState) -> Result<Contract, AiError> {
    state
        .contract()
        .ok_or_else(|| AiError::Internal("no contract fixed yet".into()))
}

/// Direction-aware rank value used to order "low" and "high".
pub fn value(card: &Card, direction: Direction) -> i32 {
    rank_value(card.rank, direction)
}

pub fn lowest(cards: &[Card], direction: Direction) -> Option<Card> {
    cards.iter().copied().min_by_key(|c| (value(c, direction), *c))
}

pub fn highest(cards: &[Card], direction: Direction) -> Option<Card> {
    cards.iter().copied().max_by_key(|c| (value(c, direction), *c))
}

pub fn of_suit(cards: &[Card], suit: Suit) -> Vec<Card> {
    cards.iter().copied().filter(|c| c.is_suit(suit)).collect()
}

pub fn non_trump(cards: &[Card], contract: &Contract) -> Vec<Card> {
    cards.iter().copied().filter(|c| !contract.is_trump(c)).collect()
}

pub fn trumps(cards: &[Card], contract: &Contract) -> Vec<Card> {
    cards.iter().copied().filter(|c| contract.is_trump(c)).collect()
}

/// Cards in `candidates` that would take the lead from `winner`.
pub fn beating(
    candidates: &[Card],
    winner: &Card,
    lead: Option<Suit>,
    contract: &Contract,
) -> Vec<Card> {
    candidates
        .iter()
        .copied()
        .filter(|c| card_beats(c, winner, lead, contract))
        .collect()
}

/// True when every card of `card`'s suit that outranks it has already
/// been collected in a completed trick. Jokers count as part of the trump suit.
pub fn provably_safe(card: &Card, state: &VisibleGameState, contract: &Contract) -> bool {
    let Some(suit) = card.suit else {
        return false;
    };
    let own = card_strength(card, Some(suit), contract);
    let stamp = if contract.no_trump { None } else { contract.trump };
    full_deck()
        .into_iter()
        .map(|mut c| {
            c.stamp_joker_suit(stamp);
            c
        })
        .filter(|c| c.is_suit(suit) && card_strength(c, Some(suit), contract) > own)
        .all(|higher| state.completed_cards().any(|seen| seen.matches(&higher)))
}

/// Queen or better by natural rank, and provably safe.
pub fn is_safe_high(card: &Card, state: &VisibleGameState, contract: &Contract) -> bool {
    card.rank.natural_value() >= Rank::Queen.natural_value() && provably_safe(card, state, contract)
}

pub fn safe_high(cards: &[Card], state: &VisibleGameState, contract: &Contract) -> Option<Card> {
    let safe: Vec<Card> = cards
        .iter()
        .copied()
        .filter(|c| is_safe_high(c, state, contract))
        .collect();
    highest(&safe, contract.direction)
}

pub fn ensure_legal(state: &VisibleGameState, card: Card) -> Result<Card, AiError> {
    if state.legal_plays().contains(&card) {
        Ok(card)
    } else {
        Err(AiError::InvalidMove(format!("{card} is not a legal play")))
    }
}
