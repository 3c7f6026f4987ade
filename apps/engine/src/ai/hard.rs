//! Hard: positional play that tracks what has been collected.
//!
//! Leading: the highest card that is non-trump or a provably safe trump;
//! failing that, the top of a suit held at least twice. Under a trump
//! contract, side suits both opponents have shown out of are not led
//! while anything else is available.
//!
//! Following, by seat position:
//! - last to act with partner winning: spend as little as possible
//! - last to act against an opponent: win as cheaply as possible
//! - second or third: win cheaply when following suit, ruff cheaply when void
//!
//! "Safe high" means a Queen or better whose every superior card in that
//! suit has already been collected.

use std::collections::BTreeMap;

use crate::ai::policy::{
    beating, ensure_legal, highest, lowest, non_trump, of_suit, provably_safe, require_contract,
    safe_high, trumps, value,
};
use crate::ai::{AiError, AiPlayer};
use crate::domain::cards_logic::Contract;
use crate::domain::player_view::VisibleGameState;
use crate::domain::state::partner;
use crate::domain::{Card, Suit};

#[derive(Debug, Clone, Default)]
pub struct Hard;

impl Hard {
    pub const NAME: &'static str = "hard";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new() -> Self {
        Self
    }

    fn lead(state: &VisibleGameState, contract: &Contract) -> Option<Card> {
        let hand = &state.hand;
        let dir = contract.direction;
        let ruffable = |c: &Card| {
            contract.trump.is_some()
                && !contract.is_trump(c)
                && c.suit.is_some_and(|s| state.voids.opponents_void(state.seat, s))
        };

        let preferred: Vec<Card> = hand
            .iter()
            .copied()
            .filter(|c| !ruffable(c))
            .filter(|c| !contract.is_trump(c) || provably_safe(c, state, contract))
            .collect();
        if let Some(card) = highest(&preferred, dir) {
            return Some(card);
        }

        let mut by_suit: BTreeMap<Suit, Vec<Card>> = BTreeMap::new();
        for card in hand.iter().filter(|c| !ruffable(c)) {
            if let Some(suit) = card.suit {
                by_suit.entry(suit).or_default().push(*card);
            }
        }
        if let Some(card) = by_suit
            .values()
            .filter(|cards| cards.len() >= 2)
            .filter_map(|cards| highest(cards, dir))
            .max_by_key(|c| (value(c, dir), *c))
        {
            return Some(card);
        }

        highest(&non_trump(hand, contract), dir).or_else(|| highest(hand, dir))
    }

    fn follow(state: &VisibleGameState, contract: &Contract) -> Result<Option<Card>, AiError> {
        let dir = contract.direction;
        let legal = state.legal_plays();
        let lead = state.lead_suit();

        let winner_seat = state
            .current_winner()
            .map_err(|e| AiError::Internal(e.to_string()))?
            .ok_or_else(|| AiError::Internal("following an empty trick".into()))?;
        let winner_card = state
            .current_trick
            .iter()
            .find(|(s, _)| *s == winner_seat)
            .map(|(_, c)| *c)
            .ok_or_else(|| AiError::Internal("trick winner not on the table".into()))?;
        let partner_winning = winner_seat == partner(state.seat);

        let holding_lead = lead.is_some_and(|l| legal.iter().any(|c| c.is_suit(l)));
        let lead_cards = lead.map(|l| of_suit(&legal, l)).unwrap_or_default();
        let cheapest_winner = |pool: &[Card]| lowest(&beating(pool, &winner_card, lead, contract), dir);

        let pick = if state.is_last_to_act() {
            if partner_winning {
                lowest(&lead_cards, dir)
                    .or_else(|| lowest(&trumps(&legal, contract), dir))
                    .or_else(|| safe_high(&legal, state, contract))
                    .or_else(|| lowest(&legal, dir))
            } else {
                cheapest_winner(&legal)
                    .or_else(|| safe_high(&legal, state, contract))
                    .or_else(|| lowest(&legal, dir))
            }
        } else if holding_lead {
            cheapest_winner(&lead_cards)
                .or_else(|| safe_high(&lead_cards, state, contract))
                .or_else(|| lowest(&lead_cards, dir))
        } else {
            cheapest_winner(&trumps(&legal, contract))
                .or_else(|| safe_high(&legal, state, contract))
                .or_else(|| lowest(&legal, dir))
        };
        Ok(pick)
    }
}

impl AiPlayer for Hard {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn choose_play(&self, state: &VisibleGameState) -> Result<Card, AiError> {
        let contract = require_contract(state)?;
        let pick = if state.is_leading() {
            Self::lead(state, &contract)
        } else {
            Self::follow(state, &contract)?
        };
        let card = pick.ok_or_else(|| AiError::InvalidMove("empty hand".into()))?;
        ensure_legal(state, card)
    }
}
