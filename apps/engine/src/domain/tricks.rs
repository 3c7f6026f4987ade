use crate::domain::cards_logic::{card_strength, Contract};
use crate::domain::rules::{PLAYERS, TRICKS_PER_HAND};
use crate::domain::state::{
    next_player, require_final_bid, require_phase, require_turn, CompletedTrick, GameState,
    Phase, Seat, Team,
};
use crate::domain::{hand_has_suit, Card, Direction, Rank, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// Winner of the trick this card completed, if any.
    pub trick_winner: Option<Seat>,
    /// 1-based number of the trick the card was played into.
    pub trick_no: u8,
    /// True when this card finished the hand's last trick.
    pub hand_complete: bool,
}

/// Suit of the first played card that has one. A suit-less joker lead is
/// skipped until a suited card follows.
pub fn lead_suit(plays: &[(Seat, Card)]) -> Option<Suit> {
    plays.iter().find_map(|(_, c)| c.suit)
}

/// Cards `who` may play now: lead-suit cards if any are held, else the whole hand.
pub fn legal_moves(state: &GameState, who: Seat) -> Vec<Card> {
    if state.phase != Phase::Play {
        return Vec::new();
    }
    legal_from_hand(state.hand_of(who), lead_suit(&state.hand.current_trick))
}

/// Legality on a bare hand, shared with the AI.
pub fn legal_from_hand(hand: &[Card], lead: Option<Suit>) -> Vec<Card> {
    let mut out: Vec<Card> = match lead {
        Some(lead) if hand_has_suit(hand, lead) => {
            hand.iter().copied().filter(|c| c.is_suit(lead)).collect()
        }
        _ => hand.to_vec(),
    };
    out.sort();
    out
}

/// Seat of the card currently winning `plays`, which may be partial.
///
/// Descending no-trump never lets the Ace win, unless it is the only card
/// of the lead suit on the table.
pub fn determine_trick_winner(
    plays: &[(Seat, Card)],
    contract: &Contract,
) -> Result<Seat, DomainError> {
    if plays.is_empty() {
        return Err(DomainError::invariant("winner requested for an empty trick"));
    }
    let lead = lead_suit(plays);

    let best = plays
        .iter()
        .filter_map(|(seat, card)| card_strength(card, lead, contract).map(|s| (s, *seat)))
        .max_by_key(|(s, _)| *s);
    if let Some((_, seat)) = best {
        return Ok(seat);
    }

    if contract.no_trump && contract.direction == Direction::Descending {
        if let Some((seat, _)) = plays
            .iter()
            .find(|(_, c)| c.rank == Rank::Ace && lead.is_some() && c.suit == lead)
        {
            return Ok(*seat);
        }
    }

    // A trick of nothing but suit-less jokers has no winner yet.
    if lead.is_none() && plays.len() < PLAYERS {
        return Ok(plays[0].0);
    }
    Err(DomainError::invariant(format!(
        "no eligible trick winner among {} plays (lead {lead:?})",
        plays.len()
    )))
}

/// Play a card into the current trick, enforcing phase, turn and suit-following.
/// Completes and records the trick on the fourth card.
pub fn play_card(
    state: &mut GameState,
    who: Seat,
    card: Card,
) -> Result<PlayCardResult, DomainError> {
    require_phase(state, Phase::Play, "play_card")?;
    require_turn(state, who, "play_card")?;
    let contract = require_final_bid(state, "play_card")?.contract();

    let Some(pos) = state.hand_of(who).iter().position(|c| c.matches(&card)) else {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("Card {card} not in hand"),
        ));
    };
    let held = state.hand_of(who)[pos];

    let lead = lead_suit(&state.hand.current_trick);
    if let Some(lead) = lead {
        if !held.is_suit(lead) && hand_has_suit(state.hand_of(who), lead) {
            return Err(DomainError::validation(
                ValidationKind::MustFollowSuit,
                format!("Must follow {lead:?}"),
            ));
        }
        if !held.is_suit(lead) {
            state.hand.voids.mark(who, lead);
        }
    }

    let removed = state.hand.hands[who as usize].remove(pos);
    state.hand.current_trick.push((who, removed));
    state.turn = Some(next_player(who));

    let trick_no = state.hand.completed_tricks.len() as u8 + 1;
    let mut result = PlayCardResult {
        trick_winner: None,
        trick_no,
        hand_complete: false,
    };
    if state.hand.current_trick.len() < PLAYERS {
        return Ok(result);
    }

    let winner = determine_trick_winner(&state.hand.current_trick, &contract)?;
    state.hand.tricks_won[Team::of(winner).index()] += 1;
    let plays = std::mem::take(&mut state.hand.current_trick);
    state.hand.completed_tricks.push(CompletedTrick {
        trick_no,
        plays,
        winner,
    });
    state.turn = Some(winner);
    result.trick_winner = Some(winner);

    if state.hand.completed_tricks.len() == TRICKS_PER_HAND {
        state.phase = Phase::Score;
        state.turn = None;
        result.hand_complete = true;
    }
    Ok(result)
}
