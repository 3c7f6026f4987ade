//! Kitty exchange: the bid winner takes the six kitty cards, then returns six.

use crate::domain::rules::KITTY_SIZE;
use crate::domain::state::{require_final_bid, require_phase, GameState, Phase, Seat};
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

/// Move the whole kitty into `seat`'s hand.
pub fn absorb_kitty(state: &mut GameState, seat: Seat) -> Result<(), DomainError> {
    if state.hand.kitty.len() != KITTY_SIZE {
        return Err(DomainError::invariant(format!(
            "kitty holds {} cards before absorb",
            state.hand.kitty.len()
        )));
    }
    let kitty = std::mem::take(&mut state.hand.kitty);
    let hand = &mut state.hand.hands[seat as usize];
    hand.extend(kitty);
    hand.sort();
    Ok(())
}

/// Pair each discard with a distinct card in `hand`. Returns hand indices.
fn match_discards(hand: &[Card], discards: &[Card]) -> Result<Vec<usize>, DomainError> {
    let mut taken = vec![false; hand.len()];
    let mut idxs = Vec::with_capacity(discards.len());
    for d in discards {
        let found = hand
            .iter()
            .enumerate()
            .position(|(i, c)| !taken[i] && c.matches(d))
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::CardNotInHand,
                    format!("Discard {d} not in hand"),
                )
            })?;
        taken[found] = true;
        idxs.push(found);
    }
    Ok(idxs)
}

/// Return exactly six cards from the winner's hand to the kitty, stamp the
/// contract's trump onto both jokers and begin play with the winner leading.
///
/// Validation happens before any mutation, so a rejected discard leaves
/// hand and kitty untouched.
pub fn apply_discard(
    state: &mut GameState,
    who: Seat,
    discards: &[Card],
) -> Result<(), DomainError> {
    require_phase(state, Phase::Kitty, "apply_discard")?;
    let final_bid = require_final_bid(state, "apply_discard")?;
    if final_bid.seat != who {
        return Err(DomainError::validation(
            ValidationKind::NotBidWinner,
            format!("Seat {who} did not win the bidding"),
        ));
    }
    if discards.len() != KITTY_SIZE {
        return Err(DomainError::validation(
            ValidationKind::DiscardCount,
            format!("Expected {KITTY_SIZE} discards, got {}", discards.len()),
        ));
    }

    let mut idxs = match_discards(state.hand_of(who), discards)?;
    idxs.sort_unstable_by(|a, b| b.cmp(a));
    let hand = &mut state.hand.hands[who as usize];
    let mut returned: Vec<Card> = idxs.into_iter().map(|i| hand.remove(i)).collect();
    returned.sort();
    state.hand.kitty = returned;

    stamp_jokers(state, final_bid.trump);

    state.phase = Phase::Play;
    state.turn = Some(who);
    Ok(())
}

/// Set every joker's suit (hands and kitty) to `trump`; None clears it.
pub fn stamp_jokers(state: &mut GameState, trump: Option<Suit>) {
    let hands = state.hand.hands.iter_mut().flat_map(|h| h.iter_mut());
    for card in hands.chain(state.hand.kitty.iter_mut()) {
        card.stamp_joker_suit(trump);
    }
}
