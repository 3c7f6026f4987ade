//! RNG seed derivation utilities for deterministic game behavior.
//!
//! A game carries one base seed; every hand derives its own dealing seed
//! from it so a seeded game replays identically hand by hand.

/// Derive a game's base seed from a configured engine seed and the game id,
/// so games hosted by one engine do not share deals.
pub fn derive_game_seed(engine_seed: i64, game_id: i64) -> i64 {
    engine_seed.wrapping_add(game_id.wrapping_mul(7919))
}

/// Derive a seed for dealing cards in a hand.
///
/// # Arguments
///
/// * `game_seed` - Base RNG seed of the game
/// * `hand_no` - Hand number (1-based)
///
/// # Returns
///
/// Derived seed that is unique per (game, hand) combination.
pub fn derive_dealing_seed(game_seed: i64, hand_no: u32) -> u64 {
    // Cast i64 to u64 for RNG (sign doesn't matter for seed)
    let base = game_seed as u64;

    base.wrapping_add((hand_no as u64).wrapping_mul(1000000))
        .wrapping_add(2)
}
