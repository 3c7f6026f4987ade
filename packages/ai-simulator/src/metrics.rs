//! Metrics collection and output for AI simulation results.

use bidwhist_engine::Team;
use serde::Serialize;

use crate::simulator::{GameResult, HandRecord};
use crate::types::MetricsLevel;

/// Complete game metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct GameMetrics {
    pub game_id: i64,
    pub base_seed: i64,
    /// Little-endian hex of the base seed, for copying into `--seed-hex`.
    pub seed_hex: String,
    pub timestamp: String,
    pub config: GameConfig,
    pub result: GameResultMetrics,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hands: Vec<HandMetrics>,
    pub player_metrics: Vec<PlayerMetrics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameConfig {
    pub ai_types: [String; 4],
    pub total_games: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResultMetrics {
    pub final_scores: [i32; 2],
    pub winner: Team,
    pub hands_played: usize,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HandMetrics {
    pub hand_no: u32,
    pub first_bidder: u8,
    pub bids: [Option<u8>; 4],
    pub declarer: Option<u8>,
    pub value: Option<u8>,
    pub direction: Option<String>,
    pub trump: Option<String>,
    pub no_trump: bool,
    pub forced: bool,
    pub tricks_won: [u8; 4],
    pub made: bool,
    pub delta: i32,
    pub scores: [i32; 2],
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMetrics {
    pub seat: u8,
    pub ai_type: String,
    pub team: Team,
    pub bids_made: u32,
    pub contracts_won: u32,
    pub contracts_made: u32,
    pub avg_tricks_per_hand: f64,
}

/// Build metrics from a finished game.
pub fn build_game_metrics(
    game_id: i64,
    base_seed: i64,
    ai_types: [String; 4],
    total_games: u32,
    result: &GameResult,
    duration_ms: f64,
    level: &MetricsLevel,
) -> GameMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let hands: Vec<HandMetrics> = result.hands.iter().map(build_hand_metrics).collect();
    let player_metrics: Vec<PlayerMetrics> = (0..4)
        .map(|seat| build_player_metrics(seat as u8, &ai_types[seat], &hands))
        .collect();

    GameMetrics {
        game_id,
        base_seed,
        seed_hex: hex::encode(base_seed.to_le_bytes()),
        timestamp,
        config: GameConfig {
            ai_types,
            total_games,
        },
        result: GameResultMetrics {
            final_scores: result.final_scores,
            winner: result.winner,
            hands_played: result.hands.len(),
            duration_ms,
        },
        hands: match level {
            MetricsLevel::Detailed => hands,
            MetricsLevel::Basic => Vec::new(),
        },
        player_metrics,
    }
}

fn build_hand_metrics(hand: &HandRecord) -> HandMetrics {
    let bids = hand.bids.map(|b| b.and_then(|choice| choice.value()));
    let final_bid = hand.final_bid;
    // Forced bids are the only contracts nobody bid for.
    let forced = final_bid.is_some() && bids.iter().all(Option::is_none);
    let tricks_required = final_bid.map(|b| b.tricks_required()).unwrap_or(u8::MAX);
    let declarer_tricks = final_bid
        .map(|b| team_tricks(&hand.tricks, Team::of(b.seat)))
        .unwrap_or(0);

    HandMetrics {
        hand_no: hand.hand_no,
        first_bidder: hand.first_bidder,
        bids,
        declarer: final_bid.map(|b| b.seat),
        value: final_bid.map(|b| b.value),
        direction: final_bid.map(|b| format!("{:?}", b.direction)),
        trump: final_bid.and_then(|b| b.trump).map(|t| format!("{t:?}")),
        no_trump: final_bid.is_some_and(|b| b.no_trump),
        forced,
        tricks_won: hand.tricks,
        made: declarer_tricks >= tricks_required,
        delta: hand.delta,
        scores: hand.scores,
    }
}

fn team_tricks(tricks: &[u8; 4], team: Team) -> u8 {
    tricks
        .iter()
        .enumerate()
        .filter(|(seat, _)| Team::of(*seat as u8) == team)
        .map(|(_, t)| t)
        .sum()
}

fn build_player_metrics(seat: u8, ai_type: &str, hands: &[HandMetrics]) -> PlayerMetrics {
    let bids_made = hands
        .iter()
        .filter(|h| h.bids[seat as usize].is_some())
        .count() as u32;
    let won: Vec<&HandMetrics> = hands.iter().filter(|h| h.declarer == Some(seat)).collect();
    let contracts_made = won.iter().filter(|h| h.made).count() as u32;

    let total_tricks: u32 = hands.iter().map(|h| h.tricks_won[seat as usize] as u32).sum();
    let avg_tricks = if !hands.is_empty() {
        total_tricks as f64 / hands.len() as f64
    } else {
        0.0
    };

    PlayerMetrics {
        seat,
        ai_type: ai_type.to_string(),
        team: Team::of(seat),
        bids_made,
        contracts_won: won.len() as u32,
        contracts_made,
        avg_tricks_per_hand: avg_tricks,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub game_id: i64,
    pub base_seed: i64,
    pub winner: String,
    pub team_a_score: i32,
    pub team_b_score: i32,
    pub hands_played: usize,
    pub seat0_ai: String,
    pub seat1_ai: String,
    pub seat2_ai: String,
    pub seat3_ai: String,
}

impl From<&GameMetrics> for CsvSummaryRow {
    fn from(metrics: &GameMetrics) -> Self {
        CsvSummaryRow {
            game_id: metrics.game_id,
            base_seed: metrics.base_seed,
            winner: format!("{:?}", metrics.result.winner),
            team_a_score: metrics.result.final_scores[0],
            team_b_score: metrics.result.final_scores[1],
            hands_played: metrics.result.hands_played,
            seat0_ai: metrics.config.ai_types[0].clone(),
            seat1_ai: metrics.config.ai_types[1].clone(),
            seat2_ai: metrics.config.ai_types[2].clone(),
            seat3_ai: metrics.config.ai_types[3].clone(),
        }
    }
}
