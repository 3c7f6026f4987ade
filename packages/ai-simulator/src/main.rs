//! AI Simulator CLI - plays AI-only Bid Whist games in memory and records
//! per-game metrics for comparing difficulty tiers.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use bidwhist_engine::telemetry::{init_tracing, LogFormat};
use bidwhist_engine::{Difficulty, Team};
use clap::{Parser, ValueEnum};
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::{MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "ai-simulator")]
#[command(about = "In-memory Bid Whist simulator for comparing AI tiers")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// AI tier for all seats (shortcut to set all 4 seats to the same tier)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AiType>,

    /// AI tier for seat 0
    #[arg(long, default_value = "hard")]
    seat0: AiType,

    /// AI tier for seat 1
    #[arg(long, default_value = "hard")]
    seat1: AiType,

    /// AI tier for seat 2
    #[arg(long, default_value = "hard")]
    seat2: AiType,

    /// AI tier for seat 3
    #[arg(long, default_value = "hard")]
    seat3: AiType,

    /// Base seed; game N is dealt from the seed derived from this and N
    #[arg(long, conflicts_with = "seed_hex")]
    seed: Option<i64>,

    /// Base seed as 16 hex digits (little-endian), as printed in the JSONL output
    #[arg(long)]
    seed_hex: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AiType {
    Easy,
    Medium,
    Hard,
}

impl AiType {
    fn difficulty(self) -> Difficulty {
        match self {
            AiType::Easy => Difficulty::Easy,
            AiType::Medium => Difficulty::Medium,
            AiType::Hard => Difficulty::Hard,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only show warnings/errors; RUST_LOG overrides
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    init_tracing(LogFormat::Plain, filter)?;

    let seat_types = match args.seats {
        Some(all) => [all; 4],
        None => [args.seat0, args.seat1, args.seat2, args.seat3],
    };
    let seats = seat_types.map(AiType::difficulty);
    let ai_types = seats.map(|d| d.as_str().to_string());

    let base_seed = match (args.seed, args.seed_hex.as_deref()) {
        (Some(seed), _) => seed,
        (None, Some(hex_seed)) => parse_seed_hex(hex_seed)?,
        (None, None) => rand::random(),
    };

    if args.show_output {
        info!(games = args.games, base_seed, ?ai_types, "Starting AI simulator");
        info!("Output directory: {}", args.output_dir);
    }

    let simulator = Simulator::new(base_seed)?;
    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_id = i64::from(game_num);
        let game_start = Instant::now();

        match simulator.simulate_game(game_id, &seats) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(
                    game_id,
                    base_seed,
                    ai_types.clone(),
                    args.games,
                    &result,
                    duration_ms,
                    &args.metrics_level,
                );

                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }
                if args.verbose {
                    info!(
                        "Game {} completed: scores={:?} winner={:?}",
                        game_num, result.final_scores, result.winner
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let jsonl_path = jsonl_path.cloned();
    let csv_path = csv_path.clone();
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.games);
    }

    Ok(())
}

fn parse_seed_hex(raw: &str) -> Result<i64, Box<dyn std::error::Error>> {
    let bytes: [u8; 8] = hex::decode(raw.trim())?
        .try_into()
        .map_err(|_| format!("seed hex must be 8 bytes, got {raw:?}"))?;
    Ok(i64::from_le_bytes(bytes))
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: std::time::Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per game: {:?}",
        elapsed / results.len() as u32
    );

    let mut wins = [0u32; 2];
    let mut total_hands = 0usize;
    for result in results {
        wins[result.winner.index()] += 1;
        total_hands += result.hands.len();
    }

    println!("\n=== Results by Team ===");
    for team in Team::ALL {
        let win_rate = (wins[team.index()] as f64 / results.len() as f64) * 100.0;
        println!(
            "Team {:?}: wins={} ({:.1}%)",
            team,
            wins[team.index()],
            win_rate
        );
    }
    println!(
        "Average hands per game: {:.1}",
        total_hands as f64 / results.len() as f64
    );
}
