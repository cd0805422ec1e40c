//! Match command - self-play between two AI configurations
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_match_config(), play(), report_results()
//! - Level 3: second_seat_ai()
//! - Level 4: formatting utilities

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use mnk_core::{AiConfig, EngineConfig};
use mnk_tournament::{play_match, play_match_parallel, MatchConfig, MatchResult, Seat};

use crate::settings::EngineArgs;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Board and first-seat AI settings
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Search depth for the second seat (defaults to the first seat's)
    #[arg(long)]
    pub second_depth: Option<u32>,

    /// Candidate radius for the second seat
    #[arg(long)]
    pub second_radius: Option<usize>,

    /// Offensive base for the second seat
    #[arg(long)]
    pub second_offensive_base: Option<u32>,

    /// Defensive base for the second seat
    #[arg(long)]
    pub second_defensive_base: Option<u32>,

    /// Number of games to play (seats alternate who moves first)
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Random plies before the AIs take over
    #[arg(long, default_value = "2")]
    pub opening_plies: usize,

    /// Base seed for the random openings
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play games one after another instead of on the thread pool
    #[arg(long)]
    pub sequential: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
///
/// 1. Build the match configuration
/// 2. Play the match
/// 3. Report results
pub fn run(args: MatchArgs, config_path: Option<&Path>) -> Result<()> {
    let engine = args.engine.resolve(config_path)?;
    let config = build_match_config(&engine, &args)?;

    tracing::info!(
        "Starting match: {}x{} K={} ({} games, depth {} vs {}, seed={})",
        config.game.board_size,
        config.game.board_size,
        config.game.winning_value,
        config.games,
        config.first.search_depth,
        config.second.search_depth,
        config.seed
    );

    let results = play(&config, args.sequential)?;

    report_results(&config, &results, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_match_config(engine: &EngineConfig, args: &MatchArgs) -> Result<MatchConfig> {
    let config = MatchConfig {
        game: engine.game,
        first: engine.ai,
        second: second_seat_ai(engine.ai, args),
        games: args.games,
        opening_plies: args.opening_plies,
        seed: create_seed(args.seed),
    };
    config.validate().context("Invalid second seat settings")?;
    Ok(config)
}

fn play(config: &MatchConfig, sequential: bool) -> Result<MatchResult> {
    let result = if sequential {
        play_match(config)
    } else {
        play_match_parallel(config)
    };
    result.context("Match aborted")
}

fn report_results(config: &MatchConfig, results: &MatchResult, json: bool) -> Result<()> {
    if json {
        print_json_results(config, results)
    } else {
        print_text_results(results);
        Ok(())
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// First-seat settings with the second-seat overrides applied
fn second_seat_ai(first: AiConfig, args: &MatchArgs) -> AiConfig {
    let mut ai = first;
    if let Some(depth) = args.second_depth {
        ai.search_depth = depth;
    }
    if let Some(radius) = args.second_radius {
        ai.radius = radius;
    }
    if let Some(base) = args.second_offensive_base {
        ai.offensive_base = base;
    }
    if let Some(base) = args.second_defensive_base {
        ai.defensive_base = base;
    }
    ai
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Seed from the flag or fresh entropy
fn create_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(s) => s,
        None => ChaCha8Rng::from_entropy().gen(),
    }
}

fn percent(rate: f32) -> f32 {
    rate * 100.0
}

fn seat_label(seat: Option<Seat>) -> &'static str {
    match seat {
        Some(Seat::First) => "first seat",
        Some(Seat::Second) => "second seat",
        None => "draw",
    }
}

/// Print results as JSON
fn print_json_results(config: &MatchConfig, results: &MatchResult) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        config: &'a MatchConfig,
        first_win_rate: f32,
        second_win_rate: f32,
        draw_rate: f32,
        results: &'a MatchResult,
    }

    let output = JsonOutput {
        config,
        first_win_rate: results.first_win_rate(),
        second_win_rate: results.second_win_rate(),
        draw_rate: results.draw_rate(),
        results,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print results as text
fn print_text_results(results: &MatchResult) {
    println!("\n=== Match Results ===");
    println!("Total games:  {}", results.games_played);
    println!(
        "First seat:   {} ({:.1}%)",
        results.first_wins,
        percent(results.first_win_rate())
    );
    println!(
        "Second seat:  {} ({:.1}%)",
        results.second_wins,
        percent(results.second_win_rate())
    );
    println!(
        "Draws:        {} ({:.1}%)",
        results.draws,
        percent(results.draw_rate())
    );
    println!("Avg plies:    {:.1}", results.avg_plies);

    println!("\nGame details:");
    for game in &results.outcomes {
        println!(
            "  Game {}: {} in {} plies ({:?} seat moved first)",
            game.game_index + 1,
            seat_label(game.winner),
            game.plies,
            game.first_mover
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
