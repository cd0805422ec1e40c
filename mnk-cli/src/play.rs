//! Play command - human against the alpha-beta AI in the terminal
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: setup_game(), play_loop()
//! - Level 3: prompt_move(), read_index()
//! - Level 4: input parsing

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;

use mnk_core::{EngineConfig, Game, MoveSearch, Player, PlayerId};

use crate::render::{describe_result, render_board};
use crate::settings::EngineArgs;

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub engine: EngineArgs,

    /// Let the computer make the first move
    #[arg(long)]
    pub computer_first: bool,

    /// Your symbol on the board
    #[arg(long, default_value = "O")]
    pub symbol: char,

    /// The computer's symbol on the board
    #[arg(long, default_value = "X")]
    pub computer_symbol: char,
}

/// Registered game plus the search driving the computer side
struct Session {
    game: Game,
    human: Player,
    computer: Player,
    ai: MoveSearch,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Resolve the engine configuration
/// 2. Register both players
/// 3. Alternate turns until the game is resolved
pub fn run(args: PlayArgs, config_path: Option<&Path>) -> Result<()> {
    let config = args.engine.resolve(config_path)?;
    let mut session = setup_game(&config, args.symbol, args.computer_symbol)?;

    tracing::info!(
        "Starting {}x{} game, {} in a row wins (depth={}, radius={})",
        config.game.board_size,
        config.game.board_size,
        config.game.winning_value,
        config.ai.search_depth,
        config.ai.radius
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_loop(&mut session, args.computer_first, &mut stdin.lock(), &mut stdout.lock())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn setup_game(config: &EngineConfig, symbol: char, computer_symbol: char) -> Result<Session> {
    let mut game = Game::new(config.game).context("Invalid board configuration")?;
    let human = game.add_player(symbol)?;
    let computer = game
        .add_player(computer_symbol)
        .context("Computer symbol must differ from yours")?;
    let roster = game.roster()?;
    let ai = MoveSearch::new(&config.ai, config.game.winning_value, roster);

    Ok(Session {
        game,
        human,
        computer,
        ai,
    })
}

fn play_loop<R: BufRead, W: Write>(
    session: &mut Session,
    computer_first: bool,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let roster = session.game.roster()?;
    let mut human_turn = !computer_first;

    while !session.game.result().is_resolved() {
        if human_turn {
            writeln!(out, "\n{}", render_board(session.game.board(), &roster))?;
            prompt_move(&mut session.game, session.human.id, input, out)?;
        } else {
            let outcome = session.game.play_ai(&session.ai, session.computer.id);
            tracing::debug!("search visited {} nodes, score {}", outcome.nodes, outcome.score);
            if let Some((row, col)) = outcome.chosen {
                writeln!(out, "Computer plays row {}, column {}", row + 1, col + 1)?;
            }
        }
        human_turn = !human_turn;
    }

    writeln!(out, "\n{}", render_board(session.game.board(), &roster))?;
    writeln!(out, "{}", describe_result(session.game.result(), &roster))?;
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Ask until the human names a legal cell, then place it
fn prompt_move<R: BufRead, W: Write>(
    game: &mut Game,
    player: PlayerId,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let size = game.config().board_size;
    loop {
        let row = read_index(input, out, "Row", size)?;
        let col = read_index(input, out, "Column", size)?;

        match game.place(player, row, col) {
            Ok(()) => return Ok(()),
            Err(err) if err.is_recoverable() => writeln!(out, "{}, try again", err)?,
            Err(err) => return Err(err.into()),
        }
    }
}

/// Read a 1-based index in `1..=size`, returning it 0-based
fn read_index<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
    size: usize,
) -> Result<usize> {
    let mut line = String::new();
    loop {
        write!(out, "{} (1-{}): ", label, size)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            bail!("Input closed before the game finished");
        }

        match parse_index(&line, size) {
            Some(index) => return Ok(index),
            None => writeln!(out, "Please enter a number between 1 and {}", size)?,
        }
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn parse_index(text: &str, size: usize) -> Option<usize> {
    let value: usize = text.trim().parse().ok()?;
    (1..=size).contains(&value).then(|| value - 1)
}

// ============================================================================
// TESTS
// ============================================================================
