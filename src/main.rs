//! Headless runner (default binary).
//!
//! Plays one or more assisted games with the placement search steering every
//! piece, logs a line per game, and prints a JSON report to stdout.
//! Configuration comes from `TETRAI_*` environment variables; log level from
//! `RUST_LOG` (default `info`).

mod config;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

use tetrai::core::{GameState, PieceQueue};
use tetrai::engine::{PlacementSearch, SearchConfig, SearchWeights, Session};
use tetrai::types::{Mode, PieceKind};

use config::RunnerConfig;

#[derive(Debug, Serialize)]
struct GameReport {
    seed: u32,
    pieces: u32,
    lines: u32,
    score: u32,
    points: u32,
    game_over: bool,
    /// Spawn counts keyed by piece letter
    spawns: Vec<(&'static str, u32)>,
}

#[derive(Debug, Serialize)]
struct RunReport {
    piece_rule: &'static str,
    lookahead: bool,
    weights: SearchWeights,
    games: Vec<GameReport>,
    total_lines: u32,
    mean_lines: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = RunnerConfig::from_env()?;
    info!(
        "running {} game(s), seed {}, rule {}, lookahead {}",
        config.games,
        config.seed,
        config.piece_rule.as_str(),
        config.lookahead
    );
    if let Some(path) = &config.weights_path {
        info!("weights loaded from {}", path);
    }

    let report = run(&config);
    let json = serde_json::to_string_pretty(&report).context("serializing run report")?;
    println!("{}", json);
    Ok(())
}

fn run(config: &RunnerConfig) -> RunReport {
    let search = PlacementSearch::new(SearchConfig {
        weights: config.weights,
        lookahead: config.lookahead,
    });

    let games: Vec<GameReport> = (0..config.games)
        .map(|i| {
            let seed = config.seed.wrapping_add(i);
            play_game(seed, config, search.clone())
        })
        .collect();

    let total_lines: u32 = games.iter().map(|g| g.lines).sum();
    let mean_lines = if games.is_empty() {
        0.0
    } else {
        total_lines as f64 / games.len() as f64
    };

    RunReport {
        piece_rule: config.piece_rule.as_str(),
        lookahead: config.lookahead,
        weights: config.weights,
        games,
        total_lines,
        mean_lines,
    }
}

fn play_game(seed: u32, config: &RunnerConfig, search: PlacementSearch) -> GameReport {
    let state = GameState::with_queue(PieceQueue::with_rule(seed, config.piece_rule));
    let mut session = Session::new(state, search, Mode::Assisted);

    while !session.is_game_over() && session.state().piece_id() <= config.max_pieces {
        session.tick();
    }

    let state = session.state();
    let pieces = state.piece_id().min(config.max_pieces);
    let game_over = session.is_game_over();
    info!(
        "seed {}: {} pieces, {} lines, score {}{}",
        seed,
        pieces,
        state.lines(),
        state.score(),
        if game_over { " (topped out)" } else { "" }
    );

    GameReport {
        seed,
        pieces,
        lines: state.lines(),
        score: state.score(),
        points: state.points(),
        game_over,
        spawns: PieceKind::ALL
            .iter()
            .map(|k| (k.as_str(), state.spawn_stats()[k.index()]))
            .collect(),
    }
}
