//! Placement search
//!
//! For the active piece, every distinct orientation and every in-bounds column
//! is dropped onto a copy of the grid, locked, and scored. The search reports
//! the highest-scoring placement (best) and the lowest-scoring one (worst).
//!
//! Enumeration order is fixed: orientations in index order, then columns left
//! to right. Ties keep the first placement found, so results are reproducible.
//! The live game state is only ever read.

use tetrai_core::{distinct_orientations, get_bounds, Board, GameState, LockOutcome};
use tetrai_types::{Orientation, PieceKind, BOARD_WIDTH};

use crate::features::BoardFeatures;
use crate::weights::SearchWeights;

/// A candidate resting pose for a piece.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub kind: PieceKind,
    pub orientation: Orientation,
    pub x: i8,
    /// Row the piece lands on when dropped from the spawn row.
    pub y: i8,
    /// Heuristic fitness this placement was ranked with.
    pub score: f64,
}

/// Grid produced by simulating one placement on a copy of the board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub grid: Board,
    pub landing_y: i8,
    pub lines_cleared: u32,
}

/// Best and worst placements from one enumeration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOutcome {
    pub best: Placement,
    pub worst: Placement,
    /// Number of legal placements that were scored.
    pub candidates: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SearchConfig {
    pub weights: SearchWeights,
    /// Score each placement by the best follow-up of the upcoming piece.
    pub lookahead: bool,
}

/// Drop `kind` at `(orientation, x)` from its spawn row onto a copy of `board`.
///
/// Returns `None` when the piece does not fit at the spawn row for that
/// column, or when it would come to rest partly above the grid.
pub fn simulate(
    board: &Board,
    kind: PieceKind,
    orientation: Orientation,
    x: i8,
) -> Option<BoardState> {
    let spawn_y = -get_bounds(kind, orientation).min_y;
    if !board.can_place(kind, orientation, x, spawn_y) {
        return None;
    }

    let mut y = spawn_y;
    while board.can_place(kind, orientation, x, y + 1) {
        y += 1;
    }

    let mut grid = board.clone();
    if grid.lock_piece(kind, orientation, x, y) != LockOutcome::Locked {
        return None;
    }
    let lines_cleared = grid.clear_full_rows().len() as u32;

    Some(BoardState {
        grid,
        landing_y: y,
        lines_cleared,
    })
}

/// Columns where the piece is horizontally inside the grid.
fn column_range(kind: PieceKind, orientation: Orientation) -> std::ops::Range<i8> {
    let bounds = get_bounds(kind, orientation);
    -bounds.min_x..BOARD_WIDTH as i8 - bounds.max_x
}

#[derive(Debug, Clone, Default)]
pub struct PlacementSearch {
    config: SearchConfig,
}

impl PlacementSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn with_weights(weights: SearchWeights) -> Self {
        Self::new(SearchConfig {
            weights,
            lookahead: false,
        })
    }

    /// Best and worst placement for the active piece of `state`.
    ///
    /// `None` when there is no active piece or no legal placement.
    pub fn plan(&self, state: &GameState) -> Option<SearchOutcome> {
        let active = state.active()?;
        let next = self.config.lookahead.then(|| state.next_kind());
        self.plan_for(state.board(), active.kind, next)
    }

    pub fn best_placement(&self, state: &GameState) -> Option<Placement> {
        self.plan(state).map(|outcome| outcome.best)
    }

    pub fn worst_placement(&self, state: &GameState) -> Option<Placement> {
        self.plan(state).map(|outcome| outcome.worst)
    }

    /// Enumerate placements of `kind` on `board`.
    ///
    /// With `next` set, each placement is scored by the best placement of
    /// `next` on the grid it leaves behind (plus the rows it cleared itself).
    pub fn plan_for(
        &self,
        board: &Board,
        kind: PieceKind,
        next: Option<PieceKind>,
    ) -> Option<SearchOutcome> {
        let mut best: Option<Placement> = None;
        let mut worst: Option<Placement> = None;
        let mut candidates = 0;

        for &orientation in distinct_orientations(kind) {
            for x in column_range(kind, orientation) {
                let Some(state) = simulate(board, kind, orientation, x) else {
                    continue;
                };
                candidates += 1;

                let score = self.score_state(&state, next);
                let placement = Placement {
                    kind,
                    orientation,
                    x,
                    y: state.landing_y,
                    score,
                };

                if best.map_or(true, |b| score > b.score) {
                    best = Some(placement);
                }
                if worst.map_or(true, |w| score < w.score) {
                    worst = Some(placement);
                }
            }
        }

        Some(SearchOutcome {
            best: best?,
            worst: worst?,
            candidates,
        })
    }

    /// Heuristic fitness of a locked grid
    pub fn score_grid(&self, grid: &Board, lines_cleared: u32) -> f64 {
        self.config
            .weights
            .score(&BoardFeatures::of(grid), lines_cleared)
    }

    fn score_state(&self, state: &BoardState, next: Option<PieceKind>) -> f64 {
        let own = self.score_grid(&state.grid, state.lines_cleared);
        let Some(next) = next else {
            return own;
        };

        match self.plan_for(&state.grid, next, None) {
            Some(follow) => {
                follow.best.score + state.lines_cleared as f64 * self.config.weights.lines_cleared
            }
            None => own,
        }
    }
}
