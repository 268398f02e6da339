//! Session driver
//!
//! A [`Session`] owns one game and one search engine and advances them one
//! tick at a time. Each tick it refreshes the plan for the falling piece (the
//! search runs once per piece and is cached by piece id), steers the piece
//! toward the best placement when the mode is `Assisted`, and then applies one
//! gravity step.

use log::{debug, info};

use tetrai_core::GameState;
use tetrai_types::{Command, Mode};

use crate::search::{Placement, PlacementSearch, SearchOutcome};

/// Rotation attempts per tick while steering
pub const MAX_ROTATIONS_PER_TICK: usize = 4;

/// Column shifts per tick while steering
pub const MAX_SHIFTS_PER_TICK: usize = 5;

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub lines_cleared: u32,
    pub game_over: bool,
}

/// Plan memoized for one piece.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CachedPlan {
    piece_id: u32,
    outcome: Option<SearchOutcome>,
}

#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    search: PlacementSearch,
    mode: Mode,
    cache: Option<CachedPlan>,
    /// Set when the search finds no legal placement for a live piece.
    stalled: bool,
}

impl Session {
    /// Wrap a game. An unstarted game is started.
    pub fn new(mut state: GameState, search: PlacementSearch, mode: Mode) -> Self {
        state.start();
        Self {
            state,
            search,
            mode,
            cache: None,
            stalled: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            debug!("mode {} -> {}", self.mode.as_str(), mode.as_str());
        }
        self.mode = mode;
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over() || self.stalled
    }

    /// Best and worst placement for the falling piece, computed once per piece.
    pub fn plan(&mut self) -> Option<SearchOutcome> {
        if self.state.active().is_none() {
            self.cache = None;
            return None;
        }

        let piece_id = self.state.piece_id();
        if let Some(cached) = self.cache {
            if cached.piece_id == piece_id {
                return cached.outcome;
            }
        }

        let outcome = self.search.plan(&self.state);
        match &outcome {
            Some(o) => debug!(
                "piece {}: best {:?}@{} ({:.3}), worst {:?}@{} ({:.3}), {} candidates",
                piece_id,
                o.best.orientation,
                o.best.x,
                o.best.score,
                o.worst.orientation,
                o.worst.x,
                o.worst.score,
                o.candidates
            ),
            None => debug!("piece {}: no legal placement", piece_id),
        }
        self.cache = Some(CachedPlan { piece_id, outcome });
        outcome
    }

    pub fn best(&mut self) -> Option<Placement> {
        self.plan().map(|o| o.best)
    }

    pub fn worst(&mut self) -> Option<Placement> {
        self.plan().map(|o| o.worst)
    }

    /// Forward a command to the game
    pub fn apply(&mut self, command: Command) -> u32 {
        if command == Command::Reset {
            self.cache = None;
            self.stalled = false;
        }
        self.state.apply(command)
    }

    /// Advance one tick: plan, steer (in `Assisted` mode), then gravity.
    pub fn tick(&mut self) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome {
                lines_cleared: 0,
                game_over: true,
            };
        }

        let plan = self.plan();
        if plan.is_none() && self.state.active().is_some() {
            info!(
                "no legal placement for piece {}; ending game",
                self.state.piece_id()
            );
            self.stalled = true;
            return TickOutcome {
                lines_cleared: 0,
                game_over: true,
            };
        }

        if self.mode == Mode::Assisted {
            if let Some(outcome) = plan {
                self.steer_toward(&outcome.best);
            }
        }

        let lines_cleared = self.state.step_gravity();
        let game_over = self.state.is_game_over();
        if game_over {
            info!(
                "game over after {} pieces: {} lines, score {}",
                self.state.piece_id(),
                self.state.lines(),
                self.state.score()
            );
        }

        TickOutcome {
            lines_cleared,
            game_over,
        }
    }

    /// Rotate right until the orientation matches, then shift toward the column.
    fn steer_toward(&mut self, target: &Placement) {
        for _ in 0..MAX_ROTATIONS_PER_TICK {
            match self.state.active() {
                Some(active) if active.orientation != target.orientation => {
                    self.state.rotate_right();
                }
                _ => break,
            }
        }

        for _ in 0..MAX_SHIFTS_PER_TICK {
            let Some(active) = self.state.active() else {
                break;
            };
            if active.x > target.x {
                self.state.move_left();
            } else if active.x < target.x {
                self.state.move_right();
            } else {
                break;
            }
        }
    }
}
