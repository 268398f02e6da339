//! Game state module - the authoritative board model
//!
//! Ties together the grid, the falling piece, the piece source and scoring.
//! Every operation runs to completion: a lock, the row clear that follows it,
//! and the next spawn all happen inside one call.
//!
//! Lifecycle: a fresh state is empty (no active piece). [`GameState::start`]
//! or [`GameState::reset`] spawns the first piece. When a spawn pose collides
//! with the grid the game is over; every command is then a no-op until the
//! next `reset`.

use crate::board::{Board, LockOutcome};
use crate::pieces::{cells_at, spawn_position, PieceShape};
use crate::rng::PieceQueue;
use crate::scoring::calculate_line_score;
use crate::types::*;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub orientation: Orientation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Create a new tetromino at its spawn pose
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = spawn_position(kind);
        Self {
            kind,
            orientation: Orientation::North,
            x,
            y,
        }
    }

    /// Absolute cells occupied by the piece
    pub fn cells(&self) -> PieceShape {
        cells_at(self.kind, self.orientation, self.x, self.y)
    }

    /// Check if the piece fits on the board at its pose
    pub fn fits(&self, board: &Board) -> bool {
        board.can_place(self.kind, self.orientation, self.x, self.y)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Tetromino>,
    next: PieceKind,
    piece_queue: PieceQueue,
    /// Monotonic id of the active piece; increments on every successful
    /// spawn and is never reset, so it identifies a piece across restarts.
    piece_id: u32,
    spawn_stats: [u32; 7],
    /// Rows cleared, one point per row
    score: u32,
    /// Classic line-clear points
    points: u32,
    lines: u32,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new game with a uniform piece queue and the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_queue(PieceQueue::new(seed))
    }

    /// Create a new game drawing pieces from `queue`
    pub fn with_queue(queue: PieceQueue) -> Self {
        Self::with_board(Board::new(), queue)
    }

    /// Create a game over a prepared grid.
    ///
    /// The state starts empty; [`GameState::start`] spawns onto `board` as-is,
    /// while [`GameState::reset`] would clear it first.
    pub fn with_board(board: Board, mut queue: PieceQueue) -> Self {
        let next = queue.draw();
        Self {
            board,
            active: None,
            next,
            piece_queue: queue,
            piece_id: 0,
            spawn_stats: [0; 7],
            score: 0,
            points: 0,
            lines: 0,
            game_over: false,
            started: false,
        }
    }

    /// Spawn the first piece onto the current grid
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    /// Clear the grid and counters, then spawn a fresh piece
    pub fn reset(&mut self) {
        self.board.clear();
        self.active = None;
        self.spawn_stats = [0; 7];
        self.score = 0;
        self.points = 0;
        self.lines = 0;
        self.game_over = false;
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score under the classic 40/100/300/1200 table
    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Kind of the piece that spawns after the active one
    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    /// Number of spawned pieces per kind, indexed by `PieceKind::index()`
    pub fn spawn_stats(&self) -> &[u32; 7] {
        &self.spawn_stats
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn width(&self) -> u8 {
        self.board.width()
    }

    pub fn height(&self) -> u8 {
        self.board.height()
    }

    /// Grid lookup; `0` is empty.
    ///
    /// # Panics
    ///
    /// Panics when `(x, y)` is outside the grid.
    pub fn cell_value(&self, x: i8, y: i8) -> u8 {
        self.board.cell_value(x, y)
    }

    /// Absolute cells of the active piece (for rendering)
    pub fn current_shape_cells(&self) -> Option<PieceShape> {
        self.active.map(|p| p.cells())
    }

    /// Legality of a pose against the live grid
    pub fn can_place(&self, kind: PieceKind, orientation: Orientation, x: i8, y: i8) -> bool {
        self.board.can_place(kind, orientation, x, y)
    }

    /// Spawn the next piece; sets game over if its spawn pose collides
    fn spawn_piece(&mut self) -> bool {
        let piece = Tetromino::spawn(self.next);
        if !piece.fits(&self.board) {
            self.active = None;
            self.game_over = true;
            return false;
        }

        self.active = Some(piece);
        self.next = self.piece_queue.draw();
        self.piece_id = self.piece_id.wrapping_add(1);
        self.spawn_stats[piece.kind.index()] += 1;
        true
    }

    /// Try to move the active piece
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = Tetromino {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        };
        if !moved.fits(&self.board) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Try to turn the active piece in place; no kicks
    fn try_orient(&mut self, orientation: Orientation) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let turned = Tetromino {
            orientation,
            ..active
        };
        if !turned.fits(&self.board) {
            return false;
        }
        self.active = Some(turned);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1, 0)
    }

    pub fn rotate_left(&mut self) -> bool {
        match self.active {
            Some(active) => self.try_orient(active.orientation.rotate_left()),
            None => false,
        }
    }

    pub fn rotate_right(&mut self) -> bool {
        match self.active {
            Some(active) => self.try_orient(active.orientation.rotate_right()),
            None => false,
        }
    }

    /// Advance the active piece one row, locking it when it cannot descend.
    ///
    /// Returns the number of rows cleared by the lock (0 if the piece moved).
    pub fn step_gravity(&mut self) -> u32 {
        if self.active.is_none() {
            return 0;
        }
        if self.try_shift(0, 1) {
            return 0;
        }
        self.lock_active()
    }

    /// Drop the active piece to its resting row and lock it
    pub fn hard_drop(&mut self) -> u32 {
        if self.active.is_none() {
            return 0;
        }
        while self.try_shift(0, 1) {}
        self.lock_active()
    }

    /// Row the active piece would come to rest on (ghost row)
    pub fn landing_y(&self) -> Option<i8> {
        let mut piece = self.active?;
        while (Tetromino {
            y: piece.y + 1,
            ..piece
        })
        .fits(&self.board)
        {
            piece.y += 1;
        }
        Some(piece.y)
    }

    /// Lock the active piece, clear full rows, and spawn the next piece
    fn lock_active(&mut self) -> u32 {
        let Some(active) = self.active.take() else {
            return 0;
        };

        let outcome = self
            .board
            .lock_piece(active.kind, active.orientation, active.x, active.y);

        let lines_cleared = self.board.clear_full_rows().len() as u32;
        self.lines += lines_cleared;
        self.score += lines_cleared;
        self.points += calculate_line_score(lines_cleared);

        match outcome {
            LockOutcome::Locked => {
                self.spawn_piece();
            }
            // A piece that settles partly above the grid, or an active pose
            // that no longer fits, ends the game.
            LockOutcome::LockedAboveTop | LockOutcome::Rejected => {
                self.game_over = true;
            }
        }

        lines_cleared
    }

    /// Apply a command; returns the rows cleared (0 for non-locking commands)
    pub fn apply(&mut self, command: Command) -> u32 {
        match command {
            Command::MoveLeft => {
                self.move_left();
                0
            }
            Command::MoveRight => {
                self.move_right();
                0
            }
            Command::RotateLeft => {
                self.rotate_left();
                0
            }
            Command::RotateRight => {
                self.rotate_right();
                0
            }
            Command::HardDrop => self.hard_drop(),
            Command::StepGravity => self.step_gravity(),
            Command::Reset => {
                self.reset();
                0
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(kinds: &[PieceKind]) -> GameState {
        let mut state = GameState::with_queue(PieceQueue::scripted(kinds));
        state.start();
        state
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.started);
        assert!(!state.game_over);
        assert_eq!(state.score, 0);
        assert_eq!(state.lines, 0);
        assert_eq!(state.piece_id, 0);
        assert!(state.active.is_none());
        assert!(state.current_shape_cells().is_none());
    }

    #[test]
    fn test_commands_before_start_are_noops() {
        let mut state = GameState::new(3);
        assert!(!state.move_left());
        assert!(!state.rotate_right());
        assert_eq!(state.step_gravity(), 0);
        assert_eq!(state.hard_drop(), 0);
        assert_eq!(state.board().filled_count(), 0);
    }

    #[test]
    fn test_start_spawns_next_kind() {
        let mut state = GameState::with_queue(PieceQueue::scripted(&[PieceKind::T, PieceKind::O]));
        assert_eq!(state.next_kind(), PieceKind::T);

        state.start();
        let active = state.active.unwrap();
        assert_eq!(active.kind, PieceKind::T);
        assert_eq!(active.orientation, Orientation::North);
        assert_eq!((active.x, active.y), (5, 1));
        assert_eq!(state.next_kind(), PieceKind::O);
        assert_eq!(state.piece_id, 1);
        assert_eq!(state.spawn_stats[PieceKind::T.index()], 1);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut state = scripted(&[PieceKind::T, PieceKind::O]);
        state.start();
        assert_eq!(state.piece_id, 1);
        assert_eq!(state.active.unwrap().kind, PieceKind::T);
    }

    #[test]
    fn test_move_blocked_at_wall() {
        let mut state = scripted(&[PieceKind::O]);
        // O North spans x..x+1; from x=5 it can reach x=0.
        for _ in 0..5 {
            assert!(state.move_left());
        }
        assert_eq!(state.active.unwrap().x, 0);
        assert!(!state.move_left());
        assert_eq!(state.active.unwrap().x, 0);
    }

    #[test]
    fn test_rotate_cycles() {
        let mut state = scripted(&[PieceKind::T]);
        assert!(state.rotate_right());
        assert_eq!(state.active.unwrap().orientation, Orientation::East);
        assert!(state.rotate_left());
        assert!(state.rotate_left());
        assert_eq!(state.active.unwrap().orientation, Orientation::West);
    }

    #[test]
    fn test_rotate_blocked_without_kick() {
        let mut state = scripted(&[PieceKind::I]);
        // Vertical I pushed against the left wall cannot turn horizontal.
        while state.move_left() {}
        assert_eq!(state.active.unwrap().x, 0);
        assert!(!state.rotate_right());
        assert_eq!(state.active.unwrap().orientation, Orientation::North);
    }

    #[test]
    fn test_step_gravity_moves_then_locks() {
        let mut state = scripted(&[PieceKind::O, PieceKind::T]);
        let start_y = state.active.unwrap().y;
        assert_eq!(state.step_gravity(), 0);
        assert_eq!(state.active.unwrap().y, start_y + 1);

        let landing = state.landing_y().unwrap();
        while state.active.unwrap().y < landing {
            assert_eq!(state.step_gravity(), 0);
        }
        assert_eq!(state.piece_id, 1);
        assert_eq!(state.step_gravity(), 0);
        assert_eq!(state.piece_id, 2);
        assert_eq!(state.active.unwrap().kind, PieceKind::T);
        assert_eq!(state.cell_value(5, 19), PieceKind::O.code());
        assert_eq!(state.cell_value(6, 18), PieceKind::O.code());
    }

    #[test]
    fn test_hard_drop_clears_line_and_scores() {
        let board = Board::from_rows(&["XXXXX.XXXX", "XXXXX.XXXX", "XXXXX.XXXX", "XXXXX.XXXX"]);
        let mut state = GameState::with_board(board, PieceQueue::scripted(&[PieceKind::I]));
        state.start();

        assert_eq!(state.hard_drop(), 4);
        assert_eq!(state.lines(), 4);
        assert_eq!(state.score(), 4);
        assert_eq!(state.points(), 1200);
        assert_eq!(state.board().filled_count(), 0);
    }

    #[test]
    fn test_score_counts_rows_cleared() {
        // O spawns over columns 5 and 6
        let board = Board::from_rows(&["XXXXX..XXX"]);
        let mut state = GameState::with_board(board, PieceQueue::scripted(&[PieceKind::O]));
        state.start();
        assert_eq!(state.hard_drop(), 1);
        assert_eq!(state.score(), 1);
        assert_eq!(state.points(), 40);

        let board = Board::from_rows(&["XXXXXXXX..", "XXXXXXXX.."]);
        let mut state = GameState::with_board(board, PieceQueue::scripted(&[PieceKind::O]));
        state.start();
        for _ in 0..3 {
            assert!(state.move_right());
        }
        assert_eq!(state.hard_drop(), 2);
        assert_eq!(state.score(), 2);
        assert_eq!(state.lines(), 2);
        assert_eq!(state.points(), 100);
    }

    #[test]
    fn test_spawn_collision_is_game_over() {
        let board = Board::from_rows(&[
            ".....X....",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
            "..........",
        ]);
        let mut state = GameState::with_board(board, PieceQueue::scripted(&[PieceKind::T]));
        state.start();
        assert!(state.is_game_over());
        assert!(state.active().is_none());

        // Terminal until reset
        assert_eq!(state.apply(Command::HardDrop), 0);
        assert!(!state.move_right());

        state.reset();
        assert!(!state.is_game_over());
        assert!(state.active().is_some());
        assert_eq!(state.board().filled_count(), 0);
    }

    #[test]
    fn test_reset_keeps_piece_id_monotonic() {
        let mut state = scripted(&[PieceKind::O]);
        state.hard_drop();
        assert_eq!(state.piece_id, 2);
        state.apply(Command::Reset);
        assert_eq!(state.piece_id, 3);
        assert_eq!(state.score(), 0);
        assert_eq!(state.points(), 0);
        assert_eq!(state.spawn_stats()[PieceKind::O.index()], 1);
    }

    #[test]
    fn test_apply_dispatch() {
        let mut state = scripted(&[PieceKind::T]);
        let x = state.active.unwrap().x;
        state.apply(Command::MoveRight);
        assert_eq!(state.active.unwrap().x, x + 1);
        state.apply(Command::MoveLeft);
        assert_eq!(state.active.unwrap().x, x);
        state.apply(Command::RotateRight);
        assert_eq!(state.active.unwrap().orientation, Orientation::East);
        state.apply(Command::RotateLeft);
        assert_eq!(state.active.unwrap().orientation, Orientation::North);
        let y = state.active.unwrap().y;
        assert_eq!(state.apply(Command::StepGravity), 0);
        assert_eq!(state.active.unwrap().y, y + 1);
    }

    #[test]
    fn test_current_shape_cells_follow_piece() {
        let mut state = scripted(&[PieceKind::O]);
        state.move_right();
        let cells = state.current_shape_cells().unwrap();
        assert_eq!(cells, [(6, 1), (6, 0), (7, 1), (7, 0)]);
        // Falling cells are not part of the grid
        assert_eq!(state.board().filled_count(), 0);
    }
}
