//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the kind of the
//! piece that locked there. Uses a flat array for cache locality; cloning a
//! board is a plain memcpy, which is what the placement search relies on.
//!
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the grid (y < 0) are treated as open space for pieces that are
//! still materializing; they are never stored.

use arrayvec::ArrayVec;

use crate::pieces::cells_at;
use crate::types::{Cell, Orientation, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Upper bound on rows removed by a single clear
pub const MAX_CLEARED_ROWS: usize = BOARD_HEIGHT as usize;

/// Row indices removed by [`Board::clear_full_rows`], bottom to top
pub type ClearedRows = ArrayVec<usize, MAX_CLEARED_ROWS>;

/// Result of writing a piece into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOutcome {
    /// Every cell was written.
    Locked,
    /// The pose was legal but some cells sat above row 0 and were dropped.
    LockedAboveTop,
    /// The pose overlaps the grid or leaves the field; nothing was written.
    Rejected,
}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from text rows aligned to the bottom of the grid.
    ///
    /// `.` is empty; any other character fills the cell. A piece letter
    /// (`I`, `L`, `J`, `T`, `O`, `S`, `Z`) keeps its kind, everything else is
    /// stored as `I`. Rows shorter than the board width are padded with empty
    /// cells.
    ///
    /// # Panics
    ///
    /// Panics on more than 20 rows or a row longer than 10 characters.
    ///
    /// ```
    /// use tetrai_core::Board;
    ///
    /// let board = Board::from_rows(&[
    ///     "T.........",
    ///     "XXX.XXXXXX",
    /// ]);
    /// assert_eq!(board.cell_value(0, 18), 4);
    /// assert_eq!(board.cell_value(3, 19), 0);
    /// ```
    pub fn from_rows(rows: &[&str]) -> Self {
        assert!(rows.len() <= BOARD_HEIGHT as usize, "too many rows");
        let mut board = Self::new();
        let top = BOARD_HEIGHT as usize - rows.len();
        for (i, row) in rows.iter().enumerate() {
            assert!(
                row.chars().count() <= BOARD_WIDTH as usize,
                "row {} too wide",
                i
            );
            for (x, ch) in row.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind = PieceKind::from_str(&ch.to_string()).unwrap_or(PieceKind::I);
                board.cells[(top + i) * BOARD_WIDTH as usize + x] = Some(kind);
            }
        }
        board
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Numeric cell value: `0` when empty, otherwise the piece kind code.
    ///
    /// # Panics
    ///
    /// Panics when `(x, y)` is outside the grid.
    pub fn cell_value(&self, x: i8, y: i8) -> u8 {
        let idx = Self::index(x, y)
            .unwrap_or_else(|| panic!("cell ({}, {}) is outside the grid", x, y));
        self.cells[idx].map_or(0, PieceKind::code)
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether a piece fits at the given pose.
    ///
    /// Every cell must sit inside the columns, above the floor, and on an
    /// empty grid cell. Cells above row 0 only need to be inside the columns.
    pub fn can_place(&self, kind: PieceKind, orientation: Orientation, x: i8, y: i8) -> bool {
        cells_at(kind, orientation, x, y).iter().all(|&(px, py)| {
            if px < 0 || px >= BOARD_WIDTH as i8 || py >= BOARD_HEIGHT as i8 {
                return false;
            }
            py < 0 || self.is_valid(px, py)
        })
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    /// Uses a two-pointer algorithm with zero-allocation
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Rows vacated at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// Write a piece into the grid at the given pose.
    ///
    /// The pose is checked with [`Board::can_place`] first; an illegal pose
    /// leaves the board untouched.
    pub fn lock_piece(
        &mut self,
        kind: PieceKind,
        orientation: Orientation,
        x: i8,
        y: i8,
    ) -> LockOutcome {
        if !self.can_place(kind, orientation, x, y) {
            return LockOutcome::Rejected;
        }

        let mut above_top = false;
        for (px, py) in cells_at(kind, orientation, x, y) {
            if !self.set(px, py, Some(kind)) {
                above_top = true;
            }
        }

        if above_top {
            LockOutcome::LockedAboveTop
        } else {
            LockOutcome::Locked
        }
    }

    /// Height of every column, measured from the floor to its topmost filled cell
    pub fn column_heights(&self) -> [u8; BOARD_WIDTH as usize] {
        let mut heights = [0u8; BOARD_WIDTH as usize];
        for (x, h) in heights.iter_mut().enumerate() {
            for y in 0..BOARD_HEIGHT as usize {
                if self.cells[y * BOARD_WIDTH as usize + x].is_some() {
                    *h = BOARD_HEIGHT - y as u8;
                    break;
                }
            }
        }
        heights
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
