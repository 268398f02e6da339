//! Board features used by the placement heuristic.
//!
//! All features are computed on a locked grid (after any full rows have been
//! removed). Complexity is O(W*H) with no allocation.

use tetrai_core::Board;
use tetrai_types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Classic Tetris grid features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardFeatures {
    /// Sum of column heights.
    pub aggregate_height: u32,
    /// Empty cells with at least one filled cell above them in the same column.
    pub holes: u32,
    /// Sum of absolute height differences between adjacent columns.
    pub bumpiness: u32,
}

impl BoardFeatures {
    pub fn of(board: &Board) -> Self {
        let heights = board.column_heights();

        Self {
            aggregate_height: heights.iter().map(|&h| h as u32).sum(),
            holes: count_holes(board, &heights),
            bumpiness: bumpiness(&heights),
        }
    }
}

fn count_holes(board: &Board, heights: &[u8; BOARD_WIDTH as usize]) -> u32 {
    let mut holes = 0u32;
    for (x, &h) in heights.iter().enumerate() {
        let top = BOARD_HEIGHT - h;
        for y in top..BOARD_HEIGHT {
            if board.is_valid(x as i8, y as i8) {
                holes += 1;
            }
        }
    }
    holes
}

fn bumpiness(heights: &[u8; BOARD_WIDTH as usize]) -> u32 {
    heights
        .windows(2)
        .map(|w| (w[0] as i32 - w[1] as i32).unsigned_abs())
        .sum()
}
