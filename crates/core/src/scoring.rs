//! Scoring module - classic line-clear points

use crate::types::LINE_SCORES;

/// Points awarded for clearing `lines` rows with a single lock.
///
/// Clears of more than four rows can only come from prepared grids; they
/// score the same as four.
pub fn calculate_line_score(lines: u32) -> u32 {
    LINE_SCORES[(lines as usize).min(LINE_SCORES.len() - 1)]
}
