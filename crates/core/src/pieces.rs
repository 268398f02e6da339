//! Pieces module - tetromino geometry
//!
//! Every `(PieceKind, Orientation)` pair maps to four cell offsets relative to
//! the piece anchor, plus the bounding extents of those offsets. Both tables are
//! built at compile time from the North shapes below.
//!
//! Coordinates follow the board: x grows to the right, y grows downward.
//! One step right maps `(x, y)` to `(-y, x)`.
//!
//! Pieces with fewer distinct rotations still accept all four orientations:
//! `O` has a single state, `I`/`S`/`Z` have two (South repeats North, West
//! repeats East), `T`/`L`/`J` have four.

use crate::types::{Orientation, PieceKind, BOARD_WIDTH};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// Bounding extents of a shape's offsets (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min_x: i8,
    pub max_x: i8,
    pub min_y: i8,
    pub max_y: i8,
}

impl Bounds {
    /// Columns the shape spans.
    pub fn width(&self) -> i8 {
        self.max_x - self.min_x + 1
    }

    /// Rows the shape spans.
    pub fn height(&self) -> i8 {
        self.max_y - self.min_y + 1
    }
}

/// North shapes, indexed by `PieceKind::index()`.
const BASE_SHAPES: [PieceShape; 7] = [
    // I
    [(0, -1), (0, 0), (0, 1), (0, 2)],
    // L
    [(0, -1), (0, 0), (0, 1), (1, 1)],
    // J
    [(0, -1), (0, 0), (0, 1), (-1, 1)],
    // T
    [(0, -1), (0, 0), (0, 1), (1, 0)],
    // O
    [(0, 0), (0, -1), (1, 0), (1, -1)],
    // S
    [(0, 0), (0, -1), (-1, 0), (1, -1)],
    // Z
    [(0, 0), (0, -1), (1, 0), (-1, -1)],
];

/// Number of distinct rotation states per kind.
const SYMMETRY: [usize; 7] = [2, 4, 4, 4, 1, 2, 2];

const fn rotate_shape(base: PieceShape, symmetry: usize, orientation: usize) -> PieceShape {
    let canonical = orientation % symmetry;
    let mut out = base;
    let mut i = 0;
    while i < 4 {
        let (x, y) = base[i];
        out[i] = match canonical {
            0 => (x, y),
            1 => (-y, x),
            2 => (-x, -y),
            _ => (y, -x),
        };
        i += 1;
    }
    out
}

const fn shape_bounds(shape: PieceShape) -> Bounds {
    let mut b = Bounds {
        min_x: shape[0].0,
        max_x: shape[0].0,
        min_y: shape[0].1,
        max_y: shape[0].1,
    };
    let mut i = 1;
    while i < 4 {
        let (x, y) = shape[i];
        if x < b.min_x {
            b.min_x = x;
        }
        if x > b.max_x {
            b.max_x = x;
        }
        if y < b.min_y {
            b.min_y = y;
        }
        if y > b.max_y {
            b.max_y = y;
        }
        i += 1;
    }
    b
}

const fn build_shapes() -> [[PieceShape; 4]; 7] {
    let mut table = [[[(0, 0); 4]; 4]; 7];
    let mut k = 0;
    while k < 7 {
        let mut o = 0;
        while o < 4 {
            table[k][o] = rotate_shape(BASE_SHAPES[k], SYMMETRY[k], o);
            o += 1;
        }
        k += 1;
    }
    table
}

const fn build_bounds(shapes: &[[PieceShape; 4]; 7]) -> [[Bounds; 4]; 7] {
    let empty = Bounds {
        min_x: 0,
        max_x: 0,
        min_y: 0,
        max_y: 0,
    };
    let mut table = [[empty; 4]; 7];
    let mut k = 0;
    while k < 7 {
        let mut o = 0;
        while o < 4 {
            table[k][o] = shape_bounds(shapes[k][o]);
            o += 1;
        }
        k += 1;
    }
    table
}

const SHAPE_TABLE: [[PieceShape; 4]; 7] = build_shapes();

static SHAPES: [[PieceShape; 4]; 7] = SHAPE_TABLE;
static BOUNDS: [[Bounds; 4]; 7] = build_bounds(&SHAPE_TABLE);

/// Get the shape (mino offsets) for a piece kind and orientation
pub fn get_shape(kind: PieceKind, orientation: Orientation) -> PieceShape {
    SHAPES[kind.index()][orientation.index()]
}

/// Bounding extents of `get_shape(kind, orientation)`
pub fn get_bounds(kind: PieceKind, orientation: Orientation) -> Bounds {
    BOUNDS[kind.index()][orientation.index()]
}

/// Absolute cells of a piece anchored at `(x, y)`
pub fn cells_at(kind: PieceKind, orientation: Orientation, x: i8, y: i8) -> PieceShape {
    get_shape(kind, orientation).map(|(dx, dy)| (x + dx, y + dy))
}

/// Canonical orientations that produce visually distinct shapes.
///
/// This is the set a placement search has to enumerate.
pub fn distinct_orientations(kind: PieceKind) -> &'static [Orientation] {
    &Orientation::ALL[..SYMMETRY[kind.index()]]
}

/// Spawn anchor for a new piece: centered column, top row of the North
/// shape resting on grid row 0.
pub fn spawn_position(kind: PieceKind) -> (i8, i8) {
    let bounds = get_bounds(kind, Orientation::North);
    (BOARD_WIDTH as i8 / 2, -bounds.min_y)
}
