//! Piece catalog tests - shapes, rotation states, bounds and spawn

use tetrai::core::pieces::{cells_at, distinct_orientations, get_bounds, get_shape, spawn_position};
use tetrai::types::{Orientation, PieceKind};

// ============== Shape Tests ==============

#[test]
fn test_i_piece_shapes() {
    let north = get_shape(PieceKind::I, Orientation::North);
    assert_eq!(north, [(0, -1), (0, 0), (0, 1), (0, 2)]);

    let east = get_shape(PieceKind::I, Orientation::East);
    assert_eq!(east, [(1, 0), (0, 0), (-1, 0), (-2, 0)]);

    // Two-state piece
    assert_eq!(get_shape(PieceKind::I, Orientation::South), north);
    assert_eq!(get_shape(PieceKind::I, Orientation::West), east);
}

#[test]
fn test_o_piece_shapes() {
    // O piece is the same for all orientations
    let north = get_shape(PieceKind::O, Orientation::North);
    assert_eq!(north, [(0, 0), (0, -1), (1, 0), (1, -1)]);
    assert_eq!(get_shape(PieceKind::O, Orientation::East), north);
    assert_eq!(get_shape(PieceKind::O, Orientation::South), north);
    assert_eq!(get_shape(PieceKind::O, Orientation::West), north);
}

#[test]
fn test_t_piece_shapes() {
    let north = get_shape(PieceKind::T, Orientation::North);
    assert_eq!(north, [(0, -1), (0, 0), (0, 1), (1, 0)]);

    let east = get_shape(PieceKind::T, Orientation::East);
    assert_eq!(east, [(1, 0), (0, 0), (-1, 0), (0, 1)]);
}

#[test]
fn test_s_piece_shapes() {
    let north = get_shape(PieceKind::S, Orientation::North);
    assert_eq!(north, [(0, 0), (0, -1), (-1, 0), (1, -1)]);

    let east = get_shape(PieceKind::S, Orientation::East);
    assert_eq!(east, [(0, 0), (1, 0), (0, -1), (1, 1)]);
}

#[test]
fn test_z_piece_shapes() {
    let north = get_shape(PieceKind::Z, Orientation::North);
    assert_eq!(north, [(0, 0), (0, -1), (1, 0), (-1, -1)]);

    let east = get_shape(PieceKind::Z, Orientation::East);
    assert_eq!(east, [(0, 0), (1, 0), (0, 1), (1, -1)]);
}

#[test]
fn test_j_piece_shapes() {
    let north = get_shape(PieceKind::J, Orientation::North);
    assert_eq!(north, [(0, -1), (0, 0), (0, 1), (-1, 1)]);

    let east = get_shape(PieceKind::J, Orientation::East);
    assert_eq!(east, [(1, 0), (0, 0), (-1, 0), (-1, -1)]);
}

#[test]
fn test_l_piece_shapes() {
    let north = get_shape(PieceKind::L, Orientation::North);
    assert_eq!(north, [(0, -1), (0, 0), (0, 1), (1, 1)]);

    let east = get_shape(PieceKind::L, Orientation::East);
    assert_eq!(east, [(1, 0), (0, 0), (-1, 0), (-1, 1)]);
}

#[test]
fn test_every_shape_has_four_distinct_cells() {
    for kind in PieceKind::ALL {
        for o in Orientation::ALL {
            let mut shape = get_shape(kind, o);
            shape.sort();
            for pair in shape.windows(2) {
                assert_ne!(pair[0], pair[1], "{:?} {:?}", kind, o);
            }
        }
    }
}

// ============== Orientation Tests ==============

#[test]
fn test_distinct_orientation_counts() {
    assert_eq!(distinct_orientations(PieceKind::O), &[Orientation::North]);
    for kind in [PieceKind::I, PieceKind::S, PieceKind::Z] {
        assert_eq!(
            distinct_orientations(kind),
            &[Orientation::North, Orientation::East]
        );
    }
    for kind in [PieceKind::T, PieceKind::L, PieceKind::J] {
        assert_eq!(distinct_orientations(kind), &Orientation::ALL);
    }
}

#[test]
fn test_four_right_turns_return_to_start() {
    for kind in PieceKind::ALL {
        let mut o = Orientation::North;
        for _ in 0..4 {
            o = o.rotate_right();
        }
        assert_eq!(get_shape(kind, o), get_shape(kind, Orientation::North));
    }
}

#[test]
fn test_orientation_index_wraps() {
    assert_eq!(Orientation::from_index(4), Orientation::North);
    assert_eq!(Orientation::from_index(7), Orientation::West);
    assert_eq!(Orientation::North.rotate_left(), Orientation::West);
}

// ============== Bounds / Spawn Tests ==============

#[test]
fn test_bounds_match_shape() {
    for kind in PieceKind::ALL {
        for o in Orientation::ALL {
            let b = get_bounds(kind, o);
            let shape = get_shape(kind, o);
            assert_eq!(b.min_x, shape.iter().map(|c| c.0).min().unwrap());
            assert_eq!(b.max_x, shape.iter().map(|c| c.0).max().unwrap());
            assert_eq!(b.min_y, shape.iter().map(|c| c.1).min().unwrap());
            assert_eq!(b.max_y, shape.iter().map(|c| c.1).max().unwrap());
        }
    }
}

#[test]
fn test_cells_at_translates() {
    let cells = cells_at(PieceKind::T, Orientation::North, 4, 7);
    assert_eq!(cells, [(4, 6), (4, 7), (4, 8), (5, 7)]);
}

#[test]
fn test_spawn_position() {
    for kind in PieceKind::ALL {
        assert_eq!(spawn_position(kind), (5, 1), "{:?}", kind);
    }
}
