//! Shape catalog, rotation and randomizer tests

use std::collections::HashSet;

use tetrix::core::{base_matrix, rotate, spawn_x, Bag, Matrix};
use tetrix::types::PieceKind;

#[test]
fn test_catalog_sizes() {
    let dims: Vec<(u8, u8)> = PieceKind::ALL
        .iter()
        .map(|&k| (base_matrix(k).rows(), base_matrix(k).cols()))
        .collect();
    // I J L O S T Z
    assert_eq!(dims, vec![(4, 4), (3, 3), (3, 3), (2, 2), (3, 3), (3, 3), (3, 3)]);
}

#[test]
fn test_every_shape_has_four_minos() {
    for kind in PieceKind::ALL {
        assert_eq!(base_matrix(kind).occupied().count(), 4, "{kind:?}");
    }
}

#[test]
fn test_four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let m = base_matrix(kind);
        let back = rotate(&rotate(&rotate(&rotate(&m))));
        assert_eq!(back, m, "{kind:?}");
    }
}

#[test]
fn test_non_square_rotation() {
    let m = Matrix::from_rows(&[&[1, 1, 1], &[0, 0, 1]]).unwrap();
    let r = rotate(&m);
    assert_eq!((r.rows(), r.cols()), (3, 2));
    // result[x][H-1-y] = src[y][x]
    assert!(r.get(1, 0) && r.get(1, 1) && r.get(1, 2) && r.get(0, 2));
    assert!(!r.get(0, 0) && !r.get(0, 1));
    assert_eq!(rotate(&rotate(&rotate(&r))), m);
}

#[test]
fn test_spawn_columns() {
    assert_eq!(spawn_x(&base_matrix(PieceKind::O)), 4);
    assert_eq!(spawn_x(&base_matrix(PieceKind::I)), 3);
    assert_eq!(spawn_x(&base_matrix(PieceKind::T)), 4);
}

#[test]
fn test_bag_windows_hold_every_kind() {
    for seed in 0..50 {
        let mut bag = Bag::new(seed);
        for window in 0..10 {
            let kinds: HashSet<PieceKind> = (0..7).map(|_| bag.draw()).collect();
            assert_eq!(kinds.len(), 7, "seed {seed}, window {window}");
            assert!(bag.remaining().is_empty());
        }
    }
}

#[test]
fn test_bag_is_deterministic_per_seed() {
    let mut a = Bag::new(2024);
    let mut b = Bag::new(2024);
    let xs: Vec<_> = (0..28).map(|_| a.draw()).collect();
    let ys: Vec<_> = (0..28).map(|_| b.draw()).collect();
    assert_eq!(xs, ys);
}

#[test]
fn test_bag_orders_vary() {
    let firsts: HashSet<Vec<PieceKind>> = (0..40)
        .map(|seed| {
            let mut bag = Bag::new(seed);
            (0..7).map(|_| bag.draw()).collect()
        })
        .collect();
    assert!(firsts.len() > 10);
}
