//! Piece catalog tests

use std::collections::HashSet;

use tessalatrix::core::{catalog, definition, select, RandomSource};
use tessalatrix::types::{GameMode, PieceKind, Rotation, MAX_BLOCKS};

struct Sequence(Vec<u32>);

impl RandomSource for Sequence {
    fn next_int(&mut self, bound: u32) -> u32 {
        self.0.remove(0) % bound
    }
}

#[test]
fn test_catalog_has_every_kind_once() {
    let kinds: HashSet<PieceKind> = catalog().iter().map(|d| d.kind()).collect();
    assert_eq!(kinds.len(), PieceKind::ALL.len());
    for kind in PieceKind::ALL {
        assert_eq!(definition(kind).kind(), kind);
    }
}

#[test]
fn test_block_counts_in_range() {
    for def in catalog() {
        assert!(def.block_count() >= 1 && def.block_count() <= MAX_BLOCKS);
        for r in 0..4 {
            assert_eq!(def.blocks(Rotation::from_index(r)).len(), def.block_count());
        }
    }
}

#[test]
fn test_values() {
    let values: Vec<(PieceKind, u32)> = catalog().iter().map(|d| (d.kind(), d.value())).collect();
    assert!(values.contains(&(PieceKind::Square, 4)));
    assert!(values.contains(&(PieceKind::Long, 2)));
    assert!(values.contains(&(PieceKind::Tee, 1)));
    assert!(values.contains(&(PieceKind::Bess, 5)));
}

#[test]
fn test_every_kind_is_valid_in_standard_mode() {
    assert!(catalog().iter().all(|d| d.valid_for(GameMode::Standard)));
}

#[test]
fn test_select_maps_random_index_to_catalog() {
    let mut rng = Sequence(vec![0, 6, 13]);
    assert_eq!(select(GameMode::Standard, &mut rng).kind(), catalog()[0].kind());
    assert_eq!(select(GameMode::Standard, &mut rng).kind(), catalog()[6].kind());
    assert_eq!(select(GameMode::Standard, &mut rng).kind(), catalog()[6].kind());
}
