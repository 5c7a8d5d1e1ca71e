//! Piece catalog - the immutable set of placeable shapes.
//!
//! Coordinates: x grows to the right, y grows downward (row 0 is the top of
//! the board). Every rotation index is the previous one turned 90° clockwise
//! about the piece origin, `(x, y) -> (-y, x)`, so repeated rotation always
//! describes the same physical shape. The square is the exception: it keeps
//! the same cells in every rotation so it does not wobble around its origin.

use crate::rng::RandomSource;
use crate::types::{GameMode, PieceKind, Rotation, MAX_BLOCKS, ROTATION_COUNT};

/// Offset of a single block relative to the piece origin
pub type BlockOffset = (i8, i8);

/// Catalog entry. Immutable for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceDefinition {
    kind: PieceKind,
    value: u32,
    block_count: usize,
    rotations: [[BlockOffset; MAX_BLOCKS]; ROTATION_COUNT],
}

impl PieceDefinition {
    /// Build a four-block definition. Unused slots stay at the origin and are
    /// never read because [`blocks`](Self::blocks) slices to `block_count`.
    const fn tetromino(kind: PieceKind, value: u32, table: [[BlockOffset; 4]; ROTATION_COUNT]) -> Self {
        let mut rotations = [[(0, 0); MAX_BLOCKS]; ROTATION_COUNT];
        let mut r = 0;
        while r < ROTATION_COUNT {
            let mut b = 0;
            while b < 4 {
                rotations[r][b] = table[r][b];
                b += 1;
            }
            r += 1;
        }
        Self {
            kind,
            value,
            block_count: 4,
            rotations,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Points awarded when this piece locks onto the board.
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn block_count(&self) -> usize {
        self.block_count
    }

    /// Occupied offsets for `rotation`.
    pub fn blocks(&self, rotation: Rotation) -> &[BlockOffset] {
        &self.rotations[rotation.index()][..self.block_count]
    }

    /// Whether the catalog may deal this piece in `mode`.
    pub fn valid_for(&self, mode: GameMode) -> bool {
        match mode {
            GameMode::Standard => true,
        }
    }
}

static CATALOG: [PieceDefinition; 7] = [
    PieceDefinition::tetromino(
        PieceKind::Square,
        4,
        [
            [(0, 0), (1, 0), (0, 1), (1, 1)],
            [(0, 0), (1, 0), (0, 1), (1, 1)],
            [(0, 0), (1, 0), (0, 1), (1, 1)],
            [(0, 0), (1, 0), (0, 1), (1, 1)],
        ],
    ),
    PieceDefinition::tetromino(
        PieceKind::Long,
        2,
        [
            [(-1, 0), (0, 0), (1, 0), (2, 0)],
            [(0, -1), (0, 0), (0, 1), (0, 2)],
            [(1, 0), (0, 0), (-1, 0), (-2, 0)],
            [(0, 1), (0, 0), (0, -1), (0, -2)],
        ],
    ),
    PieceDefinition::tetromino(
        PieceKind::Ell,
        3,
        [
            [(-1, 0), (0, 0), (1, 0), (1, 1)],
            [(0, -1), (0, 0), (0, 1), (-1, 1)],
            [(1, 0), (0, 0), (-1, 0), (-1, -1)],
            [(0, 1), (0, 0), (0, -1), (1, -1)],
        ],
    ),
    PieceDefinition::tetromino(
        PieceKind::Bell,
        3,
        [
            [(-1, 0), (0, 0), (1, 0), (1, -1)],
            [(0, -1), (0, 0), (0, 1), (1, 1)],
            [(1, 0), (0, 0), (-1, 0), (-1, 1)],
            [(0, 1), (0, 0), (0, -1), (-1, -1)],
        ],
    ),
    PieceDefinition::tetromino(
        PieceKind::Tee,
        1,
        [
            [(-1, 0), (0, 0), (1, 0), (0, 1)],
            [(0, -1), (0, 0), (0, 1), (-1, 0)],
            [(1, 0), (0, 0), (-1, 0), (0, -1)],
            [(0, 1), (0, 0), (0, -1), (1, 0)],
        ],
    ),
    PieceDefinition::tetromino(
        PieceKind::Ess,
        5,
        [
            [(0, 0), (1, 0), (-1, 1), (0, 1)],
            [(0, 0), (0, 1), (-1, -1), (-1, 0)],
            [(0, 0), (-1, 0), (1, -1), (0, -1)],
            [(0, 0), (0, -1), (1, 1), (1, 0)],
        ],
    ),
    PieceDefinition::tetromino(
        PieceKind::Bess,
        5,
        [
            [(-1, 0), (0, 0), (0, 1), (1, 1)],
            [(0, -1), (0, 0), (-1, 0), (-1, 1)],
            [(1, 0), (0, 0), (0, -1), (-1, -1)],
            [(0, 1), (0, 0), (1, 0), (1, -1)],
        ],
    ),
];

/// The whole catalog, in [`PieceKind::ALL`] order.
pub fn catalog() -> &'static [PieceDefinition] {
    &CATALOG
}

/// Definition for a given shape tag.
pub fn definition(kind: PieceKind) -> &'static PieceDefinition {
    match kind {
        PieceKind::Square => &CATALOG[0],
        PieceKind::Long => &CATALOG[1],
        PieceKind::Ell => &CATALOG[2],
        PieceKind::Bell => &CATALOG[3],
        PieceKind::Tee => &CATALOG[4],
        PieceKind::Ess => &CATALOG[5],
        PieceKind::Bess => &CATALOG[6],
    }
}

/// Pick a definition uniformly among those valid for `mode`.
///
/// Consumes exactly one value from `rng`.
pub fn select<R: RandomSource + ?Sized>(mode: GameMode, rng: &mut R) -> &'static PieceDefinition {
    let valid = CATALOG.iter().filter(|d| d.valid_for(mode)).count() as u32;
    let pick = rng.next_int(valid) as usize;
    CATALOG
        .iter()
        .filter(|d| d.valid_for(mode))
        .nth(pick)
        .unwrap_or(&CATALOG[0])
}
