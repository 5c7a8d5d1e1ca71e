//! Piece selection seam.
//!
//! The session never reaches into the catalog itself; it asks a
//! [`PieceSelector`] for the next definition and its starting rotation.

use crate::pieces::{self, definition, PieceDefinition};
use crate::rng::{RandomSource, SimpleRng};
use crate::types::{GameMode, PieceKind, Rotation, ROTATION_COUNT};

/// Supplies the next piece for a session.
pub trait PieceSelector {
    fn select(&mut self, mode: GameMode) -> &'static PieceDefinition;

    /// Rotation the freshly selected piece spawns in.
    fn initial_rotation(&mut self) -> Rotation;
}

/// Uniform random choice over the catalog, with a uniform starting rotation.
#[derive(Debug, Clone)]
pub struct CatalogSelector<R: RandomSource = SimpleRng> {
    rng: R,
}

impl CatalogSelector<SimpleRng> {
    pub fn seeded(seed: u32) -> Self {
        Self::new(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> CatalogSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> PieceSelector for CatalogSelector<R> {
    fn select(&mut self, mode: GameMode) -> &'static PieceDefinition {
        pieces::select(mode, &mut self.rng)
    }

    fn initial_rotation(&mut self) -> Rotation {
        Rotation::from_index(self.rng.next_int(ROTATION_COUNT as u32) as u8)
    }
}

/// Always deals the same piece in the same rotation. Handy for scripted
/// sessions and benchmarks.
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector {
    pub kind: PieceKind,
    pub rotation: Rotation,
}

impl FixedSelector {
    pub fn new(kind: PieceKind, rotation: Rotation) -> Self {
        Self { kind, rotation }
    }
}

impl PieceSelector for FixedSelector {
    fn select(&mut self, _mode: GameMode) -> &'static PieceDefinition {
        definition(self.kind)
    }

    fn initial_rotation(&mut self) -> Rotation {
        self.rotation
    }
}
