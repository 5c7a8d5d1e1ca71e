//! Board module - manages the game grid
//!
//! The board is `width x 20` cells, where the width comes from the game mode.
//! Each cell is either empty or holds the tag of the piece that locked there.
//! Uses a flat array sized for the widest mode, so resizing never allocates.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..19 (top to bottom)

use crate::types::{Cell, BOARD_HEIGHT, MAX_BOARD_WIDTH};

/// Total number of cells backing the board
const BOARD_CAPACITY: usize = (MAX_BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: [Cell; BOARD_CAPACITY],
}

impl Board {
    /// Create a new empty board. Widths above [`MAX_BOARD_WIDTH`] are clamped.
    pub fn new(width: u8) -> Self {
        Self {
            width: width.clamp(1, MAX_BOARD_WIDTH),
            cells: [None; BOARD_CAPACITY],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= self.width as i8 || y < 0 || y >= BOARD_HEIGHT as i8
    }

    /// One row of cells, top row is 0.
    pub fn row(&self, y: usize) -> &[Cell] {
        if y >= BOARD_HEIGHT as usize {
            return &[];
        }
        let w = self.width as usize;
        &self.cells[y * w..(y + 1) * w]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`: every row above it moves down by one and the top row
    /// becomes empty. Returns false if `y` is off the board.
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }

        let width = self.width as usize;

        // copy_within handles overlapping ranges safely
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[..width] {
            *cell = None;
        }

        true
    }

    /// Empty every cell and adopt a (possibly new) width.
    pub fn reset(&mut self, width: u8) {
        self.width = width.clamp(1, MAX_BOARD_WIDTH);
        self.cells.fill(None);
    }

    /// Cells in use, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells[..(self.width as usize) * (BOARD_HEIGHT as usize)]
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells().iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(MAX_BOARD_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_board_starts_empty() {
        let board = Board::new(10);
        assert_eq!(board.width(), 10);
        assert_eq!(board.height(), 20);
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.cells().len(), 200);
    }

    #[test]
    fn test_narrow_board_bounds() {
        let mut board = Board::new(6);
        assert!(board.set(5, 0, Some(PieceKind::Tee)));
        assert!(!board.set(6, 0, Some(PieceKind::Tee)));
        assert!(board.is_out_of_bounds(6, 19));
        assert_eq!(board.row(0).len(), 6);
    }

    #[test]
    fn test_clear_row_shifts_rows_above() {
        let mut board = Board::new(10);
        for x in 0..10 {
            board.set(x, 19, Some(PieceKind::Long));
        }
        board.set(2, 18, Some(PieceKind::Ess));
        board.set(7, 0, Some(PieceKind::Bell));

        assert!(board.clear_row(19));
        assert_eq!(board.get(2, 19), Some(Some(PieceKind::Ess)));
        assert_eq!(board.get(7, 1), Some(Some(PieceKind::Bell)));
        assert!(board.row(0).iter().all(|c| c.is_none()));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_clear_top_row() {
        let mut board = Board::new(10);
        for x in 0..10 {
            board.set(x, 0, Some(PieceKind::Tee));
        }
        assert!(board.is_row_full(0));
        assert!(board.clear_row(0));
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.clear_row(20));
    }

    #[test]
    fn test_reset_changes_width_and_empties() {
        let mut board = Board::new(10);
        board.set(9, 9, Some(PieceKind::Square));
        board.reset(8);
        assert_eq!(board.width(), 8);
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.get(9, 9), None);
    }
}
