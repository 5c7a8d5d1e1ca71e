//! Board tests - grid access and row clearing

use tessalatrix::core::Board;
use tessalatrix::types::{PieceKind, BOARD_HEIGHT, MAX_BOARD_WIDTH};

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..board.width() as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(MAX_BOARD_WIDTH);
    assert_eq!(board.width(), MAX_BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..MAX_BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None), "cell ({x}, {y})");
        }
    }
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::default();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(MAX_BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::default();
    assert!(board.set(5, 10, Some(PieceKind::Tee)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::Tee)));
    assert!(board.is_occupied(5, 10));

    assert!(board.set(5, 10, None));
    assert!(!board.is_occupied(5, 10));

    assert!(!board.set(-1, 0, Some(PieceKind::Tee)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::Tee)));
}

#[test]
fn test_width_is_clamped() {
    assert_eq!(Board::new(0).width(), 1);
    assert_eq!(Board::new(200).width(), MAX_BOARD_WIDTH);
}

#[test]
fn test_single_full_row_shifts_content_down() {
    let mut board = Board::default();
    fill_row(&mut board, 12, PieceKind::Long);
    board.set(2, 11, Some(PieceKind::Ess));
    board.set(7, 3, Some(PieceKind::Bell));

    assert!(board.is_row_full(12));
    assert!(board.clear_row(12));

    assert_eq!(board.get(2, 12), Some(Some(PieceKind::Ess)));
    assert_eq!(board.get(7, 4), Some(Some(PieceKind::Bell)));
    assert_eq!(board.get(7, 3), Some(None));
    assert!(board.row(0).iter().all(|c| c.is_none()));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_row_off_board_is_rejected() {
    let mut board = Board::default();
    assert!(!board.clear_row(BOARD_HEIGHT as usize));
    assert!(!board.is_row_full(BOARD_HEIGHT as usize));
    assert!(board.row(BOARD_HEIGHT as usize).is_empty());
}
