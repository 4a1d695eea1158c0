//! Tests for board occupancy and bounds rules.

use gomoku_engine::{Board, MoveError, Point, Stone};

#[test]
fn test_every_cell_accepts_one_stone() {
    let mut board = Board::new(7).unwrap();
    for y in 0..7 {
        for x in 0..7 {
            let p = Point::new(x, y);
            assert!(board.set(p, Stone::Black).is_ok(), "first set at {p}");
            assert_eq!(board.set(p, Stone::White), Err(MoveError::CellOccupied(p)));
            assert_eq!(board.get(p), Ok(Stone::Black));
        }
    }
    assert!(board.is_full());
}

#[test]
fn test_out_of_bounds_access_rejected() {
    let mut board = Board::new(15).unwrap();
    let outside = [
        Point::new(-1, 0),
        Point::new(0, -1),
        Point::new(15, 0),
        Point::new(0, 15),
        Point::new(i32::MIN, i32::MAX),
    ];
    for p in outside {
        assert!(!board.in_bounds(p));
        assert_eq!(board.get(p), Err(MoveError::OutOfBounds(p)));
        assert_eq!(board.set(p, Stone::Black), Err(MoveError::OutOfBounds(p)));
    }
    assert_eq!(board.empty_points().count(), 225);
}

#[test]
fn test_occupancy_does_not_affect_bounds() {
    let mut board = Board::new(3).unwrap();
    board.set(Point::new(2, 2), Stone::White).unwrap();
    assert_eq!(
        board.set(Point::new(3, 2), Stone::Black),
        Err(MoveError::OutOfBounds(Point::new(3, 2)))
    );
}

#[test]
fn test_rows_are_row_major() {
    let mut board = Board::new(4).unwrap();
    board.set(Point::new(3, 1), Stone::Black).unwrap();
    let rows: Vec<Vec<Stone>> = board.rows().map(<[Stone]>::to_vec).collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[1][3], Stone::Black);
    assert_eq!(rows[3][1], Stone::Empty);
}

#[test]
fn test_stone_serializes_as_name() {
    let json = serde_json::to_string(&[Stone::Empty, Stone::Black, Stone::White]).unwrap();
    assert_eq!(json, r#"["empty","black","white"]"#);
}
