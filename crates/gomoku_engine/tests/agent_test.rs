//! Tests for the heuristic opponent.

use gomoku_engine::{Difficulty, Game, Point, Stone, agent};

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn play_all(game: &mut Game, moves: &[(i32, i32)]) {
    for &(x, y) in moves {
        game.play(p(x, y)).unwrap();
    }
}

#[test]
fn test_win_now_outranks_block() {
    let mut game = Game::new(15).unwrap();
    // Black four on row 0 (open at (4, 0)), White four on row 5 (open at (4, 5)).
    play_all(
        &mut game,
        &[(0, 0), (0, 5), (1, 0), (1, 5), (2, 0), (2, 5), (3, 0), (3, 5), (10, 10)],
    );
    assert_eq!(game.turn(), Stone::White);

    assert_eq!(agent::pick_move(&game), Some(p(4, 5)));
    assert_eq!(agent::play(&mut game), Ok(Some(p(4, 5))));
    assert_eq!(game.winner(), Some(Stone::White));
}

#[test]
fn test_blocks_black_four() {
    let mut game = Game::new(15).unwrap();
    play_all(
        &mut game,
        &[(7, 3), (0, 14), (7, 4), (14, 14), (7, 5), (14, 0), (7, 6)],
    );
    // Black threatens (7, 2) and (7, 7); the row-major scan finds (7, 2) first.
    assert_eq!(agent::play(&mut game), Ok(Some(p(7, 2))));
    assert_eq!(game.board().get(p(7, 2)), Ok(Stone::White));
    assert_eq!(game.turn(), Stone::Black);
}

#[test]
fn test_fallback_plays_center() {
    let mut game = Game::new(15).unwrap();
    game.play(p(0, 0)).unwrap();
    assert_eq!(agent::pick_move(&game), Some(p(7, 7)));

    let mut even = Game::new(10).unwrap();
    even.play(p(0, 0)).unwrap();
    assert_eq!(agent::pick_move(&even), Some(p(5, 5)));
}

#[test]
fn test_easy_ignores_threats() {
    let mut game = Game::new(15).unwrap();
    game.set_difficulty(Difficulty::Easy);
    play_all(
        &mut game,
        &[(7, 3), (0, 0), (7, 4), (1, 0), (7, 5), (2, 0), (7, 6)],
    );
    assert_eq!(agent::play(&mut game), Ok(Some(p(3, 0))));
}

#[test]
fn test_no_op_when_finished_or_not_white() {
    let mut game = Game::new(15).unwrap();
    assert_eq!(agent::play(&mut game), Ok(None));
    assert_eq!(game.moves(), 0);

    play_all(
        &mut game,
        &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0), (3, 1), (4, 0)],
    );
    assert!(game.is_finished());
    assert_eq!(agent::play(&mut game), Ok(None));
    assert_eq!(game.moves(), 9);
}

#[test]
fn test_full_board_yields_no_move() {
    let mut game = Game::new(1).unwrap();
    game.play(p(0, 0)).unwrap();
    assert_eq!(game.turn(), Stone::White);
    assert!(game.board().is_full());
    assert_eq!(agent::pick_move(&game), None);
}
