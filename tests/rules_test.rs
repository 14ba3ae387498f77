//! Tests for board evaluation at the public API.

use solo_tictactoe::rules::{check_winner, evaluate, is_draw};
use solo_tictactoe::{Board, GameStatus, Player, Position, Square};
use strum::IntoEnumIterator;

fn board_with(marks: &[(usize, Player)]) -> Board {
    let mut board = Board::new();
    for (index, player) in marks {
        let pos = Position::from_index(*index).expect("index in range");
        board.set(pos, Square::Occupied(*player));
    }
    board
}

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[test]
fn test_every_line_wins_for_either_player() {
    for line in LINES {
        for player in [Player::X, Player::O] {
            let board = board_with(&[
                (line[0], player),
                (line[1], player),
                (line[2], player),
            ]);

            assert_eq!(evaluate(&board), GameStatus::Won(player), "line {line:?}");
        }
    }
}

#[test]
fn test_win_reported_regardless_of_remainder() {
    // O wins the right column while the rest of the board is full.
    let board = board_with(&[
        (0, Player::X),
        (1, Player::X),
        (2, Player::O),
        (3, Player::O),
        (4, Player::X),
        (5, Player::O),
        (6, Player::X),
        (7, Player::O),
        (8, Player::O),
    ]);

    assert_eq!(evaluate(&board), GameStatus::Won(Player::O));
    assert!(!is_draw(&board));
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / O X X / O X O
    let board = board_with(&[
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (3, Player::O),
        (4, Player::X),
        (5, Player::X),
        (6, Player::O),
        (7, Player::X),
        (8, Player::O),
    ]);

    assert_eq!(check_winner(&board), None);
    assert_eq!(evaluate(&board), GameStatus::Draw);
}

#[test]
fn test_non_full_board_without_line_is_in_progress() {
    let board = board_with(&[(0, Player::X), (4, Player::O), (8, Player::X)]);
    assert_eq!(evaluate(&board), GameStatus::InProgress);

    // One mark shy of a full board, still no line.
    let board = board_with(&[
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (3, Player::O),
        (4, Player::X),
        (5, Player::X),
        (6, Player::O),
        (7, Player::X),
    ]);
    assert_eq!(evaluate(&board), GameStatus::InProgress);
}

#[test]
fn test_board_serde_round_trip() {
    let mut board = Board::new();
    for pos in Position::iter().take(3) {
        board.set(pos, Square::Occupied(Player::X));
    }

    let json = serde_json::to_string(&board).unwrap();
    let back: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(evaluate(&back), GameStatus::Won(Player::X));
}
