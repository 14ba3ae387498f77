//! Tests for the computer opponent across difficulty tiers.

use solo_tictactoe::{
    Board, Difficulty, Game, GameStatus, Move, Opponent, Player, Position, Square, evaluate,
};
use strum::IntoEnumIterator;

fn board_with(marks: &[(usize, Player)]) -> Board {
    let mut board = Board::new();
    for (index, player) in marks {
        let pos = Position::from_index(*index).expect("index in range");
        board.set(pos, Square::Occupied(*player));
    }
    board
}

#[test]
fn test_impossible_takes_the_win_from_two_in_a_row() {
    // Computer holds 0 and 1; it must complete the row at 2.
    let board = board_with(&[(0, Player::O), (1, Player::O), (3, Player::X), (4, Player::X)]);
    let mut opponent = Opponent::with_seed(Player::O, Difficulty::Impossible, 0);

    assert_eq!(opponent.select_move(&board), Some(Position::TopRight));
}

#[test]
fn test_pro_blocks_imminent_human_win() {
    // Human X threatens the bottom row; O has no win of its own.
    let board = board_with(&[(6, Player::X), (7, Player::X), (4, Player::O)]);
    let mut opponent = Opponent::with_seed(Player::O, Difficulty::Pro, 0);

    assert_eq!(opponent.select_move(&board), Some(Position::BottomRight));
}

#[test]
fn test_selected_move_applies_cleanly_on_every_tier() {
    let board = board_with(&[(0, Player::X), (4, Player::O), (5, Player::X)]);

    for difficulty in [Difficulty::Easy, Difficulty::Pro, Difficulty::Impossible] {
        let mut opponent = Opponent::with_seed(Player::O, difficulty, 9);
        let pos = opponent.select_move(&board).expect("open squares remain");

        assert!(board.is_empty(pos), "{difficulty:?} picked an occupied square");

        let mut applied = board.clone();
        applied.set(pos, Square::Occupied(Player::O));
        // Placing the chosen mark yields a well-formed, evaluable board.
        let _ = evaluate(&applied);
    }
}

#[test]
fn test_easy_never_picks_occupied_squares() {
    let board = board_with(&[
        (1, Player::X),
        (3, Player::O),
        (4, Player::X),
        (8, Player::O),
    ]);
    let mut opponent = Opponent::with_seed(Player::O, Difficulty::Easy, 21);

    for _ in 0..50 {
        let pos = opponent.select_move(&board).expect("open squares remain");
        assert!(board.is_empty(pos));
    }
}

/// Expands every legal human line of play against the impossible tier and
/// asserts the human never wins. The human moves at each branch point; the
/// computer answers with its search. Worst case this walks a few hundred
/// finished games.
fn assert_human_cannot_win(game: Game, human: Player, computer: Player) {
    for pos in Position::iter() {
        if !game.state().board().is_empty(pos) {
            continue;
        }

        let mut branch = game.clone();
        branch
            .make_move(Move::new(human, pos))
            .expect("human move on open square");

        if branch.state().status() == &GameStatus::InProgress {
            let mut opponent = Opponent::with_seed(computer, Difficulty::Impossible, 0);
            let reply = opponent
                .select_move(branch.state().board())
                .expect("in-progress board has open squares");
            branch
                .make_move(Move::new(computer, reply))
                .expect("computer move on open square");
        }

        let status = branch.state().status().clone();
        if status == GameStatus::InProgress {
            assert_human_cannot_win(branch, human, computer);
        } else {
            assert_ne!(
                status,
                GameStatus::Won(human),
                "human forced a win via {:?}",
                branch.state().history()
            );
        }
    }
}

#[test]
fn test_impossible_never_loses_moving_second() {
    // Session setup: human X opens, computer O replies.
    assert_human_cannot_win(Game::new(), Player::X, Player::O);
}

#[test]
fn test_impossible_never_loses_moving_first() {
    // Computer X opens with its search; the human O branches from there.
    let mut game = Game::new();
    let mut opponent = Opponent::with_seed(Player::X, Difficulty::Impossible, 0);
    let opening = opponent
        .select_move(game.state().board())
        .expect("empty board has open squares");
    game.make_move(Move::new(Player::X, opening))
        .expect("opening move");

    assert_human_cannot_win(game, Player::O, Player::X);
}
