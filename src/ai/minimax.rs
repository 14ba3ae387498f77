//! Exhaustive minimax search for the impossible tier.
//!
//! The full game tree from any tic-tac-toe position is at most 9 plies
//! deep (9! = 362,880 leaves from an empty board, shrinking factorially
//! as the game fills), so the search runs to the bottom with no pruning
//! and no depth limit.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

const WIN: i32 = 10;
const LOSS: i32 = -10;
const DRAW: i32 = 0;

/// A candidate move paired with its minimax score.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    position: Position,
    score: i32,
}

/// Returns the optimal move for `mark`, or `None` when the board is terminal.
///
/// Ties break to the first candidate in position order, so the choice is
/// fully deterministic for a given board. The draw score is flat: the
/// search may prefer a slower win over a faster one by position order,
/// which is fine since optimal (never-losing) play is the contract, not
/// fastest play.
#[instrument(skip(board))]
pub fn best_move(board: &Board, mark: Player) -> Option<Position> {
    match rules::evaluate(board) {
        GameStatus::InProgress => search(board, mark, mark).map(|best| best.position),
        _ => None,
    }
}

/// Walks one ply of the game tree below an in-progress `board`. `turn`
/// owns the current ply; `mark` is the maximizing side.
fn search(board: &Board, turn: Player, mark: Player) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for position in Position::iter() {
        if !board.is_empty(position) {
            continue;
        }

        let mut child = board.clone();
        child.set(position, Square::Occupied(turn));
        let value = score(&child, turn.opponent(), mark);

        let better = match best {
            None => true,
            Some(current) if turn == mark => value > current.score,
            Some(current) => value < current.score,
        };
        if better {
            best = Some(Candidate {
                position,
                score: value,
            });
        }
    }

    best
}

/// Scores a board from `mark`'s perspective, recursing while in progress.
fn score(board: &Board, turn: Player, mark: Player) -> i32 {
    match rules::evaluate(board) {
        GameStatus::Won(winner) if winner == mark => WIN,
        GameStatus::Won(_) => LOSS,
        GameStatus::Draw => DRAW,
        GameStatus::InProgress => match search(board, turn, mark) {
            Some(best) => best.score,
            // An in-progress board always has an open square.
            None => DRAW,
        },
    }
}
