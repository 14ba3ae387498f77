//! Move selection across difficulty tiers.

use super::{Difficulty, minimax};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player, Square};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Computer opponent for a single session.
///
/// Holds the mark it plays, the session's difficulty, and its own RNG for
/// the randomized tiers. Tests use [`Opponent::with_seed`] to make the
/// randomized tiers reproducible; the impossible tier is deterministic
/// regardless of the seed.
#[derive(Debug, Clone)]
pub struct Opponent {
    mark: Player,
    difficulty: Difficulty,
    rng: SmallRng,
}

impl Opponent {
    /// Creates an opponent playing `mark` at the given difficulty.
    pub fn new(mark: Player, difficulty: Difficulty) -> Self {
        Self {
            mark,
            difficulty,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates an opponent with a deterministic RNG seed.
    pub fn with_seed(mark: Player, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            mark,
            difficulty,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Returns the mark this opponent plays.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Returns the session difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Selects the opponent's next move, or `None` when the board is full.
    ///
    /// Does not mutate the board; hypothetical placements during look-ahead
    /// operate on copies.
    #[instrument(skip(self, board), fields(difficulty = ?self.difficulty, mark = ?self.mark))]
    pub fn select_move(&mut self, board: &Board) -> Option<Position> {
        let open = Position::valid_moves(board);
        if open.is_empty() {
            debug!("No open squares");
            return None;
        }

        let choice = match self.difficulty {
            Difficulty::Easy => open.choose(&mut self.rng).copied(),
            Difficulty::Pro => self.strategic_move(board, &open),
            Difficulty::Impossible => minimax::best_move(board, self.mark),
        };

        debug!(position = ?choice, "Opponent selected move");
        choice
    }

    /// Pro tier: fixed priority ladder, first rule that applies wins.
    fn strategic_move(&mut self, board: &Board, open: &[Position]) -> Option<Position> {
        // Take an immediate win.
        if let Some(pos) = winning_move(board, open, self.mark) {
            return Some(pos);
        }

        // Block the human's immediate win.
        if let Some(pos) = winning_move(board, open, self.mark.opponent()) {
            return Some(pos);
        }

        // Take the center.
        if board.is_empty(Position::Center) {
            return Some(Position::Center);
        }

        // Take a random open corner.
        let corners: Vec<Position> = Position::CORNERS
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect();
        if let Some(pos) = corners.choose(&mut self.rng) {
            return Some(*pos);
        }

        // Fall back to a random open square.
        open.choose(&mut self.rng).copied()
    }
}

/// Finds the first open position (in index order) where placing `player`'s
/// mark completes three in a row.
fn winning_move(board: &Board, open: &[Position], player: Player) -> Option<Position> {
    open.iter().copied().find(|&pos| {
        let mut probe = board.clone();
        probe.set(pos, Square::Occupied(player));
        rules::check_winner(&probe) == Some(player)
    })
}
