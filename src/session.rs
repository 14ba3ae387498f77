//! Single-player session: one human against the computer across rounds.

use crate::action::{Move, MoveError};
use crate::ai::{Difficulty, Opponent};
use crate::game::Game;
use crate::position::Position;
use crate::types::{GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Running score across rounds of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Rounds won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Records a finished round. In-progress statuses are ignored.
    pub fn record(&mut self, status: &GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// A series of rounds between the human (X) and the computer (O).
///
/// The human always moves first. After each human move the computer
/// replies synchronously while the round is still in progress. Terminal
/// rounds are tallied on the scoreboard exactly once;
/// [`Session::play_again`] starts a fresh board and keeps the score.
#[derive(Debug, Clone)]
pub struct Session {
    game: Game,
    opponent: Opponent,
    score: Scoreboard,
}

impl Session {
    /// Creates a session at the given difficulty.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_opponent(Opponent::new(Player::O, difficulty))
    }

    /// Creates a session with a deterministic opponent seed.
    #[instrument]
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_opponent(Opponent::with_seed(Player::O, difficulty, seed))
    }

    fn with_opponent(opponent: Opponent) -> Self {
        info!(difficulty = ?opponent.difficulty(), "Creating new session");
        Self {
            game: Game::new(),
            opponent,
            score: Scoreboard::new(),
        }
    }

    /// Returns the current round's game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the running score.
    pub fn score(&self) -> &Scoreboard {
        &self.score
    }

    /// Returns the session difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.opponent.difficulty()
    }

    /// Returns the human player's mark.
    pub fn human_mark(&self) -> Player {
        self.opponent.mark().opponent()
    }

    /// Plays the human's move, then the computer's reply while the round
    /// is still in progress. Returns the status after both moves.
    ///
    /// # Errors
    ///
    /// Propagates [`MoveError`] from move validation: the round is over,
    /// the square is occupied, or it is not the human's turn.
    #[instrument(skip(self))]
    pub fn human_move(&mut self, position: Position) -> Result<&GameStatus, MoveError> {
        self.game.make_move(Move::new(self.human_mark(), position))?;

        if self.game.state().status() == &GameStatus::InProgress {
            self.computer_reply()?;
        }

        let status = self.game.state().status();
        if status != &GameStatus::InProgress {
            self.score.record(status);
            info!(status = ?status, "Round finished");
        }

        Ok(self.game.state().status())
    }

    /// Starts a new round, keeping the score.
    #[instrument(skip(self))]
    pub fn play_again(&mut self) {
        info!(
            x_wins = self.score.x_wins(),
            o_wins = self.score.o_wins(),
            draws = self.score.draws(),
            "Starting new round"
        );
        self.game = Game::new();
    }

    fn computer_reply(&mut self) -> Result<(), MoveError> {
        let Some(position) = self.opponent.select_move(self.game.state().board()) else {
            // An in-progress board always has an open square, so the
            // selector cannot come up empty here.
            debug!("Opponent had no move");
            return Ok(());
        };

        self.game.make_move(Move::new(self.opponent.mark(), position))
    }
}
