//! Game engine: validated move application and status updates.

use crate::action::{Move, MoveError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules;
use crate::types::{GameState, GameStatus};
use tracing::{debug, instrument, warn};

/// Tic-tac-toe game engine for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Makes a move, validating it against the current state.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the round has already ended
    /// - [`MoveError::WrongPlayer`] if it is not the move's player's turn
    /// - [`MoveError::SquareOccupied`] if the target square is taken
    #[instrument(skip(self), fields(player = ?mov.player, position = ?mov.position))]
    pub fn make_move(&mut self, mov: Move) -> Result<(), MoveError> {
        if self.state.status() != &GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        if mov.player != self.state.current_player() {
            return Err(MoveError::WrongPlayer(mov.player));
        }

        if !self.state.board().is_empty(mov.position) {
            return Err(MoveError::SquareOccupied(mov.position));
        }

        self.state.apply_move(mov);

        let status = rules::evaluate(self.state.board());
        self.state.set_status(status);

        // Postcondition: the transition preserved all game invariants.
        GameInvariants::check_all(&self.state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move postcondition failed");
            MoveError::InvariantViolation(descriptions)
        })?;

        debug!(status = ?self.state.status(), "Move applied");
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
