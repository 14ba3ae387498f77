//! Alternating turn invariant: X moves first, players strictly alternate.

use super::Invariant;
use crate::types::{GameState, GameStatus, Player};

/// Invariant: Moves alternate between X and O, starting with X.
///
/// While a round is live, the current player must also continue the
/// alternation implied by the history length.
pub struct AlternatingTurnInvariant;

impl AlternatingTurnInvariant {
    fn expected_player(ply: usize) -> Player {
        if ply % 2 == 0 { Player::X } else { Player::O }
    }
}

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        for (ply, mov) in state.history().iter().enumerate() {
            if mov.player != Self::expected_player(ply) {
                return false;
            }
        }

        if state.status() == &GameStatus::InProgress
            && state.current_player() != Self::expected_player(state.history().len())
        {
            return false;
        }

        true
    }

    fn description() -> &'static str {
        "Players alternate turns, starting with X"
    }
}
