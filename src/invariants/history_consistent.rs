//! History consistency invariant: history and board describe the same round.

use super::Invariant;
use crate::types::{GameState, Square};

/// Invariant: History length matches filled squares, with no position
/// played twice.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let filled = state
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        if filled != state.history().len() {
            return false;
        }

        let mut seen = [false; 9];
        for mov in state.history() {
            let index = mov.position().to_index();
            if seen[index] {
                return false;
            }
            seen[index] = true;
        }

        true
    }

    fn description() -> &'static str {
        "Move history is consistent with the board"
    }
}
