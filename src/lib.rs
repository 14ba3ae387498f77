//! Single-player tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation (win, draw, in-progress)
//! - **AI**: the computer opponent across three difficulty tiers, from
//!   random play up to an exhaustive minimax search
//! - **Game**: validated move application with first-class invariants
//! - **Session**: human-vs-computer rounds with score tracking
//!
//! Rendering, input handling, and settings persistence live in the
//! surrounding application; this crate supplies the game itself.
//!
//! # Example
//!
//! ```
//! use solo_tictactoe::{Difficulty, GameStatus, Position, Session};
//!
//! let mut session = Session::with_seed(Difficulty::Impossible, 7);
//! let status = session.human_move(Position::Center)?;
//! assert_eq!(status, &GameStatus::InProgress);
//! # Ok::<(), solo_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod ai;
mod game;
mod invariants;
mod position;
pub mod rules;
mod session;
mod settings;
mod types;

// Crate-level exports - Actions
pub use action::{Move, MoveError};

// Crate-level exports - Computer opponent
pub use ai::{Difficulty, Opponent, UnknownDifficulty};

// Crate-level exports - Game engine
pub use game::Game;

// Crate-level exports - Invariants
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant,
};

// Crate-level exports - Board and state types
pub use position::Position;
pub use types::{Board, GameState, GameStatus, Player, Square};

// Crate-level exports - Session management
pub use session::{Scoreboard, Session};

// Crate-level exports - Settings
pub use settings::{MarkColors, Settings, Theme};

// Convenience re-export of the board evaluator
pub use rules::evaluate;
