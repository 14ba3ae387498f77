//! Computer opponent: difficulty tiers and move selection.

mod minimax;
mod opponent;

pub use opponent::Opponent;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Strength of the computer opponent, fixed for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniformly random moves, no look-ahead.
    Easy,
    /// Win, block, center, corner heuristics.
    #[default]
    Pro,
    /// Exhaustive minimax search; never loses.
    Impossible,
}

impl Difficulty {
    /// Returns the display label for this tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Pro => "Pro",
            Self::Impossible => "Impossible",
        }
    }

    /// Cycles to the next tier (for settings menus).
    pub fn cycle(self) -> Self {
        match self {
            Self::Easy => Self::Pro,
            Self::Pro => Self::Impossible,
            Self::Impossible => Self::Easy,
        }
    }
}

/// Error returned when parsing an unrecognized difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Unknown difficulty: {}", _0)]
pub struct UnknownDifficulty(String);

impl std::error::Error for UnknownDifficulty {}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "pro" => Ok(Difficulty::Pro),
            "impossible" => Ok(Difficulty::Impossible),
            _ => Err(UnknownDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tiers() {
        assert_eq!("easy".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("Pro".parse::<Difficulty>().unwrap(), Difficulty::Pro);
        assert_eq!(
            "IMPOSSIBLE".parse::<Difficulty>().unwrap(),
            Difficulty::Impossible
        );
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Difficulty::Impossible).unwrap();
        assert_eq!(json, "\"impossible\"");
    }

    #[test]
    fn test_cycle_visits_all_tiers() {
        let start = Difficulty::Easy;
        assert_eq!(start.cycle().cycle().cycle(), start);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Difficulty::Easy.label(), "Easy");
        assert_eq!(Difficulty::Pro.label(), "Pro");
        assert_eq!(Difficulty::Impossible.label(), "Impossible");
    }
}
