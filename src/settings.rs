//! User-configurable settings for a game session.
//!
//! Plain data only; reading and writing these from disk or a UI is the
//! surrounding application's concern.

use crate::ai::Difficulty;
use serde::{Deserialize, Serialize};

/// Visual theme for the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Classic look.
    #[default]
    Classic,
    /// Modern look.
    Modern,
}

impl Theme {
    /// Returns the display label for this theme.
    pub fn label(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Modern => "Modern",
        }
    }

    /// Toggles between `Classic` and `Modern`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Classic => Self::Modern,
            Self::Modern => Self::Classic,
        }
    }
}

/// Custom display colors for each mark, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkColors {
    /// Color for X marks.
    pub x: String,
    /// Color for O marks.
    pub o: String,
}

impl Default for MarkColors {
    fn default() -> Self {
        Self {
            x: "#6366F1".to_string(),
            o: "#64728B".to_string(),
        }
    }
}

/// User-configurable settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Visual theme.
    pub theme: Theme,
    /// Whether move and win sounds play.
    pub sound_enabled: bool,
    /// Opponent difficulty for new sessions.
    pub difficulty: Difficulty,
    /// Custom mark colors.
    pub colors: MarkColors,
}

impl Settings {
    /// Creates settings with defaults.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Classic,
            sound_enabled: true,
            difficulty: Difficulty::Pro,
            colors: MarkColors::default(),
        }
    }
}
