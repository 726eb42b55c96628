//! Game outcome state machine.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Color;

/// Number of consecutive moves without a capture after which the game is drawn.
///
/// An earlier revision of the rules used 13; the current rules use 10.
pub const DRAW_CLOCK_LIMIT: u32 = 10;

/// Result of the game after the last applied move.
///
/// `InProgress` is the only non-terminal state. Once any other state is
/// reached no further moves are accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    #[default]
    InProgress,
    WhiteWins,
    BlackWins,
    Draw,
}

impl Outcome {
    /// The outcome in which `color` wins
    #[must_use]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => Outcome::WhiteWins,
            Color::Black => Outcome::BlackWins,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning side, if any
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::WhiteWins => Some(Color::White),
            Outcome::BlackWins => Some(Color::Black),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::WhiteWins => write!(f, "White wins"),
            Outcome::BlackWins => write!(f, "Black wins"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
