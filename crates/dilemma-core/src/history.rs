//! Move history primitives

use serde::{Deserialize, Serialize};

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    Cooperate,
    Defect,
}

impl Move {
    /// Single-letter notation used by scripts and test fixtures.
    pub fn as_char(self) -> char {
        match self {
            Move::Cooperate => 'C',
            Move::Defect => 'D',
        }
    }
}

/// Errors that can occur when parsing move-string notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseMoveError {
    /// A character other than `C` or `D` at the given offset.
    UnknownChar { offset: usize, ch: char },
}

impl core::fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseMoveError::UnknownChar { offset, ch } => {
                write!(f, "unknown move character {:?} at offset {}", ch, offset)
            }
        }
    }
}

impl std::error::Error for ParseMoveError {}

/// Parse `"CDC"` notation into a move sequence.
pub fn moves_from_str(s: &str) -> Result<Vec<Move>, ParseMoveError> {
    s.chars()
        .enumerate()
        .map(|(offset, ch)| match ch {
            'C' => Ok(Move::Cooperate),
            'D' => Ok(Move::Defect),
            _ => Err(ParseMoveError::UnknownChar { offset, ch }),
        })
        .collect()
}

/// Render a move sequence as `"CDC"` notation.
pub fn moves_to_string(moves: &[Move]) -> String {
    moves.iter().map(|m| m.as_char()).collect()
}

/// The opponent's prior moves, for whoever moves next.
///
/// History is interleaved by turn: index 0 is seat A's first move, index 1
/// is seat B's first, and so on. With `N = history.len()`, the next mover
/// sits at parity `N % 2`, so the opponent's moves are exactly the entries
/// whose index parity differs from `N % 2`, in chronological order.
///
/// Derived fresh from the full history on every call, never cached, so it
/// always reflects the latest state no matter which seat the caller holds.
pub fn opponent_view(history: &[Move]) -> Vec<Move> {
    let mover_parity = history.len() % 2;

    history
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 2 != mover_parity)
        .map(|(_, m)| *m)
        .collect()
}
