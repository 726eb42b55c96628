//! Checked move application.
//!
//! Two paths share the same rules: [`Board::simulate`] is pure and silent,
//! [`Board::apply_move`] is the commit path that evaluates the outcome and
//! logs the move. Neither mutates its input.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{piece_tag, Board, Color, Move, MoveError, Outcome, Piece, Square};

/// One committed move, with everything needed to write a journal line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub color: Color,
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<(Color, Piece)>,
    /// Whether the promotion sweep turned any pawn into a queen
    pub promoted: bool,
    /// Draw clock after the move
    pub halfmove_clock: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn mv(&self) -> Move {
        Move::new(self.from, self.to)
    }

    #[must_use]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} -> {}",
            self.color,
            piece_tag(self.color, self.piece),
            self.from,
            self.to
        )?;
        if let Some((color, piece)) = self.captured {
            write!(f, " captures {}", piece_tag(color, piece))?;
        }
        if self.promoted {
            write!(f, " promotes to {}", piece_tag(self.color, Piece::Queen))?;
        }
        Ok(())
    }
}

/// Result of committing a move.
#[derive(Clone, Debug)]
pub struct Transition {
    pub board: Board,
    pub outcome: Outcome,
    pub record: MoveRecord,
}

impl Board {
    /// Check that `mv` may be played here.
    ///
    /// # Errors
    /// `GameOver` once the position is terminal, `EmptySource` / `WrongSide`
    /// for a bad source square, `NotLegal` when the piece cannot reach the
    /// destination.
    pub fn validate(&self, mv: Move) -> Result<(), MoveError> {
        let outcome = self.outcome();
        if outcome.is_terminal() {
            return Err(MoveError::GameOver { outcome });
        }
        let Some((color, _)) = self.piece_at(mv.from()) else {
            return Err(MoveError::EmptySource { square: mv.from() });
        };
        if color != self.side_to_move {
            return Err(MoveError::WrongSide {
                square: mv.from(),
                expected: self.side_to_move,
            });
        }
        if !self.generate_moves_from(mv.from()).contains(mv) {
            return Err(MoveError::NotLegal { mv });
        }
        Ok(())
    }

    /// Play `mv` on a copy of the position and return it with the captured
    /// piece. No logging and no outcome transition; a missing king in the
    /// result is visible through [`Board::kings_present`].
    ///
    /// # Errors
    /// See [`Board::validate`].
    pub fn simulate(&self, mv: Move) -> Result<(Board, Option<(Color, Piece)>), MoveError> {
        self.validate(mv)?;
        let mut next = self.clone();
        let info = next.make_move(mv);
        Ok((next, info.captured()))
    }

    /// Commit `mv`: play it on a copy, evaluate the outcome and describe
    /// the move in a [`MoveRecord`].
    ///
    /// # Errors
    /// See [`Board::validate`]. The position is never modified.
    pub fn apply_move(&self, mv: Move) -> Result<Transition, MoveError> {
        self.validate(mv)?;
        let mut board = self.clone();
        let info = board.make_move(mv);
        let outcome = board.outcome();
        let (color, piece) = info.moving_piece;
        let record = MoveRecord {
            color,
            piece,
            from: mv.from(),
            to: mv.to(),
            captured: info.captured(),
            promoted: info.promoted(),
            halfmove_clock: board.halfmove_clock,
        };
        log::debug!("{record} (clock {}, {outcome})", record.halfmove_clock);
        Ok(Transition {
            board,
            outcome,
            record,
        })
    }
}

/// Free-function form of [`Board::apply_move`].
///
/// # Errors
/// See [`Board::validate`].
pub fn apply_move(board: &Board, mv: Move) -> Result<Transition, MoveError> {
    board.apply_move(mv)
}
