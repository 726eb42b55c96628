//! Move generation.
//!
//! There is no check detection in MiniChess: a king may move into or stay in
//! an attacked square, and capturing the enemy king ends the game. Every
//! pseudo-legal move is therefore legal.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{pop_lsb, Bitboard, Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Generate every legal move for the side to move.
    ///
    /// Moves are produced piece kind by piece kind (pawns, knights, bishops,
    /// queens, king), each kind in ascending square order. The search's
    /// stable ordering relies on this order for tie-breaks.
    #[must_use]
    pub fn generate_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;
        for piece in Piece::ALL {
            let mut bb = self.pieces(color, piece);
            while !bb.is_empty() {
                let from = pop_lsb(&mut bb);
                self.generate_piece_moves_into(from, color, piece, &mut moves);
            }
        }
        moves
    }

    /// Moves for the piece on `from`, if it belongs to the side to move.
    #[must_use]
    pub fn generate_moves_from(&self, from: Square) -> MoveList {
        let mut moves = MoveList::new();
        if let Some((color, piece)) = self.piece_at(from) {
            if color == self.side_to_move {
                self.generate_piece_moves_into(from, color, piece, &mut moves);
            }
        }
        moves
    }

    fn generate_piece_moves_into(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut MoveList,
    ) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop => self.generate_bishop_moves(from, color, moves),
            Piece::Queen => self.generate_queen_moves(from, color, moves),
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }

    /// Whether `mv` is among the generated moves for the side to move.
    #[must_use]
    pub fn is_legal_move(&self, mv: Move) -> bool {
        match self.piece_at(mv.from()) {
            Some((color, _)) if color == self.side_to_move => {
                self.generate_moves_from(mv.from()).contains(mv)
            }
            _ => false,
        }
    }

    /// Count leaf nodes of the move tree to `depth`.
    ///
    /// Positions where a king has been captured are leaves: no moves are
    /// generated past the end of the game.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        if !self.kings_present() {
            return 0;
        }

        let moves = self.generate_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            let info = self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(mv, info);
        }
        nodes
    }

    /// Perft split by root move, in generation order.
    pub fn perft_divide(&mut self, depth: usize) -> Vec<(Move, u64)> {
        if depth == 0 || !self.kings_present() {
            return Vec::new();
        }
        let moves = self.generate_moves();
        let mut counts = Vec::with_capacity(moves.len());
        for mv in moves {
            let info = self.make_move(mv);
            counts.push((mv, self.perft(depth - 1)));
            self.unmake_move(mv, info);
        }
        counts
    }

    /// Push a move for every square in `targets`.
    #[inline]
    fn push_targets(from: Square, targets: Bitboard, moves: &mut MoveList) {
        for to in targets.iter() {
            moves.push(Move::new(from, to));
        }
    }
}

/// Free-function form of [`Board::generate_moves`].
#[must_use]
pub fn legal_moves(board: &Board) -> MoveList {
    board.generate_moves()
}
