use super::{bit_for_square, Bitboard, Board, Color, Move, Piece, Square, UnmakeInfo};

impl Board {
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = bit_for_square(sq).0;
        let c_idx = color.index();
        self.pieces[c_idx][piece.index()].0 |= bit;
        self.occupied[c_idx].0 |= bit;
        self.all_occupied.0 |= bit;
    }

    pub(crate) fn remove_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = bit_for_square(sq).0;
        let c_idx = color.index();
        self.pieces[c_idx][piece.index()].0 &= !bit;
        self.occupied[c_idx].0 &= !bit;
        self.all_occupied.0 &= !bit;
    }

    /// The piece on `sq`, if any
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let bit = bit_for_square(sq);
        if self.all_occupied.and(bit).is_empty() {
            return None;
        }
        let color = if self.occupied_by(Color::White).contains(sq) {
            Color::White
        } else {
            Color::Black
        };
        Piece::ALL
            .into_iter()
            .find(|&piece| self.pieces(color, piece).contains(sq))
            .map(|piece| (color, piece))
    }

    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupied.contains(sq)
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    /// Replace every pawn standing on its promotion row with a queen.
    ///
    /// Scans both back ranks, not just the destination of the last move.
    /// Returns the promoted squares; the rows are disjoint, so the color of
    /// each promoted piece follows from its row.
    pub(crate) fn promote_back_ranks(&mut self) -> Bitboard {
        let mut promoted = Bitboard::EMPTY;
        for color in Color::BOTH {
            let row = Bitboard::row_mask(color.promotion_row());
            let pawns = self.pieces(color, Piece::Pawn).and(row);
            for sq in pawns.iter() {
                self.remove_piece(sq, color, Piece::Pawn);
                self.set_piece(sq, color, Piece::Queen);
            }
            promoted = promoted.or(pawns);
        }
        promoted
    }

    /// Apply `mv` in place, without validation.
    ///
    /// The caller guarantees `mv` was generated for this position. Performs
    /// the capture, the back-rank promotion sweep, the side flip and the
    /// draw clock update; the returned info undoes all of it exactly.
    ///
    /// # Panics
    /// If the source square is empty.
    pub(crate) fn make_move(&mut self, mv: Move) -> UnmakeInfo {
        let from = mv.from();
        let to = mv.to();
        let (color, piece) = self.piece_at(from).expect("make_move 'from' empty");
        debug_assert_eq!(color, self.side_to_move);

        let captured = self.piece_at(to);
        if let Some((cap_color, cap_piece)) = captured {
            self.remove_piece(to, cap_color, cap_piece);
        }
        self.remove_piece(from, color, piece);
        self.set_piece(to, color, piece);

        let promoted = self.promote_back_ranks();

        let previous_halfmove_clock = self.halfmove_clock;
        self.halfmove_clock = if captured.is_some() {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        self.side_to_move = color.opponent();

        UnmakeInfo {
            moving_piece: (color, piece),
            captured_piece_info: captured,
            previous_halfmove_clock,
            promoted,
        }
    }

    /// Exactly undo a `make_move`.
    pub(crate) fn unmake_move(&mut self, mv: Move, info: UnmakeInfo) {
        let (color, piece) = info.moving_piece;

        for sq in info.promoted.iter() {
            let owner = if Bitboard::ROW_0.contains(sq) {
                Color::White
            } else {
                Color::Black
            };
            self.remove_piece(sq, owner, Piece::Queen);
            self.set_piece(sq, owner, Piece::Pawn);
        }

        self.remove_piece(mv.to(), color, piece);
        self.set_piece(mv.from(), color, piece);
        if let Some((cap_color, cap_piece)) = info.captured_piece_info {
            self.set_piece(mv.to(), cap_color, cap_piece);
        }

        self.halfmove_clock = info.previous_halfmove_clock;
        self.side_to_move = color;
    }
}
