//! Precomputed target tables for the 5x5 board.
//!
//! Leapers (king, knight) and pawn captures are plain lookups. Sliders use
//! one ray per direction; the first blocker along a ray is the lowest set bit
//! for directions that increase the square index and the highest set bit for
//! directions that decrease it.

use once_cell::sync::Lazy;

use super::{Bitboard, Color, Square, NUM_SQUARES};

/// (row, col) deltas for the eight king/queen directions.
pub(crate) const KING_DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Indices into `RAYS` for the diagonal directions.
pub(crate) const DIAGONAL_DIRS: [usize; 4] = [0, 2, 5, 7];
/// Indices into `RAYS` for all eight directions.
pub(crate) const ALL_DIRS: [usize; 8] = [0, 1, 2, 3, 4, 5, 6, 7];

fn leaper_table(deltas: &[(isize, isize)]) -> [Bitboard; NUM_SQUARES] {
    let mut table = [Bitboard::EMPTY; NUM_SQUARES];
    for sq in Square::all() {
        let mut mask = Bitboard::EMPTY;
        for &(dr, dc) in deltas {
            if let Some(to) = sq.offset(dr, dc) {
                mask = mask.or(Bitboard::from_square(to));
            }
        }
        table[sq.as_index()] = mask;
    }
    table
}

pub(crate) static KING_TARGETS: Lazy<[Bitboard; NUM_SQUARES]> =
    Lazy::new(|| leaper_table(&KING_DELTAS));

pub(crate) static KNIGHT_TARGETS: Lazy<[Bitboard; NUM_SQUARES]> =
    Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

/// Diagonal forward squares a pawn of each color may capture on.
pub(crate) static PAWN_CAPTURES: Lazy<[[Bitboard; NUM_SQUARES]; 2]> = Lazy::new(|| {
    let mut table = [[Bitboard::EMPTY; NUM_SQUARES]; 2];
    for color in Color::BOTH {
        let dir = color.pawn_direction();
        table[color.index()] = leaper_table(&[(dir, -1), (dir, 1)]);
    }
    table
});

/// `RAYS[dir][sq]`: every square from `sq` (exclusive) to the board edge.
static RAYS: Lazy<[[Bitboard; NUM_SQUARES]; 8]> = Lazy::new(|| {
    let mut rays = [[Bitboard::EMPTY; NUM_SQUARES]; 8];
    for (dir, &(dr, dc)) in KING_DELTAS.iter().enumerate() {
        for sq in Square::all() {
            let mut mask = Bitboard::EMPTY;
            let mut cur = sq;
            while let Some(next) = cur.offset(dr, dc) {
                mask = mask.or(Bitboard::from_square(next));
                cur = next;
            }
            rays[dir][sq.as_index()] = mask;
        }
    }
    rays
});

#[inline]
const fn ray_increases_index(dir: usize) -> bool {
    let (dr, dc) = KING_DELTAS[dir];
    dr * 5 + dc > 0
}

/// Squares a slider on `from` reaches along `dir`, up to and including the
/// first occupied square.
#[inline]
pub(crate) fn ray_attacks(from: Square, dir: usize, occupied: Bitboard) -> Bitboard {
    let ray = RAYS[dir][from.as_index()];
    let blockers = ray.and(occupied);
    if blockers.is_empty() {
        return ray;
    }
    let first = if ray_increases_index(dir) {
        blockers.0.trailing_zeros() as usize
    } else {
        31 - blockers.0.leading_zeros() as usize
    };
    Bitboard(ray.0 ^ RAYS[dir][first].0)
}

/// Union of `ray_attacks` over a set of directions.
pub(crate) fn slider_attacks(from: Square, dirs: &[usize], occupied: Bitboard) -> Bitboard {
    dirs.iter().fold(Bitboard::EMPTY, |acc, &dir| {
        acc.or(ray_attacks(from, dir, occupied))
    })
}
