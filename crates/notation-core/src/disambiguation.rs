//! Reverse movement tables for move disambiguation.
//!
//! For a destination and a piece, list every square from which that piece could
//! have arrived in one step. Pins, blockers and checks are not considered.

use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;

/// Source offsets relative to the destination, for a first-player piece.
/// Positive rank offsets point toward the first player's side of the board.
const KNIGHT_SOURCES: [(i32, i32); 2] = [(1, 2), (-1, 2)];

const SILVER_SOURCES: [(i32, i32); 5] = [(-1, 1), (0, 1), (1, 1), (-1, -1), (1, -1)];

const GOLD_SOURCES: [(i32, i32); 6] = [(-1, 1), (0, 1), (1, 1), (-1, 0), (1, 0), (0, -1)];

const DIAGONALS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

const ORTHOGONALS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Movement family of a piece, as far as disambiguation cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceType {
    Knight,
    Silver,
    /// Gold and the promoted minors that move like it.
    Gold,
    Bishop,
    Rook,
    /// Promoted bishop.
    Horse,
    /// Promoted rook.
    Dragon,
    /// King, pawn, lance and anything unknown: never printed with an origin.
    Unambiguous,
}

impl PieceType {
    pub fn of(piece: Piece) -> PieceType {
        match (piece.role(), piece.promoted) {
            ('n', false) => PieceType::Knight,
            ('s', false) => PieceType::Silver,
            ('g', false) | ('p' | 'l' | 'n' | 's', true) => PieceType::Gold,
            ('b', false) => PieceType::Bishop,
            ('r', false) => PieceType::Rook,
            ('b', true) => PieceType::Horse,
            ('r', true) => PieceType::Dragon,
            _ => PieceType::Unambiguous,
        }
    }

    /// Single-step source offsets.
    fn steps(self) -> &'static [(i32, i32)] {
        match self {
            PieceType::Knight => &KNIGHT_SOURCES,
            PieceType::Silver => &SILVER_SOURCES,
            PieceType::Gold => &GOLD_SOURCES,
            PieceType::Horse => &ORTHOGONALS,
            PieceType::Dragon => &DIAGONALS,
            PieceType::Bishop | PieceType::Rook | PieceType::Unambiguous => &[],
        }
    }

    /// Sliding directions.
    fn rays(self) -> &'static [(i32, i32)] {
        match self {
            PieceType::Bishop | PieceType::Horse => &DIAGONALS,
            PieceType::Rook | PieceType::Dragon => &ORTHOGONALS,
            _ => &[],
        }
    }
}

/// Every on-board square from which `piece` could have reached `dest`.
pub fn source_squares(piece: Piece, dest: Square, files: u32, ranks: u32) -> Vec<Square> {
    let kind = PieceType::of(piece);
    // Tables are written for the first player; the second player moves the other way.
    let forward = if piece.is_first_player() { 1 } else { -1 };
    let mut sources = Vec::new();

    for &(df, dr) in kind.steps() {
        if let Some(sq) = dest.offset(df, dr * forward, files, ranks) {
            sources.push(sq);
        }
    }

    let reach = files.max(ranks) as i32;
    for &(df, dr) in kind.rays() {
        for i in 1..reach {
            match dest.offset(df * i, dr * i, files, ranks) {
                Some(sq) => sources.push(sq),
                None => break,
            }
        }
    }

    sources
}

/// Whether another piece identical to `moving` could also have reached `dest`.
///
/// `after` is the position after the move, so the moving piece itself is on
/// `dest` and never counts.
pub fn is_ambiguous(after: &Position, dest: Square, moving: Piece, files: u32, ranks: u32) -> bool {
    source_squares(moving, dest, files, ranks)
        .into_iter()
        .any(|sq| after.piece_at(sq) == Some(moving))
}
