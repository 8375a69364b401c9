//! Board-encoding decoder.
//!
//! The encoding is FEN-like: rows separated by `/`, first row = rank 1 (top),
//! first character of a row = the highest file. Digits skip empty files, `+`
//! promotes the next piece, `~` is ignored, anything else is a piece letter.
//! Held-piece pools start at `[` and are ignored, as is anything after the
//! side-to-move field.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::piece::Piece;
use crate::square::Square;

/// Immutable snapshot of the pieces on the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    pieces: HashMap<Square, Piece>,
    first_player_moved: bool,
}

impl Position {
    /// Build a position directly from placed pieces.
    pub fn from_pieces<I>(pieces: I, first_player_moved: bool) -> Self
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        Self {
            pieces: pieces.into_iter().collect(),
            first_player_moved,
        }
    }

    /// Decode a board encoding. Never fails: short rows leave squares empty and
    /// pieces beyond the last file are dropped.
    pub fn decode(encoding: &str, ranks: u32, files: u32) -> Position {
        let mut fields = encoding.split(' ');
        let board = fields.next().unwrap_or_default();
        // Side to move is the second player, so the first player just moved.
        let first_player_moved = fields.next() == Some("b");

        let board = board.split('[').next().unwrap_or_default();
        let mut pieces = HashMap::new();

        for (y, row) in board.split('/').take(ranks as usize).enumerate() {
            let rank = y as u32 + 1;
            let mut file = files as i64;
            let mut promoted = false;
            let mut chars = row.chars().peekable();

            while let Some(c) = chars.next() {
                match c {
                    '~' => {}
                    '+' => promoted = true,
                    '0'..='9' => {
                        let mut run = c.to_digit(10).unwrap_or(0) as i64;
                        while let Some(d) = chars.peek().and_then(|n| n.to_digit(10)) {
                            run = run.saturating_mul(10).saturating_add(d as i64);
                            chars.next();
                        }
                        file = file.saturating_sub(run);
                    }
                    letter => {
                        if file >= 1 {
                            let piece = Piece { letter, promoted };
                            pieces.insert(Square::new(file as u32, rank), piece);
                        } else {
                            trace!(rank, %letter, "piece beyond the last file ignored");
                        }
                        file = file.saturating_sub(1);
                        promoted = false;
                    }
                }
            }

            if file > 0 {
                debug!(rank, missing = file, "short row in board encoding");
            }
        }

        Position {
            pieces,
            first_player_moved,
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.pieces.get(&sq).copied()
    }

    /// Number of pieces on the board.
    #[inline]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// True when the side-to-move field names the second player.
    #[inline]
    pub fn first_player_moved(&self) -> bool {
        self.first_player_moved
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces.iter().map(|(sq, piece)| (*sq, *piece))
    }
}
