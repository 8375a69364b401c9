//! Move classification from two consecutive board snapshots.
//!
//! Classification counts pieces rather than replaying the move, so it is only
//! meaningful for positions exactly one ply apart.

use crate::piece::Piece;
use crate::position::Position;
use crate::square::{Origin, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Move,
    Capture,
    Drop,
}

/// `Drop` when one piece appeared, `Capture` when one disappeared.
pub fn classify(before: &Position, after: &Position) -> MoveKind {
    match after.len() as i64 - before.len() as i64 {
        1 => MoveKind::Drop,
        -1 => MoveKind::Capture,
        _ => MoveKind::Move,
    }
}

/// The ranks nearest the opponent, `depth` deep, on a board of `ranks` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromotionZone {
    pub depth: u32,
    pub ranks: u32,
}

impl PromotionZone {
    /// The first player advances toward rank 1, the second toward the last rank.
    pub fn contains(self, sq: Square, first_player: bool) -> bool {
        if first_player {
            sq.rank <= self.depth
        } else {
            sq.rank > self.ranks.saturating_sub(self.depth)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionMarker {
    /// `+`: the piece changed identity.
    Promoted,
    /// `=`: the piece could have promoted and stayed as it was.
    Declined,
    None,
}

impl PromotionMarker {
    pub fn as_str(self) -> &'static str {
        match self {
            PromotionMarker::Promoted => "+",
            PromotionMarker::Declined => "=",
            PromotionMarker::None => "",
        }
    }
}

/// Gold-equivalents and kings never promote.
fn can_promote(piece: Piece) -> bool {
    !piece.promoted && !matches!(piece.role(), 'g' | 'k')
}

/// Promotion marker for the piece that moved from `orig` to `dest`.
pub fn promotion_marker(
    before: &Position,
    after: &Position,
    orig: Origin,
    dest: Square,
    zone: PromotionZone,
) -> PromotionMarker {
    if classify(before, after) == MoveKind::Drop {
        return PromotionMarker::None;
    }
    let Some(orig) = orig.square() else {
        return PromotionMarker::None;
    };
    let (Some(prev), Some(current)) = (before.piece_at(orig), after.piece_at(dest)) else {
        return PromotionMarker::None;
    };

    if prev != current {
        return PromotionMarker::Promoted;
    }
    if can_promote(current) && zone.contains(dest, after.first_player_moved()) {
        PromotionMarker::Declined
    } else {
        PromotionMarker::None
    }
}
