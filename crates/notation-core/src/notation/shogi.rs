//! Shogi-family notation: `S3c-4d`, `P*5e`, `Rx2c+`, `S-4c=`.

use tracing::debug;

use crate::classify::{promotion_marker, MoveKind, PromotionMarker};
use crate::disambiguation::is_ambiguous;
use crate::error::NotationError;
use crate::notation::{MoveDescriptor, MoveInput};
use crate::variant::Variant;

/// Piece, origin (only when ambiguous), connector, destination, promotion marker.
pub fn shogi_notation(input: &MoveInput, variant: &Variant) -> Result<String, NotationError> {
    let mv = MoveDescriptor::decode(input, variant)?;

    let Some(before) = mv.before.as_ref() else {
        debug!(uci = %input.uci, "no prior position, showing coordinate move");
        return Ok(input.uci.clone());
    };
    let Some(piece) = mv.after.piece_at(mv.dest) else {
        debug!(uci = %input.uci, "destination is empty after the move");
        return Ok(input.uci.clone());
    };

    let kind = mv.kind();
    let connector = match kind {
        MoveKind::Capture => 'x',
        MoveKind::Drop => '*',
        MoveKind::Move => '-',
    };

    let moving = mv
        .orig
        .square()
        .and_then(|orig| Some((orig, before.piece_at(orig)?)));
    let origin = match moving {
        Some((orig, moving))
            if kind != MoveKind::Drop
                && is_ambiguous(&mv.after, mv.dest, moving, variant.width, variant.height) =>
        {
            orig.to_string()
        }
        _ => String::new(),
    };

    let promotion = promotion_marker(before, &mv.after, mv.orig, mv.dest, variant.promotion_zone());

    // A piece that just promoted is written with its unpromoted letter and a trailing `+`.
    let symbol = if promotion == PromotionMarker::Promoted {
        piece.letter.to_ascii_uppercase().to_string()
    } else {
        piece.symbol()
    };

    Ok(format!(
        "{symbol}{origin}{connector}{}{}",
        mv.dest,
        promotion.as_str()
    ))
}
