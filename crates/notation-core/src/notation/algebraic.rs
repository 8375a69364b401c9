//! Chess-style notation: algebraic passthrough and raw coordinates.

use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Position as _};
use tracing::debug;

use crate::error::NotationError;
use crate::notation::MoveInput;
use crate::variant::Variant;

/// Algebraic notation without the pawn letter. Without an algebraic string,
/// 8x8 moves are converted from the prior position; others show the coordinate move.
pub fn san_notation(input: &MoveInput, variant: &Variant) -> Result<String, NotationError> {
    if let Some(san) = input.san.as_deref().filter(|s| !s.is_empty()) {
        return Ok(san.strip_prefix('P').unwrap_or(san).to_string());
    }
    Ok(derive_san(input, variant).unwrap_or_else(|| input.uci.clone()))
}

pub fn uci_notation(input: &MoveInput, _variant: &Variant) -> Result<String, NotationError> {
    Ok(input.uci.clone())
}

/// SAN (with check and mate suffixes) from the prior position and coordinate move.
fn derive_san(input: &MoveInput, variant: &Variant) -> Option<String> {
    if variant.width != 8 || variant.height != 8 {
        return None;
    }
    let prev_fen = input.prev_fen.as_deref()?;

    let fen: Fen = prev_fen.parse().ok()?;
    let pos = match fen.into_position::<Chess>(CastlingMode::Standard) {
        Ok(pos) => pos,
        Err(_) => {
            debug!(fen = %prev_fen, "prior position is not a standard chess position");
            return None;
        }
    };
    let uci_move: UciMove = input.uci.parse().ok()?;
    let legal_move = match uci_move.to_move(&pos) {
        Ok(m) => m,
        Err(_) => {
            debug!(uci = %input.uci, "coordinate move is not legal in the prior position");
            return None;
        }
    };

    let san = San::from_move(&pos, legal_move.clone());
    let mut after = pos;
    after.play_unchecked(legal_move);
    let suffix = if after.is_checkmate() {
        "#"
    } else if after.is_check() {
        "+"
    } else {
        ""
    };

    Some(format!("{san}{suffix}"))
}
