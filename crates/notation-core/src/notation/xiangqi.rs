//! Xiangqi notation in the WXF style: piece, file, direction, magnitude.
//!
//! Files are counted from the mover's right, so the second player's files are
//! mirrored. Only the position after the move is needed.

use tracing::debug;

use crate::error::NotationError;
use crate::notation::{MoveDescriptor, MoveInput};
use crate::piece::Piece;
use crate::position::Position;
use crate::square::Square;
use crate::variant::Variant;

pub fn xiangqi_notation(input: &MoveInput, variant: &Variant) -> Result<String, NotationError> {
    let mv = MoveDescriptor::decode(input, variant)?;
    let Some(orig) = mv.orig.square() else {
        return Err(NotationError::MalformedMove(format!(
            "drop '{}' in a game without drops",
            input.uci
        )));
    };
    let Some(piece) = mv.after.piece_at(mv.dest) else {
        debug!(uci = %input.uci, "destination is empty after the move");
        return Ok(input.uci.clone());
    };

    let first = mv.after.first_player_moved();
    let relative_file = |file: u32| if first { file } else { variant.width + 1 - file };
    let prev_file = relative_file(orig.file);
    let new_file = relative_file(mv.dest.file);
    let (prev_rank, new_rank) = (orig.rank, mv.dest.rank);

    // The first player advances toward rank 1.
    let direction = if new_rank == prev_rank {
        '='
    } else if (first && new_rank < prev_rank) || (!first && new_rank > prev_rank) {
        '+'
    } else {
        '-'
    };
    let diagonal = new_rank != prev_rank && prev_file != new_file;
    let movement = if direction == '=' || diagonal {
        new_file
    } else {
        prev_rank.abs_diff(new_rank)
    };

    let letter = wxf_letter(piece);
    if piece.role() != 'p' {
        return Ok(format!("{letter}{prev_file}{direction}{movement}"));
    }

    // Several pawns on the origin file need a front/back or ordinal marker.
    let own_pawn = Piece::new(if first { 'P' } else { 'p' });
    let ranks = pawn_ranks_in_file(
        &mv.after,
        orig.file,
        variant.height,
        own_pawn,
        prev_file != new_file,
        prev_rank,
        new_rank,
    );
    let index = ranks.iter().position(|&r| r == prev_rank).unwrap_or(0);

    Ok(match ranks.len() {
        2 => {
            let front = (index == 0) == first;
            let marker = if front { '+' } else { '-' };
            format!("{letter}{marker}{direction}{movement}")
        }
        n if n > 2 => {
            // Counted from the mover's own back rank.
            let ordinal = if first { n - index } else { index + 1 };
            format!("{ordinal}{prev_file}{direction}{movement}")
        }
        _ => format!("{letter}{prev_file}{direction}{movement}"),
    })
}

/// Horses and elephants are renamed; other pieces keep their letter.
fn wxf_letter(piece: Piece) -> char {
    match piece.role() {
        'n' => 'H',
        'b' => 'E',
        _ => piece.letter.to_ascii_uppercase(),
    }
}

/// Ranks of the mover's pawns on `file`, top to bottom, with the moving pawn
/// listed at its origin rank. A pawn that left the file is inserted at its
/// origin; one still on the file is read at its destination.
fn pawn_ranks_in_file(
    after: &Position,
    file: u32,
    height: u32,
    own_pawn: Piece,
    left_file: bool,
    orig_rank: u32,
    new_rank: u32,
) -> Vec<u32> {
    let mut ranks = Vec::new();
    for rank in 1..=height {
        if left_file && rank == orig_rank {
            ranks.push(orig_rank);
        }
        if after.piece_at(Square::new(file, rank)) == Some(own_pawn) {
            if !left_file && rank == new_rank {
                ranks.push(orig_rank);
            } else {
                ranks.push(rank);
            }
        }
    }
    ranks
}
