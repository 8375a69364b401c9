//! Sowing-game notation: the pit letter, plus the stones captured by the move.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::NotationError;
use crate::notation::MoveInput;
use crate::variant::Variant;

static PIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z][1-2]").expect("pit regex"));

/// `C`, or `C + 4` when four stones were captured.
pub fn mancala_notation(input: &MoveInput, variant: &Variant) -> Result<String, NotationError> {
    let pit = PIT_RE
        .find(&input.uci)
        .ok_or_else(|| NotationError::MalformedMove(format!("no pit in '{}'", input.uci)))?
        .as_str();
    let letter = pit_letter(pit, variant.width);

    let captured = match input.prev_fen.as_deref() {
        Some(prev_fen) => total_score(&input.fen) - total_score(prev_fen),
        None => {
            debug!(uci = %input.uci, "no prior position, capture count omitted");
            0
        }
    };

    if captured > 0 {
        Ok(format!("{letter} + {captured}"))
    } else {
        Ok(letter.to_string())
    }
}

/// Lower-row pits are uppercase file letters. Upper-row pits are lettered
/// from the far end so that pits facing each other get neighbouring letters.
fn pit_letter(pit: &str, width: u32) -> char {
    let bytes = pit.as_bytes();
    let file = bytes[0];
    if bytes[1] == b'1' {
        return file.to_ascii_uppercase() as char;
    }
    let code = file as i64 + (96 - file as i64) * 2 + width as i64 + 1;
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or('?')
}

fn total_score(encoding: &str) -> i64 {
    mancala_score(encoding, true) as i64 + mancala_score(encoding, false) as i64
}

/// Captured stones of one player, read from the single-character score field
/// after the board. `0` is zero, `A`-`Z` are 1-26 and `a` onwards continue at 27.
pub fn mancala_score(encoding: &str, first_player: bool) -> u32 {
    let field = if first_player { 1 } else { 2 };
    let Some(c) = encoding.split(' ').nth(field).and_then(|f| f.chars().next()) else {
        return 0;
    };
    match c as u32 {
        48 => 0,
        code if code > 90 => code - 70,
        code => code.saturating_sub(64),
    }
}
