//! Destination-only notation for disc-placement games, ranks counted from the top.

use crate::error::NotationError;
use crate::notation::MoveInput;
use crate::square::{coordinate_tokens, parse_uci_square};
use crate::variant::Variant;

pub const PASS: &str = "PASS";

/// `PASS` for moves without a placement, otherwise e.g. `d6` for `P@d3` on 8x8.
pub fn dest_pos_only_notation(input: &MoveInput, variant: &Variant) -> Result<String, NotationError> {
    if !input.uci.contains('@') {
        return Ok(PASS.to_string());
    }

    let tokens = coordinate_tokens(&input.uci);
    let dest = tokens.get(1).ok_or_else(|| {
        NotationError::MalformedMove(format!("no destination in '{}'", input.uci))
    })?;
    // Engine ranks count from the top, which is the rank this notation shows.
    let square = parse_uci_square(dest, variant.width, variant.height).ok_or_else(|| {
        NotationError::MalformedMove(format!("destination '{dest}' is off the board"))
    })?;

    Ok(format!("{}{}", &dest[..1], square.rank))
}
