//! Squares in the engine's numeric frame and the coordinate-move normalizer.
//!
//! A square is `(file, rank)`, both 1-based. File 1 is the rightmost file as seen
//! by the first player and rank 1 is the first row of the board encoding (the
//! top of the board). Coordinate moves arrive in the universal `e2e4` style,
//! where file `a` is the first player's leftmost file and rank 1 is the bottom.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::NotationError;

/// A file letter (or piece letter, for drops) followed by a rank digit, an
/// optional trailing `0` for ten-rank boards, or the `@` drop marker.
static COORD_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z][1-9@]0?").expect("coordinate token regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub file: u32,
    pub rank: u32,
}

impl Square {
    #[inline]
    pub const fn new(file: u32, rank: u32) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub fn in_bounds(self, files: u32, ranks: u32) -> bool {
        (1..=files).contains(&self.file) && (1..=ranks).contains(&self.rank)
    }

    /// The square `(df, dr)` away from this one, if it is still on the board.
    pub fn offset(self, df: i32, dr: i32, files: u32, ranks: u32) -> Option<Square> {
        let file = self.file as i64 + df as i64;
        let rank = self.rank as i64 + dr as i64;
        if file < 1 || rank < 1 || file > files as i64 || rank > ranks as i64 {
            return None;
        }
        Some(Square::new(file as u32, rank as u32))
    }

    /// Rank as a letter, `a` for rank 1.
    pub fn rank_letter(self) -> char {
        char::from_u32('a' as u32 + self.rank - 1).unwrap_or('?')
    }
}

/// Shogi-style rendering: file number then rank letter, e.g. `5e`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank_letter())
    }
}

/// Where a moving piece came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Board(Square),
    /// Dropped from the hand; carries the piece letter of the `X@` token.
    Drop(char),
}

impl Origin {
    pub fn square(self) -> Option<Square> {
        match self {
            Origin::Board(sq) => Some(sq),
            Origin::Drop(_) => None,
        }
    }

    pub fn is_drop(self) -> bool {
        matches!(self, Origin::Drop(_))
    }
}

/// All coordinate tokens of a coordinate move, in order.
pub fn coordinate_tokens(uci: &str) -> Vec<&str> {
    COORD_TOKEN_RE.find_iter(uci).map(|m| m.as_str()).collect()
}

/// Map one coordinate token (`e2`, `a10`) into the engine frame.
/// Returns `None` for drop tokens, uppercase file letters and squares off a
/// `files` x `ranks` board.
pub fn parse_uci_square(token: &str, files: u32, ranks: u32) -> Option<Square> {
    if token.len() > 3 || !token.is_ascii() {
        return None;
    }
    let letter = *token.as_bytes().first()?;
    if !letter.is_ascii_lowercase() {
        return None;
    }
    let rank: i64 = token.get(1..)?.parse().ok()?;

    let file = files as i64 - (letter as i64 - b'a' as i64).abs();
    let rank = ranks as i64 + 1 - rank;
    if file < 1 || file > files as i64 || rank < 1 || rank > ranks as i64 {
        return None;
    }
    Some(Square::new(file as u32, rank as u32))
}

/// Extract origin and destination from a coordinate move.
pub fn normalize(uci: &str, files: u32, ranks: u32) -> Result<(Origin, Square), NotationError> {
    let tokens = coordinate_tokens(uci);
    let (orig, dest) = match tokens.as_slice() {
        [orig, dest, ..] => (*orig, *dest),
        _ => {
            return Err(NotationError::MalformedMove(format!(
                "expected two coordinate tokens in '{uci}'"
            )))
        }
    };

    let origin = match orig.strip_suffix('@') {
        Some(letter) => Origin::Drop(letter.chars().next().unwrap_or('?')),
        None => Origin::Board(parse_uci_square(orig, files, ranks).ok_or_else(|| {
            NotationError::MalformedMove(format!("origin '{orig}' is off the board in '{uci}'"))
        })?),
    };
    let dest = parse_uci_square(dest, files, ranks).ok_or_else(|| {
        NotationError::MalformedMove(format!("destination '{dest}' is off the board in '{uci}'"))
    })?;

    Ok((origin, dest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uci_square_shogi_frame() {
        // a is the leftmost file for the first player, i.e. file 9
        assert_eq!(parse_uci_square("a1", 9, 9), Some(Square::new(9, 9)));
        assert_eq!(parse_uci_square("i9", 9, 9), Some(Square::new(1, 1)));
        assert_eq!(parse_uci_square("e5", 9, 9), Some(Square::new(5, 5)));
    }

    #[test]
    fn test_parse_uci_square_ten_ranks() {
        assert_eq!(parse_uci_square("a10", 9, 10), Some(Square::new(9, 1)));
        assert_eq!(parse_uci_square("i1", 9, 10), Some(Square::new(1, 10)));
    }

    #[test]
    fn test_parse_uci_square_off_board() {
        assert_eq!(parse_uci_square("j1", 9, 9), None);
        assert_eq!(parse_uci_square("a10", 9, 9), None);
        assert_eq!(parse_uci_square("P@", 9, 9), None);
        // `Z` is as far from `a` as `h`, but only lowercase letters are files.
        assert_eq!(parse_uci_square("Z3", 8, 8), None);
    }

    #[test]
    fn test_normalize_board_move() {
        let (orig, dest) = normalize("e2e4", 8, 8).unwrap();
        assert_eq!(orig, Origin::Board(Square::new(4, 7)));
        assert_eq!(dest, Square::new(4, 5));
    }

    #[test]
    fn test_normalize_drop() {
        let (orig, dest) = normalize("P@e5", 9, 9).unwrap();
        assert_eq!(orig, Origin::Drop('P'));
        assert!(orig.is_drop());
        assert_eq!(orig.square(), None);
        assert_eq!(dest, Square::new(5, 5));
    }

    #[test]
    fn test_normalize_ignores_promotion_suffix() {
        let (orig, dest) = normalize("h2h7+", 9, 9).unwrap();
        assert_eq!(orig, Origin::Board(Square::new(2, 8)));
        assert_eq!(dest, Square::new(2, 3));
    }

    #[test]
    fn test_normalize_malformed() {
        assert!(matches!(normalize("e2", 9, 9), Err(NotationError::MalformedMove(_))));
        assert!(matches!(normalize("", 9, 9), Err(NotationError::MalformedMove(_))));
        assert!(matches!(normalize("z9a1", 9, 9), Err(NotationError::MalformedMove(_))));
        assert!(matches!(normalize("a1a9", 9, 8), Err(NotationError::MalformedMove(_))));
    }

    #[test]
    fn test_square_display() {
        assert_eq!(Square::new(5, 5).to_string(), "5e");
        assert_eq!(Square::new(3, 3).to_string(), "3c");
    }

    #[test]
    fn test_offset_bounds() {
        let sq = Square::new(1, 1);
        assert_eq!(sq.offset(-1, 0, 9, 9), None);
        assert_eq!(sq.offset(1, 2, 9, 9), Some(Square::new(2, 3)));
        assert_eq!(Square::new(9, 9).offset(0, 1, 9, 9), None);
    }
}
