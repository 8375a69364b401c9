use std::fmt;

/// A piece as it appears in a board encoding: one letter (uppercase for the
/// first player) plus the promotion marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub letter: char,
    pub promoted: bool,
}

impl Piece {
    #[inline]
    pub const fn new(letter: char) -> Self {
        Self {
            letter,
            promoted: false,
        }
    }

    #[inline]
    pub const fn promoted(letter: char) -> Self {
        Self {
            letter,
            promoted: true,
        }
    }

    /// Uppercase letters belong to the first player.
    #[inline]
    pub fn is_first_player(self) -> bool {
        self.letter.is_ascii_uppercase()
    }

    /// Lowercase role letter, ignoring side and promotion.
    #[inline]
    pub fn role(self) -> char {
        self.letter.to_ascii_lowercase()
    }

    /// Same role and promotion state, for the given side.
    pub fn for_side(self, first_player: bool) -> Piece {
        let letter = if first_player {
            self.letter.to_ascii_uppercase()
        } else {
            self.letter.to_ascii_lowercase()
        };
        Piece { letter, ..self }
    }

    /// Display symbol: uppercase letter, with a `+` prefix when promoted.
    pub fn symbol(self) -> String {
        let letter = self.letter.to_ascii_uppercase();
        if self.promoted {
            format!("+{letter}")
        } else {
            letter.to_string()
        }
    }
}

/// Encoding form, e.g. `+s`.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.promoted {
            write!(f, "+")?;
        }
        write!(f, "{}", self.letter)
    }
}
