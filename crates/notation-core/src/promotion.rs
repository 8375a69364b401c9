//! Promotion eligibility and the choices offered when a piece promotes.
//!
//! The side of the moving piece is read from its letter case; the first player
//! advances toward rank 1.

use crate::piece::Piece;
use crate::square::{Origin, Square};
use crate::variant::{NotationStyle, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionRule {
    /// Pawns promote on the last rank to queen, knight, rook or bishop.
    Standard,
    /// As standard, with the king as an extra choice.
    Antichess,
    /// Anything but kings and golds may promote inside the zone.
    Shogi,
    /// Pawns become promoted pawns once across the river.
    Xiangqi,
}

impl PromotionRule {
    pub fn for_variant(variant: &Variant) -> Self {
        match variant.notation {
            NotationStyle::Usi => PromotionRule::Shogi,
            NotationStyle::Wxf => PromotionRule::Xiangqi,
            _ => PromotionRule::Standard,
        }
    }
}

const STANDARD_CHOICES: [char; 4] = ['q', 'n', 'r', 'b'];

/// Whether moving `piece` from `orig` to `dest` asks for a promotion decision.
pub fn is_promotion_candidate(
    rule: PromotionRule,
    piece: Piece,
    orig: Origin,
    dest: Square,
    variant: &Variant,
) -> bool {
    let first = piece.is_first_player();
    match rule {
        PromotionRule::Shogi => {
            !orig.is_drop()
                && !piece.promoted
                && !matches!(piece.role(), 'k' | 'g')
                && variant.promotion_zone().contains(dest, first)
        }
        PromotionRule::Xiangqi => {
            let river = variant.height / 2;
            piece.role() == 'p'
                && !piece.promoted
                && dest.rank == if first { river } else { river + 1 }
        }
        PromotionRule::Standard | PromotionRule::Antichess => {
            piece.role() == 'p' && dest.rank == if first { 1 } else { variant.height }
        }
    }
}

/// Pieces the mover may pick from, in display order.
pub fn promotion_choices(rule: PromotionRule, piece: Piece) -> Vec<Piece> {
    let first = piece.is_first_player();
    match rule {
        PromotionRule::Shogi => vec![Piece { promoted: true, ..piece }, piece],
        PromotionRule::Xiangqi => vec![Piece { promoted: true, ..piece }],
        PromotionRule::Standard => STANDARD_CHOICES
            .iter()
            .map(|&role| Piece::new(role).for_side(first))
            .collect(),
        PromotionRule::Antichess => STANDARD_CHOICES
            .iter()
            .chain(std::iter::once(&'k'))
            .map(|&role| Piece::new(role).for_side(first))
            .collect(),
    }
}

/// Promotion suffix to send with the move. A shogi piece kept unchanged sends
/// none; xiangqi pawns promote implicitly.
pub fn promotion_suffix(rule: PromotionRule, moved: Piece, chosen: Piece) -> Option<char> {
    match rule {
        PromotionRule::Shogi if chosen == moved => None,
        PromotionRule::Shogi => Some('+'),
        PromotionRule::Xiangqi => None,
        PromotionRule::Standard | PromotionRule::Antichess => Some(chosen.role()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(file: u32, rank: u32) -> Origin {
        Origin::Board(Square::new(file, rank))
    }

    #[test]
    fn test_rule_for_variant() {
        assert_eq!(PromotionRule::for_variant(&Variant::shogi()), PromotionRule::Shogi);
        assert_eq!(PromotionRule::for_variant(&Variant::xiangqi()), PromotionRule::Xiangqi);
        assert_eq!(PromotionRule::for_variant(&Variant::chess()), PromotionRule::Standard);
    }

    #[test]
    fn test_standard_last_rank_pawn() {
        let v = Variant::chess();
        let rule = PromotionRule::Standard;
        assert!(is_promotion_candidate(rule, Piece::new('P'), board(5, 2), Square::new(5, 1), &v));
        assert!(is_promotion_candidate(rule, Piece::new('p'), board(5, 7), Square::new(5, 8), &v));
        assert!(!is_promotion_candidate(rule, Piece::new('P'), board(5, 3), Square::new(5, 2), &v));
        assert!(!is_promotion_candidate(rule, Piece::new('R'), board(5, 2), Square::new(5, 1), &v));
    }

    #[test]
    fn test_shogi_zone_and_exclusions() {
        let v = Variant::shogi();
        let rule = PromotionRule::Shogi;
        assert!(is_promotion_candidate(rule, Piece::new('S'), board(4, 4), Square::new(4, 3), &v));
        assert!(is_promotion_candidate(rule, Piece::new('r'), board(2, 2), Square::new(2, 7), &v));
        assert!(!is_promotion_candidate(rule, Piece::new('S'), board(4, 5), Square::new(4, 4), &v));
        assert!(!is_promotion_candidate(rule, Piece::new('G'), board(4, 4), Square::new(4, 3), &v));
        assert!(!is_promotion_candidate(rule, Piece::new('K'), board(4, 4), Square::new(4, 3), &v));
        assert!(!is_promotion_candidate(rule, Piece::promoted('S'), board(4, 4), Square::new(4, 3), &v));
        assert!(!is_promotion_candidate(rule, Piece::new('P'), Origin::Drop('P'), Square::new(4, 3), &v));
    }

    #[test]
    fn test_minishogi_zone_is_one_rank() {
        let v = Variant::minishogi();
        let rule = PromotionRule::Shogi;
        assert!(is_promotion_candidate(rule, Piece::new('S'), board(3, 2), Square::new(3, 1), &v));
        assert!(!is_promotion_candidate(rule, Piece::new('S'), board(3, 3), Square::new(3, 2), &v));
    }

    #[test]
    fn test_xiangqi_river_crossing() {
        let v = Variant::xiangqi();
        let rule = PromotionRule::Xiangqi;
        assert!(is_promotion_candidate(rule, Piece::new('P'), board(5, 6), Square::new(5, 5), &v));
        assert!(is_promotion_candidate(rule, Piece::new('p'), board(5, 5), Square::new(5, 6), &v));
        assert!(!is_promotion_candidate(rule, Piece::new('P'), board(5, 5), Square::new(5, 4), &v));
    }

    #[test]
    fn test_choices() {
        let shogi = promotion_choices(PromotionRule::Shogi, Piece::new('s'));
        assert_eq!(shogi, vec![Piece::promoted('s'), Piece::new('s')]);

        let chess = promotion_choices(PromotionRule::Standard, Piece::new('P'));
        let letters: String = chess.iter().map(|p| p.letter).collect();
        assert_eq!(letters, "QNRB");

        let anti = promotion_choices(PromotionRule::Antichess, Piece::new('p'));
        let letters: String = anti.iter().map(|p| p.letter).collect();
        assert_eq!(letters, "qnrbk");

        assert_eq!(
            promotion_choices(PromotionRule::Xiangqi, Piece::new('P')),
            vec![Piece::promoted('P')]
        );
    }

    #[test]
    fn test_suffix() {
        let silver = Piece::new('S');
        assert_eq!(promotion_suffix(PromotionRule::Shogi, silver, silver), None);
        assert_eq!(promotion_suffix(PromotionRule::Shogi, silver, Piece::promoted('S')), Some('+'));
        assert_eq!(promotion_suffix(PromotionRule::Standard, Piece::new('P'), Piece::new('Q')), Some('q'));
        assert_eq!(promotion_suffix(PromotionRule::Xiangqi, Piece::new('P'), Piece::promoted('P')), None);
    }
}
