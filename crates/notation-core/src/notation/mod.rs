//! Move notation generators and the style dispatch table.
//!
//! Every generator is a plain function of one move bundle and the variant. A
//! [`Notator`] resolves the style once and is then reused for every move.

pub mod algebraic;
pub mod dest_only;
pub mod mancala;
pub mod shogi;
pub mod xiangqi;

use serde::{Deserialize, Serialize};

use crate::classify::{classify, MoveKind};
use crate::error::NotationError;
use crate::position::Position;
use crate::square::{normalize, Origin, Square};
use crate::variant::{NotationStyle, Variant};

/// One move as handed over by the move-generation side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInput {
    /// Algebraic form of the move, when the producer has one.
    #[serde(default)]
    pub san: Option<String>,
    /// Coordinate move, e.g. `e2e4` or `P@e5`.
    pub uci: String,
    /// Board encoding after the move.
    pub fen: String,
    /// Board encoding before the move.
    #[serde(default, alias = "prevFen")]
    pub prev_fen: Option<String>,
}

impl MoveInput {
    pub fn new(uci: &str, fen: &str) -> Self {
        Self {
            san: None,
            uci: uci.to_string(),
            fen: fen.to_string(),
            prev_fen: None,
        }
    }

    pub fn with_prev_fen(mut self, prev_fen: &str) -> Self {
        self.prev_fen = Some(prev_fen.to_string());
        self
    }

    pub fn with_san(mut self, san: &str) -> Self {
        self.san = Some(san.to_string());
        self
    }
}

/// A move decoded into the engine frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveDescriptor {
    pub orig: Origin,
    pub dest: Square,
    pub uci: String,
    pub before: Option<Position>,
    pub after: Position,
}

impl MoveDescriptor {
    pub fn decode(input: &MoveInput, variant: &Variant) -> Result<Self, NotationError> {
        let (orig, dest) = normalize(&input.uci, variant.width, variant.height)?;
        let after = Position::decode(&input.fen, variant.height, variant.width);
        let before = input
            .prev_fen
            .as_deref()
            .map(|fen| Position::decode(fen, variant.height, variant.width));

        Ok(Self {
            orig,
            dest,
            uci: input.uci.clone(),
            before,
            after,
        })
    }

    /// Move kind from the board diff, or from the origin when there is no prior position.
    pub fn kind(&self) -> MoveKind {
        match &self.before {
            Some(before) => classify(before, &self.after),
            None if self.orig.is_drop() => MoveKind::Drop,
            None => MoveKind::Move,
        }
    }
}

pub type NotationFn = fn(&MoveInput, &Variant) -> Result<String, NotationError>;

/// The generator for a notation style.
pub fn notation_fn(style: NotationStyle) -> NotationFn {
    match style {
        NotationStyle::San => algebraic::san_notation,
        NotationStyle::Uci => algebraic::uci_notation,
        NotationStyle::Usi => shogi::shogi_notation,
        NotationStyle::Wxf => xiangqi::xiangqi_notation,
        NotationStyle::Dpo => dest_only::dest_pos_only_notation,
        NotationStyle::Man => mancala::mancala_notation,
    }
}

/// A variant bound to its notation generator.
#[derive(Debug, Clone, Copy)]
pub struct Notator {
    variant: Variant,
    render: NotationFn,
}

impl Notator {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            render: notation_fn(variant.notation),
        }
    }

    /// Resolve a style identifier such as `"usi"`; unknown identifiers fail here.
    pub fn from_config(style: &str, width: u32, height: u32) -> Result<Self, NotationError> {
        let style: NotationStyle = style.parse()?;
        Ok(Self::new(Variant::new(width, height, style)))
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub fn notate(&self, input: &MoveInput) -> Result<String, NotationError> {
        (self.render)(input, &self.variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_input_from_json() {
        let input: MoveInput = serde_json::from_str(
            r#"{"san":"Pe4","uci":"e2e4","fen":"8/8/8/8/4P3/8/8/8 b","prevFen":"8/8/8/8/8/8/4P3/8 w"}"#,
        )
        .unwrap();
        assert_eq!(input.san.as_deref(), Some("Pe4"));
        assert_eq!(input.prev_fen.as_deref(), Some("8/8/8/8/8/8/4P3/8 w"));

        let bare: MoveInput = serde_json::from_str(r#"{"uci":"e2e4","fen":"8/8 w"}"#).unwrap();
        assert_eq!(bare.san, None);
        assert_eq!(bare.prev_fen, None);
    }

    #[test]
    fn test_descriptor_kind_without_prior_position() {
        let variant = Variant::shogi();
        let drop = MoveDescriptor::decode(&MoveInput::new("P@e5", "9/9/9/9/4P4/9/9/9/9 b"), &variant)
            .unwrap();
        assert_eq!(drop.kind(), MoveKind::Drop);

        let step = MoveDescriptor::decode(&MoveInput::new("e4e5", "9/9/9/9/4P4/9/9/9/9 b"), &variant)
            .unwrap();
        assert_eq!(step.kind(), MoveKind::Move);
    }

    #[test]
    fn test_from_config_rejects_unknown_style() {
        assert!(Notator::from_config("usi", 9, 9).is_ok());
        assert_eq!(
            Notator::from_config("pdn", 10, 10).unwrap_err(),
            NotationError::UnsupportedNotationStyle("pdn".to_string())
        );
    }

    #[test]
    fn test_malformed_move_reaches_caller() {
        let notator = Notator::new(Variant::shogi());
        let input = MoveInput::new("z1", "9/9/9/9/9/9/9/9/9 b").with_prev_fen("9/9/9/9/9/9/9/9/9 w");
        assert!(matches!(notator.notate(&input), Err(NotationError::MalformedMove(_))));
    }

    #[test]
    fn test_dispatch_uses_variant_style() {
        let uci = Notator::new(Variant::new(8, 8, NotationStyle::Uci));
        assert_eq!(uci.notate(&MoveInput::new("e2e4", "")).unwrap(), "e2e4");
        assert_eq!(uci.variant().notation, NotationStyle::Uci);
    }
}
