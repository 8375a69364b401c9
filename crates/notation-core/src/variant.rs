//! Variant descriptors and notation style identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::classify::PromotionZone;
use crate::error::NotationError;

const DEFAULT_PROMOTION_ZONE: u32 = 3;

/// Textual convention used to display moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotationStyle {
    /// Standard algebraic, pawn letter stripped.
    San,
    /// Raw coordinate move.
    Uci,
    /// Shogi-style piece, origin, connector, destination.
    Usi,
    /// Xiangqi file/direction notation.
    Wxf,
    /// Destination only, for disc-placement games.
    Dpo,
    /// Sowing games: pit letter plus captured stones.
    Man,
}

impl NotationStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            NotationStyle::San => "san",
            NotationStyle::Uci => "uci",
            NotationStyle::Usi => "usi",
            NotationStyle::Wxf => "wxf",
            NotationStyle::Dpo => "dpo",
            NotationStyle::Man => "man",
        }
    }
}

impl FromStr for NotationStyle {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "san" => Ok(NotationStyle::San),
            "uci" => Ok(NotationStyle::Uci),
            "usi" => Ok(NotationStyle::Usi),
            "wxf" => Ok(NotationStyle::Wxf),
            "dpo" => Ok(NotationStyle::Dpo),
            "man" => Ok(NotationStyle::Man),
            _ => Err(NotationError::UnsupportedNotationStyle(s.to_string())),
        }
    }
}

impl fmt::Display for NotationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_promotion_zone() -> u32 {
    DEFAULT_PROMOTION_ZONE
}

/// Board geometry plus the notation style of a variant. Supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub width: u32,
    pub height: u32,
    pub notation: NotationStyle,
    /// Depth of the promotion zone in ranks (shogi family only).
    #[serde(default = "default_promotion_zone")]
    pub promotion_zone: u32,
}

impl Variant {
    pub const fn new(width: u32, height: u32, notation: NotationStyle) -> Self {
        Self {
            width,
            height,
            notation,
            promotion_zone: DEFAULT_PROMOTION_ZONE,
        }
    }

    pub const fn with_promotion_zone(mut self, depth: u32) -> Self {
        self.promotion_zone = depth;
        self
    }

    pub fn chess() -> Self {
        Self::new(8, 8, NotationStyle::San)
    }

    pub fn shogi() -> Self {
        Self::new(9, 9, NotationStyle::Usi)
    }

    pub fn minishogi() -> Self {
        Self::new(5, 5, NotationStyle::Usi).with_promotion_zone(1)
    }

    pub fn xiangqi() -> Self {
        Self::new(9, 10, NotationStyle::Wxf)
    }

    pub fn oware() -> Self {
        Self::new(6, 2, NotationStyle::Man)
    }

    pub fn flipello() -> Self {
        Self::new(8, 8, NotationStyle::Dpo)
    }

    /// Look up a named preset.
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "chess" => Some(Self::chess()),
            "shogi" => Some(Self::shogi()),
            "minishogi" => Some(Self::minishogi()),
            "xiangqi" => Some(Self::xiangqi()),
            "oware" => Some(Self::oware()),
            "flipello" => Some(Self::flipello()),
            _ => None,
        }
    }

    pub fn promotion_zone(&self) -> PromotionZone {
        PromotionZone {
            depth: self.promotion_zone,
            ranks: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_from_str() {
        assert_eq!("usi".parse::<NotationStyle>().unwrap(), NotationStyle::Usi);
        assert_eq!(" WXF ".parse::<NotationStyle>().unwrap(), NotationStyle::Wxf);
        assert_eq!(
            "kif".parse::<NotationStyle>(),
            Err(NotationError::UnsupportedNotationStyle("kif".to_string()))
        );
    }

    #[test]
    fn test_style_round_trips_through_display() {
        for style in [
            NotationStyle::San,
            NotationStyle::Uci,
            NotationStyle::Usi,
            NotationStyle::Wxf,
            NotationStyle::Dpo,
            NotationStyle::Man,
        ] {
            assert_eq!(style.to_string().parse::<NotationStyle>().unwrap(), style);
        }
    }

    #[test]
    fn test_variant_json_defaults_zone() {
        let v: Variant =
            serde_json::from_str(r#"{"width":9,"height":9,"notation":"usi"}"#).unwrap();
        assert_eq!(v, Variant::shogi());
        assert_eq!(v.promotion_zone().depth, 3);
    }

    #[test]
    fn test_unknown_style_in_json_is_rejected() {
        let v = serde_json::from_str::<Variant>(r#"{"width":9,"height":9,"notation":"kif"}"#);
        assert!(v.is_err());
    }

    #[test]
    fn test_presets() {
        assert_eq!(Variant::preset("Xiangqi"), Some(Variant::xiangqi()));
        assert_eq!(Variant::preset("minishogi").map(|v| v.promotion_zone), Some(1));
        assert_eq!(Variant::preset("go"), None);
    }
}
