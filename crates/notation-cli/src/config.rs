//! Notation configuration from environment variables and command-line arguments

use std::env;

use notation_core::{NotationStyle, Variant};
use tracing::info;

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotationConfig {
    /// Board geometry and notation style for every move read
    pub variant: Variant,
}

impl NotationConfig {
    /// Load configuration from the process environment. `--variant <name>`
    /// takes precedence over everything else.
    pub fn load() -> Result<Self, ConfigError> {
        let args: Vec<String> = env::args().collect();
        Self::from_sources(parse_variant_arg(&args), |key| env::var(key).ok())
    }

    /// Resolve a configuration from an optional preset name and a variable lookup.
    pub fn from_sources<F>(variant_arg: Option<String>, var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = variant_arg.or_else(|| var("NOTATION_VARIANT")) {
            let variant =
                Variant::preset(&name).ok_or_else(|| ConfigError::UnknownVariant(name.clone()))?;
            info!(variant = %name, notation = %variant.notation, "Using variant preset");
            return Ok(Self { variant });
        }

        let style: NotationStyle = var("NOTATION_STYLE")
            .ok_or(ConfigError::Missing("NOTATION_STYLE or NOTATION_VARIANT not set"))?
            .parse()?;
        let width = parse_number(&var, "BOARD_WIDTH")?
            .ok_or(ConfigError::Missing("BOARD_WIDTH not set"))?;
        let height = parse_number(&var, "BOARD_HEIGHT")?
            .ok_or(ConfigError::Missing("BOARD_HEIGHT not set"))?;

        let mut variant = Variant::new(width, height, style);
        if let Some(depth) = parse_number(&var, "PROMOTION_ZONE")? {
            variant = variant.with_promotion_zone(depth);
        }
        info!(notation = %style, width, height, "Using custom variant");

        Ok(Self { variant })
    }
}

fn parse_number<F>(var: &F, key: &'static str) -> Result<Option<u32>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        None => Ok(None),
        Some(value) => match value.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(Some(n)),
            _ => Err(ConfigError::Invalid { key, value }),
        },
    }
}

/// Parse --variant shogi from CLI args
fn parse_variant_arg(args: &[String]) -> Option<String> {
    for i in 0..args.len() {
        if args[i] == "--variant" {
            if let Some(name) = args.get(i + 1) {
                return Some(name.clone());
            }
        }
    }
    None
}
