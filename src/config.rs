//! Engine options: the dice cap and the PRNG extraction width.

use crate::common::UInt;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DICE: UInt = 101;

/// Output width used for bounded draws. The width also caps the number of faces,
/// since a range wider than the extracted bits cannot be drawn uniformly.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionWidth {
    #[default]
    Bits26,
    Bits31,
}

impl ExtractionWidth {
    pub const fn bits(self) -> u32 {
        match self {
            Self::Bits26 => 26,
            Self::Bits31 => 31,
        }
    }

    /// Largest `n` accepted by a bounded draw, and therefore the largest die.
    pub const fn max_faces(self) -> UInt {
        1 << self.bits()
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on the quantity of dice in one expression.
    pub max_dice: UInt,
    pub width: ExtractionWidth,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_dice: DEFAULT_MAX_DICE,
            width: ExtractionWidth::default(),
        }
    }
}

impl EngineConfig {
    pub fn max_faces(&self) -> UInt {
        self.width.max_faces()
    }

    /// Loads and validates a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_dice == 0 {
            return Err(ConfigError::ZeroMaxDice);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_dice, 101);
        assert_eq!(config.width, ExtractionWidth::Bits26);
        assert_eq!(config.max_faces(), 67_108_864);
        assert_eq!(ExtractionWidth::Bits31.max_faces(), 2_147_483_648);
    }

    #[test]
    fn test_from_toml() {
        let config = EngineConfig::from_toml("max_dice = 20\nwidth = \"bits31\"\n").unwrap();
        assert_eq!(config.max_dice, 20);
        assert_eq!(config.width, ExtractionWidth::Bits31);

        let config = EngineConfig::from_toml("").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_from_toml_errors() {
        assert!(matches!(
            EngineConfig::from_toml("max_dice = 0"),
            Err(ConfigError::ZeroMaxDice)
        ));
        assert!(matches!(
            EngineConfig::from_toml("width = \"bits64\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig {
            max_dice: 7,
            width: ExtractionWidth::Bits31,
        };
        let s = config.to_toml().unwrap();
        assert_eq!(EngineConfig::from_toml(&s).unwrap(), config);
    }
}
