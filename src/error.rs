use serde::{Serialize, Serializer};

/// A validation outcome attached to a single placeholder.
///
/// These are values carried on [`DiceExpression`](crate::parse::DiceExpression) and
/// [`DiceRecord`](crate::roll::DiceRecord), never returned as `Err`. The renderer
/// looks messages up by [`ErrorKind::message_key`].
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    #[error("not a dice expression; expected something like 2d6+1")]
    InvalidGeneric,
    #[error("number of faces is missing")]
    MissingFaces,
    #[error("dice must have more than one face")]
    InvalidFaces,
    #[error("dice have too many faces")]
    ExcessiveFaces,
    #[error("number of dice must be positive")]
    InvalidQuantity,
    #[error("too many dice")]
    ExcessiveQuantity,
    #[error("modifier must be a positive number after + or -")]
    InvalidModifier,
    #[error("threshold must be positive")]
    InvalidThreshold,
    #[error("crit values must be a comma-separated list of integers")]
    InvalidCrits,
    #[error("not rolled because an earlier roll in this document has an error")]
    HaltAfterError,
}

impl ErrorKind {
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::InvalidGeneric => "dice.invalid.generic",
            Self::MissingFaces => "dice.missing.faces",
            Self::InvalidFaces => "dice.invalid.faces",
            Self::ExcessiveFaces => "dice.excessive.faces",
            Self::InvalidQuantity => "dice.invalid.quantity",
            Self::ExcessiveQuantity => "dice.excessive.quantity",
            Self::InvalidModifier => "dice.invalid.modifier",
            Self::InvalidThreshold => "dice.invalid.threshold",
            Self::InvalidCrits => "dice.invalid.crits",
            Self::HaltAfterError => "dice.invalid.halt_after_error",
        }
    }
}

impl Serialize for ErrorKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message_key())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("cannot write configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("max_dice must be at least 1")]
    ZeroMaxDice,
}
