use super::crits::CritSet;
use crate::common::{Face, Int, UInt};
use crate::error::ErrorKind;
use serde::Serialize;
use std::fmt;

/// A placeholder's notation after matching and validation.
///
/// Numeric fields hold whatever the text said, even when it failed validation, so the
/// renderer can echo it back. They are all `None` when nothing in the text matched.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceExpression {
    pub quantity: Option<UInt>,
    pub faces: Option<UInt>,
    /// Signed modifier; `None` when no `+K`/`-K` token was present.
    #[serde(rename = "modValue")]
    pub modifier: Option<Int>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<Int>,
    pub individual: bool,
    pub crits: Option<CritSet>,
    pub raw_input: String,
    /// Discovery order. Empty means the expression may be rolled.
    pub errors: Vec<ErrorKind>,
}

impl DiceExpression {
    pub(crate) fn unmatched(raw_input: &str) -> Self {
        Self {
            quantity: None,
            faces: None,
            modifier: None,
            threshold: None,
            individual: false,
            crits: None,
            raw_input: raw_input.to_string(),
            errors: vec![ErrorKind::InvalidGeneric],
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Quantity and face count of a rollable expression.
    pub fn dice(&self) -> Option<(UInt, Face)> {
        if !self.is_valid() {
            return None;
        }
        let faces = Face::try_from(self.faces?).ok()?;
        Some((self.quantity?, faces))
    }

    pub fn is_critical(&self, value: Face) -> bool {
        self.crits
            .as_ref()
            .map_or(false, |crits| crits.contains(Int::from(value)))
    }
}

/// Canonical notation, e.g. `4d6-2t3i`. Falls back to the raw input when quantity
/// or faces is unknown.
impl fmt::Display for DiceExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (quantity, faces) = match (self.quantity, self.faces) {
            (Some(quantity), Some(faces)) => (quantity, faces),
            _ => return f.write_str(&self.raw_input),
        };
        write!(f, "{}d{}", quantity, faces)?;
        match self.modifier {
            Some(m) if m > 0 => write!(f, "+{}", m)?,
            Some(m) if m < 0 => write!(f, "{}", m)?,
            _ => {}
        }
        if let Some(t) = self.threshold {
            write!(f, "t{}", t)?;
        }
        if self.individual {
            f.write_str("i")?;
        }
        Ok(())
    }
}
