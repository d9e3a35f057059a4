use super::eval::RollResult;
use crate::common::Face;
use crate::parse::DiceExpression;
use serde::Serialize;
use std::fmt;

/// Everything a renderer needs to draw one placeholder.
///
/// The expression's fields are flattened into the serialized record next to
/// `rawResults`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRecord {
    #[serde(flatten)]
    pub expression: DiceExpression,
    /// `None` until rolled, and always `None` when the expression has errors.
    pub raw_results: Option<Vec<Face>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll: Option<RollResult>,
}

impl DiceRecord {
    pub(crate) fn new(expression: DiceExpression, roll: Option<RollResult>) -> Self {
        Self {
            expression,
            raw_results: roll.as_ref().map(|r| r.values().collect()),
            roll,
        }
    }

    pub fn is_rolled(&self) -> bool {
        self.raw_results.is_some()
    }

    pub fn has_errors(&self) -> bool {
        !self.expression.is_valid()
    }
}

impl fmt::Display for DiceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.expression, f)
    }
}
