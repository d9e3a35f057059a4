use crate::common::{Face, Int, UInt};
use crate::parse::DiceExpression;
use serde::Serialize;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct DieOutcome {
    pub value: Face,
    /// Individual-mode pass flag; `None` without a threshold or in aggregate mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passed: Option<bool>,
    pub critical: bool,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollResult {
    pub dice: Vec<DieOutcome>,
    pub total: Int,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_count: Option<UInt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate_pass: Option<bool>,
    #[serde(skip)]
    has_modifier: bool,
    #[serde(skip)]
    individual: bool,
}

impl RollResult {
    /// Evaluates rolled faces against a valid expression.
    pub fn evaluate(expr: &DiceExpression, values: Vec<Face>) -> Self {
        debug_assert!(expr.is_valid(), "evaluating an invalid expression");
        debug_assert_eq!(Some(values.len() as UInt), expr.quantity);

        let modifier = expr.modifier.unwrap_or(0);
        let total = values
            .iter()
            .fold(modifier, |acc, &v| acc.saturating_add(Int::from(v)));

        let dice: Vec<_> = values
            .into_iter()
            .map(|value| DieOutcome {
                value,
                passed: match (expr.individual, expr.threshold) {
                    (true, Some(t)) => Some(Int::from(value).saturating_add(modifier) >= t),
                    _ => None,
                },
                critical: expr.is_critical(value),
            })
            .collect();

        let (success_count, aggregate_pass) = match (expr.individual, expr.threshold) {
            (true, Some(_)) => {
                let passes = dice.iter().filter(|d| d.passed == Some(true)).count();
                (Some(passes as UInt), None)
            }
            (false, Some(t)) => (None, Some(total >= t)),
            (_, None) => (None, None),
        };

        Self {
            dice,
            total,
            success_count,
            aggregate_pass,
            has_modifier: expr.modifier.is_some(),
            individual: expr.individual,
        }
    }

    pub fn values(&self) -> impl Iterator<Item = Face> + '_ {
        self.dice.iter().map(|d| d.value)
    }

    /// A lone die without a modifier is its own total.
    pub fn shows_total(&self) -> bool {
        !self.individual && (self.dice.len() > 1 || self.has_modifier)
    }

    pub fn shows_success_count(&self) -> bool {
        self.success_count.is_some() && self.dice.len() > 1
    }
}
