mod ast;
mod crits;
mod lexer;
mod parser;

pub use ast::DiceExpression;
pub use crits::{CritSet, ParseCritsError};

use crate::config::EngineConfig;
use crate::error::ErrorKind;

/// Parses and validates one placeholder's text and its optional crit list.
///
/// Never fails: every problem is recorded in [`DiceExpression::errors`], in the order
/// quantity, faces, modifier, threshold, crits.
///
/// # Examples
/// ```
/// # use dice_engine::{parse::parse, EngineConfig};
///
/// let expr = parse("2d6-3", Some("1,6"), &EngineConfig::default());
/// assert!(expr.is_valid());
/// assert_eq!(expr.modifier, Some(-3));
/// assert!(expr.crits.unwrap().contains(6));
/// ```
pub fn parse(text: &str, crit: Option<&str>, config: &EngineConfig) -> DiceExpression {
    let mut expr = match parser::Matcher::new(text).find() {
        Some(captures) => parser::validate(&captures, text, config),
        None => DiceExpression::unmatched(text),
    };
    if let Some(crit) = crit.filter(|c| !c.is_empty()) {
        match crit.parse::<CritSet>() {
            Ok(crits) => expr.crits = Some(crits),
            Err(_) => expr.errors.push(ErrorKind::InvalidCrits),
        }
    }
    expr
}
