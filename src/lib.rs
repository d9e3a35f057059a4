//! Deterministic rendering of inline dice notation such as `2d6+1t4i`.
//!
//! Every document gets its own [`RollSession`], seeded from the document's identity,
//! so re-rendering the same document always produces the same rolls.

mod common;
pub mod config;
mod error;
pub mod parse;
pub mod roll;
pub mod seed;

pub use common::{Face, Int, UInt};
pub use config::{EngineConfig, ExtractionWidth};
pub use error::{ConfigError, ErrorKind};
pub use parse::{CritSet, DiceExpression};
pub use roll::{DiceRecord, Placeholder, RollResult, RollSession};
pub use seed::{DocumentIdentity, Seed};

/// Renders every placeholder of one document, in document order.
///
/// Without an identity nothing is rolled; placeholders are only validated.
pub fn render_document(
    identity: Option<&DocumentIdentity>,
    placeholders: &[Placeholder<'_>],
    config: EngineConfig,
) -> Vec<DiceRecord> {
    let mut session = match identity {
        Some(identity) => RollSession::for_document(identity, config),
        None => RollSession::unseeded(config),
    };
    session.process_all(placeholders)
}
