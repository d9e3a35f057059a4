use super::{bounded::BoundedRng, eval::RollResult, record::DiceRecord, roller::Roller};
use crate::config::EngineConfig;
use crate::error::ErrorKind;
use crate::parse;
use crate::seed::{DocumentIdentity, Seed};

/// One dice placeholder as found in a document.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placeholder<'a> {
    pub text: &'a str,
    /// The out-of-band comma-separated crit list, if any.
    pub crit: Option<&'a str>,
}

impl<'a> Placeholder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, crit: None }
    }

    pub fn with_crit(mut self, crit: &'a str) -> Self {
        self.crit = Some(crit);
        self
    }
}

/// Per-document rolling state.
///
/// Placeholders must be processed in document order: they share one random stream.
/// Once an invalid placeholder is seen the session halts, and every later
/// placeholder is reported as [`ErrorKind::HaltAfterError`] without drawing.
pub struct RollSession<R = BoundedRng> {
    roller: Option<R>,
    config: EngineConfig,
    halted: bool,
}

impl RollSession<BoundedRng> {
    pub fn for_document(identity: &DocumentIdentity, config: EngineConfig) -> Self {
        let seed = Seed::derive(identity);
        log::debug!(
            "starting roll session for document {:?} with seed {} ({:?})",
            identity.id(),
            seed,
            config.width
        );
        Self::new(BoundedRng::new(seed, config.width), config)
    }

    /// A session with no random stream, for documents without an identity yet.
    /// Placeholders are validated but never rolled, and nothing halts.
    pub fn unseeded(config: EngineConfig) -> Self {
        Self {
            roller: None,
            config,
            halted: false,
        }
    }
}

impl<R: Roller> RollSession<R> {
    pub fn new(roller: R, config: EngineConfig) -> Self {
        Self {
            roller: Some(roller),
            config,
            halted: false,
        }
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn roller(&self) -> Option<&R> {
        self.roller.as_ref()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn process(&mut self, placeholder: &Placeholder<'_>) -> DiceRecord {
        let mut expr = parse::parse(placeholder.text, placeholder.crit, &self.config);

        let roller = match self.roller.as_mut() {
            Some(roller) => roller,
            None => {
                log::trace!("{:?}: not rolled in an unseeded session", expr.raw_input);
                return DiceRecord::new(expr, None);
            }
        };

        if self.halted {
            log::trace!("{:?}: skipped after an earlier error", expr.raw_input);
            expr.errors = vec![ErrorKind::HaltAfterError];
            return DiceRecord::new(expr, None);
        }

        let (quantity, faces) = match expr.dice() {
            Some(dice) => dice,
            None => {
                log::debug!(
                    "{:?} is invalid ({:?}); halting the session",
                    expr.raw_input,
                    expr.errors
                );
                self.halted = true;
                return DiceRecord::new(expr, None);
            }
        };

        let values = (0..quantity).map(|_| roller.roll(faces)).collect();
        let roll = RollResult::evaluate(&expr, values);
        log::trace!("{}: rolled {:?} for a total of {}", expr, roll.dice, roll.total);
        DiceRecord::new(expr, Some(roll))
    }

    /// Processes placeholders in order, returning one record each.
    pub fn process_all(&mut self, placeholders: &[Placeholder<'_>]) -> Vec<DiceRecord> {
        placeholders.iter().map(|p| self.process(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::roller::ScriptedRoller;
    use ErrorKind::*;

    fn session(faces: &[u32]) -> RollSession<ScriptedRoller> {
        RollSession::new(ScriptedRoller::faces(faces), EngineConfig::default())
    }

    fn requests(session: &RollSession<ScriptedRoller>) -> &[u32] {
        &session.roller().unwrap().requests
    }

    fn run(session: &mut RollSession<ScriptedRoller>, texts: &[&str]) -> Vec<DiceRecord> {
        let placeholders: Vec<_> = texts.iter().map(|t| Placeholder::new(t)).collect();
        session.process_all(&placeholders)
    }

    #[test]
    fn test_stream_consumption_order() {
        let mut s = session(&[3, 1, 6]);
        let records = run(&mut s, &["1d6", "2d6"]);
        assert_eq!(records[0].raw_results, Some(vec![3]));
        assert_eq!(records[1].raw_results, Some(vec![1, 6]));
        assert_eq!(requests(&s), &[6, 6, 6]);
        assert!(!s.is_halted());
    }

    #[test]
    fn test_halt_after_error() {
        let mut s = session(&[]);
        let records = run(&mut s, &["d0", "2d6", "3d4"]);
        assert_eq!(records[0].expression.errors, vec![InvalidFaces]);
        assert_eq!(records[1].expression.errors, vec![HaltAfterError]);
        assert_eq!(records[2].expression.errors, vec![HaltAfterError]);
        assert!(records.iter().all(|r| r.raw_results.is_none()));
        assert!(requests(&s).is_empty());
        assert!(s.is_halted());
    }

    #[test]
    fn test_halt_supersedes_own_errors() {
        let mut s = session(&[2]);
        let records = run(&mut s, &["d4", "x", "0d1"]);
        assert_eq!(records[0].raw_results, Some(vec![2]));
        assert_eq!(records[1].expression.errors, vec![InvalidGeneric]);
        assert_eq!(records[2].expression.errors, vec![HaltAfterError]);
        assert_eq!(requests(&s), &[4]);
    }

    #[test]
    fn test_invalid_crits_halt() {
        let mut s = session(&[]);
        let first = s.process(&Placeholder::new("d20").with_crit("20,x"));
        let second = s.process(&Placeholder::new("d20"));
        assert_eq!(first.expression.errors, vec![InvalidCrits]);
        assert_eq!(second.expression.errors, vec![HaltAfterError]);
        assert!(requests(&s).is_empty());
    }

    #[test]
    fn test_record_fields() {
        let mut s = session(&[6, 3, 6]);
        let record = s.process(&Placeholder::new("3d6+1").with_crit("6"));
        assert_eq!(record.expression.quantity, Some(3));
        assert_eq!(record.expression.faces, Some(6));
        assert_eq!(record.expression.modifier, Some(1));
        assert_eq!(record.expression.threshold, None);
        assert_eq!(record.expression.raw_input, "3d6+1");
        assert_eq!(record.to_string(), "3d6+1");
        let roll = record.roll.unwrap();
        assert_eq!(roll.total, 16);
        let crits: Vec<_> = roll.dice.iter().map(|d| d.critical).collect();
        assert_eq!(crits, vec![true, false, true]);
    }

    #[test]
    fn test_unseeded_session_never_rolls_or_halts() {
        let mut s = RollSession::unseeded(EngineConfig::default());
        let records = s.process_all(&[Placeholder::new("d0"), Placeholder::new("2d6")]);
        assert_eq!(records[0].expression.errors, vec![InvalidFaces]);
        assert!(records[1].expression.errors.is_empty());
        assert!(!records[1].is_rolled());
        assert!(!s.is_halted());
    }
}
