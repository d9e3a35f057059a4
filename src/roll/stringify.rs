use super::eval::{DieOutcome, RollResult};
use super::record::DiceRecord;
use crate::error::ErrorKind;

/// Turns finished records into text. Override pieces to change the layout.
pub trait Stringify {
    fn stringify(&mut self, record: &DiceRecord) -> String {
        if record.has_errors() {
            self.str_errors(record, &record.expression.errors)
        } else {
            match &record.roll {
                Some(roll) => self.str_roll(record, roll),
                None => format!("{} (not rolled)", record),
            }
        }
    }

    fn str_errors(&mut self, record: &DiceRecord, errors: &[ErrorKind]) -> String {
        let messages = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        format!("{}: {}", record.expression.raw_input, messages)
    }

    fn str_roll(&mut self, record: &DiceRecord, roll: &RollResult) -> String {
        let dice = roll
            .dice
            .iter()
            .map(|d| self.str_die(d))
            .collect::<Vec<_>>()
            .join(", ");
        let mut ret = format!("{} ({})", record, dice);
        if roll.shows_total() {
            ret.push_str(&format!(" = {}", roll.total));
        }
        if let Some(pass) = roll.aggregate_pass {
            ret.push_str(if pass { " pass" } else { " fail" });
        }
        if let (true, Some(n)) = (roll.shows_success_count(), roll.success_count) {
            let noun = if n == 1 { "success" } else { "successes" };
            ret.push_str(&format!(": {} {}", n, noun));
        }
        ret
    }

    fn str_die(&mut self, die: &DieOutcome) -> String {
        let mut ret = die.value.to_string();
        if die.critical {
            ret.push('!');
        }
        match die.passed {
            Some(true) => ret.push_str(" pass"),
            Some(false) => ret.push_str(" fail"),
            None => {}
        }
        ret
    }
}

#[derive(Default)]
pub struct SimpleStringifier;

impl SimpleStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for SimpleStringifier {}
