use super::ast::DiceExpression;
use super::lexer::{tokenize, Token, TokenKind};
use crate::common::{Int, UInt};
use crate::config::EngineConfig;
use crate::error::ErrorKind;
use std::ops::Range;

/// The raw captures of one notation match, before any validation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Captures<'a> {
    pub quantity: Option<&'a str>,
    pub faces: Option<&'a str>,
    pub sign: Option<TokenKind>,
    pub modifier: Option<&'a str>,
    pub threshold: Option<&'a str>,
    pub individual: bool,
    pub span: Range<usize>,
}

pub(crate) struct Matcher<'a> {
    src: &'a str,
    tokens: Vec<Token>,
}

impl<'a> Matcher<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            tokens: tokenize(src),
        }
    }

    /// Finds the leftmost match of the notation anywhere in the source.
    pub fn find(&self) -> Option<Captures<'a>> {
        (0..self.tokens.len()).find_map(|start| self.match_at(start))
    }

    fn kind(&self, pos: usize) -> Option<TokenKind> {
        self.tokens.get(pos).map(|t| t.kind)
    }

    fn slice(&self, pos: usize) -> &'a str {
        &self.src[self.tokens[pos].span.clone()]
    }

    fn eat(&self, pos: &mut usize, kind: TokenKind) -> bool {
        if self.kind(*pos) == Some(kind) {
            *pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_digits(&self, pos: &mut usize) -> Option<&'a str> {
        let at = *pos;
        self.eat(pos, TokenKind::Digits).then(|| self.slice(at))
    }

    fn match_at(&self, start: usize) -> Option<Captures<'a>> {
        let mut pos = start;
        let quantity = self.eat_digits(&mut pos);
        if !self.eat(&mut pos, TokenKind::Dice) {
            return None;
        }
        let faces = self.eat_digits(&mut pos);

        // A sign or 't' only belongs to the match when digits follow it.
        let (sign, modifier) = match self.kind(pos) {
            Some(sign) if TokenKind::SIGNS.contains(&sign) => {
                let mut after = pos + 1;
                match self.eat_digits(&mut after) {
                    Some(digits) => {
                        pos = after;
                        (Some(sign), Some(digits))
                    }
                    None => (None, None),
                }
            }
            _ => (None, None),
        };

        let mut threshold = None;
        if self.kind(pos) == Some(TokenKind::Threshold) {
            let mut after = pos + 1;
            if let Some(digits) = self.eat_digits(&mut after) {
                pos = after;
                threshold = Some(digits);
            }
        }

        let individual = self.eat(&mut pos, TokenKind::Individual);

        let span = self.tokens[start].span.start..self.tokens[pos - 1].span.end;
        Some(Captures {
            quantity,
            faces,
            sign,
            modifier,
            threshold,
            individual,
            span,
        })
    }
}

// The lexer only produces ASCII digit runs, so overflow is the only way to fail.
fn digits(s: &str) -> UInt {
    s.parse().unwrap_or(UInt::MAX)
}

/// Modifier and threshold magnitudes are capped at `Int::MAX`; only zero is invalid.
fn magnitude(s: &str) -> (Int, bool) {
    let value = digits(s);
    (Int::try_from(value).unwrap_or(Int::MAX), value > 0)
}

pub(crate) fn validate(captures: &Captures<'_>, src: &str, config: &EngineConfig) -> DiceExpression {
    let mut errors = Vec::new();

    let quantity = match captures.quantity.map(digits) {
        None => 1,
        Some(q) => {
            if q == 0 {
                errors.push(ErrorKind::InvalidQuantity);
            } else if q > config.max_dice {
                errors.push(ErrorKind::ExcessiveQuantity);
            }
            q
        }
    };

    let faces = captures.faces.map(digits);
    match faces {
        None => errors.push(ErrorKind::MissingFaces),
        Some(f) if f <= 1 => errors.push(ErrorKind::InvalidFaces),
        Some(f) if f > config.max_faces() => errors.push(ErrorKind::ExcessiveFaces),
        Some(_) => {}
    }

    let modifier = captures.modifier.map(|s| {
        let (value, valid) = magnitude(s);
        if !valid {
            errors.push(ErrorKind::InvalidModifier);
        }
        if captures.sign == Some(TokenKind::Minus) {
            -value
        } else {
            value
        }
    });

    let threshold = captures.threshold.map(|s| {
        let (value, valid) = magnitude(s);
        if !valid {
            errors.push(ErrorKind::InvalidThreshold);
        }
        value
    });

    DiceExpression {
        quantity: Some(quantity),
        faces,
        modifier,
        threshold,
        individual: captures.individual,
        crits: None,
        raw_input: src[captures.span.clone()].to_string(),
        errors,
    }
}
