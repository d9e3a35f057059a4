use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum TokenKind {
    #[regex(r"[0-9]+")]
    Digits,

    #[token("d")]
    Dice,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,

    #[token("t")]
    Threshold,
    #[token("i")]
    Individual,

    // Whitespace is not skipped: the notation never spans it.
    #[error]
    Error,
}

impl TokenKind {
    pub const SIGNS: &'static [Self] = &[Self::Plus, Self::Minus];
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

pub(crate) fn tokenize(s: &str) -> Vec<Token> {
    TokenKind::lexer(s)
        .spanned()
        .map(|(kind, span)| Token { kind, span })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenKind::*;

    fn kinds(s: &str) -> Vec<TokenKind> {
        tokenize(s).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_lex_full_notation() {
        assert_eq!(
            kinds("12d20-3t15i"),
            vec![Digits, Dice, Digits, Minus, Digits, Threshold, Digits, Individual]
        );
    }

    #[test]
    fn test_lex_spans() {
        let tokens = tokenize("2d10");
        assert_eq!(tokens[0].span, 0..1);
        assert_eq!(tokens[1].span, 1..2);
        assert_eq!(tokens[2].span, 2..4);
    }

    #[test]
    fn test_lex_other_input() {
        let kinds = kinds("x d6");
        assert_eq!(kinds.first(), Some(&Error));
        assert_eq!(&kinds[kinds.len() - 2..], &[Dice, Digits]);
        assert!(!kinds.contains(&Plus));
    }
}
