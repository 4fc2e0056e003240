pub mod token;

use logos::{Lexer, Logos};
pub use token::{RawKind, RawToken};

/// Returns an iterator over the raw token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<RawKind> {
    RawKind::lexer(input)
}

/// Returns an owned array containing all of the raw tokens produced by the tokenizer.
///
/// Input the tokenizer cannot classify is returned as a [`RawKind::Symbol`], so the lexer can
/// report it as an unrecognized character.
pub fn tokenize_complete(input: &str) -> Box<[RawToken]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(RawToken {
            span: lexer.span(),
            kind: result.unwrap_or(RawKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(RawKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (RawKind::Digits, "1"),
                (RawKind::Whitespace, " "),
                (RawKind::Symbol, "+"),
                (RawKind::Whitespace, " "),
                (RawKind::Digits, "2"),
            ],
        );
    }

    #[test]
    fn names_and_decimals() {
        compare_tokens(
            "3.25pi  sqrt(x)",
            [
                (RawKind::Digits, "3"),
                (RawKind::Symbol, "."),
                (RawKind::Digits, "25"),
                (RawKind::Name, "pi"),
                (RawKind::Whitespace, "  "),
                (RawKind::Name, "sqrt"),
                (RawKind::Symbol, "("),
                (RawKind::Name, "x"),
                (RawKind::Symbol, ")"),
            ],
        );
    }

    #[test]
    fn unicode_symbol_is_one_token() {
        let tokens = tokenize_complete("2×3");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].symbol(), Some('×'));
        assert_eq!(tokens[1].span, 1..3);
    }
}
