use logos::Logos;
use std::ops::Range;

/// The raw character classes produced by the tokenizer.
///
/// The tokenizer does not know which characters are operators; that depends on the configured
/// [`SymbolTable`](crate::config::SymbolTable), which the [`Lexer`](crate::lexer::Lexer) applies
/// to the [`RawKind::Symbol`] tokens.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum RawKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[regex(r"[a-zA-Z]+")]
    Name,

    #[regex(r"[0-9]+")]
    Digits,

    #[regex(r".", priority = 0)]
    Symbol,
}

/// A raw token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct RawToken<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The character class of this token.
    pub kind: RawKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl RawToken<'_> {
    /// Returns the single character of a [`RawKind::Symbol`] token.
    pub fn symbol(&self) -> Option<char> {
        match self.kind {
            RawKind::Symbol => self.lexeme.chars().next(),
            _ => None,
        }
    }
}
