//! Turns source text into [`Token`]s using the configured symbol table and constants.

pub mod error;

use crate::{
    config::{Constants, SymbolTable},
    tokenizer::{tokenize_complete, RawKind, RawToken},
};
use error::{MalformedNumber, MultipleDecimalSplits, UnrecognizedCharacter};
use lambda_error::Error;
use std::{fmt, ops::Range};

/// The keyword introducing a root.
pub const SQRT_KEYWORD: &str = "sqrt";

/// The kinds of tokens the parser works with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A number literal or a substituted constant.
    Number(f64),

    /// A single-letter variable or function name.
    Variable(char),

    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    Sqrt,
    LParen,
    RParen,
    Equal,
    Comma,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "number `{}`", value),
            Self::Variable(name) => write!(f, "variable `{}`", name),
            Self::Plus => write!(f, "plus"),
            Self::Minus => write!(f, "minus"),
            Self::Multiply => write!(f, "multiply"),
            Self::Divide => write!(f, "divide"),
            Self::Power => write!(f, "power"),
            Self::Sqrt => write!(f, "`{}`", SQRT_KEYWORD),
            Self::LParen => write!(f, "opening parenthesis"),
            Self::RParen => write!(f, "closing parenthesis"),
            Self::Equal => write!(f, "equal"),
            Self::Comma => write!(f, "parameter separator"),
        }
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,
}

/// Lexer for the expression language.
///
/// Operators are matched against the injected [`SymbolTable`], so none of them are hard-coded.
/// Letter runs that name a constant become number tokens, `sqrt` becomes [`TokenKind::Sqrt`], and
/// any other run is split into single-letter variables (`xy` is `x` followed by `y`).
#[derive(Debug, Clone, Copy)]
pub struct Lexer<'a> {
    symbols: &'a SymbolTable,
    constants: &'a Constants,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer using the given symbol table and constants.
    pub fn new(symbols: &'a SymbolTable, constants: &'a Constants) -> Self {
        Self { symbols, constants }
    }

    /// Returns the token kind the given symbol stands for.
    fn symbol_kind(&self, symbol: char) -> Option<TokenKind> {
        let table = self.symbols;
        let kind = if symbol == table.plus {
            TokenKind::Plus
        } else if symbol == table.minus {
            TokenKind::Minus
        } else if symbol == table.multiply {
            TokenKind::Multiply
        } else if symbol == table.divide {
            TokenKind::Divide
        } else if symbol == table.power {
            TokenKind::Power
        } else if symbol == table.l_parentheses {
            TokenKind::LParen
        } else if symbol == table.r_parentheses {
            TokenKind::RParen
        } else if symbol == table.equal {
            TokenKind::Equal
        } else if symbol == table.parameter_split {
            TokenKind::Comma
        } else {
            return None;
        };
        Some(kind)
    }

    /// Returns true if the raw token can be part of a number literal.
    fn is_number_part(&self, token: &RawToken) -> bool {
        token.kind == RawKind::Digits || token.symbol() == Some(self.symbols.decimal_split)
    }

    /// Lexes the given input into a list of tokens.
    pub fn lex(&self, input: &str) -> Result<Vec<Token>, Error> {
        let raw = tokenize_complete(input);
        let mut tokens = Vec::new();
        let mut cursor = 0;

        while let Some(token) = raw.get(cursor) {
            if self.is_number_part(token) {
                cursor = self.lex_number(&raw, cursor, &mut tokens)?;
                continue;
            }

            match token.kind {
                RawKind::Whitespace => (),
                RawKind::Name => self.lex_name(token, &mut tokens),
                RawKind::Digits | RawKind::Symbol => {
                    let character = token.lexeme.chars().next().unwrap_or_default();
                    let kind = self.symbol_kind(character).ok_or_else(|| {
                        Error::new(vec![token.span.clone()], UnrecognizedCharacter { character })
                    })?;
                    tokens.push(Token { span: token.span.clone(), kind });
                },
            }
            cursor += 1;
        }

        Ok(tokens)
    }

    /// Lexes the number literal starting at `start`, returning the index of the first raw token
    /// after it.
    fn lex_number(&self, raw: &[RawToken], start: usize, tokens: &mut Vec<Token>) -> Result<usize, Error> {
        let mut literal = String::new();
        let mut splits = 0;
        let mut end = start;

        while let Some(token) = raw.get(end).filter(|token| self.is_number_part(token)) {
            if token.kind == RawKind::Digits {
                literal.push_str(token.lexeme);
            } else {
                splits += 1;
                if splits > 1 {
                    let span = raw[start].span.start..token.span.end;
                    return Err(Error::new(vec![span], MultipleDecimalSplits));
                }
                literal.push('.');
            }
            end += 1;
        }

        let span = raw[start].span.start..raw[end - 1].span.end;
        let value = literal.parse::<f64>()
            .map_err(|_| Error::new(vec![span.clone()], MalformedNumber { literal }))?;
        tokens.push(Token { span, kind: TokenKind::Number(value) });
        Ok(end)
    }

    /// Lexes a run of letters into a constant, the root keyword, or single-letter variables.
    fn lex_name(&self, token: &RawToken, tokens: &mut Vec<Token>) {
        if let Some(value) = self.constants.get(token.lexeme) {
            tokens.push(Token { span: token.span.clone(), kind: TokenKind::Number(value) });
        } else if token.lexeme == SQRT_KEYWORD {
            tokens.push(Token { span: token.span.clone(), kind: TokenKind::Sqrt });
        } else {
            tokens.extend(token.lexeme.char_indices().map(|(offset, name)| {
                let start = token.span.start + offset;
                Token { span: start..start + name.len_utf8(), kind: TokenKind::Variable(name) }
            }));
        }
    }
}
