//! Recursive-descent parser producing a binary [`Node`] tree.
//!
//! Precedence, from loosest to tightest binding:
//!
//! | Level      | Operators                                                    |
//! | ---------- | ------------------------------------------------------------ |
//! | equation   | `=`                                                          |
//! | expression | `+`, `-`                                                     |
//! | term       | `*`, `/`, implicit multiplication                            |
//! | factor     | `^` (left associative)                                       |
//! | unary      | literals, variables, calls, groups, `sqrt`, unary `+` / `-` |
//!
//! Implicit multiplication is inserted when a factor is directly followed by a variable, an
//! opening parenthesis or `sqrt`, so `2x`, `3(a+b)` and `2sqrt(4)` are products.

pub mod error;

use crate::{
    ast::{AssignTarget, Assignment, Node},
    lexer::{Token, TokenKind},
};
use error::{
    ExpressionTooComplex,
    MalformedAssertion,
    MissingToken,
    UnclosedParenthesis,
    UnexpectedToken,
    UnopenedParenthesis,
    WrongArity,
};
use lambda_error::{Error, ErrorKind};
use std::{collections::HashMap, ops::Range};

/// The maximum nesting depth of groups, roots and unary signs.
pub const MAX_NESTING_DEPTH: usize = 1 << 8;

/// Gives the parser the arity of the functions it can call.
///
/// A variable followed by an opening parenthesis is only parsed as a call if its name is known
/// here; otherwise it is a variable multiplied by the parenthesized group.
pub trait FunctionLookup {
    /// Returns the number of parameters of the function with the given name, if it exists.
    fn arity(&self, name: &str) -> Option<usize>;
}

/// No functions are known.
impl FunctionLookup for () {
    #[inline]
    fn arity(&self, _: &str) -> Option<usize> {
        None
    }
}

impl FunctionLookup for HashMap<String, usize> {
    fn arity(&self, name: &str) -> Option<usize> {
        self.get(name).copied()
    }
}

/// A high-level parser for the language.
pub struct Parser<'a> {
    /// The tokens that this parser is currently parsing.
    tokens: Vec<Token>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The functions that can be called.
    functions: &'a dyn FunctionLookup,

    /// The current nesting depth, checked against [`MAX_NESTING_DEPTH`].
    depth: usize,
}

impl Parser<'static> {
    /// Creates a parser for the given tokens that knows no functions.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0, functions: &(), depth: 0 }
    }
}

impl<'a> Parser<'a> {
    /// Creates a parser for the given tokens that can call the given functions.
    pub fn with_functions(tokens: Vec<Token>, functions: &'a dyn FunctionLookup) -> Self {
        Self { tokens, cursor: 0, functions, depth: 0 }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or_else(|| self.eof_span(), |token| token.span.clone())
    }

    /// Returns the kind of the current token without moving the cursor.
    fn peek(&self) -> Option<TokenKind> {
        self.tokens.get(self.cursor).map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns a [`MissingToken`] error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token, Error> {
        let token = self.tokens.get(self.cursor).cloned().ok_or_else(|| self.error(MissingToken))?;
        self.cursor += 1;
        Ok(token)
    }

    /// Advances the cursor if the current token is of the given kind.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek() == Some(kind) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Fails if there are tokens left.
    fn expect_end(&self) -> Result<(), Error> {
        match self.peek() {
            Some(found) => Err(self.error(UnexpectedToken { found })),
            None => Ok(()),
        }
    }

    /// Consumes the closing parenthesis matching the one at `open`.
    fn close_paren(&mut self, open: Range<usize>) -> Result<(), Error> {
        if self.eat(TokenKind::RParen) {
            Ok(())
        } else {
            Err(Error::new(vec![open, self.span()], UnclosedParenthesis))
        }
    }

    /// Parses an expression. All the tokens must be consumed.
    pub fn parse_expression_full(&mut self) -> Result<Node, Error> {
        let node = self.expression()?;
        self.expect_end()?;
        Ok(node)
    }

    /// Parses an expression that may be an equation (`lhs = rhs`). All the tokens must be
    /// consumed.
    pub fn parse_equation_full(&mut self) -> Result<Node, Error> {
        let lhs = self.expression()?;
        let node = if self.eat(TokenKind::Equal) {
            Node::equal(lhs, self.expression()?)
        } else {
            lhs
        };
        self.expect_end()?;
        Ok(node)
    }

    /// Parses a definition of the form `x = <expr>` or `f(x, y) = <expr>`. All the tokens must be
    /// consumed.
    pub fn parse_assignment(&mut self) -> Result<Assignment, Error> {
        let name = match self.next_token()? {
            Token { kind: TokenKind::Variable(name), .. } => name.to_string(),
            Token { span, .. } => return Err(Error::new(vec![span], MalformedAssertion)),
        };

        let target = if self.eat(TokenKind::LParen) {
            let mut params = Vec::<String>::new();
            loop {
                let token = self.next_token()?;
                match token.kind {
                    TokenKind::Variable(param) if !params.contains(&param.to_string()) => {
                        params.push(param.to_string());
                    },
                    _ => return Err(Error::new(vec![token.span], MalformedAssertion)),
                }

                let token = self.next_token()?;
                match token.kind {
                    TokenKind::Comma => continue,
                    TokenKind::RParen => break,
                    _ => return Err(Error::new(vec![token.span], MalformedAssertion)),
                }
            }
            AssignTarget::Function { name, params }
        } else {
            AssignTarget::Variable(name)
        };

        if !self.eat(TokenKind::Equal) {
            return Err(self.error(MalformedAssertion));
        }

        let value = self.expression()?;
        self.expect_end()?;
        Ok(Assignment { target, value })
    }

    /// `expression := term { ('+' | '-') term }`
    fn expression(&mut self) -> Result<Node, Error> {
        let mut result = self.term()?;
        loop {
            if self.eat(TokenKind::Plus) {
                let rhs = self.term()?;
                result = Node::Plus(vec![result, rhs]);
            } else if self.eat(TokenKind::Minus) {
                let rhs = self.term()?;
                result = Node::minus(result, rhs);
            } else {
                return Ok(result);
            }
        }
    }

    /// `term := factor { ('*' | '/') factor | <implicit> factor }`
    fn term(&mut self) -> Result<Node, Error> {
        let mut result = self.factor()?;
        loop {
            match self.peek() {
                Some(TokenKind::Multiply) => {
                    self.cursor += 1;
                    let rhs = self.factor()?;
                    result = Node::Multiply(vec![result, rhs]);
                },
                Some(TokenKind::Divide) => {
                    self.cursor += 1;
                    let rhs = self.factor()?;
                    result = Node::divide(result, rhs);
                },
                Some(TokenKind::Variable(_) | TokenKind::LParen | TokenKind::Sqrt) => {
                    let rhs = self.factor()?;
                    result = Node::Multiply(vec![result, rhs]);
                },
                _ => return Ok(result),
            }
        }
    }

    /// `factor := unary { '^' unary }`
    fn factor(&mut self) -> Result<Node, Error> {
        let mut result = self.unary()?;
        while self.eat(TokenKind::Power) {
            let exp = self.unary()?;
            result = Node::power(result, exp);
        }
        Ok(result)
    }

    /// `unary`, guarded against nesting too deeply.
    fn unary(&mut self) -> Result<Node, Error> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(ExpressionTooComplex));
        }

        self.depth += 1;
        let result = self.primary();
        self.depth -= 1;
        result
    }

    /// Parses literals, variables, calls, groups, roots and unary signs.
    fn primary(&mut self) -> Result<Node, Error> {
        let token = self.next_token()?;
        match token.kind {
            TokenKind::Number(value) => Ok(Node::Number(value)),
            TokenKind::Variable(name) => {
                let name = name.to_string();
                if self.peek() == Some(TokenKind::LParen) {
                    if let Some(arity) = self.functions.arity(&name) {
                        return self.call(name, arity, token.span);
                    }
                }
                Ok(Node::Variable(name))
            },
            TokenKind::LParen => {
                let inner = self.expression()?;
                self.close_paren(token.span)?;
                Ok(inner)
            },
            TokenKind::Sqrt => self.sqrt(),
            TokenKind::Plus => Ok(Node::Plus(vec![Node::Number(0.0), self.factor()?])),
            TokenKind::Minus => Ok(Node::neg(self.factor()?)),
            found => Err(Error::new(vec![token.span], UnexpectedToken { found })),
        }
    }

    /// Parses the arguments of a call to a known function, starting at the opening parenthesis.
    fn call(&mut self, name: String, arity: usize, name_span: Range<usize>) -> Result<Node, Error> {
        let open = self.span();
        self.cursor += 1;

        let mut args = Vec::new();
        if !self.eat(TokenKind::RParen) {
            loop {
                args.push(self.expression()?);
                if !self.eat(TokenKind::Comma) {
                    self.close_paren(open)?;
                    break;
                }
            }
        }

        if args.len() != arity {
            let end = self.tokens[self.cursor - 1].span.end;
            return Err(Error::new(
                vec![name_span.start..end],
                WrongArity { name, expected: arity, given: args.len() },
            ));
        }

        Ok(Node::Function(name, args))
    }

    /// `'sqrt' [ '^' factor ] '(' expression ')'`, with the `sqrt` keyword already consumed.
    fn sqrt(&mut self) -> Result<Node, Error> {
        let index = if self.eat(TokenKind::Power) {
            self.factor()?
        } else {
            Node::Number(2.0)
        };

        let open = self.span();
        if !self.eat(TokenKind::LParen) {
            return Err(self.error(UnopenedParenthesis));
        }

        let radicand = self.expression()?;
        self.close_paren(open)?;
        Ok(Node::sqrt(index, radicand))
    }
}
