use ariadne::Fmt;
use crate::lexer::TokenKind;
use lambda_attrs::ErrorKind;
use lambda_error::EXPR;

/// The left side of a definition is neither a variable nor a function pattern.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 103,
    message = "incorrect assertion",
    labels = ["this part of the definition"],
    help = format!(
        "definitions look like {} or {}",
        "define x = <expression>".fg(EXPR),
        "define f(x, y) = <expression>".fg(EXPR),
    ),
)]
pub struct MalformedAssertion;

/// The end of the input was reached while another token was expected.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 107,
    message = "missing token",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct MissingToken;

/// A parenthesis was opened but never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 108,
    message = "unclosed parenthesis",
    labels = ["this parenthesis", "expected a closing parenthesis here"],
)]
pub struct UnclosedParenthesis;

/// `sqrt` was not followed by a parenthesized radicand.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 109,
    message = "unopened parenthesis",
    labels = ["expected an opening parenthesis here"],
    help = format!("write roots as {} or {}", "sqrt(x)".fg(EXPR), "sqrt^3(x)".fg(EXPR)),
)]
pub struct UnopenedParenthesis;

/// A token appeared where it cannot be used.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 110,
    message = "unexpected token",
    labels = [format!("found {} here", self.found)],
)]
pub struct UnexpectedToken {
    /// The token that was found.
    pub found: TokenKind,
}

/// A function was called with the wrong number of arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 116,
    message = "unmatched parameters",
    labels = [format!("this call has {} argument(s)", self.given)],
    help = format!("`{}` takes {} parameter(s)", (&self.name).fg(EXPR), self.expected),
)]
pub struct WrongArity {
    /// The name of the function.
    pub name: String,

    /// The number of parameters the function was defined with.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// The input nests deeper than the evaluator supports.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 120,
    message = "expression too complex",
    labels = ["this expression"],
    help = "try splitting the expression into smaller definitions",
)]
pub struct ExpressionTooComplex;
