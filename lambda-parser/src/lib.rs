//! Lexing and parsing of lambda-calc expressions.
//!
//! Input text goes through three steps before the rest of the evaluator sees it:
//!
//! 1. The [`tokenizer`] splits the text into raw character classes with [`logos`].
//! 2. The [`lexer`] interprets those classes using the configured [`SymbolTable`] and
//!    [`Constants`], producing [`Token`]s.
//! 3. The [`parser`] builds a binary [`Node`] tree from the tokens.
//!
//! ```
//! use lambda_parser::{ast::Node, parse};
//!
//! let node = parse("2x").unwrap();
//! assert_eq!(node, Node::Multiply(vec![Node::Number(2.0), Node::var("x")]));
//! ```

pub mod ast;
pub mod config;
pub mod lexer;
pub mod parser;
pub mod tokenizer;

use ast::Node;
pub use config::{Constants, SymbolTable};
use lambda_error::Error;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{FunctionLookup, Parser};

/// Lexes and parses a complete expression using the default symbol table and constants, with no
/// known functions.
pub fn parse(input: &str) -> Result<Node, Error> {
    let tokens = Lexer::new(&SymbolTable::default(), &Constants::default()).lex(input)?;
    Parser::new(tokens).parse_expression_full()
}
