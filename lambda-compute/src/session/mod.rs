//! The command surface: one line of input in, one [`Output`] or [`Error`] out.
//!
//! A line starting with one of the following keywords is a command; any other line is an
//! expression to evaluate.
//!
//! | Command                     | Effect                                                 |
//! | --------------------------- | ------------------------------------------------------ |
//! | `define x = <expr>`         | simplifies `<expr>` and stores it as the variable `x`  |
//! | `define f(x, y) = <expr>`   | simplifies `<expr>` and stores it as the function `f`  |
//! | `drop x`                    | removes the variable (or function) `x`                 |
//! | `solve <expr> = <expr>`     | simplifies both sides of the equation                  |
//! | `list`                      | lists every definition                                 |

pub mod error;

use crate::{
    ctxt::{Ctxt, Func},
    eval,
    symbolic::{self, expand_calls, rebuild, simplify, RuleSet},
};
use error::{IncompleteDefine, IncompleteDrop, NoVariableToDrop, RecursiveDefinition};
use lambda_error::Error;
use lambda_parser::{
    ast::{AssignTarget, Node},
    Constants,
    Lexer,
    Parser,
    SymbolTable,
    Token,
    TokenKind,
};
use log::info;
use std::{fmt, ops::Range};

/// A change made to the definitions of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvEvent<'a> {
    /// A variable or function was defined, or redefined.
    Defined {
        /// The name that was defined.
        name: &'a str,

        /// Whether the definition is a function.
        function: bool,
    },

    /// A variable or function was removed.
    Dropped {
        /// The name that was removed.
        name: &'a str,
    },
}

/// The result of executing one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// The value of an expression.
    Value(f64),

    /// The name that was defined.
    Defined(String),

    /// The name that was removed.
    Dropped(String),

    /// The simplified equation.
    Solved(Node),

    /// Every definition, one per line.
    Listing(Vec<String>),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Value(value) => write!(f, "{}", value),
            Output::Defined(name) => write!(f, "defined `{}`", name),
            Output::Dropped(name) => write!(f, "dropped `{}`", name),
            Output::Solved(node) => write!(f, "{}", node),
            Output::Listing(lines) if lines.is_empty() => write!(f, "nothing is defined"),
            Output::Listing(lines) => write!(f, "{}", lines.join("\n")),
        }
    }
}

/// A callback notified of every change to the definitions.
type Observer = Box<dyn FnMut(&EnvEvent<'_>)>;

/// A sequence of commands sharing one set of definitions.
pub struct Session {
    /// The definitions made so far.
    ctxt: Ctxt,

    /// The symbols the lexer recognizes.
    symbols: SymbolTable,

    /// The named constants the lexer substitutes.
    constants: Constants,

    /// Callbacks to notify when the definitions change.
    observers: Vec<Observer>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SymbolTable::default(), Constants::default())
    }
}

impl Session {
    /// Creates a session with no definitions, lexing input with the given symbols and constants.
    pub fn new(symbols: SymbolTable, constants: Constants) -> Self {
        Self {
            ctxt: Ctxt::new(),
            symbols,
            constants,
            observers: Vec::new(),
        }
    }

    /// Returns the definitions made so far.
    pub fn ctxt(&self) -> &Ctxt {
        &self.ctxt
    }

    /// Registers a callback that is called after every successful `define` or `drop`.
    pub fn on_change(&mut self, observer: impl FnMut(&EnvEvent<'_>) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Executes one line of input.
    ///
    /// The spans of a returned error point into `line`.
    pub fn execute(&mut self, line: &str) -> Result<Output, Error> {
        let trimmed = line.trim_start();
        let start = line.len() - trimmed.len();
        let keyword_len = trimmed.bytes().take_while(u8::is_ascii_alphabetic).count();
        let (keyword, rest) = trimmed.split_at(keyword_len);

        let result = match keyword {
            "define" => self.define(rest).map(Output::Defined),
            "drop" => self.drop_name(rest).map(Output::Dropped),
            "solve" => self.solve(rest).map(Output::Solved),
            "list" if rest.trim().is_empty() => Ok(Output::Listing(self.list())),
            _ => return self.evaluate(line).map(Output::Value),
        };
        result.map_err(|err| err.offset(start + keyword_len))
    }

    /// Defines a variable or function from the source text following the `define` keyword.
    /// Returns the name that was defined.
    pub fn define(&mut self, src: &str) -> Result<String, Error> {
        let whole = 0..src.len();
        if src.trim().is_empty() {
            return Err(Error::new(vec![whole], IncompleteDefine));
        }

        let tokens = self.lex(src)?;
        if tokens.len() < 3 {
            return Err(Error::new(vec![whole], IncompleteDefine));
        }

        let assignment = Parser::with_functions(tokens, &self.ctxt).parse_assignment()?;
        let name = assignment.target.name().to_string();
        let value = assignment.value;
        let recursive = match &assignment.target {
            AssignTarget::Variable(_) => value.contains_variable(&name),
            // an unknown `f(x)` parses as `f * x`, so look for the variable too
            AssignTarget::Function { params, .. } => value.contains_call(&name)
                || (value.contains_variable(&name) && !params.contains(&name)),
        };
        if recursive {
            return Err(Error::new(vec![whole], RecursiveDefinition { name }));
        }

        match assignment.target {
            AssignTarget::Variable(_) => {
                let node = self.prepare(&value).map_err(|err| err.or_span(whole))?;
                info!("defined `{}` = {}", name, node);
                self.ctxt.add_var(&name, node);
                self.notify(EnvEvent::Defined { name: &name, function: false });
            },
            AssignTarget::Function { params, .. } => {
                let body = self.prepare(&value).map_err(|err| err.or_span(whole))?;
                info!("defined `{}({})` = {}", name, params.join(", "), body);
                self.ctxt.add_func(&name, Func { params, body });
                self.notify(EnvEvent::Defined { name: &name, function: true });
            },
        }
        Ok(name)
    }

    /// Removes the variable, or else the function, named by the source text following the `drop`
    /// keyword. Returns the name that was removed.
    pub fn drop_name(&mut self, src: &str) -> Result<String, Error> {
        if src.trim().is_empty() {
            return Err(Error::new(vec![0..src.len()], IncompleteDrop));
        }

        let tokens = self.lex(src)?;
        let (name, span) = match tokens.as_slice() {
            [Token { span, kind: TokenKind::Variable(name) }] => (name.to_string(), span.clone()),
            _ => {
                let name = src.trim();
                let start = src.len() - src.trim_start().len();
                return Err(Error::new(
                    vec![start..start + name.len()],
                    NoVariableToDrop { name: name.to_string() },
                ));
            },
        };

        if self.ctxt.remove_var(&name).is_none() && self.ctxt.remove_func(&name).is_none() {
            return Err(Error::new(vec![span], NoVariableToDrop { name }));
        }

        info!("dropped `{}`", name);
        self.notify(EnvEvent::Dropped { name: &name });
        Ok(name)
    }

    /// Simplifies the equation given by the source text following the `solve` keyword.
    pub fn solve(&self, src: &str) -> Result<Node, Error> {
        let tokens = self.lex(src)?;
        let equation = Parser::with_functions(tokens, &self.ctxt).parse_equation_full()?;
        symbolic::solve(&equation, &self.ctxt).map_err(|err| err.or_span(0..src.len()))
    }

    /// Lists every variable as `x = <definition>`, followed by every function as
    /// `f(x, y) = <body>`.
    pub fn list(&self) -> Vec<String> {
        let vars = self.ctxt.get_vars()
            .iter()
            .map(|(name, node)| format!("{} = {}", name, node));
        let funcs = self.ctxt.get_funcs()
            .iter()
            .map(|(name, func)| format!("{}({}) = {}", name, func.params.join(", "), func.body));
        vars.chain(funcs).collect()
    }

    /// Evaluates an expression to a number.
    pub fn evaluate(&self, src: &str) -> Result<f64, Error> {
        let tokens = self.lex(src)?;
        let node = Parser::with_functions(tokens, &self.ctxt).parse_expression_full()?;
        self.prepare(&node)
            .and_then(|node| simplify(&node, RuleSet::Rewind, &self.ctxt))
            .and_then(|node| eval::evaluate(&node, &self.ctxt, false))
            .map_err(|err| err.or_span(expression_span(src)))
    }

    /// Lexes source text with the session's symbols and constants.
    fn lex(&self, src: &str) -> Result<Vec<Token>, Error> {
        Lexer::new(&self.symbols, &self.constants).lex(src)
    }

    /// Expands calls, flattens and unwinds a parsed expression.
    fn prepare(&self, node: &Node) -> Result<Node, Error> {
        let expanded = expand_calls(node, &self.ctxt)?;
        let rebuilt = rebuild(&expanded)?;
        simplify(&rebuilt, RuleSet::Unwind, &self.ctxt)
    }

    fn notify(&mut self, event: EnvEvent<'_>) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }
}

/// The span of the source text without surrounding whitespace.
fn expression_span(src: &str) -> Range<usize> {
    let start = src.len() - src.trim_start().len();
    start..src.trim_end().len().max(start)
}
