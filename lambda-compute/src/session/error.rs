use ariadne::Fmt;
use lambda_attrs::ErrorKind;
use lambda_error::EXPR;

/// `define` was given nothing, or not enough, to define.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 100,
    message = "incomplete definition",
    labels = ["this definition"],
    help = format!("definitions look like {}", "define x = <expression>".fg(EXPR)),
)]
pub struct IncompleteDefine;

/// A definition refers to the name it defines.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 101,
    message = format!("`{}` cannot be defined in terms of itself", self.name),
    labels = ["this definition"],
)]
pub struct RecursiveDefinition {
    /// The name being defined.
    pub name: String,
}

/// `drop` was given a name that is not defined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 102,
    message = format!("`{}` is not defined", self.name),
    labels = ["this name"],
    help = format!("to see every definition, type: {}", "list".fg(EXPR)),
)]
pub struct NoVariableToDrop {
    /// The name that was given.
    pub name: String,
}

/// `drop` was given nothing to drop.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 104,
    message = "nothing to drop",
    labels = ["expected a name here"],
    help = format!("to remove a definition, type: drop {}", "<name>".fg(EXPR)),
)]
pub struct IncompleteDrop;
