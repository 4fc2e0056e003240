use ariadne::Fmt;
use lambda_attrs::ErrorKind;
use lambda_error::EXPR;
use lambda_parser::ast::NodeKind;

/// The variable is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 112,
    message = format!("`{}` is not defined", self.name),
    labels = ["this variable"],
    help = format!("to define it, type: define {} = {}", (&self.name).fg(EXPR), "<expression>".fg(EXPR)),
)]
pub struct UndefinedVariable {
    /// The name of the variable that was undefined.
    pub name: String,
}

/// The right side of a division evaluated to zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 113,
    message = "division by zero",
    labels = ["this division"],
)]
pub struct DivisionByZero;

/// The radicand of a root is not positive.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 114,
    message = format!("cannot take the root of `{}`", self.radicand),
    labels = ["this root"],
    help = "the radicand must be greater than zero",
)]
pub struct NegativeSqrt {
    /// The value of the radicand.
    pub radicand: f64,
}

/// The evaluator reached a node that has no numeric value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 115,
    message = format!("cannot evaluate a `{:?}` node", self.kind),
    labels = ["this expression"],
    help = match self.kind {
        NodeKind::Equal => format!("to solve an equation, type: solve {}", "<equation>".fg(EXPR)),
        _ => "only numbers, variables and arithmetic can be evaluated".to_string(),
    },
)]
pub struct UnexpectedNode {
    /// The kind of the node.
    pub kind: NodeKind,
}

/// The definition of a variable refers back to the variable itself.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 119,
    message = format!(
        "`{}` is defined in terms of itself",
        self.chain.first().map_or("", String::as_str),
    ),
    labels = ["this expression"],
    help = format!("the definitions form a cycle: {}", self.chain.join(" -> ").fg(EXPR)),
)]
pub struct CyclicVariable {
    /// The variables visited, starting and ending with the same name.
    pub chain: Vec<String>,
}
