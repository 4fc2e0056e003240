use ariadne::Fmt;
use lambda_attrs::ErrorKind;
use lambda_error::EXPR;

/// A division by zero was found while simplifying.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 111,
    message = "division by zero",
    labels = ["this expression"],
    help = "the divisor simplifies to zero",
)]
pub struct SimplifyDivisionByZero;

/// The function is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 118,
    message = format!("the `{}` function does not exist", self.name),
    labels = ["this function"],
    help = if self.suggestions.is_empty() {
        format!("to define it, type: define {}({}) = {}", (&self.name).fg(EXPR), "x".fg(EXPR), "<expression>".fg(EXPR))
    } else if self.suggestions.len() == 1 {
        format!("did you mean the `{}` function?", (&*self.suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UndefinedFunction {
    /// The name of the function that was undefined.
    pub name: String,

    /// Functions with a similar name that exist.
    pub suggestions: Vec<String>,
}
