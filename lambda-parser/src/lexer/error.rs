use ariadne::Fmt;
use lambda_attrs::ErrorKind;
use lambda_error::EXPR;

/// A number literal contains more than one decimal separator.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 105,
    message = "multiple decimal splits in one number",
    labels = ["this number"],
    help = format!("a number may contain at most {} decimal separator", "one".fg(EXPR)),
)]
pub struct MultipleDecimalSplits;

/// A number literal could not be read as a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 106,
    message = format!("`{}` is not a valid number", self.literal),
    labels = ["this literal"],
)]
pub struct MalformedNumber {
    /// The text of the literal.
    pub literal: String,
}

/// A character that is neither an operator, a digit, a letter nor whitespace.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    code = 117,
    message = format!("unrecognized character `{}`", self.character),
    labels = ["this character"],
    help = "check the configured symbol table for the supported operators",
)]
pub struct UnrecognizedCharacter {
    /// The character that was found.
    pub character: char,
}
