use ariadne::Source;
use lambda_error::Error;
use std::io;

/// Prints the report for an error raised while executing `input` to stderr.
///
/// The `ariadne` crate's [`Report`](ariadne::Report) type does not have a `Display`
/// implementation, so we can only use its `eprint` method to print to stderr.
pub fn report_to_stderr(err: &Error, input: &str) -> io::Result<()> {
    err.build_report("input").eprint(("input", Source::from(input)))
}
