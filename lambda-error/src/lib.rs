//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Every stage of the evaluator (lexing, parsing, simplification, evaluation, and the command
//! layer) reports failures as an [`Error`]. The concrete condition is a small struct implementing
//! [`ErrorKind`], usually through `#[derive(ErrorKind)]` from `lambda-attrs`. The set of kinds is
//! closed: each one carries a stable numeric [`ErrorKind::code`] that front-ends display next to
//! the message.

use ariadne::{Color, Report};
use std::{any::Any, fmt::{self, Debug}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns this error kind as [`Any`], so callers can inspect the concrete condition.
    fn as_any(&self) -> &dyn Any;

    /// The numeric code of this error, shown alongside the message.
    fn code(&self) -> u16;

    /// The one-line message describing this error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    ///
    /// Stages that work on expression trees have no source positions, so this may be empty
    /// until the caller attaches a span with [`Error::or_span`].
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Attaches the given span if this error does not point anywhere yet.
    pub fn or_span(mut self, span: Range<usize>) -> Self {
        if self.spans.is_empty() {
            self.spans.push(span);
        }
        self
    }

    /// Shifts every span of this error right by `offset` bytes. Used when an error was produced
    /// while processing a slice of a larger input.
    pub fn offset(mut self, offset: usize) -> Self {
        for span in &mut self.spans {
            *span = span.start + offset..span.end + offset;
        }
        self
    }

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns the kind of this error if it is `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// The numeric code of the error kind.
    pub fn code(&self) -> u16 {
        self.kind.code()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

impl<K: ErrorKind + 'static> From<K> for Error {
    fn from(kind: K) -> Self {
        Self::new(Vec::new(), kind)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error {}: {}", self.kind.code(), self.kind.message())
    }
}

impl std::error::Error for Error {}
