//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs an [`ErrorKind`] with the regions of the input it
//! originated from.

#[cfg(test)]
extern crate self as calc_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug, Display}, io, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::Rgb(52, 235, 152);

/// The stage of the evaluation pipeline that raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The input contained a character that could not be classified.
    Lex,

    /// The token sequence was structurally malformed.
    Syntax,

    /// The postfix sequence could not be evaluated.
    Eval,
}

impl Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Lex => write!(f, "lex error"),
            Stage::Syntax => write!(f, "syntax error"),
            Stage::Eval => write!(f, "evaluation error"),
        }
    }
}

/// Represents any kind of error that can occur during some operation.
///
/// This trait is usually derived with `calc_attrs::ErrorKind`.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns the kind as [`Any`], so that callers can recover the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// The stage of the pipeline that raised this error.
    fn stage(&self) -> Stage;

    /// A one-line description of the error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// The stage of the pipeline that raised this error.
    pub fn stage(&self) -> Stage {
        self.kind.stage()
    }

    /// Returns the concrete kind of this error if it is of type `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Returns true if the kind of this error is of type `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.downcast_ref::<K>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }

    /// Renders the report for this error into a string, including color codes.
    pub fn report_to_string(&self, src_id: &str, input: &str) -> io::Result<String> {
        let mut buf = Vec::new();
        self.build_report(src_id).write((src_id, Source::from(input)), &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.stage(), self.kind.message())
    }
}

impl std::error::Error for Error {}
