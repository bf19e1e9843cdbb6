pub use calc_parser::tokenizer::LexMode;
use super::trig_mode::TrigMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What [`evaluate_with`] returns when any stage of the evaluation fails.
///
/// [`evaluate_with`]: crate::evaluate_with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorPolicy {
    /// Return the error to the caller.
    #[default]
    Propagate,

    /// Return `0.0` in place of the error. This cannot be told apart from an expression that
    /// legitimately evaluates to zero, and only exists for compatibility with older clients.
    Zero,
}

/// A context to use when evaluating an expression, controlling how the input is tokenized, how
/// angles are interpreted, and how failures are reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The trigonometric mode of the context.
    pub trig_mode: TrigMode,

    /// How the tokenizer treats characters that are not part of the expression language.
    pub lex_mode: LexMode,

    /// What to do when evaluation fails.
    pub on_error: ErrorPolicy,
}

impl Ctxt {
    /// Creates the default context: angles in degrees, unknown characters skipped, errors
    /// propagated.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context that rejects unknown characters.
    pub fn strict() -> Self {
        Self {
            lex_mode: LexMode::Strict,
            ..Self::default()
        }
    }

    /// Creates a context matching the legacy behavior: unknown characters are skipped and every
    /// failure evaluates to `0.0`.
    pub fn legacy() -> Self {
        Self {
            lex_mode: LexMode::Lenient,
            on_error: ErrorPolicy::Zero,
            ..Self::default()
        }
    }

    /// Sets the trigonometric mode, returning the context.
    pub fn with_trig_mode(mut self, trig_mode: TrigMode) -> Self {
        self.trig_mode = trig_mode;
        self
    }
}
