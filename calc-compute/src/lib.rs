//! Evaluation of scientific calculator expressions.
//!
//! An expression goes through three stages: it is tokenized, converted to postfix order, and
//! evaluated with an operand stack. Each stage stops at the first error it finds and returns it as
//! a [`calc_error::Error`], which can be rendered as a diagnostic pointing into the input.
//!
//! ```
//! use calc_compute::{evaluate, evaluate_with, numerical::ctxt::Ctxt};
//!
//! assert_eq!(evaluate("5 + 8 * 2").unwrap(), 21.0);
//! assert_eq!(evaluate("pow(2, 3)").unwrap(), 8.0);
//! assert!(evaluate("(1 + 2").is_err());
//!
//! // the legacy policy turns every failure into zero
//! assert_eq!(evaluate_with("(1 + 2", &Ctxt::legacy()).unwrap(), 0.0);
//! ```

pub mod consts;
pub mod funcs;
pub mod numerical;

use calc_error::Error;
use calc_parser::{parser::to_postfix, tokenizer::tokenize_complete};
use numerical::{ctxt::{Ctxt, ErrorPolicy}, eval::eval_postfix};

/// Runs all three stages, stopping at the first error.
fn run(expression: &str, ctxt: &Ctxt) -> Result<f64, Error> {
    let tokens = tokenize_complete(expression, ctxt.lex_mode)?;
    let postfix = to_postfix(&tokens)?;
    eval_postfix(&postfix, ctxt)
}

/// Evaluates the expression with the given context.
///
/// With [`ErrorPolicy::Zero`], any failure evaluates to `0.0` instead of an error.
pub fn evaluate_with(expression: &str, ctxt: &Ctxt) -> Result<f64, Error> {
    match (run(expression, ctxt), ctxt.on_error) {
        (Err(_), ErrorPolicy::Zero) => Ok(0.0),
        (result, _) => result,
    }
}

/// Evaluates the expression with the default context: angles in degrees, unknown characters
/// skipped, and errors returned to the caller.
pub fn evaluate(expression: &str) -> Result<f64, Error> {
    evaluate_with(expression, &Ctxt::default())
}

/// Evaluates the expression the way older clients expect: unknown characters are skipped and any
/// failure evaluates to `0.0`.
pub fn evaluate_legacy(expression: &str) -> f64 {
    evaluate_with(expression, &Ctxt::legacy()).unwrap_or(0.0)
}
