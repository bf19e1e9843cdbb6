//! Numerical evaluation of postfix expressions.

pub mod builtin;
pub mod ctxt;
pub mod error;
pub mod eval;
pub mod trig_mode;
