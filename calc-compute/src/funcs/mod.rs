//! All builtin functions that can be called in an expression.
//!
//! Each function is implemented as a unit `struct` with an associated `eval_static` method, which
//! can be used to evaluate the function directly in Rust code. [`apply`] dispatches a [`Func`]
//! from the function table to its implementation.
//!
//! # Example
//!
//! ```
//! use calc_compute::funcs::{power::Sqrt, trigonometry::Sin};
//! use calc_compute::numerical::trig_mode::TrigMode;
//!
//! assert_eq!(Sqrt::eval_static(16.0), 4.0);
//! assert!((Sin::eval_static(TrigMode::Degrees, 90.0) - 1.0).abs() < 1e-12);
//! ```

pub mod miscellaneous;
pub mod power;
pub mod trigonometry;

use calc_parser::parser::Func;
use crate::numerical::{builtin::error::BuiltinError, trig_mode::TrigMode};
use miscellaneous::Factorial;
use power::{Exp, Ln, Log, Pow, Sqrt};
use trigonometry::{Cos, Sin, Tan};

/// Applies the function to the given arguments, which must be in call order.
pub fn apply(func: Func, trig_mode: TrigMode, args: &[f64]) -> Result<f64, BuiltinError> {
    let value = match (func, args) {
        (Func::Sin, &[n]) => Sin::eval_static(trig_mode, n),
        (Func::Cos, &[n]) => Cos::eval_static(trig_mode, n),
        (Func::Tan, &[n]) => Tan::eval_static(trig_mode, n),
        (Func::Sqrt, &[n]) => Sqrt::eval_static(n),
        (Func::Log, &[n]) => Log::eval_static(n),
        (Func::Ln, &[n]) => Ln::eval_static(n),
        (Func::Exp, &[n]) => Exp::eval_static(n),
        (Func::Fact, &[n]) => Factorial::eval_static(n)?,
        (Func::Pow, &[a, b]) => Pow::eval_static(a, b),
        _ => return Err(BuiltinError::ArgumentCount {
            expected: func.arity(),
            given: args.len(),
        }),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn dispatch() {
        assert_abs_diff_eq!(apply(Func::Cos, TrigMode::Degrees, &[60.0]).unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(apply(Func::Log, TrigMode::Degrees, &[100.0]).unwrap(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(apply(Func::Pow, TrigMode::Degrees, &[2.0, 10.0]).unwrap(), 1024.0, epsilon = 1e-12);
    }

    #[test]
    fn radians() {
        let half_pi = std::f64::consts::FRAC_PI_2;
        assert_abs_diff_eq!(apply(Func::Sin, TrigMode::Radians, &[half_pi]).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn wrong_argument_count() {
        assert_eq!(
            apply(Func::Pow, TrigMode::Degrees, &[2.0]),
            Err(BuiltinError::ArgumentCount { expected: 2, given: 1 }),
        );
        assert_eq!(
            apply(Func::Sqrt, TrigMode::Degrees, &[]),
            Err(BuiltinError::ArgumentCount { expected: 1, given: 0 }),
        );
    }
}
