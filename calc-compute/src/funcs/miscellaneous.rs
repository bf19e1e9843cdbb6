//! Uncategorized functions.

use crate::numerical::builtin::error::BuiltinError;

/// The largest integer whose factorial is finite as an `f64`.
pub const MAX_FINITE_FACTORIAL: f64 = 170.0;

/// The factorial function. The argument is first rounded to the nearest integer, with halves
/// rounded up.
#[derive(Debug)]
pub struct Factorial;

impl Factorial {
    pub fn eval_static(n: f64) -> Result<f64, BuiltinError> {
        let rounded = (n + 0.5).floor();
        if rounded < 0.0 {
            return Err(BuiltinError::NegativeFactorial { rounded });
        }

        if rounded > MAX_FINITE_FACTORIAL {
            return Ok(f64::INFINITY);
        }

        // `NaN` saturates to zero
        let n = rounded as u32;
        Ok((2..=n).fold(1.0, |acc, i| acc * f64::from(i)))
    }
}
