//! Powers, roots and logarithms.

/// Square root. Negative inputs produce `NaN`.
#[derive(Debug)]
pub struct Sqrt;

impl Sqrt {
    pub fn eval_static(n: f64) -> f64 {
        n.sqrt()
    }
}

/// Base 10 logarithm.
#[derive(Debug)]
pub struct Log;

impl Log {
    pub fn eval_static(n: f64) -> f64 {
        n.log10()
    }
}

/// Natural logarithm.
#[derive(Debug)]
pub struct Ln;

impl Ln {
    pub fn eval_static(n: f64) -> f64 {
        n.ln()
    }
}

/// Raises Euler's number to the given power.
#[derive(Debug)]
pub struct Exp;

impl Exp {
    pub fn eval_static(n: f64) -> f64 {
        n.exp()
    }
}

/// Raises `base` to the power of `exp`. Also used for the `^` operator.
#[derive(Debug)]
pub struct Pow;

impl Pow {
    pub fn eval_static(base: f64, exp: f64) -> f64 {
        base.powf(exp)
    }
}
