//! Trigonometric functions. The input angle is interpreted according to the [`TrigMode`].

use crate::numerical::trig_mode::TrigMode;

/// Build a trigonometric function that takes in a single angle argument.
macro_rules! build_angle_input {
    ($($upname:ident; $func:expr),* $(,)?) => {
        $(
            #[derive(Debug)]
            pub struct $upname;

            impl $upname {
                pub fn eval_static(trig_mode: TrigMode, n: f64) -> f64 {
                    ($func)(trig_mode.to_radians(n))
                }
            }
        )*
    };
}

build_angle_input! {
    Sin; f64::sin,
    Cos; f64::cos,
    Tan; f64::tan,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use super::*;

    #[test]
    fn degrees() {
        assert_abs_diff_eq!(Sin::eval_static(TrigMode::Degrees, 30.0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(Cos::eval_static(TrigMode::Degrees, 180.0), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Tan::eval_static(TrigMode::Degrees, 45.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn radians() {
        assert_abs_diff_eq!(Cos::eval_static(TrigMode::Radians, std::f64::consts::PI), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(Sin::eval_static(TrigMode::Radians, 0.0), 0.0, epsilon = 1e-12);
    }
}
