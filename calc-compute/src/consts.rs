//! The constant table. Names in an expression that are not functions are looked up here when the
//! expression is evaluated.

use calc_parser::parser::Func;
use levenshtein::levenshtein;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Archimedes' constant.
pub const PI: f64 = std::f64::consts::PI;

/// Euler's number.
pub const E: f64 = std::f64::consts::E;

/// Every named constant, by name.
pub static CONSTANTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("pi", PI),
        ("e", E),
    ])
});

/// Returns the value of the constant with the given name.
pub fn get(name: &str) -> Option<f64> {
    CONSTANTS.get(name).copied()
}

/// Returns all constants and functions with a name similar to the given name, sorted by name.
pub fn similar_names(name: &str) -> Vec<&'static str> {
    let mut names = CONSTANTS
        .keys()
        .copied()
        .chain(Func::ALL.into_iter().map(Func::name))
        .filter(|n| *n != name && levenshtein(n, name) < 2)
        .collect::<Vec<_>>();
    names.sort_unstable();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_constants() {
        assert_eq!(get("pi"), Some(PI));
        assert_eq!(get("e"), Some(E));
        assert_eq!(get("tau"), None);
        assert_eq!(get("PI"), None);
    }

    #[test]
    fn suggestions() {
        assert_eq!(similar_names("pii"), vec!["pi"]);
        assert_eq!(similar_names("sine"), vec!["sin"]);
        assert_eq!(similar_names("cot"), vec!["cos"]);
        assert!(similar_names("velocity").is_empty());
    }
}
