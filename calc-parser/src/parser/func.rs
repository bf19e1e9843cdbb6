//! The function table: every builtin function name and the number of arguments it requires.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A builtin function that can be called in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    Sin,
    Cos,
    Tan,
    Sqrt,
    Log,
    Ln,
    Exp,
    Fact,
    Pow,
}

impl Func {
    /// Every function in the table.
    pub const ALL: [Func; 9] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Sqrt,
        Self::Log,
        Self::Ln,
        Self::Exp,
        Self::Fact,
        Self::Pow,
    ];

    /// Returns the function with the given name. Names are case sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.name() == name)
    }

    /// Returns the name used to call the function.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Fact => "fact",
            Self::Pow => "pow",
        }
    }

    /// Returns the number of arguments the function requires.
    pub fn arity(self) -> usize {
        match self {
            Self::Pow => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for func in Func::ALL {
            assert_eq!(Func::from_name(func.name()), Some(func));
        }
    }

    #[test]
    fn unknown_names() {
        assert_eq!(Func::from_name("pi"), None);
        assert_eq!(Func::from_name("SIN"), None);
        assert_eq!(Func::from_name("sine"), None);
    }

    #[test]
    fn arities() {
        assert_eq!(Func::Pow.arity(), 2);
        assert!(Func::ALL.iter().filter(|f| **f != Func::Pow).all(|f| f.arity() == 1));
    }
}
