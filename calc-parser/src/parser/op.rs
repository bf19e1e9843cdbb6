//! The operator table: precedence and associativity of each binary operator.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The precedence of an operator. Operators with higher precedence bind more tightly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Precedence {
    /// Addition and subtraction.
    Term = 2,

    /// Multiplication and division.
    Factor = 3,

    /// Exponentiation.
    Exp = 4,
}

impl Precedence {
    /// Returns the numeric level of this precedence.
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Precedence {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.level().cmp(&other.level())
    }
}

/// The associativity of an operator, deciding how a chain of operators with equal precedence is
/// grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,

    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl BinOpKind {
    /// Every operator in the table.
    pub const ALL: [BinOpKind; 5] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Exp];

    /// Returns the symbol used to write the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Exp => "^",
        }
    }

    /// Returns the precedence of the binary operation.
    pub fn precedence(self) -> Precedence {
        match self {
            Self::Add | Self::Sub => Precedence::Term,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Exp => Precedence::Exp,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(self) -> Associativity {
        match self {
            Self::Exp => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div => Associativity::Left,
        }
    }

    /// Returns true if `top`, an operator waiting on the operator stack, must be moved to the
    /// output before this operator is pushed.
    pub fn yields_to(self, top: BinOpKind) -> bool {
        match self.associativity() {
            Associativity::Left => self.precedence() <= top.precedence(),
            Associativity::Right => self.precedence() < top.precedence(),
        }
    }
}

/// A prefix operator that takes one operand.
///
/// Negation is applied before `*` and `/` but after `^`, so `-2^2` is `-4` and `-2*3` is `-6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOpKind {
    Neg,
}

impl UnaryOpKind {
    /// Returns the symbol used to write the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
        }
    }

    /// Returns true if this operator, waiting on the operator stack, must be moved to the output
    /// before the binary operator `next` is pushed.
    pub fn applies_before(self, next: BinOpKind) -> bool {
        match self {
            Self::Neg => next.precedence() < Precedence::Exp,
        }
    }

    /// Applies the operator to the operand.
    pub fn apply(self, n: f64) -> f64 {
        match self {
            Self::Neg => -n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table() {
        let levels = BinOpKind::ALL.map(|op| (op.symbol(), op.precedence().level(), op.associativity()));
        assert_eq!(levels, [
            ("+", 2, Associativity::Left),
            ("-", 2, Associativity::Left),
            ("*", 3, Associativity::Left),
            ("/", 3, Associativity::Left),
            ("^", 4, Associativity::Right),
        ]);
    }

    #[test]
    fn left_associative_yields_to_equal() {
        assert!(BinOpKind::Sub.yields_to(BinOpKind::Add));
        assert!(BinOpKind::Add.yields_to(BinOpKind::Mul));
        assert!(!BinOpKind::Mul.yields_to(BinOpKind::Add));
    }

    #[test]
    fn negation_waits_for_exponent() {
        assert!(UnaryOpKind::Neg.applies_before(BinOpKind::Mul));
        assert!(UnaryOpKind::Neg.applies_before(BinOpKind::Sub));
        assert!(!UnaryOpKind::Neg.applies_before(BinOpKind::Exp));
    }

    #[test]
    fn right_associative_waits_for_equal() {
        assert!(!BinOpKind::Exp.yields_to(BinOpKind::Exp));
        assert!(BinOpKind::Div.yields_to(BinOpKind::Exp));
    }
}
