use crate::parser::{func::Func, op::{BinOpKind, UnaryOpKind}};
use logos::Logos;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The raw lexemes recognized by the tokenizer, before names are resolved against the function
/// table.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
#[logos(skip r"[ \t\n\x0B\f\r\x1C-\x1F]+")]
pub enum RawToken {
    /// A run of digits and dots. Whether the run is a valid decimal literal is only checked when
    /// it is evaluated.
    #[regex(r"[0-9.]+")]
    Number,

    #[regex(r"[a-zA-Z]+")]
    Name,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token(",")]
    Comma,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// Any other character.
    #[regex(r".", priority = 0)]
    Symbol,
}

impl RawToken {
    /// Classifies the raw lexeme into a [`TokenKind`]. Returns [`None`] for characters that are
    /// not part of the expression language.
    pub fn classify(self, lexeme: &str) -> Option<TokenKind> {
        let kind = match self {
            Self::Number => TokenKind::Number,
            Self::Name => match Func::from_name(lexeme) {
                Some(func) => TokenKind::Function(func),
                None => TokenKind::Constant,
            },
            Self::Add => TokenKind::Operator(BinOpKind::Add),
            Self::Sub => TokenKind::Operator(BinOpKind::Sub),
            Self::Mul => TokenKind::Operator(BinOpKind::Mul),
            Self::Div => TokenKind::Operator(BinOpKind::Div),
            Self::Exp => TokenKind::Operator(BinOpKind::Exp),
            Self::Comma => TokenKind::Comma,
            Self::OpenParen => TokenKind::LeftParen,
            Self::CloseParen => TokenKind::RightParen,
            Self::Symbol => return None,
        };
        Some(kind)
    }
}

/// The different kinds of tokens that make up an expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// A decimal literal, such as `3.14`.
    Number,

    /// A binary operator.
    Operator(BinOpKind),

    /// A prefix operator. A `-` is a negation when it appears where an operand is expected.
    UnaryOperator(UnaryOpKind),

    /// The name of a function in the function table.
    Function(Func),

    /// Any other name, such as `pi`. The name is only looked up in the constant table when it is
    /// evaluated.
    Constant,

    LeftParen,

    RightParen,

    /// Separates the arguments of a function call.
    Comma,
}

impl TokenKind {
    /// Returns true if an operand is expected after a token of this kind, meaning that a `-`
    /// following it is a negation rather than a subtraction.
    pub fn expects_operand(self) -> bool {
        matches!(
            self,
            Self::Operator(_) | Self::UnaryOperator(_) | Self::Function(_) | Self::LeftParen | Self::Comma
        )
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token is a parenthesis.
    pub fn is_paren(&self) -> bool {
        matches!(self.kind, TokenKind::LeftParen | TokenKind::RightParen)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme)
    }
}
