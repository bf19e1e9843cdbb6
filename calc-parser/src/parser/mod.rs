//! Conversion of an infix token sequence into postfix (Reverse Polish) notation, using the
//! [Shunting-Yard] algorithm.
//!
//! [Shunting-Yard]: https://en.wikipedia.org/wiki/Shunting_yard_algorithm

pub mod func;
pub mod op;

use crate::{
    error::{kind, Error},
    tokenizer::{Token, TokenKind},
};

pub use func::Func;
pub use op::{Associativity, BinOpKind, Precedence, UnaryOpKind};

/// Moves tokens from the top of the operator stack to the output until a left parenthesis is on
/// top of the stack. The parenthesis itself stays on the stack.
///
/// Returns false if the stack ran out before a left parenthesis was found.
fn pop_until_left_paren<'source>(
    stack: &mut Vec<Token<'source>>,
    output: &mut Vec<Token<'source>>,
) -> bool {
    while let Some(top) = stack.last() {
        if top.kind == TokenKind::LeftParen {
            return true;
        }
        output.extend(stack.pop());
    }
    false
}

/// Reorders the given infix tokens into postfix order.
///
/// Numbers and constants go straight to the output. Operators (including prefix negation) wait on
/// a stack until an operator that binds less tightly arrives. A function waits on the stack until
/// the `)` closing its argument list is found, so it is emitted directly after its arguments.
pub fn to_postfix<'source>(tokens: &[Token<'source>]) -> Result<Vec<Token<'source>>, Error> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token<'source>> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Number | TokenKind::Constant => output.push(token.clone()),
            TokenKind::Function(_) | TokenKind::UnaryOperator(_) | TokenKind::LeftParen => {
                stack.push(token.clone());
            },
            TokenKind::Comma => {
                if !pop_until_left_paren(&mut stack, &mut output) {
                    return Err(Error::new(vec![token.span.clone()], kind::MisplacedComma));
                }
            },
            TokenKind::Operator(op) => {
                while let Some(top) = stack.last() {
                    let pop = match top.kind {
                        TokenKind::Operator(top_op) => op.yields_to(top_op),
                        TokenKind::UnaryOperator(top_op) => top_op.applies_before(op),
                        _ => false,
                    };
                    if !pop {
                        break;
                    }
                    output.extend(stack.pop());
                }
                stack.push(token.clone());
            },
            TokenKind::RightParen => {
                if !pop_until_left_paren(&mut stack, &mut output) {
                    return Err(Error::new(
                        vec![token.span.clone()],
                        kind::UnmatchedParen { opening: false },
                    ));
                }

                // discard the `(`, then attach the function that owns this argument list
                stack.pop();
                if matches!(stack.last(), Some(top) if matches!(top.kind, TokenKind::Function(_))) {
                    output.extend(stack.pop());
                }
            },
        }
    }

    while let Some(token) = stack.pop() {
        if token.is_paren() {
            return Err(Error::new(
                vec![token.span.clone()],
                kind::UnmatchedParen { opening: token.kind == TokenKind::LeftParen },
            ));
        }
        output.push(token);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use crate::tokenizer::{tokenize_complete, LexMode};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Converts the input to postfix and joins the lexemes with spaces.
    fn rpn(input: &str) -> String {
        let tokens = tokenize_complete(input, LexMode::Lenient).unwrap();
        to_postfix(&tokens)
            .unwrap()
            .iter()
            .map(|token| token.lexeme)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Converts the input to postfix, expecting an error.
    fn rpn_err(input: &str) -> Error {
        let tokens = tokenize_complete(input, LexMode::Lenient).unwrap();
        to_postfix(&tokens).unwrap_err()
    }

    #[test]
    fn single_number() {
        assert_eq!(rpn("42"), "42");
    }

    #[test]
    fn precedence() {
        assert_eq!(rpn("5+8*2"), "5 8 2 * +");
        assert_eq!(rpn("5+8*2-3/1"), "5 8 2 * + 3 1 / -");
        assert_eq!(rpn("2*3^2"), "2 3 2 ^ *");
    }

    #[test]
    fn left_associativity() {
        assert_eq!(rpn("10-4-3"), "10 4 - 3 -");
        assert_eq!(rpn("16/4/2"), "16 4 / 2 /");
    }

    #[test]
    fn right_associativity() {
        assert_eq!(rpn("2^3^2"), "2 3 2 ^ ^");
    }

    #[test]
    fn parentheses() {
        assert_eq!(rpn("(5+8)*2"), "5 8 + 2 *");
        assert_eq!(rpn("((1))"), "1");
    }

    #[test]
    fn function_calls() {
        assert_eq!(rpn("sin(30)+sqrt(16)"), "30 sin 16 sqrt +");
        assert_eq!(rpn("pow(2,3)"), "2 3 pow");
        assert_eq!(rpn("pow(1+1, 3*1)"), "1 1 + 3 1 * pow");
        assert_eq!(rpn("sqrt(pow(3,2)+pow(4,2))"), "3 2 pow 4 2 pow + sqrt");
    }

    #[test]
    fn function_binds_tighter_than_operators() {
        assert_eq!(rpn("2*fact(3)^2"), "2 3 fact 2 ^ *");
    }

    #[test]
    fn function_without_parentheses() {
        // the function is drained from the stack at the end
        assert_eq!(rpn("sin 30"), "30 sin");
    }

    #[test]
    fn negation() {
        assert_eq!(rpn("-5"), "5 -");
        assert_eq!(rpn("-2^2"), "2 2 ^ -");
        assert_eq!(rpn("-2*3"), "2 - 3 *");
        assert_eq!(rpn("2^-1"), "2 1 - ^");
        assert_eq!(rpn("5--3"), "5 3 - -");
        assert_eq!(rpn("fact(-1)"), "1 - fact");
        assert_eq!(rpn("-sin(30)"), "30 sin -");
        assert_eq!(rpn("pow(-2, -3)"), "2 - 3 - pow");
    }

    #[test]
    fn constants() {
        assert_eq!(rpn("pi + e"), "pi e +");
    }

    #[test]
    fn empty() {
        assert_eq!(rpn(""), "");
    }

    #[test]
    fn unclosed_paren() {
        let err = rpn_err("(1+2");
        assert_eq!(err.spans, vec![0..1]);
        assert_eq!(err.downcast_ref::<kind::UnmatchedParen>(), Some(&kind::UnmatchedParen { opening: true }));
    }

    #[test]
    fn unopened_paren() {
        let err = rpn_err("1+2)");
        assert_eq!(err.spans, vec![3..4]);
        assert_eq!(err.downcast_ref::<kind::UnmatchedParen>(), Some(&kind::UnmatchedParen { opening: false }));
    }

    #[test]
    fn unclosed_function_call() {
        let err = rpn_err("pow(2, 3");
        assert_eq!(err.spans, vec![3..4]);
        assert!(err.is::<kind::UnmatchedParen>());
    }

    #[test]
    fn comma_outside_call() {
        let err = rpn_err("1, 2");
        assert_eq!(err.spans, vec![1..2]);
        assert!(err.is::<kind::MisplacedComma>());
    }

    #[test]
    fn comma_after_closed_call() {
        assert!(rpn_err("pow(2, 3), 4").is::<kind::MisplacedComma>());
    }
}
