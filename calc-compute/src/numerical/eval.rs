//! Evaluation of a postfix token sequence with a single operand stack.

use calc_parser::{parser::{BinOpKind, Func, UnaryOpKind}, tokenizer::{Token, TokenKind}};
use crate::{consts, funcs::{self, power::Pow}};
use std::ops::Range;
use super::{builtin::error::BuiltinError, ctxt::Ctxt, error::{kind, Error}};

/// A value on the operand stack, along with the region of the source code it was computed from.
#[derive(Debug, Clone, PartialEq)]
struct Operand {
    value: f64,
    span: Range<usize>,
}

/// Returns the smallest span covering both spans.
fn join(a: &Range<usize>, b: &Range<usize>) -> Range<usize> {
    a.start.min(b.start)..a.end.max(b.end)
}

/// Applies the binary operator to `a` and `b`, in that order.
pub fn apply_binary(op: BinOpKind, a: f64, b: f64) -> f64 {
    match op {
        BinOpKind::Add => a + b,
        BinOpKind::Sub => a - b,
        BinOpKind::Mul => a * b,
        BinOpKind::Div => a / b,
        BinOpKind::Exp => Pow::eval_static(a, b),
    }
}

fn eval_number(token: &Token) -> Result<f64, Error> {
    token.lexeme.parse::<f64>().map_err(|_| Error::new(
        vec![token.span.clone()],
        kind::BadNumber { lexeme: token.to_string() },
    ))
}

fn eval_constant(token: &Token) -> Result<f64, Error> {
    consts::get(token.lexeme).ok_or_else(|| Error::new(
        vec![token.span.clone()],
        kind::UnknownConstant {
            name: token.to_string(),
            suggestions: consts::similar_names(token.lexeme)
                .into_iter()
                .map(String::from)
                .collect(),
        },
    ))
}

fn eval_binary(op: BinOpKind, token: &Token, stack: &mut Vec<Operand>) -> Result<Operand, Error> {
    let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
        return Err(Error::new(vec![token.span.clone()], kind::InsufficientOperands {
            symbol: op.symbol(),
            expected: 2,
        }));
    };

    Ok(Operand {
        value: apply_binary(op, a.value, b.value),
        span: join(&join(&a.span, &token.span), &b.span),
    })
}

fn eval_unary(op: UnaryOpKind, token: &Token, stack: &mut Vec<Operand>) -> Result<Operand, Error> {
    let Some(operand) = stack.pop() else {
        return Err(Error::new(vec![token.span.clone()], kind::InsufficientOperands {
            symbol: op.symbol(),
            expected: 1,
        }));
    };

    Ok(Operand {
        value: op.apply(operand.value),
        span: join(&token.span, &operand.span),
    })
}

fn eval_call(func: Func, token: &Token, stack: &mut Vec<Operand>, ctxt: &Ctxt) -> Result<Operand, Error> {
    let arity = func.arity();
    if stack.len() < arity {
        return Err(Error::new(vec![token.span.clone()], kind::InsufficientArguments {
            name: func.name(),
            expected: arity,
            given: stack.len(),
        }));
    }

    // the arguments stay in the order they were pushed
    let args = stack.split_off(stack.len() - arity);
    let args_span = args
        .iter()
        .map(|arg| arg.span.clone())
        .reduce(|a, b| join(&a, &b))
        .unwrap_or_else(|| token.span.clone());
    let values = args.iter().map(|arg| arg.value).collect::<Vec<_>>();

    let value = funcs::apply(func, ctxt.trig_mode, &values).map_err(|err| match err {
        BuiltinError::NegativeFactorial { rounded } => Error::new(
            vec![token.span.clone(), args_span.clone()],
            kind::NegativeFactorial { rounded },
        ),
        BuiltinError::ArgumentCount { expected, given } => Error::new(
            vec![token.span.clone()],
            kind::InsufficientArguments { name: func.name(), expected, given },
        ),
    })?;

    Ok(Operand {
        value,
        span: join(&token.span, &args_span),
    })
}

/// Evaluates a sequence of tokens in postfix order, such as the output of
/// [`to_postfix`](calc_parser::parser::to_postfix).
///
/// Numbers and constants are pushed onto the operand stack. A binary operator pops two operands
/// and pushes the result, a negation pops one, and a function pops as many operands as it takes
/// arguments. Parentheses and commas carry no meaning in postfix order and are skipped.
///
/// Exactly one value must be left on the stack at the end.
pub fn eval_postfix(postfix: &[Token], ctxt: &Ctxt) -> Result<f64, Error> {
    let mut stack: Vec<Operand> = Vec::with_capacity(postfix.len());

    for token in postfix {
        let operand = match token.kind {
            TokenKind::Number => Operand {
                value: eval_number(token)?,
                span: token.span.clone(),
            },
            TokenKind::Constant => Operand {
                value: eval_constant(token)?,
                span: token.span.clone(),
            },
            TokenKind::Operator(op) => eval_binary(op, token, &mut stack)?,
            TokenKind::UnaryOperator(op) => eval_unary(op, token, &mut stack)?,
            TokenKind::Function(func) => eval_call(func, token, &mut stack, ctxt)?,
            TokenKind::LeftParen | TokenKind::RightParen | TokenKind::Comma => continue,
        };
        stack.push(operand);
    }

    match stack.len() {
        1 => Ok(stack[0].value),
        remaining => Err(Error::new(
            stack.into_iter().map(|operand| operand.span).collect(),
            kind::MalformedExpression { remaining },
        )),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use calc_parser::{parser::to_postfix, tokenizer::{tokenize_complete, LexMode}};
    use crate::numerical::trig_mode::TrigMode;
    use super::*;

    /// Tokenizes, converts and evaluates the input with the given context.
    fn eval_with(input: &str, ctxt: &Ctxt) -> Result<f64, Error> {
        let tokens = tokenize_complete(input, LexMode::Lenient).unwrap();
        let postfix = to_postfix(&tokens).unwrap();
        eval_postfix(&postfix, ctxt)
    }

    fn eval(input: &str) -> Result<f64, Error> {
        eval_with(input, &Ctxt::default())
    }

    #[test]
    fn binary_expr() {
        assert_eq!(eval("1 + 2").unwrap(), 3.0);
        assert_eq!(eval("1 + 2 * 3").unwrap(), 7.0);
        assert_eq!(eval("10 - 4 - 3").unwrap(), 3.0);
        assert_eq!(eval("2 ^ 3 ^ 2").unwrap(), 512.0);
        assert_eq!(eval("(2 ^ 3) ^ 2").unwrap(), 64.0);
    }

    #[test]
    fn operand_order() {
        assert_eq!(eval("8 / 2").unwrap(), 4.0);
        assert_eq!(eval("2 - 8").unwrap(), -6.0);
        assert_eq!(eval("pow(2, 3)").unwrap(), 8.0);
        assert_eq!(eval("pow(3, 2)").unwrap(), 9.0);
    }

    #[test]
    fn division_by_zero() {
        assert_eq!(eval("1 / 0").unwrap(), f64::INFINITY);
        assert!(eval("0 / 0").unwrap().is_nan());
    }

    #[test]
    fn functions() {
        assert_abs_diff_eq!(eval("sin(30)").unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(eval("cos(60)").unwrap(), 0.5, epsilon = 1e-12);
        assert_eq!(eval("sqrt(16)").unwrap(), 4.0);
        assert_abs_diff_eq!(eval("log(100)").unwrap(), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eval("ln(e)").unwrap(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eval("exp(1)").unwrap(), std::f64::consts::E, epsilon = 1e-12);
        assert_eq!(eval("fact(5)").unwrap(), 120.0);
    }

    #[test]
    fn radians() {
        let ctxt = Ctxt::default().with_trig_mode(TrigMode::Radians);
        assert_abs_diff_eq!(eval_with("sin(pi / 2)", &ctxt).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn bad_number() {
        let err = eval("1.2.3 + 1").unwrap_err();
        assert_eq!(err.spans, vec![0..5]);
        assert_eq!(err.downcast_ref::<kind::BadNumber>(), Some(&kind::BadNumber { lexeme: "1.2.3".to_string() }));
    }

    #[test]
    fn unknown_constant() {
        let err = eval("2 * sine(30)").unwrap_err();
        assert_eq!(err.spans, vec![4..8]);
        assert_eq!(err.downcast_ref::<kind::UnknownConstant>(), Some(&kind::UnknownConstant {
            name: "sine".to_string(),
            suggestions: vec!["sin".to_string()],
        }));
    }

    #[test]
    fn negation() {
        assert_eq!(eval("-5").unwrap(), -5.0);
        assert_eq!(eval("-2^2").unwrap(), -4.0);
        assert_eq!(eval("2^-1").unwrap(), 0.5);
        assert_eq!(eval("5 - -3").unwrap(), 8.0);
        assert_eq!(eval("-(2 + 3) * 2").unwrap(), -10.0);
    }

    #[test]
    fn insufficient_operands() {
        let err = eval("5 +").unwrap_err();
        assert_eq!(err.spans, vec![2..3]);
        assert_eq!(
            err.downcast_ref::<kind::InsufficientOperands>(),
            Some(&kind::InsufficientOperands { symbol: "+", expected: 2 }),
        );
        assert!(eval("* 5").unwrap_err().is::<kind::InsufficientOperands>());

        let err = eval("-").unwrap_err();
        assert_eq!(
            err.downcast_ref::<kind::InsufficientOperands>(),
            Some(&kind::InsufficientOperands { symbol: "-", expected: 1 }),
        );
    }

    #[test]
    fn insufficient_arguments() {
        let err = eval("pow(2)").unwrap_err();
        assert_eq!(err.spans, vec![0..3]);
        assert_eq!(err.downcast_ref::<kind::InsufficientArguments>(), Some(&kind::InsufficientArguments {
            name: "pow",
            expected: 2,
            given: 1,
        }));
        assert!(eval("sqrt()").unwrap_err().is::<kind::InsufficientArguments>());
    }

    #[test]
    fn negative_factorial() {
        let err = eval("fact(-1)").unwrap_err();
        assert_eq!(err.spans, vec![0..4, 5..7]);
        assert!(err.is::<kind::NegativeFactorial>());

        let err = eval("fact(0 - 1)").unwrap_err();
        assert_eq!(err.spans, vec![0..4, 5..10]);
        assert_eq!(
            err.downcast_ref::<kind::NegativeFactorial>(),
            Some(&kind::NegativeFactorial { rounded: -1.0 }),
        );
    }

    #[test]
    fn too_many_values() {
        let err = eval("1 2 3").unwrap_err();
        assert_eq!(err.spans, vec![0..1, 2..3, 4..5]);
        assert_eq!(
            err.downcast_ref::<kind::MalformedExpression>(),
            Some(&kind::MalformedExpression { remaining: 3 }),
        );
    }

    #[test]
    fn empty() {
        let err = eval("").unwrap_err();
        assert!(err.spans.is_empty());
        assert_eq!(
            err.downcast_ref::<kind::MalformedExpression>(),
            Some(&kind::MalformedExpression { remaining: 0 }),
        );
    }

    #[test]
    fn first_error_wins() {
        // the unknown constant is reached before the malformed number
        let err = eval("x + 1.2.3").unwrap_err();
        assert!(err.is::<kind::UnknownConstant>());
    }

    #[test]
    fn skips_structural_tokens() {
        let tokens = tokenize_complete("(2, 3) +", LexMode::Lenient).unwrap();
        assert_eq!(eval_postfix(&tokens[1..], &Ctxt::default()).unwrap(), 5.0);
    }
}
