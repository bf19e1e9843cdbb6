use ariadne::Fmt;
use calc_attrs::ErrorKind;
use calc_error::EXPR;

/// A number literal could not be parsed, such as `1.2.3` or `.`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    stage = Eval,
    message = format!("`{}` is not a valid number", lexeme),
    labels = ["this literal"],
    help = format!("a number is made of digits with at most one decimal point, such as {}", "3.14".fg(EXPR)),
)]
pub struct BadNumber {
    /// The text of the literal.
    pub lexeme: String,
}

/// A name is neither a function nor a known constant.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    stage = Eval,
    message = format!("unknown constant `{}`", name),
    labels = ["this name"],
    help = if suggestions.is_empty() {
        format!("the known constants are {} and {}", "pi".fg(EXPR), "e".fg(EXPR))
    } else if suggestions.len() == 1 {
        format!("did you mean `{}`?", (&*suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these? {}",
            suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    },
)]
pub struct UnknownConstant {
    /// The name that was used.
    pub name: String,

    /// Similarly named constants and functions, if any.
    pub suggestions: Vec<String>,
}

/// An operator was applied with fewer operands available than it takes.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    stage = Eval,
    message = format!("not enough operands for the `{}` operator", symbol),
    labels = ["this operator"],
    help = if *expected == 2 {
        format!("the `{}` operator needs a value on each side", symbol)
    } else {
        format!("the `{}` operator needs a value after it", symbol)
    },
)]
pub struct InsufficientOperands {
    /// The symbol of the operator that was applied.
    pub symbol: &'static str,

    /// The number of operands the operator takes.
    pub expected: usize,
}

/// A function was called with fewer values available than it takes arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    stage = Eval,
    message = format!("missing arguments for the `{}` function", name),
    labels = ["this function"],
    help = format!(
        "the `{}` function takes {} argument(s); there are {} value(s) available here",
        name.fg(EXPR),
        expected,
        given
    ),
)]
pub struct InsufficientArguments {
    /// The name of the function that was called.
    pub name: &'static str,

    /// The number of arguments the function takes.
    pub expected: usize,

    /// The number of values that were available.
    pub given: usize,
}

/// The factorial of a negative number was requested.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    stage = Eval,
    message = "the factorial of a negative number is not defined",
    labels = ["this function".to_string(), format!("this argument rounds to {}", rounded)],
    help = "the argument of `fact` must round to zero or a positive integer",
)]
pub struct NegativeFactorial {
    /// The argument, rounded to the nearest integer.
    pub rounded: f64,
}

/// The expression did not reduce to exactly one value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    stage = Eval,
    message = if *remaining == 0 {
        "the expression is empty".to_string()
    } else {
        format!("the expression produced {} values instead of one", remaining)
    },
    labels = std::iter::repeat("this value is never used"),
    help = if *remaining == 0 {
        format!("type an expression, such as {}", "5 + 8".fg(EXPR))
    } else {
        format!("combine the values with an operator, such as {}", "+".fg(EXPR))
    },
)]
pub struct MalformedExpression {
    /// The number of values left on the operand stack.
    pub remaining: usize,
}
