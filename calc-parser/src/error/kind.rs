use ariadne::Fmt;
use calc_attrs::ErrorKind;
use calc_error::EXPR;

/// A character that is not part of the expression language was found while tokenizing in strict
/// mode.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    stage = Lex,
    message = format!("unexpected character `{}`", character),
    labels = ["this character"],
    help = format!(
        "expressions may only contain numbers, names, `,`, `(`, `)`, and the operators {}",
        "+ - * / ^".fg(EXPR)
    ),
)]
pub struct UnexpectedCharacter {
    /// The character that could not be classified.
    pub character: char,
}

/// A comma was found outside of a function call's parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    stage = Syntax,
    message = "misplaced comma",
    labels = ["this comma is not inside a function call"],
    help = format!("commas separate function arguments, as in {}", "pow(2, 3)".fg(EXPR)),
)]
pub struct MisplacedComma;

/// A parenthesis has no matching partner.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    stage = Syntax,
    message = "unmatched parenthesis",
    labels = ["this parenthesis has no partner"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnmatchedParen {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}
