pub mod token;

use crate::{
    error::{kind, Error},
    parser::{BinOpKind, UnaryOpKind},
};
use logos::{Lexer, Logos};
pub use token::{RawToken, Token, TokenKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the tokenizer treats characters that are not part of the expression language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LexMode {
    /// Silently drop the character and keep going.
    #[default]
    Lenient,

    /// Fail with [`kind::UnexpectedCharacter`].
    Strict,
}

/// Returns an iterator over the raw lexemes produced by the tokenizer. Whitespace is skipped.
pub fn tokenize(input: &str) -> Lexer<RawToken> {
    RawToken::lexer(input)
}

/// Turns a `-` into a negation if it appears where an operand is expected.
fn resolve_prefix(kind: TokenKind, prev: Option<&Token>) -> TokenKind {
    match kind {
        TokenKind::Operator(BinOpKind::Sub) if prev.map_or(true, |prev| prev.kind.expects_operand()) => {
            TokenKind::UnaryOperator(UnaryOpKind::Neg)
        },
        kind => kind,
    }
}

/// Returns an owned array containing all of the tokens produced by the tokenizer.
///
/// In [`LexMode::Strict`], the first character that cannot be classified produces an error.
pub fn tokenize_complete(input: &str, mode: LexMode) -> Result<Box<[Token]>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens: Vec<Token> = Vec::new();

    while let Some(raw) = lexer.next() {
        let lexeme = lexer.slice();
        match raw.ok().and_then(|raw| raw.classify(lexeme)) {
            Some(kind) => {
                let kind = resolve_prefix(kind, tokens.last());
                tokens.push(Token {
                    span: lexer.span(),
                    kind,
                    lexeme,
                });
            },
            None if mode == LexMode::Strict => {
                let span = lexer.span();
                let character = input[span.start..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(Error::new(
                    vec![span.start..span.start + character.len_utf8()],
                    kind::UnexpectedCharacter { character },
                ));
            },
            None => (),
        }
    }

    Ok(tokens.into_boxed_slice())
}
