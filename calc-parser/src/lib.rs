//! Tokenizer and [Shunting-Yard] converter for scientific calculator expressions.
//!
//! An expression such as `sin(30) + sqrt(16)` is first split into [`Token`]s by
//! [`tokenize_complete`], then reordered into postfix (Reverse Polish) notation by [`to_postfix`],
//! ready to be evaluated with a single operand stack.
//!
//! ```
//! use calc_parser::{parser::to_postfix, tokenizer::{tokenize_complete, LexMode}};
//!
//! let tokens = tokenize_complete("5 + 8 * 2", LexMode::Lenient).unwrap();
//! let postfix = to_postfix(&tokens).unwrap();
//! let rpn = postfix.iter().map(|t| t.lexeme).collect::<Vec<_>>().join(" ");
//! assert_eq!(rpn, "5 8 2 * +");
//! ```
//!
//! [Shunting-Yard]: https://en.wikipedia.org/wiki/Shunting_yard_algorithm
//! [`Token`]: tokenizer::Token
//! [`tokenize_complete`]: tokenizer::tokenize_complete
//! [`to_postfix`]: parser::to_postfix

pub mod error;
pub mod parser;
pub mod tokenizer;
