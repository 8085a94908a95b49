pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod recognizer;
pub mod syntax;
pub mod token;

use crate::interpreter::syntax::expression_chain::Expression;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::debug;
use string_builder::Builder;

/// The numeric type every expression is evaluated in.
pub type Number = i64;

/// Calculates the value of an arithmetic expression written in words, symbols or both.
///
/// # Arguments
///
/// * `expression`: Free-form text such as "five minus seven plus 17 times two".
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use verbal_calculator::interpreter::calculate;
///
/// let value = calculate("five minus seven plus 17 times two").unwrap();
/// assert_eq!(value, 32);
/// ```
pub fn calculate(expression: &str) -> Result<Number> {
    let chain = convert(expression)?;
    chain
        .evaluate()
        .with_context(|| format!("Could not evaluate {:?}", expression))
}

/// Converts the given input string into an equivalent expression chain.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The equivalent expression chain.
///
/// # Examples
///
/// ```
/// use verbal_calculator::interpreter::convert;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let chain = convert("one + 14 minus 2 times five")?;
/// assert_eq!(chain.to_string(), "1+14-2×5");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Expression> {
    let tokens = lexer::tokenize(expression);
    debug!("Tokenized {:?} into {:?}", expression, tokens);
    let chain = parser::parse(tokens)
        .with_context(|| format!("Could not build an expression from {:?}", expression))?;
    Ok(chain)
}

/// Pretty-prints the given tokens with added whitespace.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use verbal_calculator::interpreter::operator::BasicArithmetic;
/// use verbal_calculator::interpreter::token::Token;
/// use verbal_calculator::interpreter::tokens_to_string;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![
///     Token::Number(7),
///     BasicArithmetic::Multiply.into(),
///     Token::Number(2),
/// ];
/// let pretty_printed_tokens = tokens_to_string(&tokens)?;
/// assert_eq!(pretty_printed_tokens, "7 × 2");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for token in tokens {
        match token {
            Token::Number(value) => builder.append(value.to_string()),
            Token::Operation(_) => {
                builder.append(" ");
                builder.append(token.to_string());
                builder.append(" ");
            }
        }
    }

    builder.string().context("Failed to build token string")
}
