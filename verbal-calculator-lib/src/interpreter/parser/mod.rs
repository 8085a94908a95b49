#[cfg(test)]
pub(crate) mod infix_converter;

use crate::interpreter::error::BuildError;
use crate::interpreter::syntax::expression_chain::{ChainBuilder, Expression};
use crate::interpreter::token::Token;
use itertools::Itertools;

/// Validates the shape of the given tokens and assembles them into an expression chain.
///
/// # Arguments
///
/// * `tokens`: A number followed by any number of operation/number pairs, in infix order.
///
/// returns: The equivalent expression chain.
///
/// # Examples
///
/// ```
/// use verbal_calculator::interpreter::error::BuildError;
/// use verbal_calculator::interpreter::operator::BasicArithmetic;
/// use verbal_calculator::interpreter::parser::parse;
/// use verbal_calculator::interpreter::token::Token;
///
/// let tokens = vec![
///     Token::Number(1),
///     BasicArithmetic::Add.into(),
///     Token::Number(2),
///     BasicArithmetic::Subtract.into(),
/// ];
/// assert_eq!(parse(tokens).unwrap_err(), BuildError::OddTokenCount(3));
/// ```
pub fn parse(tokens: Vec<Token>) -> Result<Expression, BuildError> {
    let mut tokens = tokens.into_iter();

    let first = match tokens.next() {
        None => return Err(BuildError::NoTokens),
        Some(Token::Number(value)) => value,
        Some(token) => return Err(BuildError::FirstTokenNotANumber(token)),
    };

    let remaining = tokens.len();
    if remaining % 2 != 0 {
        return Err(BuildError::OddTokenCount(remaining));
    }

    let mut builder = ChainBuilder::new(first);
    for (index, (operation, number)) in tokens.tuples().enumerate() {
        let position = 1 + index * 2;
        let operation = match operation {
            Token::Operation(operation) => operation,
            found => return Err(BuildError::ExpectedOperation { position, found }),
        };
        let number = match number {
            Token::Number(value) => value,
            found => {
                return Err(BuildError::ExpectedNumber {
                    position: position + 1,
                    found,
                })
            }
        };
        builder.push(operation, number);
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::operator::BasicArithmetic::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_tokens_returns_err() {
        assert_eq!(parse(vec![]).unwrap_err(), BuildError::NoTokens);
    }

    #[test]
    fn lone_number_has_no_operations() {
        assert_eq!(
            parse(vec![Token::Number(7)]).unwrap_err(),
            BuildError::NoOperations
        );
    }

    #[test]
    fn leading_operation_returns_err() {
        let tokens = vec![Multiply.into(), Token::Number(7)];

        assert_eq!(
            parse(tokens).unwrap_err(),
            BuildError::FirstTokenNotANumber(Multiply.into())
        );
    }

    #[test]
    fn trailing_operation_returns_odd_token_count() {
        let tokens = vec![
            Token::Number(1),
            Add.into(),
            Token::Number(2),
            Subtract.into(),
        ];

        assert_eq!(parse(tokens).unwrap_err(), BuildError::OddTokenCount(3));
    }

    #[test]
    fn number_in_operation_slot_returns_err() {
        let tokens = vec![
            Token::Number(1),
            Add.into(),
            Token::Number(2),
            Token::Number(3),
            Token::Number(4),
        ];

        assert_eq!(
            parse(tokens).unwrap_err(),
            BuildError::ExpectedOperation {
                position: 3,
                found: Token::Number(3),
            }
        );
    }

    #[test]
    fn operation_in_number_slot_returns_err() {
        let tokens = vec![Token::Number(1), Add.into(), Divide.into()];

        assert_eq!(
            parse(tokens).unwrap_err(),
            BuildError::ExpectedNumber {
                position: 2,
                found: Divide.into(),
            }
        );
    }

    #[test]
    fn parsed_chain_regenerates_its_tokens() {
        let tokens = vec![
            Token::Number(7),
            Subtract.into(),
            Token::Number(9),
            Multiply.into(),
            Token::Number(2),
            Divide.into(),
            Token::Number(-4),
        ];

        let expression = parse(tokens.clone()).unwrap();

        assert_eq!(expression.to_infix(), tokens);
        assert_eq!(expression.to_string(), "7-9×2÷-4");
    }
}
