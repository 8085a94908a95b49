use crate::interpreter::token::Token;
use crate::interpreter::Number;
use thiserror::Error;

/// Reasons a token sequence cannot be assembled into an expression chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("no tokens to build an expression from")]
    NoTokens,
    #[error("expression must start with a number, found {0}")]
    FirstTokenNotANumber(Token),
    #[error("expected operation/number pairs after the first number, but {0} tokens remain")]
    OddTokenCount(usize),
    #[error("expected an operation at position {position}, found {found}")]
    ExpectedOperation { position: usize, found: Token },
    #[error("expected a number at position {position}, found {found}")]
    ExpectedNumber { position: usize, found: Token },
    #[error("expression contains no operations")]
    NoOperations,
}

/// Failures raised by an operation while the chain is being folded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("division by zero: {dividend} ÷ 0")]
    DivisionByZero { dividend: Number },
    #[error("overflow while evaluating {left} {symbol} {right}")]
    Overflow {
        left: Number,
        symbol: String,
        right: Number,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::operator::BasicArithmetic;

    #[test]
    fn build_error_names_offending_token() {
        let error = BuildError::FirstTokenNotANumber(Token::Operation(
            BasicArithmetic::Multiply.as_operation(),
        ));

        assert_eq!(error.to_string(), "expression must start with a number, found ×");
    }

    #[test]
    fn evaluation_error_shows_failed_application() {
        let error = EvaluationError::Overflow {
            left: i64::MAX,
            symbol: "+".into(),
            right: 1,
        };

        assert_eq!(
            error.to_string(),
            format!("overflow while evaluating {} + 1", i64::MAX)
        );
    }
}
