use crate::interpreter::operator::{BasicArithmetic, Operation, OperationRef};
use crate::interpreter::Number;
use std::fmt;
use std::fmt::Formatter;

/// A discrete part of an expression
#[derive(Copy, Clone)]
pub enum Token {
    Number(Number),
    Operation(OperationRef),
}

impl From<Number> for Token {
    fn from(value: Number) -> Self {
        Token::Number(value)
    }
}

impl From<BasicArithmetic> for Token {
    fn from(operation: BasicArithmetic) -> Self {
        Token::Operation(operation.as_operation())
    }
}

/// Operations are equal when their symbols and priorities are.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Token::Number(a), Token::Number(b)) => a == b,
            (Token::Operation(a), Token::Operation(b)) => {
                a.symbol() == b.symbol() && a.precedence_eq(*b)
            }
            _ => false,
        }
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operation(operation) => write!(f, "{}", operation.symbol()),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
