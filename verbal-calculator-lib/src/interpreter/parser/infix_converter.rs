//! A conventional shunting-yard evaluator, used to cross-check the chain folding.

use crate::interpreter::operator::{Operation, OperationRef};
use crate::interpreter::token::Token;
use crate::interpreter::Number;
use anyhow::{Context, Result};
use std::collections::VecDeque;

pub(crate) fn evaluate_infix(infix_tokens: Vec<Token>) -> Result<Number> {
    evaluate_postfix(infix_to_postfix(infix_tokens))
}

fn infix_to_postfix(original_tokens: Vec<Token>) -> Vec<Token> {
    let mut tokens: VecDeque<Token> = VecDeque::from(original_tokens);
    let mut operators: VecDeque<OperationRef> = VecDeque::new();
    let mut output: Vec<Token> = vec![];
    while let Some(token) = tokens.pop_front() {
        match token {
            Token::Number(_) => output.push(token),
            Token::Operation(operation) => {
                parse_operation_token(&mut operators, &mut output, operation)
            }
        };
    }

    while let Some(operation) = operators.pop_front() {
        output.push(Token::Operation(operation));
    }

    output
}

fn parse_operation_token(
    operators: &mut VecDeque<OperationRef>,
    output: &mut Vec<Token>,
    operation: OperationRef,
) {
    while let Some(&top_of_operator_stack) = operators.front() {
        // Every operation is left-associative, so equal priorities are popped too.
        if top_of_operator_stack.precedence_lt(operation) {
            break;
        }
        operators.pop_front();
        output.push(Token::Operation(top_of_operator_stack));
    }

    operators.push_front(operation);
}

fn evaluate_postfix(postfix_tokens: Vec<Token>) -> Result<Number> {
    let mut operands: Vec<Number> = Vec::new();

    for token in postfix_tokens {
        match token {
            Token::Number(value) => operands.push(value),
            Token::Operation(operation) => {
                let right = operands.pop().context("Expected a second operand")?;
                let left = operands.pop().context("Expected a first operand")?;
                operands.push(operation.reduce(left, right)?);
            }
        }
    }

    operands.pop().context("No result found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::operator::BasicArithmetic::*;
    use crate::interpreter::operator::BasicArithmetic;

    fn op(operation: BasicArithmetic) -> Token {
        operation.into()
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 1 + 2
        let infix = vec![Token::Number(1), op(Add), Token::Number(2)];
        let postfix = vec![Token::Number(1), Token::Number(2), op(Add)];

        let actual = infix_to_postfix(infix);

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        // 1 + 2 × 3 - 4
        let infix = vec![
            Token::Number(1),
            op(Add),
            Token::Number(2),
            op(Multiply),
            Token::Number(3),
            op(Subtract),
            Token::Number(4),
        ];
        let postfix = vec![
            Token::Number(1),
            Token::Number(2),
            Token::Number(3),
            op(Multiply),
            op(Add),
            Token::Number(4),
            op(Subtract),
        ];

        let actual = infix_to_postfix(infix);

        assert_eq!(actual, postfix)
    }

    #[test]
    fn evaluate_infix_follows_precedence() {
        // 7 - 9 - 18 - 33 + 15 × 21 - 8 + 1 × 2
        let infix = vec![
            Token::Number(7),
            op(Subtract),
            Token::Number(9),
            op(Subtract),
            Token::Number(18),
            op(Subtract),
            Token::Number(33),
            op(Add),
            Token::Number(15),
            op(Multiply),
            Token::Number(21),
            op(Subtract),
            Token::Number(8),
            op(Add),
            Token::Number(1),
            op(Multiply),
            Token::Number(2),
        ];

        assert_eq!(evaluate_infix(infix).unwrap(), 256);
    }

    #[test]
    fn evaluate_postfix_missing_operand_should_return_err() {
        let postfix = vec![Token::Number(1), op(Add)];

        evaluate_postfix(postfix).expect_err("Should return Err");
    }
}
