use crate::interpreter::error::{BuildError, EvaluationError};
use crate::interpreter::lexer::{Tokenizer, WordTokenizer};
use crate::interpreter::operator::{Operation, OperationRef};
use crate::interpreter::token::Token;
use crate::interpreter::{evaluator, parser, Number};
use anyhow::{Context, Result};
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Index of a node inside the arena of its expression.
pub type NodeId = usize;

/// What sits to the left of a node's operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Neighbor {
    Number(Number),
    /// A predecessor node whose right operand has not been combined with this node yet.
    Unsolved(NodeId),
}

/// One link of the chain: `(left) operation right`.
#[derive(Debug, Copy, Clone)]
pub struct Node {
    pub(crate) left: Neighbor,
    pub(crate) operation: OperationRef,
    pub(crate) right: Number,
}

impl Node {
    pub fn left(&self) -> Neighbor {
        self.left
    }

    pub fn operation(&self) -> OperationRef {
        self.operation
    }

    pub fn right(&self) -> Number {
        self.right
    }
}

/// An unevaluated expression, stored as a singly-linked chain of nodes that is entered
/// through its rightmost node.
///
/// Evaluation folds the chain in place and therefore consumes the expression.
#[derive(Debug, Clone)]
pub struct Expression {
    pub(crate) nodes: Vec<Node>,
    pub(crate) tail: NodeId,
}

impl Expression {
    /// Builds an expression from alternating numbers and operations.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbal_calculator::interpreter::operator::BasicArithmetic;
    /// use verbal_calculator::interpreter::syntax::expression_chain::Expression;
    /// use verbal_calculator::interpreter::token::Token;
    ///
    /// let tokens = vec![
    ///     Token::Number(1),
    ///     BasicArithmetic::Add.into(),
    ///     Token::Number(2),
    /// ];
    /// let expression = Expression::from_tokens(tokens).unwrap();
    /// assert_eq!(expression.to_string(), "1+2");
    /// ```
    pub fn from_tokens(tokens: Vec<Token>) -> Result<Expression, BuildError> {
        parser::parse(tokens)
    }

    pub fn parse(text: &str, tokenizer: &impl Tokenizer) -> Result<Expression, BuildError> {
        parser::parse(tokenizer.tokenize(text))
    }

    /// Builds an expression from free-form text using the default word tokenizer.
    ///
    /// # Examples
    ///
    /// ```
    /// use verbal_calculator::interpreter::syntax::expression_chain::Expression;
    ///
    /// let expression = Expression::from_text("one + 14 minus 2 times five").unwrap();
    /// assert_eq!(expression.evaluate(), Ok(5));
    /// ```
    pub fn from_text(text: &str) -> Result<Expression, BuildError> {
        Self::parse(text, &WordTokenizer::default())
    }

    pub fn evaluate(self) -> Result<Number, EvaluationError> {
        evaluator::evaluate(self)
    }

    pub fn rightmost_node(&self) -> &Node {
        self.node(self.tail)
    }

    /// Walks the chain from the rightmost node towards the head.
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            expression: self,
            next: Some(self.tail),
        }
    }

    /// Number of operations still present in the chain, never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Regenerates the left-to-right token sequence the chain represents.
    pub fn to_infix(&self) -> Vec<Token> {
        let nodes: Vec<&Node> = self.iter().collect();
        let mut tokens = Vec::with_capacity(nodes.len() * 2 + 1);

        if let Some(Neighbor::Number(first)) = nodes.last().map(|head| head.left) {
            tokens.push(Token::Number(first));
        }
        for node in nodes.into_iter().rev() {
            tokens.push(Token::Operation(node.operation));
            tokens.push(Token::Number(node.right));
        }

        tokens
    }

    /// Renders the links of the chain as a tree, starting at the rightmost node.
    pub fn format_chain(&self) -> Result<String> {
        let mut builder = TreeBuilder::new("expression".into());
        let mut depth = 0;

        for node in self.iter() {
            builder.begin_child(format!("{} {}", node.operation.symbol(), node.right));
            depth += 1;
            if let Neighbor::Number(value) = node.left {
                builder.add_empty_child(value.to_string());
            }
        }
        for _ in 0..depth {
            builder.end_child();
        }

        let mut buffer: Vec<u8> = Vec::new();
        write_tree(&builder.build(), &mut buffer).context("Failed to render chain")?;
        String::from_utf8(buffer).context("Rendered chain is not valid UTF-8")
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for token in self.to_infix() {
            write!(f, "{}", token)?;
        }
        Ok(())
    }
}

pub struct ChainIter<'a> {
    expression: &'a Expression,
    next: Option<NodeId>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.expression.node(self.next?);
        self.next = match node.left {
            Neighbor::Number(_) => None,
            Neighbor::Unsolved(predecessor) => Some(predecessor),
        };
        Some(node)
    }
}

/// Assembles an expression chain left to right, one operation and number at a time.
///
/// # Examples
///
/// ```
/// use verbal_calculator::interpreter::operator::BasicArithmetic::*;
/// use verbal_calculator::interpreter::syntax::expression_chain::ChainBuilder;
///
/// let expression = ChainBuilder::new(1)
///     .op(&Add, 5)
///     .op(&Subtract, 7)
///     .op(&Multiply, 9)
///     .op(&Add, 2)
///     .build()
///     .unwrap();
/// assert_eq!(expression.to_string(), "1+5-7×9+2");
/// assert_eq!(expression.evaluate(), Ok(-55));
/// ```
#[derive(Debug, Clone)]
pub struct ChainBuilder {
    first: Number,
    nodes: Vec<Node>,
}

impl ChainBuilder {
    pub fn new(first: Number) -> ChainBuilder {
        ChainBuilder {
            first,
            nodes: Vec::new(),
        }
    }

    pub fn op(mut self, operation: OperationRef, number: Number) -> ChainBuilder {
        self.push(operation, number);
        self
    }

    /// Appends a node whose left neighbor is the current tail.
    pub fn push(&mut self, operation: OperationRef, number: Number) {
        let left = match self.nodes.len() {
            0 => Neighbor::Number(self.first),
            len => Neighbor::Unsolved(len - 1),
        };
        self.nodes.push(Node {
            left,
            operation,
            right: number,
        });
    }

    pub fn build(self) -> Result<Expression, BuildError> {
        match self.nodes.len() {
            0 => Err(BuildError::NoOperations),
            len => Ok(Expression {
                nodes: self.nodes,
                tail: len - 1,
            }),
        }
    }
}
