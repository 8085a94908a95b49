use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::Operation;
use crate::interpreter::syntax::expression_chain::{Expression, Neighbor, NodeId};
use crate::interpreter::Number;
use log::{debug, log_enabled, trace, Level};

/// Evaluates an expression chain by repeatedly folding its leftmost highest-priority
/// operation into its neighbors, until a single number remains.
///
/// The chain is rewritten in place; no nodes are allocated while evaluating.
///
/// # Arguments
///
/// * `expression`: The chain to fold. It is consumed, since folding destroys it.
///
/// returns: The value of the expression, or the first error raised by an operation.
///
/// # Examples
///
/// ```
/// use verbal_calculator::interpreter::evaluator::evaluate;
/// use verbal_calculator::interpreter::syntax::expression_chain::Expression;
///
/// let expression = Expression::from_text("five minus seven + 17 * two times nine").unwrap();
/// assert_eq!(evaluate(expression), Ok(304));
/// ```
pub fn evaluate(mut expression: Expression) -> Result<Number, EvaluationError> {
    debug!("Evaluating {}", expression);
    loop {
        if let Some(result) = fold(&mut expression)? {
            debug!("Evaluated to {}", result);
            return Ok(result);
        }
        if log_enabled!(Level::Trace) {
            trace!("Folded into {}", expression);
        }
    }
}

/// The node to reduce next, together with the node whose left neighbor it is.
struct Reducible {
    node: NodeId,
    caller: Option<NodeId>,
}

/// Scans from the tail towards the head for the leftmost node with the highest priority.
///
/// Moving to a predecessor on equal priority is what makes equal operations
/// associate to the left.
fn find_reducible(expression: &Expression) -> Reducible {
    let mut current = expression.tail;
    let mut highest = Reducible {
        node: current,
        caller: None,
    };

    while let Neighbor::Unsolved(predecessor) = expression.node(current).left {
        let candidate = expression.node(predecessor).operation;
        if candidate.precedence_ge(expression.node(highest.node).operation) {
            highest = Reducible {
                node: predecessor,
                caller: Some(current),
            };
        }
        current = predecessor;
    }

    highest
}

/// Performs a single reduction and splices the reduced node out of the chain.
///
/// returns: The final value once the chain has collapsed into a single number.
fn fold(expression: &mut Expression) -> Result<Option<Number>, EvaluationError> {
    let Reducible { node: id, caller } = find_reducible(expression);
    let node = *expression.node(id);

    match (node.left, caller) {
        (Neighbor::Number(left), None) => node.operation.reduce(left, node.right).map(Some),
        (Neighbor::Number(left), Some(caller)) => {
            let result = node.operation.reduce(left, node.right)?;
            expression.node_mut(caller).left = Neighbor::Number(result);
            Ok(None)
        }
        (Neighbor::Unsolved(predecessor), caller) => {
            let left = expression.node(predecessor).right;
            let result = node.operation.reduce(left, node.right)?;
            expression.node_mut(predecessor).right = result;

            match caller {
                Some(caller) => expression.node_mut(caller).left = Neighbor::Unsolved(predecessor),
                // The tail keeps its id and takes over its predecessor instead.
                None => {
                    let absorbed = *expression.node(predecessor);
                    *expression.node_mut(id) = absorbed;
                }
            }
            Ok(None)
        }
    }
}
