//! Constant folding.

use crate::{ctxt::Ctxt, eval::evaluate};
use lambda_error::Error;
use lambda_parser::ast::Node;

/// `2+3 = 5`
/// `2*3 = 6`
/// `2-3 = -1`
/// `3/2 = 1.5`
///
/// A sum, product, difference or quotient whose operands are all numbers is replaced by its value.
pub fn constant_fold(node: &Node, ctxt: &Ctxt) -> Result<Option<Node>, Error> {
    let foldable = match node {
        Node::Plus(operands) | Node::Multiply(operands) => {
            operands.iter().all(|operand| operand.as_number().is_some())
        },
        Node::Minus(lhs, rhs) | Node::Divide(lhs, rhs) => {
            lhs.as_number().is_some() && rhs.as_number().is_some()
        },
        _ => false,
    };

    if !foldable {
        return Ok(None);
    }

    evaluate(node, ctxt, true).map(|value| Some(Node::Number(value)))
}
