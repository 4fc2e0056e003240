//! Flattening of binary operator chains into n-ary nodes.

use crate::ctxt::MAX_RECURSION_DEPTH;
use lambda_error::Error;
use lambda_parser::{ast::Node, parser::error::ExpressionTooComplex};

/// The associative operation whose chain is being collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chain {
    /// `+` and `-`.
    Sum,

    /// `*` and `/`.
    Product,
}

/// Rebuilds the tree so that every maximal chain of `+` / `-` is a single [`Node::Plus`] and every
/// maximal chain of `*` / `/` is a single [`Node::Multiply`].
///
/// The right side of a subtraction is collected as `0 - rhs`, and the right side of a division as
/// `rhs^-1`. Every other node is rebuilt operand by operand.
///
/// ```
/// use lambda_compute::symbolic::rebuild;
/// use lambda_parser::{ast::Node, parse};
///
/// let node = rebuild(&parse("a / b * c").unwrap()).unwrap();
/// assert_eq!(node, Node::Multiply(vec![
///     Node::var("a"),
///     Node::recip(Node::var("b")),
///     Node::var("c"),
/// ]));
/// ```
pub fn rebuild(node: &Node) -> Result<Node, Error> {
    rebuild_at(node, 0)
}

fn rebuild_at(node: &Node, depth: usize) -> Result<Node, Error> {
    if depth >= MAX_RECURSION_DEPTH {
        return Err(ExpressionTooComplex.into());
    }

    let chain = match node {
        Node::Plus(_) | Node::Minus(..) => Chain::Sum,
        Node::Multiply(_) | Node::Divide(..) => Chain::Product,
        _ => return node.try_map_operands(|operand| rebuild_at(operand, depth + 1)),
    };

    let mut operands = Vec::new();
    collect(node, chain, &mut operands, depth + 1)?;
    Ok(match chain {
        Chain::Sum => Node::Plus(operands),
        Chain::Product => Node::Multiply(operands),
    })
}

/// Walks down the chain rooted at `node`, pushing each rebuilt operand of the chain to `out` in
/// left-to-right order.
fn collect(node: &Node, chain: Chain, out: &mut Vec<Node>, depth: usize) -> Result<(), Error> {
    if depth >= MAX_RECURSION_DEPTH {
        return Err(ExpressionTooComplex.into());
    }

    match (chain, node) {
        (Chain::Sum, Node::Plus(terms)) | (Chain::Product, Node::Multiply(terms)) => {
            for term in terms {
                collect(term, chain, out, depth + 1)?;
            }
        },
        (Chain::Sum, Node::Minus(lhs, rhs)) => {
            collect(lhs, chain, out, depth + 1)?;
            out.push(Node::neg(rebuild_at(rhs, depth + 1)?));
        },
        (Chain::Product, Node::Divide(lhs, rhs)) => {
            collect(lhs, chain, out, depth + 1)?;
            out.push(Node::recip(rebuild_at(rhs, depth + 1)?));
        },
        _ => out.push(rebuild_at(node, depth + 1)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use lambda_parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn rebuild_str(input: &str) -> Node {
        rebuild(&parse(input).unwrap()).unwrap()
    }

    #[test]
    fn flatten_sum() {
        assert_eq!(rebuild_str("a+b+c"), Node::Plus(vec![
            Node::var("a"),
            Node::var("b"),
            Node::var("c"),
        ]));
    }

    #[test]
    fn subtraction_becomes_negation() {
        assert_eq!(rebuild_str("a-b+c-d"), Node::Plus(vec![
            Node::var("a"),
            Node::neg(Node::var("b")),
            Node::var("c"),
            Node::neg(Node::var("d")),
        ]));
    }

    #[test]
    fn division_becomes_reciprocal() {
        assert_eq!(rebuild_str("2x/y"), Node::Multiply(vec![
            Node::Number(2.0),
            Node::var("x"),
            Node::recip(Node::var("y")),
        ]));
    }

    #[test]
    fn chains_do_not_mix() {
        assert_eq!(rebuild_str("a*b + c*d*e"), Node::Plus(vec![
            Node::Multiply(vec![Node::var("a"), Node::var("b")]),
            Node::Multiply(vec![Node::var("c"), Node::var("d"), Node::var("e")]),
        ]));
    }

    #[test]
    fn nested_operands_are_rebuilt() {
        assert_eq!(rebuild_str("(a+b+c)^(x/y) - sqrt(1+2+3)"), Node::Plus(vec![
            Node::power(
                Node::Plus(vec![Node::var("a"), Node::var("b"), Node::var("c")]),
                Node::Multiply(vec![Node::var("x"), Node::recip(Node::var("y"))]),
            ),
            Node::neg(Node::sqrt(
                Node::Number(2.0),
                Node::Plus(vec![Node::Number(1.0), Node::Number(2.0), Node::Number(3.0)]),
            )),
        ]));
    }

    #[test]
    fn subtracted_group_stays_grouped() {
        assert_eq!(rebuild_str("a-(b+c)"), Node::Plus(vec![
            Node::var("a"),
            Node::neg(Node::Plus(vec![Node::var("b"), Node::var("c")])),
        ]));
    }

    #[test]
    fn leaves_are_unchanged() {
        assert_eq!(rebuild_str("x"), Node::var("x"));
        assert_eq!(rebuild_str("4"), Node::Number(4.0));
    }
}
