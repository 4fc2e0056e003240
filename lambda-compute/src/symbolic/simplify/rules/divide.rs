//! Simplification rules for division, including division by zero.

use crate::{ctxt::Ctxt, eval::evaluate, symbolic::error::SimplifyDivisionByZero};
use lambda_error::Error;
use lambda_parser::ast::Node;
use super::do_divide;

/// `a/1 = a`
pub fn divide_one(node: &Node, _: &Ctxt) -> Result<Option<Node>, Error> {
    Ok(do_divide(node, |lhs, rhs| rhs.is_one().then(|| lhs.clone())))
}

/// `0/a = 0`
///
/// Fails if the divisor is a literal zero, including the reciprocal `0^-n` the rebuilder produces
/// for a division. If the numerator is zero, the divisor is evaluated to decide whether the
/// division is `0/0`; a divisor that cannot be evaluated leaves the node unchanged.
pub fn zero_divide(node: &Node, ctxt: &Ctxt) -> Result<Option<Node>, Error> {
    match node {
        Node::Divide(_, rhs) if rhs.is_zero() => Err(SimplifyDivisionByZero.into()),
        Node::Divide(lhs, rhs) if lhs.is_zero() => match evaluate(rhs, ctxt, true) {
            Ok(value) if value == 0.0 => Err(SimplifyDivisionByZero.into()),
            Ok(_) => Ok(Some(Node::Number(0.0))),
            Err(_) => Ok(None),
        },
        Node::Power(base, exp) if base.is_zero() && exp.as_number().is_some_and(|exp| exp < 0.0) => {
            Err(SimplifyDivisionByZero.into())
        },
        _ => Ok(None),
    }
}

/// `a/a = 1`
pub fn divide_self(node: &Node, _: &Ctxt) -> Result<Option<Node>, Error> {
    Ok(do_divide(node, |lhs, rhs| (lhs == rhs).then(|| Node::Number(1.0))))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn divide_by_one() {
        let ctxt = Ctxt::new();
        let node = Node::divide(Node::var("a"), Node::Number(1.0));
        assert_eq!(divide_one(&node, &ctxt).unwrap(), Some(Node::var("a")));
    }

    #[test]
    fn zero_numerator() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("y", Node::Number(3.0));

        let node = Node::divide(Node::Number(0.0), Node::var("y"));
        assert_eq!(zero_divide(&node, &ctxt).unwrap(), Some(Node::Number(0.0)));

        // `z` is undefined, so nothing is known about the divisor
        let node = Node::divide(Node::Number(0.0), Node::var("z"));
        assert_eq!(zero_divide(&node, &ctxt).unwrap(), None);

        let node = Node::divide(
            Node::Number(0.0),
            Node::minus(Node::var("y"), Node::Number(3.0)),
        );
        assert!(zero_divide(&node, &ctxt).unwrap_err().is::<SimplifyDivisionByZero>());
    }

    #[test]
    fn zero_divisor() {
        let ctxt = Ctxt::new();
        let node = Node::divide(Node::var("a"), Node::Number(0.0));
        assert!(zero_divide(&node, &ctxt).unwrap_err().is::<SimplifyDivisionByZero>());

        let node = Node::recip(Node::Number(0.0));
        assert!(zero_divide(&node, &ctxt).unwrap_err().is::<SimplifyDivisionByZero>());

        let node = Node::power(Node::Number(0.0), Node::Number(2.0));
        assert_eq!(zero_divide(&node, &ctxt).unwrap(), None);
    }

    #[test]
    fn divide_by_self() {
        let ctxt = Ctxt::new();
        let sum = Node::Plus(vec![Node::var("a"), Node::var("b")]);
        let node = Node::divide(sum.clone(), Node::Plus(vec![Node::var("b"), Node::var("a")]));
        assert_eq!(divide_self(&node, &ctxt).unwrap(), Some(Node::Number(1.0)));

        let node = Node::divide(sum, Node::var("a"));
        assert_eq!(divide_self(&node, &ctxt).unwrap(), None);
    }
}
