//! Simplification rules for powers.

use crate::ctxt::Ctxt;
use lambda_error::Error;
use lambda_parser::ast::Node;
use super::{do_multiply, do_power};

/// `a^0 = 1`
pub fn power_zero(node: &Node, _: &Ctxt) -> Result<Option<Node>, Error> {
    Ok(do_power(node, |_, exp| exp.is_zero().then(|| Node::Number(1.0))))
}

/// `(a^b)^c = a^(b*c)`
pub fn multiply_powers(node: &Node, _: &Ctxt) -> Result<Option<Node>, Error> {
    Ok(do_power(node, |base, exp| match base {
        Node::Power(inner_base, inner_exp) => Some(Node::power(
            (**inner_base).clone(),
            Node::Multiply(vec![(**inner_exp).clone(), exp.clone()]),
        )),
        _ => None,
    }))
}

/// `a*a = a^2`
pub fn power_self(node: &Node, _: &Ctxt) -> Result<Option<Node>, Error> {
    Ok(do_multiply(node, |factors| match factors {
        [lhs, rhs] if lhs == rhs => Some(Node::power(lhs.clone(), Node::Number(2.0))),
        _ => None,
    }))
}

/// If both nodes are powers of the same base, returns the base and both exponents.
fn same_base(lhs: &Node, rhs: &Node) -> Option<(Node, Node, Node)> {
    match (lhs, rhs) {
        (Node::Power(lhs_base, lhs_exp), Node::Power(rhs_base, rhs_exp)) if lhs_base == rhs_base => {
            Some(((**lhs_base).clone(), (**lhs_exp).clone(), (**rhs_exp).clone()))
        },
        _ => None,
    }
}

/// `a^b*a^c = a^(b+c)`
/// `a^b/a^c = a^(b-c)`
pub fn add_powers(node: &Node, _: &Ctxt) -> Result<Option<Node>, Error> {
    Ok(match node {
        Node::Multiply(factors) => match factors.as_slice() {
            [lhs, rhs] => same_base(lhs, rhs)
                .map(|(base, lhs_exp, rhs_exp)| Node::power(base, Node::Plus(vec![lhs_exp, rhs_exp]))),
            _ => None,
        },
        Node::Divide(lhs, rhs) => same_base(lhs, rhs)
            .map(|(base, lhs_exp, rhs_exp)| Node::power(base, Node::minus(lhs_exp, rhs_exp))),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn pow(base: &str, exp: f64) -> Node {
        Node::power(Node::var(base), Node::Number(exp))
    }

    #[test]
    fn zero_exponent() {
        let ctxt = Ctxt::new();
        assert_eq!(power_zero(&pow("a", 0.0), &ctxt).unwrap(), Some(Node::Number(1.0)));
        assert_eq!(power_zero(&pow("a", 2.0), &ctxt).unwrap(), None);
    }

    #[test]
    fn nested_powers() {
        let ctxt = Ctxt::new();
        let node = Node::power(pow("a", 2.0), Node::var("n"));
        assert_eq!(multiply_powers(&node, &ctxt).unwrap(), Some(Node::power(
            Node::var("a"),
            Node::Multiply(vec![Node::Number(2.0), Node::var("n")]),
        )));
    }

    #[test]
    fn square_of_equal_factors() {
        let ctxt = Ctxt::new();
        let sum = Node::Plus(vec![Node::var("a"), Node::Number(1.0)]);
        let node = Node::Multiply(vec![sum.clone(), sum.clone()]);
        assert_eq!(power_self(&node, &ctxt).unwrap(), Some(Node::power(sum, Node::Number(2.0))));

        let node = Node::Multiply(vec![Node::var("a"), Node::var("a"), Node::var("a")]);
        assert_eq!(power_self(&node, &ctxt).unwrap(), None);
    }

    #[test]
    fn powers_with_same_base() {
        let ctxt = Ctxt::new();
        let node = Node::Multiply(vec![pow("x", 2.0), pow("x", 3.0)]);
        assert_eq!(add_powers(&node, &ctxt).unwrap(), Some(Node::power(
            Node::var("x"),
            Node::Plus(vec![Node::Number(2.0), Node::Number(3.0)]),
        )));

        let node = Node::divide(pow("x", 2.0), pow("x", 3.0));
        assert_eq!(add_powers(&node, &ctxt).unwrap(), Some(Node::power(
            Node::var("x"),
            Node::minus(Node::Number(2.0), Node::Number(3.0)),
        )));

        let node = Node::Multiply(vec![pow("x", 2.0), pow("y", 3.0)]);
        assert_eq!(add_powers(&node, &ctxt).unwrap(), None);
    }
}
