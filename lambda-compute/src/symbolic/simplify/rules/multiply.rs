//! Simplification rules for products, including combining like factors.

use crate::ctxt::Ctxt;
use lambda_error::Error;
use lambda_parser::ast::Node;
use std::collections::BTreeMap;
use super::do_multiply;

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(node: &Node, _: &Ctxt) -> Result<Option<Node>, Error> {
    Ok(do_multiply(node, |factors| {
        factors.iter()
            .any(Node::is_zero)
            .then(|| Node::Number(0.0))
    }))
}

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(node: &Node, _: &Ctxt) -> Result<Option<Node>, Error> {
    Ok(do_multiply(node, |factors| {
        let new_factors = factors.iter()
            .filter(|factor| !factor.is_one())
            .cloned()
            .collect::<Vec<_>>();

        if new_factors.len() == factors.len() {
            None
        } else if new_factors.is_empty() {
            Some(Node::Number(1.0))
        } else {
            Some(Node::Multiply(new_factors))
        }
    }))
}

/// Combines like factors.
///
/// `2*3 = 6`
/// `a*a = a^2`
/// `a^2*a^3 = a^5`
/// `a*(-b) = -1*a*b`
/// `a*2^-1 = 0.5a`
///
/// Numbers and reciprocals of numbers are multiplied into one coefficient, and the exponents of
/// each variable are summed. Factors of any other shape are kept as they are.
pub fn combine_like_factors(node: &Node, _: &Ctxt) -> Result<Option<Node>, Error> {
    Ok(do_multiply(node, |factors| {
        let mut coefficient = 1.0;
        let mut numbers = 0;
        let mut negations = 0;
        let mut exponents: BTreeMap<&str, f64> = BTreeMap::new();
        let mut new_factors = Vec::new();

        for factor in factors {
            match factor {
                Node::Number(value) => {
                    coefficient *= value;
                    numbers += 1;
                },
                Node::Variable(name) => *exponents.entry(name).or_default() += 1.0,
                Node::Minus(lhs, rhs) if lhs.is_zero() && rhs.as_variable().is_some() => {
                    if let Some(name) = rhs.as_variable() {
                        *exponents.entry(name).or_default() += 1.0;
                        coefficient = -coefficient;
                        negations += 1;
                    }
                },
                Node::Power(base, exp) => match (&**base, &**exp) {
                    (Node::Variable(name), Node::Number(exp)) => {
                        *exponents.entry(name).or_default() += exp;
                    },
                    (Node::Number(base), Node::Number(exp)) if *exp == -1.0 => {
                        coefficient /= base;
                        numbers += 1;
                    },
                    _ => new_factors.push(factor.clone()),
                },
                other => new_factors.push(other.clone()),
            }
        }

        if coefficient != 1.0 {
            new_factors.push(Node::Number(coefficient));
        }

        for (name, exp) in exponents {
            if exp == 1.0 {
                new_factors.push(Node::var(name));
            } else if exp != 0.0 {
                new_factors.push(Node::power(Node::var(name), Node::Number(exp)));
            }
        }

        if numbers < 2 && negations == 0 && new_factors.len() == factors.len() {
            None
        } else if new_factors.is_empty() {
            Some(Node::Number(1.0))
        } else {
            Some(Node::Multiply(new_factors))
        }
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn mul(factors: Vec<Node>) -> Node {
        Node::Multiply(factors)
    }

    #[test]
    fn zero_and_one() {
        let ctxt = Ctxt::new();
        let node = mul(vec![Node::var("a"), Node::Number(0.0)]);
        assert_eq!(multiply_zero(&node, &ctxt).unwrap(), Some(Node::Number(0.0)));

        let node = mul(vec![Node::Number(1.0), Node::var("a"), Node::Number(1.0)]);
        assert_eq!(multiply_one(&node, &ctxt).unwrap(), Some(mul(vec![Node::var("a")])));

        let node = mul(vec![Node::Number(1.0)]);
        assert_eq!(multiply_one(&node, &ctxt).unwrap(), Some(Node::Number(1.0)));
    }

    #[test]
    fn exponents_are_summed() {
        let ctxt = Ctxt::new();
        let node = mul(vec![
            Node::var("a"),
            Node::var("b"),
            Node::power(Node::var("a"), Node::Number(3.0)),
            Node::power(Node::var("b"), Node::Number(-1.0)),
            Node::power(Node::var("c"), Node::var("n")),
        ]);
        assert_eq!(combine_like_factors(&node, &ctxt).unwrap(), Some(mul(vec![
            Node::power(Node::var("c"), Node::var("n")),
            Node::power(Node::var("a"), Node::Number(4.0)),
        ])));
    }

    #[test]
    fn coefficient_with_reciprocals() {
        let ctxt = Ctxt::new();
        let node = mul(vec![
            Node::Number(3.0),
            Node::var("x"),
            Node::recip(Node::Number(4.0)),
        ]);
        assert_eq!(combine_like_factors(&node, &ctxt).unwrap(), Some(mul(vec![
            Node::Number(0.75),
            Node::var("x"),
        ])));
    }

    #[test]
    fn negated_variables() {
        let ctxt = Ctxt::new();
        let node = mul(vec![Node::var("a"), Node::neg(Node::var("b"))]);
        assert_eq!(combine_like_factors(&node, &ctxt).unwrap(), Some(mul(vec![
            Node::Number(-1.0),
            Node::var("a"),
            Node::var("b"),
        ])));
    }

    #[test]
    fn everything_cancels() {
        let ctxt = Ctxt::new();
        let node = mul(vec![Node::var("x"), Node::recip(Node::var("x"))]);
        assert_eq!(combine_like_factors(&node, &ctxt).unwrap(), Some(Node::Number(1.0)));
    }

    #[test]
    fn already_combined() {
        let ctxt = Ctxt::new();
        let node = mul(vec![Node::var("a"), Node::Number(2.0)]);
        assert_eq!(combine_like_factors(&node, &ctxt).unwrap(), None);

        let node = mul(vec![
            Node::Number(6.0),
            Node::power(Node::var("a"), Node::Number(2.0)),
        ]);
        assert_eq!(combine_like_factors(&node, &ctxt).unwrap(), None);
    }
}
