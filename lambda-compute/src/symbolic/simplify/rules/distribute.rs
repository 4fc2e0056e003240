//! Simplification rules related to the distributive property.

use crate::ctxt::Ctxt;
use lambda_error::Error;
use lambda_parser::ast::Node;
use super::{do_add, do_multiply};

/// Multiplies two nodes, distributing over sums and appending to products.
fn multiply_nodes(lhs: Node, rhs: Node) -> Node {
    if lhs.is_one() {
        return rhs;
    }
    if rhs.is_one() {
        return lhs;
    }

    match (lhs, rhs) {
        (Node::Plus(lhs_terms), Node::Plus(rhs_terms)) => Node::Plus(
            lhs_terms.iter()
                .flat_map(|a| rhs_terms.iter().map(move |b| multiply_nodes(a.clone(), b.clone())))
                .collect(),
        ),
        (Node::Plus(terms), other) | (other, Node::Plus(terms)) => Node::Plus(
            terms.into_iter()
                .map(|term| multiply_nodes(term, other.clone()))
                .collect(),
        ),
        (Node::Multiply(mut lhs_factors), Node::Multiply(rhs_factors)) => {
            lhs_factors.extend(rhs_factors);
            Node::Multiply(lhs_factors)
        },
        (Node::Multiply(mut factors), other) | (other, Node::Multiply(mut factors)) => {
            factors.push(other);
            Node::Multiply(factors)
        },
        (lhs, rhs) => Node::Multiply(vec![lhs, rhs]),
    }
}

/// `a*(b+c) = a*b + a*c`
/// `(a+b)*(c+d) = a*c + a*d + b*c + b*d`
pub fn distribute(node: &Node, _: &Ctxt) -> Result<Option<Node>, Error> {
    Ok(do_multiply(node, |factors| {
        if !factors.iter().any(|factor| matches!(factor, Node::Plus(_))) {
            return None;
        }

        Some(factors.iter().cloned().fold(Node::Number(1.0), multiply_nodes))
    }))
}

/// Returns true if `factor` can be divided out of `term`, such that the result simplifies to a
/// term without it.
///
/// A number can be divided out of a number, or out of a product with a numeric coefficient. Any
/// other factor must be `term` itself, a factor of it, the base of a positive power in it, or the
/// negated side of a negation in it.
fn can_factor(factor: &Node, term: &Node) -> bool {
    if factor.as_number().is_some() {
        return match term {
            Node::Number(_) => true,
            Node::Multiply(factors) => factors.iter().any(|inner| inner.as_number().is_some()),
            _ => false,
        };
    }

    match term {
        Node::Minus(lhs, rhs) if lhs.is_zero() => factor == &**rhs,
        Node::Multiply(factors) => factors.iter().any(|inner| can_factor(factor, inner)),
        Node::Power(base, exp) if exp.as_number().is_some_and(|exp| exp > 0.0) => factor == &**base,
        _ => factor == term,
    }
}

/// Returns the factor to try to pull out of a sum for the given factor of one of its terms.
///
/// Only numbers, variables and numeric powers of variables are tried, since those are the factors
/// that cancel when a term is divided by them. A positive power offers its base, so `x^3` gives
/// `x`. A negative power offers itself. `0` and `1` are never offered.
fn candidate(factor: &Node) -> Option<&Node> {
    match factor {
        Node::Number(value) if *value != 0.0 && *value != 1.0 => Some(factor),
        Node::Variable(_) => Some(factor),
        Node::Power(base, exp) if base.as_variable().is_some() => match exp.as_number()? {
            exp if exp > 0.0 => Some(&**base),
            exp if exp < 0.0 => Some(factor),
            _ => None,
        },
        _ => None,
    }
}

/// Divides the numeric coefficient of `term` by `value`.
///
/// The quotient is computed directly, so a term whose coefficient is `value` is left with no
/// coefficient at all.
fn divide_coefficient(term: &Node, value: f64) -> Node {
    match term {
        Node::Number(coefficient) => Node::Number(coefficient / value),
        Node::Multiply(factors) => {
            let mut factors = factors.clone();
            let coefficient = factors.iter()
                .enumerate()
                .find_map(|(index, factor)| Some((index, factor.as_number()?)));
            if let Some((index, coefficient)) = coefficient {
                let quotient = coefficient / value;
                if quotient == 1.0 {
                    factors.remove(index);
                } else {
                    factors[index] = Node::Number(quotient);
                }
            }

            match factors.len() {
                0 => Node::Number(1.0),
                1 => factors.remove(0),
                _ => Node::Multiply(factors),
            }
        },
        other => other.clone(),
    }
}

/// `a*b + a*c = a*(b+c)`
///
/// Each factor of each term is tried as a common factor (see [`candidate`]), in order. The first
/// one that can be divided out of at least two terms is factored out of those terms, by
/// multiplying each of them by the reciprocal of the factor.
pub fn factor(node: &Node, _: &Ctxt) -> Result<Option<Node>, Error> {
    Ok(do_add(node, |terms| {
        if terms.len() < 2 {
            return None;
        }

        for term in terms {
            let factors = match term {
                Node::Multiply(factors) => factors.as_slice(),
                other => std::slice::from_ref(other),
            };

            for common in factors.iter().filter_map(candidate) {
                let (matching, remaining): (Vec<&Node>, Vec<&Node>) = terms.iter()
                    .partition(|term| can_factor(common, term));
                if matching.len() < 2 {
                    continue;
                }

                let inner = matching.into_iter()
                    .map(|term| match common.as_number() {
                        Some(value) => divide_coefficient(term, value),
                        None => {
                            let mut product = vec![Node::recip(common.clone())];
                            match term {
                                Node::Multiply(factors) => product.extend(factors.iter().cloned()),
                                other => product.push(other.clone()),
                            }
                            Node::Multiply(product)
                        },
                    })
                    .collect();

                let mut new_terms = remaining.into_iter().cloned().collect::<Vec<_>>();
                new_terms.push(Node::Multiply(vec![common.clone(), Node::Plus(inner)]));
                return Some(Node::Plus(new_terms));
            }
        }

        None
    }))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn distribute_over_sum() {
        let ctxt = Ctxt::new();
        let node = Node::Multiply(vec![
            Node::var("a"),
            Node::Plus(vec![Node::var("b"), Node::var("c")]),
        ]);
        assert_eq!(distribute(&node, &ctxt).unwrap(), Some(Node::Plus(vec![
            Node::Multiply(vec![Node::var("a"), Node::var("b")]),
            Node::Multiply(vec![Node::var("a"), Node::var("c")]),
        ])));
    }

    #[test]
    fn distribute_sum_over_sum() {
        let ctxt = Ctxt::new();
        let node = Node::Multiply(vec![
            Node::Plus(vec![Node::var("a"), Node::Number(1.0)]),
            Node::Plus(vec![Node::var("b"), Node::var("c")]),
        ]);
        assert_eq!(distribute(&node, &ctxt).unwrap(), Some(Node::Plus(vec![
            Node::Multiply(vec![Node::var("a"), Node::var("b")]),
            Node::Multiply(vec![Node::var("a"), Node::var("c")]),
            Node::var("b"),
            Node::var("c"),
        ])));
    }

    #[test]
    fn nothing_to_distribute() {
        let ctxt = Ctxt::new();
        let node = Node::Multiply(vec![Node::var("a"), Node::var("b")]);
        assert_eq!(distribute(&node, &ctxt).unwrap(), None);
    }

    #[test]
    fn factor_out_variable() {
        let ctxt = Ctxt::new();
        let node = Node::Plus(vec![
            Node::Multiply(vec![Node::var("x"), Node::var("y")]),
            Node::Number(3.0),
            Node::power(Node::var("x"), Node::Number(2.0)),
        ]);
        assert_eq!(factor(&node, &ctxt).unwrap(), Some(Node::Plus(vec![
            Node::Number(3.0),
            Node::Multiply(vec![
                Node::var("x"),
                Node::Plus(vec![
                    Node::Multiply(vec![
                        Node::recip(Node::var("x")),
                        Node::var("x"),
                        Node::var("y"),
                    ]),
                    Node::Multiply(vec![
                        Node::recip(Node::var("x")),
                        Node::power(Node::var("x"), Node::Number(2.0)),
                    ]),
                ]),
            ]),
        ])));
    }

    #[test]
    fn factor_out_reciprocal() {
        let ctxt = Ctxt::new();
        let node = Node::Plus(vec![
            Node::Multiply(vec![Node::var("y"), Node::recip(Node::var("x"))]),
            Node::Multiply(vec![Node::var("z"), Node::recip(Node::var("x"))]),
        ]);
        assert_eq!(factor(&node, &ctxt).unwrap(), Some(Node::Plus(vec![
            Node::Multiply(vec![
                Node::recip(Node::var("x")),
                Node::Plus(vec![
                    Node::Multiply(vec![
                        Node::recip(Node::recip(Node::var("x"))),
                        Node::var("y"),
                        Node::recip(Node::var("x")),
                    ]),
                    Node::Multiply(vec![
                        Node::recip(Node::recip(Node::var("x"))),
                        Node::var("z"),
                        Node::recip(Node::var("x")),
                    ]),
                ]),
            ]),
        ])));
    }

    #[test]
    fn symbolic_exponents_are_not_factored() {
        let ctxt = Ctxt::new();
        let power = Node::power(Node::var("x"), Node::var("n"));
        let node = Node::Plus(vec![
            Node::Multiply(vec![power.clone(), Node::var("y")]),
            Node::Multiply(vec![power, Node::var("z")]),
        ]);
        assert_eq!(factor(&node, &ctxt).unwrap(), None);
    }

    #[test]
    fn factor_out_coefficient() {
        let ctxt = Ctxt::new();
        let node = Node::Plus(vec![
            Node::Multiply(vec![Node::Number(2.0), Node::var("x")]),
            Node::Multiply(vec![Node::Number(4.0), Node::var("y")]),
        ]);
        assert_eq!(factor(&node, &ctxt).unwrap(), Some(Node::Plus(vec![
            Node::Multiply(vec![
                Node::Number(2.0),
                Node::Plus(vec![
                    Node::var("x"),
                    Node::Multiply(vec![Node::Number(2.0), Node::var("y")]),
                ]),
            ]),
        ])));

        // the quotient is exact even where `(1/49) * 49` is not
        let node = Node::Plus(vec![
            Node::Multiply(vec![Node::var("x"), Node::Number(49.0)]),
            Node::Multiply(vec![Node::var("y"), Node::Number(49.0)]),
        ]);
        assert_eq!(factor(&node, &ctxt).unwrap(), Some(Node::Plus(vec![
            Node::Multiply(vec![
                Node::Number(49.0),
                Node::Plus(vec![Node::var("x"), Node::var("y")]),
            ]),
        ])));
    }

    #[test]
    fn factor_out_of_matching_terms_only() {
        let ctxt = Ctxt::new();

        // `y` has no coefficient, so only two of the three terms share the `3`
        let node = Node::Plus(vec![
            Node::Multiply(vec![Node::Number(3.0), Node::var("x")]),
            Node::var("y"),
            Node::Number(6.0),
        ]);
        assert_eq!(factor(&node, &ctxt).unwrap(), Some(Node::Plus(vec![
            Node::var("y"),
            Node::Multiply(vec![
                Node::Number(3.0),
                Node::Plus(vec![Node::var("x"), Node::Number(2.0)]),
            ]),
        ])));
    }

    #[test]
    fn single_match_is_not_factored() {
        let ctxt = Ctxt::new();
        let node = Node::Plus(vec![
            Node::Multiply(vec![Node::Number(2.0), Node::var("x")]),
            Node::var("y"),
            Node::power(Node::var("z"), Node::Number(2.0)),
        ]);
        assert_eq!(factor(&node, &ctxt).unwrap(), None);
    }

    #[test]
    fn no_common_factor() {
        let ctxt = Ctxt::new();
        let node = Node::Plus(vec![Node::var("a"), Node::var("b"), Node::Number(1.0)]);
        assert_eq!(factor(&node, &ctxt).unwrap(), None);
    }
}
