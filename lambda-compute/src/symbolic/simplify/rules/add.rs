//! Simplification rules for sums, including combining like terms.

use crate::ctxt::Ctxt;
use lambda_error::Error;
use lambda_parser::ast::{same_multiset, Node};
use std::collections::BTreeMap;
use super::{do_add, negated, split_coefficient};

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(node: &Node, _: &Ctxt) -> Result<Option<Node>, Error> {
    Ok(do_add(node, |terms| {
        let new_terms = terms.iter()
            .filter(|term| !term.is_zero())
            .cloned()
            .collect::<Vec<_>>();

        if new_terms.len() == terms.len() {
            None
        } else if new_terms.is_empty() {
            Some(Node::Number(0.0))
        } else {
            Some(Node::Plus(new_terms))
        }
    }))
}

/// `a-0 = a`
pub fn sub_zero(node: &Node, _: &Ctxt) -> Result<Option<Node>, Error> {
    Ok(match node {
        Node::Minus(lhs, rhs) if rhs.is_zero() => Some((**lhs).clone()),
        _ => None,
    })
}

/// A sum or product with a single operand is that operand.
pub fn single_operand(node: &Node, _: &Ctxt) -> Result<Option<Node>, Error> {
    Ok(match node {
        Node::Plus(operands) | Node::Multiply(operands) if operands.len() == 1 => {
            Some(operands[0].clone())
        },
        _ => None,
    })
}

/// If `other` is a constant multiple of `term`, returns the factor `k` such that
/// `other = k * term`.
///
/// Only the numeric coefficients may differ; the rest of the factors must match as a multiset.
/// Negations are looked through, so `-(2a)` is `-1` times `2a`.
pub(crate) fn multiple_of(term: &Node, other: &Node) -> Option<f64> {
    if let Some(inner) = negated(other) {
        return multiple_of(term, inner).map(|k| -k);
    }

    let (coefficient, factors) = split_coefficient(term);
    let (other_coefficient, other_factors) = split_coefficient(other);
    if factors.is_empty() || coefficient == 0.0 {
        return None;
    }

    same_multiset(&factors, &other_factors).then(|| other_coefficient / coefficient)
}

/// Combines like terms.
///
/// `2+3 = 5`
/// `a+a = 2a`
/// `a-a = 0`
/// `2ab+3ba = 5ab`
///
/// Numbers are summed, and single variables (or their negations) are counted. Each product is
/// compared against the terms after it, and absorbs those that are a constant multiple of it.
/// Products are only compared against later terms, so `a + 2a` is left as it is.
pub fn combine_like_terms(node: &Node, _: &Ctxt) -> Result<Option<Node>, Error> {
    Ok(do_add(node, |terms| {
        let mut sum = 0.0;
        let mut numbers = 0;
        let mut counts: BTreeMap<&str, f64> = BTreeMap::new();
        let mut new_terms = Vec::new();

        // `None` marks a term that was absorbed by an earlier product
        let mut pending = terms.iter().map(Some).collect::<Vec<_>>();

        for i in 0..pending.len() {
            let Some(term) = pending[i].take() else {
                continue;
            };

            match term {
                Node::Number(value) => {
                    sum += value;
                    numbers += 1;
                },
                Node::Variable(name) => *counts.entry(name).or_default() += 1.0,
                Node::Minus(lhs, rhs) if lhs.is_zero() && rhs.as_variable().is_some() => {
                    if let Some(name) = rhs.as_variable() {
                        *counts.entry(name).or_default() -= 1.0;
                    }
                },
                Node::Multiply(factors) => {
                    let mut multiple = 1.0;
                    for later in pending[i + 1..].iter_mut() {
                        if let Some(k) = later.and_then(|other| multiple_of(term, other)) {
                            multiple += k;
                            *later = None;
                        }
                    }

                    if multiple == 1.0 {
                        new_terms.push(term.clone());
                    } else if multiple != 0.0 {
                        let mut factors = factors.clone();
                        factors.push(Node::Number(multiple));
                        new_terms.push(Node::Multiply(factors));
                    }
                },
                other => new_terms.push(other.clone()),
            }
        }

        if sum != 0.0 {
            new_terms.push(Node::Number(sum));
        }

        for (name, count) in counts {
            if count == 1.0 {
                new_terms.push(Node::var(name));
            } else if count != 0.0 {
                new_terms.push(Node::Multiply(vec![Node::var(name), Node::Number(count)]));
            }
        }

        if numbers < 2 && new_terms.len() == terms.len() {
            None
        } else if new_terms.is_empty() {
            Some(Node::Number(0.0))
        } else {
            Some(Node::Plus(new_terms))
        }
    }))
}
