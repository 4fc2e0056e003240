//! Implementation of the simplification rules.
//!
//! Each rule in this module is a function that takes the node to simplify and the context, and
//! returns `Ok(Some(node))` with the rewritten node if the rule applies, `Ok(None)` if the rule
//! does not apply, or an error if the node cannot be simplified at all. Rules only look at the
//! node they are given and its direct children; the simplifier takes care of the recursion.

pub mod add;
pub mod distribute;
pub mod divide;
pub mod fold;
pub mod multiply;
pub mod power;

use crate::ctxt::Ctxt;
use lambda_error::Error;
use lambda_parser::ast::Node;
use std::fmt;
use super::step::Step;

/// The signature shared by every rule.
pub type RuleFn = fn(&Node, &Ctxt) -> Result<Option<Node>, Error>;

/// A named rewrite rule.
#[derive(Clone, Copy)]
pub struct Rule {
    /// The step recorded when the rule applies.
    pub step: Step,

    /// Rewrites the node, if the rule applies to it.
    pub apply: RuleFn,
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Rule").field(&self.step).finish()
    }
}

const fn rule(step: Step, apply: RuleFn) -> Rule {
    Rule { step, apply }
}

/// Expands the expression and combines like terms and factors.
pub const UNWIND: &[Rule] = &[
    rule(Step::AddZero, add::add_zero),
    rule(Step::SubZero, add::sub_zero),
    rule(Step::SingleOperand, add::single_operand),
    rule(Step::MultiplyZero, multiply::multiply_zero),
    rule(Step::MultiplyOne, multiply::multiply_one),
    rule(Step::DivideOne, divide::divide_one),
    rule(Step::ZeroDivide, divide::zero_divide),
    rule(Step::DivideSelf, divide::divide_self),
    rule(Step::PowerZero, power::power_zero),
    rule(Step::MultiplyPowers, power::multiply_powers),
    rule(Step::CombineLikeTerms, add::combine_like_terms),
    rule(Step::CombineLikeFactors, multiply::combine_like_factors),
    rule(Step::Distribute, distribute::distribute),
    rule(Step::ConstantFold, fold::constant_fold),
];

/// Cleans up the expression and factors common factors out of sums.
pub const REWIND: &[Rule] = &[
    rule(Step::AddZero, add::add_zero),
    rule(Step::SubZero, add::sub_zero),
    rule(Step::SingleOperand, add::single_operand),
    rule(Step::MultiplyZero, multiply::multiply_zero),
    rule(Step::MultiplyOne, multiply::multiply_one),
    rule(Step::DivideOne, divide::divide_one),
    rule(Step::ZeroDivide, divide::zero_divide),
    rule(Step::DivideSelf, divide::divide_self),
    rule(Step::CombineLikeTerms, add::combine_like_terms),
    rule(Step::CombineLikeFactors, multiply::combine_like_factors),
    rule(Step::ConstantFold, fold::constant_fold),
    rule(Step::PowerZero, power::power_zero),
    rule(Step::MultiplyPowers, power::multiply_powers),
    rule(Step::Factor, distribute::factor),
];

/// The rules applied to both sides of an equation.
pub const SOLVE: &[Rule] = &[
    rule(Step::AddZero, add::add_zero),
    rule(Step::SubZero, add::sub_zero),
    rule(Step::MultiplyZero, multiply::multiply_zero),
    rule(Step::MultiplyOne, multiply::multiply_one),
    rule(Step::DivideOne, divide::divide_one),
    rule(Step::ZeroDivide, divide::zero_divide),
    rule(Step::DivideSelf, divide::divide_self),
    rule(Step::PowerSelf, power::power_self),
    rule(Step::AddPowers, power::add_powers),
    rule(Step::MultiplyPowers, power::multiply_powers),
    rule(Step::ConstantFold, fold::constant_fold),
];

/// If the node is a sum, calls the given transformation function with the terms.
///
/// Returns `Some(node)` with the transformed node if a transformation was applied.
pub(crate) fn do_add(node: &Node, f: impl Fn(&[Node]) -> Option<Node>) -> Option<Node> {
    if let Node::Plus(terms) = node {
        f(terms)
    } else {
        None
    }
}

/// If the node is a product, calls the given transformation function with the factors.
///
/// Returns `Some(node)` with the transformed node if a transformation was applied.
pub(crate) fn do_multiply(node: &Node, f: impl Fn(&[Node]) -> Option<Node>) -> Option<Node> {
    if let Node::Multiply(factors) = node {
        f(factors)
    } else {
        None
    }
}

/// If the node is a division, calls the given transformation function with the left and right
/// side.
pub(crate) fn do_divide(node: &Node, f: impl Fn(&Node, &Node) -> Option<Node>) -> Option<Node> {
    if let Node::Divide(lhs, rhs) = node {
        f(lhs, rhs)
    } else {
        None
    }
}

/// If the node is a power, calls the given transformation function with the base and exponent.
pub(crate) fn do_power(node: &Node, f: impl Fn(&Node, &Node) -> Option<Node>) -> Option<Node> {
    if let Node::Power(base, exp) = node {
        f(base, exp)
    } else {
        None
    }
}

/// Splits a term into its numeric coefficient and the rest of its factors.
///
/// - `5` -> `(5, [])`
/// - `3*a*b` -> `(3, [a, b])`
/// - `a` -> `(1, [a])`
pub(crate) fn split_coefficient(node: &Node) -> (f64, Vec<Node>) {
    match node {
        Node::Number(value) => (*value, Vec::new()),
        Node::Multiply(factors) => {
            let mut coefficient = 1.0;
            let mut rest = Vec::new();
            for factor in factors {
                match factor {
                    Node::Number(value) => coefficient *= value,
                    other => rest.push(other.clone()),
                }
            }
            (coefficient, rest)
        },
        other => (1.0, vec![other.clone()]),
    }
}

/// If `0 - node`, returns `node`.
pub(crate) fn negated(node: &Node) -> Option<&Node> {
    match node {
        Node::Minus(lhs, rhs) if lhs.is_zero() => Some(rhs),
        _ => None,
    }
}
