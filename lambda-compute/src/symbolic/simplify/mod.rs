//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression with the rules of
//! a [`RuleSet`] until none of them applies anywhere in the tree.
//!
//! The tree is walked bottom-up: the children of a node are simplified first, and then the rules
//! are tried on the node itself, in order. The first rule that applies replaces the node, and the
//! replacement is simplified again from scratch. A node no rule applies to is final.
//!
//! After its children are simplified, a [`Node::Plus`] absorbs the children of any child that is
//! itself a [`Node::Plus`], and likewise for [`Node::Multiply`], so the tree stays flat when a rule
//! produces a nested sum or product.
//!
//! The rules expect a tree that was flattened by [`rebuild`](super::rebuild) first.

pub mod rules;
pub mod step;

use crate::ctxt::{Ctxt, MAX_RECURSION_DEPTH};
use crate::symbolic::step_collector::StepCollector;
use lambda_error::Error;
use lambda_parser::{ast::{Node, NodeKind}, parser::error::ExpressionTooComplex};
use log::debug;
use rules::Rule;
use step::Step;

/// The three groups of rules the simplifier can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSet {
    /// Expands the expression: removes identities, combines like terms and factors, and
    /// distributes products over sums.
    Unwind,

    /// Collects the expression back together, factoring common factors out of sums.
    Rewind,

    /// The identities and constant folding used when simplifying equations.
    Solve,
}

impl RuleSet {
    /// Returns the rules of this set, in the order they are tried.
    pub fn rules(self) -> &'static [Rule] {
        match self {
            RuleSet::Unwind => rules::UNWIND,
            RuleSet::Rewind => rules::REWIND,
            RuleSet::Solve => rules::SOLVE,
        }
    }
}

/// Base implementation of the simplification algorithm.
fn inner_simplify(
    node: Node,
    rule_set: RuleSet,
    ctxt: &Ctxt,
    step_collector: &mut dyn StepCollector<Step>,
    depth: usize,
) -> Result<Node, Error> {
    if depth >= MAX_RECURSION_DEPTH {
        return Err(ExpressionTooComplex.into());
    }
    let depth = depth + 1;

    // simplify the children first
    let node = match node {
        Node::Number(_) | Node::Variable(_) | Node::Comma => return Ok(node),
        Node::Plus(terms) => Node::Plus(
            simplify_operands(terms, NodeKind::Plus, rule_set, ctxt, step_collector, depth)?,
        ),
        Node::Multiply(factors) => Node::Multiply(
            simplify_operands(factors, NodeKind::Multiply, rule_set, ctxt, step_collector, depth)?,
        ),
        Node::Function(name, args) => Node::Function(
            name,
            simplify_operands(args, NodeKind::Function, rule_set, ctxt, step_collector, depth)?,
        ),
        Node::Minus(lhs, rhs) => {
            let (lhs, rhs) = simplify_pair(*lhs, *rhs, rule_set, ctxt, step_collector, depth)?;
            Node::minus(lhs, rhs)
        },
        Node::Divide(lhs, rhs) => {
            let (lhs, rhs) = simplify_pair(*lhs, *rhs, rule_set, ctxt, step_collector, depth)?;
            Node::divide(lhs, rhs)
        },
        Node::Power(lhs, rhs) => {
            let (lhs, rhs) = simplify_pair(*lhs, *rhs, rule_set, ctxt, step_collector, depth)?;
            Node::power(lhs, rhs)
        },
        Node::Sqrt(lhs, rhs) => {
            let (lhs, rhs) = simplify_pair(*lhs, *rhs, rule_set, ctxt, step_collector, depth)?;
            Node::sqrt(lhs, rhs)
        },
        Node::Equal(lhs, rhs) => {
            let (lhs, rhs) = simplify_pair(*lhs, *rhs, rule_set, ctxt, step_collector, depth)?;
            Node::equal(lhs, rhs)
        },
    };

    // then try every rule on the node itself
    for rule in rule_set.rules() {
        if let Some(rewritten) = (rule.apply)(&node, ctxt)? {
            debug!("{}: {} => {}", rule.step, node, rewritten);
            step_collector.push(rule.step);
            return inner_simplify(rewritten, rule_set, ctxt, step_collector, depth);
        }
    }

    Ok(node)
}

/// Simplifies the operands of an n-ary node in order. If the node is a sum or a product, operands
/// of the same kind are spliced into it.
fn simplify_operands(
    operands: Vec<Node>,
    kind: NodeKind,
    rule_set: RuleSet,
    ctxt: &Ctxt,
    step_collector: &mut dyn StepCollector<Step>,
    depth: usize,
) -> Result<Vec<Node>, Error> {
    let mut simplified = Vec::with_capacity(operands.len());
    for operand in operands {
        match inner_simplify(operand, rule_set, ctxt, step_collector, depth)? {
            Node::Plus(terms) if kind == NodeKind::Plus => simplified.extend(terms),
            Node::Multiply(factors) if kind == NodeKind::Multiply => simplified.extend(factors),
            operand => simplified.push(operand),
        }
    }
    Ok(simplified)
}

/// Simplifies both sides of a binary node, right side first.
fn simplify_pair(
    lhs: Node,
    rhs: Node,
    rule_set: RuleSet,
    ctxt: &Ctxt,
    step_collector: &mut dyn StepCollector<Step>,
    depth: usize,
) -> Result<(Node, Node), Error> {
    let rhs = inner_simplify(rhs, rule_set, ctxt, step_collector, depth)?;
    let lhs = inner_simplify(lhs, rule_set, ctxt, step_collector, depth)?;
    Ok((lhs, rhs))
}

/// Simplify the given expression with the given set of rules.
///
/// The context is used by the rules that need to evaluate a subexpression, such as constant
/// folding.
pub fn simplify(node: &Node, rule_set: RuleSet, ctxt: &Ctxt) -> Result<Node, Error> {
    inner_simplify(node.clone(), rule_set, ctxt, &mut (), 0)
}

/// Simplify the given expression with the given set of rules. The steps taken by the simplifier
/// are also collected and returned, in the order they were applied.
pub fn simplify_with_steps(
    node: &Node,
    rule_set: RuleSet,
    ctxt: &Ctxt,
) -> Result<(Node, Vec<Step>), Error> {
    let mut steps = Vec::new();
    let node = inner_simplify(node.clone(), rule_set, ctxt, &mut steps, 0)?;
    Ok((node, steps))
}
