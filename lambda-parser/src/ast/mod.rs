//! The expression tree shared by every stage of the evaluator.
//!
//! The parser produces a strictly binary tree: `a + b + c` is a [`Node::Plus`] with two children,
//! the first of which is another [`Node::Plus`]. The associative rebuilder in `lambda-compute`
//! later flattens these chains into n-ary nodes, which is the form the rewrite rules expect.
//!
//! # Equality
//!
//! [`PartialEq`] for [`Node`] is structural. The children of [`Node::Plus`] and
//! [`Node::Multiply`] are compared as multisets, so `a + b` equals `b + a` and `a + a + b` does
//! not equal `a + b + b`. Every other kind compares its operands in order.

pub mod assign;
mod eq;
mod fmt;
mod iter;

pub use assign::{AssignTarget, Assignment};
pub use eq::same_multiset;
pub use iter::NodeIter;

use std::convert::Infallible;

/// The kind of a [`Node`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Number,
    Variable,
    Plus,
    Minus,
    Multiply,
    Divide,
    Power,
    Sqrt,
    Equal,
    Function,
    Comma,
}

/// A node of an expression tree. Every child is exclusively owned by its parent.
#[derive(Debug, Clone)]
pub enum Node {
    /// A number literal, such as `2` or `3.5`.
    Number(f64),

    /// A variable, such as `x`.
    Variable(String),

    /// Terms added together. The order of the terms is irrelevant.
    Plus(Vec<Node>),

    /// The right side subtracted from the left side.
    Minus(Box<Node>, Box<Node>),

    /// Factors multiplied together. The order of the factors is irrelevant.
    Multiply(Vec<Node>),

    /// The left side divided by the right side.
    Divide(Box<Node>, Box<Node>),

    /// The left side raised to the power of the right side.
    Power(Box<Node>, Box<Node>),

    /// A generalized root: the first operand is the index, the second the radicand.
    Sqrt(Box<Node>, Box<Node>),

    /// An equation.
    Equal(Box<Node>, Box<Node>),

    /// A call to a user-defined function, with its arguments in order.
    Function(String, Vec<Node>),

    /// A parameter separator.
    Comma,
}

impl Node {
    /// Creates a [`Node::Variable`].
    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates a [`Node::Minus`].
    pub fn minus(lhs: Node, rhs: Node) -> Self {
        Self::Minus(Box::new(lhs), Box::new(rhs))
    }

    /// Creates a [`Node::Divide`].
    pub fn divide(lhs: Node, rhs: Node) -> Self {
        Self::Divide(Box::new(lhs), Box::new(rhs))
    }

    /// Creates a [`Node::Power`].
    pub fn power(base: Node, exp: Node) -> Self {
        Self::Power(Box::new(base), Box::new(exp))
    }

    /// Creates a [`Node::Sqrt`] with the given index and radicand.
    pub fn sqrt(index: Node, radicand: Node) -> Self {
        Self::Sqrt(Box::new(index), Box::new(radicand))
    }

    /// Creates a [`Node::Equal`].
    pub fn equal(lhs: Node, rhs: Node) -> Self {
        Self::Equal(Box::new(lhs), Box::new(rhs))
    }

    /// `0 - node`, the form the parser and rebuilder use for negation.
    pub fn neg(node: Node) -> Self {
        Self::minus(Self::Number(0.0), node)
    }

    /// `node ^ -1`, the form the rebuilder uses for division.
    pub fn recip(node: Node) -> Self {
        Self::power(node, Self::Number(-1.0))
    }

    /// Returns the kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Number(_) => NodeKind::Number,
            Self::Variable(_) => NodeKind::Variable,
            Self::Plus(_) => NodeKind::Plus,
            Self::Minus(..) => NodeKind::Minus,
            Self::Multiply(_) => NodeKind::Multiply,
            Self::Divide(..) => NodeKind::Divide,
            Self::Power(..) => NodeKind::Power,
            Self::Sqrt(..) => NodeKind::Sqrt,
            Self::Equal(..) => NodeKind::Equal,
            Self::Function(..) => NodeKind::Function,
            Self::Comma => NodeKind::Comma,
        }
    }

    /// If the node is a [`Node::Number`], returns its value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the node is the number literal `value`.
    pub fn is_number(&self, value: f64) -> bool {
        self.as_number() == Some(value)
    }

    /// Returns true if the node is the number literal `0`.
    pub fn is_zero(&self) -> bool {
        self.is_number(0.0)
    }

    /// Returns true if the node is the number literal `1`.
    pub fn is_one(&self) -> bool {
        self.is_number(1.0)
    }

    /// If the node is a [`Node::Variable`], returns its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if the node cannot be flattened or distributed at the top level, i.e. it is
    /// neither a [`Node::Plus`] nor a [`Node::Multiply`].
    pub fn is_end_node(&self) -> bool {
        !matches!(self, Self::Plus(_) | Self::Multiply(_))
    }

    /// Returns the `index`-th operand of this node: the children of n-ary nodes in order, or the
    /// left and right side of binary nodes.
    pub fn operand(&self, index: usize) -> Option<&Node> {
        match self {
            Self::Number(_) | Self::Variable(_) | Self::Comma => None,
            Self::Plus(children) | Self::Multiply(children) | Self::Function(_, children) => {
                children.get(index)
            },
            Self::Minus(lhs, rhs)
            | Self::Divide(lhs, rhs)
            | Self::Power(lhs, rhs)
            | Self::Sqrt(lhs, rhs)
            | Self::Equal(lhs, rhs) => match index {
                0 => Some(lhs),
                1 => Some(rhs),
                _ => None,
            },
        }
    }

    /// Rebuilds this node with every operand replaced by the result of `f`. Leaves are cloned
    /// as they are.
    pub fn try_map_operands<E>(
        &self,
        mut f: impl FnMut(&Node) -> Result<Node, E>,
    ) -> Result<Node, E> {
        Ok(match self {
            Self::Number(_) | Self::Variable(_) | Self::Comma => self.clone(),
            Self::Plus(children) => Self::Plus(children.iter().map(&mut f).collect::<Result<_, _>>()?),
            Self::Multiply(children) => {
                Self::Multiply(children.iter().map(&mut f).collect::<Result<_, _>>()?)
            },
            Self::Function(name, args) => {
                Self::Function(name.clone(), args.iter().map(&mut f).collect::<Result<_, _>>()?)
            },
            Self::Minus(lhs, rhs) => Self::minus(f(lhs)?, f(rhs)?),
            Self::Divide(lhs, rhs) => Self::divide(f(lhs)?, f(rhs)?),
            Self::Power(lhs, rhs) => Self::power(f(lhs)?, f(rhs)?),
            Self::Sqrt(lhs, rhs) => Self::sqrt(f(lhs)?, f(rhs)?),
            Self::Equal(lhs, rhs) => Self::equal(f(lhs)?, f(rhs)?),
        })
    }

    /// Rebuilds this node with every operand replaced by the result of `f`.
    pub fn map_operands(&self, mut f: impl FnMut(&Node) -> Node) -> Node {
        match self.try_map_operands(|operand| Ok::<_, Infallible>(f(operand))) {
            Ok(node) => node,
            Err(never) => match never {},
        }
    }

    /// Returns true if the variable with the given name occurs anywhere in this tree.
    pub fn contains_variable(&self, name: &str) -> bool {
        self.post_order_iter().any(|node| node.as_variable() == Some(name))
    }

    /// Returns true if the function with the given name is called anywhere in this tree.
    pub fn contains_call(&self, name: &str) -> bool {
        self.post_order_iter()
            .any(|node| matches!(node, Self::Function(target, _) if target == name))
    }

    /// Returns an iterator that traverses the tree in left-to-right post-order (i.e.
    /// depth-first, children before their parent).
    pub fn post_order_iter(&self) -> NodeIter {
        NodeIter::new(self)
    }
}
