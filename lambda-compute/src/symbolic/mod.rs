//! Algebraic manipulation of expressions.
//!
//! # Expression representation
//!
//! The parser produces a strictly binary tree, where `a + b + c` is a [`Node::Plus`] nested in
//! another. Before any rewriting is done, [`rebuild`] flattens these chains into a single n-ary
//! node, and at the same time turns subtraction and division into their additive and
//! multiplicative forms:
//!
//! - `a - b` becomes `a + (0 - b)`
//! - `a / b` becomes `a * b^-1`
//!
//! so that every term of a sum and every factor of a product sits at the same level of the tree.
//! Combining like terms (`x + x = 2x`) only needs to look at one node's children this way.
//!
//! ```
//! use lambda_compute::symbolic::rebuild;
//! use lambda_parser::{ast::Node, parse};
//!
//! let node = rebuild(&parse("a + b - c").unwrap()).unwrap();
//! assert_eq!(node, Node::Plus(vec![
//!     Node::var("a"),
//!     Node::var("b"),
//!     Node::neg(Node::var("c")),
//! ]));
//! ```
//!
//! # Simplification
//!
//! [`simplify()`] rewrites a tree bottom-up using one of three [`RuleSet`]s, restarting on a node
//! every time a rule changes it, until no rule applies anywhere. Each rule is a function that
//! returns the rewritten node if it applies to the node it is given.
//!
//! ```
//! use lambda_compute::{Ctxt, symbolic::{rebuild, simplify, RuleSet}};
//! use lambda_parser::{ast::Node, parse};
//!
//! let node = rebuild(&parse("2+3+a+a").unwrap()).unwrap();
//! let simplified = simplify(&node, RuleSet::Unwind, &Ctxt::new()).unwrap();
//! assert_eq!(simplified, Node::Plus(vec![
//!     Node::Number(5.0),
//!     Node::Multiply(vec![Node::var("a"), Node::Number(2.0)]),
//! ]));
//! ```
//!
//! For more information, see the [`mod@simplify`] module.
//!
//! [`Node::Plus`]: lambda_parser::ast::Node::Plus

pub mod error;
pub mod expand;
pub mod rebuild;
pub mod simplify;
pub mod solve;
pub mod step_collector;

pub use expand::expand_calls;
pub use rebuild::rebuild;
pub use simplify::{simplify, simplify_with_steps, RuleSet};
pub use solve::solve;
pub use step_collector::StepCollector;
