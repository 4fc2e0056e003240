//! Symbolic simplification and evaluation of lambda-calc expressions.
//!
//! An expression parsed by [`lambda_parser`] goes through the following stages before it is
//! turned into a number:
//!
//! 1. Calls to user-defined functions are expanded in place ([`symbolic::expand_calls`]).
//! 2. Chains of `+` / `-` and `*` / `/` are flattened into n-ary nodes
//!    ([`symbolic::rebuild`]).
//! 3. The tree is rewritten with the [`RuleSet::Unwind`] and then the [`RuleSet::Rewind`] rules
//!    ([`symbolic::simplify`]).
//! 4. The result is folded into a number ([`eval::evaluate`]).
//!
//! The [`Session`] type runs this pipeline for each line of input, and also handles the `define`,
//! `drop`, `solve` and `list` commands.
//!
//! ```
//! use lambda_compute::{Output, Session};
//!
//! let mut session = Session::default();
//! session.execute("define x = 2+3").unwrap();
//! assert_eq!(session.execute("x*x").unwrap(), Output::Value(25.0));
//! ```
//!
//! [`RuleSet::Unwind`]: symbolic::simplify::RuleSet::Unwind
//! [`RuleSet::Rewind`]: symbolic::simplify::RuleSet::Rewind

pub mod ctxt;
pub mod eval;
pub mod session;
pub mod symbolic;

pub use ctxt::{Ctxt, Func};
pub use eval::evaluate;
pub use session::{EnvEvent, Output, Session};
