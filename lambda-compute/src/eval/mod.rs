//! Numeric evaluation of expression trees.
//!
//! Evaluation follows the node kinds directly: `Plus` is a sum, `Multiply` a product, `Minus`,
//! `Divide` and `Power` apply their operator to the left and right side, and `Sqrt(n, x)` is the
//! `n`-th root of `x`. Variables are resolved through the [`Ctxt`], recursively, since a variable
//! may be defined in terms of other variables.
//!
//! Equations, function calls and separators have no numeric value; reaching one is an error.

pub mod error;

use crate::ctxt::{Ctxt, MAX_RECURSION_DEPTH};
use error::{CyclicVariable, DivisionByZero, NegativeSqrt, UndefinedVariable, UnexpectedNode};
use lambda_error::Error;
use lambda_parser::{ast::Node, parser::error::ExpressionTooComplex};
use log::debug;

/// Evaluates the given expression to a number.
///
/// When `silent` is true, failures are returned without being logged. The simplifier uses this to
/// check whether a subexpression has a value.
pub fn evaluate(node: &Node, ctxt: &Ctxt, silent: bool) -> Result<f64, Error> {
    let result = Evaluator { ctxt, resolving: Vec::new() }.eval(node, 0);
    if let Err(err) = &result {
        if !silent {
            debug!("evaluation of `{}` failed: {}", node, err);
        }
    }
    result
}

/// Walks a tree, keeping track of the variables currently being resolved.
struct Evaluator<'a> {
    ctxt: &'a Ctxt,

    /// The variables whose definitions are being evaluated, outermost first.
    resolving: Vec<&'a str>,
}

impl<'a> Evaluator<'a> {
    fn eval(&mut self, node: &Node, depth: usize) -> Result<f64, Error> {
        if depth >= MAX_RECURSION_DEPTH {
            return Err(ExpressionTooComplex.into());
        }
        let depth = depth + 1;

        match node {
            Node::Number(value) => Ok(*value),
            Node::Variable(name) => self.resolve(name, depth),
            Node::Plus(terms) => {
                let mut sum = 0.0;
                for term in terms {
                    sum += self.eval(term, depth)?;
                }
                Ok(sum)
            },
            Node::Multiply(factors) => {
                let mut product = 1.0;
                for factor in factors {
                    product *= self.eval(factor, depth)?;
                }
                Ok(product)
            },
            Node::Minus(lhs, rhs) => Ok(self.eval(lhs, depth)? - self.eval(rhs, depth)?),
            Node::Divide(lhs, rhs) => {
                let lhs = self.eval(lhs, depth)?;
                let rhs = self.eval(rhs, depth)?;
                if rhs == 0.0 {
                    return Err(DivisionByZero.into());
                }
                Ok(lhs / rhs)
            },
            Node::Power(base, exp) => {
                let base = self.eval(base, depth)?;
                let exp = self.eval(exp, depth)?;

                // `x / 0` after rebuilding
                if base == 0.0 && exp < 0.0 {
                    return Err(DivisionByZero.into());
                }
                Ok(base.powf(exp))
            },
            Node::Sqrt(index, radicand) => {
                let index = self.eval(index, depth)?;
                let radicand = self.eval(radicand, depth)?;
                if radicand <= 0.0 {
                    return Err(NegativeSqrt { radicand }.into());
                }
                Ok(radicand.powf(index.recip()))
            },
            Node::Equal(..) | Node::Function(..) | Node::Comma => {
                Err(UnexpectedNode { kind: node.kind() }.into())
            },
        }
    }

    /// Evaluates the definition of a variable.
    fn resolve(&mut self, name: &str, depth: usize) -> Result<f64, Error> {
        let ctxt = self.ctxt;
        let Some((name, definition)) = ctxt.get_var_entry(name) else {
            return Err(UndefinedVariable { name: name.to_string() }.into());
        };

        if self.resolving.contains(&name) {
            let chain = self.resolving.iter()
                .skip_while(|visited| **visited != name)
                .chain(std::iter::once(&name))
                .map(|visited| visited.to_string())
                .collect();
            return Err(CyclicVariable { chain }.into());
        }

        self.resolving.push(name);
        let value = self.eval(definition, depth);
        self.resolving.pop();
        value
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use lambda_parser::parse;
    use pretty_assertions::assert_eq;
    use super::*;

    fn eval_str(input: &str, ctxt: &Ctxt) -> Result<f64, Error> {
        evaluate(&parse(input).unwrap(), ctxt, false)
    }

    #[test]
    fn arithmetic() {
        let ctxt = Ctxt::new();
        assert_eq!(eval_str("1 + 2 * 3", &ctxt).unwrap(), 7.0);
        assert_eq!(eval_str("(1 + 2) * 3", &ctxt).unwrap(), 9.0);
        assert_eq!(eval_str("10 - 4 - 3", &ctxt).unwrap(), 3.0);
        assert_eq!(eval_str("2^3^2", &ctxt).unwrap(), 64.0);
        assert_eq!(eval_str("-2^2", &ctxt).unwrap(), -4.0);
        assert_eq!(eval_str("7 / 2", &ctxt).unwrap(), 3.5);
    }

    #[test]
    fn n_ary_nodes() {
        let ctxt = Ctxt::new();
        let node = Node::Plus(vec![Node::Number(1.0), Node::Number(2.0), Node::Number(3.0)]);
        assert_eq!(evaluate(&node, &ctxt, true).unwrap(), 6.0);
        assert_eq!(evaluate(&Node::Plus(vec![]), &ctxt, true).unwrap(), 0.0);
        assert_eq!(evaluate(&Node::Multiply(vec![]), &ctxt, true).unwrap(), 1.0);
    }

    #[test]
    fn roots() {
        let ctxt = Ctxt::new();
        assert_float_relative_eq!(eval_str("sqrt(9)", &ctxt).unwrap(), 3.0);
        assert_float_relative_eq!(eval_str("sqrt^3(8)", &ctxt).unwrap(), 2.0);
        assert!(eval_str("sqrt(-4)", &ctxt).unwrap_err().is::<NegativeSqrt>());
        assert!(eval_str("sqrt(0)", &ctxt).unwrap_err().is::<NegativeSqrt>());
    }

    #[test]
    fn division_by_zero() {
        let ctxt = Ctxt::new();
        assert!(eval_str("5/0", &ctxt).unwrap_err().is::<DivisionByZero>());

        let reciprocal = Node::recip(Node::Number(0.0));
        assert!(evaluate(&reciprocal, &ctxt, true).unwrap_err().is::<DivisionByZero>());
    }

    #[test]
    fn variables() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", Node::Number(5.0));
        ctxt.add_var("y", Node::Multiply(vec![Node::var("x"), Node::Number(2.0)]));
        assert_eq!(eval_str("x*y", &ctxt).unwrap(), 50.0);

        let err = eval_str("z", &ctxt).unwrap_err();
        assert_eq!(err.downcast_ref::<UndefinedVariable>(), Some(&UndefinedVariable {
            name: "z".to_string(),
        }));
    }

    #[test]
    fn cyclic_variables() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("a", Node::Plus(vec![Node::var("b"), Node::Number(1.0)]));
        ctxt.add_var("b", Node::var("a"));

        let err = eval_str("2a", &ctxt).unwrap_err();
        assert_eq!(err.downcast_ref::<CyclicVariable>(), Some(&CyclicVariable {
            chain: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        }));
    }

    #[test]
    fn nodes_without_value() {
        let ctxt = Ctxt::new();
        let equation = Node::equal(Node::var("x"), Node::Number(1.0));
        let err = evaluate(&equation, &ctxt, true).unwrap_err();
        assert_eq!(err.downcast_ref::<UnexpectedNode>(), Some(&UnexpectedNode {
            kind: lambda_parser::ast::NodeKind::Equal,
        }));

        let call = Node::Function("f".to_string(), vec![Node::Number(1.0)]);
        assert!(evaluate(&call, &ctxt, true).unwrap_err().is::<UnexpectedNode>());
    }

    #[test]
    fn deep_trees() {
        let ctxt = Ctxt::new();
        let mut node = Node::Number(1.0);
        for _ in 0..MAX_RECURSION_DEPTH + 10 {
            node = Node::neg(node);
        }
        assert!(evaluate(&node, &ctxt, true).unwrap_err().is::<ExpressionTooComplex>());
    }
}
