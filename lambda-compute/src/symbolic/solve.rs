//! Simplification of equations.

use crate::ctxt::Ctxt;
use lambda_error::Error;
use lambda_parser::ast::Node;
use super::{expand::expand_calls, rebuild::rebuild, simplify::{simplify, RuleSet}};

/// Simplifies both sides of an equation with the [`RuleSet::Solve`] rules, after expanding calls
/// to user-defined functions and flattening the tree.
///
/// The equation is not rearranged; the result is an equation equivalent to the input.
pub fn solve(equation: &Node, ctxt: &Ctxt) -> Result<Node, Error> {
    let expanded = expand_calls(equation, ctxt)?;
    let rebuilt = rebuild(&expanded)?;
    simplify(&rebuilt, RuleSet::Solve, ctxt)
}

#[cfg(test)]
mod tests {
    use crate::ctxt::Func;
    use lambda_parser::{Constants, Lexer, Parser, SymbolTable};
    use pretty_assertions::assert_eq;
    use super::*;

    fn solve_str(input: &str, ctxt: &Ctxt) -> Result<Node, Error> {
        let tokens = Lexer::new(&SymbolTable::default(), &Constants::default()).lex(input)?;
        let equation = Parser::with_functions(tokens, ctxt).parse_equation_full()?;
        solve(&equation, ctxt)
    }

    #[test]
    fn identities_on_both_sides() {
        // single operand sums and products are left in place
        let ctxt = Ctxt::new();
        assert_eq!(solve_str("x*1 + 0 = 2*3", &ctxt).unwrap(), Node::equal(
            Node::Plus(vec![Node::Multiply(vec![Node::var("x")])]),
            Node::Number(6.0),
        ));
    }

    #[test]
    fn powers_of_the_same_base() {
        let ctxt = Ctxt::new();
        assert_eq!(solve_str("y*y = x^2*x^3", &ctxt).unwrap(), Node::equal(
            Node::power(Node::var("y"), Node::Number(2.0)),
            Node::power(Node::var("x"), Node::Number(5.0)),
        ));
    }

    #[test]
    fn calls_are_expanded() {
        let mut ctxt = Ctxt::new();
        ctxt.add_func("f", Func {
            params: vec!["x".to_string()],
            body: Node::Multiply(vec![Node::var("x"), Node::Number(2.0)]),
        });
        assert_eq!(solve_str("f(3) = y", &ctxt).unwrap(), Node::equal(
            Node::Number(6.0),
            Node::var("y"),
        ));
    }

    #[test]
    fn equation_required() {
        let ctxt = Ctxt::new();
        assert!(solve_str("x + 1", &ctxt).is_err());
    }
}
