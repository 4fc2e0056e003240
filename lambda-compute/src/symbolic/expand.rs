//! Inline expansion of calls to user-defined functions.

use crate::ctxt::{Ctxt, MAX_RECURSION_DEPTH};
use lambda_error::Error;
use lambda_parser::{ast::Node, parser::error::{ExpressionTooComplex, WrongArity}};
use super::error::UndefinedFunction;

/// Replaces every call to a user-defined function with the function's body, where each parameter
/// is substituted with the corresponding argument.
///
/// The arguments are expanded before they are substituted, so nested calls such as `f(g(x))` are
/// handled.
pub fn expand_calls(node: &Node, ctxt: &Ctxt) -> Result<Node, Error> {
    expand_at(node, ctxt, 0)
}

fn expand_at(node: &Node, ctxt: &Ctxt, depth: usize) -> Result<Node, Error> {
    if depth >= MAX_RECURSION_DEPTH {
        return Err(ExpressionTooComplex.into());
    }

    let Node::Function(name, args) = node else {
        return node.try_map_operands(|operand| expand_at(operand, ctxt, depth + 1));
    };

    let Some(func) = ctxt.get_func(name) else {
        return Err(UndefinedFunction {
            name: name.clone(),
            suggestions: ctxt.get_similar_funcs(name)
                .into_iter()
                .map(ToString::to_string)
                .collect(),
        }.into());
    };

    if args.len() != func.params.len() {
        return Err(WrongArity {
            name: name.clone(),
            expected: func.params.len(),
            given: args.len(),
        }.into());
    }

    let args = args.iter()
        .map(|arg| expand_at(arg, ctxt, depth + 1))
        .collect::<Result<Vec<_>, _>>()?;
    let body = substitute(&func.body, &func.params, &args);

    // bodies of contexts built by hand may still contain calls
    expand_at(&body, ctxt, depth + 1)
}

/// Replaces every occurrence of a parameter in `body` with the matching argument.
fn substitute(body: &Node, params: &[String], args: &[Node]) -> Node {
    if let Node::Variable(name) = body {
        let arg = params.iter()
            .position(|param| param == name)
            .and_then(|index| args.get(index));
        if let Some(arg) = arg {
            return arg.clone();
        }
    }

    body.map_operands(|operand| substitute(operand, params, args))
}

#[cfg(test)]
mod tests {
    use crate::ctxt::Func;
    use pretty_assertions::assert_eq;
    use super::*;

    fn ctxt_with_f() -> Ctxt {
        // f(x, y) = x * y + 1
        let mut ctxt = Ctxt::new();
        ctxt.add_func("f", Func {
            params: vec!["x".to_string(), "y".to_string()],
            body: Node::Plus(vec![
                Node::Multiply(vec![Node::var("x"), Node::var("y")]),
                Node::Number(1.0),
            ]),
        });
        ctxt
    }

    #[test]
    fn substitutes_arguments() {
        let ctxt = ctxt_with_f();
        let call = Node::Function("f".to_string(), vec![Node::Number(2.0), Node::var("z")]);
        assert_eq!(expand_calls(&call, &ctxt).unwrap(), Node::Plus(vec![
            Node::Multiply(vec![Node::Number(2.0), Node::var("z")]),
            Node::Number(1.0),
        ]));
    }

    #[test]
    fn nested_calls() {
        let ctxt = ctxt_with_f();
        let inner = Node::Function("f".to_string(), vec![Node::Number(1.0), Node::Number(2.0)]);
        let outer = Node::power(
            Node::Function("f".to_string(), vec![inner, Node::var("x")]),
            Node::Number(2.0),
        );
        let expected_inner = Node::Plus(vec![
            Node::Multiply(vec![Node::Number(1.0), Node::Number(2.0)]),
            Node::Number(1.0),
        ]);
        assert_eq!(expand_calls(&outer, &ctxt).unwrap(), Node::power(
            Node::Plus(vec![
                Node::Multiply(vec![expected_inner, Node::var("x")]),
                Node::Number(1.0),
            ]),
            Node::Number(2.0),
        ));
    }

    #[test]
    fn undefined_function_suggests_similar() {
        let ctxt = ctxt_with_f();
        let call = Node::Function("g".to_string(), vec![Node::Number(1.0)]);
        let err = expand_calls(&call, &ctxt).unwrap_err();
        assert_eq!(err.downcast_ref::<UndefinedFunction>(), Some(&UndefinedFunction {
            name: "g".to_string(),
            suggestions: vec!["f".to_string()],
        }));
    }

    #[test]
    fn wrong_arity() {
        let ctxt = ctxt_with_f();
        let call = Node::Function("f".to_string(), vec![Node::Number(1.0)]);
        let err = expand_calls(&call, &ctxt).unwrap_err();
        assert_eq!(err.downcast_ref::<WrongArity>(), Some(&WrongArity {
            name: "f".to_string(),
            expected: 2,
            given: 1,
        }));
    }

    #[test]
    fn call_free_trees_are_unchanged() {
        let ctxt = ctxt_with_f();
        let node = Node::minus(Node::var("f"), Node::Number(1.0));
        assert_eq!(expand_calls(&node, &ctxt).unwrap(), node);
    }
}
