use lambda_parser::{ast::Node, FunctionLookup};
use levenshtein::levenshtein;
use std::collections::BTreeMap;

/// The maximum depth of any recursive walk over an expression, including the chain of variables
/// the evaluator follows and the rewrites the simplifier applies to a single node.
pub const MAX_RECURSION_DEPTH: usize = 1 << 10;

/// A user-defined function.
#[derive(Debug, Clone, PartialEq)]
pub struct Func {
    /// The names of the parameters, in order.
    pub params: Vec<String>,

    /// The body of the function, already simplified.
    pub body: Node,
}

/// The variables and functions defined by the user, which expressions can refer to.
///
/// Names are kept in sorted order so that listings are stable.
#[derive(Debug, Clone, Default)]
pub struct Ctxt {
    /// The variables in the context.
    vars: BTreeMap<String, Node>,

    /// The functions in the context.
    funcs: BTreeMap<String, Func>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Add a variable to the context, replacing any previous definition.
    pub fn add_var(&mut self, name: &str, value: Node) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the definition of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<&Node> {
        self.vars.get(name)
    }

    /// Get the name and definition of a variable in the context, borrowed from the context.
    pub fn get_var_entry(&self, name: &str) -> Option<(&str, &Node)> {
        self.vars.get_key_value(name).map(|(name, node)| (name.as_str(), node))
    }

    /// Removes a variable from the context, returning its definition if it existed.
    pub fn remove_var(&mut self, name: &str) -> Option<Node> {
        self.vars.remove(name)
    }

    /// Returns the variables in the context.
    pub fn get_vars(&self) -> &BTreeMap<String, Node> {
        &self.vars
    }

    /// Add a function to the context, replacing any previous definition.
    pub fn add_func(&mut self, name: &str, func: Func) {
        self.funcs.insert(name.to_string(), func);
    }

    /// Get a function in the context.
    pub fn get_func(&self, name: &str) -> Option<&Func> {
        self.funcs.get(name)
    }

    /// Removes a function from the context, returning it if it existed.
    pub fn remove_func(&mut self, name: &str) -> Option<Func> {
        self.funcs.remove(name)
    }

    /// Returns the functions in the context.
    pub fn get_funcs(&self) -> &BTreeMap<String, Func> {
        &self.funcs
    }

    /// Returns all functions in the context with a name similar to the given name.
    pub fn get_similar_funcs(&self, name: &str) -> Vec<&str> {
        self.funcs
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(String::as_str)
            .collect()
    }
}

impl FunctionLookup for Ctxt {
    fn arity(&self, name: &str) -> Option<usize> {
        self.funcs.get(name).map(|func| func.params.len())
    }
}
