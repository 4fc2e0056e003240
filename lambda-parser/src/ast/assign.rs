use super::Node;

/// The left side of a definition.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignTarget {
    /// `x = ...`
    Variable(String),

    /// `f(x, y) = ...`
    Function {
        /// The name of the function.
        name: String,

        /// The names of the parameters, in order.
        params: Vec<String>,
    },
}

impl AssignTarget {
    /// The name being defined.
    pub fn name(&self) -> &str {
        match self {
            Self::Variable(name) | Self::Function { name, .. } => name,
        }
    }
}

/// A definition, such as `x = 2 + 3` or `f(x) = x^2`.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    /// What is being defined.
    pub target: AssignTarget,

    /// The right side of the definition.
    pub value: Node,
}
