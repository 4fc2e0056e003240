use std::fmt::{Display, Formatter, Result};
use super::Node;

/// Binding strength of a node when printed, from loosest to tightest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Equal,
    Term,
    Factor,
    Exp,
    Atom,
}

impl Node {
    /// Returns the precedence of the node when printed.
    fn precedence(&self) -> Precedence {
        match self {
            Self::Equal(..) => Precedence::Equal,
            Self::Plus(_) | Self::Minus(..) => Precedence::Term,
            Self::Number(value) if *value < 0.0 => Precedence::Term,
            Self::Multiply(_) | Self::Divide(..) => Precedence::Factor,
            Self::Power(..) => Precedence::Exp,
            Self::Number(_) | Self::Variable(_) | Self::Sqrt(..) | Self::Function(..) | Self::Comma => {
                Precedence::Atom
            },
        }
    }

    /// If the node is `0 - x`, returns `x`.
    fn negated(&self) -> Option<&Node> {
        match self {
            Self::Minus(lhs, rhs) if lhs.is_zero() => Some(rhs),
            _ => None,
        }
    }
}

/// Writes `node`, wrapped in parentheses if it binds looser than `min`.
fn write_operand(f: &mut Formatter<'_>, node: &Node, min: Precedence) -> Result {
    if node.precedence() < min {
        write!(f, "({})", node)
    } else {
        write!(f, "{}", node)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Plus(terms) => {
                let mut iter = terms.iter();
                if let Some(first) = iter.next() {
                    write!(f, "{}", first)?;
                }
                for term in iter {
                    match (term.negated(), term.as_number()) {
                        (Some(inner), _) => {
                            write!(f, " - ")?;
                            write_operand(f, inner, Precedence::Factor)?;
                        },
                        (None, Some(value)) if value < 0.0 => write!(f, " - {}", -value)?,
                        _ => write!(f, " + {}", term)?,
                    }
                }
                Ok(())
            },
            Self::Minus(lhs, rhs) => {
                if lhs.is_zero() {
                    write!(f, "-")?;
                    write_operand(f, rhs, Precedence::Exp)
                } else {
                    write_operand(f, lhs, Precedence::Term)?;
                    write!(f, " - ")?;
                    write_operand(f, rhs, Precedence::Factor)
                }
            },
            Self::Multiply(factors) => {
                let mut iter = factors.iter();
                if let Some(first) = iter.next() {
                    write_operand(f, first, Precedence::Factor)?;
                }
                for factor in iter {
                    write!(f, " * ")?;
                    write_operand(f, factor, Precedence::Factor)?;
                }
                Ok(())
            },
            Self::Divide(lhs, rhs) => {
                write_operand(f, lhs, Precedence::Factor)?;
                write!(f, " / ")?;
                write_operand(f, rhs, Precedence::Exp)
            },
            Self::Power(base, exp) => {
                // `^` is left associative, so a power base needs no parentheses
                write_operand(f, base, Precedence::Exp)?;
                write!(f, "^")?;
                write_operand(f, exp, Precedence::Atom)
            },
            Self::Sqrt(index, radicand) => {
                if index.is_number(2.0) {
                    write!(f, "sqrt({})", radicand)
                } else {
                    write!(f, "sqrt^")?;
                    write_operand(f, index, Precedence::Atom)?;
                    write!(f, "({})", radicand)
                }
            },
            Self::Equal(lhs, rhs) => write!(f, "{} = {}", lhs, rhs),
            Self::Function(name, args) => {
                write!(f, "{}(", name)?;
                let mut iter = args.iter();
                if let Some(first) = iter.next() {
                    write!(f, "{}", first)?;
                }
                for arg in iter {
                    write!(f, ", {}", arg)?;
                }
                write!(f, ")")
            },
            Self::Comma => write!(f, ","),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn minimal_parentheses() {
        let node = Node::Multiply(vec![
            Node::Number(2.0),
            Node::Plus(vec![Node::var("x"), Node::Number(1.0)]),
        ]);
        assert_eq!(node.to_string(), "2 * (x + 1)");
    }

    #[test]
    fn negation_inside_sums() {
        let node = Node::Plus(vec![
            Node::var("a"),
            Node::neg(Node::var("b")),
            Node::Number(-3.0),
        ]);
        assert_eq!(node.to_string(), "a - b - 3");
    }

    #[test]
    fn powers() {
        let node = Node::power(Node::power(Node::var("x"), Node::Number(2.0)), Node::Number(-1.0));
        assert_eq!(node.to_string(), "x^2^(-1)");

        let node = Node::power(Node::Number(-2.0), Node::Plus(vec![Node::var("n"), Node::Number(1.0)]));
        assert_eq!(node.to_string(), "(-2)^(n + 1)");
    }

    #[test]
    fn roots_calls_and_equations() {
        let node = Node::equal(
            Node::sqrt(Node::Number(2.0), Node::var("x")),
            Node::Function("f".to_string(), vec![Node::sqrt(Node::Number(3.0), Node::Number(8.0)), Node::var("y")]),
        );
        assert_eq!(node.to_string(), "sqrt(x) = f(sqrt^3(8), y)");
    }

    #[test]
    fn shortest_number_format() {
        assert_eq!(Node::Number(0.1).to_string(), "0.1");
        assert_eq!(Node::Number(25.0).to_string(), "25");
        assert_eq!(Node::Number(1.0 / 3.0).to_string(), "0.3333333333333333");
    }
}
