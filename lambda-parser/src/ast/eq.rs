use super::Node;

/// Returns true if there is a one-to-one correspondence between the nodes of `lhs` and `rhs`
/// under structural equality. Duplicates must be matched as many times as they occur.
pub fn same_multiset(lhs: &[Node], rhs: &[Node]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    let mut used = vec![false; rhs.len()];
    lhs.iter().all(|node| {
        let found = rhs.iter()
            .enumerate()
            .position(|(i, other)| !used[i] && node == other);
        match found {
            Some(i) => {
                used[i] = true;
                true
            },
            None => false,
        }
    })
}

/// Checks if two nodes are structurally equal.
///
/// - Numbers are equal if their values are equal, variables if their names are.
/// - [`Node::Plus`] and [`Node::Multiply`] compare their children as multisets.
/// - Functions compare the name and the arguments in order.
/// - Every other kind compares both operands in order.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(lhs), Self::Number(rhs)) => lhs == rhs,
            (Self::Variable(lhs), Self::Variable(rhs)) => lhs == rhs,
            (Self::Plus(lhs), Self::Plus(rhs)) | (Self::Multiply(lhs), Self::Multiply(rhs)) => {
                same_multiset(lhs, rhs)
            },
            (Self::Minus(l1, r1), Self::Minus(l2, r2))
            | (Self::Divide(l1, r1), Self::Divide(l2, r2))
            | (Self::Power(l1, r1), Self::Power(l2, r2))
            | (Self::Sqrt(l1, r1), Self::Sqrt(l2, r2))
            | (Self::Equal(l1, r1), Self::Equal(l2, r2)) => l1 == l2 && r1 == r2,
            (Self::Function(n1, a1), Self::Function(n2, a2)) => n1 == n2 && a1 == a2,
            (Self::Comma, Self::Comma) => true,
            _ => false,
        }
    }
}
