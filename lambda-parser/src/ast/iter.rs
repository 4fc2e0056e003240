use super::Node;

/// An iterator that traverses the tree in left-to-right post-order (i.e. depth-first).
///
/// This iterator is created by [`Node::post_order_iter`].
pub struct NodeIter<'a> {
    /// The path from the root to the node being visited, each with the index of its next operand
    /// to descend into.
    stack: Vec<(&'a Node, usize)>,
}

impl<'a> NodeIter<'a> {
    /// Creates a new iterator that traverses the tree in left-to-right post-order.
    pub fn new(node: &'a Node) -> Self {
        Self { stack: vec![(node, 0)] }
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            let node: &'a Node = top.0;
            match node.operand(top.1) {
                Some(child) => {
                    top.1 += 1;
                    self.stack.push((child, 0));
                },
                None => {
                    self.stack.pop();
                    return Some(node);
                },
            }
        }
    }
}
