use crate::avl_tree::tree::Tree;
use std::cmp;

/// A struct representing an internal node of an avl tree.
pub struct Node<T> {
    pub(crate) key: T,
    pub(crate) left: Tree<T>,
    pub(crate) right: Tree<T>,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        Node {
            key,
            left: Tree::new(),
            right: Tree::new(),
        }
    }

    pub fn key(&self) -> &T {
        &self.key
    }

    pub fn left(&self) -> &Tree<T> {
        &self.left
    }

    pub fn right(&self) -> &Tree<T> {
        &self.right
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }

    // Both read the cached heights of the children, so the children must be current.
    pub(crate) fn height(&self) -> i32 {
        cmp::max(self.left.height(), self.right.height()) + 1
    }

    // Empty subtrees have height -1, so a lone left child yields `1 + left.height` and a lone
    // right child yields `-(1 + right.height)`.
    pub(crate) fn balance(&self) -> i32 {
        self.left.height() - self.right.height()
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn test_leaf_metrics() {
        let node = Node::new(1);
        assert!(node.is_leaf());
        assert_eq!(node.height(), 0);
        assert_eq!(node.balance(), 0);
    }

    #[test]
    fn test_single_child_metrics() {
        let mut node = Node::new(5);
        node.left.insert(3);
        node.left.insert(1);
        assert_eq!(node.height(), 2);
        assert_eq!(node.balance(), 2);

        let mut node = Node::new(5);
        node.right.insert(7);
        assert_eq!(node.height(), 1);
        assert_eq!(node.balance(), -1);
    }
}
