//! Unbalanced binary search tree rooted at a value, with recursive and iterative traversals.

use crate::traversal::{Queue, Stack};

/// A binary search tree that never rebalances.
///
/// Values greater than or equal to a node's value are inserted to its right.
///
/// # Examples
/// ```
/// use avl_collections::bst::BinarySearchTree;
///
/// let mut bst = BinarySearchTree::new(5);
/// bst.insert(2);
/// bst.insert(7);
///
/// assert!(bst.contains(&2));
/// assert_eq!(bst.max(), &7);
///
/// let mut values = Vec::new();
/// bst.in_order(|value| values.push(*value));
/// assert_eq!(values, vec![2, 5, 7]);
/// ```
pub struct BinarySearchTree<T> {
    value: T,
    left: Option<Box<BinarySearchTree<T>>>,
    right: Option<Box<BinarySearchTree<T>>>,
}

impl<T> BinarySearchTree<T> {
    /// Constructs a new `BinarySearchTree<T>` holding a single value.
    pub fn new(value: T) -> Self {
        BinarySearchTree {
            value,
            left: None,
            right: None,
        }
    }

    /// Returns the value at the root of the tree.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the maximum value in the tree.
    pub fn max(&self) -> &T {
        let mut curr = self;
        while let Some(right) = curr.right.as_deref() {
            curr = right;
        }
        &curr.value
    }

    /// Calls `f` on every value, visiting a node before its left and right subtrees.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        self.pre_order(&mut f);
    }

    /// Calls `f` on every value from lowest to highest.
    pub fn in_order<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        self.walk_in_order(&mut f);
    }

    fn walk_in_order<F>(&self, f: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(ref left) = self.left {
            left.walk_in_order(f);
        }
        f(&self.value);
        if let Some(ref right) = self.right {
            right.walk_in_order(f);
        }
    }

    /// Calls `f` on every value level by level, left to right.
    pub fn bft<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        let mut queue = Queue::new();
        queue.enqueue(self);
        while let Some(node) = queue.dequeue() {
            f(&node.value);
            if let Some(ref left) = node.left {
                queue.enqueue(&**left);
            }
            if let Some(ref right) = node.right {
                queue.enqueue(&**right);
            }
        }
    }

    /// Calls `f` on every value in an iterative depth-first order. Left children are pushed
    /// before right children, so right subtrees are visited first.
    pub fn dft<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        let mut stack = Stack::new();
        stack.push(self);
        while let Some(node) = stack.pop() {
            f(&node.value);
            if let Some(ref left) = node.left {
                stack.push(&**left);
            }
            if let Some(ref right) = node.right {
                stack.push(&**right);
            }
        }
    }

    /// Calls `f` on a node's value before the values of its subtrees.
    pub fn pre_order<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        self.walk_pre_order(&mut f);
    }

    fn walk_pre_order<F>(&self, f: &mut F)
    where
        F: FnMut(&T),
    {
        f(&self.value);
        if let Some(ref left) = self.left {
            left.walk_pre_order(f);
        }
        if let Some(ref right) = self.right {
            right.walk_pre_order(f);
        }
    }

    /// Calls `f` on a node's value after the values of its subtrees.
    pub fn post_order<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        self.walk_post_order(&mut f);
    }

    fn walk_post_order<F>(&self, f: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(ref left) = self.left {
            left.walk_post_order(f);
        }
        if let Some(ref right) = self.right {
            right.walk_post_order(f);
        }
        f(&self.value);
    }
}

impl<T> BinarySearchTree<T>
where
    T: Ord,
{
    /// Inserts a value into the tree.
    pub fn insert(&mut self, value: T) {
        let child = if value < self.value {
            &mut self.left
        } else {
            &mut self.right
        };
        match *child {
            Some(ref mut node) => node.insert(value),
            None => *child = Some(Box::new(BinarySearchTree::new(value))),
        }
    }

    /// Checks if a value exists in the tree.
    pub fn contains(&self, target: &T) -> bool {
        let mut curr = self;
        loop {
            let next = if *target == curr.value {
                return true;
            } else if *target < curr.value {
                &curr.left
            } else {
                &curr.right
            };
            match next.as_deref() {
                Some(node) => curr = node,
                None => return false,
            }
        }
    }
}
