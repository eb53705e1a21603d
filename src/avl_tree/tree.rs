use crate::avl_tree::node::Node;
use crate::error::{Direction, Error, Result};
use std::cmp;
use std::fmt;
use std::io;
use std::iter::FromIterator;
use std::mem;

/// A handle to a subtree of an avl tree.
///
/// The root of a tree and every child link are handles of the same type. A handle owns an
/// optional node and caches the height and balance factor of that subtree. An empty handle has a
/// height of `-1` and a balance factor of `0`; a single node has a height of `0`.
///
/// Duplicate keys are allowed and are inserted to the right of equal keys.
///
/// # Examples
/// ```
/// use avl_collections::avl_tree::Tree;
///
/// let mut tree = Tree::new();
/// tree.insert(1);
/// tree.insert(2);
/// tree.insert(3);
///
/// assert_eq!(tree.key(), Some(&2));
/// assert_eq!(tree.height(), 1);
/// assert_eq!(tree.iter().collect::<Vec<&u32>>(), vec![&1, &2, &3]);
/// ```
pub struct Tree<T> {
    node: Option<Box<Node<T>>>,
    height: i32,
    balance: i32,
    // Set when the metrics of this handle and all of its descendants are current.
    fresh: bool,
}

impl<T> Tree<T> {
    /// Constructs a new, empty `Tree<T>`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::Tree;
    ///
    /// let tree: Tree<u32> = Tree::new();
    /// assert_eq!(tree.height(), -1);
    /// ```
    pub fn new() -> Self {
        Tree {
            node: None,
            height: -1,
            balance: 0,
            fresh: true,
        }
    }

    fn leaf(key: T) -> Self {
        Tree {
            node: Some(Box::new(Node::new(key))),
            height: 0,
            balance: 0,
            fresh: true,
        }
    }

    /// Returns the height of the subtree: `-1` if empty, `0` for a single node.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Returns the height of the left subtree minus the height of the right subtree.
    pub fn balance(&self) -> i32 {
        self.balance
    }

    /// Returns the node owned by this handle.
    pub fn node(&self) -> Option<&Node<T>> {
        self.node.as_deref()
    }

    /// Returns the key of the node owned by this handle.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.key(), None);
    /// tree.insert(1);
    /// assert_eq!(tree.key(), Some(&1));
    /// ```
    pub fn key(&self) -> Option<&T> {
        self.node().map(|node| &node.key)
    }

    /// Returns the handle of the left subtree, or `None` if this handle is empty.
    pub fn left(&self) -> Option<&Tree<T>> {
        self.node().map(|node| &node.left)
    }

    /// Returns the handle of the right subtree, or `None` if this handle is empty.
    pub fn right(&self) -> Option<&Tree<T>> {
        self.node().map(|node| &node.right)
    }

    /// Returns `true` if the handle does not own a node.
    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// Returns the number of keys in the subtree.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        match self.node {
            None => 0,
            Some(ref node) => node.left.len() + node.right.len() + 1,
        }
    }

    /// Recomputes the height of this handle, first bringing every descendant that is not
    /// current up to date. Descendants are refreshed from the leaves up.
    pub fn update_height(&mut self) {
        if self.fresh {
            return;
        }

        self.height = match self.node {
            None => -1,
            Some(ref mut node) => {
                node.left.update_balance();
                node.right.update_balance();
                node.height()
            },
        };
    }

    /// Recomputes the balance factor of this handle after refreshing its height. Afterwards the
    /// whole subtree is current, and calling it again without a mutation changes nothing.
    pub fn update_balance(&mut self) {
        if self.fresh {
            return;
        }

        self.update_height();
        self.balance = match self.node {
            None => 0,
            Some(ref node) => node.balance(),
        };
        self.fresh = true;
    }

    // The right child's node moves into this handle and the former root becomes its left child.
    // Metrics of both affected handles are left stale.
    fn rotate_left(&mut self) -> Result<()> {
        let mut root = match self.node.take() {
            Some(root) => root,
            None => return Err(Error::InvalidRotation { direction: Direction::Left }),
        };
        let mut pivot = match root.right.node.take() {
            Some(pivot) => pivot,
            None => {
                self.node = Some(root);
                return Err(Error::InvalidRotation { direction: Direction::Left });
            },
        };

        mem::swap(&mut root.right, &mut pivot.left);
        pivot.left.node = Some(root);
        pivot.left.fresh = false;
        self.node = Some(pivot);
        self.fresh = false;
        trace!("rotated left");
        Ok(())
    }

    fn rotate_right(&mut self) -> Result<()> {
        let mut root = match self.node.take() {
            Some(root) => root,
            None => return Err(Error::InvalidRotation { direction: Direction::Right }),
        };
        let mut pivot = match root.left.node.take() {
            Some(pivot) => pivot,
            None => {
                self.node = Some(root);
                return Err(Error::InvalidRotation { direction: Direction::Right });
            },
        };

        mem::swap(&mut root.left, &mut pivot.right);
        pivot.right.node = Some(root);
        pivot.right.fresh = false;
        self.node = Some(pivot);
        self.fresh = false;
        trace!("rotated right");
        Ok(())
    }

    // precondition: every descendant that is current is also balanced
    fn rebalance(&mut self) -> Result<()> {
        if self.fresh {
            return Ok(());
        }

        if let Some(ref mut node) = self.node {
            node.right.rebalance()?;
            node.left.rebalance()?;
        }
        self.update_balance();

        if self.balance < -1 {
            debug!("rebalancing right-heavy subtree with balance {}", self.balance);
            if let Some(ref mut node) = self.node {
                if node.right.balance > 0 {
                    node.right.rotate_right()?;
                }
            }
            self.rotate_left()?;
            self.update_balance();
        } else if self.balance > 1 {
            debug!("rebalancing left-heavy subtree with balance {}", self.balance);
            if let Some(ref mut node) = self.node {
                if node.left.balance < 0 {
                    node.left.rotate_left()?;
                }
            }
            self.rotate_right()?;
            self.update_balance();
        }

        Ok(())
    }

    /// Returns an iterator over the subtree. The iterator yields keys in-order.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> TreeIter<T> {
        TreeIter {
            current: self,
            stack: Vec::new(),
        }
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts a key into the subtree and rebalances every handle along the insertion path.
    /// Keys equal to a node's key are inserted into its right subtree.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(3);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.key(), Some(&2));
    /// assert_eq!(tree.balance(), 0);
    /// ```
    pub fn insert(&mut self, key: T) {
        if let Some(ref mut node) = self.node {
            if key < node.key {
                node.left.insert(key);
            } else {
                node.right.insert(key);
            }
        } else {
            *self = Tree::leaf(key);
            return;
        }

        self.fresh = false;
        if let Err(err) = self.rebalance() {
            unreachable!("rebalancing after an insertion failed: {}", err);
        }
    }

    /// Checks if a key exists in the subtree.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        let mut curr = self;
        while let Some(ref node) = curr.node {
            curr = match key.cmp(&node.key) {
                cmp::Ordering::Less => &node.left,
                cmp::Ordering::Greater => &node.right,
                cmp::Ordering::Equal => return true,
            };
        }
        false
    }

    /// Returns the minimum key of the subtree, or `None` if it is empty.
    pub fn min(&self) -> Option<&T> {
        let mut curr = self.node()?;
        while let Some(left_node) = curr.left.node.as_deref() {
            curr = left_node;
        }
        Some(&curr.key)
    }

    /// Returns the maximum key of the subtree, or `None` if it is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(3);
    /// assert_eq!(tree.min(), Some(&1));
    /// assert_eq!(tree.max(), Some(&3));
    /// ```
    pub fn max(&self) -> Option<&T> {
        let mut curr = self.node()?;
        while let Some(right_node) = curr.right.node.as_deref() {
            curr = right_node;
        }
        Some(&curr.key)
    }

    /// Recomputes every cached height and balance factor from scratch and checks them, along
    /// with the ordering of keys, against the cached values. Returns the first violation found.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in 0..100 {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.validate_metrics()?;

        let mut prev = None;
        for key in self.iter() {
            if let Some(prev) = prev {
                if key < prev {
                    return Err(Error::OrderViolation);
                }
            }
            prev = Some(key);
        }
        Ok(())
    }

    fn validate_metrics(&self) -> Result<i32> {
        let expected = match self.node {
            None => (-1, 0),
            Some(ref node) => {
                let left_height = node.left.validate_metrics()?;
                let right_height = node.right.validate_metrics()?;
                (cmp::max(left_height, right_height) + 1, left_height - right_height)
            },
        };
        let found = (self.height, self.balance);

        if !self.fresh || expected != found {
            return Err(Error::StaleMetrics { expected, found });
        }
        if expected.1.abs() > 1 {
            return Err(Error::Unbalanced { balance: expected.1 });
        }
        Ok(expected.0)
    }
}

impl<T> Tree<T>
where
    T: fmt::Display,
{
    /// Writes one line per node, indented by depth, showing the key and `[height:balance]`.
    /// Left children are prefixed with `<`, right children with `>` and leaves are marked `L`.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// let mut out = Vec::new();
    /// tree.dump(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "  2 [1:1]\n-- < 1 [0:0] L\n");
    /// ```
    pub fn dump<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        self.dump_level(writer, 0, "")
    }

    fn dump_level<W>(&self, writer: &mut W, level: usize, prefix: &str) -> io::Result<()>
    where
        W: io::Write,
    {
        if let Some(ref node) = self.node {
            let line = format!(
                "{} {} {} [{}:{}] {}",
                "-".repeat(level * 2),
                prefix,
                node.key,
                self.height,
                self.balance,
                if self.height == 0 { "L" } else { "" },
            );
            writeln!(writer, "{}", line.trim_end())?;
            node.left.dump_level(writer, level + 1, "<")?;
            node.right.dump_level(writer, level + 1, ">")?;
        }
        Ok(())
    }

    /// Prints the tree to standard output. See [`Tree::dump`].
    pub fn display(&self) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(err) = self.dump(&mut handle) {
            warn!("failed to display tree: {}", err);
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T>
where
    T: 'a,
{
    type Item = &'a T;
    type IntoIter = TreeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `Tree<T>`.
///
/// This iterator traverses the keys of the subtree in-order and yields immutable references.
pub struct TreeIter<'a, T>
where
    T: 'a,
{
    current: &'a Tree<T>,
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for TreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut current = self.current;
        while let Some(node) = current.node.as_deref() {
            self.stack.push(node);
            current = &node.left;
        }
        self.stack.pop().map(|node| {
            self.current = &node.right;
            &node.key
        })
    }
}
