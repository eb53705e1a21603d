//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.
//!
//! Every subtree is addressed by a [`Tree`] handle which caches the height and balance factor of
//! the subtree it owns. Rotations move nodes between handles instead of rewiring parent pointers.

mod node;
mod tree;

pub use self::node::Node;
pub use self::tree::{Tree, TreeIter};
