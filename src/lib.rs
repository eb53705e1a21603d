//! An AVL tree built from subtree handles, a plain binary search tree, and the queue and stack
//! used to traverse it.

#[macro_use]
extern crate log;

mod error;
pub mod avl_tree;
pub mod bst;
pub mod traversal;

pub use crate::error::{Direction, Error, Result};
