//! Containers used to walk a binary search tree iteratively: a FIFO queue for breadth-first
//! traversal and a LIFO stack for depth-first traversal.

mod queue;
mod stack;

pub use self::queue::Queue;
pub use self::stack::Stack;
