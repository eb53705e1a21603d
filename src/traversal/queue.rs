use std::collections::VecDeque;

/// A first-in first-out queue.
///
/// # Examples
///
/// ```
/// use avl_collections::traversal::Queue;
///
/// let mut q = Queue::new();
///
/// q.enqueue(0);
/// q.enqueue(1);
/// assert_eq!(q.len(), 2);
///
/// assert_eq!(q.dequeue(), Some(0));
/// assert_eq!(q.dequeue(), Some(1));
/// assert_eq!(q.dequeue(), None);
/// ```
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Constructs a new, empty `Queue<T>`.
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }

    /// Adds an item to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes the item at the front of the queue, or returns `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the number of items in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}
