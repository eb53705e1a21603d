/// A last-in first-out stack.
///
/// # Examples
///
/// ```
/// use avl_collections::traversal::Stack;
///
/// let mut s = Stack::new();
///
/// s.push(0);
/// s.push(1);
/// assert_eq!(s.len(), 2);
///
/// assert_eq!(s.pop(), Some(1));
/// assert_eq!(s.pop(), Some(0));
/// assert_eq!(s.len(), 0);
/// ```
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Constructs a new, empty `Stack<T>`.
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Pushes an item onto the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Pops the most recently pushed item, or returns `None` if the stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the number of items in the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Stack;

    #[test]
    fn test_len_empty() {
        let s: Stack<u32> = Stack::new();
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
    }

    #[test]
    fn test_lifo() {
        let mut s = Stack::new();
        for i in 0..10 {
            s.push(i);
        }
        assert_eq!(s.len(), 10);

        for i in (0..10).rev() {
            assert_eq!(s.pop(), Some(i));
        }
        assert_eq!(s.pop(), None);
    }
}
