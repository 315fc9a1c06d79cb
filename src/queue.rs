//! Growable circular FIFO queue
//!
//! Used by the breadth-first failure-link pass. Slots are reused as the head
//! advances, so a compile over a large trie allocates only when the frontier
//! outgrows the current buffer.

const INITIAL_CAPACITY: usize = 8;

/// Circular FIFO queue that doubles its buffer when full
#[derive(Debug, Clone)]
pub struct FifoQueue<T> {
    data: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> FifoQueue<T> {
    /// Create an empty queue with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Create an empty queue with room for `capacity` elements (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let mut data = Vec::with_capacity(capacity.max(1));
        data.resize_with(capacity.max(1), || None);
        Self {
            data,
            head: 0,
            len: 0,
        }
    }

    /// Append an element at the tail
    pub fn push(&mut self, value: T) {
        if self.len == self.data.len() {
            self.grow();
        }
        let capacity = self.data.len();
        self.data[(self.head + self.len) % capacity] = Some(value);
        self.len += 1;
    }

    /// Remove and return the element at the head
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.data[self.head].take();
        self.head = (self.head + 1) % self.data.len();
        self.len -= 1;
        value
    }

    /// Number of queued elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the current buffer
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    // Re-linearize into a buffer of 2 * (capacity + 1) slots, head at 0.
    fn grow(&mut self) {
        let old_capacity = self.data.len();
        let mut data = Vec::with_capacity(2 * (old_capacity + 1));
        for i in 0..self.len {
            data.push(self.data[(self.head + i) % old_capacity].take());
        }
        data.resize_with(2 * (old_capacity + 1), || None);
        self.data = data;
        self.head = 0;
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
