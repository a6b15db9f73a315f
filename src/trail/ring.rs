//! Fixed-capacity FIFO backed by a circular buffer.

/// FIFO that never grows past the capacity it was built with.
///
/// Storage is allocated once; pushing and popping only move indices.
#[derive(Debug, Clone, PartialEq)]
pub struct DelayRing<T: Copy> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T: Copy> DelayRing<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Append at the back. Returns `false` and drops `item` when full.
    pub fn push(&mut self, item: T) -> bool {
        if self.is_full() {
            return false;
        }
        let tail = (self.head + self.len) % self.capacity();
        self.slots[tail] = Some(item);
        self.len += 1;
        true
    }

    /// Remove and return the oldest entry.
    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.slots[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        item
    }

    /// The oldest entry, left in place.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.head].as_ref()
    }
}
