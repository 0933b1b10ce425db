//! Cursor-based circular list
//!
//! A circular doubly-linked list with a "current" position. Backed by a
//! deque whose front is the cursor, so the layout in memory is always
//! `[current, next, ..., previous]` and stepping the cursor is a
//! rotation rather than pointer surgery.
//!
//! An optional capacity limit evicts the oldest-inserted element before
//! an insert that would overflow.

use std::collections::VecDeque;

/// A circular list with a cursor.
///
/// All cursor movement wraps: stepping `len()` times in either
/// direction returns to the starting element.
#[derive(Debug, Clone)]
pub struct Circle<T> {
    entries: VecDeque<Entry<T>>,
    limit: Option<usize>,
    next_seq: u64,
}

/// One stored element plus its insertion age, used for eviction.
#[derive(Debug, Clone)]
struct Entry<T> {
    seq: u64,
    value: T,
}

impl<T> Circle<T> {
    /// Create an empty list with no capacity limit.
    pub fn new() -> Self {
        Circle {
            entries: VecDeque::new(),
            limit: None,
            next_seq: 0,
        }
    }

    /// Create an empty list holding at most `limit` elements; inserting
    /// beyond that evicts the oldest-inserted element first. A limit of
    /// zero is treated as one.
    pub fn with_limit(limit: usize) -> Self {
        Circle {
            entries: VecDeque::new(),
            limit: Some(limit.max(1)),
            next_seq: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of elements currently in the ring
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Value at the cursor, if any
    pub fn current(&self) -> Option<&T> {
        self.entries.front().map(|e| &e.value)
    }

    /// Step the cursor to the next element and return the new current
    /// value. A single-element list stays where it is.
    pub fn move_next(&mut self) -> Option<&T> {
        if let Some(front) = self.entries.pop_front() {
            self.entries.push_back(front);
        }
        self.current()
    }

    /// Step the cursor to the previous element and return the new
    /// current value.
    pub fn move_previous(&mut self) -> Option<&T> {
        if let Some(back) = self.entries.pop_back() {
            self.entries.push_front(back);
        }
        self.current()
    }

    /// Insert `value` as the cursor's next neighbor; the cursor does not
    /// move. On an empty list the element becomes current.
    pub fn insert_after_current(&mut self, value: T) {
        self.make_room();
        let entry = self.next_entry(value);
        if self.entries.is_empty() {
            self.entries.push_back(entry);
        } else {
            self.entries.insert(1, entry);
        }
    }

    /// Insert `value` as the cursor's previous neighbor; the cursor does
    /// not move.
    pub fn insert_before_current(&mut self, value: T) {
        self.make_room();
        let entry = self.next_entry(value);
        self.entries.push_back(entry);
    }

    /// Insert `value` into the old current slot and leave the cursor on
    /// the element after it. The resulting ring is the same as
    /// `insert_before_current`.
    pub fn insert_and_move_next(&mut self, value: T) {
        self.insert_before_current(value);
    }

    /// Insert `value` after the cursor, then step onto it.
    pub fn insert_after_step(&mut self, value: T) {
        self.insert_after_current(value);
        self.move_next();
    }

    /// Remove and return the current element; the cursor moves to the
    /// next element. Returns `None` on an empty list.
    pub fn remove_current(&mut self) -> Option<T> {
        self.entries.pop_front().map(|e| e.value)
    }

    fn next_entry(&mut self, value: T) -> Entry<T> {
        let seq = self.next_seq;
        self.next_seq += 1;
        Entry { seq, value }
    }

    /// Evict oldest-inserted elements until one slot is free under the
    /// capacity limit. Evicting the current element moves the cursor to
    /// the next one, matching `remove_current`.
    fn make_room(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        while self.entries.len() >= limit {
            let oldest = self
                .entries
                .iter()
                .enumerate()
                .min_by_key(|(_, e)| e.seq)
                .map(|(i, _)| i);
            match oldest {
                Some(idx) => {
                    self.entries.remove(idx);
                }
                None => break,
            }
        }
    }
}

impl<T> Default for Circle<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Circle<T> {
    /// All elements in ring order, starting at the cursor and walking in
    /// the `next` direction.
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().map(|e| e.value.clone()).collect()
    }
}
