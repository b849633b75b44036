use crate::internal::{Arena, NodeKey};
use crate::priority::Priority;
use log::trace;
use std::fmt;
use std::iter::FusedIterator;

/// A priority queue kept as a sorted, doubly linked list.
///
/// Entries are ordered by ascending key from the *front* to the *back*. The front holds the
/// smallest key and is where [`peek()`](Self::peek), [`remove()`](Self::remove) and
/// [`drain()`](Self::drain) operate. Among equal keys, the most recently inserted entry sits
/// closest to the front, so it is removed first.
///
/// Insertion scans from the front for the first entry whose key is not smaller than the new one,
/// which is linear in the worst case; keys larger than everything already queued are appended in
/// constant time. Both ends can be read or removed in constant time.
///
/// The key type defaults to [`Priority`], a NaN-free `f64`. Any `Ord` type works.
///
/// ## Usage
///
/// ```rust
/// # use ordered_queue::{OrderedQueue, Priority};
/// let mut queue: OrderedQueue<&str> = OrderedQueue::new();
/// queue.insert("later", Priority::from(2_i32));
/// queue.insert("sooner", Priority::new(-0.5).unwrap());
/// queue.insert("later still", Priority::from(2_i32));
///
/// assert_eq!(queue.len(), 3);
/// assert_eq!(queue.peek().map(|(v, _)| *v), Some("sooner"));
///
/// let order: Vec<&str> = queue.drain().map(|(v, _)| v).collect();
/// assert_eq!(order, vec!["sooner", "later still", "later"]);
/// assert!(queue.is_empty());
/// ```
#[derive(Clone)]
pub struct OrderedQueue<T, P = Priority> {
    arena: Arena<T, P>,
}

impl<T, P> OrderedQueue<T, P> {
    /// Construct an empty queue.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    /// Construct an empty queue with room for `capacity` entries before reallocating.
    ///
    /// The queue still grows past `capacity` as needed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
        }
    }

    /// Number of entries in the queue.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The entry that [`remove()`](Self::remove) would return next.
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.arena.head().map(|key| self.entry(key))
    }

    /// The entry with the largest key, i.e., the one that would be removed last.
    pub fn peek_back(&self) -> Option<(&T, &P)> {
        self.arena.tail().map(|key| self.entry(key))
    }

    /// Remove the entry with the smallest key.
    ///
    /// Returns `None` if the queue is empty.
    pub fn remove(&mut self) -> Option<(T, P)> {
        let head = self.arena.head()?;
        let entry = self.arena.unlink(head);
        trace!("removed front entry, {} remaining", self.len());
        Some(entry)
    }

    /// Same as [`remove()`](Self::remove).
    pub fn pop(&mut self) -> Option<(T, P)> {
        self.remove()
    }

    /// Remove the entry with the largest key.
    ///
    /// Returns `None` if the queue is empty.
    pub fn remove_back(&mut self) -> Option<(T, P)> {
        let tail = self.arena.tail()?;
        let entry = self.arena.unlink(tail);
        trace!("removed back entry, {} remaining", self.len());
        Some(entry)
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        trace!("clearing {} entries", self.len());
        self.arena.clear();
    }

    /// Iterate over all entries from front to back, without removing them.
    pub fn iter(&self) -> Iter<'_, T, P> {
        Iter {
            arena: &self.arena,
            front: self.arena.head(),
            back: self.arena.tail(),
            remaining: self.len(),
        }
    }

    /// Remove entries from front to back as they are yielded.
    ///
    /// The queue is empty once the returned iterator is dropped, even if it was not run to
    /// completion.
    pub fn drain(&mut self) -> Drain<'_, T, P> {
        trace!("draining {} entries", self.len());
        Drain { queue: self }
    }

    fn entry(&self, key: NodeKey) -> (&T, &P) {
        let node = key.as_ref(&self.arena);
        (&node.value, &node.priority)
    }
}

impl<T, P: Ord> OrderedQueue<T, P> {
    /// Insert `value` at the position given by `priority`, returning the new length.
    ///
    /// The new entry goes in front of any entries already holding an equal key.
    pub fn insert(&mut self, value: T, priority: P) -> usize {
        match self.successor(&priority) {
            Some(next) => {
                self.arena.insert_before(next, value, priority);
            }
            None => {
                self.arena.push_back(value, priority);
            }
        }
        trace!("inserted entry, queue length now {}", self.len());
        self.len()
    }

    /// Find the node that an entry with `priority` must be linked in front of, or `None` if it
    /// belongs at the back.
    fn successor(&self, priority: &P) -> Option<NodeKey> {
        let tail = self.arena.tail()?;
        if *priority > tail.as_ref(&self.arena).priority {
            return None;
        }

        // The tail is >= priority, so this scan stops at the latest on the tail.
        let mut cursor = self.arena.head();
        while let Some(key) = cursor {
            let node = key.as_ref(&self.arena);
            if node.priority >= *priority {
                return Some(key);
            }
            cursor = node.next();
        }
        None
    }
}

impl<T, P> Default for OrderedQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, P: fmt::Debug> fmt::Debug for OrderedQueue<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, P: Ord> Extend<(T, P)> for OrderedQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.insert(value, priority);
        }
    }
}

impl<T, P: Ord> FromIterator<(T, P)> for OrderedQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<'a, T, P> IntoIterator for &'a OrderedQueue<T, P> {
    type Item = (&'a T, &'a P);
    type IntoIter = Iter<'a, T, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, P> IntoIterator for OrderedQueue<T, P> {
    type Item = (T, P);
    type IntoIter = IntoIter<T, P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { queue: self }
    }
}

/// Borrowing iterator over the entries of an [`OrderedQueue`], front to back.
///
/// Created by [`OrderedQueue::iter()`].
pub struct Iter<'a, T, P> {
    arena: &'a Arena<T, P>,
    front: Option<NodeKey>,
    back: Option<NodeKey>,
    /// Guards against the two cursors crossing when iterating from both ends.
    remaining: usize,
}

impl<'a, T, P> Iterator for Iter<'a, T, P> {
    type Item = (&'a T, &'a P);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?.as_ref(self.arena);
        self.front = node.next();
        self.remaining -= 1;
        Some((&node.value, &node.priority))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, P> DoubleEndedIterator for Iter<'a, T, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?.as_ref(self.arena);
        self.back = node.prev();
        self.remaining -= 1;
        Some((&node.value, &node.priority))
    }
}

impl<T, P> ExactSizeIterator for Iter<'_, T, P> {}

impl<T, P> FusedIterator for Iter<'_, T, P> {}

impl<T, P> Clone for Iter<'_, T, P> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

/// Draining iterator over the entries of an [`OrderedQueue`], front to back.
///
/// Created by [`OrderedQueue::drain()`]. Whatever has not been yielded when this is dropped is
/// dropped along with it.
pub struct Drain<'a, T, P> {
    queue: &'a mut OrderedQueue<T, P>,
}

impl<T, P> Iterator for Drain<'_, T, P> {
    type Item = (T, P);

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.remove()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T, P> DoubleEndedIterator for Drain<'_, T, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.queue.remove_back()
    }
}

impl<T, P> ExactSizeIterator for Drain<'_, T, P> {}

impl<T, P> FusedIterator for Drain<'_, T, P> {}

impl<T, P> Drop for Drain<'_, T, P> {
    fn drop(&mut self) {
        self.queue.clear();
    }
}

/// Owning iterator over the entries of an [`OrderedQueue`], front to back.
pub struct IntoIter<T, P> {
    queue: OrderedQueue<T, P>,
}

impl<T, P> Iterator for IntoIter<T, P> {
    type Item = (T, P);

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.remove()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }
}

impl<T, P> DoubleEndedIterator for IntoIter<T, P> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.queue.remove_back()
    }
}

impl<T, P> ExactSizeIterator for IntoIter<T, P> {}

impl<T, P> FusedIterator for IntoIter<T, P> {}
