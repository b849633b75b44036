//! A priority queue kept as a sorted, doubly linked list.
//!
//! See documentation for [`OrderedQueue`].
//!
//! Entries are held in ascending key order. The entry with the smallest key is at the front,
//! and that is the end that [`OrderedQueue::peek()`], [`OrderedQueue::remove()`] and
//! [`OrderedQueue::drain()`] work from. Entries with equal keys are served most recently inserted
//! first.
//!
//! ```rust
//! # use ordered_queue::{OrderedQueue, Priority};
//! let mut queue: OrderedQueue<f64> = OrderedQueue::new();
//! for p in [0.0, 2.0, 1.0, -1.0, -2.0, 5.0, 0.2, -0.4, -2.0, 10.0, -4.0] {
//!     queue.insert(p, Priority::new(p).unwrap());
//! }
//!
//! let mut order = vec![];
//! while let Some((_, priority)) = queue.remove() {
//!     order.push(priority.get());
//! }
//! assert_eq!(order, vec![-4.0, -2.0, -2.0, -1.0, -0.4, 0.0, 0.2, 1.0, 2.0, 5.0, 10.0]);
//! ```
//!
//! Nodes live in an index-addressed arena owned by the queue, so the links between neighbours
//! are plain indices. The queue is not synchronized; wrap it in a lock to share it across
//! threads.
mod internal;
mod priority;
mod queue;

pub use priority::{Priority, PriorityError};
pub use queue::{Drain, IntoIter, Iter, OrderedQueue};
