//! Internal representation and memory management of queue nodes.

use slab::Slab;

/// Index to a node in the node arena.
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
pub(crate) struct NodeKey(usize);

impl From<usize> for NodeKey {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl NodeKey {
    /// "Dereferences" this index in an arena.
    ///
    /// Basically flips the arguments of [`Arena::get()`], but since this is in postfix, it's
    /// useful for chaining a series of operations.
    #[inline(always)]
    pub(crate) fn as_ref<T, P>(self, arena: &Arena<T, P>) -> &Node<T, P> {
        arena.get(self)
    }

    /// Unwrap the underlying index type.
    fn key(&self) -> usize {
        self.0
    }
}

/// A single entry of the queue, linked to its neighbours in key order.
#[derive(Debug, Clone)]
pub(crate) struct Node<T, P> {
    pub(crate) value: T,
    pub(crate) priority: P,

    /// Neighbour towards the back (larger keys).
    next: Option<NodeKey>,

    /// Neighbour towards the front (smaller keys).
    prev: Option<NodeKey>,
}

impl<T, P> Node<T, P> {
    pub(crate) fn next(&self) -> Option<NodeKey> {
        self.next
    }

    pub(crate) fn prev(&self) -> Option<NodeKey> {
        self.prev
    }
}

/// Storage for the nodes of one queue, together with both ends of the list running through them.
///
/// Links are arena indices rather than pointers, so the list never owns itself and there is
/// nothing to free by hand: dropping the arena drops every node.
#[derive(Debug, Clone)]
pub(crate) struct Arena<T, P> {
    /// Internal store of nodes, indexed by [`NodeKey`].
    nodes: Slab<Node<T, P>>,

    /// Node holding the smallest key.
    head: Option<NodeKey>,

    /// Node holding the largest key.
    tail: Option<NodeKey>,
}

impl<T, P> Arena<T, P> {
    pub(crate) fn new() -> Self {
        Self::with_capacity(0)
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn head(&self) -> Option<NodeKey> {
        self.head
    }

    pub(crate) fn tail(&self) -> Option<NodeKey> {
        self.tail
    }

    /// Retrieve a reference to a node from the store using a key.
    pub(crate) fn get(&self, key: NodeKey) -> &Node<T, P> {
        self.nodes
            .get(key.key())
            .expect("node key refers to a removed node")
    }

    fn get_mut(&mut self, key: NodeKey) -> &mut Node<T, P> {
        self.nodes
            .get_mut(key.key())
            .expect("node key refers to a removed node")
    }

    /// Allocate a node after the current tail.
    pub(crate) fn push_back(&mut self, value: T, priority: P) -> NodeKey {
        let prev = self.tail;
        let new_key = self
            .nodes
            .insert(Node {
                value,
                priority,
                next: None,
                prev,
            })
            .into();

        match prev {
            Some(prev) => self.get_mut(prev).next = Some(new_key),
            None => self.head = Some(new_key),
        }
        self.tail = Some(new_key);
        new_key
    }

    /// Allocate a node directly in front of `next_key`.
    pub(crate) fn insert_before(&mut self, next_key: NodeKey, value: T, priority: P) -> NodeKey {
        let prev = self.get(next_key).prev();
        let new_key = self
            .nodes
            .insert(Node {
                value,
                priority,
                next: Some(next_key),
                prev,
            })
            .into();

        self.get_mut(next_key).prev = Some(new_key);
        match prev {
            Some(prev) => self.get_mut(prev).next = Some(new_key),
            None => self.head = Some(new_key),
        }
        new_key
    }

    /// Detach a node from the list and deallocate it, handing back its contents.
    pub(crate) fn unlink(&mut self, key: NodeKey) -> (T, P) {
        let Node {
            value,
            priority,
            next,
            prev,
        } = self.nodes.remove(key.key());

        // prev.next = next
        match prev {
            Some(prev) => self.get_mut(prev).next = next,
            None => self.head = next,
        }

        // next.prev = prev
        match next {
            Some(next) => self.get_mut(next).prev = prev,
            None => self.tail = prev,
        }

        (value, priority)
    }

    /// Drop every node.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    /// Walk the list in both directions and assert that the links agree with the node count.
    #[cfg(test)]
    pub(crate) fn check_links(&self) {
        assert_eq!(self.head.is_none(), self.nodes.is_empty());
        assert_eq!(self.tail.is_none(), self.nodes.is_empty());

        let mut forward = 0;
        let mut last = None;
        let mut cursor = self.head;
        while let Some(key) = cursor {
            let node = key.as_ref(self);
            assert_eq!(node.prev(), last, "prev link of node {} is stale", key.key());
            forward += 1;
            last = Some(key);
            cursor = node.next();
        }
        assert_eq!(last, self.tail);
        assert_eq!(forward, self.nodes.len());

        let mut backward = 0;
        let mut cursor = self.tail;
        while let Some(key) = cursor {
            backward += 1;
            cursor = key.as_ref(self).prev();
        }
        assert_eq!(backward, self.nodes.len());
    }
}
