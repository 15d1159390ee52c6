//! Doubly linked list of distinct priority values, front to back.
//!
//! Nodes live in a slot map so a `NodeId` stays valid while other nodes are
//! spliced in and out around it.

use slotmap::SlotMap;

slotmap::new_key_type! {
    pub(crate) struct NodeId;
}

#[derive(Debug)]
struct Node<V> {
    value: V,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

#[derive(Debug)]
pub(crate) struct Sequence<V> {
    nodes: SlotMap<NodeId, Node<V>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
}

impl<V> Sequence<V> {
    pub(crate) fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
            tail: None,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn front(&self) -> Option<NodeId> {
        self.head
    }

    pub(crate) fn back(&self) -> Option<NodeId> {
        self.tail
    }

    /// Panics if `id` was removed. Callers only hold ids taken from the
    /// key index or the membership index, which are kept in lockstep.
    pub(crate) fn value(&self, id: NodeId) -> &V {
        &self.nodes[id].value
    }

    pub(crate) fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].prev
    }

    pub(crate) fn next(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].next
    }

    /// Inserts `value` directly after `at`, or at the front when `at` is None.
    pub(crate) fn insert_after(&mut self, at: Option<NodeId>, value: V) -> NodeId {
        let next = match at {
            Some(at) => self.nodes[at].next,
            None => self.head,
        };
        self.link(at, next, value)
    }

    /// Inserts `value` directly before `at`, or at the back when `at` is None.
    pub(crate) fn insert_before(&mut self, at: Option<NodeId>, value: V) -> NodeId {
        let prev = match at {
            Some(at) => self.nodes[at].prev,
            None => self.tail,
        };
        self.link(prev, at, value)
    }

    fn link(&mut self, prev: Option<NodeId>, next: Option<NodeId>, value: V) -> NodeId {
        let id = self.nodes.insert(Node { value, prev, next });
        match prev {
            Some(p) => self.nodes[p].next = Some(id),
            None => self.head = Some(id),
        }
        match next {
            Some(n) => self.nodes[n].prev = Some(id),
            None => self.tail = Some(id),
        }
        id
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> Option<V> {
        let node = self.nodes.remove(id)?;
        match node.prev {
            Some(p) => self.nodes[p].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.nodes[n].prev = node.prev,
            None => self.tail = node.prev,
        }
        Some(node.value)
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
    }

    pub(crate) fn iter(&self) -> Iter<'_, V> {
        Iter {
            seq: self,
            cur: self.head,
        }
    }
}

pub(crate) struct Iter<'a, V> {
    seq: &'a Sequence<V>,
    cur: Option<NodeId>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (NodeId, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cur?;
        let node = &self.seq.nodes[id];
        self.cur = node.next;
        Some((id, &node.value))
    }
}
