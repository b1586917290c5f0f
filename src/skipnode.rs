use std::{fmt, iter::FusedIterator};

/// Index of a node within a [`NodeArena`].
pub(crate) type NodeId = usize;

/// The head node always occupies the first slot of the arena.
pub(crate) const HEAD: NodeId = 0;

// ////////////////////////////////////////////////////////////////////////////
// SkipNode
// ////////////////////////////////////////////////////////////////////////////

/// SkipNodes make up the RankedSkipList. The list owns every node through its
/// arena, and nodes refer to one another by index.
///
/// The node has a `level` which corresponds to how 'high' the node reaches.
///
/// A node of `level` n has (n + 1) links to next nodes, which are stored in
/// a vector, and the same number of link lengths. The link length at a given
/// level is the rank distance between this node and the node linked at that
/// level. If there's no next node, it is the distance between this node and
/// one position past the last node of the list.
#[derive(Clone, Debug)]
pub(crate) struct SkipNode<V> {
    // The value should never be None, with the sole exception being the head
    // node.
    pub value: Option<V>,
    // Vector of links to the next node at the respective level. This vector
    // *must* be of length `self.level() + 1` and never changes length.
    pub links: Vec<Option<NodeId>>,
    // The corresponding length of each link.
    pub links_len: Vec<usize>,
}

impl<V> SkipNode<V> {
    /// Create a new head node, with `total_levels` links of length 1 (the
    /// one-past-the-end position of an empty list).
    pub fn head(total_levels: usize) -> Self {
        SkipNode {
            value: None,
            links: vec![None; total_levels],
            links_len: vec![1; total_levels],
        }
    }

    /// Create a new SkipNode with the given value and level.
    /// All links default to absent.
    pub fn new(value: V, level: usize) -> Self {
        SkipNode {
            value: Some(value),
            links: vec![None; level + 1],
            links_len: vec![0; level + 1],
        }
    }

    /// How high the node reaches.
    pub fn level(&self) -> usize {
        self.links.len() - 1
    }
}

// ////////////////////////////////////////////////////////////////////////////
// NodeArena
// ////////////////////////////////////////////////////////////////////////////

/// Slot storage for the nodes of a list.
///
/// Slot [`HEAD`] is never released. Released slots are recycled by later
/// allocations, so a `NodeId` is only meaningful while its node is resident.
#[derive(Clone)]
pub(crate) struct NodeArena<V> {
    slots: Vec<Option<SkipNode<V>>>,
    free: Vec<NodeId>,
}

impl<V> NodeArena<V> {
    /// Create an arena holding only a head node with `total_levels` links.
    pub fn new(total_levels: usize) -> Self {
        NodeArena {
            slots: vec![Some(SkipNode::head(total_levels))],
            free: Vec::new(),
        }
    }

    /// Store a node, returning its index.
    pub fn alloc(&mut self, node: SkipNode<V>) -> NodeId {
        if let Some(id) = self.free.pop() {
            self.slots[id] = Some(node);
            id
        } else {
            self.slots.push(Some(node));
            self.slots.len() - 1
        }
    }

    /// Remove a node from the arena, returning it.
    ///
    /// Returns `None` for the head or for a slot which is not occupied.
    pub fn release(&mut self, id: NodeId) -> Option<SkipNode<V>> {
        if id == HEAD {
            return None;
        }
        let node = self.slots.get_mut(id)?.take()?;
        self.free.push(id);
        Some(node)
    }

    /// The node stored at `id`.
    ///
    /// # Panics
    ///
    /// Panics if the slot is vacant; the list only ever follows links to
    /// resident nodes.
    #[expect(clippy::expect_used, reason = "Links only ever point at resident nodes")]
    pub fn node(&self, id: NodeId) -> &SkipNode<V> {
        self.slots[id].as_ref().expect("link to a released node")
    }

    /// The node stored at `id`, mutably.
    ///
    /// # Panics
    ///
    /// Same as [`NodeArena::node`].
    #[expect(clippy::expect_used, reason = "Links only ever point at resident nodes")]
    pub fn node_mut(&mut self, id: NodeId) -> &mut SkipNode<V> {
        self.slots[id].as_mut().expect("link to a released node")
    }

    /// The value held by the node at `id`, or `None` for the head.
    pub fn value(&self, id: NodeId) -> Option<&V> {
        self.node(id).value.as_ref()
    }

    /// The node linked from `id` at `level`.
    pub fn next(&self, id: NodeId, level: usize) -> Option<NodeId> {
        self.node(id).links[level]
    }

    /// The length of the link leaving `id` at `level`.
    pub fn span(&self, id: NodeId, level: usize) -> usize {
        self.node(id).links_len[level]
    }

    /// Number of nodes stored, excluding the head.
    pub fn resident(&self) -> usize {
        self.slots.len() - 1 - self.free.len()
    }
}

// /////////////////////////////////
// Iterators
// /////////////////////////////////

/// Iterator over the values of a list by reference, in ascending order.
///
/// Created by [`RankedSkipList::iter`][crate::RankedSkipList::iter].
pub struct Iter<'a, T> {
    pub(crate) nodes: &'a NodeArena<T>,
    pub(crate) next: Option<NodeId>,
    pub(crate) size: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        let node = self.nodes.node(current);
        self.next = node.links[0];
        self.size -= 1;
        node.value.as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.size, Some(self.size))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Iter {
            nodes: self.nodes,
            next: self.next,
            size: self.size,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{HEAD, Iter, NodeArena, SkipNode};

    /// Link `values` at level 0 only, fixing up spans by hand.
    fn chain(values: &[u32]) -> NodeArena<u32> {
        let mut arena = NodeArena::new(3);
        let mut prev = HEAD;
        for &v in values {
            let id = arena.alloc(SkipNode::new(v, 0));
            arena.node_mut(prev).links[0] = Some(id);
            arena.node_mut(prev).links_len[0] = 1;
            arena.node_mut(id).links_len[0] = 1;
            prev = id;
        }
        arena
    }

    #[test]
    fn head_node() {
        let head = SkipNode::<u8>::head(4);
        assert!(head.value.is_none());
        assert_eq!(head.level(), 3);
        assert_eq!(head.links, vec![None; 4]);
        assert_eq!(head.links_len, vec![1; 4]);
    }

    #[test]
    fn new_node() {
        let node = SkipNode::new('a', 2);
        assert_eq!(node.value, Some('a'));
        assert_eq!(node.level(), 2);
        assert_eq!(node.links.len(), node.links_len.len());
    }

    #[test]
    fn arena_recycles_slots() {
        let mut arena = NodeArena::new(1);
        let a = arena.alloc(SkipNode::new(1, 0));
        let b = arena.alloc(SkipNode::new(2, 0));
        assert_eq!(arena.resident(), 2);

        assert_eq!(arena.release(a).and_then(|n| n.value), Some(1));
        assert!(arena.release(a).is_none());
        assert_eq!(arena.resident(), 1);

        let c = arena.alloc(SkipNode::new(3, 0));
        assert_eq!(c, a);
        assert_eq!(arena.value(c), Some(&3));
        assert_eq!(arena.value(b), Some(&2));
        assert_eq!(arena.resident(), 2);
    }

    #[test]
    fn arena_never_releases_head() {
        let mut arena = NodeArena::<u8>::new(2);
        assert!(arena.release(HEAD).is_none());
        assert!(arena.value(HEAD).is_none());
        assert_eq!(arena.resident(), 0);
    }

    #[test]
    #[should_panic(expected = "link to a released node")]
    fn released_slot_is_not_followed() {
        let mut arena = NodeArena::new(1);
        let a = arena.alloc(SkipNode::new(1, 0));
        arena.release(a);
        let _ = arena.value(a);
    }

    #[test]
    fn iter() {
        let arena = chain(&[1, 2, 3]);
        let iter = Iter {
            nodes: &arena,
            next: arena.next(HEAD, 0),
            size: 3,
        };
        assert_eq!(iter.len(), 3);
        assert_eq!(format!("{iter:?}"), "[1, 2, 3]");
        assert_eq!(iter.copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
