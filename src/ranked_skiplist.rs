//! An always-ordered skiplist set with order-statistics queries.

use std::{cmp::Ordering, fmt, hash, hash::Hash, iter};

use thiserror::Error;

use crate::{
    comparator::{Comparator, Natural},
    level_generator::{Geometric, LevelGenerator},
    skipnode::{HEAD, Iter, NodeArena, NodeId, SkipNode},
};

// ////////////////////////////////////////////////////////////////////////////
// Errors
// ////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug, PartialEq, Eq)]
/// Errors that can occur when inserting at an explicit level.
#[non_exhaustive]
pub enum InsertError {
    /// The requested level is above the level cap of the list.
    #[error("level {level} exceeds the maximum level {max}.")]
    LevelOutOfRange {
        /// The level which was requested.
        level: usize,
        /// The highest level a node of this list may reach.
        max: usize,
    },
}

// ////////////////////////////////////////////////////////////////////////////
// RankedSkipList
// ////////////////////////////////////////////////////////////////////////////

/// The ranked skiplist stores a set of values such that they are always
/// sorted, and provides efficient ways to insert, remove and look up values
/// as well as to convert between a value and its rank (its 1-based position
/// in ascending order).
///
/// Every link of every node records how many ranks it jumps over, so that the
/// rank of a value is the sum of the links followed to reach it. Ranks are
/// therefore never stored on the nodes themselves and no renumbering is
/// needed when the list changes.
///
/// Values which compare equal under the list's [`Comparator`] are considered
/// to be the same value: inserting a value which is already resident leaves
/// the list unchanged.
///
/// The list is single-owner and performs no internal synchronization.
/// Iteration borrows the list, so it cannot be mutated while being visited.
///
/// # Examples
///
/// ```
/// use ranked_skiplist::RankedSkipList;
///
/// let mut skiplist = RankedSkipList::new();
/// skiplist.extend([50, 10, 40, 20, 30]);
///
/// assert_eq!(skiplist.rank(&40), Some(4));
/// assert_eq!(skiplist.get_by_rank(2), Some(&20));
/// assert_eq!(skiplist.lower_bound(&25), Some(&30));
/// ```
#[derive(Clone)]
pub struct RankedSkipList<T, C = Natural, G = Geometric> {
    // Storage for every node; the head sits in the first slot.
    nodes: NodeArena<T>,
    len: usize,
    // Highest level used by any resident node.
    max_level: usize,
    // Highest level any node may reach. The head has `max_level_cap + 1`
    // links.
    max_level_cap: usize,
    // Number of resident nodes reaching each level.
    level_count: Vec<usize>,
    compare: C,
    level_generator: G,
}

/// Which successors a descent moves past at each level.
#[derive(Clone, Copy, Debug)]
enum Advance {
    /// Move past values strictly less than the target.
    WhileLess,
    /// Move past values less than or equal to the target.
    WhileLessOrEqual,
}

impl Advance {
    fn admits(self, ordering: Ordering) -> bool {
        match self {
            Advance::WhileLess => ordering == Ordering::Less,
            Advance::WhileLessOrEqual => ordering != Ordering::Greater,
        }
    }
}

// ///////////////////////////////////////////////
// Constructors
// ///////////////////////////////////////////////

impl<T: Ord> RankedSkipList<T> {
    /// Create a new skiplist ordered by `T`'s [`Ord`] implementation, with
    /// the default level cap of
    /// [`DEFAULT_MAX_LEVEL_CAP`][crate::DEFAULT_MAX_LEVEL_CAP] and `$p = 1/2$`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::RankedSkipList;
    ///
    /// let mut skiplist: RankedSkipList<i64> = RankedSkipList::new();
    /// assert!(skiplist.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(Natural, Geometric::default())
    }

    /// Constructs a new, empty skiplist with the optimal number of levels for
    /// the intended capacity. Specifically, it uses `floor(log2(capacity))`
    /// number of levels, ensuring that only *a few* nodes occupy the highest
    /// level.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::RankedSkipList;
    ///
    /// let mut skiplist = RankedSkipList::with_capacity(100);
    /// skiplist.extend(0..100);
    /// assert_eq!(skiplist.max_level_cap(), 5);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let levels = capacity
            .checked_ilog2()
            .and_then(|levels| usize::try_from(levels).ok())
            .map_or(1, |levels| levels.max(1));
        Self::with_parts(Natural, Geometric::with_total(levels))
    }
}

impl<T, C: Comparator<T>> RankedSkipList<T, C> {
    /// Create a new skiplist using the provided comparator in order to
    /// determine the ordering of values within the list.
    ///
    /// The comparator must be well-behaved; see the
    /// [`comparator`][crate::comparator] module.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::RankedSkipList;
    /// use std::cmp::Ordering;
    ///
    /// // Store even number before odd ones and sort as usual within same parity group.
    /// let mut skiplist = RankedSkipList::with_comparator(|a: &u64, b: &u64| {
    ///     if a % 2 == b % 2 {
    ///         a.cmp(b)
    ///     } else if a % 2 == 0 {
    ///         Ordering::Less
    ///     } else {
    ///         Ordering::Greater
    ///     }
    /// });
    /// skiplist.extend(0..6);
    /// assert_eq!(skiplist.iter().copied().collect::<Vec<_>>(), [0, 2, 4, 1, 3, 5]);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_comparator(compare: C) -> Self {
        Self::with_parts(compare, Geometric::default())
    }
}

impl<T, C: Comparator<T>, G: LevelGenerator> RankedSkipList<T, C, G> {
    /// Create a new skiplist from a comparator and a level generator.
    ///
    /// The level cap of the list is `level_generator.total() - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::{Geometric, Natural, RankedSkipList};
    ///
    /// let generator = Geometric::seeded(8, 0.25, 42)?;
    /// let mut skiplist = RankedSkipList::with_parts(Natural, generator);
    /// skiplist.insert("a");
    /// assert_eq!(skiplist.max_level_cap(), 7);
    /// # Ok::<(), ranked_skiplist::GeometricError>(())
    /// ```
    #[inline]
    pub fn with_parts(compare: C, level_generator: G) -> Self {
        let total = level_generator.total().max(1);
        RankedSkipList {
            nodes: NodeArena::new(total),
            len: 0,
            max_level: 0,
            max_level_cap: total - 1,
            level_count: vec![0; total],
            compare,
            level_generator,
        }
    }

    // ///////////////////////////////////////////////
    // Accessors
    // ///////////////////////////////////////////////

    /// Returns the number of values in the skiplist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::RankedSkipList;
    ///
    /// let mut skiplist = RankedSkipList::new();
    /// skiplist.extend(0..10);
    /// assert_eq!(skiplist.len(), 10);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the skiplist contains no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::RankedSkipList;
    ///
    /// let mut skiplist = RankedSkipList::new();
    /// assert!(skiplist.is_empty());
    ///
    /// skiplist.insert(1);
    /// assert!(!skiplist.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The highest level any node of this list may reach.
    #[inline]
    pub fn max_level_cap(&self) -> usize {
        self.max_level_cap
    }

    /// The highest level currently reached by a resident node (0 when the
    /// list is empty).
    #[inline]
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    /// The comparator ordering this list.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Clears the skiplist, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::RankedSkipList;
    ///
    /// let mut skiplist = RankedSkipList::new();
    /// skiplist.extend(0..10);
    /// skiplist.clear();
    /// assert!(skiplist.is_empty());
    /// assert_eq!(skiplist.get_by_rank(1), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.nodes = NodeArena::new(self.max_level_cap + 1);
        self.len = 0;
        self.max_level = 0;
        self.level_count.fill(0);
    }

    // ///////////////////////////////////////////////
    // Mutation
    // ///////////////////////////////////////////////

    /// Insert the value into the skiplist, at a level drawn from the list's
    /// level generator.
    ///
    /// Returns `true` if the value was inserted, and `false` if an equal
    /// value was already resident (in which case nothing changes and `value`
    /// is dropped).
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::RankedSkipList;
    ///
    /// let mut skiplist = RankedSkipList::new();
    ///
    /// assert!(skiplist.insert(5));
    /// assert!(skiplist.insert(0));
    /// assert!(!skiplist.insert(5));
    /// assert_eq!(skiplist.len(), 2);
    /// ```
    #[inline]
    pub fn insert(&mut self, value: T) -> bool {
        let level = self.level_generator.level().min(self.max_level_cap);
        self.insert_with_level(value, level)
    }

    /// Insert the value into the skiplist with a node reaching exactly
    /// `level`, bypassing the level generator.
    ///
    /// This is mostly useful to build a list of a known shape in tests and
    /// benchmarks. Returns whether the value was newly inserted.
    ///
    /// # Errors
    ///
    /// Returns [`InsertError::LevelOutOfRange`] if `level` is above
    /// [`max_level_cap`][Self::max_level_cap]; the list is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::{InsertError, RankedSkipList};
    ///
    /// let mut skiplist = RankedSkipList::new();
    /// assert_eq!(skiplist.insert_at_level(10, 3), Ok(true));
    /// assert_eq!(skiplist.max_level(), 3);
    /// assert_eq!(
    ///     skiplist.insert_at_level(20, 17),
    ///     Err(InsertError::LevelOutOfRange { level: 17, max: 16 })
    /// );
    /// ```
    #[inline]
    pub fn insert_at_level(&mut self, value: T, level: usize) -> Result<bool, InsertError> {
        if level > self.max_level_cap {
            return Err(InsertError::LevelOutOfRange {
                level,
                max: self.max_level_cap,
            });
        }
        Ok(self.insert_with_level(value, level))
    }

    /// Removes and returns the value equal to the one given, or `None` if
    /// there is no such value in the skiplist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::RankedSkipList;
    ///
    /// let mut skiplist = RankedSkipList::new();
    /// skiplist.extend(0..10);
    /// assert_eq!(skiplist.remove(&4), Some(4));
    /// assert_eq!(skiplist.remove(&4), None);
    /// assert_eq!(skiplist.rank(&5), Some(5));
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let mut update = vec![HEAD; self.max_level_cap + 1];
        #[cfg_attr(not(feature = "tracing"), expect(unused_variables))]
        let (before, preceding) = self.descend(value, Advance::WhileLess, |level, node, _| {
            update[level] = node;
        });

        let target = self.nodes.next(before, 0)?;
        if !self.is_equal(target, value) {
            return None;
        }
        let removed = self.nodes.release(target)?;
        let level = removed.level();

        for l in 0..=level {
            let prev = self.nodes.node_mut(update[l]);
            debug_assert_eq!(prev.links[l], Some(target));
            prev.links[l] = removed.links[l];
            prev.links_len[l] = prev.links_len[l] + removed.links_len[l] - 1;
            self.level_count[l] -= 1;
        }
        // Links passing over the removed node above its level, including the
        // head's links at levels not in use.
        for l in level + 1..=self.max_level_cap {
            self.nodes.node_mut(update[l]).links_len[l] -= 1;
        }
        self.len -= 1;
        debug_assert_eq!(self.nodes.resident(), self.len);

        #[cfg(feature = "tracing")]
        let top = self.max_level;
        while self.max_level > 0 && self.level_count[self.max_level] == 0 {
            self.max_level -= 1;
        }

        #[cfg(feature = "tracing")]
        {
            tracing::trace!(level, rank = preceding + 1, len = self.len, "removed node");
            if self.max_level != top {
                tracing::debug!(from = top, to = self.max_level, "max level shrank");
            }
        }

        removed.value
    }

    // ///////////////////////////////////////////////
    // Lookup
    // ///////////////////////////////////////////////

    /// Returns a reference to the resident value equal to the one given, or
    /// `None` if there is no such value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::RankedSkipList;
    ///
    /// let skiplist: RankedSkipList<_> = ["a", "b"].into_iter().collect();
    /// assert_eq!(skiplist.get(&"a"), Some(&"a"));
    /// assert_eq!(skiplist.get(&"c"), None);
    /// ```
    #[inline]
    pub fn get(&self, value: &T) -> Option<&T> {
        let (node, _) = self.descend(value, Advance::WhileLessOrEqual, |_, _, _| {});
        if self.is_equal(node, value) {
            self.nodes.value(node)
        } else {
            None
        }
    }

    /// Returns true if the value is contained in the skiplist.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::RankedSkipList;
    ///
    /// let mut skiplist = RankedSkipList::new();
    /// skiplist.extend(0..10);
    /// assert!(skiplist.contains(&4));
    /// assert!(!skiplist.contains(&15));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Returns the smallest resident value which is not less than `value`, or
    /// `None` if every resident value is smaller.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::RankedSkipList;
    ///
    /// let skiplist: RankedSkipList<_> = [10, 20, 30, 40, 50].into_iter().collect();
    /// assert_eq!(skiplist.lower_bound(&25), Some(&30));
    /// assert_eq!(skiplist.lower_bound(&10), Some(&10));
    /// assert_eq!(skiplist.lower_bound(&55), None);
    /// ```
    #[inline]
    pub fn lower_bound(&self, value: &T) -> Option<&T> {
        let (node, _) = self.descend(value, Advance::WhileLess, |_, _, _| {});
        self.nodes
            .next(node, 0)
            .and_then(|next| self.nodes.value(next))
    }

    /// Returns the value with the given 1-based rank, or `None` if `rank` is
    /// 0 or greater than the length of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::RankedSkipList;
    ///
    /// let skiplist: RankedSkipList<_> = [30, 10, 20].into_iter().collect();
    /// assert_eq!(skiplist.get_by_rank(1), Some(&10));
    /// assert_eq!(skiplist.get_by_rank(3), Some(&30));
    /// assert_eq!(skiplist.get_by_rank(0), None);
    /// assert_eq!(skiplist.get_by_rank(4), None);
    /// ```
    pub fn get_by_rank(&self, rank: usize) -> Option<&T> {
        if rank == 0 || rank > self.len {
            return None;
        }
        let mut node = HEAD;
        let mut traversed = 0;
        for level in (0..=self.max_level).rev() {
            while let Some(next) = self.nodes.next(node, level) {
                let span = self.nodes.span(node, level);
                if traversed + span > rank {
                    break;
                }
                traversed += span;
                node = next;
            }
            if traversed == rank {
                return self.nodes.value(node);
            }
        }
        None
    }

    /// Returns the 1-based rank of the resident value equal to `value`, or
    /// `None` if there is no such value.
    ///
    /// This is the inverse of [`get_by_rank`][Self::get_by_rank].
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::RankedSkipList;
    ///
    /// let skiplist: RankedSkipList<_> = [30, 10, 20].into_iter().collect();
    /// assert_eq!(skiplist.rank(&20), Some(2));
    /// assert_eq!(skiplist.rank(&25), None);
    /// ```
    #[inline]
    pub fn rank(&self, value: &T) -> Option<usize> {
        let (node, rank) = self.descend(value, Advance::WhileLessOrEqual, |_, _, _| {});
        self.is_equal(node, value).then_some(rank)
    }

    /// Provides a reference to the smallest value, or `None` if the skiplist
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::RankedSkipList;
    ///
    /// let mut skiplist = RankedSkipList::new();
    /// assert!(skiplist.first().is_none());
    ///
    /// skiplist.insert(2);
    /// skiplist.insert(1);
    /// assert_eq!(skiplist.first(), Some(&1));
    /// ```
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.nodes
            .next(HEAD, 0)
            .and_then(|node| self.nodes.value(node))
    }

    /// Provides a reference to the largest value, or `None` if the skiplist
    /// is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::RankedSkipList;
    ///
    /// let mut skiplist = RankedSkipList::new();
    /// assert!(skiplist.last().is_none());
    ///
    /// skiplist.insert(1);
    /// skiplist.insert(2);
    /// assert_eq!(skiplist.last(), Some(&2));
    /// ```
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.get_by_rank(self.len)
    }

    // ///////////////////////////////////////////////
    // Iteration
    // ///////////////////////////////////////////////

    /// Creates an iterator over the values of the skiplist, in ascending
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::RankedSkipList;
    ///
    /// let mut skiplist = RankedSkipList::new();
    /// skiplist.extend([3, 1, 2]);
    /// assert_eq!(skiplist.iter().collect::<Vec<_>>(), [&1, &2, &3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            next: self.nodes.next(HEAD, 0),
            size: self.len,
        }
    }

    /// Visits the values of the skiplist in ascending order, stopping as soon
    /// as `visitor` returns `false`.
    ///
    /// Each call starts afresh from the smallest value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ranked_skiplist::RankedSkipList;
    ///
    /// let skiplist: RankedSkipList<_> = (1..=10).collect();
    /// let mut seen = Vec::new();
    /// skiplist.for_each_while(|&v| {
    ///     seen.push(v);
    ///     v < 3
    /// });
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    #[inline]
    pub fn for_each_while<F>(&self, mut visitor: F)
    where
        F: FnMut(&T) -> bool,
    {
        for value in self.iter() {
            if !visitor(value) {
                break;
            }
        }
    }
}

// ///////////////////////////////////////////////
// Internal methods
// ///////////////////////////////////////////////

impl<T, C: Comparator<T>, G> RankedSkipList<T, C, G> {
    /// Descends from the highest level in use down to level 0, moving past
    /// every successor which `advance` admits when compared against `value`.
    ///
    /// `record` is called once per level with the level, the last node
    /// reached at that level and that node's rank (0 for the head).
    ///
    /// Returns the node reached at level 0 and its rank.
    fn descend<F>(&self, value: &T, advance: Advance, mut record: F) -> (NodeId, usize)
    where
        F: FnMut(usize, NodeId, usize),
    {
        let mut node = HEAD;
        let mut traversed = 0;
        for level in (0..=self.max_level).rev() {
            while let Some(next) = self.nodes.next(node, level) {
                let admitted = self
                    .nodes
                    .value(next)
                    .is_some_and(|next_value| advance.admits(self.compare.compare(next_value, value)));
                if !admitted {
                    break;
                }
                traversed += self.nodes.span(node, level);
                node = next;
            }
            record(level, node, traversed);
        }
        (node, traversed)
    }

    /// Whether `node` holds a value equal to `value`. Always false for the
    /// head.
    fn is_equal(&self, node: NodeId, value: &T) -> bool {
        self.nodes
            .value(node)
            .is_some_and(|v| self.compare.compare(v, value) == Ordering::Equal)
    }

    fn insert_with_level(&mut self, value: T, level: usize) -> bool {
        let mut update = vec![HEAD; self.max_level_cap + 1];
        let mut rank = vec![0; self.max_level_cap + 1];
        let (last, skipped) = self.descend(&value, Advance::WhileLessOrEqual, |l, node, r| {
            update[l] = node;
            rank[l] = r;
        });
        if self.is_equal(last, &value) {
            return false;
        }

        // Levels above the current maximum were not visited and keep the
        // head (at rank 0) as their predecessor.
        if level > self.max_level {
            #[cfg(feature = "tracing")]
            tracing::debug!(from = self.max_level, to = level, "max level grew");
            self.max_level = level;
        }

        let id = self.nodes.alloc(SkipNode::new(value, level));
        for l in 0..=level {
            let (prev_next, prev_len) = {
                let prev = self.nodes.node(update[l]);
                (prev.links[l], prev.links_len[l])
            };
            let node = self.nodes.node_mut(id);
            node.links[l] = prev_next;
            node.links_len[l] = rank[l] + prev_len - skipped;

            let prev = self.nodes.node_mut(update[l]);
            prev.links[l] = Some(id);
            prev.links_len[l] = skipped - rank[l] + 1;

            self.level_count[l] += 1;
        }
        // Links passing over the new node above its level, including the
        // head's links at levels not in use.
        for l in level + 1..=self.max_level_cap {
            self.nodes.node_mut(update[l]).links_len[l] += 1;
        }
        self.len += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(level, rank = skipped + 1, len = self.len, "inserted node");

        true
    }
}

#[cfg(test)]
impl<T, C: Comparator<T>, G> RankedSkipList<T, C, G> {
    /// Checks the integrity of the skiplist.
    fn check(&self) {
        assert!(self.max_level <= self.max_level_cap);
        assert_eq!(self.nodes.resident(), self.len);
        assert_eq!(self.nodes.node(HEAD).links.len(), self.max_level_cap + 1);

        for level in 0..=self.max_level_cap {
            // Walk the level, checking order and that every span matches the
            // distance measured along level 0.
            let mut node = HEAD;
            let mut rank = 0;
            let mut members = 0;
            let mut total = 0;
            while let Some(next) = self.nodes.next(node, level) {
                let next_rank = self
                    .rank_by_walk(next)
                    .unwrap_or_else(|| panic!("node unreachable at level 0"));
                assert_eq!(self.nodes.span(node, level), next_rank - rank);
                if let (Some(a), Some(b)) = (self.nodes.value(node), self.nodes.value(next)) {
                    assert_eq!(self.compare.compare(a, b), Ordering::Less);
                }
                total += next_rank - rank;
                rank = next_rank;
                node = next;
                members += 1;
            }
            assert_eq!(self.nodes.span(node, level), self.len + 1 - rank);
            total += self.nodes.span(node, level);
            assert_eq!(total, self.len + 1, "spans at level {level}");
            assert_eq!(self.level_count[level], members, "count at level {level}");
            if level > self.max_level {
                assert_eq!(members, 0, "level {level} is above the max level");
            }
        }
        if self.max_level > 0 {
            assert!(self.level_count[self.max_level] > 0);
        }
    }

    /// Rank of a node measured by walking level 0.
    fn rank_by_walk(&self, target: NodeId) -> Option<usize> {
        let mut node = self.nodes.next(HEAD, 0);
        let mut rank = 1;
        while let Some(current) = node {
            if current == target {
                return Some(rank);
            }
            node = self.nodes.next(current, 0);
            rank += 1;
        }
        None
    }

    /// The link lengths of the node holding `value`.
    fn spans_of(&self, value: &T) -> Option<Vec<usize>> {
        let mut node = self.nodes.next(HEAD, 0);
        while let Some(current) = node {
            if self.is_equal(current, value) {
                return Some(self.nodes.node(current).links_len.clone());
            }
            node = self.nodes.next(current, 0);
        }
        None
    }

    /// The link lengths of the head.
    fn head_spans(&self) -> &[usize] {
        &self.nodes.node(HEAD).links_len
    }
}

// ///////////////////////////////////////////////
// Trait implementation
// ///////////////////////////////////////////////

impl<T: Ord> Default for RankedSkipList<T> {
    #[inline]
    fn default() -> RankedSkipList<T> {
        RankedSkipList::new()
    }
}

/// This implementation of PartialEq only checks that the *values* are equal;
/// it does not check for equivalence of other features (such as the ordering
/// function and the node levels). Furthermore, this uses `T`'s implementation
/// of PartialEq and *does not* use the owning skiplist's comparison function.
impl<A, B, CA, CB, GA, GB> PartialEq<RankedSkipList<B, CB, GB>> for RankedSkipList<A, CA, GA>
where
    A: PartialEq<B>,
    CA: Comparator<A>,
    CB: Comparator<B>,
    GA: LevelGenerator,
    GB: LevelGenerator,
{
    #[inline]
    fn eq(&self, other: &RankedSkipList<B, CB, GB>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, C, G> Eq for RankedSkipList<T, C, G>
where
    T: Eq,
    C: Comparator<T>,
    G: LevelGenerator,
{
}

impl<T, C, G> Hash for RankedSkipList<T, C, G>
where
    T: Hash,
    C: Comparator<T>,
    G: LevelGenerator,
{
    #[inline]
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T, C, G> Extend<T> for RankedSkipList<T, C, G>
where
    C: Comparator<T>,
    G: LevelGenerator,
{
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iterable: I) {
        for value in iterable {
            self.insert(value);
        }
    }
}

impl<T: Ord> iter::FromIterator<T> for RankedSkipList<T> {
    #[inline]
    fn from_iter<I>(iter: I) -> RankedSkipList<T>
    where
        I: IntoIterator<Item = T>,
    {
        let mut skiplist = RankedSkipList::new();
        skiplist.extend(iter);
        skiplist
    }
}

impl<'a, T, C, G> IntoIterator for &'a RankedSkipList<T, C, G>
where
    C: Comparator<T>,
    G: LevelGenerator,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C, G> fmt::Debug for RankedSkipList<T, C, G>
where
    T: fmt::Debug,
    C: Comparator<T>,
    G: LevelGenerator,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, C, G> fmt::Display for RankedSkipList<T, C, G>
where
    T: fmt::Display,
    C: Comparator<T>,
    G: LevelGenerator,
{
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;

        for (i, entry) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        write!(f, "]")
    }
}

// ////////////////////////////////////////////////////////////////////////////
// Tests
// ////////////////////////////////////////////////////////////////////////////
