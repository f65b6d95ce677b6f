//! A wait-free [disjoint-sets/union-find] forest over a caller supplied arena.
//!
//! See [`Forest`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`Forest`]: struct.Forest.html

use {
    std::fmt,
    crate::{
        disjoint_sets::{
            find,
            node::Node,
        },
        error::Error,
    },
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// A wait-free [disjoint-sets/union-find] forest over an arena of [`Node`]s.
///
/// Every slot of the arena is an element and each element is a member of a set.
/// Initially each element has its own set but sets can be joined with the `unite` method.
/// A `Forest` only borrows the arena, the caller decides where the nodes live
/// and releases them once no thread uses the `Forest` anymore.
///
/// All methods take `&self` and a `Forest` is `Copy`, `Send` and `Sync`,
/// so any number of threads can call `same_set` and `unite` at the same time.
/// No thread ever waits on another one: every method is a bounded sequence of
/// atomic loads and compare-exchanges.
///
/// Elements are identified by their index in the arena and this order decides
/// which of two roots is placed under the other.
/// The `O(α(n))` amortized bound needs this order to be independent of the order
/// of the calls, shuffle the assignment of indices if the two might correlate.
///
/// This implementation chooses not to expose the `find` method and instead has a `same_set` method.
/// The representative of a set is only stable while no thread unites sets.
///
/// # Examples
///
/// ```
/// use atomic_partitions::{Forest, Node};
///
/// let mut arena = Node::arena(4);
/// let forest = Forest::init_arena(&mut arena);
///
/// std::thread::scope(|scope| {
///     scope.spawn(|| forest.unite(0, 1));
///     scope.spawn(|| forest.unite(2, 3));
/// });
///
/// assert!(forest.same_set(0, 1));
/// assert!(forest.same_set(2, 3));
/// assert!(!forest.same_set(1, 2));
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
/// [`Node`]: ../node/struct.Node.html
#[derive(Clone, Copy)]
pub struct Forest<'a> {
    /// Each node stores the index of its parent which is never lower than its own index.
    pub(crate) nodes: &'a [Node],
}

impl<'a> Forest<'a> {
    /// Makes every node of `storage` the only element of its own set.
    ///
    /// The arena has `storage.len()` elements with indices `0 .. storage.len()`.
    /// Any previous contents of the nodes are forgotten.
    ///
    /// # Examples
    ///
    /// ```
    /// use atomic_partitions::{Forest, Node};
    ///
    /// let mut arena = Node::arena(3);
    /// let forest = Forest::init_arena(&mut arena);
    ///
    /// assert!(forest.len() == 3);
    /// assert!(forest.amount_of_sets() == 3);
    /// ```
    pub fn init_arena(storage: &'a mut [Node]) -> Self {
        for (index, node) in storage.iter_mut().enumerate() {
            node.reset(index);
        }

        log::debug!("initialized an arena of {} nodes", storage.len());

        Self {
            nodes: storage,
        }
    }

    /// Does the same as `init_arena` but initializes the nodes in parallel.
    ///
    /// # Examples
    ///
    /// ```
    /// use atomic_partitions::{Forest, Node};
    ///
    /// let mut arena = Node::arena(10_000);
    /// let forest = Forest::par_init_arena(&mut arena);
    ///
    /// assert!(forest.amount_of_sets() == 10_000);
    /// ```
    #[cfg(feature = "rayon")]
    pub fn par_init_arena(storage: &'a mut [Node]) -> Self {
        storage
            .par_iter_mut()
            .enumerate()
            .for_each(|(index, node)| node.reset(index));

        log::debug!("initialized an arena of {} nodes in parallel", storage.len());

        Self {
            nodes: storage,
        }
    }

    /// Returns the number of elements in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the arena has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `first_index` and `second_index` are in the same set.
    ///
    /// The answer was true at some moment during the call.
    /// Two indices that were united before the call started are always in the same set.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use atomic_partitions::{Forest, Node};
    ///
    /// let mut arena = Node::arena(4);
    /// let forest = Forest::init_arena(&mut arena);
    ///
    /// forest.unite(1, 3);
    /// forest.unite(0, 1);
    ///
    /// assert!(forest.same_set(0, 1));
    /// assert!(!forest.same_set(0, 2));
    /// assert!(forest.same_set(0, 3));
    /// assert!(!forest.same_set(1, 2));
    /// assert!(forest.same_set(1, 3));
    /// assert!(!forest.same_set(2, 3));
    /// ```
    pub fn same_set(&self, first_index: usize, second_index: usize) -> bool {
        let mut first = first_index;
        let mut second = second_index;

        loop {
            first = find::plain(self.nodes, first);
            second = find::plain(self.nodes, second);

            if first == second {
                return true
            }

            // A root only stops being a root by getting a parent with a higher index.
            // If `first` is still a root the two walks ended in different trees.
            if self.is_root(first) {
                return false
            }

            if second < first && self.is_root(second) {
                return false
            }
        }
    }

    /// Like `same_set` but returns an error instead of panicking.
    ///
    /// # Examples
    ///
    /// ```
    /// use atomic_partitions::{Error, Forest, Node};
    ///
    /// let mut arena = Node::arena(2);
    /// let forest = Forest::init_arena(&mut arena);
    ///
    /// assert_eq!(forest.try_same_set(0, 1), Ok(false));
    /// assert_eq!(forest.try_same_set(0, 2), Err(Error::OutOfBounds { index: 2, len: 2 }));
    /// ```
    pub fn try_same_set(&self, first_index: usize, second_index: usize) -> Result<bool, Error> {
        self.check(first_index)?;
        self.check(second_index)?;

        Ok(self.same_set(first_index, second_index))
    }

    /// Joins the sets of `first_index` and `second_index`.
    ///
    /// Returns `true` if they already were in the same set and `false`
    /// if this call joined them.
    /// After this returns `same_set(first_index, second_index)` is `true` on every thread.
    ///
    /// The amortized time is `O(α(n))` where `α` is the inverse Ackermann function.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use atomic_partitions::{Forest, Node};
    ///
    /// let mut arena = Node::arena(4);
    /// let forest = Forest::init_arena(&mut arena);
    ///
    /// assert!(!forest.unite(1, 2));
    /// assert!(forest.amount_of_sets() == 3);
    ///
    /// assert!(!forest.unite(2, 3));
    /// assert!(forest.amount_of_sets() == 2);
    ///
    /// // These are already in the same set.
    /// assert!(forest.unite(3, 1));
    /// assert!(forest.amount_of_sets() == 2);
    /// ```
    pub fn unite(&self, first_index: usize, second_index: usize) -> bool {
        let mut first = first_index;
        let mut second = second_index;

        loop {
            first = find::split(self.nodes, first);
            second = find::halve(self.nodes, second);

            if first == second {
                return true
            }

            // We add the root with the lowest index to the other tree.
            let (child, parent) = if first < second {
                (first, second)
            } else {
                (second, first)
            };

            if self.nodes[child].link(child, parent) {
                return false
            }

            log::trace!("{} stopped being a root before linking it under {}", child, parent);
        }
    }

    /// Like `unite` but returns an error instead of panicking.
    ///
    /// Nothing is changed when an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use atomic_partitions::{Error, Forest, Node};
    ///
    /// let mut arena = Node::arena(2);
    /// let forest = Forest::init_arena(&mut arena);
    ///
    /// assert_eq!(forest.try_unite(5, 0), Err(Error::OutOfBounds { index: 5, len: 2 }));
    /// assert_eq!(forest.try_unite(0, 1), Ok(false));
    /// assert_eq!(forest.try_unite(1, 0), Ok(true));
    /// ```
    pub fn try_unite(&self, first_index: usize, second_index: usize) -> Result<bool, Error> {
        self.check(first_index)?;
        self.check(second_index)?;

        Ok(self.unite(first_index, second_index))
    }

    /// Unites every pair in order and returns the amount of sets that were joined.
    ///
    /// # Panics
    ///
    /// If an index of a pair is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use atomic_partitions::{Forest, Node};
    ///
    /// let mut arena = Node::arena(5);
    /// let forest = Forest::init_arena(&mut arena);
    ///
    /// assert!(forest.unite_all(vec![(0, 1), (1, 2), (2, 0), (3, 4)]) == 3);
    /// assert!(forest.amount_of_sets() == 2);
    /// ```
    pub fn unite_all<I>(&self, pairs: I) -> usize where I: IntoIterator<Item = (usize, usize)> {
        pairs
            .into_iter()
            .filter(|&(first_index, second_index)| !self.unite(first_index, second_index))
            .count()
    }

    /// Unites every pair on the rayon thread pool and returns the amount of sets that were joined.
    ///
    /// The pairs are united in no particular order but the resulting sets are
    /// the same as those of `unite_all`.
    ///
    /// # Panics
    ///
    /// If an index of a pair is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use atomic_partitions::{Forest, Node};
    ///
    /// let mut arena = Node::arena(100);
    /// let forest = Forest::init_arena(&mut arena);
    ///
    /// let pairs: Vec<_> = (1 .. 100).map(|i| (i - 1, i)).collect();
    ///
    /// assert!(forest.par_unite_all(pairs) == 99);
    /// assert!(forest.same_set(0, 99));
    /// ```
    #[cfg(feature = "rayon")]
    pub fn par_unite_all<I>(&self, pairs: I) -> usize where I: IntoParallelIterator<Item = (usize, usize)> {
        let joined = pairs
            .into_par_iter()
            .filter(|&(first_index, second_index)| !self.unite(first_index, second_index))
            .count();

        log::debug!("joined {} pairs of sets in parallel", joined);

        joined
    }

    /// Returns the amount of sets.
    ///
    /// This is exact when no thread is uniting sets during the call.
    /// Otherwise the amount at the end of the call is at most the returned value.
    ///
    /// This method will be executed in `O(n)` time.
    ///
    /// # Examples
    ///
    /// ```
    /// use atomic_partitions::{Forest, Node};
    ///
    /// let mut arena = Node::arena(5);
    /// let forest = Forest::init_arena(&mut arena);
    /// assert!(forest.amount_of_sets() == 5);
    ///
    /// forest.unite(1, 4);
    /// assert!(forest.amount_of_sets() == 4);
    /// ```
    pub fn amount_of_sets(&self) -> usize {
        (0 .. self.len()).filter(|&index| self.is_root(index)).count()
    }

    #[inline]
    pub(crate) fn is_root(&self, index: usize) -> bool {
        self.nodes[index].parent() == index
    }

    #[inline]
    fn check(&self, index: usize) -> Result<(), Error> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                index,
                len: self.len(),
            })
        }
    }
}

impl<'a> fmt::Debug for Forest<'a> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        // We map the roots to `usize` names.
        let mut map = std::collections::HashMap::with_capacity(self.len());
        let mut builder = formatter.debug_list();
        let mut names = 0;

        for index in 0 .. self.len() {
            let root = find::plain(self.nodes, index);

            let name = *map.entry(root).or_insert_with(|| {
                let new_name = names;
                names += 1;

                new_name
            });

            builder.entry(&format_args!("{} => {}", index, name));
        }

        builder.finish()
    }
}
