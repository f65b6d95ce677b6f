//! Early linking and early recognition.
//!
//! These variants never walk to a root first. They climb from the element with
//! the lowest index one parent at a time until the two elements meet, or until
//! the lowest element is a root and can be linked directly.
//! They keep the same invariants as `same_set` and `unite` so all four methods
//! can be mixed freely on one `Forest`.

use crate::disjoint_sets::forest::Forest;

impl<'a> Forest<'a> {
    /// Returns `true` if `first_index` and `second_index` are in the same set.
    ///
    /// Gives the same answers as `same_set` but compresses the path of the
    /// element with the lowest index while climbing.
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
    /// let mut arena = Node::arena(3);
    /// let forest = Forest::init_arena(&mut arena);
    /// forest.unite(0, 2);
    ///
    /// assert!(forest.same_set_early(2, 0));
    /// assert!(!forest.same_set_early(0, 1));
    /// ```
    pub fn same_set_early(&self, first_index: usize, second_index: usize) -> bool {
        let mut first = first_index;
        let mut second = second_index;

        loop {
            if first == second {
                return true
            }

            let (low, high) = if first < second {
                (first, second)
            } else {
                (second, first)
            };

            // Every ancestor of `high` has an index of at least `high`,
            // so a root below it can't be in its tree.
            if self.is_root(low) {
                return false
            }

            first = self.climb(low);
            second = high;
        }
    }

    /// Joins the sets of `first_index` and `second_index`.
    ///
    /// Has the same contract as `unite`: returns `true` if they already were in
    /// the same set. The element with the lowest index is linked as soon as it
    /// is a root, its new parent does not have to be a root.
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
    /// assert!(!forest.unite_early(0, 1));
    /// assert!(!forest.unite_early(2, 3));
    /// assert!(!forest.unite_early(1, 2));
    /// assert!(forest.unite_early(3, 0));
    ///
    /// assert!(forest.same_set(0, 3));
    /// ```
    pub fn unite_early(&self, first_index: usize, second_index: usize) -> bool {
        let mut first = first_index;
        let mut second = second_index;

        loop {
            if first == second {
                return true
            }

            let (low, high) = if first < second {
                (first, second)
            } else {
                (second, first)
            };

            if self.nodes[low].link(low, high) {
                return false
            }

            log::trace!("{} stopped being a root before linking it under {}", low, high);

            first = self.climb(low);
            second = high;
        }
    }

    /// Moves `index` to its grandparent and returns its old parent.
    #[inline]
    fn climb(&self, index: usize) -> usize {
        let parent = self.nodes[index].parent();
        let grandparent = self.nodes[parent].parent();

        if parent != grandparent {
            self.nodes[index].compress(parent, grandparent);
        }

        parent
    }
}
