use std::sync::atomic::{AtomicUsize, Ordering};

/// The ordering used for loads and for successful compare-exchanges on a parent.
pub(crate) const ORD: Ordering = Ordering::SeqCst;
/// The ordering of a failed compare-exchange.
///
/// The value returned on failure is always discarded and read again with `ORD`.
pub(crate) const ORD_FAILURE: Ordering = Ordering::Relaxed;

/// A single slot of the arena a [`Forest`] operates on.
///
/// A `Node` stores the index of its parent in the arena.
/// Before the arena is initialized this value has no meaning.
///
/// [`Forest`]: ../forest/struct.Forest.html
#[repr(transparent)]
#[derive(Debug, Default)]
pub struct Node {
    /// The index of the parent of this node in its sets tree.
    /// The parent never has a lower index than the node itself.
    parent: AtomicUsize,
}

impl Node {
    /// Create a new uninitialized `Node`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            parent: AtomicUsize::new(0),
        }
    }

    /// Allocate `len` uninitialized nodes.
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
    /// ```
    pub fn arena(len: usize) -> Vec<Self> {
        (0 .. len).map(|_| Self::new()).collect()
    }

    /// Make this node the root of its own set, it has the given `index` in the arena.
    ///
    /// This needs exclusive access so no atomic operation is performed.
    #[inline]
    pub(crate) fn reset(&mut self, index: usize) {
        *self.parent.get_mut() = index;
    }

    /// Return the `parent` variable.
    #[inline]
    pub(crate) fn parent(&self) -> usize {
        self.parent.load(ORD)
    }

    /// Try to move the parent one level up from `parent` to `grandparent`.
    ///
    /// A failure means another thread changed the parent first and is ignored.
    #[inline]
    pub(crate) fn compress(&self, parent: usize, grandparent: usize) {
        let _ = self.parent.compare_exchange_weak(parent, grandparent, ORD, ORD_FAILURE);
    }

    /// Attach the root at `index` under `parent`.
    ///
    /// Returns `false` if the node at `index` was no longer a root.
    #[inline]
    pub(crate) fn link(&self, index: usize, parent: usize) -> bool {
        debug_assert!(index < parent);

        self.parent.compare_exchange(index, parent, ORD, ORD_FAILURE).is_ok()
    }
}

/// Build nodes with the given parents, bypassing initialization.
#[cfg(test)]
pub(crate) fn with_parents(parents: &[usize]) -> Vec<Node> {
    parents
        .iter()
        .map(|&parent| Node {
            parent: AtomicUsize::new(parent),
        })
        .collect()
}
