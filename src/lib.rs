//! A wait-free concurrent [disjoint-sets/union-find] implementation.
//!
//! The main struct of this crate is [`Forest`] which divides the slots of an arena of
//! [`Node`]s in sets.
//! The elements each start in their own set and these sets can be joined with the `unite` method.
//! You can check if elements share a set with the `same_set` method.
//! Any number of threads can call both methods at the same time on the same `Forest`
//! without locks and without ever waiting on each other.
//! The `unite` and `same_set` methods have an amortized complexity of `O(α(n))` where
//! 'α' is the inverse Ackermann function and `n` the length of the arena.
//! The `α(n)` has value below 5 for any `n` that can be written in the observable universe.
//!
//! The algorithm is the randomized concurrent disjoint set union of Jayanti and Tarjan.
//! Roots are linked by their index: the root with the lowest index is placed under the other.
//! The amortized bound holds when the indices are independent of the order in which
//! elements are united, so shuffle the assignment of indices if this is not the case.
//!
//! The arena belongs to the caller. It is borrowed mutably to initialize it and
//! shared between all threads afterwards:
//!
//! ```
//! use atomic_partitions::{Forest, Node};
//!
//! let mut arena = Node::arena(1000);
//! let forest = Forest::init_arena(&mut arena);
//!
//! std::thread::scope(|scope| {
//!     for thread in 0 .. 4 {
//!         scope.spawn(move || {
//!             for index in (thread .. 1000).step_by(4).skip(1) {
//!                 forest.unite(thread, index);
//!             }
//!         });
//!     }
//! });
//!
//! assert!(forest.same_set(0, 996));
//! assert!(!forest.same_set(0, 1));
//! assert!(forest.amount_of_sets() == 4);
//! ```
//!
//! The `rayon` feature adds parallel initialization and batch unions, the `proptest`
//! feature an `Arbitrary` implementation for [`Unions`].
//! Both are enabled by default.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`Forest`]: struct.Forest.html
//! [`Node`]: struct.Node.html
//! [`Unions`]: struct.Unions.html

extern crate log;
extern crate thiserror;
#[cfg(feature = "rayon")]
extern crate rayon;
#[cfg(feature = "proptest")]
extern crate proptest;

pub mod disjoint_sets;
pub mod error;

pub use {
    disjoint_sets::{
        forest::Forest,
        node::Node,
        unions::Unions,
    },
    error::Error,
};
