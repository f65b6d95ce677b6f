//! The errors returned by the checked methods of a [`Forest`].
//!
//! [`Forest`]: ../struct.Forest.html

/// The ways a caller can misuse a [`Forest`].
///
/// Using a node before the arena is initialized is not listed here:
/// a `Forest` can only be obtained from an initialized arena.
///
/// [`Forest`]: ../struct.Forest.html
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The index does not refer to a slot of the arena.
    #[error("index {index} is out of bounds for an arena of {len} nodes")]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The length of the arena.
        len: usize,
    },
}
