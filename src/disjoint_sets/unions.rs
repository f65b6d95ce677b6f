//! A recorded list of unions over an arena of a given length.

#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// A list of pairs of indices to unite in an arena of `len` elements.
///
/// This can be passed to `unite_all` or `par_unite_all` and, with the `proptest`
/// feature, generated as an arbitrary value in property tests.
///
/// # Examples
///
/// ```
/// use atomic_partitions::{Forest, Node, Unions};
///
/// let mut unions = Unions::new(4);
/// unions.push(0, 3);
/// unions.push(3, 0);
///
/// let mut arena = Node::arena(unions.len());
/// let forest = Forest::init_arena(&mut arena);
///
/// assert!(forest.unite_all(unions.pairs().iter().cloned()) == 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unions {
    len: usize,
    pairs: Vec<(usize, usize)>,
}

impl Unions {
    /// Constructs an empty list of unions for an arena of `len` elements.
    #[inline]
    pub fn new(len: usize) -> Self {
        Self {
            len,
            pairs: Vec::new(),
        }
    }

    /// Appends the union of `first_index` and `second_index`.
    ///
    /// # Panics
    ///
    /// If `first_index` or `second_index` is out of bounds.
    pub fn push(&mut self, first_index: usize, second_index: usize) {
        if first_index >= self.len || second_index >= self.len {
            panic!(
                "Can not unite {} and {} in an arena of {} elements.",
                first_index, second_index, self.len,
            )
        }

        self.pairs.push((first_index, second_index));
    }

    /// Returns the length of the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the pairs in the order they were pushed.
    #[inline]
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }
}

/// The parameter is the maximum length of the arena, `0` means `64`.
/// Every generated value has at least one element and up to twice as many pairs as elements.
#[cfg(feature = "proptest")]
impl Arbitrary for Unions {
    type Parameters = usize;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(max_len: Self::Parameters) -> Self::Strategy {
        let max_len = if max_len == 0 { 64 } else { max_len };

        (1 ..= max_len).prop_flat_map(|len| {
            proptest::collection::vec((0 .. len, 0 .. len), 0 .. 2 * len)
                .prop_map(move |pairs| Unions { len, pairs })
        }).boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_in_bounds() {
        let mut unions = Unions::new(3);
        unions.push(0, 2);
        unions.push(1, 1);

        assert_eq!(unions.pairs(), &[(0, 2), (1, 1)]);
        assert_eq!(unions.len(), 3);
        assert!(!unions.is_empty());
    }

    #[test]
    #[should_panic]
    fn push_out_of_bounds() {
        Unions::new(3).push(1, 3);
    }

    #[cfg(feature = "proptest")]
    proptest! {
        #[test]
        fn arbitrary_pairs_are_in_bounds(unions in any_with::<Unions>(16)) {
            prop_assert!(unions.len() >= 1 && unions.len() <= 16);
            prop_assert!(unions.pairs().len() < 2 * unions.len());

            for &(first, second) in unions.pairs() {
                prop_assert!(first < unions.len());
                prop_assert!(second < unions.len());
            }
        }
    }
}
