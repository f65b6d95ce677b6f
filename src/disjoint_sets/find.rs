//! The walks from a node to the root of its tree.
//!
//! Every walk only moves to nodes with a higher or equal index and the parent
//! of a node is only ever changed to a node with a higher index.
//! This means each walk ends after at most `nodes.len()` steps.

use crate::disjoint_sets::node::Node;

/// Walk to the root of `index` without changing anything.
///
/// The returned node was a root when it was read but might not be anymore.
#[inline]
pub(crate) fn plain(nodes: &[Node], mut index: usize) -> usize {
    loop {
        let parent = nodes[index].parent();

        if parent == index {
            return index
        }

        index = parent;
    }
}

/// Walk to the root of `index` with path splitting.
///
/// Each node on the path is moved to its grandparent and the walk continues
/// from the old parent.
#[inline]
pub(crate) fn split(nodes: &[Node], mut index: usize) -> usize {
    loop {
        let parent = nodes[index].parent();
        let grandparent = nodes[parent].parent();

        if parent == grandparent {
            return parent
        }

        nodes[index].compress(parent, grandparent);
        index = parent;
    }
}

/// Walk to the root of `index` with path halving.
///
/// Each node on the path is moved to its grandparent and the walk continues
/// from the new parent, skipping every other node.
#[inline]
pub(crate) fn halve(nodes: &[Node], mut index: usize) -> usize {
    loop {
        let parent = nodes[index].parent();
        let grandparent = nodes[parent].parent();

        if parent == grandparent {
            return parent
        }

        nodes[index].compress(parent, grandparent);
        index = nodes[index].parent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disjoint_sets::node::with_parents;

    fn parents(nodes: &[Node]) -> Vec<usize> {
        nodes.iter().map(Node::parent).collect()
    }

    fn assert_monotone(nodes: &[Node]) {
        for (index, parent) in parents(nodes).into_iter().enumerate() {
            assert!(parent >= index, "node {} has parent {}", index, parent);
        }
    }

    #[test]
    fn plain_does_not_compress() {
        let nodes = with_parents(&[1, 2, 3, 4, 4]);

        assert_eq!(plain(&nodes, 0), 4);
        assert_eq!(plain(&nodes, 4), 4);
        assert_eq!(parents(&nodes), vec![1, 2, 3, 4, 4]);
    }

    #[test]
    fn split_moves_every_node_up() {
        let nodes = with_parents(&[1, 2, 3, 4, 4]);

        assert_eq!(split(&nodes, 0), 4);
        assert_monotone(&nodes);

        // A weak compare-exchange may fail spuriously so we only know each
        // node points to its old parent or grandparent.
        let after = parents(&nodes);
        assert!(after[0] == 1 || after[0] == 2);
        assert!(after[1] == 2 || after[1] == 3);
        assert!(after[2] == 3 || after[2] == 4);
        assert_eq!(after[3], 4);
        assert_eq!(after[4], 4);

        // Repeated walks reach a flat tree.
        for _ in 0 .. 16 {
            split(&nodes, 0);
        }
        assert_eq!(plain(&nodes, 0), 4);
        assert_monotone(&nodes);
    }

    #[test]
    fn halve_skips_nodes() {
        let nodes = with_parents(&[1, 2, 3, 4, 4]);

        assert_eq!(halve(&nodes, 0), 4);
        assert_monotone(&nodes);

        let after = parents(&nodes);
        assert!(after[0] == 1 || after[0] == 2);
        assert_eq!(after[3], 4);
        assert_eq!(after[4], 4);
    }

    #[test]
    fn roots_find_themselves() {
        let nodes = with_parents(&[0, 1, 2]);

        for index in 0 .. 3 {
            assert_eq!(plain(&nodes, index), index);
            assert_eq!(split(&nodes, index), index);
            assert_eq!(halve(&nodes, index), index);
        }
        assert_eq!(parents(&nodes), vec![0, 1, 2]);
    }
}
