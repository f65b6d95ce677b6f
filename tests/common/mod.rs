//! A sequential union-find to compare the concurrent one against.

#![allow(dead_code)]

use std::{cmp::Ordering, collections::HashMap, fmt};

use atomic_partitions::Forest;

/// Union by rank with full path compression.
pub struct Reference {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl Reference {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0 .. len).collect(),
            rank: vec![0; len],
        }
    }

    pub fn find(&mut self, index: usize) -> usize {
        if self.parent[index] == index {
            index
        } else {
            let root = self.find(self.parent[index]);
            self.parent[index] = root;

            root
        }
    }

    /// Returns `true` if the two were already in the same set.
    pub fn union(&mut self, first_index: usize, second_index: usize) -> bool {
        let i = self.find(first_index);
        let j = self.find(second_index);

        if i == j {
            return true
        }

        match Ord::cmp(&self.rank[i], &self.rank[j]) {
            Ordering::Less => self.parent[i] = j,
            Ordering::Equal => {
                self.parent[i] = j;
                self.rank[j] += 1;
            },
            Ordering::Greater => self.parent[j] = i,
        }

        false
    }

    pub fn same_set(&mut self, first_index: usize, second_index: usize) -> bool {
        self.find(first_index) == self.find(second_index)
    }

    pub fn amount_of_sets(&mut self) -> usize {
        (0 .. self.parent.len()).filter(|&index| self.parent[index] == index).count()
    }
}

/// Names the sets in order of their first element, the same way `Forest` does.
impl fmt::Debug for Reference {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let mut map = HashMap::new();
        let mut builder = formatter.debug_list();

        for index in 0 .. self.parent.len() {
            let mut root = index;
            while self.parent[root] != root {
                root = self.parent[root];
            }

            let names = map.len();
            let name = *map.entry(root).or_insert(names);

            builder.entry(&format_args!("{} => {}", index, name));
        }

        builder.finish()
    }
}

/// Asserts both divide the elements in the same sets.
pub fn assert_same_partition(forest: &Forest, reference: &Reference) {
    assert_eq!(format!("{:?}", forest), format!("{:?}", reference));
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
