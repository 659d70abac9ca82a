//! Weighted quick-union (disjoint-set) with full path compression.
use thiserror::Error;

use crate::grid::index_vec::{Idx, IndexVec};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DsuError {
    #[error("element {element} is out of bounds for {count} elements")]
    OutOfBounds { element: usize, count: usize },
}

/// A fixed collection of elements partitioned into disjoint sets.
///
/// Every element starts in its own singleton set; `union` merges sets and
/// nothing ever splits them. Union attaches the smaller tree under the
/// larger one and `find` flattens every traversed chain onto the root, so
/// both operations run in near-constant amortized time.
#[derive(Clone, Debug)]
pub struct DisjointSet<I: Idx> {
    parent: IndexVec<I, I>,
    size: IndexVec<I, u32>,
}

impl<I: Idx> DisjointSet<I> {
    /// Builds `count` singleton sets. A count of zero yields an empty
    /// structure on which every query fails with [`DsuError::OutOfBounds`].
    pub fn new(count: usize) -> Self {
        Self {
            parent: IndexVec::from_fn(count, I::from_usize),
            size: IndexVec::from_elem(1, count),
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn check(&self, element: I) -> Result<(), DsuError> {
        if self.parent.contains_index(element) {
            Ok(())
        } else {
            Err(DsuError::OutOfBounds {
                element: element.index(),
                count: self.parent.len(),
            })
        }
    }

    /// Returns the representative of the set containing `element`.
    ///
    /// Two passes: walk to the root, then point every traversed element
    /// directly at it.
    pub fn find(&mut self, element: I) -> Result<I, DsuError> {
        self.check(element)?;

        let mut root = element;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = element;
        while self.parent[current] != current {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `a` and `b`; a no-op when they already
    /// share a set. The smaller tree's root goes under the larger tree's
    /// root; on a tie, `b`'s root goes under `a`'s.
    pub fn union(&mut self, a: I, b: I) -> Result<(), DsuError> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(());
        }

        if self.size[root_a] < self.size[root_b] {
            self.parent[root_a] = root_b;
            self.size[root_b] += self.size[root_a];
        } else {
            self.parent[root_b] = root_a;
            self.size[root_a] += self.size[root_b];
        }
        Ok(())
    }

    pub fn connected(&mut self, a: I, b: I) -> Result<bool, DsuError> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// Number of elements in the set containing `element`.
    pub fn set_size(&mut self, element: I) -> Result<u32, DsuError> {
        let root = self.find(element)?;
        Ok(self.size[root])
    }
}
