//! Union-find over a fixed number of elements.
//!
//! Path compression on [`DisjointSet::find`] and union by rank keep every
//! operation effectively constant time. Compression is iterative.
//!
//! Indices outside `0..len()` panic with a range-check message, the same
//! contract as slice indexing. Nothing is ever clamped.
//!
//! ```
//! use tile_link::core::DisjointSet;
//!
//! let mut sets = DisjointSet::new(4);
//! assert!(sets.union(0, 1));
//! assert!(!sets.union(1, 0));
//! assert!(sets.connected(0, 1));
//! assert_eq!(sets.count_sets(), 3);
//! ```

/// Disjoint-set forest with path compression and union by rank.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSet {
    /// Create `size` singleton sets.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
            sets: size,
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    #[track_caller]
    fn check(&self, x: usize) {
        assert!(
            x < self.parent.len(),
            "element {x} out of range for disjoint set of size {}",
            self.parent.len()
        );
    }

    /// Find the root of `x`, compressing the path behind it.
    #[track_caller]
    pub fn find(&mut self, x: usize) -> usize {
        self.check(x);

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Find the root of `x` without touching the forest.
    ///
    /// Used for read-only queries on a frozen structure.
    #[track_caller]
    #[must_use]
    pub fn root(&self, x: usize) -> usize {
        self.check(x);

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    /// Merge the sets holding `a` and `b`.
    ///
    /// Returns true iff they were in different sets. On equal rank, `b`'s
    /// root is attached under `a`'s root and `a`'s rank grows.
    #[track_caller]
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }

        self.sets -= 1;
        true
    }

    /// Whether `a` and `b` share a set.
    #[track_caller]
    #[must_use]
    pub fn connected(&self, a: usize, b: usize) -> bool {
        self.root(a) == self.root(b)
    }

    /// Number of distinct sets.
    #[must_use]
    pub fn count_sets(&self) -> usize {
        self.sets
    }

    /// Make every element its own singleton set again.
    pub fn reset(&mut self) {
        for (i, parent) in self.parent.iter_mut().enumerate() {
            *parent = i;
        }
        self.rank.fill(0);
        self.sets = self.parent.len();
    }
}
