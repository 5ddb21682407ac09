use std::cmp::Ordering;

/// Disjoint-set forest (union-find) tracking which vertices have been merged
/// into a single super-vertex during contraction.
///
/// Keeps a live component counter alongside the usual parent/rank arrays.
/// Components only ever merge; there is no split operation.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Initializes a union-find over `n` singleton components (0..n-1).
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Finds the representative (root) of the set containing `x`.
    /// Uses path compression. Panics if `x` is out of range.
    pub fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    /// Unites the sets containing `x` and `y` using union by rank.
    /// Returns `true` if a merge actually occurred (i.e., they were disjoint).
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return false;
        }
        match self.rank[x_root].cmp(&self.rank[y_root]) {
            Ordering::Less => self.parent[x_root] = y_root,
            Ordering::Greater => self.parent[y_root] = x_root,
            Ordering::Equal => {
                self.parent[y_root] = x_root;
                self.rank[x_root] += 1;
            }
        }
        self.components -= 1;
        true
    }

    /// Number of live components.
    pub fn components(&self) -> usize {
        self.components
    }
}
