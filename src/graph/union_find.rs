//! Disjoint-set (Union-Find) data structure.
//!
//! # Algorithm
//!
//! Path compression during `find` and union by rank during `unite` give
//! amortized O(α(n)) per operation, where α is the inverse Ackermann
//! function.
//!
//! # Reference
//!
//! Tarjan (1975), "Efficiency of a Good but Not Linear Set Union Algorithm".

/// Disjoint-set forest over the elements `0..n`.
///
/// # Examples
///
/// ```
/// use u_tsp::graph::UnionFind;
///
/// let mut uf = UnionFind::new(4);
/// assert!(uf.unite(0, 1));
/// assert!(uf.unite(2, 3));
/// assert!(!uf.connected(0, 2));
///
/// uf.unite(1, 3);
/// assert!(uf.connected(0, 2));
/// assert_eq!(uf.component_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets `{0}, {1}, ..., {n-1}`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Finds the representative of the set containing `x`.
    ///
    /// Every node on the path from `x` to the root is re-pointed directly
    /// at the root. Iterative, so deep chains cannot overflow the stack.
    ///
    /// # Panics
    ///
    /// Panics if `x >= len()`.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// The root of lower rank is attached under the root of higher rank;
    /// on equal ranks `x`'s root survives and its rank grows by one.
    ///
    /// Returns `true` if the sets were distinct and are now merged,
    /// `false` if `x` and `y` already shared a representative.
    ///
    /// # Panics
    ///
    /// Panics if `x >= len()` or `y >= len()`.
    pub fn unite(&mut self, x: usize, y: usize) -> bool {
        let mut root_x = self.find(x);
        let mut root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        if self.rank[root_x] < self.rank[root_y] {
            std::mem::swap(&mut root_x, &mut root_y);
        }
        self.parent[root_y] = root_x;
        if self.rank[root_x] == self.rank[root_y] {
            self.rank[root_x] += 1;
        }

        self.components -= 1;
        true
    }

    /// Returns `true` if `x` and `y` are in the same set.
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Returns the number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.components
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let uf = UnionFind::new(5);
        assert_eq!(uf.len(), 5);
        assert_eq!(uf.component_count(), 5);
    }

    #[test]
    fn test_new_empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.component_count(), 0);
    }

    #[test]
    fn test_find_initial() {
        let mut uf = UnionFind::new(5);
        for i in 0..5 {
            assert_eq!(uf.find(i), i);
        }
    }

    #[test]
    fn test_unite_basic() {
        let mut uf = UnionFind::new(5);
        assert!(uf.unite(0, 1));
        assert!(uf.connected(0, 1));
        assert_eq!(uf.component_count(), 4);
    }

    #[test]
    fn test_unite_same_set_is_noop() {
        let mut uf = UnionFind::new(5);
        uf.unite(0, 1);
        let root = uf.find(0);
        assert!(!uf.unite(1, 0));
        assert_eq!(uf.component_count(), 4);
        assert_eq!(uf.find(1), root);
    }

    #[test]
    fn test_transitivity() {
        let mut uf = UnionFind::new(5);
        uf.unite(0, 1);
        uf.unite(1, 2);
        assert!(uf.connected(0, 2));
        assert!(!uf.connected(0, 3));
    }

    #[test]
    fn test_rank_keeps_deeper_root() {
        let mut uf = UnionFind::new(3);
        uf.unite(0, 1); // root 0, rank 1
        uf.unite(2, 0); // rank(2) = 0 < rank(0) = 1, so 0 stays root
        assert_eq!(uf.find(2), 0);
    }

    #[test]
    fn test_path_compression() {
        let mut uf = UnionFind::new(4);
        uf.unite(0, 1);
        uf.unite(2, 3);
        uf.unite(0, 2); // 2 now hangs under 0, 3 under 2
        assert_eq!(uf.find(3), 0);
        assert_eq!(uf.parent[3], 0);
    }

    #[test]
    fn test_all_in_one() {
        let mut uf = UnionFind::new(6);
        for i in 0..5 {
            assert!(uf.unite(i, i + 1));
        }
        assert_eq!(uf.component_count(), 1);
        let root = uf.find(0);
        for i in 0..6 {
            assert_eq!(uf.find(i), root);
        }
    }
}
