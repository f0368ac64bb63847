/// Disjoint-set union with path compression and union by rank.
///
/// Tracks a partition of `{0..len-1}`. Each solve builds a fresh instance,
/// mutates it synchronously, and drops it; nothing is shared between
/// solves. `find` and `union` expect indices in `[0, len)` and panic on
/// anything else, so callers validate untrusted indices first.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    pub fn new(len: usize) -> UnionFind {
        UnionFind {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Representative of the set containing `p`. Every node on the walk is
    /// repointed at the root, keeping later lookups near-constant.
    pub fn find(&mut self, p: usize) -> usize {
        let mut root = p;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut p = p;
        while self.parent[p] != root {
            let next = self.parent[p];
            self.parent[p] = root;
            p = next;
        }
        root
    }

    /// Merges the sets containing `p` and `q`. Returns `false` and leaves
    /// the partition untouched when they already share a root (including
    /// `p == q`).
    ///
    /// The root of strictly greater rank stays a root. On equal ranks the
    /// root of `p` becomes the parent of the root of `q` and its rank grows
    /// by one, so a given union order always produces the same internal
    /// state.
    pub fn union(&mut self, p: usize, q: usize) -> bool {
        let p = self.find(p);
        let q = self.find(q);
        if p == q {
            return false;
        }
        if self.rank[p] < self.rank[q] {
            self.parent[p] = q;
        } else if self.rank[p] > self.rank[q] {
            self.parent[q] = p;
        } else {
            self.parent[q] = p;
            self.rank[p] += 1;
        }
        true
    }

    /// Current components, each listed in ascending order, ordered by their
    /// smallest member. Compresses paths but never changes the partition.
    pub fn components(&mut self) -> Vec<Vec<usize>> {
        let len = self.len();
        let mut grouped: Vec<Vec<usize>> = vec![vec![]; len];
        for i in 0..len {
            let root = self.find(i);
            grouped[root].push(i);
        }
        grouped.retain(|group| !group.is_empty());
        grouped.sort_by_key(|group| group[0]);
        grouped
    }
}
