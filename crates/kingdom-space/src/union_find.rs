//! Disjoint sets over arbitrary keys.
//!
//! [`UnionFind`] uses an arena layout: an [`IndexSet`] maps each key to a
//! dense index, and `parent`/`size` vectors are indexed by it. Keys are
//! registered lazily the first time [`find`](UnionFind::find) or
//! [`join`](UnionFind::join) sees them and are never removed.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use smallvec::SmallVec;

/// Disjoint-set forest with union by size and full path compression.
///
/// # Examples
///
/// ```
/// use kingdom_space::UnionFind;
///
/// let mut uf = UnionFind::new();
/// uf.join(0, 1);
/// uf.join(2, 3);
/// uf.join(3, 4);
/// assert_eq!(uf.find(4), uf.find(2));
/// assert_ne!(uf.find(0), uf.find(2));
/// assert_eq!(uf.find(5), 5);
/// assert_eq!(uf.groups().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind<K> {
    keys: IndexSet<K>,
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl<K> Default for UnionFind<K> {
    fn default() -> Self {
        Self {
            keys: IndexSet::default(),
            parent: Vec::new(),
            size: Vec::new(),
        }
    }
}

impl<K: Hash + Eq + Clone> UnionFind<K> {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys ever referenced.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key has been referenced yet.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Whether `key` has been referenced.
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Dense index for `key`, creating a singleton node on first sight.
    fn node(&mut self, key: K) -> usize {
        let (index, inserted) = self.keys.insert_full(key);
        if inserted {
            self.parent.push(index);
            self.size.push(1);
        }
        index
    }

    /// Root of `index`, rewriting every node on the path to point at it.
    fn root_compressing(&mut self, index: usize) -> usize {
        let mut path: SmallVec<[usize; 8]> = SmallVec::new();
        let mut current = index;
        while self.parent[current] != current {
            path.push(current);
            current = self.parent[current];
        }
        for node in path {
            self.parent[node] = current;
        }
        current
    }

    /// Root of `index` without touching the forest.
    fn root(&self, index: usize) -> usize {
        let mut current = index;
        while self.parent[current] != current {
            current = self.parent[current];
        }
        current
    }

    /// The representative of `key`'s set.
    ///
    /// Registers `key` as a singleton if unseen.
    pub fn find(&mut self, key: K) -> K {
        let index = self.node(key);
        let root = self.root_compressing(index);
        self.keys[root].clone()
    }

    /// Merge the sets containing `x` and `y`.
    ///
    /// The smaller tree is attached under the root of the larger one (ties
    /// keep `x`'s root). Returns `false` if they were already joined.
    pub fn join(&mut self, x: K, y: K) -> bool {
        let x = self.node(x);
        let y = self.node(y);
        let mut root_x = self.root_compressing(x);
        let mut root_y = self.root_compressing(y);
        if root_x == root_y {
            return false;
        }
        if self.size[root_x] < self.size[root_y] {
            std::mem::swap(&mut root_x, &mut root_y);
        }
        self.parent[root_y] = root_x;
        self.size[root_x] += self.size[root_y];
        true
    }

    /// Whether `x` and `y` are registered and in the same set.
    pub fn connected(&self, x: &K, y: &K) -> bool {
        match (self.keys.get_index_of(x), self.keys.get_index_of(y)) {
            (Some(x), Some(y)) => self.root(x) == self.root(y),
            _ => false,
        }
    }

    /// Size of `key`'s set, or 0 if `key` was never referenced.
    pub fn set_size(&self, key: &K) -> usize {
        self.keys
            .get_index_of(key)
            .map_or(0, |index| self.size[self.root(index)])
    }

    /// Partition of every referenced key into its sets.
    ///
    /// Sets appear in the order their first member was registered, and
    /// members in registration order.
    pub fn groups(&self) -> Vec<Vec<K>> {
        let mut by_root: IndexMap<usize, Vec<K>> = IndexMap::new();
        for (index, key) in self.keys.iter().enumerate() {
            by_root
                .entry(self.root(index))
                .or_default()
                .push(key.clone());
        }
        by_root.into_values().collect()
    }

    /// Number of disjoint sets.
    pub fn group_count(&self) -> usize {
        (0..self.parent.len())
            .filter(|&i| self.parent[i] == i)
            .count()
    }
}
