//! Per-vertex adjacency storage: destination index -> edge weight.

use std::collections::hash_map;
use std::collections::HashMap;

/// Outgoing edges of a single vertex, keyed by destination index.
///
/// Storage is a hash map, so `iter()` has no ordering guarantee. Use
/// `iter_sorted()` wherever output has to be deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeMap<T> {
    edges: HashMap<usize, T>,
}

impl<T> EdgeMap<T> {
    /// Create a new, empty edge map.
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    /// Create an empty edge map with room for `capacity` destinations.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: HashMap::with_capacity(capacity),
        }
    }

    /// Insert an edge to `dst`. Returns false (and keeps the old weight)
    /// if an edge to `dst` already exists.
    pub fn insert(&mut self, dst: usize, weight: T) -> bool {
        match self.edges.entry(dst) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(slot) => {
                slot.insert(weight);
                true
            }
        }
    }

    /// Weight of the edge to `dst`, if any.
    pub fn find(&self, dst: usize) -> Option<&T> {
        self.edges.get(&dst)
    }

    /// Mutable weight of the edge to `dst`, if any.
    pub fn find_mut(&mut self, dst: usize) -> Option<&mut T> {
        self.edges.get_mut(&dst)
    }

    /// Whether an edge to `dst` exists.
    pub fn contains(&self, dst: usize) -> bool {
        self.edges.contains_key(&dst)
    }

    /// Remove the edge to `dst`. Returns true if an entry was removed.
    pub fn erase(&mut self, dst: usize) -> bool {
        self.edges.remove(&dst).is_some()
    }

    /// Remove the edge to `dst` and hand back the entry.
    ///
    /// Destinations are unique keys, so `dst` identifies exactly one entry
    /// and stays valid across unrelated inserts and removals.
    pub fn remove_entry(&mut self, dst: usize) -> Option<(usize, T)> {
        self.edges.remove_entry(&dst)
    }

    /// Number of outgoing edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// True if there are no outgoing edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Remove every edge.
    pub fn clear(&mut self) {
        self.edges.clear();
    }

    /// All `(destination, weight)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.edges.iter().map(|(&dst, w)| (dst, w))
    }

    /// All `(destination, weight)` pairs in ascending destination order.
    pub fn iter_sorted(&self) -> Vec<(usize, &T)> {
        let mut pairs: Vec<(usize, &T)> = self.iter().collect();
        pairs.sort_unstable_by_key(|&(dst, _)| dst);
        pairs
    }

    /// Destination indices in ascending order.
    pub fn destinations(&self) -> Vec<usize> {
        let mut dsts: Vec<usize> = self.edges.keys().copied().collect();
        dsts.sort_unstable();
        dsts
    }

    // Capacity tuning. None of these touch the logical contents.

    /// Number of entries the map can hold without reallocating.
    pub fn bucket_count(&self) -> usize {
        self.edges.capacity()
    }

    /// Entries per available slot; 0.0 for an unallocated map.
    pub fn load_factor(&self) -> f32 {
        let capacity = self.edges.capacity();
        if capacity == 0 {
            0.0
        } else {
            self.edges.len() as f32 / capacity as f32
        }
    }

    /// Resize the table to hold at least `buckets` entries, shrinking if it
    /// is currently larger. Never drops below the current length.
    pub fn rehash(&mut self, buckets: usize) {
        let capacity = self.edges.capacity();
        if buckets > capacity {
            self.edges.reserve(buckets - self.edges.len());
        } else {
            self.edges.shrink_to(buckets);
        }
    }

    /// Make room for at least `additional` more edges.
    pub fn reserve(&mut self, additional: usize) {
        self.edges.reserve(additional);
    }
}

impl<T> Default for EdgeMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a EdgeMap<T> {
    type Item = (&'a usize, &'a T);
    type IntoIter = hash_map::Iter<'a, usize, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl<T> FromIterator<(usize, T)> for EdgeMap<T> {
    /// Later duplicates of a destination are ignored, as with `insert`.
    fn from_iter<I: IntoIterator<Item = (usize, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (dst, weight) in iter {
            map.insert(dst, weight);
        }
        map
    }
}
