use std::fmt;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;

/// A dataflow fact mapping keys to values.
///
/// Iteration follows insertion order; equality ignores it.
#[derive(Clone)]
pub struct MapFact<K, V> {
    map: IndexMap<K, V, FxBuildHasher>,
}

impl<K, V> Default for MapFact<K, V> {
    fn default() -> Self {
        Self {
            map: IndexMap::default(),
        }
    }
}

impl<K: Hash + Eq, V> MapFact<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Bind `key` to `value`. Returns whether the fact changed.
    pub fn update(&mut self, key: K, value: V) -> bool
    where
        V: PartialEq,
    {
        match self.map.get(&key) {
            Some(old) if *old == value => false,
            _ => {
                self.map.insert(key, value);
                true
            }
        }
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.map.shift_remove(key)
    }

    /// Overwrite this fact with `other`. Returns whether this fact changed.
    pub fn copy_from(&mut self, other: &Self) -> bool
    where
        K: Clone,
        V: Clone + PartialEq,
    {
        if self == other {
            return false;
        }
        self.map.clone_from(&other.map);
        true
    }

    pub fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.map.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<K: Hash + Eq, V: PartialEq> PartialEq for MapFact<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K: Hash + Eq, V: Eq> Eq for MapFact<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for MapFact<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for MapFact<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

/// A dataflow fact holding a set of elements.
#[derive(Clone)]
pub struct SetFact<T> {
    set: IndexSet<T, FxBuildHasher>,
}

impl<T> Default for SetFact<T> {
    fn default() -> Self {
        Self {
            set: IndexSet::default(),
        }
    }
}

impl<T: Hash + Eq> SetFact<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, elem: &T) -> bool {
        self.set.contains(elem)
    }

    /// Returns whether `elem` was newly added.
    pub fn add(&mut self, elem: T) -> bool {
        self.set.insert(elem)
    }

    pub fn remove(&mut self, elem: &T) -> bool {
        self.set.shift_remove(elem)
    }

    /// Add every element of `other`. Returns whether this fact changed.
    pub fn union_with(&mut self, other: &Self) -> bool
    where
        T: Clone,
    {
        let before = self.set.len();
        self.set.extend(other.set.iter().cloned());
        self.set.len() != before
    }

    /// Overwrite this fact with `other`. Returns whether this fact changed.
    pub fn copy_from(&mut self, other: &Self) -> bool
    where
        T: Clone,
    {
        if self == other {
            return false;
        }
        self.set.clone_from(&other.set);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.set.iter()
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl<T: Hash + Eq> PartialEq for SetFact<T> {
    fn eq(&self, other: &Self) -> bool {
        self.set == other.set
    }
}

impl<T: Hash + Eq> Eq for SetFact<T> {}

impl<T: fmt::Debug> fmt::Debug for SetFact<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.set.iter()).finish()
    }
}

impl<T: Hash + Eq> FromIterator<T> for SetFact<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            set: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_update_reports_changes() {
        let mut fact: MapFact<&str, i32> = MapFact::new();
        assert!(fact.update("x", 1));
        assert!(!fact.update("x", 1));
        assert!(fact.update("x", 2));
        assert_eq!(fact.get(&"x"), Some(&2));
        assert_eq!(fact.remove(&"x"), Some(2));
        assert!(fact.is_empty());
    }

    #[test]
    fn map_equality_ignores_insertion_order() {
        let a: MapFact<&str, i32> = [("x", 1), ("y", 2)].into_iter().collect();
        let b: MapFact<&str, i32> = [("y", 2), ("x", 1)].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn map_copy_from_is_a_full_overwrite() {
        let mut out: MapFact<&str, i32> = [("stale", 9)].into_iter().collect();
        let input: MapFact<&str, i32> = [("x", 1)].into_iter().collect();
        assert!(out.copy_from(&input));
        assert_eq!(out, input);
        assert!(!out.contains_key(&"stale"));
        assert!(!out.copy_from(&input));
    }

    #[test]
    fn set_union_reports_growth() {
        let mut a: SetFact<u32> = [1, 2].into_iter().collect();
        let b: SetFact<u32> = [2, 3].into_iter().collect();
        assert!(a.union_with(&b));
        assert!(!a.union_with(&b));
        assert_eq!(a.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(a.remove(&1));
        assert!(!a.contains(&1));
    }
}
