//! Insertion-ordered entity storage keyed by id.
//!
//! Entities are never removed, so a slot handed out once stays valid for the
//! life of the store.

use std::collections::HashMap;
use std::hash::Hash;

pub(crate) struct Store<K, V> {
    items: Vec<V>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for Store<K, V> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash, V> Store<K, V> {
    pub(crate) fn insert(&mut self, key: K, value: V) -> usize {
        let slot = self.items.len();
        self.items.push(value);
        self.index.insert(key, slot);
        slot
    }

    pub(crate) fn slot(&self, key: &K) -> Option<usize> {
        self.index.get(key).copied()
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        self.slot(key).map(|slot| &self.items[slot])
    }

    pub(crate) fn at(&self, slot: usize) -> &V {
        &self.items[slot]
    }

    pub(crate) fn at_mut(&mut self, slot: usize) -> &mut V {
        &mut self.items[slot]
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, V> {
        self.items.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}
