//! Favorite destination ids, mirrored to a durable key-value slot.
//!
//! The storage backend is injected so the browser build can use
//! localStorage while tests use an in-memory double. All failure modes
//! degrade to in-memory-only operation; nothing here ever errors out to
//! the caller.

use std::collections::BTreeSet;


/// Key of the single slot holding the serialized id list.
pub const FAVORITES_STORAGE_KEY: &str = "favorites";

/// One durable string slot per key. `write` reports success so the store
/// can notice when persistence is unavailable (storage denied, quota).
pub trait FavoriteStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str);
}

#[derive(Debug, Clone)]
pub struct FavoritesStore<S: FavoriteStorage> {
    storage: S,
    favorite_ids: BTreeSet<String>,
}

impl<S: FavoriteStorage> FavoritesStore<S> {
    /// Load the persisted set. An absent slot starts empty; a slot that does
    /// not parse as a JSON list of strings is treated as corrupt, cleared,
    /// and replaced with an empty set.
    pub fn load(storage: S) -> Self {
        let favorite_ids = match storage.read(FAVORITES_STORAGE_KEY) {
            None => BTreeSet::new(),
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    tracing::warn!("discarding corrupt favorites slot: {e}");
                    storage.remove(FAVORITES_STORAGE_KEY);
                    BTreeSet::new()
                }
            },
        };
        Self {
            storage,
            favorite_ids,
        }
    }

    /// Add the id if absent, remove it if present. The whole set is written
    /// back to storage before returning, so a reload right after sees the
    /// new state.
    pub fn toggle(&mut self, destination_id: &str) {
        if !self.favorite_ids.remove(destination_id) {
            self.favorite_ids.insert(destination_id.to_string());
        }
        self.persist();
    }

    pub fn is_favorite(&self, destination_id: &str) -> bool {
        self.favorite_ids.contains(destination_id)
    }

    /// Current ids in stable iteration order.
    pub fn all(&self) -> &BTreeSet<String> {
        &self.favorite_ids
    }

    pub fn len(&self) -> usize {
        self.favorite_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorite_ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.favorite_ids.clear();
        self.persist();
    }

    fn persist(&self) {
        let ids = self.favorite_ids.iter().cloned().collect::<Vec<_>>();
        let serialized = match serde_json::to_string(&ids) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("failed to serialize favorites: {e}");
                return;
            }
        };
        if !self.storage.write(FAVORITES_STORAGE_KEY, &serialized) {
            // keep running on the in-memory set; state is lost on reload
            tracing::warn!("favorites storage write failed, keeping in-memory only");
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct MemoryStorage {
        slots: Rc<RefCell<BTreeMap<String, String>>>,
    }

    impl FavoriteStorage for MemoryStorage {
        fn read(&self, key: &str) -> Option<String> {
            self.slots.borrow().get(key).cloned()
        }
        fn write(&self, key: &str, value: &str) -> bool {
            self.slots
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            true
        }
        fn remove(&self, key: &str) {
            self.slots.borrow_mut().remove(key);
        }
    }

    struct BrokenStorage;

    impl FavoriteStorage for BrokenStorage {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }
        fn write(&self, _key: &str, _value: &str) -> bool {
            false
        }
        fn remove(&self, _key: &str) {}
    }

    #[test]
    fn starts_empty_without_persisted_data() {
        let store = FavoritesStore::load(MemoryStorage::default());
        assert!(store.is_empty());
    }

    #[test]
    fn toggle_twice_restores_prior_membership() {
        let mut store = FavoritesStore::load(MemoryStorage::default());
        assert!(!store.is_favorite("a"));
        store.toggle("a");
        assert!(store.is_favorite("a"));
        store.toggle("a");
        assert!(!store.is_favorite("a"));
    }

    #[test]
    fn persists_across_store_instances() {
        let storage = MemoryStorage::default();
        let mut store = FavoritesStore::load(storage.clone());
        store.toggle("a");
        store.toggle("b");

        let reloaded = FavoritesStore::load(storage);
        let expected = ["a".to_string(), "b".to_string()]
            .into_iter()
            .collect::<BTreeSet<_>>();
        assert_eq!(reloaded.all(), &expected);
    }

    #[test]
    fn corrupt_slot_is_cleared_and_load_starts_empty() {
        let storage = MemoryStorage::default();
        storage.write(FAVORITES_STORAGE_KEY, "not-json-or-wrong-shape");

        let store = FavoritesStore::load(storage.clone());
        assert!(store.is_empty());
        assert_eq!(storage.read(FAVORITES_STORAGE_KEY), None);
    }

    #[test]
    fn non_string_list_is_also_treated_as_corrupt() {
        let storage = MemoryStorage::default();
        storage.write(FAVORITES_STORAGE_KEY, "{\"a\": 1}");
        let store = FavoritesStore::load(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn write_failure_degrades_to_in_memory_operation() {
        let mut store = FavoritesStore::load(BrokenStorage);
        store.toggle("a");
        assert!(store.is_favorite("a"));
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn clear_empties_the_persisted_slot_too() {
        let storage = MemoryStorage::default();
        let mut store = FavoritesStore::load(storage.clone());
        store.toggle("a");
        store.clear();

        let reloaded = FavoritesStore::load(storage);
        assert!(reloaded.is_empty());
    }
}
