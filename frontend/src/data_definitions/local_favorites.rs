//! Browser-local storage backend for the favorites set.

use common::favorites::{FavoriteStorage, FavoritesStore};


/// localStorage-backed slot. When the browser denies storage (private
/// windows, quota) or we are rendering on the server, every operation
/// degrades to a no-op and the favorites set lives in memory only.
#[derive(Debug, Clone, Default)]
pub struct BrowserFavoriteStorage;

impl BrowserFavoriteStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window().and_then(|window| window.local_storage().ok().flatten())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }
}

impl FavoriteStorage for BrowserFavoriteStorage {
    fn read(&self, key: &str) -> Option<String> {
        Self::local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) -> bool {
        match Self::local_storage() {
            Some(storage) => storage.set_item(key, value).is_ok(),
            None => false,
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

pub type LocalFavorites = FavoritesStore<BrowserFavoriteStorage>;

pub fn load_local_favorites() -> LocalFavorites {
    FavoritesStore::load(BrowserFavoriteStorage)
}
