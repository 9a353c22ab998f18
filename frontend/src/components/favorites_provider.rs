//! Shared favorites state, provided once under the page layout.
//!
//! One `FavoritesStore` instance lives behind a signal for the whole app;
//! pages and cards reach it through context instead of touching storage
//! themselves.

use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::data_definitions::local_favorites::load_local_favorites;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FavoritesState {
    pub favorite_ids: ReadSignal<BTreeSet<String>>,
    pub favorite_count: ReadSignal<usize>,
    pub toggle_favorite: Callback<String>,
    pub clear_favorites: Callback<()>,
}

impl FavoritesState {
    pub fn is_favorite(&self, destination_id: &str) -> bool {
        self.favorite_ids.read().contains(destination_id)
    }
}

/// Build the store and put a [`FavoritesState`] into context. Called once
/// from the layout component.
pub fn provide_favorites_state() -> FavoritesState {
    let mut store = use_signal(load_local_favorites);

    let favorite_ids = use_memo(move || store.read().all().clone());
    let favorite_count = use_memo(move || favorite_ids.read().len());

    let toggle_favorite = Callback::new(move |destination_id: String| {
        store.write().toggle(&destination_id);
    });
    let clear_favorites = Callback::new(move |_: ()| {
        store.write().clear();
    });

    use_context_provider(move || FavoritesState {
        favorite_ids: favorite_ids.into(),
        favorite_count: favorite_count.into(),
        toggle_favorite,
        clear_favorites,
    })
}

pub fn use_favorites() -> FavoritesState {
    use_context::<FavoritesState>()
}
