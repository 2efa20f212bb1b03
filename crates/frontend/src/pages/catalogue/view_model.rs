//! ViewModel for the catalogue page.
//!
//! Owns the loaded collection, the applied query, the requested page and
//! the map handle. Everything shown on screen derives from those four.

use crate::api;
use crate::map::{MapHandle, TileStyle};
use contracts::{filter_items, paginate, project, Listing, Page, PAGE_SIZE};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// DOM id of the catalogue map container.
const MAP_CONTAINER_ID: &str = "map";

/// ViewModel for the catalogue page.
#[derive(Clone)]
pub struct CatalogueViewModel {
    /// Full collection as fetched; never mutated afterwards.
    pub listings: RwSignal<Vec<Listing>>,
    /// Applied search query, raw. Filtering trims and case-folds it.
    pub query: RwSignal<String>,
    /// Requested 1-based page index; clamping happens at derivation time.
    pub page: RwSignal<usize>,
    pub loading: RwSignal<bool>,
    /// Terminal failure message. Never retried.
    pub error: RwSignal<Option<String>>,
    pub map: MapHandle,
}

impl CatalogueViewModel {
    pub fn new() -> Self {
        Self {
            listings: RwSignal::new(Vec::new()),
            query: RwSignal::new(String::new()),
            page: RwSignal::new(1),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            map: MapHandle::new(),
        }
    }

    /// Fires the collection fetch. One shot: a failure is terminal and the
    /// message renders in place of the cards.
    pub fn load(&self) {
        let listings = self.listings;
        let loading = self.loading;
        let error = self.error;

        spawn_local(async move {
            match api::fetch_listings().await {
                Ok(items) => {
                    log::debug!("catalogue loaded: {} listings", items.len());
                    // The user may have left the page before the response
                    listings.try_set(items);
                    loading.try_set(false);
                }
                Err(e) => {
                    log::error!("failed to load the catalogue: {}", e);
                    error.try_set(Some("Impossible de charger les logements.".to_string()));
                    loading.try_set(false);
                }
            }
        });
    }

    /// Filtered and sliced view for the current query and page, recomputed
    /// in full on every change.
    pub fn visible(&self) -> Signal<Page<Listing>> {
        let listings = self.listings;
        let query = self.query;
        let page = self.page;
        Signal::derive(move || {
            let filtered = listings.with(|items| filter_items(items, &query.get()));
            paginate(&filtered, PAGE_SIZE, page.get())
        })
    }

    /// Applies a new query. Always returns to the first page: a stale page
    /// index into a shrunk filtered set would show an empty page.
    pub fn apply_query(&self, raw: String) {
        self.query.set(raw);
        self.page.set(1);
    }

    /// Changes only the page index; the applied filter stays as it is.
    pub fn select_page(&self, number: usize) {
        self.page.set(number);
    }

    /// Mirrors the visible page onto the map. The first call creates the
    /// widget; later calls only rebuild the markers.
    pub fn sync_map(&self, visible: &[Listing]) {
        self.map.ensure_init(MAP_CONTAINER_ID, TileStyle::Voyager);
        self.map.render(&project(visible));
    }
}

impl Default for CatalogueViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_query_resets_page() {
        let vm = CatalogueViewModel::new();
        vm.select_page(3);
        assert_eq!(vm.page.get_untracked(), 3);

        vm.apply_query("lyon".to_string());
        assert_eq!(vm.query.get_untracked(), "lyon");
        assert_eq!(vm.page.get_untracked(), 1);
    }

    #[test]
    fn test_select_page_keeps_query() {
        let vm = CatalogueViewModel::new();
        vm.apply_query("annecy".to_string());
        vm.select_page(2);
        assert_eq!(vm.query.get_untracked(), "annecy");
        assert_eq!(vm.page.get_untracked(), 2);
    }
}
