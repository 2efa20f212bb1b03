//! ViewModel for the detail page: one fetched listing, the gallery
//! selection, the amenities fold and the add-to-cart command.

use crate::api::{self, ApiError};
use crate::map::{MapHandle, TileStyle};
use crate::shared::cart::{use_cart, CartContext};
use crate::shared::PLACEHOLDER_IMAGE;
use contracts::{CartEntry, CartError, Listing};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// DOM id of the detail map container.
const MAP_CONTAINER_ID: &str = "map";
/// Zoom used when centering on a single listing.
const DETAIL_ZOOM: f64 = 12.0;
/// How long the add-to-cart notice stays on screen.
const NOTICE_MS: u32 = 3000;

#[derive(Clone)]
pub struct DetailViewModel {
    pub listing: RwSignal<Option<Listing>>,
    pub loading: RwSignal<bool>,
    /// Terminal failure message, shown in place of the whole page.
    pub error: RwSignal<Option<String>>,
    /// URL of the image currently shown large.
    pub main_image: RwSignal<String>,
    /// Whether the amenities beyond the first six are unfolded.
    pub amenities_open: RwSignal<bool>,
    /// Short-lived add-to-cart feedback.
    pub notice: RwSignal<Option<String>>,
    pub cart: CartContext,
    pub map: MapHandle,
}

impl DetailViewModel {
    pub fn new() -> Self {
        Self {
            listing: RwSignal::new(None),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            main_image: RwSignal::new(PLACEHOLDER_IMAGE.to_string()),
            amenities_open: RwSignal::new(false),
            notice: RwSignal::new(None),
            cart: use_cart(),
            map: MapHandle::new(),
        }
    }

    /// Fetches the listing. One shot; any failure replaces the page with
    /// its message.
    pub fn load(&self, id: String) {
        let listing = self.listing;
        let loading = self.loading;
        let error = self.error;
        let main_image = self.main_image;

        if id.is_empty() {
            error.set(Some("Aucun logement sélectionné".to_string()));
            loading.set(false);
            return;
        }

        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match api::fetch_listing(&id).await {
                // A record without an id cannot be the one the URL named
                Ok(item) if item.id.is_none() => {
                    error.try_set(Some("Aucun logement correspondant trouvé.".to_string()));
                    loading.try_set(false);
                }
                Ok(item) => {
                    main_image.try_set(
                        item.image
                            .clone()
                            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
                    );
                    listing.try_set(Some(item));
                    loading.try_set(false);
                }
                Err(e) => {
                    log::error!("failed to load listing {}: {}", id, e);
                    error.try_set(Some(load_error_message(&e)));
                    loading.try_set(false);
                }
            }
        });
    }

    /// Shows `url` as the large image.
    pub fn select_image(&self, url: String) {
        self.main_image.set(url);
    }

    pub fn toggle_amenities(&self) {
        self.amenities_open.update(|open| *open = !*open);
    }

    /// Adds the loaded listing to the cart. A duplicate leaves the cart
    /// untouched and only flashes the notice.
    pub fn add_to_cart(&self) {
        let Some(item) = self.listing.get_untracked() else {
            return;
        };

        match self.cart.add(CartEntry::from_listing(&item, 0)) {
            Ok(()) => self.flash_notice("Logement ajouté au panier !"),
            Err(CartError::Duplicate) => {
                self.flash_notice("Ce logement est déjà dans votre panier !")
            }
        }
    }

    fn flash_notice(&self, message: &str) {
        let notice = self.notice;
        let current = message.to_string();
        notice.set(Some(current.clone()));
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_MS).await;
            // Only clear when no newer notice has replaced this one, and
            // only if the page is still alive
            let _ = notice.try_update(|n| {
                if n.as_deref() == Some(current.as_str()) {
                    *n = None;
                }
            });
        });
    }

    /// Centers the map on the listing and opens its popup. Only called for
    /// listings with coordinates; the first call creates the widget.
    pub fn show_map(&self, lat: f64, lng: f64, listing: &Listing) {
        self.map.ensure_init(MAP_CONTAINER_ID, TileStyle::Osm);
        self.map.show_single(
            lat,
            lng,
            DETAIL_ZOOM,
            &format!("<b>{} — {}</b>", listing.title, listing.city),
        );
    }
}

impl Default for DetailViewModel {
    fn default() -> Self {
        Self::new()
    }
}

/// User-facing message for a failed listing fetch. Any non-success status
/// reads as "not found", transport failures get a generic line.
fn load_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Http(status) => format!("Erreur {} : logement non trouvé", status),
        ApiError::Network(_) | ApiError::Decode(_) => {
            "Impossible de charger le logement.".to_string()
        }
    }
}
