//! Leaflet integration: an init-once map handle with full clear-and-
//! rebuild marker rendering.

pub mod leaflet;

use contracts::geo::{MapScene, Viewport, DEFAULT_CENTER, DEFAULT_ZOOM, FIT_PADDING_PX};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

const VOYAGER_TILES: &str =
    "https://{s}.basemaps.cartocdn.com/rastertiles/voyager/{z}/{x}/{y}{r}.png";
const VOYAGER_ATTRIBUTION: &str = r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> | <a href="https://carto.com/">CARTO</a>"#;
const OSM_TILES: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const OSM_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// Which basemap a page uses.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum TileStyle {
    /// CARTO voyager, on the catalogue.
    Voyager,
    /// Plain OSM, on the detail page.
    Osm,
}

struct MapParts {
    map: leaflet::Map,
    markers: leaflet::LayerGroup,
}

/// Owning handle for one page's Leaflet map. The underlying widget is
/// created at most once per page lifetime; calling `ensure_init` again is
/// a no-op and re-entry only redraws markers.
#[derive(Clone, Copy)]
pub struct MapHandle {
    parts: StoredValue<Option<MapParts>, LocalStorage>,
}

impl MapHandle {
    pub fn new() -> Self {
        Self {
            parts: StoredValue::new_local(None),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.parts.with_value(|parts| parts.is_some())
    }

    /// Creates the map inside `container_id` unless it already exists,
    /// then schedules an `invalidateSize` so tile measurement happens
    /// after the first layout settles.
    pub fn ensure_init(&self, container_id: &str, style: TileStyle) {
        if self.is_initialized() {
            log::debug!("map already initialized, skipping");
            return;
        }

        let map = leaflet::new_map(container_id, &leaflet::map_options(true));
        map.set_view(
            &leaflet::lat_lng(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            DEFAULT_ZOOM,
        );

        let (url, options) = match style {
            TileStyle::Voyager => (
                VOYAGER_TILES,
                leaflet::TileOptions {
                    attribution: VOYAGER_ATTRIBUTION,
                    subdomains: Some("abcd"),
                    max_zoom: Some(20),
                },
            ),
            TileStyle::Osm => (
                OSM_TILES,
                leaflet::TileOptions {
                    attribution: OSM_ATTRIBUTION,
                    subdomains: None,
                    max_zoom: None,
                },
            ),
        };
        leaflet::new_tile_layer(url, &options.to_js()).add_to(&map);

        let markers = leaflet::new_layer_group();
        markers.add_to(&map);

        self.parts.set_value(Some(MapParts { map, markers }));
        self.invalidate_size_soon();
    }

    /// Redraws a scene: every marker is cleared and rebuilt, then the
    /// camera moves to the scene's viewport.
    pub fn render(&self, scene: &MapScene) {
        self.parts.with_value(|parts| {
            let Some(parts) = parts else { return };

            parts.markers.clear_layers();
            for marker in &scene.markers {
                let icon = leaflet::new_div_icon(&leaflet::price_icon_options(&marker.label));
                leaflet::new_marker(
                    &leaflet::lat_lng(marker.lat, marker.lng),
                    &leaflet::marker_icon_options(&icon),
                )
                .add_to(&parts.markers)
                .bind_popup(&marker.popup_html);
            }

            match &scene.viewport {
                Viewport::Fit(bounds) => parts.map.fit_bounds(
                    &leaflet::bounds_corners(bounds.corners()),
                    &leaflet::fit_options(FIT_PADDING_PX),
                ),
                Viewport::France => parts.map.set_view(
                    &leaflet::lat_lng(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
                    DEFAULT_ZOOM,
                ),
            }
        });
    }

    /// Detail-page mode: center on one position and show a single default
    /// marker with its popup already open.
    pub fn show_single(&self, lat: f64, lng: f64, zoom: f64, popup_html: &str) {
        self.parts.with_value(|parts| {
            let Some(parts) = parts else { return };

            parts.map.set_view(&leaflet::lat_lng(lat, lng), zoom);
            parts.markers.clear_layers();
            leaflet::new_marker(&leaflet::lat_lng(lat, lng), &JsValue::UNDEFINED)
                .add_to(&parts.markers)
                .bind_popup(popup_html)
                .open_popup();
        });
    }

    fn invalidate_size_soon(&self) {
        let parts = self.parts;
        spawn_local(async move {
            TimeoutFuture::new(300).await;
            // The page may have been disposed while we waited
            let _ = parts.try_with_value(|parts| {
                if let Some(parts) = parts {
                    parts.map.invalidate_size();
                }
            });
        });
    }
}
