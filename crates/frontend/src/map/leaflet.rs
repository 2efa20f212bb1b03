//! Minimal wasm-bindgen surface over the Leaflet global `L`.
//!
//! Only the calls the app actually makes are declared. Option objects
//! cross the boundary as plain JS objects. `iconSize` must be a literal
//! null (undefined would fall back to Leaflet's built-in default size),
//! so the icon options are assembled with `Reflect` instead of serde.

use js_sys::{Array, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type Map;

    /// `L.map(id, options)`
    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container_id: &str, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &JsValue, zoom: f64);

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &Map, corners: &JsValue, options: &JsValue);

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &Map);
}

#[wasm_bindgen]
extern "C" {
    pub type TileLayer;

    /// `L.tileLayer(urlTemplate, options)`
    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn new_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map);
}

#[wasm_bindgen]
extern "C" {
    pub type LayerGroup;

    /// `L.layerGroup()`
    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    pub fn new_layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &LayerGroup, map: &Map);

    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &LayerGroup);
}

#[wasm_bindgen]
extern "C" {
    pub type Marker;

    /// `L.marker(latLng, options)`
    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn new_marker(lat_lng: &JsValue, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Marker, layer: &LayerGroup) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, html: &str) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    pub fn open_popup(this: &Marker);
}

#[wasm_bindgen]
extern "C" {
    pub type DivIcon;

    /// `L.divIcon(options)`
    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    pub fn new_div_icon(options: &JsValue) -> DivIcon;
}

/// Tile layer options; serialized straight into the JS options object.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileOptions<'a> {
    pub attribution: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subdomains: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_zoom: Option<u32>,
}

impl TileOptions<'_> {
    pub fn to_js(&self) -> JsValue {
        serde_wasm_bindgen::to_value(self).unwrap_or(JsValue::UNDEFINED)
    }
}

/// `L.map` options.
pub fn map_options(zoom_control: bool) -> JsValue {
    let options = Object::new();
    let _ = Reflect::set(&options, &"zoomControl".into(), &zoom_control.into());
    options.into()
}

/// `[lat, lng]` pair.
pub fn lat_lng(lat: f64, lng: f64) -> JsValue {
    Array::of2(&lat.into(), &lng.into()).into()
}

/// `[[south, west], [north, east]]` for `fitBounds`.
pub fn bounds_corners(corners: [[f64; 2]; 2]) -> JsValue {
    let result = Array::new();
    for corner in corners {
        result.push(&Array::of2(&corner[0].into(), &corner[1].into()));
    }
    result.into()
}

/// `fitBounds` options with symmetric pixel padding.
pub fn fit_options(padding: f64) -> JsValue {
    let options = Object::new();
    let padding_pair = Array::of2(&padding.into(), &padding.into());
    let _ = Reflect::set(&options, &"padding".into(), &padding_pair);
    options.into()
}

/// Options for the price pin: a CSS-sized div icon whose html is the
/// price label.
pub fn price_icon_options(html: &str) -> JsValue {
    let options = Object::new();
    let _ = Reflect::set(&options, &"className".into(), &"price-marker".into());
    let _ = Reflect::set(&options, &"html".into(), &html.into());
    let _ = Reflect::set(&options, &"iconSize".into(), &JsValue::NULL);
    let anchor = Array::of2(&JsValue::from_f64(30.0), &JsValue::from_f64(20.0));
    let _ = Reflect::set(&options, &"iconAnchor".into(), &anchor);
    options.into()
}

/// Marker options carrying a prebuilt icon.
pub fn marker_icon_options(icon: &DivIcon) -> JsValue {
    let options = Object::new();
    let _ = Reflect::set(&options, &"icon".into(), icon.as_ref());
    options.into()
}
