//! Projection of the visible catalogue page onto the map: price markers
//! plus the viewport the renderer should move to.

use crate::listing::Listing;

/// Default view when nothing on the current page is geocoded: metropolitan
/// France.
pub const DEFAULT_CENTER: (f64, f64) = (46.5, 2.0);
pub const DEFAULT_ZOOM: f64 = 6.0;

/// Visual padding, in pixels, applied around fitted bounds.
pub const FIT_PADDING_PX: f64 = 50.0;

/// One price marker on the catalogue map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub lat: f64,
    pub lng: f64,
    /// Compact label shown in the pin itself, e.g. "80€".
    pub label: String,
    pub popup_html: String,
}

/// Minimal bounding box over a set of marker positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    fn around(lat: f64, lng: f64) -> Self {
        Self {
            south: lat,
            west: lng,
            north: lat,
            east: lng,
        }
    }

    fn extend(&mut self, lat: f64, lng: f64) {
        self.south = self.south.min(lat);
        self.west = self.west.min(lng);
        self.north = self.north.max(lat);
        self.east = self.east.max(lng);
    }

    /// Corner form consumed by the renderer: [[south, west], [north, east]].
    pub fn corners(&self) -> [[f64; 2]; 2] {
        [[self.south, self.west], [self.north, self.east]]
    }
}

/// Where the camera goes after a redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Viewport {
    /// Fit these bounds with `FIT_PADDING_PX` of padding.
    Fit(Bounds),
    /// No geocoded results: reset to the default region.
    France,
}

/// Markers and viewport for one redraw. Rebuilt from scratch on every
/// filter or page change; stale markers are never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub markers: Vec<Marker>,
    pub viewport: Viewport,
}

/// Projects the visible page onto the map. Listings without a full numeric
/// position are skipped; with no usable position at all the scene falls
/// back to the default France viewport.
pub fn project(visible: &[Listing]) -> MapScene {
    let mut markers = Vec::new();
    let mut bounds: Option<Bounds> = None;

    for listing in visible {
        let Some((lat, lng)) = listing.position() else {
            continue;
        };

        markers.push(Marker {
            lat,
            lng,
            label: price_label(listing.price),
            popup_html: popup_html(listing),
        });

        match bounds.as_mut() {
            Some(b) => b.extend(lat, lng),
            None => bounds = Some(Bounds::around(lat, lng)),
        }
    }

    let viewport = match bounds {
        Some(b) => Viewport::Fit(b),
        None => Viewport::France,
    };

    MapScene { markers, viewport }
}

fn price_label(price: f64) -> String {
    format!("{}€", price)
}

fn popup_html(listing: &Listing) -> String {
    let image = listing
        .image
        .as_deref()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{}" style="width:100%;height:120px;object-fit:cover;border-radius:8px;margin-bottom:6px">"#,
                src, listing.city
            )
        })
        .unwrap_or_default();
    let availability = listing
        .availability
        .as_ref()
        .map(|a| format!("<small>{}</small><br>", a.label()))
        .unwrap_or_default();

    format!(
        r#"<div style="text-align:center;width:230px">{image}<strong style="font-size:16px">{city}</strong><br>{availability}<span style="font-weight:bold;color:#2f6f3f;font-size:16px">{price} € / nuit</span></div>"#,
        image = image,
        city = listing.city,
        availability = availability,
        price = listing.price,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geocoded(id: i64, city: &str, price: f64, lat: f64, lng: f64) -> Listing {
        serde_json::from_str(&format!(
            r#"{{"id": {}, "ville": "{}", "prix": {}, "lat": {}, "lng": {}}}"#,
            id, city, price, lat, lng
        ))
        .unwrap()
    }

    fn unlocated(id: i64, city: &str, price: f64) -> Listing {
        serde_json::from_str(&format!(
            r#"{{"id": {}, "ville": "{}", "prix": {}, "lat": null, "lng": null}}"#,
            id, city, price
        ))
        .unwrap()
    }

    #[test]
    fn test_skips_listings_without_position() {
        let scene = project(&[
            geocoded(1, "Lyon", 80.0, 45.75, 4.85),
            unlocated(2, "Paris", 150.0),
        ]);
        assert_eq!(scene.markers.len(), 1);
        assert_eq!((scene.markers[0].lat, scene.markers[0].lng), (45.75, 4.85));
    }

    #[test]
    fn test_empty_page_falls_back_to_france() {
        assert_eq!(project(&[]).viewport, Viewport::France);
        assert_eq!(project(&[unlocated(1, "Paris", 150.0)]).viewport, Viewport::France);
    }

    #[test]
    fn test_bounds_cover_all_markers() {
        let scene = project(&[
            geocoded(1, "Lyon", 80.0, 45.75, 4.85),
            geocoded(2, "Lille", 95.0, 50.63, 3.06),
            geocoded(3, "Nice", 120.0, 43.70, 7.27),
        ]);
        let Viewport::Fit(bounds) = scene.viewport else {
            panic!("expected fitted viewport");
        };
        assert_eq!(bounds.south, 43.70);
        assert_eq!(bounds.north, 50.63);
        assert_eq!(bounds.west, 3.06);
        assert_eq!(bounds.east, 7.27);
        assert_eq!(bounds.corners(), [[43.70, 3.06], [50.63, 7.27]]);
    }

    #[test]
    fn test_single_marker_scene() {
        let scene = project(&[geocoded(1, "Lyon", 80.0, 45.75, 4.85)]);
        assert_eq!(scene.markers.len(), 1);
        assert_eq!(scene.markers[0].label, "80€");
        assert!(scene.markers[0].popup_html.contains("Lyon"));
        assert!(scene.markers[0].popup_html.contains("80 € / nuit"));
        assert_eq!(
            scene.viewport,
            Viewport::Fit(Bounds {
                south: 45.75,
                west: 4.85,
                north: 45.75,
                east: 4.85
            })
        );
    }

    #[test]
    fn test_popup_mentions_availability_when_present() {
        let listing: Listing = serde_json::from_str(
            r#"{"id": 1, "ville": "Annecy", "prix": 110, "lat": 45.9, "lng": 6.12, "disponibilite": 2}"#,
        )
        .unwrap();
        let scene = project(&[listing]);
        assert!(scene.markers[0].popup_html.contains("2 logement(s) dispo"));
    }
}
