//! The persisted selection ("panier"): entries, duplicate detection, trip
//! attribute edits, and the tolerant re-normalization applied to whatever
//! JSON a previous page load left behind.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::listing::{json_number, Listing, ListingId};

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// At most one entry per derived id; a second add is rejected.
    #[error("already in the cart")]
    Duplicate,
}

// ============================================================================
// Entry
// ============================================================================

/// One cart line: a listing snapshot plus the trip attributes the user can
/// edit. Serialized with the same French keys as the listing wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartEntry {
    pub id: String,
    #[serde(rename = "titre")]
    pub title: String,
    #[serde(rename = "ville")]
    pub city: String,
    #[serde(rename = "prix")]
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "capacite")]
    pub capacity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "galerie")]
    pub gallery: Vec<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub nights: u32,
    pub guests: u32,
    #[serde(rename = "arrivee", skip_serializing_if = "Option::is_none")]
    pub arrival: Option<String>,
    #[serde(rename = "depart", skip_serializing_if = "Option::is_none")]
    pub departure: Option<String>,
}

impl Default for CartEntry {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            city: String::new(),
            price: 0.0,
            description: None,
            capacity: 1,
            image: None,
            gallery: Vec::new(),
            lat: None,
            lng: None,
            nights: 1,
            guests: 1,
            arrival: None,
            departure: None,
        }
    }
}

impl CartEntry {
    /// Snapshot of a listing with default trip attributes (one night, one
    /// guest, no dates). `position` feeds the synthetic-key fallback for
    /// records without an id.
    pub fn from_listing(listing: &Listing, position: usize) -> Self {
        Self {
            id: entry_key(listing.id.as_ref(), &listing.title, listing.price, position),
            title: listing.title.clone(),
            city: listing.city.clone(),
            price: listing.price,
            description: listing.description.clone(),
            capacity: listing.capacity,
            image: listing.image.clone(),
            gallery: listing.gallery.clone(),
            lat: listing.lat,
            lng: listing.lng,
            ..Self::default()
        }
    }

    /// Price for the whole stay.
    pub fn total_price(&self) -> f64 {
        self.price * self.nights as f64
    }
}

/// Stable identity for a cart entry: the source id when the record has one,
/// otherwise a deterministic key from the title, the price in centimes and
/// the record's position. The same record yields the same key on every
/// page load, which is what the duplicate check relies on.
pub fn entry_key(source_id: Option<&ListingId>, title: &str, price: f64, position: usize) -> String {
    if let Some(id) = source_id {
        let raw = id.as_string();
        if !raw.is_empty() {
            return raw;
        }
    }

    let slug = slugify(title);
    let slug = if slug.is_empty() { "logement" } else { &slug };
    format!("{}-{}-{}", slug, (price * 100.0).round() as i64, position)
}

fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_dash = true;
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() {
            slug.push(c);
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// Whole nights covered by an arrival/departure pair in `YYYY-MM-DD` form.
/// `None` when either date fails to parse or the range is not positive.
pub fn nights_between(arrival: &str, departure: &str) -> Option<u32> {
    let arrival = NaiveDate::parse_from_str(arrival, "%Y-%m-%d").ok()?;
    let departure = NaiveDate::parse_from_str(departure, "%Y-%m-%d").ok()?;
    let nights = (departure - arrival).num_days();
    (nights > 0).then_some(nights as u32)
}

/// Partial trip edit; absent fields leave the entry untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripUpdate {
    pub arrival: Option<String>,
    pub departure: Option<String>,
    pub nights: Option<u32>,
}

// ============================================================================
// Cart
// ============================================================================

/// The whole selection. Pure collection logic; persistence wraps it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Appends an entry unless its id is already present.
    pub fn add(&mut self, entry: CartEntry) -> Result<(), CartError> {
        if self.contains(&entry.id) {
            return Err(CartError::Duplicate);
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Removes the entry with this id; `false` when it was not there.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Applies a trip edit to the matching entry. When both dates end up
    /// set and span a positive range, nights follows the range; an explicit
    /// nights value in the same update wins. Nights never drops below one.
    pub fn update_trip(&mut self, id: &str, update: TripUpdate) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };

        if let Some(arrival) = update.arrival {
            entry.arrival = none_if_blank(arrival);
        }
        if let Some(departure) = update.departure {
            entry.departure = none_if_blank(departure);
        }

        if let Some(nights) = update.nights {
            entry.nights = nights.max(1);
        } else if let (Some(arrival), Some(departure)) = (&entry.arrival, &entry.departure) {
            if let Some(nights) = nights_between(arrival, departure) {
                entry.nights = nights;
            }
        }
        true
    }

    pub fn update_guests(&mut self, id: &str, guests: u32) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        entry.guests = guests.max(1);
        true
    }

    /// Canonical serialized form of the whole collection.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_string())
    }

    /// Rebuilds a cart from whatever a previous page load persisted.
    /// Entries may come from an older schema: field aliases are reconciled,
    /// missing fields defaulted, and anything that is not an object is
    /// dropped. Corrupt input yields an empty cart, never an error.
    pub fn from_persisted(raw: &str) -> Cart {
        let Ok(value) = serde_json::from_str::<Value>(raw) else {
            return Cart::default();
        };
        let Some(items) = value.as_array() else {
            return Cart::default();
        };

        let entries = items
            .iter()
            .enumerate()
            .filter_map(|(position, item)| normalize_entry(item, position))
            .collect();
        Cart { entries }
    }
}

// ============================================================================
// Persisted-form normalization
// ============================================================================

fn normalize_entry(value: &Value, position: usize) -> Option<CartEntry> {
    let obj = value.as_object()?;

    let title = string_field(obj, &["titre", "title", "nom", "name"]).unwrap_or_default();
    let price = number_field(obj, &["prix", "price"]).unwrap_or(0.0);
    let source_id = obj.get("id").and_then(raw_id);

    Some(CartEntry {
        id: entry_key(source_id.as_ref(), &title, price, position),
        city: string_field(obj, &["ville", "city"]).unwrap_or_default(),
        description: string_field(obj, &["description"]),
        capacity: count_field(obj, &["capacite", "capacity"]).unwrap_or(1),
        image: string_field(obj, &["image", "photo"]),
        gallery: gallery_field(obj, &["galerie", "gallery"]),
        lat: number_field(obj, &["lat", "latitude"]),
        lng: number_field(obj, &["lng", "lon", "longitude"]),
        nights: count_field(obj, &["nights", "nuits"]).unwrap_or(1),
        guests: count_field(obj, &["guests", "voyageurs"]).unwrap_or(1),
        arrival: string_field(obj, &["arrivee", "arrival"]),
        departure: string_field(obj, &["depart", "departure"]),
        title,
        price,
    })
}

fn raw_id(value: &Value) -> Option<ListingId> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(ListingId::Number(i)),
            None => Some(ListingId::Text(n.to_string())),
        },
        Value::String(s) if !s.trim().is_empty() => Some(ListingId::Text(s.clone())),
        _ => None,
    }
}

/// First alias with a usable string value.
fn string_field(obj: &serde_json::Map<String, Value>, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn number_field(obj: &serde_json::Map<String, Value>, aliases: &[&str]) -> Option<f64> {
    aliases.iter().find_map(|key| obj.get(*key).and_then(json_number))
}

/// Counts (nights, guests, capacity) floor at one.
fn count_field(obj: &serde_json::Map<String, Value>, aliases: &[&str]) -> Option<u32> {
    number_field(obj, aliases).map(|n| n.max(1.0) as u32)
}

fn gallery_field(obj: &serde_json::Map<String, Value>, aliases: &[&str]) -> Vec<String> {
    aliases
        .iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_array))
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn none_if_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lyon_cabin() -> Listing {
        serde_json::from_str(
            r#"{"id": 1, "titre": "Cabane perchée en forêt", "ville": "Lyon",
                "prix": 80, "capacite": 4, "lat": 45.75, "lng": 4.85,
                "description": "Une cabane dans les arbres."}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_entry_key_prefers_source_id() {
        assert_eq!(
            entry_key(Some(&ListingId::Number(1)), "Cabane", 80.0, 0),
            "1"
        );
        assert_eq!(
            entry_key(Some(&ListingId::Text("chalet-03".into())), "Chalet", 120.0, 2),
            "chalet-03"
        );
    }

    #[test]
    fn test_entry_key_synthetic_is_deterministic() {
        let a = entry_key(None, "Cabane du lac", 80.0, 3);
        let b = entry_key(None, "Cabane du lac", 80.0, 3);
        assert_eq!(a, b);
        assert_eq!(a, "cabane-du-lac-8000-3");
        assert_eq!(entry_key(None, "", 80.0, 0), "logement-8000-0");
        // Position differentiates otherwise identical records
        assert_ne!(
            entry_key(None, "Cabane du lac", 80.0, 3),
            entry_key(None, "Cabane du lac", 80.0, 4)
        );
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut cart = Cart::default();
        cart.add(CartEntry::from_listing(&lyon_cabin(), 0)).unwrap();
        let err = cart.add(CartEntry::from_listing(&lyon_cabin(), 0));
        assert_eq!(err, Err(CartError::Duplicate));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_remove_then_reload_stays_empty() {
        let mut cart = Cart::default();
        cart.add(CartEntry::from_listing(&lyon_cabin(), 0)).unwrap();
        assert!(cart.remove("1"));
        assert!(cart.is_empty());
        assert!(!cart.remove("1"));

        let reloaded = Cart::from_persisted(&cart.to_json());
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_canonical_round_trip() {
        let mut cart = Cart::default();
        cart.add(CartEntry::from_listing(&lyon_cabin(), 0)).unwrap();
        cart.update_trip(
            "1",
            TripUpdate {
                arrival: Some("2026-03-01".into()),
                departure: Some("2026-03-04".into()),
                nights: None,
            },
        );

        let reloaded = Cart::from_persisted(&cart.to_json());
        assert_eq!(reloaded, cart);
    }

    #[test]
    fn test_normalizes_legacy_aliases() {
        let raw = r#"[{
            "id": 9,
            "title": "Gîte des vignes",
            "city": "Beaune",
            "price": "95",
            "photo": "images/gite.jpg",
            "latitude": "47.02",
            "lon": 4.84,
            "nuits": 3,
            "voyageurs": 2
        }]"#;
        let cart = Cart::from_persisted(raw);
        assert_eq!(cart.len(), 1);

        let entry = cart.get("9").unwrap();
        assert_eq!(entry.title, "Gîte des vignes");
        assert_eq!(entry.city, "Beaune");
        assert_eq!(entry.price, 95.0);
        assert_eq!(entry.image.as_deref(), Some("images/gite.jpg"));
        assert_eq!(entry.lat, Some(47.02));
        assert_eq!(entry.lng, Some(4.84));
        assert_eq!(entry.nights, 3);
        assert_eq!(entry.guests, 2);
    }

    #[test]
    fn test_defaults_missing_trip_fields() {
        let cart = Cart::from_persisted(r#"[{"id": 1, "titre": "Yourte"}]"#);
        let entry = cart.get("1").unwrap();
        assert_eq!(entry.nights, 1);
        assert_eq!(entry.guests, 1);
        assert_eq!(entry.capacity, 1);
        assert_eq!(entry.price, 0.0);
    }

    #[test]
    fn test_entry_without_id_gets_synthetic_key() {
        let cart = Cart::from_persisted(r#"[{"titre": "Roulotte", "prix": 60}]"#);
        assert_eq!(cart.entries()[0].id, "roulotte-6000-0");
    }

    #[test]
    fn test_drops_junk_entries() {
        let cart = Cart::from_persisted(r#"[42, "oops", null, {"id": 1, "titre": "Yourte"}]"#);
        assert_eq!(cart.len(), 1);

        assert!(Cart::from_persisted("not json at all").is_empty());
        assert!(Cart::from_persisted(r#"{"id": 1}"#).is_empty());
        assert!(Cart::from_persisted("[]").is_empty());
    }

    #[test]
    fn test_nights_between() {
        assert_eq!(nights_between("2026-03-01", "2026-03-04"), Some(3));
        assert_eq!(nights_between("2026-03-04", "2026-03-01"), None);
        assert_eq!(nights_between("2026-03-01", "2026-03-01"), None);
        assert_eq!(nights_between("bientôt", "2026-03-01"), None);
    }

    #[test]
    fn test_update_trip_recomputes_nights_from_dates() {
        let mut cart = Cart::default();
        cart.add(CartEntry::from_listing(&lyon_cabin(), 0)).unwrap();

        cart.update_trip(
            "1",
            TripUpdate {
                arrival: Some("2026-03-01".into()),
                departure: Some("2026-03-04".into()),
                nights: None,
            },
        );
        assert_eq!(cart.get("1").unwrap().nights, 3);

        // An explicit nights edit in the same update wins over the range
        cart.update_trip(
            "1",
            TripUpdate {
                nights: Some(5),
                ..TripUpdate::default()
            },
        );
        assert_eq!(cart.get("1").unwrap().nights, 5);

        // Inverted range leaves nights untouched
        cart.update_trip(
            "1",
            TripUpdate {
                arrival: Some("2026-03-10".into()),
                departure: Some("2026-03-04".into()),
                nights: None,
            },
        );
        assert_eq!(cart.get("1").unwrap().nights, 5);
    }

    #[test]
    fn test_update_trip_clamps_and_clears() {
        let mut cart = Cart::default();
        cart.add(CartEntry::from_listing(&lyon_cabin(), 0)).unwrap();

        cart.update_trip(
            "1",
            TripUpdate {
                nights: Some(0),
                ..TripUpdate::default()
            },
        );
        assert_eq!(cart.get("1").unwrap().nights, 1);

        cart.update_trip(
            "1",
            TripUpdate {
                arrival: Some("2026-03-01".into()),
                ..TripUpdate::default()
            },
        );
        assert_eq!(cart.get("1").unwrap().arrival.as_deref(), Some("2026-03-01"));

        // Clearing the date input sends an empty string
        cart.update_trip(
            "1",
            TripUpdate {
                arrival: Some(String::new()),
                ..TripUpdate::default()
            },
        );
        assert_eq!(cart.get("1").unwrap().arrival, None);

        assert!(!cart.update_trip("999", TripUpdate::default()));
    }

    #[test]
    fn test_update_guests_clamps_to_one() {
        let mut cart = Cart::default();
        cart.add(CartEntry::from_listing(&lyon_cabin(), 0)).unwrap();
        cart.update_guests("1", 0);
        assert_eq!(cart.get("1").unwrap().guests, 1);
        cart.update_guests("1", 4);
        assert_eq!(cart.get("1").unwrap().guests, 4);
        assert!(!cart.update_guests("999", 2));
    }

    #[test]
    fn test_total_price_follows_nights() {
        let mut entry = CartEntry::from_listing(&lyon_cabin(), 0);
        assert_eq!(entry.total_price(), 80.0);
        entry.nights = 3;
        assert_eq!(entry.total_price(), 240.0);
    }
}
