//! Listing domain model, mapped onto the French wire format of the data
//! source (`titre`, `ville`, `prix`, ...). Unknown fields are ignored and
//! partially filled records still deserialize.

use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Listing identifier as found on the wire: either a JSON number or a string.
/// Round-trips in its original shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    Number(i64),
    Text(String),
}

impl ListingId {
    pub fn as_string(&self) -> String {
        match self {
            ListingId::Number(n) => n.to_string(),
            ListingId::Text(s) => s.clone(),
        }
    }

    /// Compares against the raw string form used in URLs and cart keys.
    pub fn matches(&self, raw: &str) -> bool {
        match self {
            ListingId::Number(n) => n.to_string() == raw,
            ListingId::Text(s) => s == raw,
        }
    }
}

// ============================================================================
// Availability
// ============================================================================

/// Availability comes in two wire shapes: a remaining-unit count or a free
/// descriptive label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Availability {
    Units(u32),
    Label(String),
}

impl Availability {
    /// Display text: a unit count renders as "N logement(s) dispo", a label
    /// passes through unchanged.
    pub fn label(&self) -> String {
        match self {
            Availability::Units(n) => format!("{} logement(s) dispo", n),
            Availability::Label(s) => s.clone(),
        }
    }
}

// ============================================================================
// Listing
// ============================================================================

/// One rental listing. Immutable once loaded; owned by the catalogue state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Some records in the wild carry no usable id; they still render, and
    /// the cart falls back to a synthetic key for them.
    #[serde(default)]
    pub id: Option<ListingId>,
    #[serde(rename = "titre", default)]
    pub title: String,
    #[serde(rename = "ville", default)]
    pub city: String,
    /// Nightly price.
    #[serde(rename = "prix", default)]
    pub price: f64,
    #[serde(rename = "capacite", default = "default_capacity")]
    pub capacity: u32,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coord")]
    pub lng: Option<f64>,
    #[serde(rename = "disponibilite", default)]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(rename = "galerie", default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "equipements", default)]
    pub amenities: Vec<String>,
}

impl Listing {
    /// String form of the id for URLs and lookups; empty when the record
    /// carries none.
    pub fn id_string(&self) -> String {
        self.id
            .as_ref()
            .map(ListingId::as_string)
            .unwrap_or_default()
    }

    /// Both coordinates, or `None` when either is missing. Only listings
    /// with a full position appear on the map.
    pub fn position(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

fn default_capacity() -> u32 {
    1
}

/// Reads a JSON value as a number, accepting the numeric-string form that
/// shows up in hand-edited data files.
pub(crate) fn json_number(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_coord<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(json_number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let raw = r#"{
            "id": 7,
            "titre": "Cabane perchée en forêt",
            "ville": "Lyon",
            "prix": 80,
            "capacite": 4,
            "lat": 45.75,
            "lng": 4.85,
            "disponibilite": 3,
            "image": "images/cabane.jpg",
            "galerie": ["images/cabane-2.jpg", "images/cabane-3.jpg"],
            "description": "Une cabane dans les arbres.",
            "equipements": ["Wifi", "Cheminée"],
            "proprietaire": "ignored"
        }"#;
        let listing: Listing = serde_json::from_str(raw).unwrap();
        assert_eq!(listing.id_string(), "7");
        assert_eq!(listing.title, "Cabane perchée en forêt");
        assert_eq!(listing.city, "Lyon");
        assert_eq!(listing.price, 80.0);
        assert_eq!(listing.capacity, 4);
        assert_eq!(listing.position(), Some((45.75, 4.85)));
        assert_eq!(listing.availability, Some(Availability::Units(3)));
        assert_eq!(listing.gallery.len(), 2);
        assert_eq!(listing.amenities.len(), 2);
    }

    #[test]
    fn test_sparse_record_gets_defaults() {
        let listing: Listing = serde_json::from_str(r#"{"titre": "Yourte"}"#).unwrap();
        assert_eq!(listing.id, None);
        assert_eq!(listing.id_string(), "");
        assert_eq!(listing.price, 0.0);
        assert_eq!(listing.capacity, 1);
        assert!(listing.gallery.is_empty());
        assert!(listing.amenities.is_empty());
        assert_eq!(listing.position(), None);
    }

    #[test]
    fn test_lenient_coordinates() {
        let listing: Listing =
            serde_json::from_str(r#"{"id": 1, "lat": "45.75", "lng": null}"#).unwrap();
        assert_eq!(listing.lat, Some(45.75));
        assert_eq!(listing.lng, None);

        let listing: Listing =
            serde_json::from_str(r#"{"id": 2, "lat": "nord", "lng": 4.85}"#).unwrap();
        assert_eq!(listing.lat, None);
        assert_eq!(listing.lng, Some(4.85));
        assert_eq!(listing.position(), None);
    }

    #[test]
    fn test_id_wire_forms() {
        let numeric: Listing = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(numeric.id, Some(ListingId::Number(42)));
        assert!(numeric.id.unwrap().matches("42"));

        let text: Listing = serde_json::from_str(r#"{"id": "chalet-03"}"#).unwrap();
        assert_eq!(text.id_string(), "chalet-03");
    }

    #[test]
    fn test_id_round_trip_keeps_shape() {
        let numeric = serde_json::to_string(&ListingId::Number(5)).unwrap();
        assert_eq!(numeric, "5");
        let text = serde_json::to_string(&ListingId::Text("5".into())).unwrap();
        assert_eq!(text, "\"5\"");
    }

    #[test]
    fn test_availability_label() {
        assert_eq!(Availability::Units(3).label(), "3 logement(s) dispo");
        assert_eq!(
            Availability::Label("Complet en août".into()).label(),
            "Complet en août"
        );
    }
}
