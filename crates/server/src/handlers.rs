//! HTTP handlers for the listings API.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use contracts::Listing;

use crate::store;

/// GET /logements
pub async fn get_listings() -> Json<Vec<Listing>> {
    let listings = store::get().all().to_vec();
    tracing::debug!("Serving {} listings", listings.len());
    Json(listings)
}

/// GET /logements/:id
pub async fn get_listing(Path(id): Path<String>) -> Result<Json<Listing>, StatusCode> {
    match store::get().find(&id) {
        Some(listing) => Ok(Json(listing.clone())),
        None => {
            tracing::warn!("Listing not found: {}", id);
            Err(StatusCode::NOT_FOUND)
        }
    }
}
