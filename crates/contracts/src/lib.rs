//! Shared contracts: the listing domain model and the pure view-state core
//! (filtering, pagination, map projection, cart) used by both the frontend
//! and the data server.

pub mod cart;
pub mod geo;
pub mod listing;
pub mod pagination;
pub mod search;

// Re-exports
pub use cart::{entry_key, nights_between, Cart, CartEntry, CartError, TripUpdate};
pub use geo::{project, Bounds, MapScene, Marker, Viewport};
pub use listing::{Availability, Listing, ListingId};
pub use pagination::{clamp_page, page_buttons, page_count, paginate, Page, PageButton, PAGE_SIZE};
pub use search::{filter_items, Searchable};
