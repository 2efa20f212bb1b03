pub mod cart;
pub mod components;
pub mod format;

/// Shown wherever a listing carries no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "/assets/images/placeholder.jpg";
