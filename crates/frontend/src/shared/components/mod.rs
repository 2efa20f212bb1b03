pub mod header;
pub mod pagination;
pub mod search_bar;

// Re-exports
pub use header::SiteHeader;
pub use pagination::Pagination;
pub use search_bar::SearchBar;
