//! Catalogue page: the fetched collection, free-text filtering,
//! pagination and the map mirroring the visible page.
//!
//! MVVM split:
//! - view_model.rs: page state and commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CataloguePage;
pub use view_model::CatalogueViewModel;
