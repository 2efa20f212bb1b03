//! Detail page for a single listing.
//!
//! MVVM split:
//! - view_model.rs: page state and commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::DetailPage;
pub use view_model::DetailViewModel;
