//! Cart page: the saved selection and its summary.
//!
//! MVVM split:
//! - view_model.rs: selection state and edit commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::PanierPage;
pub use view_model::PanierViewModel;
