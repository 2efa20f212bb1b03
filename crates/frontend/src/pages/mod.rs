//! Route pages. Each page keeps the same split: a view model owning the
//! page state and commands, and a view rendering it.

pub mod catalogue;
pub mod detail;
pub mod not_found;
pub mod panier;
