//! ViewModel for the cart page: the selection index plus edit commands
//! delegating to the app-wide cart context.

use crate::shared::cart::{use_cart, CartContext};
use contracts::{CartEntry, TripUpdate};
use leptos::prelude::*;

#[derive(Clone)]
pub struct PanierViewModel {
    pub cart: CartContext,
    /// Index of the entry whose summary is shown.
    pub selected: RwSignal<usize>,
}

impl PanierViewModel {
    pub fn new() -> Self {
        Self {
            cart: use_cart(),
            selected: RwSignal::new(0),
        }
    }

    pub fn entries(&self) -> Signal<Vec<CartEntry>> {
        let cart = self.cart.cart;
        Signal::derive(move || cart.with(|c| c.entries().to_vec()))
    }

    /// Entry backing the summary panel. Falls back to the first entry when
    /// the index no longer exists.
    pub fn selected_entry(&self) -> Signal<Option<CartEntry>> {
        let cart = self.cart.cart;
        let selected = self.selected;
        Signal::derive(move || {
            cart.with(|c| {
                let entries = c.entries();
                entries
                    .get(selected.get())
                    .or_else(|| entries.first())
                    .cloned()
            })
        })
    }

    pub fn select(&self, index: usize) {
        self.selected.set(index);
    }

    /// Removes an entry and fixes the selection in the same step: removing
    /// the selected entry falls back to the first remaining one, removing
    /// an earlier entry keeps the same entry selected.
    pub fn remove(&self, id: &str) {
        let index = self
            .cart
            .cart
            .with_untracked(|c| c.entries().iter().position(|e| e.id == id));
        let Some(index) = index else { return };

        if !self.cart.remove(id) {
            return;
        }

        let selected = self.selected.get_untracked();
        if index == selected {
            self.selected.set(0);
        } else if index < selected {
            self.selected.set(selected - 1);
        }
    }

    pub fn set_arrival(&self, id: &str, value: String) {
        self.cart.update_trip(
            id,
            TripUpdate {
                arrival: Some(value),
                ..TripUpdate::default()
            },
        );
    }

    pub fn set_departure(&self, id: &str, value: String) {
        self.cart.update_trip(
            id,
            TripUpdate {
                departure: Some(value),
                ..TripUpdate::default()
            },
        );
    }

    /// Direct nights edit; wins over the date range.
    pub fn set_nights(&self, id: &str, raw: &str) {
        let Ok(nights) = raw.trim().parse::<u32>() else {
            return;
        };
        self.cart.update_trip(
            id,
            TripUpdate {
                nights: Some(nights),
                ..TripUpdate::default()
            },
        );
    }

    pub fn set_guests(&self, id: &str, raw: &str) {
        let Ok(guests) = raw.trim().parse::<u32>() else {
            return;
        };
        self.cart.update_guests(id, guests);
    }
}

impl Default for PanierViewModel {
    fn default() -> Self {
        Self::new()
    }
}
