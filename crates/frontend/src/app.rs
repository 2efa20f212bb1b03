use crate::routes::routes::AppRoutes;
use crate::shared::cart::CartProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        // The cart context wraps everything: the header badge reads it on
        // every page and the detail page mutates it.
        <CartProvider>
            <AppRoutes />
        </CartProvider>
    }
}
