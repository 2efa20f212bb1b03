use crate::shared::cart::use_cart;
use leptos::prelude::*;
use leptos_router::components::A;

/// Site-wide header: navigation plus the live cart badge.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let cart = use_cart();

    view! {
        <header class="site-header">
            <div class="logo">
                <A href="/">"CabinUp"</A>
            </div>
            <nav class="site-nav">
                <A href="/">"Catalogue"</A>
                <span class="cart-link">
                    <A href="/panier">"Panier"</A>
                    {move || {
                        let count = cart.count();
                        (count > 0).then(|| view! { <span class="cart-count">{count.to_string()}</span> })
                    }}
                </span>
            </nav>
        </header>
    }
}
