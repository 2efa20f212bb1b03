//! Catalogue page component: destination search above a card grid, the
//! map beside it, pagination below.

use super::view_model::CatalogueViewModel;
use crate::shared::components::{Pagination, SearchBar, SiteHeader};
use crate::shared::format;
use crate::shared::PLACEHOLDER_IMAGE;
use contracts::Listing;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn CataloguePage() -> impl IntoView {
    let vm = CatalogueViewModel::new();
    vm.load();

    let visible = vm.visible();
    let loading = vm.loading;
    let error = vm.error;

    // Redraws the markers whenever the visible page changes. The first run
    // after a successful load also creates the Leaflet widget; on failure
    // the map is never initialized, like the rest of the page.
    Effect::new({
        let vm = vm.clone();
        move || {
            if loading.get() || error.with(|e| e.is_some()) {
                return;
            }
            vm.sync_map(&visible.get().items);
        }
    });

    let on_submit = {
        let vm = vm.clone();
        Callback::new(move |raw: String| vm.apply_query(raw))
    };
    let on_select_page = {
        let vm = vm.clone();
        Callback::new(move |number: usize| vm.select_page(number))
    };

    view! {
        <SiteHeader />
        <main class="catalogue">
            <SearchBar value=vm.query on_submit=on_submit />
            <section class="catalogue-layout">
                <div class="cards" id="cardsContainer">
                    {move || {
                        if loading.get() {
                            view! { <p class="loading">"Chargement des logements..."</p> }
                                .into_any()
                        } else if let Some(message) = error.get() {
                            view! { <p class="error">{message}</p> }.into_any()
                        } else {
                            view! {
                                {visible
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(listing_card)
                                    .collect_view()}
                            }
                            .into_any()
                        }
                    }}
                </div>
                <div class="catalogue-map" id="map"></div>
            </section>
            {move || {
                (!loading.get() && error.with(|e| e.is_none())).then(|| {
                    view! {
                        <Pagination
                            page_count=Signal::derive(move || visible.get().page_count)
                            current_page=Signal::derive(move || visible.get().page)
                            on_select=on_select_page
                        />
                    }
                })
            }}
        </main>
    }
}

/// One catalogue card, linking to the listing's detail page.
fn listing_card(listing: Listing) -> impl IntoView {
    let href = format!("/logement/{}", listing.id_string());
    let meta = format!(
        "{} • {}",
        listing.city,
        format::capacity_label(listing.capacity)
    );
    let availability = listing.availability.as_ref().map(|a| a.label());
    let price = format::price_per_night(listing.price);
    let image = listing
        .image
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let title = listing.title;

    view! {
        <A href=href attr:class="card">
            <img src=image alt=title.clone() />
            <div class="card-body">
                <div class="card-content">
                    <h3>{title}</h3>
                    <p>{meta}</p>
                    {availability.map(|label| view! { <span class="available">{label}</span> })}
                </div>
                <p class="price">{price}</p>
            </div>
        </A>
    }
}
