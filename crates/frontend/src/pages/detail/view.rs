//! Detail page component: gallery, description, amenities, location map
//! and the add-to-cart action.

use super::view_model::DetailViewModel;
use crate::shared::components::SiteHeader;
use crate::shared::format;
use crate::shared::PLACEHOLDER_IMAGE;
use contracts::Listing;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// How many amenities stay visible while the list is folded.
const AMENITIES_FOLD: usize = 6;

#[component]
pub fn DetailPage() -> impl IntoView {
    let params = use_params_map();
    let vm = DetailViewModel::new();

    // Reloads when the id segment changes; the router reuses the component
    // between two detail URLs.
    Effect::new({
        let vm = vm.clone();
        move || {
            let id = params.with(|p| p.get("id").unwrap_or_default());
            vm.load(id);
        }
    });

    // The map container only exists once a listing with a position has
    // rendered; this re-runs at that point.
    Effect::new({
        let vm = vm.clone();
        move || {
            let Some(item) = vm.listing.get() else {
                return;
            };
            if let Some((lat, lng)) = item.position() {
                vm.show_map(lat, lng, &item);
            }
        }
    });

    let loading = vm.loading;
    let error = vm.error;
    let listing = vm.listing;

    view! {
        <SiteHeader />
        {move || {
            if loading.get() {
                view! { <p class="loading">"Chargement du logement..."</p> }.into_any()
            } else if let Some(message) = error.get() {
                view! { <h2 class="error">{message}</h2> }.into_any()
            } else if let Some(item) = listing.get() {
                listing_detail(vm.clone(), item).into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}

/// Ready-state body for one listing.
fn listing_detail(vm: DetailViewModel, item: Listing) -> impl IntoView {
    let main_image = vm.main_image;
    let notice = vm.notice;
    let amenities_open = vm.amenities_open;

    let title = item.title.clone();
    let images = gallery_images(&item);
    let thumbs = images
        .iter()
        .skip(1)
        .map(|url| {
            let select = {
                let vm = vm.clone();
                let url = url.clone();
                move |_| vm.select_image(url.clone())
            };
            view! {
                <div class="thumb__detail" on:click=select>
                    <img src=url.clone() alt=title.clone() />
                </div>
            }
        })
        .collect_view();

    let meta_city = item.city.clone();
    let capacity = format::capacity_short(item.capacity);
    let availability = item.availability.as_ref().map(|a| a.label());
    let price = format::euros(item.price);
    let description = item.description.clone().unwrap_or_default();
    let has_position = item.position().is_some();

    let visible_amenities: Vec<String> = item
        .amenities
        .iter()
        .take(AMENITIES_FOLD)
        .cloned()
        .collect();
    let hidden_amenities: Vec<String> = item
        .amenities
        .iter()
        .skip(AMENITIES_FOLD)
        .cloned()
        .collect();
    let has_hidden = !hidden_amenities.is_empty();

    let on_add = {
        let vm = vm.clone();
        move |_| vm.add_to_cart()
    };
    let on_toggle = {
        let vm = vm.clone();
        move |_| vm.toggle_amenities()
    };

    view! {
        <main class="detail">
            <section class="gallery__detail">
                <img id="product-image" src=move || main_image.get() alt=title.clone() />
                <div class="thumbs__detail">{thumbs}</div>
            </section>
            <section class="info__detail">
                <h1 id="product-title">{title.clone()}</h1>
                <p class="meta__detail">
                    <span>{meta_city}</span>
                    " • "
                    <span>{capacity}</span>
                </p>
                {availability.map(|label| view! { <span class="available">{label}</span> })}
                <p id="product-price">
                    {price}
                    <span class="muted__detail">" / nuit"</span>
                </p>
                <div id="product-desc">
                    <p>{description}</p>
                </div>
                <section class="amenities__detail">
                    <h2>"Équipements"</h2>
                    <div class="amen-grid__detail">
                        {visible_amenities.into_iter().map(amenity_item).collect_view()}
                        <div id="moreAmenities" class:hidden__detail=move || !amenities_open.get()>
                            {hidden_amenities.into_iter().map(amenity_item).collect_view()}
                        </div>
                    </div>
                    {has_hidden
                        .then(|| {
                            view! {
                                <button id="toggleAmenities" on:click=on_toggle>
                                    {move || {
                                        if amenities_open.get() { "Voir moins" } else { "Voir plus" }
                                    }}
                                </button>
                            }
                        })}
                </section>
                <button id="add-to-cart" on:click=on_add>
                    "Ajouter au panier"
                </button>
                {move || notice.get().map(|message| view! { <div class="notice">{message}</div> })}
            </section>
            {has_position.then(|| view! { <div id="map" class="map__detail"></div> })}
        </main>
    }
}

/// Main image first, then the gallery shots.
fn gallery_images(item: &Listing) -> Vec<String> {
    let mut images = vec![item
        .image
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())];
    images.extend(item.gallery.iter().cloned());
    images
}

fn amenity_item(label: String) -> impl IntoView {
    view! {
        <div class="amen__detail">
            <i class="fa-solid fa-check"></i>
            <span>{label}</span>
        </div>
    }
}
