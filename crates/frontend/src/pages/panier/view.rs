//! Cart page component: the saved entries on the left, the summary of the
//! selected entry on the right.

use super::view_model::PanierViewModel;
use crate::shared::components::SiteHeader;
use crate::shared::format;
use crate::shared::PLACEHOLDER_IMAGE;
use contracts::CartEntry;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn PanierPage() -> impl IntoView {
    let vm = PanierViewModel::new();
    let entries = vm.entries();
    let selected_entry = vm.selected_entry();
    let selected = vm.selected;

    view! {
        <SiteHeader />
        <main class="panier">
            <h1>"Votre panier"</h1>
            {move || {
                let items = entries.get();
                if items.is_empty() {
                    view! {
                        <div class="panier-empty">
                            <p>"Votre panier est vide."</p>
                            <A href="/">"Voir le catalogue"</A>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="panier-layout">
                            <ul class="panier-list">
                                {items
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, entry)| {
                                        entry_row(vm.clone(), index, entry, selected)
                                    })
                                    .collect_view()}
                            </ul>
                            {move || selected_entry.get().map(summary_panel)}
                        </div>
                    }
                    .into_any()
                }
            }}
        </main>
    }
}

/// One saved entry with its trip inputs.
fn entry_row(
    vm: PanierViewModel,
    index: usize,
    entry: CartEntry,
    selected: RwSignal<usize>,
) -> impl IntoView {
    let id = entry.id.clone();
    let id_for_remove = id.clone();
    let id_for_arrival = id.clone();
    let id_for_departure = id.clone();
    let id_for_nights = id.clone();
    let id_for_guests = id;

    let vm_select = vm.clone();
    let vm_remove = vm.clone();
    let vm_arrival = vm.clone();
    let vm_departure = vm.clone();
    let vm_nights = vm.clone();
    let vm_guests = vm;

    let image = entry
        .image
        .clone()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let arrival = entry.arrival.clone().unwrap_or_default();
    let departure = entry.departure.clone().unwrap_or_default();

    view! {
        <li
            class="panier-item"
            class:panier-item--selected=move || selected.get() == index
            on:click=move |_| vm_select.select(index)
        >
            <img class="panier-thumb" src=image alt=entry.title.clone() />
            <div class="panier-item-body">
                <h3>{entry.title.clone()}</h3>
                <p class="panier-item-meta">{entry.city.clone()}</p>
                <p class="panier-item-price">{format::price_per_night(entry.price)}</p>
                <div class="panier-trip">
                    <label>
                        "Arrivée"
                        <input
                            type="date"
                            prop:value=arrival
                            on:change=move |ev| {
                                vm_arrival.set_arrival(&id_for_arrival, event_target_value(&ev))
                            }
                        />
                    </label>
                    <label>
                        "Départ"
                        <input
                            type="date"
                            prop:value=departure
                            on:change=move |ev| {
                                vm_departure
                                    .set_departure(&id_for_departure, event_target_value(&ev))
                            }
                        />
                    </label>
                    <label>
                        "Nuits"
                        <input
                            type="number"
                            min="1"
                            prop:value=entry.nights.to_string()
                            on:change=move |ev| {
                                vm_nights.set_nights(&id_for_nights, &event_target_value(&ev))
                            }
                        />
                    </label>
                    <label>
                        "Voyageurs"
                        <input
                            type="number"
                            min="1"
                            prop:value=entry.guests.to_string()
                            on:change=move |ev| {
                                vm_guests.set_guests(&id_for_guests, &event_target_value(&ev))
                            }
                        />
                    </label>
                </div>
            </div>
            <button
                class="panier-remove"
                title="Retirer du panier"
                on:click=move |ev| {
                    ev.stop_propagation();
                    vm_remove.remove(&id_for_remove);
                }
            >
                "Retirer"
            </button>
        </li>
    }
}

/// Summary of the selected entry: nights, guests and the total.
fn summary_panel(entry: CartEntry) -> impl IntoView {
    let nights_label = format!(
        "{} nuit{} × {} €",
        entry.nights,
        if entry.nights > 1 { "s" } else { "" },
        entry.price
    );
    let guests_label = format!(
        "{} voyageur{}",
        entry.guests,
        if entry.guests > 1 { "s" } else { "" }
    );
    let dates = match (&entry.arrival, &entry.departure) {
        (Some(arrival), Some(departure)) => Some(format!("Du {} au {}", arrival, departure)),
        _ => None,
    };

    view! {
        <aside class="panier-summary">
            <h2>"Récapitulatif"</h2>
            <p class="summary-title">{entry.title.clone()}</p>
            <p class="summary-city">{entry.city.clone()}</p>
            {dates.map(|d| view! { <p class="summary-dates">{d}</p> })}
            <p class="summary-nights">{nights_label}</p>
            <p class="summary-guests">{guests_label}</p>
            <p class="summary-total">"Total : " {format::euros(entry.total_price())}</p>
        </aside>
    }
}
