use crate::shared::components::SiteHeader;
use leptos::prelude::*;
use leptos_router::components::A;

/// Fallback for unknown routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <SiteHeader />
        <main class="not-found">
            <h2>"Page introuvable"</h2>
            <p>"Cette page n'existe pas."</p>
            <A href="/">"Retour au catalogue"</A>
        </main>
    }
}
