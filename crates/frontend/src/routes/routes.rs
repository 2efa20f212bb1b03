use crate::pages::catalogue::CataloguePage;
use crate::pages::detail::DetailPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::panier::PanierPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=CataloguePage />
                <Route path=path!("/logement/:id") view=DetailPage />
                <Route path=path!("/panier") view=PanierPage />
            </Routes>
        </Router>
    }
}
