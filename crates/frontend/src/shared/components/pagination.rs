use contracts::{page_buttons, PageButton};
use leptos::prelude::*;

/// Row of page buttons, one per page. Selecting a page never touches the
/// applied filter; the caller only re-slices.
#[component]
pub fn Pagination(
    #[prop(into)]
    page_count: Signal<usize>,
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)]
    on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            {move || {
                page_buttons(page_count.get(), current_page.get())
                    .into_iter()
                    .map(|PageButton { number, active }| {
                        view! {
                            <button
                                class=if active { "active" } else { "" }
                                on:click=move |_| on_select.run(number)
                            >
                                {number.to_string()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
