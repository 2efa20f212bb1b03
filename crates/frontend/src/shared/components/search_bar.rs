use leptos::prelude::*;

/// Destination search input with explicit submit: the filter applies on
/// the button or the Enter key, not on every keystroke.
#[component]
pub fn SearchBar(
    /// Currently applied query, for the active highlight.
    #[prop(into)]
    value: Signal<String>,
    /// Called with the raw input when the user submits.
    #[prop(into)]
    on_submit: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Où partez-vous ?".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());

    let submit = move || on_submit.run(input_value.get_untracked());

    let clear = move |_| {
        set_input_value.set(String::new());
        on_submit.run(String::new());
    };

    view! {
        <div class="search-bar" class:search-bar-active=move || !value.get().trim().is_empty()>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| set_input_value.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        submit();
                    }
                }
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button class="search-clear" title="Effacer" on:click=clear>"×"</button>
            })}
            <button class="search-btn" on:click=move |_| submit()>"Rechercher"</button>
        </div>
    }
}
