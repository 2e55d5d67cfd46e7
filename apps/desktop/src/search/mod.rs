//! Search panel — controlled input, submit button, and the suggestion dropdown.

mod search_dropdown;
mod search_input;

use dioxus::prelude::*;
use search_dropdown::SearchDropdown;
use search_input::SearchInput;

/// Search form. Submitting never navigates; it only reports upward.
#[component]
pub fn SearchPanel(
    query: String,
    suggestions: Vec<String>,
    dropdown_open: bool,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_select: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        form {
            class: "search-panel",
            onsubmit: move |e: FormEvent| {
                e.prevent_default();
                on_submit.call(());
            },

            SearchInput { query, on_input }

            if dropdown_open {
                SearchDropdown { items: suggestions, on_select, on_close }
            }
        }
    }
}
