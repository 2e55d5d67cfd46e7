//! Suggestion dropdown under the search input.

use dioxus::prelude::*;

/// One row per suggestion. Picking a row reports it, then asks to be closed.
/// With no items the list is still rendered, just empty.
#[component]
pub fn SearchDropdown(
    items: Vec<String>,
    on_select: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        ul {
            class: "search-dropdown",
            role: "listbox",
            for item in items.iter() {
                li {
                    key: "{item}",
                    class: "search-suggestion",
                    role: "option",
                    onclick: {
                        let item = item.clone();
                        move |_| {
                            on_select.call(item.clone());
                            on_close.call(());
                        }
                    },
                    "{item}"
                }
            }
        }
    }
}
