//! Controlled search input with its submit button.

use dioxus::prelude::*;

#[component]
pub fn SearchInput(query: String, on_input: EventHandler<String>) -> Element {
    let has_query = !query.trim().is_empty();

    rsx! {
        div {
            class: if has_query { "search-field has-query" } else { "search-field" },

            // Search icon
            svg {
                class: "search-icon",
                width: "16",
                height: "16",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                circle { cx: "11", cy: "11", r: "8" }
                line { x1: "21", y1: "21", x2: "16.65", y2: "16.65" }
            }

            input {
                class: "search-input",
                r#type: "text",
                placeholder: "Search categories...",
                "aria-label": "Search meal categories",
                value: "{query}",
                autofocus: true,
                oninput: move |e: Event<FormData>| on_input.call(e.value()),
            }

            button {
                class: "search-submit",
                r#type: "submit",
                "Search"
            }
        }
    }
}
