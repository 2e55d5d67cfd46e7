//! Category chips.

use dioxus::prelude::*;

/// Renders each category as a chip; clicking one reports its label.
#[component]
pub fn CategoryList(categories: Vec<String>, on_select: EventHandler<String>) -> Element {
    rsx! {
        ul {
            class: "category-list",
            for (i, category) in categories.iter().enumerate() {
                li {
                    key: "{i}",
                    class: "category-chip",
                    onclick: {
                        let category = category.clone();
                        move |_| on_select.call(category.clone())
                    },
                    "{category}"
                }
            }
        }
    }
}
