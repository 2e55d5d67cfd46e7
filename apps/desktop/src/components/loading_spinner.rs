use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div {
            class: "loading-screen",
            div { class: "spinner", role: "status", "aria-label": "Loading meals" }
        }
    }
}
