//! Terminal error view.

use dioxus::prelude::*;

/// Shows `message` and a single recovery button that restarts the page.
#[component]
pub fn ErrorMessage(message: String, on_reload: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "error-screen",
            div {
                class: "error-box",
                role: "alert",
                h2 { class: "error-title", "Error!" }
                p { class: "error-text", "{message}" }
                button {
                    class: "error-reload",
                    r#type: "button",
                    onclick: move |_| on_reload.call(()),
                    "Refresh Page"
                }
            }
        }
    }
}
