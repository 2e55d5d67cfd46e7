//! Root application component.

use dioxus::prelude::*;

use crate::meals::Meals;
use crate::INITIAL_CONFIG;

static VARIABLES_CSS: Asset = asset!("/assets/styles/variables.css");
static MEALS_CSS: Asset = asset!("/assets/styles/meals.css");

#[component]
pub fn App() -> Element {
    // Taken once; later renders reuse the hook's copy.
    let config = use_hook(|| {
        INITIAL_CONFIG.lock().ok().and_then(|mut slot| slot.take()).unwrap_or_default()
    });

    rsx! {
        document::Stylesheet { href: VARIABLES_CSS }
        document::Stylesheet { href: MEALS_CSS }

        main {
            class: "app-shell",
            Meals { config }
        }
    }
}
