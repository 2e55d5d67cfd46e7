//! A single recipe card.

use dioxus::prelude::*;
use mealscope_core::types::Meal;

/// Thumbnail, name, and a "View Recipe" button. The button has no action yet.
#[component]
pub fn MealCard(meal: Meal) -> Element {
    rsx! {
        article {
            class: "meal-card",
            div {
                class: "meal-thumb",
                img {
                    src: "{meal.thumbnail_url}",
                    alt: "{meal.name}",
                    "loading": "lazy",
                }
            }
            div {
                class: "meal-body",
                h3 { class: "meal-name", "{meal.name}" }
                button { class: "meal-cta", r#type: "button", "View Recipe" }
            }
        }
    }
}
