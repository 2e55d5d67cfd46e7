//! Result grid and the message shown when it is empty.

use dioxus::prelude::*;
use mealscope_core::types::Meal;

use super::meal_card::MealCard;

#[component]
pub fn MealGrid(meals: Vec<Meal>) -> Element {
    rsx! {
        section {
            class: "meal-grid",
            for meal in meals.iter() {
                MealCard { key: "{meal.id}", meal: meal.clone() }
            }
        }
    }
}

#[component]
pub fn EmptyState(query: String) -> Element {
    rsx! {
        div {
            class: "empty-state",
            div { class: "empty-state-title", "No meals found for \"{query}\"" }
            p { class: "empty-state-hint", "Try searching for another category!" }
        }
    }
}
