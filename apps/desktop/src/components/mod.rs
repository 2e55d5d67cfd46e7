//! Presentational components. None of them own state or touch the network;
//! interaction is reported through the handlers they are given.

mod category_list;
mod error_message;
mod loading_spinner;
mod meal_card;
mod meal_grid;

pub use category_list::CategoryList;
pub use error_message::ErrorMessage;
pub use loading_spinner::LoadingSpinner;
pub use meal_grid::{EmptyState, MealGrid};

#[cfg(test)]
pub(crate) fn render(app: fn() -> dioxus::prelude::Element) -> String {
    let mut dom = dioxus::prelude::VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
