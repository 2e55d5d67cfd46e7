//! Meals page — owns the page state, runs fetches, and picks the view for the
//! current status.

use dioxus::prelude::*;
use tracing::{debug, info};

use mealscope_core::api::{FetchError, MealDbClient};
use mealscope_core::state::{FetchTicket, MealsState, Status};
use mealscope_core::types::{category_labels, MealscopeConfig};

use crate::components::{CategoryList, EmptyState, ErrorMessage, LoadingSpinner, MealGrid};
use crate::search::SearchPanel;

/// Client build result; a failed build surfaces on the first fetch as a transport error.
type ClientSignal = Signal<Result<MealDbClient, FetchError>>;

#[component]
pub fn Meals(config: MealscopeConfig) -> Element {
    let client: ClientSignal = use_signal(|| MealDbClient::new(&config));

    // Issue the mount fetch before the first frame so it already shows the spinner.
    let state = use_hook(|| {
        let mut page = MealsState::new(config.initial_query.clone());
        let ticket = page.on_mount();
        let state = Signal::new(page);
        if let Some(ticket) = ticket {
            spawn_fetch(state, client, ticket);
        }
        state
    });

    rsx! { MealsView { state, client } }
}

/// Picks the view for the current status and wires child events into `state`.
#[component]
fn MealsView(state: Signal<MealsState>, client: ClientSignal) -> Element {
    let mut state = state;
    let page = state.read();

    match page.status() {
        Status::Loading => rsx! { LoadingSpinner {} },
        Status::Error(message) => rsx! {
            ErrorMessage {
                message: message.clone(),
                on_reload: move |_| {
                    let ticket = state.write().reload();
                    if let Some(ticket) = ticket {
                        spawn_fetch(state, client, ticket);
                    }
                },
            }
        },
        Status::Ready => {
            let query = page.query().to_string();
            let subtitle = query.to_lowercase();

            rsx! {
                div {
                    class: "meals-page",

                    header {
                        class: "meals-header",
                        h1 { class: "meals-title", "{query} Specialties" }
                        p { class: "meals-subtitle", "Discover delicious {subtitle} recipes" }
                    }

                    SearchPanel {
                        query: query.clone(),
                        suggestions: page.suggestions().to_vec(),
                        dropdown_open: page.dropdown_open(),
                        on_input: move |text: String| state.write().on_query_change(text),
                        on_submit: move |_| {
                            let ticket = state.write().on_submit();
                            if let Some(ticket) = ticket {
                                spawn_fetch(state, client, ticket);
                            }
                        },
                        on_select: move |category: String| state.write().on_suggestion_select(category),
                        on_close: move |_| state.write().close_dropdown(),
                    }

                    section {
                        class: "categories",
                        h2 { class: "section-title", "Popular Categories" }
                        CategoryList {
                            categories: category_labels(),
                            on_select: move |category: String| {
                                let ticket = state.write().on_category_click(category);
                                spawn_fetch(state, client, ticket);
                            },
                        }
                    }

                    MealGrid { meals: page.meals().to_vec() }

                    if page.meals().is_empty() {
                        EmptyState { query: query.clone() }
                    }
                }
            }
        }
    }
}

/// Run `ticket` on the runtime and feed the outcome back into the page state.
fn spawn_fetch(mut state: Signal<MealsState>, client: ClientSignal, ticket: FetchTicket) {
    let client = (*client.peek()).clone();
    spawn(async move {
        let outcome = match client {
            Ok(client) => client.fetch_by_category(&ticket.category).await,
            Err(err) => Err(err),
        };
        let count = outcome.as_ref().map(Vec::len).ok();

        if state.write().complete_fetch(ticket.token, outcome) {
            if let Some(count) = count {
                info!(category = ticket.category.as_str(), count, "Loaded meals");
            }
        } else {
            debug!(category = ticket.category.as_str(), "Superseded fetch finished");
        }
    });
}
