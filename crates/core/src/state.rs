//! View state for the meals page.
//!
//! [`MealsState`] owns everything the page renders and applies user events to it.
//! It never performs I/O: operations that need data return a [`FetchTicket`], the
//! caller runs the fetch, and hands the outcome back through
//! [`MealsState::complete_fetch`]. Each ticket carries a [`RequestToken`]; only the
//! most recently issued token may change the page, so overlapping fetches cannot
//! overwrite newer results.

use tracing::debug;

use crate::api::FetchError;
use crate::suggest::{filter_categories, normalize_needle, wants_suggestions};
use crate::types::{Meal, CATEGORIES};

/// Which view the page renders. Never more than one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Loading,
    Error(String),
    Ready,
}

/// Sequence number of an issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(pub u64);

/// Instruction to fetch meals for `category` and report back with `token`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a ticket does nothing until the fetch is run"]
pub struct FetchTicket {
    pub token: RequestToken,
    pub category: String,
}

#[derive(Debug, Clone)]
pub struct MealsState {
    query: String,
    meals: Vec<Meal>,
    status: Status,
    dropdown_open: bool,
    suggestions: Vec<String>,
    initial_query: String,
    /// Last token handed out; the only one `complete_fetch` accepts.
    latest: Option<RequestToken>,
    next_token: u64,
}

impl MealsState {
    pub fn new(initial_query: impl Into<String>) -> Self {
        let initial_query = initial_query.into();
        Self {
            query: initial_query.clone(),
            meals: Vec::new(),
            status: Status::Ready,
            dropdown_open: false,
            suggestions: Vec::new(),
            initial_query,
            latest: None,
            next_token: 0,
        }
    }

    // -- read access -------------------------------------------------------

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == Status::Loading
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn latest_token(&self) -> Option<RequestToken> {
        self.latest
    }

    // -- fetch lifecycle ---------------------------------------------------

    /// Enter `Loading` and issue a ticket that supersedes every earlier one.
    pub fn begin_fetch(&mut self, category: impl Into<String>) -> FetchTicket {
        self.next_token += 1;
        let token = RequestToken(self.next_token);
        self.latest = Some(token);
        self.status = Status::Loading;

        let category = category.into();
        debug!(token = token.0, category = category.as_str(), "Issued fetch");
        FetchTicket { token, category }
    }

    /// Apply the outcome of a fetch. Returns `false` if `token` was superseded and
    /// the outcome was dropped.
    ///
    /// On error the previous meals are kept; the error view hides them anyway.
    pub fn complete_fetch(
        &mut self,
        token: RequestToken,
        outcome: Result<Vec<Meal>, FetchError>,
    ) -> bool {
        if self.latest != Some(token) {
            debug!(token = token.0, latest = ?self.latest.map(|t| t.0), "Discarding stale fetch result");
            return false;
        }

        match outcome {
            Ok(meals) => {
                self.meals = meals;
                self.status = Status::Ready;
            }
            Err(err) => {
                self.status = Status::Error(err.to_string());
            }
        }
        true
    }

    // -- user events -------------------------------------------------------

    /// First render: load the initial query unless it is blank.
    pub fn on_mount(&mut self) -> Option<FetchTicket> {
        if self.query.trim().is_empty() {
            return None;
        }
        Some(self.begin_fetch(self.query.clone()))
    }

    /// Form submit. Blank queries are ignored and leave the state untouched.
    pub fn on_submit(&mut self) -> Option<FetchTicket> {
        if self.query.trim().is_empty() {
            return None;
        }
        self.dropdown_open = false;
        Some(self.begin_fetch(self.query.clone()))
    }

    /// Keystroke in the search field.
    pub fn on_query_change(&mut self, text: impl Into<String>) {
        self.query = text.into();

        let needle = normalize_needle(&self.query);
        if wants_suggestions(&needle) {
            self.suggestions =
                filter_categories(&needle, CATEGORIES).into_iter().map(String::from).collect();
            self.dropdown_open = true;
        } else {
            // Keep the last suggestions; they come back if the dropdown reopens.
            self.dropdown_open = false;
        }
    }

    /// Category chip clicked: search it right away.
    pub fn on_category_click(&mut self, category: impl Into<String>) -> FetchTicket {
        self.query = category.into();
        self.dropdown_open = false;
        self.begin_fetch(self.query.clone())
    }

    /// Dropdown row picked: fill the input only. The user still has to submit.
    pub fn on_suggestion_select(&mut self, category: impl Into<String>) {
        self.query = category.into();
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    /// Start the page over from its initial query. Tokens keep counting so any
    /// fetch still in flight from before the reload is ignored when it lands.
    pub fn reload(&mut self) -> Option<FetchTicket> {
        self.query = self.initial_query.clone();
        self.meals.clear();
        self.suggestions.clear();
        self.dropdown_open = false;
        self.status = Status::Ready;
        self.latest = None;
        self.on_mount()
    }
}

impl Default for MealsState {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_QUERY)
    }
}
