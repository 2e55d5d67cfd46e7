//! Core types shared across mealscope: the static category list, meal summaries as
//! returned by TheMealDB, the filter endpoint's response envelope, and runtime config.

use serde::Deserialize;
use std::time::Duration;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Fixed category list, in display order. Also the candidate set for suggestions.
pub const CATEGORIES: &[&str] = &[
    "Beef",
    "Breakfast",
    "Chicken",
    "Dessert",
    "Goat",
    "Lamb",
    "Miscellaneous",
    "Pasta",
    "Pork",
    "Seafood",
    "Side",
    "Starter",
    "Vegan",
    "Vegetarian",
];

/// Query the page opens with.
pub const DEFAULT_QUERY: &str = "Chicken";

/// Owned copy of [`CATEGORIES`] for component props.
pub fn category_labels() -> Vec<String> {
    CATEGORIES.iter().map(|c| c.to_string()).collect()
}

// ---------------------------------------------------------------------------
// Meal summaries
// ---------------------------------------------------------------------------

/// Minimal recipe record from the filter endpoint. Taken verbatim from the response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub name: String,
    #[serde(rename = "strMealThumb")]
    pub thumbnail_url: String,
}

/// Body of `filter.php`. TheMealDB answers `{"meals": null}` when nothing matches.
#[derive(Debug, Default, Deserialize)]
pub struct FilterResponse {
    #[serde(default)]
    pub meals: Option<Vec<Meal>>,
}

impl FilterResponse {
    /// Null and missing `meals` both mean "no results".
    pub fn into_meals(self) -> Vec<Meal> {
        self.meals.unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Runtime configuration — loaded from .mealscope.toml or defaults
// ---------------------------------------------------------------------------

/// TheMealDB v1 API root using the public test key.
pub const DEFAULT_API_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealscopeConfig {
    /// API root; `filter.php` is appended to it.
    pub api_base_url: String,
    /// Query shown (and fetched) when the page first renders.
    pub initial_query: String,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for MealscopeConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            initial_query: DEFAULT_QUERY.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("mealscope/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_list_is_fixed() {
        assert_eq!(CATEGORIES.len(), 14);
        assert_eq!(CATEGORIES[0], "Beef");
        assert_eq!(CATEGORIES[13], "Vegetarian");
        assert_eq!(category_labels().len(), CATEGORIES.len());
    }

    #[test]
    fn meal_deserializes_from_api_field_names() {
        let json = r#"{"idMeal":"52940","strMeal":"Brown Stew Chicken","strMealThumb":"https://img/x.jpg","strExtra":"ignored"}"#;
        let meal: Meal = serde_json::from_str(json).unwrap();
        assert_eq!(meal.id, "52940");
        assert_eq!(meal.name, "Brown Stew Chicken");
        assert_eq!(meal.thumbnail_url, "https://img/x.jpg");
    }

    #[test]
    fn null_meals_is_empty() {
        let body: FilterResponse = serde_json::from_str(r#"{"meals":null}"#).unwrap();
        assert!(body.into_meals().is_empty());
    }

    #[test]
    fn missing_meals_is_empty() {
        let body: FilterResponse = serde_json::from_str("{}").unwrap();
        assert!(body.into_meals().is_empty());
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let result = serde_json::from_str::<FilterResponse>(r#"{"meals":"nope"}"#);
        assert!(result.is_err());
    }
}
