//! mealscope core — everything the recipe browser does that is not rendering.
//!
//! # Modules
//!
//! - [`types`] — Categories, meal summaries, API envelope, runtime config
//! - [`suggest`] — Case-insensitive substring suggestions over the category list
//! - [`api`] — TheMealDB `filter.php` client and [`api::FetchError`]
//! - [`state`] — Page state machine with request-token guarded fetches

pub mod api;
pub mod state;
pub mod suggest;
pub mod types;

use std::path::Path;
use std::time::Duration;

use tracing::{debug, warn};

use types::MealscopeConfig;

// ---------------------------------------------------------------------------
// .mealscope.toml config loading
// ---------------------------------------------------------------------------

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".mealscope.toml";

/// Known keys in `.mealscope.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] =
    &["api_base_url", "initial_query", "request_timeout_secs", "user_agent"];

/// Levenshtein distance over chars, used to suggest the intended config key.
fn edit_distance(a: &str, b: &str) -> usize {
    let target: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=target.len()).collect();
    for (i, ca) in a.chars().enumerate() {
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, &cb) in target.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb { diag } else { 1 + diag.min(above).min(row[j]) };
            diag = above;
        }
    }
    row[target.len()]
}

/// Load runtime configuration from `.mealscope.toml` in `dir`.
///
/// Missing file means defaults. A file that fails to parse, or values of the wrong
/// type, are logged and ignored; loading never fails. Unknown keys trigger a
/// warning with a typo suggestion.
pub fn load_mealscope_config(dir: &Path) -> MealscopeConfig {
    let mut config = MealscopeConfig::default();
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        return config;
    }

    debug!("Loading {CONFIG_FILE_NAME}");
    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "Failed to read {CONFIG_FILE_NAME}");
            return config;
        }
    };
    let table = match content.parse::<toml::Table>() {
        Ok(t) => t,
        Err(e) => {
            warn!(error = %e, "Failed to parse {CONFIG_FILE_NAME}");
            return config;
        }
    };

    for key in table.keys() {
        if KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            continue;
        }
        let suggestion = KNOWN_CONFIG_KEYS
            .iter()
            .min_by_key(|k| edit_distance(key, k))
            .copied()
            .unwrap_or_default();
        if edit_distance(key, suggestion) <= 3 {
            warn!(
                key = key.as_str(),
                suggestion,
                "Unknown key in {CONFIG_FILE_NAME} — did you mean '{suggestion}'?"
            );
        } else {
            warn!(
                key = key.as_str(),
                "Unknown key in {CONFIG_FILE_NAME} (known keys: {})",
                KNOWN_CONFIG_KEYS.join(", ")
            );
        }
    }

    if let Some(url) = table.get("api_base_url").and_then(|v| v.as_str()) {
        config.api_base_url = url.to_string();
    }

    if let Some(query) = table.get("initial_query").and_then(|v| v.as_str()) {
        config.initial_query = query.to_string();
    }

    match table.get("request_timeout_secs").map(|v| v.as_integer()) {
        Some(Some(secs)) if secs > 0 => config.request_timeout = Duration::from_secs(secs as u64),
        Some(_) => warn!("request_timeout_secs must be a positive integer; using default"),
        None => {}
    }

    if let Some(agent) = table.get("user_agent").and_then(|v| v.as_str()) {
        config.user_agent = agent.to_string();
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DEFAULT_API_BASE_URL, DEFAULT_QUERY, DEFAULT_TIMEOUT_SECS};
    use tempfile::TempDir;

    fn write_config(content: &str) -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), content).unwrap();
        dir
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = load_mealscope_config(dir.path());
        assert_eq!(config, MealscopeConfig::default());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.initial_query, DEFAULT_QUERY);
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn overrides_are_applied() {
        let dir = write_config(
            r#"
api_base_url = "http://127.0.0.1:8080/api"
initial_query = "Dessert"
request_timeout_secs = 5
user_agent = "test-agent"
"#,
        );
        let config = load_mealscope_config(dir.path());
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080/api");
        assert_eq!(config.initial_query, "Dessert");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn unknown_keys_and_bad_values_keep_defaults() {
        let dir = write_config("inital_query = \"Goat\"\nrequest_timeout_secs = \"soon\"\n");
        let config = load_mealscope_config(dir.path());
        assert_eq!(config.initial_query, DEFAULT_QUERY);
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn invalid_toml_gives_defaults() {
        let dir = write_config("this is = = not toml");
        assert_eq!(load_mealscope_config(dir.path()), MealscopeConfig::default());
    }

    #[test]
    fn edit_distance_basics() {
        assert_eq!(edit_distance("inital_query", "initial_query"), 1);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("same", "same"), 0);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("user_agnet", "user_agent"), 2);
    }

    #[test]
    fn edit_distance_counts_chars_not_bytes() {
        assert_eq!(edit_distance("é", "e"), 1);
        assert_eq!(edit_distance("initial_quéry", "initial_query"), 1);
    }
}
