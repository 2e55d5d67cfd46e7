//! Test harness for meal fetch integration tests.
//!
//! Runs an axum stand-in for TheMealDB's `filter.php` on an ephemeral local port
//! and records the `c` parameter of every request it receives.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use mealscope_core::api::MealDbClient;
use mealscope_core::types::MealscopeConfig;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Canned reply for one category.
#[derive(Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn json(body: serde_json::Value) -> Self {
        Self { status: StatusCode::OK, body: body.to_string() }
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self { status, body: body.to_string() }
    }
}

#[derive(Default)]
struct MockState {
    replies: HashMap<String, Reply>,
    requests: Vec<String>,
}

#[derive(Deserialize)]
struct FilterQuery {
    c: String,
}

async fn filter(
    State(state): State<Arc<Mutex<MockState>>>,
    Query(q): Query<FilterQuery>,
) -> impl IntoResponse {
    let mut state = state.lock().unwrap();
    state.requests.push(q.c.clone());
    let reply = state
        .replies
        .get(&q.c)
        .cloned()
        .unwrap_or_else(|| Reply::json(serde_json::json!({ "meals": null })));
    (reply.status, [("content-type", "application/json")], reply.body)
}

pub struct MockMealDb {
    pub base_url: String,
    state: Arc<Mutex<MockState>>,
}

impl MockMealDb {
    /// Bind to 127.0.0.1:0 and serve in the background of the current runtime.
    pub async fn start() -> Self {
        let state = Arc::new(Mutex::new(MockState::default()));
        let app = Router::new()
            .route("/api/json/v1/1/filter.php", get(filter))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind mock server");
        let addr = listener.local_addr().expect("mock server address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock server crashed");
        });

        Self { base_url: format!("http://{addr}/api/json/v1/1"), state }
    }

    pub fn reply(&self, category: &str, reply: Reply) {
        self.state.lock().unwrap().replies.insert(category.to_string(), reply);
    }

    /// `c` values received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn client(&self) -> MealDbClient {
        let config = MealscopeConfig {
            api_base_url: self.base_url.clone(),
            request_timeout: Duration::from_secs(5),
            ..Default::default()
        };
        MealDbClient::new(&config).expect("build client")
    }
}

/// `{"meals": [...]}` body with the given (id, name) pairs.
pub fn meals_body(meals: &[(&str, &str)]) -> serde_json::Value {
    let meals: Vec<serde_json::Value> = meals
        .iter()
        .map(|(id, name)| {
            serde_json::json!({
                "idMeal": id,
                "strMeal": name,
                "strMealThumb": format!("https://www.themealdb.com/images/media/meals/{id}.jpg"),
            })
        })
        .collect();
    serde_json::json!({ "meals": meals })
}
