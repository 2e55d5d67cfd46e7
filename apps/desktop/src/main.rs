//! mealscope — Dioxus-powered recipe browser over TheMealDB.

use std::sync::Mutex;

use dioxus::prelude::*;
use tracing::info;

mod app;
mod components;
mod meals;
mod search;

use app::App;
use mealscope_core::load_mealscope_config;
use mealscope_core::types::MealscopeConfig;

/// Pre-runtime storage — loaded before Dioxus launches, consumed on first render.
pub static INITIAL_CONFIG: Mutex<Option<MealscopeConfig>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mealscope=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let config = load_mealscope_config(&cwd);
    info!(
        api = config.api_base_url.as_str(),
        initial_query = config.initial_query.as_str(),
        "Starting mealscope"
    );
    if let Ok(mut slot) = INITIAL_CONFIG.lock() {
        *slot = Some(config);
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((248, 250, 252, 255))
                    .with_window(
                        WindowBuilder::new()
                            .with_title("mealscope")
                            .with_inner_size(LogicalSize::new(1200.0, 900.0))
                            .with_min_inner_size(LogicalSize::new(480.0, 600.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
