use dioxus::prelude::*;

pub mod client;
pub mod config;
pub mod render;
mod routes;
pub mod submission;

pub use client::{HttpPredictionClient, PredictionClient};
pub use routes::Route;
pub use submission::{submit_symptoms, DisplayRegion, DisplayState};

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
pub fn App() -> Element {
    use_hook(|| {
        let config = config::predictor_config();
        tracing::info!(
            platform = client_platform(),
            predict_path = %config.predict_path,
            "Predictor app started"
        );
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
