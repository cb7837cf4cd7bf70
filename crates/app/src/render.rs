use crate::submission::DisplayState;
use dioxus::prelude::*;
use shared_types::PredictionResult;

pub const LOADING_TEXT: &str = "⏳ Loading...";

/// Contents of the result region for the given state.
#[component]
pub fn ResultPanel(state: DisplayState) -> Element {
    match state {
        DisplayState::Idle => rsx! {},
        DisplayState::Loading => rsx! {
            span { class: "result-loading", "{LOADING_TEXT}" }
        },
        DisplayState::Results(results) => rsx! {
            h2 { "Results:" }
            {results.iter().map(result_block)}
        },
        DisplayState::Error(message) => rsx! {
            p { class: "result-error", "{message}" }
        },
        DisplayState::Failure(description) => rsx! {
            p { class: "result-error", "Error: {description}" }
        },
    }
}

/// One diagnosis block followed by a divider. Missing fields render empty.
fn result_block(result: &PredictionResult) -> Element {
    let disease = result.disease.clone().unwrap_or_default();
    let matched = result.matched_symptoms_display();
    let score = result.score_display();
    let description = result.description.clone().unwrap_or_default();
    let drugs = result.recommended_drugs.clone().unwrap_or_default();
    let tests = result.test_suggestions.clone().unwrap_or_default();
    let specialist = result.specialist.clone().unwrap_or_default();

    rsx! {
        div { class: "result-block",
            h3 { "{disease}" }
            p { strong { "Matched Symptoms:" } " {matched}" }
            p { strong { "Score:" } " {score}" }
            p { strong { "Description:" } " {description}" }
            p { strong { "Recommended Drugs:" } " {drugs}" }
            p { strong { "Test Suggestions:" } " {tests}" }
            p { strong { "Specialist:" } " {specialist}" }
            hr {}
        }
    }
}
