use crate::client::HttpPredictionClient;
use crate::config::predictor_config;
use crate::render::ResultPanel;
use crate::submission::{submit_symptoms, DisplayState};
use dioxus::prelude::*;
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, Input, Label,
    PageHeader, PageTitle,
};
use std::future::Future;

/// Origin of the page serving the app. `None` off the web or when the lookup fails.
async fn page_origin() -> Option<String> {
    if !cfg!(feature = "web") {
        return None;
    }
    match document::eval("return window.location.origin;")
        .join::<String>()
        .await
    {
        Ok(origin) => Some(origin),
        Err(e) => {
            tracing::warn!(error = ?e, "Could not read page origin, endpoint falls back to config");
            None
        }
    }
}

/// The origin remembered in `known`, looked up first if it is not known yet.
///
/// A failed lookup is not remembered, so the next submit tries again.
async fn remembered_origin<F, Fut>(known: &mut Option<String>, lookup: F) -> Option<String>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Option<String>>,
{
    if known.is_none() {
        *known = lookup().await;
    }
    known.clone()
}

/// Symptom entry form with its result region.
///
/// Every submit spawns an independent request; nothing stops a second
/// submit while the first is still loading.
#[component]
pub fn Predict() -> Element {
    let mut symptoms = use_signal(String::new);
    let display = use_signal(DisplayState::default);
    let mut origin = use_signal(|| None::<String>);

    let handle_submit = move |_evt: FormEvent| async move {
        let raw = symptoms();
        let mut known = origin();
        let base = remembered_origin(&mut known, page_origin).await;
        origin.set(known);
        let client = HttpPredictionClient::from_config(predictor_config(), base.as_deref());
        submit_symptoms(&client, display, &raw).await;
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./predict.css") }

        div { class: "predict-page",
            PageHeader {
                PageTitle { "AI Medical Disease Predictor" }
            }
            p { class: "predict-intro",
                "Predict possible diseases from your symptoms."
            }

            Card {
                class: "predict-card",

                CardHeader {
                    CardTitle { "Symptoms" }
                    CardDescription { "Separate symptoms with commas." }
                }

                CardContent {
                    Form { id: "predict-form", onsubmit: handle_submit,
                        div { class: "predict-field",
                            Label { html_for: "symptoms", "Symptoms" }
                            Input {
                                id: "symptoms",
                                placeholder: "fever, headache, stomach pain",
                                value: symptoms(),
                                on_input: move |e: FormEvent| symptoms.set(e.value()),
                            }
                        }
                        Button { class: "predict-submit", button_type: "submit", "Predict" }
                    }
                }
            }

            div { id: "result", class: "predict-result",
                ResultPanel { state: display() }
            }
        }
    }
}
