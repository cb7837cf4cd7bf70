use crate::client::PredictionClient;
use dioxus::prelude::*;
use shared_types::{PredictError, PredictionRequest, PredictionResponse, PredictionResult};

/// What the result region currently shows.
///
/// Each submission moves `Loading` to one of the three terminal states.
/// A new submission may start from any state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayState {
    #[default]
    Idle,
    Loading,
    /// Non-empty result list, in the order the service returned it.
    Results(Vec<PredictionResult>),
    /// The service answered but reported no results.
    Error(String),
    /// Transport or parse failure; holds the failure description.
    Failure(String),
}

impl DisplayState {
    /// Branch on a parsed response: results when present and non-empty,
    /// otherwise the service's `error` or the generic fallback.
    pub fn from_response(response: PredictionResponse) -> Self {
        match response.non_empty_results() {
            Some(results) => DisplayState::Results(results.to_vec()),
            None => DisplayState::Error(response.error_message().to_string()),
        }
    }

    pub fn from_outcome(outcome: Result<PredictionResponse, PredictError>) -> Self {
        match outcome {
            Ok(response) => Self::from_response(response),
            Err(e) => DisplayState::Failure(e.to_string()),
        }
    }
}

/// The region a submission renders into.
pub trait DisplayRegion {
    fn show(&mut self, state: DisplayState);
}

/// The live page region.
impl DisplayRegion for Signal<DisplayState> {
    fn show(&mut self, state: DisplayState) {
        self.set(state);
    }
}

/// Records every state shown, oldest first.
impl DisplayRegion for Vec<DisplayState> {
    fn show(&mut self, state: DisplayState) {
        self.push(state);
    }
}

impl<D: DisplayRegion + ?Sized> DisplayRegion for &mut D {
    fn show(&mut self, state: DisplayState) {
        (**self).show(state);
    }
}

/// Handle one form submission.
///
/// Parses `raw` into a symptom list, shows `Loading`, awaits the client and
/// shows the outcome. There is no in-flight guard: overlapping calls each
/// write their own outcome, so the last one to resolve wins the region.
pub async fn submit_symptoms<C, D>(client: &C, mut display: D, raw: &str)
where
    C: PredictionClient,
    D: DisplayRegion,
{
    let request = PredictionRequest::from_input(raw);
    display.show(DisplayState::Loading);

    tracing::info!(symptoms = request.symptoms.len(), "Submitting prediction request");
    let outcome = client.predict(&request).await;
    match &outcome {
        Ok(response) => tracing::info!(
            results = response.results.as_ref().map(Vec::len).unwrap_or(0),
            "Prediction received"
        ),
        Err(e) => tracing::warn!(error = %e, "Prediction request failed"),
    }

    display.show(DisplayState::from_outcome(outcome));
}
