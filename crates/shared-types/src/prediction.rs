use serde::{Deserialize, Serialize};

/// Fallback shown when the service answers without results or an error string.
pub const NO_RESULTS_MESSAGE: &str = "No results found";

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Ordered symptom tokens parsed from the free-text input.
///
/// Built by splitting on `,` and trimming each piece. Empty pieces are kept,
/// so `"a,,b"` yields three entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct SymptomList(pub Vec<String>);

impl SymptomList {
    /// Parse the raw comma-separated input.
    pub fn parse(raw: &str) -> Self {
        Self(raw.split(',').map(|s| s.trim().to_string()).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Body of `POST /predict`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    pub symptoms: SymptomList,
}

impl PredictionRequest {
    pub fn from_input(raw: &str) -> Self {
        Self {
            symptoms: SymptomList::parse(raw),
        }
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

/// One candidate diagnosis returned by the prediction service.
///
/// Key names are fixed by the service. Every field is optional on the wire;
/// a missing field is carried as `None` and rendered as an empty gap.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    #[serde(rename = "Disease", default)]
    pub disease: Option<String>,
    #[serde(rename = "Matched_Symptoms", default)]
    pub matched_symptoms: Option<Vec<String>>,
    #[serde(rename = "Score", default)]
    pub score: Option<f64>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Recommended_Drugs", default)]
    pub recommended_drugs: Option<String>,
    #[serde(rename = "Test_Suggestions", default)]
    pub test_suggestions: Option<String>,
    #[serde(rename = "Specialist", default)]
    pub specialist: Option<String>,
}

impl PredictionResult {
    /// Matched symptoms joined with `", "`, or empty when absent.
    pub fn matched_symptoms_display(&self) -> String {
        self.matched_symptoms
            .as_deref()
            .map(|s| s.join(", "))
            .unwrap_or_default()
    }

    /// Score formatted the way a browser prints a JS number
    /// (`1` for 1.0, `0.85` for 0.85).
    pub fn score_display(&self) -> String {
        self.score.map(|s| s.to_string()).unwrap_or_default()
    }
}

/// Response body of `POST /predict`, whatever the HTTP status.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PredictionResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<PredictionResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PredictionResponse {
    pub fn with_results(results: Vec<PredictionResult>) -> Self {
        Self {
            results: Some(results),
            error: None,
        }
    }

    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            results: None,
            error: Some(message.into()),
        }
    }

    /// Results only when present and non-empty.
    ///
    /// An empty list is treated the same as a missing one.
    pub fn non_empty_results(&self) -> Option<&[PredictionResult]> {
        self.results.as_deref().filter(|r| !r.is_empty())
    }

    /// The `error` string, or the generic fallback when it is missing or empty.
    pub fn error_message(&self) -> &str {
        self.error
            .as_deref()
            .filter(|e| !e.is_empty())
            .unwrap_or(NO_RESULTS_MESSAGE)
    }
}
