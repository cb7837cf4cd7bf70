use serde::{Deserialize, Serialize};

/// Base URL used when neither configuration nor the page origin supply one.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Default path of the prediction endpoint.
pub const DEFAULT_PREDICT_PATH: &str = "/predict";

fn default_predict_path() -> String {
    DEFAULT_PREDICT_PATH.to_string()
}

/// Where the prediction service lives.
///
/// Every field defaults so that a missing or partial `predictor.toml`
/// still yields a working same-origin `/predict` setup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictorConfig {
    /// Absolute base URL (`scheme://host[:port]`). When unset the page
    /// origin is used, then [`DEFAULT_API_BASE`].
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default = "default_predict_path")]
    pub predict_path: String,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            predict_path: default_predict_path(),
        }
    }
}

impl PredictorConfig {
    /// Resolve the full endpoint URL.
    ///
    /// Precedence for the base: configured `api_base`, then `origin`,
    /// then [`DEFAULT_API_BASE`]. Blank values are skipped.
    pub fn endpoint_url(&self, origin: Option<&str>) -> String {
        let base = self
            .api_base
            .as_deref()
            .filter(|b| !b.trim().is_empty())
            .or(origin.filter(|o| !o.trim().is_empty()))
            .unwrap_or(DEFAULT_API_BASE);
        join_url(base.trim(), self.predict_path.trim())
    }
}

/// Join a base URL and a path with exactly one `/` between them.
fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{path}")
    }
}

/// Top-level structure of `predictor.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClientConfig {
    #[serde(default)]
    pub predictor: PredictorConfig,
}
