use shared_types::{PredictError, PredictionRequest, PredictionResponse, PredictorConfig};

/// Anything that can answer a prediction request.
///
/// The live page uses [`HttpPredictionClient`]; tests substitute in-memory
/// stubs to control timing and outcomes.
#[allow(async_fn_in_trait)]
pub trait PredictionClient {
    /// Send one request and parse the body.
    ///
    /// `Ok` means a JSON body was received and parsed, whatever the HTTP
    /// status. `Err` is reserved for transport and parse failures.
    async fn predict(&self, request: &PredictionRequest)
        -> Result<PredictionResponse, PredictError>;
}

/// `reqwest`-backed client posting JSON to the prediction endpoint.
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpPredictionClient {
    /// Client for an absolute endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Client for the endpoint described by `config`, resolved against the
    /// page `origin` when the config has no base URL.
    pub fn from_config(config: &PredictorConfig, origin: Option<&str>) -> Self {
        Self::new(config.endpoint_url(origin))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// A malformed endpoint surfaces as a builder error before anything is sent.
fn send_error(e: reqwest::Error) -> PredictError {
    if e.is_builder() {
        PredictError::config(e.to_string())
    } else {
        PredictError::network(e.to_string())
    }
}

impl PredictionClient for HttpPredictionClient {
    #[tracing::instrument(skip(self, request), fields(endpoint = %self.endpoint))]
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResponse, PredictError> {
        // `json` sets `Content-Type: application/json`.
        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| PredictError::network(e.to_string()))?;

        tracing::debug!(
            status = status.as_u16(),
            bytes = body.len(),
            "Prediction response received"
        );

        Ok(serde_json::from_slice(&body)?)
    }
}
