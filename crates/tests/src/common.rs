use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    routing::post,
    Router,
};
use std::sync::{Arc, Mutex};

/// A request as the stub prediction service received it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: &'static str,
    received: Arc<Mutex<Vec<CapturedRequest>>>,
}

/// Handle to a running stub of the prediction service.
pub struct StubService {
    pub base_url: String,
    received: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl StubService {
    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    pub fn received(&self) -> Vec<CapturedRequest> {
        self.received.lock().unwrap().clone()
    }
}

async fn predict(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], &'static str) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body));
    state
        .received
        .lock()
        .unwrap()
        .push(CapturedRequest { content_type, body });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// Start a stub `POST /predict` answering every request with `status` and
/// the raw `body`. Listens on an ephemeral localhost port.
pub async fn spawn_stub(status: StatusCode, body: &'static str) -> StubService {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        status,
        body,
        received: received.clone(),
    };
    let router = Router::new()
        .route("/predict", post(predict))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Stub listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Stub server failed");
    });

    StubService {
        base_url: format!("http://{addr}"),
        received,
    }
}

/// A localhost URL nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Probe listener has no address");
    drop(listener);
    format!("http://{addr}/predict")
}

pub const TWO_RESULTS: &str = r#"{
    "results": [
        {
            "Disease": "Influenza",
            "Matched_Symptoms": ["fever", "cough"],
            "Score": 0.85,
            "Description": "Viral infection of the respiratory tract",
            "Recommended_Drugs": "Oseltamivir",
            "Test_Suggestions": "Rapid influenza test",
            "Specialist": "General Physician"
        },
        {
            "Disease": "Migraine",
            "Matched_Symptoms": ["headache"],
            "Score": 0.4,
            "Description": "Recurrent headache disorder",
            "Recommended_Drugs": "Sumatriptan",
            "Test_Suggestions": "Neurological exam",
            "Specialist": "Neurologist"
        }
    ]
}"#;
