use crate::common::{spawn_stub, unreachable_url, TWO_RESULTS};
use app::{HttpPredictionClient, PredictionClient};
use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use shared_types::{PredictErrorKind, PredictionRequest, PredictorConfig};

#[tokio::test]
async fn posts_trimmed_symptoms_as_json() {
    let stub = spawn_stub(StatusCode::OK, TWO_RESULTS).await;
    let client = HttpPredictionClient::new(stub.predict_url());

    client
        .predict(&PredictionRequest::from_input("fever, cough ,headache"))
        .await
        .expect("prediction should succeed");

    let received = stub.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(
        received[0].body,
        serde_json::json!({ "symptoms": ["fever", "cough", "headache"] })
    );
}

#[tokio::test]
async fn parses_results_with_service_key_names() {
    let stub = spawn_stub(StatusCode::OK, TWO_RESULTS).await;
    let client = HttpPredictionClient::new(stub.predict_url());

    let response = client
        .predict(&PredictionRequest::from_input("fever"))
        .await
        .unwrap();

    let results = response.results.unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].disease.as_deref(), Some("Influenza"));
    assert_eq!(results[0].matched_symptoms_display(), "fever, cough");
    assert_eq!(results[1].specialist.as_deref(), Some("Neurologist"));
}

#[tokio::test]
async fn non_success_status_with_json_body_is_still_parsed() {
    let stub = spawn_stub(StatusCode::NOT_FOUND, r#"{"error":"No matching diseases found."}"#).await;
    let client = HttpPredictionClient::new(stub.predict_url());

    let response = client
        .predict(&PredictionRequest::from_input("xyz"))
        .await
        .expect("a JSON body is a response, not a failure");

    assert!(response.results.is_none());
    assert_eq!(response.error.as_deref(), Some("No matching diseases found."));
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let stub = spawn_stub(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").await;
    let client = HttpPredictionClient::new(stub.predict_url());

    let err = client
        .predict(&PredictionRequest::from_input("fever"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, PredictErrorKind::InvalidResponse);
}

#[tokio::test]
async fn unreachable_service_is_network_error() {
    let client = HttpPredictionClient::new(unreachable_url().await);

    let err = client
        .predict(&PredictionRequest::from_input("fever"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, PredictErrorKind::Network);
}

#[tokio::test]
async fn config_base_routes_to_stub() {
    let stub = spawn_stub(StatusCode::OK, "{}").await;
    let config = PredictorConfig {
        api_base: Some(format!("{}/", stub.base_url)),
        ..Default::default()
    };
    let client = HttpPredictionClient::from_config(&config, None);

    let response = client
        .predict(&PredictionRequest::from_input("fever"))
        .await
        .unwrap();

    assert_eq!(stub.received().len(), 1);
    assert_eq!(response.error_message(), "No results found");
}
