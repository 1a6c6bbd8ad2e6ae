// tests/ollama_bridge.rs
//
// End-to-end checks of the inference bridge against a mock Ollama endpoint
// served by axum on an ephemeral local port.

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};
use threat_dashboard::models::{ChartKind, IncidentBuilder, Role};
use threat_dashboard::{
    DashboardError, DashboardSession, FilterCriteria, IncidentRecord, OllamaClient,
};

#[derive(Clone)]
struct MockOllama {
    reply: String,
    requests: Arc<Mutex<Vec<Value>>>,
}

async fn generate(State(mock): State<MockOllama>, Json(body): Json<Value>) -> Json<Value> {
    mock.requests.lock().unwrap().push(body);
    Json(json!({ "model": "llama2", "response": mock.reply, "done": true }))
}

async fn failing() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "model not loaded")
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock endpoint");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock endpoint");
    });
    format!("http://{}", addr)
}

async fn mock_endpoint(reply: &str) -> (String, Arc<Mutex<Vec<Value>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/api/generate", post(generate))
        .with_state(MockOllama {
            reply: reply.to_string(),
            requests: Arc::clone(&requests),
        });
    (serve(app).await, requests)
}

fn record(attack: &str, loss: f64, users: u64, hours: f64) -> IncidentRecord {
    IncidentBuilder::new()
        .country("USA")
        .year(2022)
        .attack_type(attack)
        .target_industry("Finance")
        .financial_loss(loss)
        .affected_users(users)
        .attack_source("Hacker Group")
        .security_vulnerability("Social Engineering")
        .defense_mechanism("Firewall")
        .resolution_time(hours)
        .build()
        .unwrap()
}

fn records() -> Vec<IncidentRecord> {
    vec![
        record("Phishing", 1.5, 1000, 12.0),
        record("Ransomware", 2.5, 500, 20.0),
    ]
}

#[tokio::test]
async fn reply_with_chart_is_decoded_and_stripped() {
    let (endpoint, requests) = mock_endpoint(
        "## Summary\nRansomware costs more.\n{\"type\":\"bar\",\"title\":\"X\",\"data\":[{\"label\":\"a\",\"value\":1}]}",
    )
    .await;

    let mut session = DashboardSession::with_records(OllamaClient::new(&endpoint, "llama2"), records());
    let reply = session.ask("Which attack costs most?").await.expect("reply");

    let viz = reply.visualization.expect("visualization");
    assert_eq!(viz.kind(), ChartKind::Bar);
    assert_eq!(viz.title(), Some("X"));
    assert!(!reply.text.contains("\"type\""));
    assert!(reply.text.contains("Ransomware costs more."));

    let transcript = session.transcript();
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].role, Role::User);
    assert_eq!(transcript[1].role, Role::Assistant);
    assert!(transcript[1].visualization.is_some());

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0]["model"], "llama2");
    assert_eq!(requests[0]["stream"], false);
    let prompt = requests[0]["prompt"].as_str().expect("prompt string");
    assert!(prompt.contains("User question: Which attack costs most?"));
    assert!(prompt.contains("Ransomware"));
}

#[tokio::test]
async fn plain_reply_keeps_full_text() {
    let text = "## Summary\nPhishing is the most common attack.";
    let (endpoint, _) = mock_endpoint(text).await;

    let client = OllamaClient::new(&endpoint, "llama2");
    let reply = client.ask("Most common attack?", &records()).await.expect("reply");

    assert_eq!(reply.text, text);
    assert!(reply.visualization.is_none());
}

#[tokio::test]
async fn prompt_only_carries_filtered_records() {
    let (endpoint, requests) = mock_endpoint("ok").await;

    let mut session = DashboardSession::with_records(OllamaClient::new(&endpoint, "llama2"), records());
    session.set_filters(FilterCriteria {
        attack_type: Some("Phishing".to_string()),
        ..FilterCriteria::default()
    });
    session.ask("Summarize").await.expect("reply");

    let requests = requests.lock().unwrap();
    let prompt = requests[0]["prompt"].as_str().expect("prompt string");
    assert!(prompt.contains("contains 1 cyber security incidents"));
    assert!(!prompt.contains("Ransomware"));
}

#[tokio::test]
async fn error_status_names_endpoint() {
    let endpoint = serve(Router::new().route("/api/generate", post(failing))).await;

    let mut session = DashboardSession::with_records(OllamaClient::new(&endpoint, "llama2"), records());
    let err = session.ask("Anything?").await.expect_err("status 500 must fail");

    match &err {
        DashboardError::InferenceConnectivity { endpoint: named, reason } => {
            assert_eq!(named, &endpoint);
            assert!(reason.contains("500"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains(&endpoint));
    assert_eq!(session.transcript().len(), 1);
}

#[tokio::test]
async fn response_without_text_field_is_rejected() {
    async fn empty() -> Json<Value> {
        Json(json!({ "done": true }))
    }
    let endpoint = serve(Router::new().route("/api/generate", post(empty))).await;

    let client = OllamaClient::new(&endpoint, "llama2");
    let result = client.ask("Anything?", &records()).await;

    assert!(matches!(
        result,
        Err(DashboardError::InferenceConnectivity { .. })
    ));
}
